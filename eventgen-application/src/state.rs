use std::sync::Arc;

use eventgen_domain::ports::{ArchiveEncoder, ArchiveStore};
use eventgen_domain::services::{DayPlanner, EventFactory};
use eventgen_domain::GenerationSettings;

use crate::{FixtureError, GenerationMetrics};

#[derive(Clone)]
pub struct GeneratorState {
    pub settings: GenerationSettings,
    pub factory: Arc<EventFactory>,
    pub planner: DayPlanner,
    pub encoder: Arc<dyn ArchiveEncoder>,
    pub store: Arc<dyn ArchiveStore>,
    pub metrics: Arc<GenerationMetrics>,
}

impl GeneratorState {
    pub fn new(
        settings: GenerationSettings,
        encoder: Arc<dyn ArchiveEncoder>,
        store: Arc<dyn ArchiveStore>,
    ) -> Result<Self, FixtureError> {
        let factory = EventFactory::new(&settings)?;
        Ok(Self {
            planner: DayPlanner::new(&settings),
            factory: Arc::new(factory),
            settings,
            encoder,
            store,
            metrics: Arc::new(GenerationMetrics::default()),
        })
    }
}
