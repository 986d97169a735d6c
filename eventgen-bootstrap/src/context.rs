use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use rand::Rng;

use eventgen_application::{GeneratorState, RunRequest};
use eventgen_infrastructure::{validate_week_count, AppConfig, FsArchiveStore, ZipArchiveEncoder};

use crate::lifecycle::RunOptions;

pub struct GeneratorContext {
    pub state: GeneratorState,
    pub request: RunRequest,
    pub seed: u64,
}

impl GeneratorContext {
    /// Resolves configuration and validates it before anything touches disk.
    pub async fn new(options: &RunOptions) -> Result<Self> {
        let mut config = AppConfig::load(options.config.as_deref())
            .await
            .context("loading configuration")?;
        if let Some(output_dir) = &options.output_dir {
            config.output_dir = output_dir.clone();
        }
        if let Some(start_date) = &options.start_date {
            config.start_date = start_date.clone();
        }
        if options.seed.is_some() {
            config.seed = options.seed;
        }
        config.normalize();

        validate_week_count(options.count).context("invalid configuration")?;
        config.validate().context("invalid configuration")?;
        let start_date = config.start_date().context("invalid configuration")?;

        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        let mut settings = config.to_generation_settings();
        settings.seed = Some(seed);

        let state = GeneratorState::new(
            settings,
            Arc::new(ZipArchiveEncoder),
            Arc::new(FsArchiveStore::new()),
        )
        .context("invalid configuration")?;

        Ok(Self {
            state,
            request: RunRequest {
                start_date,
                num_weeks: options.count,
                output_dir: PathBuf::from(&config.output_dir),
            },
            seed,
        })
    }
}
