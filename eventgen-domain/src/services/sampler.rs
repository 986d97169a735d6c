// Weighted event type selection

use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::Rng;

use crate::entities::EventTypeWeights;
use crate::error::SettingsError;
use crate::value_objects::EventType;

/// Categorical sampler over the event types.
///
/// Each draw consumes a single uniform sample which is located in the
/// cumulative weight table, so float rounding can only shift a boundary,
/// never produce an index outside the table.
#[derive(Debug, Clone)]
pub struct EventTypeSampler {
    kinds: Vec<EventType>,
    index: WeightedIndex<f64>,
}

impl EventTypeSampler {
    pub fn new(weights: &EventTypeWeights) -> Result<Self, SettingsError> {
        weights.validate()?;
        let pairs = weights.pairs();
        let index = WeightedIndex::new(pairs.iter().map(|(_, weight)| *weight)).map_err(|_| {
            SettingsError::WeightSum {
                sum: pairs.iter().map(|(_, weight)| weight).sum(),
            }
        })?;
        Ok(Self {
            kinds: pairs.iter().map(|(kind, _)| *kind).collect(),
            index,
        })
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> EventType {
        self.kinds[self.index.sample(rng)]
    }
}
