// Event factory
// Builds one random event for a given timestamp

use std::ops::RangeInclusive;

use chrono::NaiveDateTime;
use rand::Rng;

use crate::entities::{Event, GenerationSettings};
use crate::error::SettingsError;
use crate::services::{Catalog, EventTypeSampler};

#[derive(Debug, Clone)]
pub struct EventFactory {
    catalog: Catalog,
    sampler: EventTypeSampler,
    quantity: RangeInclusive<u8>,
}

impl EventFactory {
    pub fn new(settings: &GenerationSettings) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(Self {
            catalog: Catalog::new(settings.customer_id_count, settings.product_id_count),
            sampler: EventTypeSampler::new(&settings.event_type_weights)?,
            quantity: settings.quantity_min..=settings.quantity_max,
        })
    }

    /// Draws type, customer, product and (for purchases) quantity, in that order.
    pub fn create_event<R: Rng + ?Sized>(&self, rng: &mut R, timestamp: NaiveDateTime) -> Event {
        let event_type = self.sampler.sample(rng);
        let customer_id = self.catalog.pick_customer(rng);
        let product_id = self.catalog.pick_product(rng);
        let quantity = if event_type.carries_quantity() {
            Some(rng.random_range(self.quantity.clone()))
        } else {
            None
        };

        Event {
            timestamp,
            customer_id,
            event_type,
            product_id,
            quantity,
        }
    }
}
