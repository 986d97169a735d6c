// Generation settings entity
// Shape of the fixture: nesting counts, catalog sizes and event mix

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::value_objects::EventType;

/// Largest gap between two consecutive events of the same day.
pub const MAX_STEP_SECONDS: u64 = 60;
pub const SECONDS_PER_DAY: u64 = 86_400;
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventTypeWeights {
    pub view_product: f64,
    pub add_to_cart: f64,
    pub purchase: f64,
}

impl Default for EventTypeWeights {
    fn default() -> Self {
        Self {
            view_product: 0.70,
            add_to_cart: 0.25,
            purchase: 0.05,
        }
    }
}

impl EventTypeWeights {
    pub fn weight_of(&self, event_type: EventType) -> f64 {
        match event_type {
            EventType::ViewProduct => self.view_product,
            EventType::AddToCart => self.add_to_cart,
            EventType::Purchase => self.purchase,
        }
    }

    pub fn pairs(&self) -> [(EventType, f64); 3] {
        EventType::ALL.map(|event_type| (event_type, self.weight_of(event_type)))
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let mut sum = 0.0;
        for (event_type, weight) in self.pairs() {
            if !weight.is_finite() || weight < 0.0 {
                return Err(SettingsError::InvalidWeight {
                    event_type: event_type.as_str(),
                    weight,
                });
            }
            sum += weight;
        }
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(SettingsError::WeightSum { sum });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationSettings {
    pub days_per_week: u32,
    pub parts_per_day: u32,
    pub events_per_part: u32,
    pub customer_id_count: u16,
    pub product_id_count: u16,
    pub event_type_weights: EventTypeWeights,
    pub quantity_min: u8,
    pub quantity_max: u8,
    pub seed: Option<u64>,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            days_per_week: 7,
            parts_per_day: 5,
            events_per_part: 100,
            customer_id_count: 100,
            product_id_count: 50,
            event_type_weights: EventTypeWeights::default(),
            quantity_min: 1,
            quantity_max: 3,
            seed: None,
        }
    }
}

impl GenerationSettings {
    pub fn events_per_day(&self) -> u64 {
        u64::from(self.parts_per_day) * u64::from(self.events_per_part)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        for (field, value) in [
            ("days_per_week", self.days_per_week),
            ("parts_per_day", self.parts_per_day),
            ("events_per_part", self.events_per_part),
        ] {
            if value == 0 {
                return Err(SettingsError::ZeroCount { field });
            }
        }
        for (field, value) in [
            ("customer_id_count", self.customer_id_count),
            ("product_id_count", self.product_id_count),
        ] {
            if !(1..=999).contains(&value) {
                return Err(SettingsError::IdentifierRange { field, value });
            }
        }
        if self.quantity_min == 0 || self.quantity_min > self.quantity_max {
            return Err(SettingsError::QuantityRange {
                min: self.quantity_min,
                max: self.quantity_max,
            });
        }
        self.event_type_weights.validate()?;

        let events = self.events_per_day();
        if events.saturating_mul(MAX_STEP_SECONDS) >= SECONDS_PER_DAY {
            return Err(SettingsError::DayOverflow {
                events,
                step: MAX_STEP_SECONDS,
            });
        }
        Ok(())
    }
}
