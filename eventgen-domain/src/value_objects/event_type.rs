// Event type value object

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    ViewProduct,
    AddToCart,
    Purchase,
}

impl EventType {
    /// Every event type in sampling order.
    pub const ALL: [EventType; 3] = [
        EventType::ViewProduct,
        EventType::AddToCart,
        EventType::Purchase,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::ViewProduct => "view_product",
            EventType::AddToCart => "add_to_cart",
            EventType::Purchase => "purchase",
        }
    }

    pub fn carries_quantity(&self) -> bool {
        matches!(self, EventType::Purchase)
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
