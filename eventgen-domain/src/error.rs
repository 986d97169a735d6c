// Domain errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("archive io failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("archive encoding failed: {0}")]
    Encoding(String),
}

#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("{field} must be at least 1")]
    ZeroCount { field: &'static str },
    #[error("{field} must be between 1 and 999, got {value}")]
    IdentifierRange { field: &'static str, value: u16 },
    #[error("quantity range {min}..={max} is invalid")]
    QuantityRange { min: u8, max: u8 },
    #[error("event type weight for {event_type} is invalid: {weight}")]
    InvalidWeight { event_type: &'static str, weight: f64 },
    #[error("event type weights must sum to 1.0, got {sum}")]
    WeightSum { sum: f64 },
    #[error("{events} events per day at up to {step}s apart can run past midnight")]
    DayOverflow { events: u64, step: u64 },
}
