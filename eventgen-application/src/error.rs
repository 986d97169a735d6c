use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

use eventgen_domain::SettingsError;

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("encoding failed for {date}: {message}")]
    Encoding { date: NaiveDate, message: String },
    #[error("writing {} failed: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("generation cancelled after {completed_weeks} week(s)")]
    Cancelled { completed_weeks: u32 },
}

impl From<SettingsError> for FixtureError {
    fn from(err: SettingsError) -> Self {
        FixtureError::Config(err.to_string())
    }
}
