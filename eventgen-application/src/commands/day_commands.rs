use chrono::NaiveDate;
use rand::Rng;
use tracing::info;

use eventgen_domain::ArchiveEntry;

use crate::{FixtureError, GeneratorState};

/// Builds one day's part files and returns the bytes of the daily archive.
pub fn build_day_archive<R: Rng + ?Sized>(
    state: &GeneratorState,
    rng: &mut R,
    date: NaiveDate,
) -> Result<Vec<u8>, FixtureError> {
    info!("generating data for {}", date);

    let parts = state.planner.plan(&state.factory, rng, date);
    let mut entries = Vec::with_capacity(parts.len());
    let mut event_count = 0;
    for part in &parts {
        let json = serde_json::to_vec_pretty(&part.events).map_err(|err| {
            FixtureError::Encoding {
                date,
                message: format!("{}: {}", part.file_name(), err),
            }
        })?;
        event_count += part.events.len();
        entries.push(ArchiveEntry::new(part.file_name(), json));
    }

    let bytes = state
        .encoder
        .encode(&entries)
        .map_err(|err| FixtureError::Encoding {
            date,
            message: err.to_string(),
        })?;

    state.metrics.record_day(entries.len(), event_count);
    Ok(bytes)
}
