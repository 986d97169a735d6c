use std::path::Path;

use chrono::{Days, NaiveDate};
use rand::Rng;
use tracing::info;

use eventgen_domain::{
    daily_archive_name, iso_week_number, weekly_archive_name, ArchiveEntry, ArchiveError,
    WeekArchive,
};

use crate::commands::build_day_archive;
use crate::{FixtureError, GeneratorState};

/// Builds `days_per_week` daily archives starting at `week_start` and
/// persists them as `output_dir/events_week_{W}.zip`.
pub fn build_week_archive<R: Rng + ?Sized>(
    state: &GeneratorState,
    rng: &mut R,
    week_start: NaiveDate,
    output_dir: &Path,
) -> Result<WeekArchive, FixtureError> {
    let week_number = iso_week_number(week_start);
    let path = output_dir.join(weekly_archive_name(week_start));
    info!(week = week_number, "generating weekly archive {}", path.display());

    let day_count = state.settings.days_per_week;
    let mut entries = Vec::with_capacity(day_count as usize);
    for offset in 0..day_count {
        let date = week_start
            .checked_add_days(Days::new(u64::from(offset)))
            .ok_or_else(|| {
                FixtureError::Config(format!("date {} + {} days is out of range", week_start, offset))
            })?;
        let bytes = build_day_archive(state, rng, date)?;
        entries.push(ArchiveEntry::new(daily_archive_name(date), bytes));
    }

    let size_bytes = state
        .store
        .persist(&path, &entries)
        .map_err(|err| match err {
            ArchiveError::Io(source) => FixtureError::Io {
                path: path.clone(),
                source,
            },
            ArchiveError::Encoding(message) => FixtureError::Encoding {
                date: week_start,
                message,
            },
        })?;

    let archive = WeekArchive {
        path,
        week_start,
        week_number,
        day_count,
        size_bytes,
    };
    state.metrics.record_week(size_bytes);
    info!("successfully generated {}", archive.path.display());
    info!("total size: {:.2} KB", archive.size_kib());
    Ok(archive)
}
