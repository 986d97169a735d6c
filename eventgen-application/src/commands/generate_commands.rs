use std::path::PathBuf;

use chrono::{Days, NaiveDate};
use rand::Rng;
use serde::Serialize;
use tracing::{info, warn};

use eventgen_domain::WeekArchive;

use crate::commands::build_week_archive;
use crate::ops::CancelFlag;
use crate::{FixtureError, GeneratorState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRequest {
    pub start_date: NaiveDate,
    pub num_weeks: u32,
    pub output_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub archives: Vec<WeekArchive>,
}

/// Generates `num_weeks` consecutive weekly archives, one after another.
/// The first failure ends the run; weeks already written stay on disk.
pub fn run_generation<R: Rng + ?Sized>(
    state: &GeneratorState,
    rng: &mut R,
    request: &RunRequest,
    cancel: &CancelFlag,
) -> Result<RunSummary, FixtureError> {
    if request.num_weeks == 0 {
        return Err(FixtureError::Config("week count must be at least 1".to_string()));
    }

    info!(
        "starting data generation for {} week(s) into {}",
        request.num_weeks,
        request.output_dir.display()
    );

    let mut archives = Vec::with_capacity(request.num_weeks as usize);
    for week in 0..request.num_weeks {
        if cancel.is_cancelled() {
            warn!("cancellation requested, stopping after {} week(s)", week);
            return Err(FixtureError::Cancelled {
                completed_weeks: week,
            });
        }
        let week_start = request
            .start_date
            .checked_add_days(Days::new(7 * u64::from(week)))
            .ok_or_else(|| {
                FixtureError::Config(format!(
                    "week {} after {} is out of range",
                    week, request.start_date
                ))
            })?;
        archives.push(build_week_archive(state, rng, week_start, &request.output_dir)?);
    }

    info!("all data generation complete: {}", state.metrics.render_summary());
    Ok(RunSummary { archives })
}
