// Event fixture application layer

pub mod commands;
pub mod error;
pub mod metrics;
pub mod ops;
pub mod state;

#[cfg(test)]
mod test_support;

pub use commands::{build_day_archive, build_week_archive, run_generation, RunRequest, RunSummary};
pub use error::FixtureError;
pub use metrics::{GenerationMetrics, MetricsSnapshot};
pub use ops::CancelFlag;
pub use state::GeneratorState;
