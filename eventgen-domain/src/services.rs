// Domain services
pub mod catalog;
pub mod day_planner;
pub mod event_factory;
pub mod sampler;

pub use catalog::*;
pub use day_planner::*;
pub use event_factory::*;
pub use sampler::*;
