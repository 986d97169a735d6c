pub mod context;
pub mod lifecycle;

pub use context::GeneratorContext;
pub use lifecycle::{run, run_with_cancel, RunOptions};
