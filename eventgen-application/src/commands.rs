pub mod day_commands;
pub mod generate_commands;
pub mod week_commands;

pub use day_commands::*;
pub use generate_commands::*;
pub use week_commands::*;
