// Domain entities
pub mod archive;
pub mod event;
pub mod settings;

pub use archive::*;
pub use event::*;
pub use settings::*;
