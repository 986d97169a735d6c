pub mod cancel_flag;

pub use cancel_flag::*;
