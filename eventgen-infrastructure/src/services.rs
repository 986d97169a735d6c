pub mod zip_encoder;

pub use zip_encoder::*;
