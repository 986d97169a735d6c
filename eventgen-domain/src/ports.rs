// Archive port traits (interfaces)
// Define what generation needs from infrastructure

pub mod archive_ports;

pub use archive_ports::*;
