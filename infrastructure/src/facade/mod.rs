//! Facade front ends that feed calls into the logger adapters.

mod log_bridge;

pub use log_bridge::LogFacadeBridge;
