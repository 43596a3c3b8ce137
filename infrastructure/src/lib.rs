//! Infrastructure layer for logbridge
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the concrete logging engines, the `log`
//! crate front end, and configuration file loading.

pub mod config;
pub mod engines;
pub mod facade;
pub mod levels;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileBridgeConfig, FileConfig, FileEngineConfig,
};
pub use engines::{EngineRegistry, EngineSettings, JsonlEngine, TracingEngine};
pub use facade::LogFacadeBridge;
