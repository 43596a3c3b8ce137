//! Logging engine adapters: implementations of the
//! [`LoggingEngine`](bridge_application::LoggingEngine) port.
//!
//! - [`TracingEngine`]: forwards to the installed `tracing` subscriber
//! - [`JsonlEngine`]: writes JSONL records to a file or writer
//! - [`EngineRegistry`]: picks one of them by name on first use

mod jsonl_engine;
mod registry;
mod tracing_engine;

pub use jsonl_engine::JsonlEngine;
pub use registry::{EngineConstructor, EngineRegistry, EngineSettings};
pub use tracing_engine::{TRACING_TARGET, TracingEngine};
