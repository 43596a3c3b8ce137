//! Application layer for logbridge
//!
//! This crate contains the port definitions for the underlying logging
//! engine and the use cases that adapt the logging facade onto it.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    engine_resolver::{BindingError, EngineResolver, FixedEngineResolver, UnconfiguredResolver},
    facade::{AdapterError, FacadeLogger},
    logging_engine::{Emission, EngineError, LoggingEngine, NormalizedCall},
};
pub use use_cases::{
    engine_binding::EngineBinding, event_builder::LoggingEventBuilder,
    logger_adapter::LoggerAdapter, logger_factory::LoggerFactory,
};
