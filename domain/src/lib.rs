//! Domain layer for logbridge
//!
//! This crate contains the value objects that flow between a logging facade
//! and the engine it is bridged to. It has no dependencies on infrastructure
//! concerns.
//!
//! # Core Concepts
//!
//! - **Level**: the five severities, trace through error
//! - **LogEvent**: a complete event built by the fluent API
//! - **Marker / Throwable**: optional tags and errors attached to a call
//! - **MessagePattern**: `{}` placeholder rendering used by engines

pub mod core;
pub mod event;
pub mod message;

// Re-export commonly used types
pub use core::{
    error::DomainError,
    level::Level,
    logger_name::{LoggerName, ROOT_LOGGER_NAME},
};
pub use event::{
    log_event::{KeyValuePair, LogEvent},
    marker::Marker,
    throwable::Throwable,
};
pub use message::{MessagePattern, render};
