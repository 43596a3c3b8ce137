//! Logging facade port
//!
//! The capability set a facade logger exposes to application code. Adapters
//! implement the required methods; the provided methods carry the facade's
//! base behavior (check the level, then hand over a normalized call).

use super::engine_resolver::BindingError;
use super::logging_engine::EngineError;
use crate::use_cases::event_builder::LoggingEventBuilder;
use bridge_domain::{Level, LogEvent, LoggerName, Marker, Throwable};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

/// Errors surfaced to facade callers
#[derive(Error, Debug)]
pub enum AdapterError {
    #[error("Logging engine binding failed: {0}")]
    Binding(#[from] BindingError),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl AdapterError {
    /// Check if this error comes from binding resolution
    pub fn is_binding(&self) -> bool {
        matches!(self, AdapterError::Binding(_))
    }
}

/// Logger capability set of the logging facade
pub trait FacadeLogger: Send + Sync {
    fn name(&self) -> &LoggerName;

    /// Query whether `level` is enabled
    fn is_level_enabled(&self, level: Level) -> Result<bool, AdapterError>;

    /// Forward a fully formed event (fluent convention).
    ///
    /// The caller has already checked the level; no second check is made.
    fn log(&self, event: Arc<LogEvent>) -> Result<(), AdapterError>;

    /// Forward a normalized (legacy) call.
    ///
    /// The caller has already checked the level; no second check is made.
    fn handle_normalized_logging_call(
        &self,
        level: Level,
        marker: Option<Marker>,
        message_pattern: &str,
        arguments: Vec<Value>,
        throwable: Option<Throwable>,
    ) -> Result<(), AdapterError>;

    /// Name used for caller-location lookup, `None` when not supported
    fn fully_qualified_caller_name(&self) -> Option<&str>;

    // ==================== Level Queries ====================

    fn is_trace_enabled(&self) -> Result<bool, AdapterError> {
        self.is_level_enabled(Level::Trace)
    }

    fn is_debug_enabled(&self) -> Result<bool, AdapterError> {
        self.is_level_enabled(Level::Debug)
    }

    fn is_info_enabled(&self) -> Result<bool, AdapterError> {
        self.is_level_enabled(Level::Info)
    }

    fn is_warn_enabled(&self) -> Result<bool, AdapterError> {
        self.is_level_enabled(Level::Warn)
    }

    fn is_error_enabled(&self) -> Result<bool, AdapterError> {
        self.is_level_enabled(Level::Error)
    }

    // ==================== Normalized Calls ====================

    /// Check `level`, then forward everything as a normalized call
    fn log_at(
        &self,
        level: Level,
        marker: Option<&Marker>,
        message_pattern: &str,
        arguments: &[Value],
        throwable: Option<&Throwable>,
    ) -> Result<(), AdapterError> {
        if !self.is_level_enabled(level)? {
            return Ok(());
        }
        self.handle_normalized_logging_call(
            level,
            marker.cloned(),
            message_pattern,
            arguments.to_vec(),
            throwable.cloned(),
        )
    }

    fn trace(&self, message: &str) -> Result<(), AdapterError> {
        self.log_at(Level::Trace, None, message, &[], None)
    }

    fn trace_with(&self, pattern: &str, arguments: &[Value]) -> Result<(), AdapterError> {
        self.log_at(Level::Trace, None, pattern, arguments, None)
    }

    fn debug(&self, message: &str) -> Result<(), AdapterError> {
        self.log_at(Level::Debug, None, message, &[], None)
    }

    fn debug_with(&self, pattern: &str, arguments: &[Value]) -> Result<(), AdapterError> {
        self.log_at(Level::Debug, None, pattern, arguments, None)
    }

    fn info(&self, message: &str) -> Result<(), AdapterError> {
        self.log_at(Level::Info, None, message, &[], None)
    }

    fn info_with(&self, pattern: &str, arguments: &[Value]) -> Result<(), AdapterError> {
        self.log_at(Level::Info, None, pattern, arguments, None)
    }

    fn warn(&self, message: &str) -> Result<(), AdapterError> {
        self.log_at(Level::Warn, None, message, &[], None)
    }

    fn warn_with(&self, pattern: &str, arguments: &[Value]) -> Result<(), AdapterError> {
        self.log_at(Level::Warn, None, pattern, arguments, None)
    }

    fn error(&self, message: &str) -> Result<(), AdapterError> {
        self.log_at(Level::Error, None, message, &[], None)
    }

    fn error_with(&self, pattern: &str, arguments: &[Value]) -> Result<(), AdapterError> {
        self.log_at(Level::Error, None, pattern, arguments, None)
    }

    /// Error-level call carrying a throwable
    fn error_cause(&self, message: &str, throwable: &Throwable) -> Result<(), AdapterError> {
        self.log_at(Level::Error, None, message, &[], Some(throwable))
    }

    // ==================== Fluent API ====================

    /// Start a fluent event at `level`.
    ///
    /// The level is checked once here; a disabled level yields a builder
    /// that drops everything.
    fn at_level(&self, level: Level) -> Result<LoggingEventBuilder<'_>, AdapterError>
    where
        Self: Sized,
    {
        if self.is_level_enabled(level)? {
            Ok(LoggingEventBuilder::enabled(self, level))
        } else {
            Ok(LoggingEventBuilder::disabled())
        }
    }

    fn at_trace(&self) -> Result<LoggingEventBuilder<'_>, AdapterError>
    where
        Self: Sized,
    {
        self.at_level(Level::Trace)
    }

    fn at_debug(&self) -> Result<LoggingEventBuilder<'_>, AdapterError>
    where
        Self: Sized,
    {
        self.at_level(Level::Debug)
    }

    fn at_info(&self) -> Result<LoggingEventBuilder<'_>, AdapterError>
    where
        Self: Sized,
    {
        self.at_level(Level::Info)
    }

    fn at_warn(&self) -> Result<LoggingEventBuilder<'_>, AdapterError>
    where
        Self: Sized,
    {
        self.at_level(Level::Warn)
    }

    fn at_error(&self) -> Result<LoggingEventBuilder<'_>, AdapterError>
    where
        Self: Sized,
    {
        self.at_level(Level::Error)
    }
}
