//! Logging engine port
//!
//! Defines the two entry points the bridge needs from the underlying engine:
//! a level-enabled predicate and an emission function.

use bridge_domain::{Level, LogEvent, LoggerName, Marker, MessagePattern, Throwable};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised by an engine while checking a level or emitting.
///
/// These reach the facade caller unchanged.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Engine rejected call: {0}")]
    Rejected(String),
}

/// A log call in the normalized (legacy) shape.
///
/// Field order mirrors the order the engine receives them in:
/// level, throwable, message pattern, arguments, marker.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedCall {
    pub level: Level,
    pub throwable: Option<Throwable>,
    pub message_pattern: String,
    pub arguments: Vec<Value>,
    pub marker: Option<Marker>,
}

impl NormalizedCall {
    /// Split into the engine's positional five-tuple
    pub fn into_parts(
        self,
    ) -> (
        Level,
        Option<Throwable>,
        String,
        Vec<Value>,
        Option<Marker>,
    ) {
        (
            self.level,
            self.throwable,
            self.message_pattern,
            self.arguments,
            self.marker,
        )
    }
}

/// What the bridge hands to the engine's emission entry point.
#[derive(Debug, Clone)]
pub enum Emission {
    /// A complete event from the fluent API, shared with the caller.
    Event(Arc<LogEvent>),
    /// A call from the normalized (legacy) API.
    Normalized(NormalizedCall),
}

impl Emission {
    pub fn level(&self) -> Level {
        match self {
            Emission::Event(event) => event.level,
            Emission::Normalized(call) => call.level,
        }
    }

    pub fn pattern(&self) -> &str {
        match self {
            Emission::Event(event) => event.pattern(),
            Emission::Normalized(call) => &call.message_pattern,
        }
    }

    pub fn arguments(&self) -> &[Value] {
        match self {
            Emission::Event(event) => &event.arguments,
            Emission::Normalized(call) => &call.arguments,
        }
    }

    pub fn throwable(&self) -> Option<&Throwable> {
        match self {
            Emission::Event(event) => event.throwable.as_ref(),
            Emission::Normalized(call) => call.throwable.as_ref(),
        }
    }

    pub fn markers(&self) -> Vec<&Marker> {
        match self {
            Emission::Event(event) => event.markers.iter().collect(),
            Emission::Normalized(call) => call.marker.iter().collect(),
        }
    }

    /// Pattern with arguments substituted
    pub fn rendered_message(&self) -> String {
        MessagePattern::new(self.pattern()).render(self.arguments())
    }
}

/// Port for the underlying logging engine
///
/// The engine owns all filtering, formatting and output. Implementations
/// live in the infrastructure layer.
pub trait LoggingEngine: Send + Sync {
    /// Short identifier used in diagnostics
    fn name(&self) -> &str;

    /// Level-enabled predicate
    fn is_level_enabled(&self, level: Level) -> Result<bool, EngineError>;

    /// Emission entry point. `logger` is only a tag for the emitted record.
    fn emit(&self, logger: &LoggerName, emission: Emission) -> Result<(), EngineError>;

    /// Flush buffered output, if any
    fn flush(&self) -> Result<(), EngineError> {
        Ok(())
    }
}
