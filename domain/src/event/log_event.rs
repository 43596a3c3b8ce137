//! Structured log event (fluent calling convention)

use super::marker::Marker;
use super::throwable::Throwable;
use crate::core::{level::Level, logger_name::LoggerName};
use crate::message::MessagePattern;
use chrono::{DateTime, Utc};
use serde_json::Value;

/// A single key/value pair attached to an event
#[derive(Debug, Clone, PartialEq)]
pub struct KeyValuePair {
    pub key: String,
    pub value: Value,
}

impl KeyValuePair {
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A fully formed log event.
///
/// Built per call by the fluent API and handed to the engine as-is. The
/// bridge never mutates or retains it.
#[derive(Debug, Clone)]
pub struct LogEvent {
    pub level: Level,
    pub logger_name: LoggerName,
    pub markers: Vec<Marker>,
    /// Message pattern with `{}` placeholders
    pub message: Option<String>,
    pub arguments: Vec<Value>,
    pub key_values: Vec<KeyValuePair>,
    pub throwable: Option<Throwable>,
    pub timestamp: DateTime<Utc>,
    pub thread_name: Option<String>,
}

impl LogEvent {
    /// Create an empty event stamped with the current time and thread
    pub fn new(level: Level, logger_name: LoggerName) -> Self {
        Self {
            level,
            logger_name,
            markers: Vec::new(),
            message: None,
            arguments: Vec::new(),
            key_values: Vec::new(),
            throwable: None,
            timestamp: Utc::now(),
            thread_name: std::thread::current().name().map(str::to_string),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_argument(mut self, argument: impl Into<Value>) -> Self {
        self.arguments.push(argument.into());
        self
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.markers.push(marker);
        self
    }

    pub fn with_key_value(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.key_values.push(KeyValuePair::new(key, value));
        self
    }

    pub fn with_throwable(mut self, throwable: Throwable) -> Self {
        self.throwable = Some(throwable);
        self
    }

    /// Message pattern, or an empty string when none was set
    pub fn pattern(&self) -> &str {
        self.message.as_deref().unwrap_or("")
    }

    /// Message with arguments substituted into the pattern
    pub fn rendered_message(&self) -> String {
        MessagePattern::new(self.pattern()).render(&self.arguments)
    }
}
