//! Logger adapter
//!
//! Implements the facade's logger capability set by forwarding every call to
//! the engine held in the shared [`EngineBinding`].

use super::engine_binding::EngineBinding;
use crate::ports::facade::{AdapterError, FacadeLogger};
use crate::ports::logging_engine::{Emission, NormalizedCall};
use bridge_domain::{Level, LogEvent, LoggerName, Marker, Throwable};
use serde_json::Value;
use std::sync::Arc;

/// A named facade logger backed by the bound engine
#[derive(Debug)]
pub struct LoggerAdapter {
    name: LoggerName,
    binding: Arc<EngineBinding>,
}

impl LoggerAdapter {
    pub fn new(name: LoggerName, binding: Arc<EngineBinding>) -> Self {
        Self { name, binding }
    }

    pub fn binding(&self) -> &Arc<EngineBinding> {
        &self.binding
    }
}

impl FacadeLogger for LoggerAdapter {
    fn name(&self) -> &LoggerName {
        &self.name
    }

    fn is_level_enabled(&self, level: Level) -> Result<bool, AdapterError> {
        let engine = self.binding.engine()?;
        Ok(engine.is_level_enabled(level)?)
    }

    fn log(&self, event: Arc<LogEvent>) -> Result<(), AdapterError> {
        let engine = self.binding.engine()?;
        engine.emit(&self.name, Emission::Event(event))?;
        Ok(())
    }

    fn handle_normalized_logging_call(
        &self,
        level: Level,
        marker: Option<Marker>,
        message_pattern: &str,
        arguments: Vec<Value>,
        throwable: Option<Throwable>,
    ) -> Result<(), AdapterError> {
        let engine = self.binding.engine()?;
        let call = NormalizedCall {
            level,
            throwable,
            message_pattern: message_pattern.to_string(),
            arguments,
            marker,
        };
        engine.emit(&self.name, Emission::Normalized(call))?;
        Ok(())
    }

    fn fully_qualified_caller_name(&self) -> Option<&str> {
        None
    }
}
