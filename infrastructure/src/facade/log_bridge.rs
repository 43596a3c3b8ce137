//! `log` crate front end.
//!
//! Registers a [`log::Log`] implementation that routes every record through
//! the [`LoggerAdapter`](bridge_application::LoggerAdapter) for its target.
//! `log::Log` cannot report errors, so binding and engine failures are
//! dropped here; callers that need them use [`FacadeLogger`] directly.

use crate::levels::{from_log_level, to_log_filter};
use bridge_application::{FacadeLogger, LoggerAdapter, LoggerFactory};
use bridge_domain::Level;
use log::{Log, Metadata, Record, SetLoggerError};
use serde_json::Value;
use std::sync::Arc;

/// Bridge from the `log` facade to the bound engine
pub struct LogFacadeBridge {
    factory: Arc<LoggerFactory>,
}

impl LogFacadeBridge {
    pub fn new(factory: Arc<LoggerFactory>) -> Self {
        Self { factory }
    }

    pub fn factory(&self) -> &Arc<LoggerFactory> {
        &self.factory
    }

    /// Install as the process-wide `log` logger.
    ///
    /// `max_level` caps what the `log` macros let through before the engine
    /// is consulted. Fails if a logger is already installed.
    pub fn install(self, max_level: Level) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(to_log_filter(max_level));
        Ok(())
    }

    fn logger_for(&self, target: &str) -> Arc<LoggerAdapter> {
        self.factory
            .logger(target)
            .unwrap_or_else(|_| self.factory.root())
    }
}

impl Log for LogFacadeBridge {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        self.logger_for(metadata.target())
            .is_level_enabled(from_log_level(metadata.level()))
            .unwrap_or(false)
    }

    fn log(&self, record: &Record<'_>) {
        let logger = self.logger_for(record.target());
        let level = from_log_level(record.level());

        if !logger.is_level_enabled(level).unwrap_or(false) {
            return;
        }

        // Already formatted by the log macros; pass it as an argument so
        // engines never read it as a pattern
        let message = Value::String(record.args().to_string());
        let _ = logger.handle_normalized_logging_call(level, None, "{}", vec![message], None);
    }

    fn flush(&self) {
        if let Ok(engine) = self.factory.binding().engine() {
            let _ = engine.flush();
        }
    }
}
