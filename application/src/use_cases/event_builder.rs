//! Fluent event builder
//!
//! Collects the parts of a [`LogEvent`] and hands the finished event to
//! [`FacadeLogger::log`]. Created by [`FacadeLogger::at_level`] after the
//! level check, so `log()` does not check again.

use crate::ports::facade::{AdapterError, FacadeLogger};
use bridge_domain::{Level, LogEvent, Marker, Throwable};
use serde_json::Value;
use std::sync::Arc;

/// Builder for the fluent calling convention
pub struct LoggingEventBuilder<'a> {
    inner: Option<(&'a dyn FacadeLogger, LogEvent)>,
}

impl<'a> LoggingEventBuilder<'a> {
    pub fn enabled(logger: &'a dyn FacadeLogger, level: Level) -> Self {
        let event = LogEvent::new(level, logger.name().clone());
        Self {
            inner: Some((logger, event)),
        }
    }

    /// A builder for a disabled level; every call is a no-op
    pub fn disabled() -> Self {
        Self { inner: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.inner.is_some()
    }

    fn map(mut self, f: impl FnOnce(LogEvent) -> LogEvent) -> Self {
        self.inner = self.inner.map(|(logger, event)| (logger, f(event)));
        self
    }

    pub fn add_marker(self, marker: Marker) -> Self {
        self.map(|e| e.with_marker(marker))
    }

    pub fn add_argument(self, argument: impl Into<Value>) -> Self {
        self.map(|e| e.with_argument(argument))
    }

    pub fn add_key_value(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.map(|e| e.with_key_value(key, value))
    }

    pub fn set_cause(self, throwable: Throwable) -> Self {
        self.map(|e| e.with_throwable(throwable))
    }

    pub fn set_message(self, message: impl Into<String>) -> Self {
        self.map(|e| e.with_message(message))
    }

    /// Build the event and forward it
    pub fn log(self) -> Result<(), AdapterError> {
        match self.inner {
            Some((logger, event)) => logger.log(Arc::new(event)),
            None => Ok(()),
        }
    }

    /// Set the message and forward in one step
    pub fn log_message(self, message: impl Into<String>) -> Result<(), AdapterError> {
        self.set_message(message).log()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::engine_resolver::FixedEngineResolver;
    use crate::ports::logging_engine::{Emission, EngineError, LoggingEngine};
    use crate::use_cases::logger_factory::LoggerFactory;
    use bridge_domain::LoggerName;
    use serde_json::json;
    use std::sync::Mutex;

    /// Engine enabling WARN and above, recording events
    #[derive(Default)]
    struct WarnEngine {
        events: Mutex<Vec<Arc<LogEvent>>>,
    }

    impl LoggingEngine for WarnEngine {
        fn name(&self) -> &str {
            "warn-only"
        }
        fn is_level_enabled(&self, level: Level) -> Result<bool, EngineError> {
            Ok(level >= Level::Warn)
        }
        fn emit(&self, _logger: &LoggerName, emission: Emission) -> Result<(), EngineError> {
            if let Emission::Event(event) = emission {
                self.events.lock().unwrap().push(event);
            }
            Ok(())
        }
    }

    fn setup() -> (Arc<WarnEngine>, LoggerFactory) {
        let engine = Arc::new(WarnEngine::default());
        let factory = LoggerFactory::new(Arc::new(FixedEngineResolver::new(engine.clone())));
        (engine, factory)
    }

    #[test]
    fn test_fluent_builder_forwards_complete_event() {
        let (engine, factory) = setup();
        let logger = factory.logger("billing").unwrap();
        let cause = Throwable::from_message("card declined");

        logger
            .at_error()
            .unwrap()
            .add_marker(Marker::new("PAYMENT").unwrap())
            .add_argument("inv-9")
            .add_key_value("amount", json!(12.5))
            .set_cause(cause.clone())
            .log_message("invoice {} not paid")
            .unwrap();

        let events = engine.events.lock().unwrap();
        assert_eq!(events.len(), 1);
        let event = &events[0];
        assert_eq!(event.level, Level::Error);
        assert_eq!(event.logger_name.as_str(), "billing");
        assert_eq!(event.rendered_message(), "invoice inv-9 not paid");
        assert_eq!(event.markers[0].name(), "PAYMENT");
        assert_eq!(event.key_values[0].key, "amount");
        assert_eq!(event.throwable, Some(cause));
    }

    #[test]
    fn test_fluent_builder_disabled_level_is_noop() {
        let (engine, factory) = setup();
        let logger = factory.logger("billing").unwrap();

        let builder = logger.at_debug().unwrap();
        assert!(!builder.is_enabled());
        builder.add_argument(1).log_message("ignored {}").unwrap();

        assert!(engine.events.lock().unwrap().is_empty());
    }

    #[test]
    fn test_disabled_builder_standalone() {
        assert!(LoggingEventBuilder::disabled().log().is_ok());
    }
}
