//! Engine adapter that delegates to the `tracing` crate.

use bridge_application::{Emission, EngineError, LoggingEngine};
use bridge_domain::{Level, LoggerName};

/// Target attached to every forwarded event
pub const TRACING_TARGET: &str = "logbridge::engine";

/// Logging engine backed by whatever `tracing` subscriber is installed.
///
/// Enablement asks the current subscriber; emission renders the message and
/// records the logger name, markers, error chain and key/values as fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEngine;

impl TracingEngine {
    pub fn new() -> Self {
        Self
    }
}

macro_rules! forward_event {
    ($level:expr, $logger:expr, $markers:expr, $error:expr, $kv:expr, $message:expr) => {
        tracing::event!(
            target: TRACING_TARGET,
            $level,
            logger = %$logger,
            markers = $markers,
            error = $error,
            kv = $kv,
            "{}",
            $message
        )
    };
}

impl LoggingEngine for TracingEngine {
    fn name(&self) -> &str {
        "tracing"
    }

    fn is_level_enabled(&self, level: Level) -> Result<bool, EngineError> {
        let enabled = match level {
            Level::Trace => tracing::enabled!(target: TRACING_TARGET, tracing::Level::TRACE),
            Level::Debug => tracing::enabled!(target: TRACING_TARGET, tracing::Level::DEBUG),
            Level::Info => tracing::enabled!(target: TRACING_TARGET, tracing::Level::INFO),
            Level::Warn => tracing::enabled!(target: TRACING_TARGET, tracing::Level::WARN),
            Level::Error => tracing::enabled!(target: TRACING_TARGET, tracing::Level::ERROR),
        };
        Ok(enabled)
    }

    fn emit(&self, logger: &LoggerName, emission: Emission) -> Result<(), EngineError> {
        let message = emission.rendered_message();

        let markers = emission
            .markers()
            .iter()
            .map(|m| m.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let markers = (!markers.is_empty()).then_some(markers);

        let error = emission
            .throwable()
            .map(|t| t.chain_messages().join(": "));

        let kv = match &emission {
            Emission::Event(event) if !event.key_values.is_empty() => {
                let map: serde_json::Map<String, serde_json::Value> = event
                    .key_values
                    .iter()
                    .map(|kv| (kv.key.clone(), kv.value.clone()))
                    .collect();
                Some(serde_json::Value::Object(map).to_string())
            }
            _ => None,
        };

        let markers = markers.as_deref();
        let error = error.as_deref();
        let kv = kv.as_deref();

        match emission.level() {
            Level::Trace => forward_event!(tracing::Level::TRACE, logger, markers, error, kv, message),
            Level::Debug => forward_event!(tracing::Level::DEBUG, logger, markers, error, kv, message),
            Level::Info => forward_event!(tracing::Level::INFO, logger, markers, error, kv, message),
            Level::Warn => forward_event!(tracing::Level::WARN, logger, markers, error, kv, message),
            Level::Error => forward_event!(tracing::Level::ERROR, logger, markers, error, kv, message),
        }
        Ok(())
    }
}
