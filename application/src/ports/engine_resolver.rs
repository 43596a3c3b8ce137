//! Engine resolver port.
//!
//! Locates the underlying logging engine and hands back its entry points.
//! Resolution runs once per [`EngineBinding`](crate::use_cases::engine_binding::EngineBinding),
//! on the first enablement or logging call.

use super::logging_engine::LoggingEngine;
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur while binding to the underlying engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindingError {
    #[error("No logging engine registered under '{0}'")]
    EngineNotFound(String),

    #[error("Entry points of engine '{engine}' unavailable: {reason}")]
    EntryPointUnavailable { engine: String, reason: String },

    #[error("No logging engine configured")]
    NotConfigured,
}

/// Port for resolving the logging engine
pub trait EngineResolver: Send + Sync {
    fn resolve(&self) -> Result<Arc<dyn LoggingEngine>, BindingError>;
}

impl<F> EngineResolver for F
where
    F: Fn() -> Result<Arc<dyn LoggingEngine>, BindingError> + Send + Sync,
{
    fn resolve(&self) -> Result<Arc<dyn LoggingEngine>, BindingError> {
        self()
    }
}

/// Resolver for an engine constructed up front and injected
pub struct FixedEngineResolver {
    engine: Arc<dyn LoggingEngine>,
}

impl FixedEngineResolver {
    pub fn new(engine: Arc<dyn LoggingEngine>) -> Self {
        Self { engine }
    }
}

impl EngineResolver for FixedEngineResolver {
    fn resolve(&self) -> Result<Arc<dyn LoggingEngine>, BindingError> {
        Ok(Arc::clone(&self.engine))
    }
}

/// Resolver used when nothing was configured; always fails
pub struct UnconfiguredResolver;

impl EngineResolver for UnconfiguredResolver {
    fn resolve(&self) -> Result<Arc<dyn LoggingEngine>, BindingError> {
        Err(BindingError::NotConfigured)
    }
}
