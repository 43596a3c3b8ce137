//! Lazy engine binding
//!
//! Holds the initialization state shared by every adapter of a factory: the
//! resolver and, once resolved, the engine providing both entry points.

use crate::ports::engine_resolver::{BindingError, EngineResolver};
use crate::ports::logging_engine::LoggingEngine;
use once_cell::sync::OnceCell;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, warn};

/// One-time, shared binding to the underlying engine.
///
/// The first caller resolves; concurrent first callers wait for that
/// resolution instead of repeating it. Once bound, the engine is never
/// replaced. A failed resolution binds nothing and is reported to the caller
/// that triggered it.
pub struct EngineBinding {
    resolver: Arc<dyn EngineResolver>,
    engine: OnceCell<Arc<dyn LoggingEngine>>,
    resolutions: AtomicUsize,
}

impl EngineBinding {
    pub fn new(resolver: Arc<dyn EngineResolver>) -> Self {
        Self {
            resolver,
            engine: OnceCell::new(),
            resolutions: AtomicUsize::new(0),
        }
    }

    /// Get the bound engine, resolving it on first use
    pub fn engine(&self) -> Result<&Arc<dyn LoggingEngine>, BindingError> {
        self.engine.get_or_try_init(|| {
            self.resolutions.fetch_add(1, Ordering::SeqCst);
            match self.resolver.resolve() {
                Ok(engine) => {
                    debug!("Bound logging engine '{}'", engine.name());
                    Ok(engine)
                }
                Err(e) => {
                    warn!("Logging engine binding failed: {}", e);
                    Err(e)
                }
            }
        })
    }

    pub fn is_bound(&self) -> bool {
        self.engine.get().is_some()
    }

    /// How many times resolution has been attempted
    pub(crate) fn resolution_count(&self) -> usize {
        self.resolutions.load(Ordering::SeqCst)
    }
}

impl std::fmt::Debug for EngineBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineBinding")
            .field("bound", &self.engine.get().map(|e| e.name().to_string()))
            .field("resolutions", &self.resolution_count())
            .finish()
    }
}
