//! Logger factory
//!
//! Hands out one [`LoggerAdapter`] per distinct name. All adapters share the
//! factory's [`EngineBinding`].

use super::engine_binding::EngineBinding;
use super::logger_adapter::LoggerAdapter;
use crate::ports::engine_resolver::EngineResolver;
use bridge_domain::{DomainError, LoggerName};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

pub struct LoggerFactory {
    binding: Arc<EngineBinding>,
    loggers: RwLock<HashMap<LoggerName, Arc<LoggerAdapter>>>,
}

impl LoggerFactory {
    pub fn new(resolver: Arc<dyn EngineResolver>) -> Self {
        Self::with_binding(Arc::new(EngineBinding::new(resolver)))
    }

    pub fn with_binding(binding: Arc<EngineBinding>) -> Self {
        Self {
            binding,
            loggers: RwLock::new(HashMap::new()),
        }
    }

    /// Get or create the logger for `name`
    pub fn logger(&self, name: &str) -> Result<Arc<LoggerAdapter>, DomainError> {
        let name = LoggerName::new(name)?;
        Ok(self.logger_for(&name))
    }

    /// Get or create the logger for an already validated name
    pub fn logger_for(&self, name: &LoggerName) -> Arc<LoggerAdapter> {
        {
            let loggers = self.loggers.read().unwrap_or_else(|e| e.into_inner());
            if let Some(logger) = loggers.get(name) {
                return Arc::clone(logger);
            }
        }

        let mut loggers = self.loggers.write().unwrap_or_else(|e| e.into_inner());
        let logger = loggers.entry(name.clone()).or_insert_with(|| {
            Arc::new(LoggerAdapter::new(name.clone(), Arc::clone(&self.binding)))
        });
        Arc::clone(logger)
    }

    pub fn root(&self) -> Arc<LoggerAdapter> {
        self.logger_for(&LoggerName::root())
    }

    pub fn binding(&self) -> &Arc<EngineBinding> {
        &self.binding
    }

    /// Number of distinct loggers created so far
    pub fn len(&self) -> usize {
        self.loggers.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for LoggerFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggerFactory")
            .field("binding", &self.binding)
            .field("loggers", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::engine_resolver::BindingError;
    use crate::ports::facade::FacadeLogger;
    use crate::ports::logging_engine::{Emission, EngineError, LoggingEngine};
    use bridge_domain::Level;
    use std::sync::Barrier;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;
    use std::time::Duration;

    struct CountingEngine {
        emitted: AtomicUsize,
    }

    impl LoggingEngine for CountingEngine {
        fn name(&self) -> &str {
            "counting"
        }
        fn is_level_enabled(&self, level: Level) -> Result<bool, EngineError> {
            Ok(level >= Level::Info)
        }
        fn emit(&self, _logger: &LoggerName, _emission: Emission) -> Result<(), EngineError> {
            self.emitted.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    /// Resolver that is slow on purpose so first calls overlap
    fn slow_resolver(
        engine: Arc<CountingEngine>,
        calls: Arc<AtomicUsize>,
    ) -> Arc<dyn EngineResolver> {
        Arc::new(move || -> Result<Arc<dyn LoggingEngine>, BindingError> {
            calls.fetch_add(1, Ordering::SeqCst);
            thread::sleep(Duration::from_millis(20));
            let engine: Arc<dyn LoggingEngine> = engine.clone();
            Ok(engine)
        })
    }

    fn counting_engine() -> Arc<CountingEngine> {
        Arc::new(CountingEngine {
            emitted: AtomicUsize::new(0),
        })
    }

    #[test]
    fn test_one_logger_per_name() {
        let factory = LoggerFactory::new(slow_resolver(
            counting_engine(),
            Arc::new(AtomicUsize::new(0)),
        ));
        let a = factory.logger("orders").unwrap();
        let b = factory.logger("orders").unwrap();
        let c = factory.logger("payments").unwrap();

        assert!(Arc::ptr_eq(&a, &b));
        assert!(!Arc::ptr_eq(&a, &c));
        assert_eq!(factory.len(), 2);
    }

    #[test]
    fn test_factory_rejects_blank_name() {
        let factory = LoggerFactory::new(slow_resolver(
            counting_engine(),
            Arc::new(AtomicUsize::new(0)),
        ));
        assert_eq!(
            factory.logger(" ").unwrap_err(),
            DomainError::EmptyLoggerName
        );
        assert!(factory.is_empty());
    }

    #[test]
    fn test_root_logger() {
        let factory = LoggerFactory::new(slow_resolver(
            counting_engine(),
            Arc::new(AtomicUsize::new(0)),
        ));
        assert!(factory.root().name().is_root());
    }

    #[test]
    fn test_loggers_share_binding() {
        let calls = Arc::new(AtomicUsize::new(0));
        let factory = LoggerFactory::new(slow_resolver(counting_engine(), calls.clone()));

        factory.logger("a").unwrap().is_info_enabled().unwrap();
        factory.logger("b").unwrap().is_info_enabled().unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(factory.binding().is_bound());
    }

    #[test]
    fn test_concurrent_first_calls_bind_once() {
        const THREADS: usize = 16;
        let calls = Arc::new(AtomicUsize::new(0));
        let engine = counting_engine();
        let factory = Arc::new(LoggerFactory::new(slow_resolver(
            engine.clone(),
            calls.clone(),
        )));
        let barrier = Arc::new(Barrier::new(THREADS));

        let handles: Vec<_> = (0..THREADS)
            .map(|i| {
                let factory = Arc::clone(&factory);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    let logger = factory.logger(&format!("worker.{}", i % 4)).unwrap();
                    barrier.wait();
                    let enabled = logger.is_info_enabled()?;
                    logger.info("started")?;
                    Ok::<bool, crate::ports::facade::AdapterError>(enabled)
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap().unwrap());
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(factory.binding().resolution_count(), 1);
        assert!(factory.binding().is_bound());
        assert_eq!(engine.emitted.load(Ordering::SeqCst), THREADS);
        assert_eq!(factory.len(), 4);
    }
}
