//! Engine registry: resolves the configured engine by name.
//!
//! Engines are registered under a name together with a constructor. The
//! registry is an [`EngineResolver`], so the constructor for the selected
//! name runs on the first logging call, not when the registry is built.

use super::jsonl_engine::JsonlEngine;
use super::tracing_engine::TracingEngine;
use crate::config::FileEngineConfig;
use bridge_application::{BindingError, EngineResolver, LoggingEngine};
use bridge_domain::Level;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

/// Settings handed to engine constructors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineSettings {
    pub min_level: Level,
    pub path: Option<PathBuf>,
}

impl From<&FileEngineConfig> for EngineSettings {
    fn from(config: &FileEngineConfig) -> Self {
        Self {
            min_level: config.min_level,
            path: config.path.clone(),
        }
    }
}

/// Constructor for a named engine
pub type EngineConstructor =
    Box<dyn Fn(&EngineSettings) -> Result<Arc<dyn LoggingEngine>, BindingError> + Send + Sync>;

/// Registry of engine constructors keyed by name
pub struct EngineRegistry {
    constructors: HashMap<String, EngineConstructor>,
    selected: Option<String>,
    settings: EngineSettings,
}

impl EngineRegistry {
    /// Empty registry with nothing selected
    pub fn new() -> Self {
        Self {
            constructors: HashMap::new(),
            selected: None,
            settings: EngineSettings::default(),
        }
    }

    /// Registry with the built-in `tracing` and `jsonl` engines
    pub fn with_builtin() -> Self {
        Self::new()
            .register("tracing", |_settings| {
                let engine: Arc<dyn LoggingEngine> = Arc::new(TracingEngine::new());
                Ok(engine)
            })
            .register("jsonl", |settings| {
                let path = settings
                    .path
                    .as_ref()
                    .ok_or_else(|| BindingError::EntryPointUnavailable {
                        engine: "jsonl".to_string(),
                        reason: "no output path configured".to_string(),
                    })?;
                let engine = JsonlEngine::open(path, settings.min_level).map_err(|e| {
                    BindingError::EntryPointUnavailable {
                        engine: "jsonl".to_string(),
                        reason: e.to_string(),
                    }
                })?;
                let engine: Arc<dyn LoggingEngine> = Arc::new(engine);
                Ok(engine)
            })
    }

    /// Built-in registry selecting the engine named in `config`
    pub fn from_config(config: &FileEngineConfig) -> Self {
        Self::with_builtin()
            .select(&config.name)
            .with_settings(EngineSettings::from(config))
    }

    pub fn register<F>(mut self, name: impl Into<String>, constructor: F) -> Self
    where
        F: Fn(&EngineSettings) -> Result<Arc<dyn LoggingEngine>, BindingError>
            + Send
            + Sync
            + 'static,
    {
        self.constructors.insert(name.into(), Box::new(constructor));
        self
    }

    pub fn select(mut self, name: impl Into<String>) -> Self {
        self.selected = Some(name.into());
        self
    }

    pub fn with_settings(mut self, settings: EngineSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Registered engine names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for EngineRegistry {
    fn default() -> Self {
        Self::with_builtin()
    }
}

impl EngineResolver for EngineRegistry {
    fn resolve(&self) -> Result<Arc<dyn LoggingEngine>, BindingError> {
        let name = self.selected.as_ref().ok_or(BindingError::NotConfigured)?;
        let constructor = self
            .constructors
            .get(name)
            .ok_or_else(|| BindingError::EngineNotFound(name.clone()))?;
        constructor(&self.settings)
    }
}
