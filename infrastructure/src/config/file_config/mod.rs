//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod bridge;
mod engine;

pub use bridge::FileBridgeConfig;
pub use engine::FileEngineConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Engines that need an output path
const FILE_BACKED_ENGINES: &[&str] = &["jsonl"];

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("engine.name cannot be empty")]
    EmptyEngineName,

    #[error("engine '{0}' requires engine.path")]
    MissingOutputPath(String),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Engine selection and settings
    pub engine: FileEngineConfig,
    /// `log` crate bridge settings
    pub bridge: FileBridgeConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let name = self.engine.name.trim();
        if name.is_empty() {
            return Err(ConfigValidationError::EmptyEngineName);
        }
        if FILE_BACKED_ENGINES.contains(&name) && self.engine.path.is_none() {
            return Err(ConfigValidationError::MissingOutputPath(name.to_string()));
        }
        Ok(())
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
