//! Engine configuration from TOML (`[engine]` section)

use bridge_domain::Level;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw engine configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEngineConfig {
    /// Registered engine name ("tracing", "jsonl")
    pub name: String,
    /// Minimum level for engines that filter on their own
    pub min_level: Level,
    /// Output file for file-backed engines
    pub path: Option<PathBuf>,
}

impl Default for FileEngineConfig {
    fn default() -> Self {
        Self {
            name: "tracing".to_string(),
            min_level: Level::Info,
            path: None,
        }
    }
}
