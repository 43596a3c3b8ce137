//! Bridge configuration from TOML (`[bridge]` section)

use bridge_domain::Level;
use serde::{Deserialize, Serialize};

/// Raw bridge configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBridgeConfig {
    /// Most verbose level the `log` macros let through
    pub max_level: Level,
}

impl Default for FileBridgeConfig {
    fn default() -> Self {
        Self {
            max_level: Level::Trace,
        }
    }
}
