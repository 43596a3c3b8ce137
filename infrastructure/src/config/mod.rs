//! Configuration file loading for logbridge
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `LOGBRIDGE_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./logbridge.toml` or `./.logbridge.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/logbridge/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{ConfigValidationError, FileBridgeConfig, FileConfig, FileEngineConfig};
pub use loader::ConfigLoader;
