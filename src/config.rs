use crate::error::ConfigError;
use crate::provider::DEFAULT_GLOBAL_DATA_DELAY;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_LOG_FILTER: &str = "info";

/// Settings for an editor session, usually read from a TOML file.
///
/// ```toml
/// blueprint_path = "data/blueprint.json"
/// global_data_path = "data/global.json"  # optional, built-in sample data otherwise
/// global_data_delay_ms = 0
/// log_filter = "prefill=debug"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub blueprint_path: Option<PathBuf>,
    pub global_data_path: Option<PathBuf>,
    /// Latency of the built-in global data source, in milliseconds.
    pub global_data_delay_ms: u64,
    /// `tracing` filter directive used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            blueprint_path: None,
            global_data_path: None,
            global_data_delay_ms: DEFAULT_GLOBAL_DATA_DELAY.as_millis() as u64,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl EditorConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn global_data_delay(&self) -> Duration {
        Duration::from_millis(self.global_data_delay_ms)
    }
}
