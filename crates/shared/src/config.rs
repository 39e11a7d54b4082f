//! Service configuration
//!
//! Sources are layered: built-in defaults, then an optional JSON file, then
//! `CENTER_*` environment variables. Command-line flags are applied last by
//! the binary itself.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

pub const ENV_BIND_ADDRESS: &str = "CENTER_BIND_ADDRESS";
pub const ENV_DATA_FILE: &str = "CENTER_DATA_FILE";
pub const ENV_LOG_LEVEL: &str = "CENTER_LOG_LEVEL";

/// Settings of the learning-center service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// Address the HTTP server listens on
    pub bind_address: SocketAddr,

    /// JSON snapshot of the tables; `None` keeps everything in memory
    pub data_file: Option<PathBuf>,

    /// Default tracing filter when RUST_LOG is unset
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([127, 0, 0, 1], 8080)),
            data_file: None,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON file. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Defaults, overlaid by `file` when given, overlaid by the environment
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let config = match file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.with_env(|key| std::env::var(key).ok())
    }

    /// Overlay values found through `lookup` (normally the process environment)
    pub fn with_env<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_BIND_ADDRESS) {
            self.bind_address = value.parse().map_err(|_| ConfigError::InvalidValue {
                key: ENV_BIND_ADDRESS.to_string(),
                value: value.clone(),
            })?;
        }
        if let Some(value) = lookup(ENV_DATA_FILE) {
            self.data_file = (!value.trim().is_empty()).then(|| PathBuf::from(value));
        }
        if let Some(value) = lookup(ENV_LOG_LEVEL) {
            if !value.trim().is_empty() {
                self.log_level = value;
            }
        }
        Ok(self)
    }
}
