//! pagegen configuration types and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Main pagegen configuration
///
/// Only read when a path is given explicitly; a plain run uses the defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[serde(rename = "log-level")]
    pub log_level: Option<String>,

    /// Remote source settings
    pub fetch: FetchConfig,
}

impl Config {
    /// Load configuration from an explicit path, or fall back to defaults
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        match config_path {
            Some(path) => {
                Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()))
            }
            None => {
                debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Read only the log level, before logging is initialized
    ///
    /// Errors are swallowed here; `load` reports them once logging is up.
    pub fn load_log_level(config_path: Option<&PathBuf>) -> Option<String> {
        let path = config_path?;
        let content = fs::read_to_string(path).ok()?;
        let config: Self = serde_yaml::from_str(&content).ok()?;
        config.log_level
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

/// Settings for the HTTP client used by remote sources
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Request timeout in milliseconds; no timeout when unset
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: Option<u64>,

    /// User-Agent header sent with the request
    #[serde(rename = "user-agent")]
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_ms: None,
            user_agent: concat!("pagegen/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl FetchConfig {
    /// Request timeout as a Duration, if one is configured
    pub fn timeout(&self) -> Option<Duration> {
        debug!(timeout_ms = ?self.timeout_ms, "FetchConfig::timeout: called");
        self.timeout_ms.map(Duration::from_millis)
    }
}
