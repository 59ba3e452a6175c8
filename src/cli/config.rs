//! Service configuration
//!
//! Resolution order, later wins:
//! 1. Built-in defaults
//! 2. JSON config file (`--config`)
//! 3. `PORT` environment variable
//! 4. Command line flags

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::http_server::HttpServerConfig;

use super::args::Overrides;
use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Listener and CORS settings (`host`, `port`, `cors_origins`)
    #[serde(flatten)]
    pub http: HttpServerConfig,

    /// JSON data file holding every company
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// File receiving a copy of every log line; `null` disables it
    #[serde(default = "default_log_file")]
    pub log_file: Option<PathBuf>,

    /// Default log filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_data_file() -> PathBuf {
    PathBuf::from("data").join("data.json")
}

fn default_log_file() -> Option<PathBuf> {
    Some(PathBuf::from("company-api.log"))
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http: HttpServerConfig::default(),
            data_file: default_data_file(),
            log_file: default_log_file(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Resolve the effective configuration for a command
    pub fn resolve(overrides: &Overrides, env_port: Option<&str>) -> CliResult<Self> {
        let mut config = match &overrides.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Some(raw) = env_port {
            config.http.port = raw
                .trim()
                .parse()
                .map_err(|_| CliError::config_error(format!("Invalid PORT value: '{}'", raw)))?;
        }
        if let Some(port) = overrides.port {
            config.http.port = port;
        }
        if let Some(data_file) = &overrides.data_file {
            config.data_file = data_file.clone();
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        self.http.validate().map_err(CliError::config_error)?;
        if self.data_file.as_os_str().is_empty() {
            return Err(CliError::config_error("data_file must not be empty"));
        }
        Ok(())
    }
}
