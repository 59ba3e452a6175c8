//! HTTP Server Configuration
//!
//! Listener address and browser origins. Embedded in the service `Config`
//! with `#[serde(flatten)]`, so its keys sit at the top level of the config
//! file.

use serde::{Deserialize, Serialize};

/// Listener and CORS settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Origins the browser UI is served from. Empty allows any origin.
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3004
}

fn default_cors_origins() -> Vec<String> {
    ["http://localhost:5173", "http://127.0.0.1:5173", "http://localhost:3000"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
        }
    }
}

impl HttpServerConfig {
    /// `host:port` string handed to the listener
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// True when no origin list is configured
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.is_empty()
    }

    /// Checks the listener settings, returning the first problem found
    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("port must be > 0".to_string());
        }
        if self.host.trim().is_empty() {
            return Err("host must not be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_listen_on_3004() {
        let config = HttpServerConfig::default();
        assert_eq!(config.socket_addr(), "0.0.0.0:3004");
        assert!(!config.allows_any_origin());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: HttpServerConfig = serde_json::from_str(r#"{"port": 9000}"#).unwrap();
        assert_eq!(config.socket_addr(), "0.0.0.0:9000");
        assert_eq!(config.cors_origins, default_cors_origins());
    }

    #[test]
    fn test_empty_origin_list_allows_any() {
        let config: HttpServerConfig =
            serde_json::from_str(r#"{"cors_origins": []}"#).unwrap();
        assert!(config.allows_any_origin());
    }

    #[test]
    fn test_validate_rejects_zero_port_and_blank_host() {
        let zero_port = HttpServerConfig {
            port: 0,
            ..Default::default()
        };
        assert_eq!(zero_port.validate().unwrap_err(), "port must be > 0");

        let blank_host = HttpServerConfig {
            host: "  ".to_string(),
            ..Default::default()
        };
        assert!(blank_host.validate().is_err());
        assert!(HttpServerConfig::default().validate().is_ok());
    }
}
