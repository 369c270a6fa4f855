//! Configuration management for the users API tooling.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file is read if present.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default base URL of the Pingdom REST API.
pub const DEFAULT_API_URL: &str = "https://api.pingdom.com/api/2.1";

/// Configuration for the users API tooling.
#[derive(Debug, Clone)]
pub struct Config {
    /// API base URL that request paths are joined to
    pub api_url: String,

    /// Log level used when `RUST_LOG` is not set (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `PINGDOM_API_URL`: Base URL for the API (default: `https://api.pingdom.com/api/2.1`)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let api_url = env::var("PINGDOM_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        // Validate API URL format
        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "PINGDOM_API_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let log_level = Self::parse_log_level("LOG_LEVEL", "error")?;

        Ok(Config { api_url, log_level })
    }

    /// Read a log level variable, checking it is one tracing understands.
    fn parse_log_level(var_name: &str, default: &str) -> ConfigResult<String> {
        match env::var(var_name) {
            Ok(val) => {
                let level = val.trim().to_ascii_lowercase();
                match level.as_str() {
                    "trace" | "debug" | "info" | "warn" | "error" | "off" => Ok(level),
                    _ => Err(ConfigError::InvalidValue {
                        var: var_name.to_string(),
                        reason: format!(
                            "Must be one of trace, debug, info, warn, error, off, got: {}",
                            val
                        ),
                    }),
                }
            }
            Err(_) => Ok(default.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: DEFAULT_API_URL.to_string(),
            log_level: "error".to_string(),
        }
    }
}
