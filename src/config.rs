//! Configuration management for the messenger server.
//!
//! This module handles loading and validating configuration from environment variables.
//! It avoids polluting stdout (which MCP uses for communication) by loading the
//! .env file through dotenvy, which never prints.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the messenger server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Default cap on suggestions returned per lookup (default: 0, unlimited)
    pub max_suggestions: usize,

    /// Log level used when RUST_LOG is unset (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `MAX_SUGGESTIONS`: Default suggestion cap, 0 for unlimited (default: 0)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env is fine; a malformed one is not
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(ConfigError::DotenvError(e.to_string()));
            }
        }

        let max_suggestions = Self::parse_env_usize("MAX_SUGGESTIONS", 0)?;

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());
        if log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        Ok(Config {
            max_suggestions,
            log_level,
        })
    }

    /// Suggestion cap as an Option, None meaning unlimited.
    pub fn suggestion_limit(&self) -> Option<usize> {
        (self.max_suggestions > 0).then_some(self.max_suggestions)
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_suggestions: 0,
            log_level: "error".to_string(),
        }
    }
}
