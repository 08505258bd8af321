//! Configuration management for the address book demo.
//!
//! This module handles loading and validating configuration from environment
//! variables, reading a `.env` file first if one is present.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Log levels accepted by `ADDRESS_BOOK_LOG_LEVEL`.
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configuration for the address book demo binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Log level used when `RUST_LOG` is not set (default: "error")
    pub log_level: String,

    /// Whether to seed the book with the sample contacts (default: true)
    pub demo_contacts: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_LOG_LEVEL`: one of trace/debug/info/warn/error (default: "error")
    /// - `ADDRESS_BOOK_DEMO_CONTACTS`: true/false/1/0 (default: true)
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is not an error
        let _ = dotenvy::dotenv();

        let log_level = match env::var("ADDRESS_BOOK_LOG_LEVEL") {
            Ok(val) => Self::parse_log_level("ADDRESS_BOOK_LOG_LEVEL", &val)?,
            Err(_) => "error".to_string(),
        };
        let demo_contacts = Self::parse_env_bool("ADDRESS_BOOK_DEMO_CONTACTS", true)?;

        Ok(Config {
            log_level,
            demo_contacts,
        })
    }

    /// Validate and normalise a log level.
    fn parse_log_level(var_name: &str, val: &str) -> ConfigResult<String> {
        let level = val.trim().to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be one of {}, got: {}", LOG_LEVELS.join("/"), val),
            });
        }
        Ok(level)
    }

    /// Parse an environment variable as bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_lowercase().as_str() {
                "true" | "1" => Ok(true),
                "false" | "0" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true/false/1/0, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "error".to_string(),
            demo_contacts: true,
        }
    }
}
