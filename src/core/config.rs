//! Configuration management for the Obsidian bridge.
//!
//! This module handles loading configuration from an optional TOML file and
//! environment variables, with sensible defaults for all settings except the
//! API key, which has no default.

use crate::core::error::{ObsidianError, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// API key for the Local REST API plugin. No default; calls fail with
    /// a configuration error until one is supplied.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Host the REST plugin listens on
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTPS port of the REST plugin
    #[serde(default = "default_port")]
    pub port: u16,

    /// Connect timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_sec: u64,

    /// Read timeout in seconds
    #[serde(default = "default_read_timeout")]
    pub read_timeout_sec: u64,
}

// Default value functions
fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    27124
}

fn default_connect_timeout() -> u64 {
    3
}

fn default_read_timeout() -> u64 {
    6
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            host: default_host(),
            port: default_port(),
            connect_timeout_sec: default_connect_timeout(),
            read_timeout_sec: default_read_timeout(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| ObsidianError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// A TOML file is only consulted when `OBSIDIAN_MCP_CONFIG` points at one.
    pub fn load() -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("OBSIDIAN_MCP_CONFIG") {
            Self::from_file(config_path)?
        } else {
            Self::default()
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(api_key) = env::var("OBSIDIAN_API_KEY") {
            if !api_key.is_empty() {
                self.api_key = Some(api_key);
            }
        }
        if let Ok(host) = env::var("OBSIDIAN_HOST") {
            if !host.is_empty() {
                self.host = host;
            }
        }
        if let Ok(port) = env::var("OBSIDIAN_PORT") {
            if let Ok(p) = port.parse() {
                self.port = p;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.host.is_empty() {
            return Err(ObsidianError::ConfigError(
                "Host must not be empty".to_string(),
            ));
        }

        if self.port == 0 {
            return Err(ObsidianError::ConfigError(
                "Port must be non-zero".to_string(),
            ));
        }

        if self.connect_timeout_sec == 0 || self.read_timeout_sec == 0 {
            return Err(ObsidianError::ConfigError(
                "Timeouts must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Base URL of the REST plugin. The certificate is self-signed, so the
    /// client disables verification.
    pub fn base_url(&self) -> String {
        format!("https://{}:{}", self.host, self.port)
    }

    /// Log configuration (redacting the API key)
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Host: {}", self.host);
        tracing::info!("  Port: {}", self.port);
        tracing::info!(
            "  API key: {}",
            if self.api_key.is_some() {
                "set"
            } else {
                "NOT SET"
            }
        );
        tracing::info!(
            "  Timeouts: {}s connect / {}s read",
            self.connect_timeout_sec,
            self.read_timeout_sec
        );
    }
}
