//! Application configuration management
//!
//! Handles config loading, validation, and environment variable processing
//! following the precedence: defaults -> .env -> env vars -> CLI args.

use crate::primitives::*;
use crate::registry::DEFAULT_REGISTRY_URL;
use clap::Parser;
use serde::Deserialize;
use std::path::PathBuf;

/// Default configuration values
pub mod defaults {
    pub const LOG_LEVEL: &str = "0"; // Error-only logging by default
    pub const LOG_FORMAT: &str = "text";
    pub const LOG_OUTPUT: &str = "stderr";
    pub const COLOR: &str = "auto";
    pub const NET_TIMEOUT: &str = "30";
    pub const RENDER_DIR: &str = "renders";
    pub const DATA_DIR: &str = "data";
}

/// Default value functions for configuration fields
mod default_fns {
    use super::*;

    pub fn registry_url() -> String {
        DEFAULT_REGISTRY_URL.to_string()
    }

    pub fn log_level() -> u8 {
        0
    }

    pub fn log_format() -> LogFormat {
        LogFormat::Text
    }

    pub fn log_output() -> LogOutput {
        LogOutput::Stderr
    }

    pub fn color() -> ColorIntent {
        ColorIntent::Auto
    }

    pub fn net_timeout() -> u64 {
        30
    }

    pub fn render_dir() -> PathBuf {
        PathBuf::from(defaults::RENDER_DIR)
    }

    pub fn data_dir() -> PathBuf {
        PathBuf::from(defaults::DATA_DIR)
    }
}

/// Application configuration structure
#[derive(Debug, Clone, Parser, Deserialize)]
pub struct AppConfig {
    /// Registry base URL
    #[arg(long, global = true, env = "DEPGRAPH_REGISTRY_URL", default_value = DEFAULT_REGISTRY_URL)]
    #[serde(default = "default_fns::registry_url")]
    pub registry_url: String,

    /// Registry API key
    #[arg(long, global = true, env = "CEREBRO_API_KEY", hide_env_values = true)]
    #[serde(default)]
    pub api_key: Option<String>,

    /// Registry request timeout in seconds
    #[arg(long, global = true, env = "DEPGRAPH_NET_TIMEOUT", default_value = defaults::NET_TIMEOUT)]
    #[serde(default = "default_fns::net_timeout")]
    pub net_timeout: u64,

    /// Directory for rendered graphs
    #[arg(long, global = true, env = "DEPGRAPH_RENDER_DIR", default_value = defaults::RENDER_DIR)]
    #[serde(default = "default_fns::render_dir")]
    pub render_dir: PathBuf,

    /// Directory for JSON and plain English exports
    #[arg(long, global = true, env = "DEPGRAPH_DATA_DIR", default_value = defaults::DATA_DIR)]
    #[serde(default = "default_fns::data_dir")]
    pub data_dir: PathBuf,

    /// Verbosity level (0=error, 1=warn, 2=info, 3=debug, 4=trace)
    #[arg(long, global = true, env = "DEPGRAPH_LOG_LEVEL", default_value = defaults::LOG_LEVEL)]
    #[serde(default = "default_fns::log_level")]
    pub log_level: u8,

    /// Log format (text, json, yaml)
    #[arg(long, global = true, env = "DEPGRAPH_LOG_FORMAT", default_value = defaults::LOG_FORMAT)]
    #[serde(default = "default_fns::log_format")]
    pub log_format: LogFormat,

    /// Log output stream (stderr, stdout)
    #[arg(long, global = true, env = "DEPGRAPH_LOG_OUTPUT", default_value = defaults::LOG_OUTPUT)]
    #[serde(default = "default_fns::log_output")]
    pub log_output: LogOutput,

    /// Color output control (auto, always, never)
    #[arg(long, global = true, env = "DEPGRAPH_COLOR", default_value = defaults::COLOR)]
    #[serde(default = "default_fns::color")]
    pub color: ColorIntent,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            registry_url: default_fns::registry_url(),
            api_key: None,
            net_timeout: default_fns::net_timeout(),
            render_dir: default_fns::render_dir(),
            data_dir: default_fns::data_dir(),
            log_level: default_fns::log_level(),
            log_format: default_fns::log_format(),
            log_output: default_fns::log_output(),
            color: default_fns::color(),
        }
    }
}

impl AppConfig {
    /// Create LoggerConfig from AppConfig and the resolved color decision
    pub fn to_logger_config(&self, color: bool) -> LoggerConfig {
        LoggerConfig {
            level: LogLevel::from_verbosity(self.log_level),
            format: self.log_format,
            output: self.log_output,
            color,
        }
    }

    /// Merge this config with another, taking non-default values from other
    pub fn merge_with(mut self, other: Self) -> Self {
        if other.api_key.is_some() {
            self.api_key = other.api_key;
        }

        if other.registry_url != default_fns::registry_url() {
            self.registry_url = other.registry_url;
        }
        if other.net_timeout != default_fns::net_timeout() {
            self.net_timeout = other.net_timeout;
        }
        if other.render_dir != default_fns::render_dir() {
            self.render_dir = other.render_dir;
        }
        if other.data_dir != default_fns::data_dir() {
            self.data_dir = other.data_dir;
        }
        if other.log_level != default_fns::log_level() {
            self.log_level = other.log_level;
        }

        if !matches!(other.log_format, LogFormat::Text) {
            self.log_format = other.log_format;
        }
        if !matches!(other.log_output, LogOutput::Stderr) {
            self.log_output = other.log_output;
        }
        if !matches!(other.color, ColorIntent::Auto) {
            self.color = other.color;
        }

        self
    }

    /// Validate the final configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.net_timeout == 0 {
            return Err(ConfigError::ValidationFailed {
                reason: "net_timeout must be greater than zero".to_string(),
            });
        }

        if !(self.registry_url.starts_with("http://") || self.registry_url.starts_with("https://")) {
            return Err(ConfigError::ValidationFailed {
                reason: format!("registry_url '{}' is not an http(s) URL", self.registry_url),
            });
        }

        Ok(())
    }

    /// The API key, or [`ConfigError::MissingApiKey`] when unset or blank
    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)
    }
}

#[cfg(test)]
mod tests {
    include!("config.test.rs");
}
