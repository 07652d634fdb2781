//! Runtime configuration
//!
//! Configuration is optional; `RuntimeConfig::default()` is the behavior
//! emitted code normally runs with. A TOML file can adjust logging and the
//! print sink chain.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log filter (e.g. "info", "quill_runtime=debug"); RUST_LOG takes
    /// precedence when set
    #[serde(default)]
    pub filter: Option<String>,

    /// Emit JSON-formatted logs (requires the `json-logging` feature)
    #[serde(default)]
    pub json_format: bool,
}

/// Which sinks answer emitted `print` calls
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrintSinkConfig {
    /// Probe in preference order: stdout first, then the log pipeline
    #[default]
    Auto,
    /// Standard output only
    Stdout,
    /// Tracing pipeline only
    Log,
    /// No sink; `print` raises UnsupportedOperation
    Disabled,
}

/// Top-level runtime configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: Option<LoggingConfig>,

    /// Print sink selection
    #[serde(default)]
    pub print_sink: PrintSinkConfig,
}

impl RuntimeConfig {
    /// Parse a configuration from a TOML string
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Load a configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}
