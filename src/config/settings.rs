//! Logging configuration settings
//!
//! Settings for registries a caller constructs explicitly. They come from
//! defaults or a caller-supplied TOML file; the process-wide registry never
//! reads them.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use tracing_subscriber::filter::LevelFilter;

// Helper functions for serde defaults
fn default_log_level() -> String {
    "info".to_string()
}

fn default_timestamp_format() -> String {
    "%Y-%m-%d %H:%M:%S,%3f".to_string()
}

/// Main configuration settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Minimum level (trace, debug, info, warn, error, off)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// strftime pattern for the record timestamp
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            timestamp_format: default_timestamp_format(),
        }
    }
}

impl LoggingSettings {
    /// Parse the configured level
    ///
    /// Accepts `warning` as an alias of `warn`.
    pub fn level_filter(&self) -> crate::Result<LevelFilter> {
        let level = self.level.trim().to_lowercase();
        let level = if level == "warning" { "warn" } else { &level };
        level.parse().map_err(|_| {
            crate::Error::config("level", &format!("Invalid log level: {}", self.level))
        })
    }

    /// Check that the timestamp pattern is a usable strftime string
    pub fn validate_timestamp_format(&self) -> crate::Result<()> {
        if self.timestamp_format.is_empty() {
            return Err(crate::Error::config(
                "timestamp_format",
                "Invalid timestamp format: cannot be empty",
            ));
        }
        if StrftimeItems::new(&self.timestamp_format).any(|item| matches!(item, Item::Error)) {
            return Err(crate::Error::config(
                "timestamp_format",
                &format!("Invalid timestamp format: {}", self.timestamp_format),
            ));
        }
        Ok(())
    }
}

impl Settings {
    /// Load settings from configuration file
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            crate::Error::config("file", &format!("Failed to read config file: {}", e))
        })?;

        let settings: Settings = toml::from_str(&content).map_err(|e| {
            crate::Error::config("file", &format!("Failed to parse config file: {}", e))
        })?;

        Ok(settings)
    }

    /// Validate configuration settings
    pub fn validate(&self) -> crate::Result<()> {
        self.logging.level_filter()?;
        self.logging.validate_timestamp_format()?;
        Ok(())
    }
}
