//! Logger registry
//!
//! Holds at most one logger per name. Lookup and creation happen under a
//! single lock, so concurrent first callers all receive the same logger.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use tracing_subscriber::filter::LevelFilter;

use super::logger::Logger;
use super::sink::Sink;
use crate::Result;
use crate::config::{LoggingSettings, Settings};

static GLOBAL_REGISTRY: OnceLock<LoggerRegistry> = OnceLock::new();

/// Registry of named loggers sharing one configuration and sink
#[derive(Debug)]
pub struct LoggerRegistry {
    level: LevelFilter,
    timestamp_format: String,
    sink: Sink,
    loggers: Mutex<HashMap<String, Logger>>,
}

impl LoggerRegistry {
    /// Registry writing to stderr with the given settings
    pub fn new(settings: &LoggingSettings) -> Result<Self> {
        Self::with_sink(settings, Sink::Stderr)
    }

    /// Registry writing to `sink` with the given settings
    pub fn with_sink(settings: &LoggingSettings, sink: Sink) -> Result<Self> {
        let level = settings.level_filter()?;
        settings.validate_timestamp_format()?;
        Ok(Self::from_parts(level, settings.timestamp_format.clone(), sink))
    }

    fn from_parts(level: LevelFilter, timestamp_format: String, sink: Sink) -> Self {
        Self {
            level,
            timestamp_format,
            sink,
            loggers: Mutex::new(HashMap::new()),
        }
    }

    /// Registry writing to stderr, configured from a TOML file
    pub fn from_config_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let settings = Settings::from_file(path)?;
        settings.validate()?;
        Self::new(&settings.logging)
    }

    /// Process-wide registry
    ///
    /// Always uses the fixed defaults: INFO minimum, the default timestamp
    /// layout and stderr. Environment and files are never consulted.
    pub fn global() -> &'static LoggerRegistry {
        GLOBAL_REGISTRY.get_or_init(LoggerRegistry::default)
    }

    fn loggers(&self) -> MutexGuard<'_, HashMap<String, Logger>> {
        self.loggers.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Get the logger registered under `name`, creating it on first request
    pub fn get_logger(&self, name: &str) -> Logger {
        let mut loggers = self.loggers();
        if let Some(logger) = loggers.get(name) {
            return logger.clone();
        }

        let logger = Logger::build(name, self.level, &self.timestamp_format, &self.sink);
        loggers.insert(name.to_string(), logger.clone());
        logger
    }

    pub fn contains(&self, name: &str) -> bool {
        self.loggers().contains_key(name)
    }

    /// Number of registered loggers
    pub fn len(&self) -> usize {
        self.loggers().len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers().is_empty()
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    pub fn sink(&self) -> &Sink {
        &self.sink
    }
}

impl Default for LoggerRegistry {
    fn default() -> Self {
        let settings = LoggingSettings::default();
        Self::from_parts(LevelFilter::INFO, settings.timestamp_format, Sink::Stderr)
    }
}

/// Get a logger from the process-wide registry
pub fn get_logger(name: &str) -> Logger {
    LoggerRegistry::global().get_logger(name)
}
