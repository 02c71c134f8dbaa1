//! Named loggers
//!
//! Each logger owns a private `tracing` dispatcher with exactly one sink, so
//! its records never pass through the application's global subscriber.

use std::sync::Arc;

use tracing::{Dispatch, Level, dispatcher};
use tracing_subscriber::filter::LevelFilter;

use super::format::RecordFormat;
use super::sink::Sink;

/// Handle to a named, configured logger
///
/// Clones share the same dispatcher and sink.
#[derive(Debug, Clone)]
pub struct Logger {
    inner: Arc<LoggerInner>,
}

#[derive(Debug)]
struct LoggerInner {
    name: String,
    level: LevelFilter,
    dispatch: Dispatch,
}

impl Logger {
    pub(crate) fn build(
        name: &str,
        level: LevelFilter,
        timestamp_format: &str,
        sink: &Sink,
    ) -> Self {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(sink.make_writer())
            .with_max_level(level)
            .with_ansi(false)
            .event_format(RecordFormat::new(name, timestamp_format))
            .finish();

        Self {
            inner: Arc::new(LoggerInner {
                name: name.to_string(),
                level,
                dispatch: Dispatch::new(subscriber),
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Minimum level this logger emits
    pub fn level(&self) -> LevelFilter {
        self.inner.level
    }

    pub fn is_enabled(&self, level: Level) -> bool {
        self.inner.level >= level
    }

    /// True when both handles refer to the same registered logger
    pub fn same_logger(&self, other: &Logger) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Emit `message` at `level`
    pub fn log(&self, level: Level, message: &str) {
        if !self.is_enabled(level) {
            return;
        }
        dispatcher::with_default(&self.inner.dispatch, || {
            if level == Level::ERROR {
                tracing::error!("{}", message);
            } else if level == Level::WARN {
                tracing::warn!("{}", message);
            } else if level == Level::INFO {
                tracing::info!("{}", message);
            } else if level == Level::DEBUG {
                tracing::debug!("{}", message);
            } else {
                tracing::trace!("{}", message);
            }
        });
    }

    pub fn error(&self, message: &str) {
        self.log(Level::ERROR, message);
    }

    pub fn warn(&self, message: &str) {
        self.log(Level::WARN, message);
    }

    pub fn info(&self, message: &str) {
        self.log(Level::INFO, message);
    }

    pub fn debug(&self, message: &str) {
        self.log(Level::DEBUG, message);
    }
}
