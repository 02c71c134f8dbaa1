//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

#![allow(dead_code)]

use pennflow_errors::config::LoggingSettings;
use pennflow_errors::logging::{CaptureBuffer, Sink};
use pennflow_errors::{ErrorCategory, LoggerRegistry};

/// Registry writing into an in-memory buffer
pub fn capture_registry() -> (LoggerRegistry, CaptureBuffer) {
    capture_registry_with(LoggingSettings::default())
}

/// Capture registry with custom settings
pub fn capture_registry_with(settings: LoggingSettings) -> (LoggerRegistry, CaptureBuffer) {
    let buffer = CaptureBuffer::new();
    let registry = LoggerRegistry::with_sink(&settings, Sink::Buffer(buffer.clone()))
        .expect("test logging settings are valid");
    (registry, buffer)
}

/// Split a record into its four ` - ` separated parts
pub fn record_parts(line: &str) -> (String, String, String, String) {
    let mut parts = line.splitn(4, " - ").map(str::to_owned);
    let mut next = || parts.next().expect("record has four parts");
    let timestamp = next();
    let name = next();
    let level = next();
    let message = next();
    (timestamp, name, level, message)
}

/// Expected logger name for each category
pub fn logger_for(category: ErrorCategory) -> &'static str {
    match category {
        ErrorCategory::AwsResource => "aws_error",
        ErrorCategory::Authentication => "auth_error",
        ErrorCategory::Database => "db_error",
    }
}
