//! Error formatting utilities
//!
//! Builds the message text carried by handled errors and a structured view
//! of crate errors for log shipping.

use std::fmt::Display;

use super::category::ErrorCategory;
use crate::Error;

/// Format the message of a handled error
///
/// Produces `"<Category> Error in <operation>: <error>"`.
pub fn format_handled_message(
    category: ErrorCategory,
    operation: &str,
    error: &dyn Display,
) -> String {
    format!("{} Error in {}: {}", category.label(), operation, error)
}

/// Format error for logging with structured data
pub fn format_error_for_logging(error: &Error) -> serde_json::Value {
    let mut log_data = serde_json::json!({
        "message": error.to_string(),
        "category": error.category(),
    });

    if let Some(code) = error.error_code() {
        log_data["error_code"] = serde_json::Value::String(code.to_string());
    }
    if let Some(category) = error.handled_category() {
        log_data["handled_category"] = serde_json::Value::String(category.label().to_string());
    }

    log_data
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DatabaseError, PennFlowError};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_handled_message_format() {
        let message = format_handled_message(ErrorCategory::AwsResource, "upload_file", &"denied");
        assert_eq!(message, "AWS Error in upload_file: denied");
    }

    #[test]
    fn test_handled_message_with_error_value() {
        let io_error = std::io::Error::other("disk full");
        let message = format_handled_message(ErrorCategory::Database, "flush", &io_error);
        assert_eq!(message, "Database Error in flush: disk full");
    }

    #[test]
    fn test_logging_format_for_handled_error() {
        let error: Error = DatabaseError::new("Database Error in connect: conn refused").into();
        let log_data = format_error_for_logging(&error);

        assert_eq!(
            log_data["message"].as_str().unwrap(),
            "Database Error in connect: conn refused"
        );
        assert_eq!(log_data["category"].as_str().unwrap(), "database");
        assert_eq!(log_data["handled_category"].as_str().unwrap(), "Database");
        assert!(log_data.get("error_code").is_none());
    }

    #[test]
    fn test_logging_format_with_code() {
        let error: Error = PennFlowError::with_code("msg", "CODE1").into();
        let log_data = format_error_for_logging(&error);

        assert_eq!(log_data["error_code"].as_str().unwrap(), "CODE1");
        assert!(log_data.get("handled_category").is_none());
    }
}
