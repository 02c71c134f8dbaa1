//! Error categories routed by the handlers

use std::fmt;

/// Category of a handled error
///
/// Decides the message prefix, the logger used and the error kind produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    AwsResource,
    Authentication,
    Database,
}

impl ErrorCategory {
    pub const ALL: [ErrorCategory; 3] = [
        ErrorCategory::AwsResource,
        ErrorCategory::Authentication,
        ErrorCategory::Database,
    ];

    /// Prefix used in handled error messages
    pub fn label(self) -> &'static str {
        match self {
            ErrorCategory::AwsResource => "AWS",
            ErrorCategory::Authentication => "Authentication",
            ErrorCategory::Database => "Database",
        }
    }

    /// Name of the logger this category reports through
    pub fn logger_name(self) -> &'static str {
        match self {
            ErrorCategory::AwsResource => "aws_error",
            ErrorCategory::Authentication => "auth_error",
            ErrorCategory::Database => "db_error",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCategory::AwsResource => "aws_resource",
            ErrorCategory::Authentication => "authentication",
            ErrorCategory::Database => "database",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
