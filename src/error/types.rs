//! Error taxonomy
//!
//! A base error carrying a message and an optional code, three categorized
//! subtypes produced by the handlers, and the crate-wide [`Error`] enum.

use thiserror::Error;

use super::category::ErrorCategory;

/// Base error kind for PennFlow
///
/// Displays as its message, nothing more.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct PennFlowError {
    message: String,
    error_code: Option<String>,
}

impl PennFlowError {
    /// Create an error without an error code
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error_code: None,
        }
    }

    /// Create an error carrying an error code
    pub fn with_code(message: impl Into<String>, error_code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error_code: Some(error_code.into()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn error_code(&self) -> Option<&str> {
        self.error_code.as_deref()
    }
}

macro_rules! category_error {
    ($(#[$meta:meta])* $name:ident => $category:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Error)]
        #[error(transparent)]
        #[must_use = "a handled error should be returned or propagated"]
        pub struct $name(PennFlowError);

        impl $name {
            /// Category this error kind is tagged with
            pub const CATEGORY: ErrorCategory = $category;

            /// Create an error without an error code
            pub fn new(message: impl Into<String>) -> Self {
                Self(PennFlowError::new(message))
            }

            /// Create an error carrying an error code
            pub fn with_code(message: impl Into<String>, error_code: impl Into<String>) -> Self {
                Self(PennFlowError::with_code(message, error_code))
            }

            pub fn message(&self) -> &str {
                self.0.message()
            }

            pub fn error_code(&self) -> Option<&str> {
                self.0.error_code()
            }

            pub fn category(&self) -> ErrorCategory {
                Self::CATEGORY
            }

            /// Borrow the base error
            pub fn as_base(&self) -> &PennFlowError {
                &self.0
            }
        }

        impl From<PennFlowError> for $name {
            fn from(base: PennFlowError) -> Self {
                Self(base)
            }
        }

        impl From<$name> for PennFlowError {
            fn from(err: $name) -> Self {
                err.0
            }
        }
    };
}

category_error!(
    /// Failure while working with an AWS resource
    AwsResourceError => ErrorCategory::AwsResource
);

category_error!(
    /// Failure while authenticating a caller
    AuthenticationError => ErrorCategory::Authentication
);

category_error!(
    /// Failure while talking to the database
    DatabaseError => ErrorCategory::Database
);

/// Main error type for the crate
#[derive(Debug, Error)]
pub enum Error {
    /// Uncategorized PennFlow error
    #[error(transparent)]
    Base(#[from] PennFlowError),

    /// AWS resource errors
    #[error(transparent)]
    AwsResource(#[from] AwsResourceError),

    /// Authentication errors
    #[error(transparent)]
    Authentication(#[from] AuthenticationError),

    /// Database errors
    #[error(transparent)]
    Database(#[from] DatabaseError),

    /// Configuration errors
    #[error("Configuration error in {field}: {message}")]
    Config {
        /// The configuration field that has an error
        field: String,
        /// Error message describing the issue
        message: String,
    },

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML configuration parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a configuration error
    pub fn config<S: Into<String>>(field: S, message: S) -> Self {
        Self::Config {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Wrap a base error into the variant matching `category`
    pub fn categorized(category: ErrorCategory, base: PennFlowError) -> Self {
        match category {
            ErrorCategory::AwsResource => Self::AwsResource(base.into()),
            ErrorCategory::Authentication => Self::Authentication(base.into()),
            ErrorCategory::Database => Self::Database(base.into()),
        }
    }

    /// Category of a handler-produced error, if this is one
    pub fn handled_category(&self) -> Option<ErrorCategory> {
        match self {
            Error::AwsResource(..) => Some(ErrorCategory::AwsResource),
            Error::Authentication(..) => Some(ErrorCategory::Authentication),
            Error::Database(..) => Some(ErrorCategory::Database),
            _ => None,
        }
    }

    /// Error code carried by taxonomy errors
    pub fn error_code(&self) -> Option<&str> {
        match self {
            Error::Base(e) => e.error_code(),
            Error::AwsResource(e) => e.error_code(),
            Error::Authentication(e) => e.error_code(),
            Error::Database(e) => e.error_code(),
            _ => None,
        }
    }

    /// Get error category for logging/metrics
    pub fn category(&self) -> &'static str {
        match self {
            Error::Base(..) => "pennflow",
            Error::AwsResource(..) => ErrorCategory::AwsResource.as_str(),
            Error::Authentication(..) => ErrorCategory::Authentication.as_str(),
            Error::Database(..) => ErrorCategory::Database.as_str(),
            Error::Config { .. } => "config",
            Error::Io(..) => "io",
            Error::Toml(..) => "toml",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_base_error_with_code() {
        let err = PennFlowError::with_code("msg", "CODE1");
        assert_eq!(err.message(), "msg");
        assert_eq!(err.error_code(), Some("CODE1"));
        assert_eq!(err.to_string(), "msg");
    }

    #[test]
    fn test_base_error_without_code() {
        let err = PennFlowError::new("msg");
        assert_eq!(err.message(), "msg");
        assert!(err.error_code().is_none());
    }

    #[test]
    fn test_subtype_upcast_keeps_fields() {
        let err = DatabaseError::with_code("connection lost", "DB42");
        assert_eq!(err.category(), ErrorCategory::Database);
        assert_eq!(err.to_string(), "connection lost");

        let base: PennFlowError = err.into();
        assert_eq!(base, PennFlowError::with_code("connection lost", "DB42"));
    }

    #[test]
    fn test_subtypes_have_no_source() {
        use std::error::Error as _;

        let err = AuthenticationError::new("bad token");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_categorized_variant() {
        let err = Error::categorized(ErrorCategory::AwsResource, PennFlowError::new("boom"));
        assert!(matches!(err, Error::AwsResource(_)));
        assert_eq!(err.handled_category(), Some(ErrorCategory::AwsResource));
        assert_eq!(err.category(), "aws_resource");
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn test_config_error() {
        let err = Error::config("level", "Invalid log level: loud");
        assert!(err.handled_category().is_none());
        assert!(err.error_code().is_none());
        assert_eq!(err.category(), "config");
        assert_eq!(
            err.to_string(),
            "Configuration error in level: Invalid log level: loud"
        );
    }

    #[test]
    fn test_error_code_through_enum() {
        let err: Error = PennFlowError::with_code("msg", "CODE1").into();
        assert_eq!(err.error_code(), Some("CODE1"));
        assert_eq!(err.category(), "pennflow");
    }
}
