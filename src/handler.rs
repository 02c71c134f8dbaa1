//! Error handlers
//!
//! Each handler logs a categorized message through its category logger and
//! hands back a new typed error carrying that message. The original error is
//! only read for its text; it is not kept as the new error's source.

use std::fmt::Display;

use crate::context::ErrorContext;
use crate::error::{
    AuthenticationError, AwsResourceError, DatabaseError, Error, ErrorCategory, PennFlowError,
    format_handled_message,
};
use crate::logging::LoggerRegistry;

/// Logs and categorizes caught errors through a logger registry
#[derive(Debug, Clone, Copy)]
pub struct ErrorHandler<'r> {
    registry: &'r LoggerRegistry,
}

impl ErrorHandler<'static> {
    /// Handler bound to the process-wide registry
    pub fn global() -> Self {
        Self::new(LoggerRegistry::global())
    }
}

impl<'r> ErrorHandler<'r> {
    pub fn new(registry: &'r LoggerRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'r LoggerRegistry {
        self.registry
    }

    fn report(
        &self,
        category: ErrorCategory,
        error: &dyn Display,
        context: &ErrorContext,
    ) -> PennFlowError {
        let message = format_handled_message(category, context.operation_or_default(), error);
        self.registry
            .get_logger(category.logger_name())
            .error(&message);
        PennFlowError::new(message)
    }

    /// Log `error` under `category` and return the matching [`Error`] variant
    #[must_use]
    pub fn handle(
        &self,
        category: ErrorCategory,
        error: impl Display,
        context: &ErrorContext,
    ) -> Error {
        Error::categorized(category, self.report(category, &error, context))
    }

    #[must_use]
    pub fn aws(&self, error: impl Display, context: &ErrorContext) -> AwsResourceError {
        self.report(ErrorCategory::AwsResource, &error, context).into()
    }

    #[must_use]
    pub fn auth(&self, error: impl Display, context: &ErrorContext) -> AuthenticationError {
        self.report(ErrorCategory::Authentication, &error, context)
            .into()
    }

    #[must_use]
    pub fn db(&self, error: impl Display, context: &ErrorContext) -> DatabaseError {
        self.report(ErrorCategory::Database, &error, context).into()
    }
}

/// Log an AWS failure through the `aws_error` logger
///
/// ```
/// use pennflow_errors::{ErrorContext, handle_aws_error};
///
/// let ctx = ErrorContext::for_operation("upload_file");
/// let err = handle_aws_error("access denied", &ctx);
/// assert_eq!(err.message(), "AWS Error in upload_file: access denied");
/// ```
#[must_use]
pub fn handle_aws_error(error: impl Display, context: &ErrorContext) -> AwsResourceError {
    ErrorHandler::global().aws(error, context)
}

/// Log an authentication failure through the `auth_error` logger
#[must_use]
pub fn handle_auth_error(error: impl Display, context: &ErrorContext) -> AuthenticationError {
    ErrorHandler::global().auth(error, context)
}

/// Log a database failure through the `db_error` logger
#[must_use]
pub fn handle_db_error(error: impl Display, context: &ErrorContext) -> DatabaseError {
    ErrorHandler::global().db(error, context)
}
