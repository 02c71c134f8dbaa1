//! Error handling for PennFlow
//!
//! This module defines the error taxonomy and the message formatting shared by
//! the handlers.

pub mod category;
pub mod formatting;
pub mod types;

pub use category::ErrorCategory;
pub use formatting::{format_error_for_logging, format_handled_message};
pub use types::{
    AuthenticationError, AwsResourceError, DatabaseError, Error, PennFlowError, Result,
};
