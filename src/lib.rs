//! PennFlow error handling
//!
//! A small error taxonomy plus a set of handlers that turn an arbitrary caught
//! error into a logged, categorized PennFlow error.
//!
//! # Features
//!
//! - **Error taxonomy**: a base [`PennFlowError`] with message and optional
//!   code, and the [`AwsResourceError`], [`AuthenticationError`] and
//!   [`DatabaseError`] subtypes
//! - **Named loggers**: one logger per name, each writing
//!   `timestamp - name - LEVEL - message` records to a single sink
//! - **Handlers**: [`handle_aws_error`], [`handle_auth_error`] and
//!   [`handle_db_error`] log a contextual message at ERROR and return the
//!   typed error
//!
//! # Examples
//!
//! ```rust
//! use pennflow_errors::{DatabaseError, ErrorContext, handle_db_error};
//!
//! fn connect() -> Result<(), std::io::Error> {
//!     Err(std::io::Error::other("conn refused"))
//! }
//!
//! fn open() -> Result<(), DatabaseError> {
//!     let ctx = ErrorContext::for_operation("connect");
//!     connect().map_err(|e| handle_db_error(e, &ctx))?;
//!     Ok(())
//! }
//!
//! let err = open().unwrap_err();
//! assert_eq!(err.message(), "Database Error in connect: conn refused");
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod handler;
pub mod logging;

pub use config::{LoggingSettings, Settings};
pub use context::{ErrorContext, UNKNOWN_OPERATION};
pub use error::{
    AuthenticationError, AwsResourceError, DatabaseError, Error, ErrorCategory, PennFlowError,
    Result,
};
pub use handler::{ErrorHandler, handle_auth_error, handle_aws_error, handle_db_error};
pub use logging::{Logger, LoggerRegistry, get_logger};
