//! Consistently formatted named loggers
//!
//! Loggers are obtained from a [`LoggerRegistry`], either the process-wide one
//! via [`get_logger`] or an explicit instance owned by the caller.

pub mod format;
pub mod logger;
pub mod registry;
pub mod sink;

pub use logger::Logger;
pub use registry::{LoggerRegistry, get_logger};
pub use sink::{CaptureBuffer, Sink};
