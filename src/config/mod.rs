//! Configuration for explicitly constructed logger registries
//!
//! The process-wide registry always uses the fixed defaults; these settings
//! only apply to registries built through [`crate::LoggerRegistry::new`],
//! [`crate::LoggerRegistry::with_sink`] or
//! [`crate::LoggerRegistry::from_config_file`].

pub mod settings;

pub use settings::{LoggingSettings, Settings};
