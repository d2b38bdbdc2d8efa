//! chartopts CLI library
//!
//! Exposes the command implementations for programmatic use and testing.

pub mod commands;
pub mod config;
pub mod error;
pub mod logging;

pub use config::{CliConfig, LogFormat, LoggingConfig, OutputConfig};
pub use error::CliError;
