//! Tracing setup for the CLI.
//!
//! Logs go to stderr so that command output on stdout stays machine-readable.
//! `CHARTOPTS_LOG` overrides the configured level.

use tracing_subscriber::{EnvFilter, prelude::*};

use crate::config::{LogFormat, LoggingConfig};

/// Environment variable holding a filter directive that wins over the config.
pub const LOG_ENV: &str = "CHARTOPTS_LOG";

/// Build the filter from `CHARTOPTS_LOG`, falling back to `level`, then to `warn`.
pub fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber. Call once, before any command runs.
pub fn init_logging(config: &LoggingConfig) {
    let registry = tracing_subscriber::registry().with(build_filter(&config.level));

    match config.format {
        LogFormat::Text => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true);
            registry.with(fmt_layer).init();
        }
        LogFormat::Json => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr);
            registry.with(fmt_layer).init();
        }
    }

    tracing::debug!(format = ?config.format, level = %config.level, "tracing initialized");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_level_falls_back() {
        if std::env::var_os(LOG_ENV).is_none() {
            assert_eq!(build_filter("chartopts=loud").to_string(), "warn");
        }
    }

    #[test]
    fn test_configured_level_used() {
        if std::env::var_os(LOG_ENV).is_none() {
            assert_eq!(build_filter("debug").to_string(), "debug");
        }
    }
}
