//! CLI configuration, read from `chartopts.toml`.
//!
//! ```toml
//! [output]
//! pretty = true
//!
//! [logging]
//! level = "warn"
//! format = "text"
//! ```
//!
//! Every key is optional.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{CliError, Result};

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "chartopts.toml";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Indent normalized documents
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `info` or `chartopts_core=trace`
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl CliConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| CliError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve the configuration for a run.
    ///
    /// An explicit path must exist. Otherwise `chartopts.toml` in `dir` is used
    /// when present, and defaults apply when it is not.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let candidate: PathBuf = dir.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_full_config() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("chartopts.toml");
        std::fs::write(
            &path,
            r#"
[output]
pretty = false

[logging]
level = "debug"
format = "json"
"#,
        )?;

        let config = CliConfig::load(&path)?;
        assert!(!config.output.pretty);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
        Ok(())
    }

    #[test]
    fn test_missing_keys_use_defaults() -> anyhow::Result<()> {
        let config: CliConfig = toml::from_str("[logging]\nformat = \"json\"\n")?;
        assert!(config.output.pretty);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, LogFormat::Json);
        Ok(())
    }

    #[test]
    fn test_discover_without_file_is_default() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        assert_eq!(CliConfig::discover(None, dir.path())?, CliConfig::default());
        Ok(())
    }

    #[test]
    fn test_discover_finds_file_in_dir() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        std::fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "[output]\npretty = false\n")?;
        let config = CliConfig::discover(None, dir.path())?;
        assert!(!config.output.pretty);
        Ok(())
    }

    #[test]
    fn test_explicit_missing_file_fails() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let missing = dir.path().join("nope.toml");
        let err = CliConfig::discover(Some(&missing), dir.path()).unwrap_err();
        assert!(matches!(err, CliError::Read { .. }));
        Ok(())
    }

    #[test]
    fn test_bad_format_is_config_error() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("chartopts.toml");
        std::fs::write(&path, "[logging]\nformat = \"xml\"\n")?;
        let err = CliConfig::load(&path).unwrap_err();
        assert!(matches!(err, CliError::Config { .. }));
        Ok(())
    }
}
