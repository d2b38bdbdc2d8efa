use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced to the user by CLI commands.
#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    #[error("failed to read {}", .path.display())]
    #[diagnostic(code(chartopts::io::read))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}", .path.display())]
    #[diagnostic(code(chartopts::io::write))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration in {}", .path.display())]
    #[diagnostic(
        code(chartopts::config),
        help("expected `[output]` and `[logging]` tables, see `chartopts --help`")
    )]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("{} is not a valid chart option: {error}", .path.display())]
    #[diagnostic(code(chartopts::decode))]
    Decode {
        path: PathBuf,
        error: chartopts_core::Error,
    },

    #[error("{} has keys the chart model does not carry: {}", .path.display(), .fields.join(", "))]
    #[diagnostic(
        code(chartopts::unmodeled),
        help("these keys are dropped by `chartopts normalize`; remove them or run `check` without `--strict`")
    )]
    Unmodeled { path: PathBuf, fields: Vec<String> },

    #[error("failed to encode output: {0}")]
    #[diagnostic(code(chartopts::encode))]
    Encode(#[source] chartopts_core::Error),

    #[error("failed to serialize schema: {0}")]
    #[diagnostic(code(chartopts::schema))]
    Schema(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
