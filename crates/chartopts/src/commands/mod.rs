pub mod check;
pub mod normalize;
pub mod schema;

pub use check::*;
pub use normalize::*;
pub use schema::*;

use chartopts_core::{ChartOption, FieldPath, dropped_keys};
use owo_colors::OwoColorize;
use serde_json::Value;
use std::fmt::Display;
use std::path::Path;
use tracing::warn;

use crate::error::{CliError, Result};

/// A decoded file together with the input keys its re-encoding drops.
#[derive(Debug, Clone)]
pub struct LoadedOption {
    pub option: ChartOption,
    pub dropped: Vec<FieldPath>,
}

/// Read and decode one chart option file.
pub fn read_option(path: &Path) -> Result<LoadedOption> {
    let bytes = std::fs::read(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let decode_error = |error: chartopts_core::Error| CliError::Decode {
        path: path.to_path_buf(),
        error,
    };
    let source: Value =
        serde_json::from_slice(&bytes).map_err(|err| decode_error(err.into()))?;
    let option = ChartOption::from_json_value(source.clone()).map_err(decode_error)?;
    let encoded = option.to_json_value().map_err(CliError::Encode)?;

    let dropped = dropped_keys(&source, &encoded);
    for field in &dropped {
        warn!(path = %path.display(), %field, "key is not part of the chart model");
    }
    Ok(LoadedOption { option, dropped })
}

/// Print one warning line per dropped key.
pub(crate) fn warn_dropped<T: Display>(path: &Path, dropped: &[T]) {
    for field in dropped {
        eprintln!(
            "{} {}: `{}` is not part of the chart model and is dropped",
            "warning".yellow(),
            path.display(),
            field
        );
    }
}

/// Write `content` to `output`, or to stdout when no path is given.
pub(crate) fn emit(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, content).map_err(|source| CliError::Write {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            println!("{}", content);
            Ok(())
        }
    }
}

pub(crate) fn report(err: CliError) {
    eprintln!("{:?}", miette::Report::new(err));
}
