use starbase::AppResult;
use std::path::{Path, PathBuf};
use tracing::debug;

use chartopts_core::FieldPath;

use super::{emit, read_option, report, warn_dropped};
use crate::error::{CliError, Result};

/// Canonical output of one file.
#[derive(Debug, Clone)]
pub struct Normalized {
    pub json: String,
    /// Input keys missing from `json` because the model does not carry them
    pub dropped: Vec<FieldPath>,
}

/// Decode a file and re-encode it in canonical form.
///
/// Bare/array shapes are kept where the model preserves them; `series`,
/// `color` and `layers` come out as arrays.
pub fn normalize_file(path: &Path, pretty: bool) -> Result<Normalized> {
    let loaded = read_option(path)?;
    let encoded = if pretty {
        loaded.option.to_json_string_pretty()
    } else {
        loaded.option.to_json_string()
    };
    debug!(path = %path.display(), pretty, dropped = loaded.dropped.len(), "normalized chart option");
    Ok(Normalized {
        json: encoded.map_err(CliError::Encode)?,
        dropped: loaded.dropped,
    })
}

pub fn run_normalize(file: PathBuf, output: Option<PathBuf>, pretty: bool) -> AppResult {
    let result = normalize_file(&file, pretty).and_then(|normalized| {
        warn_dropped(&file, &normalized.dropped);
        emit(&normalized.json, output.as_deref())
    });
    match result {
        Ok(()) => Ok(None),
        Err(err) => {
            report(err);
            Ok(Some(1))
        }
    }
}
