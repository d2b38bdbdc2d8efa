use owo_colors::OwoColorize;
use starbase::AppResult;
use std::path::{Path, PathBuf};
use tracing::info;

use super::{read_option, report, warn_dropped};
use crate::error::{CliError, Result};

/// What a successful check found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckSummary {
    pub series: usize,
    pub x_axes: usize,
    pub y_axes: usize,
    /// Input keys the model does not carry, as `$.path` strings
    pub dropped: Vec<String>,
}

/// Decode `path` and summarize it.
///
/// With `strict`, any key the model would drop fails the check with
/// [`CliError::Unmodeled`].
pub fn check_file(path: &Path, strict: bool) -> Result<CheckSummary> {
    let loaded = read_option(path)?;
    let dropped: Vec<String> = loaded.dropped.iter().map(ToString::to_string).collect();
    if strict && !dropped.is_empty() {
        return Err(CliError::Unmodeled {
            path: path.to_path_buf(),
            fields: dropped,
        });
    }
    let option = &loaded.option;
    let summary = CheckSummary {
        series: option.series().len(),
        x_axes: option.x_axes().len(),
        y_axes: option.y_axes().len(),
        dropped,
    };
    info!(path = %path.display(), series = summary.series, "chart option is valid");
    Ok(summary)
}

pub fn run_check(file: PathBuf, strict: bool) -> AppResult {
    match check_file(&file, strict) {
        Ok(summary) => {
            warn_dropped(&file, &summary.dropped);
            println!(
                "{} {} ({} series, {} x axes, {} y axes)",
                "ok".green(),
                file.display(),
                summary.series,
                summary.x_axes,
                summary.y_axes
            );
            Ok(None)
        }
        Err(err) => {
            report(err);
            Ok(Some(1))
        }
    }
}
