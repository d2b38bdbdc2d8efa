use chartopts_core::ChartOption;
use schemars::schema_for;
use starbase::AppResult;
use std::path::PathBuf;

use super::{emit, report};
use crate::error::Result;

/// JSON Schema of a chart option document, pretty-printed.
pub fn schema_json() -> Result<String> {
    let schema = schema_for!(ChartOption);
    Ok(serde_json::to_string_pretty(&schema)?)
}

pub fn run_schema(output: Option<PathBuf>) -> AppResult {
    match schema_json().and_then(|json| emit(&json, output.as_deref())) {
        Ok(()) => Ok(None),
        Err(err) => {
            report(err);
            Ok(Some(1))
        }
    }
}
