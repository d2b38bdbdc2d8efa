//! Helpers for converters that sniff the shape of an already-parsed value.

use serde::de::{Deserialize, DeserializeOwned, Deserializer};
use serde_json::Value;

use crate::error::{DecodeError, FieldPath, take_last_failure};

/// Failure of a path-tracking decode.
#[derive(Debug)]
pub(crate) enum TrackedError {
    /// The input is not well-formed JSON.
    Syntax(serde_json::Error),
    /// Well-formed JSON that does not fit the target type, located from the decode root.
    Decode(DecodeError),
}

/// Deserialize `T`, locating any data error by its path from the decode root.
///
/// Converter failures keep their typed variant: the failure parked by the
/// converter is re-anchored under the field it was raised for. Any other data
/// error becomes [`DecodeError::Invalid`] at the failing field.
pub(crate) fn deserialize_tracked<'de, T, D>(deserializer: D) -> Result<T, TrackedError>
where
    T: Deserialize<'de>,
    D: Deserializer<'de, Error = serde_json::Error>,
{
    take_last_failure();
    serde_path_to_error::deserialize(deserializer).map_err(|err| {
        let path = FieldPath::from(err.path());
        let inner = err.into_inner();
        if !inner.is_data() {
            return TrackedError::Syntax(inner);
        }
        let message = bare_message(&inner);
        let located = match take_last_failure() {
            Some(failure) if failure.to_string() == message => failure.rooted_at(&path),
            _ => DecodeError::Invalid { path, message },
        };
        TrackedError::Decode(located)
    })
}

/// Error text without the ` at line L column C` suffix `serde_json` adds for text input.
fn bare_message(err: &serde_json::Error) -> String {
    let message = err.to_string();
    if err.line() == 0 {
        return message;
    }
    let suffix = format!(" at line {} column {}", err.line(), err.column());
    match message.strip_suffix(&suffix) {
        Some(bare) => bare.to_string(),
        None => message,
    }
}

/// Unwrap a top-level array, failing with the token kind that was found instead.
pub(crate) fn expect_array(value: Value, path: &FieldPath) -> Result<Vec<Value>, DecodeError> {
    match value {
        Value::Array(elements) => Ok(elements),
        other => Err(DecodeError::unexpected(path.clone(), &other, "an array")),
    }
}

/// Decode a nested value through its own serde impl, pinning any failure under `path`.
pub(crate) fn decode_nested<T>(value: Value, path: &FieldPath) -> Result<T, DecodeError>
where
    T: DeserializeOwned,
{
    deserialize_tracked(value).map_err(|err| match err {
        TrackedError::Decode(failure) => failure.rooted_at(path),
        TrackedError::Syntax(err) => DecodeError::invalid(path.clone(), err),
    })
}
