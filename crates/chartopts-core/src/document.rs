//! Whole-document decode and encode.
//!
//! A single malformed field fails the whole document; there is no partial
//! result.

use serde_json::Value;
use tracing::debug;

use crate::codec::json::{TrackedError, deserialize_tracked};
use crate::error::{Error, FieldPath, Result};
use crate::model::ChartOption;

impl From<TrackedError> for Error {
    fn from(err: TrackedError) -> Self {
        match err {
            TrackedError::Syntax(err) => Error::Json(err),
            TrackedError::Decode(err) => Error::Decode(err),
        }
    }
}

impl ChartOption {
    /// Decode a chart option from JSON text.
    ///
    /// Malformed JSON fails with [`Error::Json`]; a value that does not fit
    /// the model fails with [`Error::Decode`], located from the document root
    /// (`$.series[1].markLine.data[0]`).
    pub fn from_json_str(json: &str) -> Result<Self> {
        debug!(bytes = json.len(), "decoding chart option");
        let mut deserializer = serde_json::Deserializer::from_str(json);
        let option = deserialize_tracked(&mut deserializer)?;
        deserializer.end()?;
        Ok(option)
    }

    /// Decode a chart option from JSON bytes.
    pub fn from_json_slice(json: &[u8]) -> Result<Self> {
        debug!(bytes = json.len(), "decoding chart option");
        let mut deserializer = serde_json::Deserializer::from_slice(json);
        let option = deserialize_tracked(&mut deserializer)?;
        deserializer.end()?;
        Ok(option)
    }

    /// Decode a chart option from an already-parsed JSON value.
    pub fn from_json_value(value: Value) -> Result<Self> {
        debug!("decoding chart option from value");
        Ok(deserialize_tracked(value)?)
    }

    /// Encode as compact JSON.
    pub fn to_json_string(&self) -> Result<String> {
        let json = serde_json::to_string(self)?;
        debug!(bytes = json.len(), "encoded chart option");
        Ok(json)
    }

    /// Encode as indented JSON.
    pub fn to_json_string_pretty(&self) -> Result<String> {
        let json = serde_json::to_string_pretty(self)?;
        debug!(bytes = json.len(), "encoded chart option");
        Ok(json)
    }

    pub fn to_json_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Keys present in `source` that are missing from `encoded`.
///
/// `source` is a document as read and `encoded` the same document after a
/// decode/encode pass; the result lists the input keys the model does not
/// carry, in input order. Explicit `null`s are not reported since they read as
/// absent. A bare component that was written back as a one-element array is
/// compared with that element.
pub fn dropped_keys(source: &Value, encoded: &Value) -> Vec<FieldPath> {
    let mut dropped = Vec::new();
    collect_dropped(source, encoded, &FieldPath::root(), &mut dropped);
    dropped
}

fn collect_dropped(source: &Value, encoded: &Value, path: &FieldPath, dropped: &mut Vec<FieldPath>) {
    match (source, encoded) {
        (Value::Object(fields), Value::Object(kept)) => {
            for (key, value) in fields {
                match kept.get(key) {
                    Some(next) => collect_dropped(value, next, &path.key(key), dropped),
                    None if value.is_null() => {}
                    None => dropped.push(path.key(key)),
                }
            }
        }
        (Value::Array(items), Value::Array(kept)) if items.len() == kept.len() => {
            for (index, (item, next)) in items.iter().zip(kept).enumerate() {
                collect_dropped(item, next, &path.index(index), dropped);
            }
        }
        (Value::Object(_), Value::Array(kept)) if kept.len() == 1 => {
            collect_dropped(source, &kept[0], path, dropped);
        }
        // an object entry written back as its bare `value`
        (Value::Object(fields), kept) if !kept.is_object() && !kept.is_array() => {
            dropped.extend(
                fields
                    .iter()
                    .filter(|(key, value)| key.as_str() != "value" && !value.is_null())
                    .map(|(key, _)| path.key(key)),
            );
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DecodeError, FieldPath};
    use serde_json::json;

    #[test]
    fn test_str_and_slice_agree() {
        let source = r#"{"title":{"text":"A"},"series":[{"type":"bar","data":[1,2]}]}"#;
        let from_str = ChartOption::from_json_str(source).unwrap();
        let from_slice = ChartOption::from_json_slice(source.as_bytes()).unwrap();
        assert_eq!(from_str, from_slice);
        assert_eq!(from_str.to_json_string().unwrap(), source);
    }

    #[test]
    fn test_value_round_trip() {
        let value = json!({"xAxis": {"type": "category", "data": ["a", "b"]}});
        let option = ChartOption::from_json_value(value.clone()).unwrap();
        assert_eq!(option.to_json_value().unwrap(), value);
    }

    #[test]
    fn test_syntax_error_is_json_error() {
        let err = ChartOption::from_json_str(r#"{"title": "#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_trailing_characters_are_json_error() {
        let err = ChartOption::from_json_str("{} {}").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_scalar_failure_is_located_from_root() {
        let err =
            ChartOption::from_json_str(r#"{"series":[{"type":"line"},{"smooth":"yes"}]}"#)
                .unwrap_err();
        let Error::Decode(DecodeError::Invalid { path, message }) = err else {
            panic!("Expected Decode(Invalid) variant");
        };
        assert_eq!(path, FieldPath::root().key("series").index(1).key("smooth"));
        assert!(message.contains("expected a number or a boolean"), "{message}");
    }

    #[test]
    fn test_converter_failure_keeps_variant_and_root() {
        let source = r#"{"series":[{"type":"line"},{"type":"line","markLine":{"data":[[{"type":"min"}]]}}]}"#;
        let err = ChartOption::from_json_str(source).unwrap_err();
        let Error::Decode(failure) = err else {
            panic!("Expected Decode variant");
        };
        assert_eq!(
            failure,
            DecodeError::ShapeArity {
                path: FieldPath::root()
                    .key("series")
                    .index(1)
                    .key("markLine")
                    .key("data")
                    .index(0),
                len: 1,
            }
        );
        assert_eq!(
            failure.to_string(),
            "$.series[1].markLine.data[0]: endpoint pair must have exactly 2 elements, found 1"
        );
    }

    #[test]
    fn test_value_input_is_located_too() {
        let err = ChartOption::from_json_value(json!({"legend": {"data": ["a", 7]}})).unwrap_err();
        let Error::Decode(failure) = err else {
            panic!("Expected Decode variant");
        };
        assert_eq!(
            failure.path(),
            &FieldPath::root().key("legend").key("data").index(1)
        );
    }

    #[test]
    fn test_dropped_keys_lists_unmodeled_input() {
        let source = json!({
            "tooltip": {"trigger": "axis"},
            "dataZoom": [{"type": "inside"}],
            "series": [{"type": "bar", "barWidth": 20, "emphasis": {"focus": "series"}}]
        });
        let option = ChartOption::from_json_value(source.clone()).unwrap();
        let dropped = dropped_keys(&source, &option.to_json_value().unwrap());
        let rendered: Vec<_> = dropped.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            vec![
                "$.tooltip",
                "$.dataZoom",
                "$.series[0].barWidth",
                "$.series[0].emphasis",
            ]
        );
    }

    #[test]
    fn test_dropped_keys_ignores_nulls_defaults_and_normalized_shapes() {
        let source = json!({
            "title": null,
            "series": {"type": "line", "name": null, "data": [1, null, [2, 3]]},
            "toolbox": {"feature": {"saveAsImage": {}}},
            "xAxis": {"data": [{"value": "Mon"}]}
        });
        let option = ChartOption::from_json_value(source.clone()).unwrap();
        assert!(dropped_keys(&source, &option.to_json_value().unwrap()).is_empty());
    }

    #[test]
    fn test_dropped_keys_sees_extra_keys_on_bare_written_entries() {
        let source = json!({"timeline": {"data": [{"value": "2002", "tooltip": {"show": true}}]}});
        let option = ChartOption::from_json_value(source.clone()).unwrap();
        let dropped = dropped_keys(&source, &option.to_json_value().unwrap());
        assert_eq!(
            dropped,
            vec![FieldPath::root().key("timeline").key("data").index(0).key("tooltip")]
        );
    }

    #[test]
    fn test_pretty_output_is_indented() {
        let option = ChartOption::from_json_str(r#"{"animation":false}"#).unwrap();
        assert_eq!(
            option.to_json_string_pretty().unwrap(),
            "{\n  \"animation\": false\n}"
        );
    }
}
