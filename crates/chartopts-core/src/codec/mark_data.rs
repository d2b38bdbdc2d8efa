//! Mark point / mark line / mark area data.
//!
//! Each array element is either one endpoint descriptor (an object) or a
//! start/end pair (a two-element array of descriptors):
//! `[{"type": "max"}, [{"coord": [1, 2]}, {"coord": [3, 4]}]]`.
//! There is no discriminator field; the element's token kind decides.

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use std::ops::Deref;

use super::json::{decode_nested, expect_array};
use super::number;
use super::{ListOrSingle, StringOrNumber};
use crate::error::{DecodeError, FieldPath};
use crate::model::style::{ItemStyle, Label, LineStyle};

/// One endpoint of a mark: a statistic, a data coordinate or a screen position.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MarkEndpoint {
    /// Statistic to mark: `min`, `max`, `average` or `median`
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub statistic: Option<String>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "number::option::serialize"
    )]
    pub value_index: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_dim: Option<String>,

    /// Data coordinate; entries may be axis values or `min`/`max`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coord: Option<Vec<StringOrNumber>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Screen position in pixels or percent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<StringOrNumber>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<StringOrNumber>,

    #[serde(rename = "xAxis", skip_serializing_if = "Option::is_none")]
    pub x_axis: Option<StringOrNumber>,

    #[serde(rename = "yAxis", skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<StringOrNumber>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<StringOrNumber>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol_size: Option<ListOrSingle<StringOrNumber>>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "number::option::serialize"
    )]
    pub symbol_rotate: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_style: Option<ItemStyle>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_style: Option<LineStyle>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,
}

impl MarkEndpoint {
    /// Endpoint placed at a series statistic such as `max`.
    pub fn statistic(kind: impl Into<String>) -> Self {
        MarkEndpoint {
            statistic: Some(kind.into()),
            ..Default::default()
        }
    }

    /// Endpoint placed at a data coordinate.
    pub fn at(x: impl Into<StringOrNumber>, y: impl Into<StringOrNumber>) -> Self {
        MarkEndpoint {
            coord: Some(vec![x.into(), y.into()]),
            ..Default::default()
        }
    }

    fn decode(value: Value, path: &FieldPath) -> Result<Self, DecodeError> {
        match value {
            Value::Object(_) => decode_nested(value, path),
            other => Err(DecodeError::unexpected(
                path.clone(),
                &other,
                "an endpoint object",
            )),
        }
    }
}

/// One mark: a single endpoint, or a start/end pair for lines and areas.
#[derive(Debug, Clone, PartialEq)]
pub enum MarkDataItem {
    Single(MarkEndpoint),
    Pair { start: MarkEndpoint, end: MarkEndpoint },
}

impl MarkDataItem {
    pub fn pair(start: MarkEndpoint, end: MarkEndpoint) -> Self {
        MarkDataItem::Pair { start, end }
    }

    pub fn start(&self) -> &MarkEndpoint {
        match self {
            MarkDataItem::Single(endpoint) => endpoint,
            MarkDataItem::Pair { start, .. } => start,
        }
    }

    /// The second endpoint; `None` for a single-endpoint mark.
    pub fn end(&self) -> Option<&MarkEndpoint> {
        match self {
            MarkDataItem::Single(_) => None,
            MarkDataItem::Pair { end, .. } => Some(end),
        }
    }

    fn decode(value: Value, path: &FieldPath) -> Result<Self, DecodeError> {
        match value {
            Value::Object(_) => MarkEndpoint::decode(value, path).map(MarkDataItem::Single),
            Value::Array(elements) => {
                let [start, end]: [Value; 2] =
                    elements
                        .try_into()
                        .map_err(|elements: Vec<Value>| DecodeError::ShapeArity {
                            path: path.clone(),
                            len: elements.len(),
                        })?;
                Ok(MarkDataItem::Pair {
                    start: MarkEndpoint::decode(start, &path.index(0))?,
                    end: MarkEndpoint::decode(end, &path.index(1))?,
                })
            }
            other => Err(DecodeError::unexpected(
                path.clone(),
                &other,
                "an endpoint object or a [start, end] pair",
            )),
        }
    }
}

impl From<MarkEndpoint> for MarkDataItem {
    fn from(endpoint: MarkEndpoint) -> Self {
        MarkDataItem::Single(endpoint)
    }
}

impl Serialize for MarkDataItem {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            MarkDataItem::Single(endpoint) => endpoint.serialize(serializer),
            MarkDataItem::Pair { start, end } => serializer.collect_seq([start, end]),
        }
    }
}

impl<'de> Deserialize<'de> for MarkDataItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        MarkDataItem::decode(value, &FieldPath::root()).map_err(DecodeError::into_de_error)
    }
}

impl JsonSchema for MarkDataItem {
    fn schema_name() -> Cow<'static, str> {
        "MarkDataItem".into()
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        let endpoint = generator.subschema_for::<MarkEndpoint>();
        json_schema!({
            "anyOf": [
                endpoint,
                {
                    "type": "array",
                    "items": endpoint,
                    "minItems": 2,
                    "maxItems": 2
                }
            ]
        })
    }
}

/// Data of a `markPoint`, `markLine` or `markArea`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MarkData(Vec<MarkDataItem>);

impl MarkData {
    pub fn new(items: Vec<MarkDataItem>) -> Self {
        MarkData(items)
    }

    /// Decode from an already-parsed JSON array.
    ///
    /// An element that is an array of any length other than two fails the
    /// whole decode with [`DecodeError::ShapeArity`].
    pub fn from_json(value: Value) -> Result<Self, DecodeError> {
        let root = FieldPath::root();
        let items = expect_array(value, &root)?
            .into_iter()
            .enumerate()
            .map(|(index, element)| MarkDataItem::decode(element, &root.index(index)))
            .collect::<Result<Vec<_>, _>>()?;
        tracing::trace!(count = items.len(), "decoded mark data");
        Ok(MarkData(items))
    }

    pub fn into_vec(self) -> Vec<MarkDataItem> {
        self.0
    }
}

impl Deref for MarkData {
    type Target = [MarkDataItem];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<MarkDataItem>> for MarkData {
    fn from(items: Vec<MarkDataItem>) -> Self {
        MarkData(items)
    }
}

impl FromIterator<MarkDataItem> for MarkData {
    fn from_iter<I: IntoIterator<Item = MarkDataItem>>(iter: I) -> Self {
        MarkData(iter.into_iter().collect())
    }
}

impl Serialize for MarkData {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(&self.0)
    }
}

impl<'de> Deserialize<'de> for MarkData {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        MarkData::from_json(value).map_err(DecodeError::into_de_error)
    }
}

impl JsonSchema for MarkData {
    fn schema_name() -> Cow<'static, str> {
        "MarkData".into()
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        let item = generator.subschema_for::<MarkDataItem>();
        json_schema!({ "type": "array", "items": item })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_endpoint() {
        let data = MarkData::from_json(json!([{"type": "max"}])).unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0], MarkDataItem::Single(MarkEndpoint::statistic("max")));
        assert_eq!(data[0].end(), None);
    }

    #[test]
    fn test_endpoint_pair() {
        let data = MarkData::from_json(json!([[{"coord": [1, 2]}, {"coord": [3, 4]}]])).unwrap();
        assert_eq!(data.len(), 1);
        let MarkDataItem::Pair { start, end } = &data[0] else {
            panic!("Expected Pair variant");
        };
        assert_eq!(start, &MarkEndpoint::at(1, 2));
        assert_eq!(end, &MarkEndpoint::at(3, 4));
    }

    #[test]
    fn test_pair_of_one_is_rejected() {
        let err = MarkData::from_json(json!([[{"coord": [1, 2]}]])).unwrap_err();
        assert_eq!(
            err,
            DecodeError::ShapeArity {
                path: FieldPath::root().index(0),
                len: 1,
            }
        );
    }

    #[test]
    fn test_pair_of_three_names_index_and_length() {
        let err = MarkData::from_json(json!([{"type": "min"}, [{}, {}, {}]])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "$[1]: endpoint pair must have exactly 2 elements, found 3"
        );
    }

    #[test]
    fn test_pair_endpoint_must_be_object() {
        let err = MarkData::from_json(json!([[{"type": "min"}, "max"]])).unwrap_err();
        assert_eq!(err.path(), &FieldPath::root().index(0).index(1));
    }

    #[test]
    fn test_styles_on_each_endpoint() {
        let source = r#"[[{"name":"from","xAxis":"Mon","itemStyle":{"color":"red"}},{"xAxis":"Wed","lineStyle":{"width":2}}]]"#;
        let data: MarkData = serde_json::from_str(source).unwrap();
        let item = &data[0];
        assert_eq!(item.start().name.as_deref(), Some("from"));
        assert!(item.start().item_style.is_some());
        assert!(item.end().unwrap().line_style.is_some());
        assert_eq!(serde_json::to_string(&data).unwrap(), source);
    }

    #[test]
    fn test_mixed_round_trip() {
        let source = r#"[{"type":"average","name":"avg"},[{"coord":[0,"min"]},{"coord":[5,"max"]}]]"#;
        let data: MarkData = serde_json::from_str(source).unwrap();
        assert_eq!(serde_json::to_string(&data).unwrap(), source);
    }

    #[test]
    fn test_scalar_element_is_rejected() {
        let err = serde_json::from_str::<MarkData>("[1]").unwrap_err();
        assert!(err.to_string().contains("$[0]: unexpected number"));
    }
}
