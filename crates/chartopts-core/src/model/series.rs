//! Series and their mark components.

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;

use super::style::{AreaStyle, ItemStyle, Label, LineStyle};
use crate::codec::json::decode_nested;
use crate::codec::number;
use crate::codec::{ListOrSingle, MarkData, NumberOrBool, StringOrNumber};
use crate::error::{DecodeError, FieldPath};

/// One entry of `series`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    /// `line`, `bar`, `pie`, `scatter`, ...
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub series_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "number::option::serialize"
    )]
    pub x_axis_index: Option<f64>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "number::option::serialize"
    )]
    pub y_axis_index: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,

    /// `true`/`false`, or a smoothness between 0 and 1
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smooth: Option<NumberOrBool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol_size: Option<ListOrSingle<StringOrNumber>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_symbol: Option<bool>,

    /// Pie radius: one value, or `[inner, outer]`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<ListOrSingle<StringOrNumber>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub center: Option<Vec<StringOrNumber>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_style: Option<ItemStyle>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_style: Option<LineStyle>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_style: Option<AreaStyle>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mark_point: Option<MarkPoint>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mark_line: Option<MarkLine>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mark_area: Option<MarkArea>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<SeriesDataItem>>,
}

impl Series {
    pub fn new(series_type: impl Into<String>) -> Self {
        Series {
            series_type: Some(series_type.into()),
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_data<I>(mut self, data: I) -> Self
    where
        I: IntoIterator<Item = SeriesDataItem>,
    {
        self.data = Some(data.into_iter().collect());
        self
    }
}

/// One data entry of a series.
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesDataItem {
    /// `null`: a gap in the series
    Empty,
    /// A bare value (`3`, `"-"`) or a tuple (`[x, y]`, `[x, y, size]`)
    Value(ListOrSingle<StringOrNumber>),
    /// A value with its own name and styling
    Point(DataPoint),
}

/// Object form of a series data entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DataPoint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<ListOrSingle<StringOrNumber>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol_size: Option<ListOrSingle<StringOrNumber>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_style: Option<ItemStyle>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,
}

impl SeriesDataItem {
    pub fn value(value: impl Into<StringOrNumber>) -> Self {
        SeriesDataItem::Value(ListOrSingle::single(value.into()))
    }

    pub fn tuple<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<StringOrNumber>,
    {
        SeriesDataItem::Value(ListOrSingle::many(
            values.into_iter().map(Into::into).collect(),
        ))
    }

    fn decode(value: Value, path: &FieldPath) -> Result<Self, DecodeError> {
        match value {
            Value::Null => Ok(SeriesDataItem::Empty),
            Value::String(_) | Value::Number(_) | Value::Array(_) => {
                decode_nested(value, path).map(SeriesDataItem::Value)
            }
            Value::Object(_) => decode_nested(value, path).map(SeriesDataItem::Point),
            other => Err(DecodeError::unexpected(
                path.clone(),
                &other,
                "a value, a value tuple, a data object or null",
            )),
        }
    }
}

impl From<f64> for SeriesDataItem {
    fn from(value: f64) -> Self {
        SeriesDataItem::value(value)
    }
}

impl From<i32> for SeriesDataItem {
    fn from(value: i32) -> Self {
        SeriesDataItem::value(value)
    }
}

impl From<DataPoint> for SeriesDataItem {
    fn from(point: DataPoint) -> Self {
        SeriesDataItem::Point(point)
    }
}

impl Serialize for SeriesDataItem {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            SeriesDataItem::Empty => serializer.serialize_none(),
            SeriesDataItem::Value(value) => value.serialize(serializer),
            SeriesDataItem::Point(point) => point.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for SeriesDataItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        SeriesDataItem::decode(value, &FieldPath::root()).map_err(DecodeError::into_de_error)
    }
}

impl JsonSchema for SeriesDataItem {
    fn schema_name() -> Cow<'static, str> {
        "SeriesDataItem".into()
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        let value = generator.subschema_for::<ListOrSingle<StringOrNumber>>();
        let point = generator.subschema_for::<DataPoint>();
        json_schema!({ "anyOf": [{ "type": "null" }, value, point] })
    }
}

/// `markPoint`: pins at statistics or coordinates.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MarkPoint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol_size: Option<ListOrSingle<StringOrNumber>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_style: Option<ItemStyle>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<MarkData>,
}

/// `markLine`: reference lines, either through one statistic or between two endpoints.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MarkLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub silent: Option<bool>,

    /// One symbol for both ends, or `[start, end]`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<ListOrSingle<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol_size: Option<ListOrSingle<StringOrNumber>>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "number::option::serialize"
    )]
    pub precision: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_style: Option<LineStyle>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<MarkData>,
}

/// `markArea`: shaded ranges between two endpoints.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MarkArea {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub silent: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_style: Option<ItemStyle>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<MarkData>,
}
