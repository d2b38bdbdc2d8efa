//! Legend data: `legend.data`.
//!
//! Entries are series names or rich entry objects. The strings `""` and
//! `"\n"` are line-break markers for the legend layout; they stay plain names
//! and are never promoted to entries or rejected as malformed.

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use std::ops::Deref;

use super::json::{decode_nested, expect_array};
use crate::error::{DecodeError, FieldPath};
use crate::model::style::{ItemStyle, LineStyle, TextStyle};

/// One legend entry.
#[derive(Debug, Clone, PartialEq)]
pub enum LegendDataItem {
    /// A series name, possibly a line-break marker
    Name(String),
    /// A fully styled entry
    Entry(LegendEntry),
}

/// Object form of a legend entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LegendEntry {
    pub name: String,

    /// `circle`, `rect`, `roundRect`, ..., or `image://url`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_style: Option<ItemStyle>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_style: Option<LineStyle>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_style: Option<TextStyle>,
}

impl LegendDataItem {
    pub fn name(name: impl Into<String>) -> Self {
        LegendDataItem::Name(name.into())
    }

    /// A marker that starts a new legend row.
    pub fn line_break() -> Self {
        LegendDataItem::Name("\n".to_string())
    }

    /// Whether this is one of the `""` / `"\n"` layout markers.
    pub fn is_line_break(&self) -> bool {
        matches!(self, LegendDataItem::Name(name) if name.is_empty() || name == "\n")
    }

    /// Series name this entry refers to.
    pub fn series_name(&self) -> &str {
        match self {
            LegendDataItem::Name(name) => name,
            LegendDataItem::Entry(entry) => &entry.name,
        }
    }

    fn decode(value: Value, path: &FieldPath) -> Result<Self, DecodeError> {
        match value {
            Value::String(name) => Ok(LegendDataItem::Name(name)),
            Value::Object(_) => decode_nested(value, path).map(LegendDataItem::Entry),
            other => Err(DecodeError::unexpected(
                path.clone(),
                &other,
                "a series name or a legend entry object",
            )),
        }
    }
}

impl From<&str> for LegendDataItem {
    fn from(name: &str) -> Self {
        LegendDataItem::name(name)
    }
}

impl From<LegendEntry> for LegendDataItem {
    fn from(entry: LegendEntry) -> Self {
        LegendDataItem::Entry(entry)
    }
}

impl Serialize for LegendDataItem {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            LegendDataItem::Name(name) => serializer.serialize_str(name),
            LegendDataItem::Entry(entry) => entry.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for LegendDataItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        LegendDataItem::decode(value, &FieldPath::root()).map_err(DecodeError::into_de_error)
    }
}

impl JsonSchema for LegendDataItem {
    fn schema_name() -> Cow<'static, str> {
        "LegendDataItem".into()
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        let entry = generator.subschema_for::<LegendEntry>();
        json_schema!({ "anyOf": [{ "type": "string" }, entry] })
    }
}

/// Legend entries in display order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LegendData(Vec<LegendDataItem>);

impl LegendData {
    pub fn new(items: Vec<LegendDataItem>) -> Self {
        LegendData(items)
    }

    /// Decode from an already-parsed JSON array.
    pub fn from_json(value: Value) -> Result<Self, DecodeError> {
        let root = FieldPath::root();
        let items = expect_array(value, &root)?
            .into_iter()
            .enumerate()
            .map(|(index, element)| LegendDataItem::decode(element, &root.index(index)))
            .collect::<Result<Vec<_>, _>>()?;
        tracing::trace!(count = items.len(), "decoded legend data");
        Ok(LegendData(items))
    }

    /// Series names, skipping line-break markers.
    pub fn series_names(&self) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .filter(|item| !item.is_line_break())
            .map(LegendDataItem::series_name)
    }

    pub fn into_vec(self) -> Vec<LegendDataItem> {
        self.0
    }
}

impl Deref for LegendData {
    type Target = [LegendDataItem];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<LegendDataItem>> for LegendData {
    fn from(items: Vec<LegendDataItem>) -> Self {
        LegendData(items)
    }
}

impl FromIterator<LegendDataItem> for LegendData {
    fn from_iter<I: IntoIterator<Item = LegendDataItem>>(iter: I) -> Self {
        LegendData(iter.into_iter().collect())
    }
}

impl Serialize for LegendData {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(&self.0)
    }
}

impl<'de> Deserialize<'de> for LegendData {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        LegendData::from_json(value).map_err(DecodeError::into_de_error)
    }
}

impl JsonSchema for LegendData {
    fn schema_name() -> Cow<'static, str> {
        "LegendData".into()
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        let item = generator.subschema_for::<LegendDataItem>();
        json_schema!({ "type": "array", "items": item })
    }
}
