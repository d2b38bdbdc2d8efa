//! Category axis data: `xAxis.data` / `yAxis.data`.
//!
//! The array mixes bare labels and rich label objects:
//! `["Mon", 2, {"value": "Wed", "textStyle": {"color": "red"}}]`.
//! Bare entries become items with no style; array order is tick order and is
//! never changed.
//!
//! Only a styled item is written as an object. An object entry without
//! `textStyle`, such as `{"value": "a"}`, is written back as the bare `"a"`.

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::de::Deserializer;
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use std::ops::Deref;

use super::json::{decode_nested, expect_array};
use super::StringOrNumber;
use crate::error::{DecodeError, FieldPath};
use crate::model::style::TextStyle;

/// One category label, with optional per-label text styling.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisDataItem {
    pub value: StringOrNumber,
    pub text_style: Option<TextStyle>,
}

/// Object form of an axis data entry.
#[derive(Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
struct AxisDataObject {
    value: StringOrNumber,
    text_style: Option<TextStyle>,
}

impl AxisDataItem {
    pub fn new(value: impl Into<StringOrNumber>) -> Self {
        AxisDataItem {
            value: value.into(),
            text_style: None,
        }
    }

    pub fn styled(value: impl Into<StringOrNumber>, text_style: TextStyle) -> Self {
        AxisDataItem {
            value: value.into(),
            text_style: Some(text_style),
        }
    }

    /// Unstyled items are written back as bare scalars.
    pub fn is_bare(&self) -> bool {
        self.text_style.is_none()
    }

    fn decode(value: Value, path: &FieldPath) -> Result<Self, DecodeError> {
        match value {
            Value::String(_) | Value::Number(_) => {
                decode_nested::<StringOrNumber>(value, path).map(AxisDataItem::new)
            }
            Value::Object(_) => {
                let object: AxisDataObject = decode_nested(value, path)?;
                Ok(AxisDataItem {
                    value: object.value,
                    text_style: object.text_style,
                })
            }
            other => Err(DecodeError::unexpected(
                path.clone(),
                &other,
                "a string, a number or an object with a `value`",
            )),
        }
    }
}

impl Serialize for AxisDataItem {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match &self.text_style {
            None => self.value.serialize(serializer),
            Some(text_style) => {
                let mut state = serializer.serialize_struct("AxisDataItem", 2)?;
                state.serialize_field("value", &self.value)?;
                state.serialize_field("textStyle", text_style)?;
                state.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for AxisDataItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        AxisDataItem::decode(value, &FieldPath::root()).map_err(DecodeError::into_de_error)
    }
}

impl JsonSchema for AxisDataItem {
    fn schema_name() -> Cow<'static, str> {
        "AxisDataItem".into()
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        let bare = generator.subschema_for::<StringOrNumber>();
        let object = generator.subschema_for::<AxisDataObject>();
        json_schema!({ "anyOf": [bare, object] })
    }
}

/// Ordered category labels of an axis.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryData(Vec<AxisDataItem>);

impl CategoryData {
    pub fn new(items: Vec<AxisDataItem>) -> Self {
        CategoryData(items)
    }

    /// Unstyled labels from plain values.
    pub fn from_values<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<StringOrNumber>,
    {
        values.into_iter().map(AxisDataItem::new).collect()
    }

    /// Decode from an already-parsed JSON array.
    pub fn from_json(value: Value) -> Result<Self, DecodeError> {
        let root = FieldPath::root();
        let items = expect_array(value, &root)?
            .into_iter()
            .enumerate()
            .map(|(index, element)| AxisDataItem::decode(element, &root.index(index)))
            .collect::<Result<Vec<_>, _>>()?;
        tracing::trace!(count = items.len(), "decoded category data");
        Ok(CategoryData(items))
    }

    /// Label values in tick order.
    pub fn values(&self) -> impl Iterator<Item = &StringOrNumber> {
        self.0.iter().map(|item| &item.value)
    }

    pub fn into_vec(self) -> Vec<AxisDataItem> {
        self.0
    }
}

impl Deref for CategoryData {
    type Target = [AxisDataItem];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<AxisDataItem>> for CategoryData {
    fn from(items: Vec<AxisDataItem>) -> Self {
        CategoryData(items)
    }
}

impl FromIterator<AxisDataItem> for CategoryData {
    fn from_iter<I: IntoIterator<Item = AxisDataItem>>(iter: I) -> Self {
        CategoryData(iter.into_iter().collect())
    }
}

impl Serialize for CategoryData {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(&self.0)
    }
}

impl<'de> Deserialize<'de> for CategoryData {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        CategoryData::from_json(value).map_err(DecodeError::into_de_error)
    }
}

impl JsonSchema for CategoryData {
    fn schema_name() -> Cow<'static, str> {
        "CategoryData".into()
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        let item = generator.subschema_for::<AxisDataItem>();
        json_schema!({ "type": "array", "items": item })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::ColorValue;
    use crate::error::TokenKind;
    use serde_json::json;

    #[test]
    fn test_bare_labels() {
        let data = CategoryData::from_json(json!(["a", "b"])).unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0], AxisDataItem::new("a"));
        assert_eq!(data[1].value, StringOrNumber::from("b"));
        assert!(data.iter().all(|item| item.text_style.is_none()));
    }

    #[test]
    fn test_numeric_labels() {
        let data = CategoryData::from_json(json!([2019, 2020.5])).unwrap();
        assert_eq!(
            data.values().cloned().collect::<Vec<_>>(),
            vec![StringOrNumber::Number(2019.0), StringOrNumber::Number(2020.5)]
        );
    }

    #[test]
    fn test_rich_label_keeps_style() {
        let data = CategoryData::from_json(json!([
            {"value": "a", "textStyle": {"color": "red"}}
        ]))
        .unwrap();
        let style = data[0].text_style.as_ref().unwrap();
        assert_eq!(style.color, Some(ColorValue::solid("red")));
    }

    #[test]
    fn test_mixed_round_trip_preserves_order_and_shape() {
        let source = r#"["Mon",2,{"value":"Wed","textStyle":{"fontSize":14}}]"#;
        let data: CategoryData = serde_json::from_str(source).unwrap();
        assert_eq!(data.len(), 3);
        assert_eq!(serde_json::to_string(&data).unwrap(), source);
    }

    #[test]
    fn test_unstyled_object_is_written_bare() {
        let data: CategoryData = serde_json::from_str(r#"[{"value":"a"},"b"]"#).unwrap();
        assert_eq!(data[0].text_style, None);
        assert_eq!(serde_json::to_string(&data).unwrap(), r#"["a","b"]"#);
    }

    #[test]
    fn test_unsupported_element_names_index() {
        let err = CategoryData::from_json(json!(["a", true])).unwrap_err();
        assert_eq!(
            err,
            DecodeError::UnexpectedToken {
                path: FieldPath::root().index(1),
                found: TokenKind::Bool,
                expected: "a string, a number or an object with a `value`",
            }
        );
    }

    #[test]
    fn test_object_without_value_fails() {
        let err = CategoryData::from_json(json!([{"textStyle": {}}])).unwrap_err();
        assert!(err.to_string().starts_with("$[0]: missing field `value`"));
    }

    #[test]
    fn test_non_array_is_rejected() {
        let err = serde_json::from_str::<CategoryData>(r#""Mon""#).unwrap_err();
        assert!(err.to_string().contains("unexpected string, expected an array"));
    }

    #[test]
    fn test_from_values() {
        let data = CategoryData::from_values(["x", "y"]);
        assert_eq!(serde_json::to_string(&data).unwrap(), r#"["x","y"]"#);
    }
}
