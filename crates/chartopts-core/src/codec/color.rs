//! Color values: a solid color string or a gradient/pattern fill object.
//!
//! Unlike the mark-data shapes, fill objects carry a `type` discriminator:
//! - `"#c23531"`, `"rgba(0,0,0,0.5)"`: solid color
//! - `{ "type": "linear", "x": 0, "y": 0, "x2": 0, "y2": 1, "colorStops": [...] }`
//! - `{ "type": "radial", "x": 0.5, "y": 0.5, "r": 0.5, "colorStops": [...] }`
//! - `{ "image": "...", "repeat": "repeat" }`: image pattern, no `type`
//!
//! Gradient and pattern payloads are kept as ordered JSON maps and written back
//! value-for-value.

use indexmap::IndexMap;
use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::de::Deserializer;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;

use super::number;
use crate::error::{DecodeError, FieldPath};

const LINEAR: &str = "linear";
const RADIAL: &str = "radial";
const PATTERN: &str = "pattern";

/// A color property value.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorValue {
    Solid(String),
    Linear(Gradient),
    Radial(Gradient),
    Pattern(ImagePattern),
}

/// Gradient payload: every key of the fill object except `type`, in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Gradient {
    fields: IndexMap<String, Value>,
}

/// Image pattern payload: the whole fill object, in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImagePattern {
    fields: IndexMap<String, Value>,
}

/// One stop of a gradient, used when building gradients in code.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorStop {
    pub offset: f64,
    pub color: String,
}

impl ColorStop {
    pub fn new(offset: f64, color: impl Into<String>) -> Self {
        ColorStop {
            offset,
            color: color.into(),
        }
    }

    fn to_value(&self) -> Value {
        let mut stop = serde_json::Map::new();
        stop.insert("offset".to_string(), number::to_value(self.offset));
        stop.insert("color".to_string(), Value::String(self.color.clone()));
        Value::Object(stop)
    }
}

impl Gradient {
    pub fn from_fields(fields: IndexMap<String, Value>) -> Self {
        Gradient { fields }
    }

    pub fn fields(&self) -> &IndexMap<String, Value> {
        &self.fields
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// The raw `colorStops` payload.
    pub fn color_stops(&self) -> Option<&Value> {
        self.fields.get("colorStops")
    }

    fn with_stops(mut fields: IndexMap<String, Value>, stops: &[ColorStop]) -> Self {
        let stops = stops.iter().map(ColorStop::to_value).collect();
        fields.insert("colorStops".to_string(), Value::Array(stops));
        Gradient { fields }
    }
}

impl ImagePattern {
    /// A pattern repeating `image` (a URL or data URI) in both directions.
    pub fn new(image: impl Into<String>) -> Self {
        let mut fields = IndexMap::new();
        fields.insert("image".to_string(), Value::String(image.into()));
        fields.insert("repeat".to_string(), Value::String("repeat".to_string()));
        ImagePattern { fields }
    }

    pub fn from_fields(fields: IndexMap<String, Value>) -> Self {
        ImagePattern { fields }
    }

    pub fn fields(&self) -> &IndexMap<String, Value> {
        &self.fields
    }

    pub fn image(&self) -> Option<&Value> {
        self.fields.get("image")
    }
}

impl ColorValue {
    pub fn solid(color: impl Into<String>) -> Self {
        ColorValue::Solid(color.into())
    }

    /// Linear gradient from `(x, y)` to `(x2, y2)` in bounding-box coordinates.
    pub fn linear(x: f64, y: f64, x2: f64, y2: f64, stops: &[ColorStop]) -> Self {
        let mut fields = IndexMap::new();
        fields.insert("x".to_string(), number::to_value(x));
        fields.insert("y".to_string(), number::to_value(y));
        fields.insert("x2".to_string(), number::to_value(x2));
        fields.insert("y2".to_string(), number::to_value(y2));
        ColorValue::Linear(Gradient::with_stops(fields, stops))
    }

    /// Radial gradient centered at `(x, y)` with radius `r`.
    pub fn radial(x: f64, y: f64, r: f64, stops: &[ColorStop]) -> Self {
        let mut fields = IndexMap::new();
        fields.insert("x".to_string(), number::to_value(x));
        fields.insert("y".to_string(), number::to_value(y));
        fields.insert("r".to_string(), number::to_value(r));
        ColorValue::Radial(Gradient::with_stops(fields, stops))
    }

    pub fn as_solid(&self) -> Option<&str> {
        match self {
            ColorValue::Solid(color) => Some(color),
            _ => None,
        }
    }

    /// Decode a color from an already-parsed JSON value.
    pub fn from_json(value: Value) -> Result<Self, DecodeError> {
        Self::decode(value, &FieldPath::root())
    }

    fn decode(value: Value, path: &FieldPath) -> Result<Self, DecodeError> {
        let object = match value {
            Value::String(color) => return Ok(ColorValue::Solid(color)),
            Value::Object(object) => object,
            other => {
                return Err(DecodeError::unexpected(
                    path.clone(),
                    &other,
                    "a color string or a gradient/pattern object",
                ));
            }
        };

        let fill = match object.get("type") {
            Some(Value::String(kind)) if kind == LINEAR => Fill::Linear,
            Some(Value::String(kind)) if kind == RADIAL => Fill::Radial,
            Some(Value::String(kind)) if kind == PATTERN && object.contains_key("image") => {
                Fill::Pattern
            }
            None if object.contains_key("image") => Fill::Pattern,
            Some(Value::String(kind)) => {
                return Err(DecodeError::UnknownColorType {
                    path: path.key("type"),
                    kind: kind.clone(),
                });
            }
            Some(other) => {
                return Err(DecodeError::unexpected(
                    path.key("type"),
                    other,
                    "a color type string",
                ));
            }
            None => {
                return Err(DecodeError::invalid(
                    path.clone(),
                    "color object has neither a `type` nor an `image`",
                ));
            }
        };

        Ok(match fill {
            Fill::Linear => ColorValue::Linear(Gradient::from_fields(without_type(object))),
            Fill::Radial => ColorValue::Radial(Gradient::from_fields(without_type(object))),
            Fill::Pattern => ColorValue::Pattern(ImagePattern::from_fields(
                object.into_iter().collect(),
            )),
        })
    }
}

enum Fill {
    Linear,
    Radial,
    Pattern,
}

fn without_type(object: serde_json::Map<String, Value>) -> IndexMap<String, Value> {
    object.into_iter().filter(|(key, _)| key != "type").collect()
}

impl From<&str> for ColorValue {
    fn from(value: &str) -> Self {
        ColorValue::Solid(value.to_string())
    }
}

impl From<String> for ColorValue {
    fn from(value: String) -> Self {
        ColorValue::Solid(value)
    }
}

impl Serialize for ColorValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ColorValue::Solid(color) => serializer.serialize_str(color),
            ColorValue::Linear(gradient) => serialize_gradient(LINEAR, gradient, serializer),
            ColorValue::Radial(gradient) => serialize_gradient(RADIAL, gradient, serializer),
            ColorValue::Pattern(pattern) => {
                let mut map = serializer.serialize_map(Some(pattern.fields.len()))?;
                for (key, value) in &pattern.fields {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

fn serialize_gradient<S>(kind: &str, gradient: &Gradient, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(gradient.fields.len() + 1))?;
    map.serialize_entry("type", kind)?;
    for (key, value) in &gradient.fields {
        map.serialize_entry(key, value)?;
    }
    map.end()
}

impl<'de> Deserialize<'de> for ColorValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        ColorValue::from_json(value).map_err(DecodeError::into_de_error)
    }
}

impl JsonSchema for ColorValue {
    fn schema_name() -> Cow<'static, str> {
        "ColorValue".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "anyOf": [
                { "type": "string" },
                {
                    "type": "object",
                    "properties": { "type": { "enum": [LINEAR, RADIAL] } },
                    "required": ["type"]
                },
                {
                    "type": "object",
                    "properties": { "image": {} },
                    "required": ["image"]
                }
            ]
        })
    }
}
