//! Scalar unions: values that are exactly one of two JSON scalar kinds.
//!
//! Each union is a closed enum. Decoding looks at the token kind and fills the
//! matching branch; encoding writes the branch back in its native JSON form,
//! so a number never turns into a quoted string or the reverse. A field that
//! may be absent is declared as `Option<Union>`, keeping "absent" apart from
//! `0`, `""` and `false`.

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

use super::number::serialize_f64;

// ============================================================================
// StringOrNumber
// ============================================================================

/// A value that is either a string or a number, e.g. `left: "center"` or `left: 20`.
#[derive(Debug, Clone, PartialEq)]
pub enum StringOrNumber {
    String(String),
    Number(f64),
}

impl StringOrNumber {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StringOrNumber::String(s) => Some(s),
            StringOrNumber::Number(_) => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            StringOrNumber::Number(n) => Some(*n),
            StringOrNumber::String(_) => None,
        }
    }
}

impl Serialize for StringOrNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            StringOrNumber::String(s) => serializer.serialize_str(s),
            StringOrNumber::Number(n) => serialize_f64(*n, serializer),
        }
    }
}

impl<'de> Deserialize<'de> for StringOrNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(StringOrNumberVisitor)
    }
}

struct StringOrNumberVisitor;

impl<'de> Visitor<'de> for StringOrNumberVisitor {
    type Value = StringOrNumber;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string or a number")
    }

    fn visit_str<E>(self, v: &str) -> Result<StringOrNumber, E>
    where
        E: de::Error,
    {
        Ok(StringOrNumber::String(v.to_string()))
    }

    fn visit_string<E>(self, v: String) -> Result<StringOrNumber, E>
    where
        E: de::Error,
    {
        Ok(StringOrNumber::String(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<StringOrNumber, E>
    where
        E: de::Error,
    {
        Ok(StringOrNumber::Number(v as f64))
    }

    fn visit_u64<E>(self, v: u64) -> Result<StringOrNumber, E>
    where
        E: de::Error,
    {
        Ok(StringOrNumber::Number(v as f64))
    }

    fn visit_f64<E>(self, v: f64) -> Result<StringOrNumber, E>
    where
        E: de::Error,
    {
        Ok(StringOrNumber::Number(v))
    }
}

impl From<&str> for StringOrNumber {
    fn from(value: &str) -> Self {
        StringOrNumber::String(value.to_string())
    }
}

impl From<String> for StringOrNumber {
    fn from(value: String) -> Self {
        StringOrNumber::String(value)
    }
}

impl From<f64> for StringOrNumber {
    fn from(value: f64) -> Self {
        StringOrNumber::Number(value)
    }
}

impl From<i32> for StringOrNumber {
    fn from(value: i32) -> Self {
        StringOrNumber::Number(f64::from(value))
    }
}

impl fmt::Display for StringOrNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StringOrNumber::String(s) => f.write_str(s),
            StringOrNumber::Number(n) => write!(f, "{}", n),
        }
    }
}

impl JsonSchema for StringOrNumber {
    fn schema_name() -> Cow<'static, str> {
        "StringOrNumber".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({ "type": ["string", "number"] })
    }
}

// ============================================================================
// StringOrBool
// ============================================================================

/// A value that is either a string or a boolean, e.g. `selectedMode: "single"` or `false`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StringOrBool {
    String(String),
    Bool(bool),
}

impl StringOrBool {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StringOrBool::String(s) => Some(s),
            StringOrBool::Bool(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            StringOrBool::Bool(b) => Some(*b),
            StringOrBool::String(_) => None,
        }
    }
}

impl Serialize for StringOrBool {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            StringOrBool::String(s) => serializer.serialize_str(s),
            StringOrBool::Bool(b) => serializer.serialize_bool(*b),
        }
    }
}

impl<'de> Deserialize<'de> for StringOrBool {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(StringOrBoolVisitor)
    }
}

struct StringOrBoolVisitor;

impl<'de> Visitor<'de> for StringOrBoolVisitor {
    type Value = StringOrBool;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string or a boolean")
    }

    fn visit_str<E>(self, v: &str) -> Result<StringOrBool, E>
    where
        E: de::Error,
    {
        Ok(StringOrBool::String(v.to_string()))
    }

    fn visit_string<E>(self, v: String) -> Result<StringOrBool, E>
    where
        E: de::Error,
    {
        Ok(StringOrBool::String(v))
    }

    fn visit_bool<E>(self, v: bool) -> Result<StringOrBool, E>
    where
        E: de::Error,
    {
        Ok(StringOrBool::Bool(v))
    }
}

impl From<&str> for StringOrBool {
    fn from(value: &str) -> Self {
        StringOrBool::String(value.to_string())
    }
}

impl From<String> for StringOrBool {
    fn from(value: String) -> Self {
        StringOrBool::String(value)
    }
}

impl From<bool> for StringOrBool {
    fn from(value: bool) -> Self {
        StringOrBool::Bool(value)
    }
}

impl JsonSchema for StringOrBool {
    fn schema_name() -> Cow<'static, str> {
        "StringOrBool".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({ "type": ["string", "boolean"] })
    }
}

// ============================================================================
// NumberOrBool
// ============================================================================

/// A value that is either a number or a boolean, e.g. `smooth: true` or `smooth: 0.3`.
#[derive(Debug, Clone, PartialEq)]
pub enum NumberOrBool {
    Number(f64),
    Bool(bool),
}

impl NumberOrBool {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            NumberOrBool::Number(n) => Some(*n),
            NumberOrBool::Bool(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            NumberOrBool::Bool(b) => Some(*b),
            NumberOrBool::Number(_) => None,
        }
    }
}

impl Serialize for NumberOrBool {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            NumberOrBool::Number(n) => serialize_f64(*n, serializer),
            NumberOrBool::Bool(b) => serializer.serialize_bool(*b),
        }
    }
}

impl<'de> Deserialize<'de> for NumberOrBool {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(NumberOrBoolVisitor)
    }
}

struct NumberOrBoolVisitor;

impl<'de> Visitor<'de> for NumberOrBoolVisitor {
    type Value = NumberOrBool;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a number or a boolean")
    }

    fn visit_bool<E>(self, v: bool) -> Result<NumberOrBool, E>
    where
        E: de::Error,
    {
        Ok(NumberOrBool::Bool(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<NumberOrBool, E>
    where
        E: de::Error,
    {
        Ok(NumberOrBool::Number(v as f64))
    }

    fn visit_u64<E>(self, v: u64) -> Result<NumberOrBool, E>
    where
        E: de::Error,
    {
        Ok(NumberOrBool::Number(v as f64))
    }

    fn visit_f64<E>(self, v: f64) -> Result<NumberOrBool, E>
    where
        E: de::Error,
    {
        Ok(NumberOrBool::Number(v))
    }
}

impl From<f64> for NumberOrBool {
    fn from(value: f64) -> Self {
        NumberOrBool::Number(value)
    }
}

impl From<i32> for NumberOrBool {
    fn from(value: i32) -> Self {
        NumberOrBool::Number(f64::from(value))
    }
}

impl From<bool> for NumberOrBool {
    fn from(value: bool) -> Self {
        NumberOrBool::Bool(value)
    }
}

impl JsonSchema for NumberOrBool {
    fn schema_name() -> Cow<'static, str> {
        "NumberOrBool".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({ "type": ["number", "boolean"] })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_or_number_keeps_token_kind() {
        let n: StringOrNumber = serde_json::from_str("42").unwrap();
        assert_eq!(n, StringOrNumber::Number(42.0));
        assert_eq!(serde_json::to_string(&n).unwrap(), "42");

        let s: StringOrNumber = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(s, StringOrNumber::String("42".to_string()));
        assert_eq!(serde_json::to_string(&s).unwrap(), "\"42\"");
    }

    #[test]
    fn test_string_or_number_rejects_object() {
        let err = serde_json::from_str::<StringOrNumber>("{}").unwrap_err();
        assert!(err.to_string().contains("invalid type: map"));
        assert!(err.to_string().contains("a string or a number"));
    }

    #[test]
    fn test_string_or_bool_rejects_number() {
        let err = serde_json::from_str::<StringOrBool>("1").unwrap_err();
        assert!(err.to_string().contains("expected a string or a boolean"));
    }

    #[test]
    fn test_number_or_bool_rejects_string() {
        let err = serde_json::from_str::<NumberOrBool>("\"true\"").unwrap_err();
        assert!(err.to_string().contains("invalid type: string"));
    }

    #[test]
    fn test_conversions() {
        assert_eq!(StringOrNumber::from("50%"), StringOrNumber::String("50%".into()));
        assert_eq!(StringOrNumber::from(10), StringOrNumber::Number(10.0));
        assert_eq!(StringOrBool::from(false), StringOrBool::Bool(false));
        assert_eq!(NumberOrBool::from(0.5), NumberOrBool::Number(0.5));
    }

    #[test]
    fn test_accessors() {
        assert_eq!(StringOrNumber::from("a").as_str(), Some("a"));
        assert_eq!(StringOrNumber::from("a").as_f64(), None);
        assert_eq!(NumberOrBool::from(true).as_bool(), Some(true));
        assert_eq!(StringOrBool::from("x").as_bool(), None);
    }

    #[test]
    fn test_absent_is_distinct_from_falsy() {
        #[derive(Deserialize)]
        struct Holder {
            value: Option<StringOrBool>,
        }

        let absent: Holder = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.value, None);

        let falsy: Holder = serde_json::from_str(r#"{"value": false}"#).unwrap();
        assert_eq!(falsy.value, Some(StringOrBool::Bool(false)));

        let empty: Holder = serde_json::from_str(r#"{"value": ""}"#).unwrap();
        assert_eq!(empty.value, Some(StringOrBool::String(String::new())));
    }
}
