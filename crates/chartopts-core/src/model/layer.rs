use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::codec::number;

/// A layer drawn over the chart canvas, such as a map overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OverlayLayer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Always written
    #[serde(
        rename = "type",
        default = "OverlayLayer::default_type",
        deserialize_with = "OverlayLayer::deserialize_type"
    )]
    pub layer_type: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "number::option::serialize"
    )]
    pub z_index: Option<f64>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "number::option::serialize"
    )]
    pub opacity: Option<f64>,
}

impl OverlayLayer {
    pub const DEFAULT_TYPE: &'static str = "overlay";

    fn default_type() -> String {
        Self::DEFAULT_TYPE.to_string()
    }

    fn deserialize_type<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(Self::default_type))
    }
}

impl Default for OverlayLayer {
    fn default() -> Self {
        OverlayLayer {
            id: None,
            layer_type: Self::default_type(),
            show: None,
            z_index: None,
            opacity: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_defaults_to_overlay() {
        let layer = OverlayLayer {
            id: Some("heat".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&layer).unwrap(),
            r#"{"id":"heat","type":"overlay"}"#
        );
        let back: OverlayLayer = serde_json::from_str(r#"{"id":"heat"}"#).unwrap();
        assert_eq!(back, layer);
    }
}
