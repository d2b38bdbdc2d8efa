use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::codec::number;
use crate::codec::{ColorValue, StringOrNumber};

/// `toolbox`: built-in chart tools.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Toolbox {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub orient: Option<String>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "number::option::serialize"
    )]
    pub item_size: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<StringOrNumber>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<StringOrNumber>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<StringOrNumber>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<StringOrNumber>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature: Option<ToolboxFeature>,
}

/// `toolbox.feature`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ToolboxFeature {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_as_image: Option<SaveAsImage>,
}

/// `toolbox.feature.saveAsImage`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveAsImage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,

    /// `png`, `jpg` or `svg`; always written
    #[serde(
        rename = "type",
        default = "SaveAsImage::default_type",
        deserialize_with = "SaveAsImage::deserialize_type"
    )]
    pub image_type: String,

    /// File name without extension; the chart title when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<ColorValue>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "number::option::serialize"
    )]
    pub pixel_ratio: Option<f64>,
}

impl SaveAsImage {
    pub const DEFAULT_TYPE: &'static str = "png";

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

impl Default for SaveAsImage {
    fn default() -> Self {
        SaveAsImage {
            show: None,
            image_type: Self::default_type(),
            name: None,
            title: None,
            background_color: None,
            pixel_ratio: None,
        }
    }
}
