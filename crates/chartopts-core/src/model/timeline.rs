use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use super::style::{Label, LineStyle};
use crate::codec::number;
use crate::codec::{CategoryData, StringOrNumber};

/// `timeline`: switches between option snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,

    /// Always written; `slider` is the only timeline kind
    #[serde(
        rename = "type",
        default = "Timeline::default_type",
        deserialize_with = "Timeline::deserialize_type"
    )]
    pub timeline_type: String,

    /// `time`, `value` or `category`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_type: Option<String>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "number::option::serialize"
    )]
    pub current_index: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_play: Option<bool>,

    #[serde(rename = "loop", skip_serializing_if = "Option::is_none")]
    pub play_loop: Option<bool>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "number::option::serialize"
    )]
    pub play_interval: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<StringOrNumber>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<StringOrNumber>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<StringOrNumber>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_style: Option<LineStyle>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<CategoryData>,
}

impl Timeline {
    pub const DEFAULT_TYPE: &'static str = "slider";

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

impl Default for Timeline {
    fn default() -> Self {
        Timeline {
            show: None,
            timeline_type: Self::default_type(),
            axis_type: None,
            current_index: None,
            auto_play: None,
            play_loop: None,
            play_interval: None,
            left: None,
            right: None,
            bottom: None,
            line_style: None,
            label: None,
            data: None,
        }
    }
}
