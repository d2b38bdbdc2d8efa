//! Style blocks shared by most components.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::codec::number;
use crate::codec::{ColorValue, ListOrSingle, StringOrNumber};

/// `textStyle`: font and text decoration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorValue>,

    /// `normal`, `italic` or `oblique`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_style: Option<String>,

    /// Keyword (`bold`, `lighter`) or numeric weight
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<StringOrNumber>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<StringOrNumber>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "number::option::serialize"
    )]
    pub line_height: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_align: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_border_color: Option<ColorValue>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "number::option::serialize"
    )]
    pub text_border_width: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<StringOrNumber>,

    /// `truncate` or `break`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overflow: Option<String>,
}

/// `itemStyle`: fill and border of a graphic element.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorValue>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<ColorValue>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "number::option::serialize"
    )]
    pub border_width: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_type: Option<String>,

    /// One radius for every corner, or `[top-left, top-right, bottom-right, bottom-left]`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<ListOrSingle<StringOrNumber>>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "number::option::serialize"
    )]
    pub shadow_blur: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_color: Option<ColorValue>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "number::option::serialize"
    )]
    pub opacity: Option<f64>,
}

/// `lineStyle`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LineStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorValue>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "number::option::serialize"
    )]
    pub width: Option<f64>,

    /// `solid`, `dashed` or `dotted`
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub line_type: Option<String>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "number::option::serialize"
    )]
    pub opacity: Option<f64>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "number::option::serialize"
    )]
    pub curveness: Option<f64>,
}

/// `areaStyle`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AreaStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorValue>,

    /// `auto`, `start`, `end` or an axis value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<StringOrNumber>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "number::option::serialize"
    )]
    pub opacity: Option<f64>,
}

/// `label`: text attached to a graphic element.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Label {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,

    /// Keyword (`top`, `inside`) or `[x, y]` with pixels or percentages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<ListOrSingle<StringOrNumber>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatter: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorValue>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<StringOrNumber>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "number::option::serialize"
    )]
    pub rotate: Option<f64>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "number::option::serialize"
    )]
    pub distance: Option<f64>,
}
