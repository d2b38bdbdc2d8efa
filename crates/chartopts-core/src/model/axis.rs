//! Cartesian axes and the grid they sit in.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::style::{Label, LineStyle, TextStyle};
use crate::codec::number;
use crate::codec::{CategoryData, ColorValue, ListOrSingle, StringOrBool, StringOrNumber};

/// `xAxis` / `yAxis`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,

    /// `value`, `category`, `time` or `log`
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub axis_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_text_style: Option<TextStyle>,

    /// `top`/`bottom` for x, `left`/`right` for y
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "number::option::serialize"
    )]
    pub grid_index: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub inverse: Option<bool>,

    /// `false`, or `[min-gap, max-gap]` as percentages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boundary_gap: Option<ListOrSingle<StringOrBool>>,

    /// A value, or `dataMin` / `dataMax`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<StringOrNumber>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<StringOrNumber>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "number::option::serialize"
    )]
    pub split_number: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_line: Option<AxisLine>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_line: Option<AxisLine>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_label: Option<Label>,

    /// Category labels; only meaningful for `category` axes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<CategoryData>,
}

impl Axis {
    pub fn category<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<StringOrNumber>,
    {
        Axis {
            axis_type: Some("category".to_string()),
            data: Some(CategoryData::from_values(values)),
            ..Default::default()
        }
    }

    pub fn value() -> Self {
        Axis {
            axis_type: Some("value".to_string()),
            ..Default::default()
        }
    }
}

/// `axisLine` / `splitLine`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AxisLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_style: Option<LineStyle>,
}

/// `grid`: drawing area of a cartesian chart.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Grid {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<StringOrNumber>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<StringOrNumber>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<StringOrNumber>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<StringOrNumber>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contain_label: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<ColorValue>,
}
