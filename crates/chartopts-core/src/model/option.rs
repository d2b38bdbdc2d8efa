//! The root chart option document.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::axis::{Axis, Grid};
use super::layer::OverlayLayer;
use super::legend::Legend;
use super::series::Series;
use super::style::TextStyle;
use super::timeline::Timeline;
use super::title::Title;
use super::toolbox::Toolbox;
use crate::codec::number;
use crate::codec::{ColorValue, ListOrSingle, one_or_many};

/// A complete chart option document.
///
/// Components that may appear once or several times keep the form they were
/// written in (`title`, `legend`, `grid`, `xAxis`, `yAxis`). `series`,
/// `color` and `layers` accept either form but are always written as arrays.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChartOption {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<ListOrSingle<Title>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<ListOrSingle<Legend>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid: Option<ListOrSingle<Grid>>,

    #[serde(rename = "xAxis", skip_serializing_if = "Option::is_none")]
    pub x_axis: Option<ListOrSingle<Axis>>,

    #[serde(rename = "yAxis", skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<ListOrSingle<Axis>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub toolbox: Option<Toolbox>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<Timeline>,

    #[serde(
        default,
        with = "one_or_many::option",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<Vec<Series>>")]
    pub series: Option<Vec<Series>>,

    /// Palette cycled through by series without an explicit color
    #[serde(
        default,
        with = "one_or_many::option",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<Vec<ColorValue>>")]
    pub color: Option<Vec<ColorValue>>,

    #[serde(
        default,
        with = "one_or_many::option",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<Vec<OverlayLayer>>")]
    pub layers: Option<Vec<OverlayLayer>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<ColorValue>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_style: Option<TextStyle>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<bool>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "number::option::serialize"
    )]
    pub animation_duration: Option<f64>,
}

impl ChartOption {
    /// Series entries, empty when `series` is absent.
    pub fn series(&self) -> &[Series] {
        self.series.as_deref().unwrap_or_default()
    }

    /// Titles in declaration order, empty when `title` is absent.
    pub fn titles(&self) -> &[Title] {
        self.title.as_ref().map(ListOrSingle::items).unwrap_or_default()
    }

    pub fn x_axes(&self) -> &[Axis] {
        self.x_axis.as_ref().map(ListOrSingle::items).unwrap_or_default()
    }

    pub fn y_axes(&self) -> &[Axis] {
        self.y_axis.as_ref().map(ListOrSingle::items).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::Shape;

    #[test]
    fn test_empty_option_is_empty_object() {
        let option: ChartOption = serde_json::from_str("{}").unwrap();
        assert_eq!(option, ChartOption::default());
        assert_eq!(serde_json::to_string(&option).unwrap(), "{}");
        assert!(option.series().is_empty());
    }

    #[test]
    fn test_bare_title_stays_bare() {
        let source = r#"{"title":{"text":"Sales"}}"#;
        let option: ChartOption = serde_json::from_str(source).unwrap();
        assert_eq!(option.title.as_ref().unwrap().shape(), Shape::Bare);
        assert_eq!(option.titles()[0].text.as_deref(), Some("Sales"));
        assert_eq!(serde_json::to_string(&option).unwrap(), source);
    }

    #[test]
    fn test_axis_array_stays_array() {
        let source = r#"{"yAxis":[{"type":"value"},{"type":"value","position":"right"}]}"#;
        let option: ChartOption = serde_json::from_str(source).unwrap();
        assert_eq!(option.y_axes().len(), 2);
        assert_eq!(serde_json::to_string(&option).unwrap(), source);
    }

    #[test]
    fn test_bare_series_and_color_are_written_as_arrays() {
        let option: ChartOption =
            serde_json::from_str(r#"{"series":{"type":"line"},"color":"red"}"#).unwrap();
        assert_eq!(option.series().len(), 1);
        assert_eq!(option.color, Some(vec![ColorValue::solid("red")]));
        assert_eq!(
            serde_json::to_string(&option).unwrap(),
            r#"{"series":[{"type":"line"}],"color":["red"]}"#
        );
    }

    #[test]
    fn test_null_series_is_absent() {
        let option: ChartOption = serde_json::from_str(r#"{"series":null}"#).unwrap();
        assert_eq!(option.series, None);
    }
}
