use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::style::TextStyle;
use crate::codec::number;
use crate::codec::{LegendData, StringOrBool, StringOrNumber};

/// `legend`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Legend {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,

    /// `plain` or `scroll`
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub legend_type: Option<String>,

    /// `horizontal` or `vertical`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orient: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<StringOrNumber>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<StringOrNumber>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<StringOrNumber>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<StringOrNumber>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "number::option::serialize"
    )]
    pub item_gap: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// `true`, `false`, `single` or `multiple`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_mode: Option<StringOrBool>,

    /// Initial selection state keyed by series name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<IndexMap<String, bool>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_style: Option<TextStyle>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<LegendData>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::LegendDataItem;

    #[test]
    fn test_legend_with_line_break_data() {
        let source = r#"{"selectedMode":"single","data":["a","","b"]}"#;
        let legend: Legend = serde_json::from_str(source).unwrap();
        assert_eq!(legend.selected_mode, Some(StringOrBool::from("single")));
        let data = legend.data.as_ref().unwrap();
        assert_eq!(data[1], LegendDataItem::name(""));
        assert_eq!(serde_json::to_string(&legend).unwrap(), source);
    }

    #[test]
    fn test_selected_keeps_key_order() {
        let source = r#"{"selectedMode":false,"selected":{"z":true,"a":false}}"#;
        let legend: Legend = serde_json::from_str(source).unwrap();
        let keys: Vec<_> = legend.selected.as_ref().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["z", "a"]);
        assert_eq!(serde_json::to_string(&legend).unwrap(), source);
    }

    #[test]
    fn test_bad_data_element_fails_legend() {
        let err = serde_json::from_str::<Legend>(r#"{"data":["a",[1]]}"#).unwrap_err();
        assert!(err.to_string().contains("$[1]: unexpected array"));
    }
}
