use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::style::TextStyle;
use crate::codec::StringOrNumber;

/// `title`: main and sub title text.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Title {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtext: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sublink: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_style: Option<TextStyle>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtext_style: Option<TextStyle>,

    /// `left`, `center`, `right`, pixels or a percentage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<StringOrNumber>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<StringOrNumber>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<StringOrNumber>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<StringOrNumber>,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Title {
            text: Some(text.into()),
            ..Default::default()
        }
    }
}
