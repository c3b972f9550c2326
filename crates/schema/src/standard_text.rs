//! Content instances of recognised components.

use serde::{Deserialize, Serialize};

/// Instance of the `dynamic.standard-text` component.
///
/// Attribute keys keep the schema's capitalised names (`Title`, `Text`).
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct StandardText {
    #[serde(rename = "Title", default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Markdown source.
    #[serde(rename = "Text", default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl StandardText {
    pub const UID: &'static str = "dynamic.standard-text";

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }
}

/// An entry of a dynamic zone, tagged by its component uid.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(tag = "__component")]
pub enum DynamicBlock {
    #[serde(rename = "dynamic.standard-text")]
    StandardText(StandardText),
}

impl DynamicBlock {
    pub fn uid(&self) -> &'static str {
        match self {
            DynamicBlock::StandardText(_) => StandardText::UID,
        }
    }
}
