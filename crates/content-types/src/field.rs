//! Media and call-to-action records.
//!
//! The `*Reference` types are what the CMS stores against an entry; [`MediaImage`] and [`Cta`]
//! are the rendered forms produced by the field renderer in `content-core`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One responsive variant of an uploaded image (`thumbnail`, `small`, ...).
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct MediaFormat {
    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

/// An upload entry as referenced from a content record.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MediaReference {
    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternative_text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub formats: BTreeMap<String, MediaFormat>,
}

/// Rendered media descriptor embedded in API responses.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct MediaImage {
    pub url: String,
    pub alt: String,
    pub caption: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime: Option<String>,

    /// Format name to absolute url.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub formats: BTreeMap<String, String>,
}

/// Call-to-action component as stored by the CMS.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CtaReference {
    pub text: String,
    pub link: String,

    #[serde(default)]
    pub open_in_new_tab: Option<bool>,
}

/// Rendered call-to-action.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Cta {
    pub text: String,
    pub link: String,
    /// Either `_blank` or `_self`.
    pub target: String,
}
