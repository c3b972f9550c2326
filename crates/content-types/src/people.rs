//! Person records as stored by the CMS and as returned to API consumers.
//!
//! Wire keys follow the CMS's camelCase naming (`linkedIn`). Response field order is the
//! declaration order below and is part of the response contract.
//!
//! `description` and `linkedIn` are passed through as stored, so they keep three states:
//! absent (`None`, omitted on output), null (`Some(None)`, rendered as `null`) and set.

use crate::field::{Cta, CtaReference, MediaImage, MediaReference};
use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize a present key into `Some(..)` so a JSON `null` becomes `Some(None)`.
///
/// Pair with `#[serde(default)]` so a missing key stays `None`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Nested text carrier inside a designation entry.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct DesignationText {
    pub text: String,
}

/// A role paired with its nested description, as stored by the CMS.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct DesignationRequest {
    pub role: String,
    pub designation: DesignationText,
}

/// A role with its description lifted one level up.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct DesignationResponse {
    pub role: String,
    pub text: String,
}

/// Raw person entry handed over by the content API.
///
/// Unknown keys (ids, timestamps, locale) are ignored.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PeopleRequest {
    pub name: String,

    #[serde(default)]
    pub image: Option<MediaReference>,

    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<Option<String>>,

    pub designation: Vec<DesignationRequest>,

    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub linked_in: Option<Option<String>>,

    #[serde(default)]
    pub cta: Option<CtaReference>,

    #[serde(default)]
    pub qualifications: Option<String>,

    #[serde(default)]
    pub experience: Option<String>,

    #[serde(default)]
    pub quote: Option<String>,
}

/// Normalised person payload returned to API consumers.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PeopleResponse {
    pub name: String,
    pub image: Option<MediaImage>,

    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<Option<String>>,

    pub designation: Vec<DesignationResponse>,

    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub linked_in: Option<Option<String>>,

    pub cta: Option<Cta>,
    pub qualifications: String,
    pub experience: String,
    pub quote: String,
}
