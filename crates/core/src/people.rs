//! People content normalisation.
//!
//! Turns stored person entries into the response shape served to API consumers. Media and
//! call-to-action fields are resolved through the injected collaborators; the biographical
//! text fields `qualifications`, `experience` and `quote` are always present in the output,
//! empty when the entry leaves them unset. `name`, `description` and `linkedIn` are passed
//! through as stored.

use crate::field_render::{CtaResolver, MediaResolver};
use crate::{ContentError, ContentResult};
use content_types::{DesignationResponse, PeopleRequest, PeopleResponse};
use serde::de::DeserializeOwned;
use std::path::Path;

/// People normalisation over explicit media and CTA resolvers.
#[derive(Clone, Debug)]
pub struct PeopleService<M, C> {
    media: M,
    cta: C,
}

impl<M: MediaResolver, C: CtaResolver> PeopleService<M, C> {
    pub fn new(media: M, cta: C) -> Self {
        Self { media, cta }
    }

    /// Normalise a single person entry.
    ///
    /// # Errors
    ///
    /// Returns whatever error the media or CTA resolver reports; nothing is retried or
    /// wrapped.
    pub fn get_item(&self, person: PeopleRequest) -> ContentResult<PeopleResponse> {
        let PeopleRequest {
            name,
            image,
            description,
            designation,
            linked_in,
            cta,
            qualifications,
            experience,
            quote,
        } = person;

        let image = image
            .as_ref()
            .map(|image| self.media.get_media_image(image))
            .transpose()
            .map_err(|e| {
                tracing::warn!("media resolution failed for person {name:?}: {e}");
                e
            })?;

        let cta = cta
            .as_ref()
            .map(|cta| self.cta.get_cta(cta))
            .transpose()
            .map_err(|e| {
                tracing::warn!("cta resolution failed for person {name:?}: {e}");
                e
            })?;

        let designation = designation
            .into_iter()
            .map(|entry| DesignationResponse {
                role: entry.role,
                text: entry.designation.text,
            })
            .collect();

        Ok(PeopleResponse {
            name,
            image,
            description,
            designation,
            linked_in,
            cta,
            qualifications: qualifications.unwrap_or_default(),
            experience: experience.unwrap_or_default(),
            quote: quote.unwrap_or_default(),
        })
    }

    /// Normalise a list of person entries, preserving order.
    ///
    /// The first failing entry fails the whole list.
    pub fn get_people(&self, people: Vec<PeopleRequest>) -> ContentResult<Vec<PeopleResponse>> {
        tracing::debug!(count = people.len(), "normalising people");
        people
            .into_iter()
            .map(|person| self.get_item(person))
            .collect()
    }

    /// Parse a JSON array of person entries, normalise it and render pretty JSON.
    pub fn normalise_people_json(&self, json_text: &str) -> ContentResult<String> {
        let people = self.get_people(parse_people(json_text)?)?;
        serde_json::to_string_pretty(&people).map_err(ContentError::Serialization)
    }
}

/// Parse a JSON array of person entries.
///
/// # Errors
///
/// Returns [`ContentError::InvalidInput`] naming the path of the first field that does not
/// match the person shape (for example `[0].designation[1].designation`).
pub fn parse_people(json_text: &str) -> ContentResult<Vec<PeopleRequest>> {
    parse_json(json_text, "people")
}

/// Parse a single JSON person entry.
pub fn parse_person(json_text: &str) -> ContentResult<PeopleRequest> {
    parse_json(json_text, "person")
}

/// Read and parse a single JSON person entry from disk.
pub fn load_person(path: &Path) -> ContentResult<PeopleRequest> {
    let contents = std::fs::read_to_string(path).map_err(ContentError::FileRead)?;
    parse_person(&contents)
}

fn parse_json<T: DeserializeOwned>(json_text: &str, what: &str) -> ContentResult<T> {
    let mut deserializer = serde_json::Deserializer::from_str(json_text);

    let parsed = match serde_path_to_error::deserialize::<_, T>(&mut deserializer) {
        Ok(parsed) => parsed,
        Err(err) => {
            let path = err.path().to_string();
            let source = err.into_inner();
            let path = if path.is_empty() || path == "." {
                "<root>"
            } else {
                path.as_str()
            };
            return Err(ContentError::InvalidInput(format!(
                "{what} mismatch at {path}: {source}"
            )));
        }
    };

    deserializer
        .end()
        .map_err(|e| ContentError::InvalidInput(format!("trailing content after {what}: {e}")))?;

    Ok(parsed)
}
