//! Field rendering collaborators.
//!
//! Content services turn stored media and call-to-action references into renderable objects
//! through the [`MediaResolver`] and [`CtaResolver`] traits. Services receive their resolvers
//! at construction time; [`FieldRenderService`] is the default implementation of both.

use crate::config::FieldRenderConfig;
use crate::constants::{TARGET_BLANK, TARGET_SELF};
use crate::{ContentError, ContentResult};
use content_types::{Cta, CtaReference, MediaImage, MediaReference, NonEmptyText};
use std::sync::Arc;

/// Resolves a stored media reference into a media descriptor.
pub trait MediaResolver {
    fn get_media_image(&self, image: &MediaReference) -> ContentResult<MediaImage>;
}

/// Resolves a stored call-to-action reference into a renderable call to action.
pub trait CtaResolver {
    fn get_cta(&self, cta: &CtaReference) -> ContentResult<Cta>;
}

impl<T: MediaResolver + ?Sized> MediaResolver for &T {
    fn get_media_image(&self, image: &MediaReference) -> ContentResult<MediaImage> {
        (**self).get_media_image(image)
    }
}

impl<T: MediaResolver + ?Sized> MediaResolver for Arc<T> {
    fn get_media_image(&self, image: &MediaReference) -> ContentResult<MediaImage> {
        (**self).get_media_image(image)
    }
}

impl<T: CtaResolver + ?Sized> CtaResolver for &T {
    fn get_cta(&self, cta: &CtaReference) -> ContentResult<Cta> {
        (**self).get_cta(cta)
    }
}

impl<T: CtaResolver + ?Sized> CtaResolver for Arc<T> {
    fn get_cta(&self, cta: &CtaReference) -> ContentResult<Cta> {
        (**self).get_cta(cta)
    }
}

/// Default field renderer.
///
/// Site-relative upload urls are joined onto the configured media base url; absolute urls
/// pass through unchanged.
#[derive(Clone, Debug, Default)]
pub struct FieldRenderService {
    config: FieldRenderConfig,
}

impl FieldRenderService {
    pub fn new(config: FieldRenderConfig) -> Self {
        Self { config }
    }

    fn resolve_url(&self, url: &str) -> String {
        let is_absolute =
            url.starts_with("http://") || url.starts_with("https://") || url.starts_with("//");

        match self.config.media_base_url() {
            Some(base) if !is_absolute => {
                if url.starts_with('/') {
                    format!("{base}{url}")
                } else {
                    format!("{base}/{url}")
                }
            }
            _ => url.to_string(),
        }
    }
}

impl MediaResolver for FieldRenderService {
    fn get_media_image(&self, image: &MediaReference) -> ContentResult<MediaImage> {
        let url = image.url.trim();
        if url.is_empty() {
            return Err(ContentError::MediaResolution(format!(
                "media '{}' has no url",
                image.name.as_deref().unwrap_or("<unnamed>")
            )));
        }

        // Editors often leave alternativeText blank; fall back to the file name.
        let alt = image
            .alternative_text
            .as_deref()
            .filter(|alt| !alt.trim().is_empty())
            .or(image.name.as_deref())
            .unwrap_or_default()
            .to_string();

        let formats = image
            .formats
            .iter()
            .map(|(name, format)| (name.clone(), self.resolve_url(format.url.trim())))
            .collect();

        Ok(MediaImage {
            url: self.resolve_url(url),
            alt,
            caption: image.caption.clone().unwrap_or_default(),
            width: image.width,
            height: image.height,
            mime: image.mime.clone(),
            formats,
        })
    }
}

impl CtaResolver for FieldRenderService {
    fn get_cta(&self, cta: &CtaReference) -> ContentResult<Cta> {
        let text = NonEmptyText::new(&cta.text).map_err(|_| {
            ContentError::CtaResolution("call to action text cannot be empty".into())
        })?;
        let link = NonEmptyText::new(&cta.link).map_err(|_| {
            ContentError::CtaResolution(format!("call to action '{text}' has no link"))
        })?;

        let target = if cta.open_in_new_tab.unwrap_or(false) {
            TARGET_BLANK
        } else {
            TARGET_SELF
        };

        Ok(Cta {
            text: text.into_string(),
            link: link.into_string(),
            target: target.to_string(),
        })
    }
}
