//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into services. Services
//! never read process-wide environment variables while handling a request.

use crate::{ContentError, ContentResult};

/// Field renderer configuration resolved at startup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldRenderConfig {
    media_base_url: Option<String>,
}

impl FieldRenderConfig {
    /// Create a new `FieldRenderConfig`.
    ///
    /// A provided base url must be an `http://` or `https://` url; a trailing `/` is removed.
    pub fn new(media_base_url: Option<String>) -> ContentResult<Self> {
        let media_base_url = media_base_url
            .map(|raw| normalise_base_url(&raw))
            .transpose()?;

        Ok(Self { media_base_url })
    }

    /// Public origin that site-relative upload urls are joined onto.
    pub fn media_base_url(&self) -> Option<&str> {
        self.media_base_url.as_deref()
    }
}

/// Parse the media base url from an optional environment value.
///
/// If `value` is `None` or empty/whitespace, no base url is configured.
pub fn media_base_url_from_env_value(value: Option<String>) -> ContentResult<Option<String>> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(|v| normalise_base_url(&v))
        .transpose()
}

fn normalise_base_url(raw: &str) -> ContentResult<String> {
    let trimmed = raw.trim();

    let rest = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .ok_or_else(|| {
            ContentError::Config(format!(
                "media base url '{trimmed}' must start with http:// or https://"
            ))
        })?;

    let host = rest.split('/').next().unwrap_or_default();
    if host.is_empty() {
        return Err(ContentError::Config(format!(
            "media base url '{trimmed}' has no host"
        )));
    }

    if trimmed.chars().any(char::is_whitespace) {
        return Err(ContentError::Config(format!(
            "media base url '{trimmed}' must not contain whitespace"
        )));
    }

    Ok(trimmed.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_env_value_means_unset() {
        assert_eq!(media_base_url_from_env_value(None).expect("ok"), None);
        assert_eq!(
            media_base_url_from_env_value(Some("   ".into())).expect("ok"),
            None
        );
    }

    #[test]
    fn trims_trailing_slashes() {
        let value = media_base_url_from_env_value(Some(" https://cdn.example.com/media/ ".into()))
            .expect("valid url");
        assert_eq!(value.as_deref(), Some("https://cdn.example.com/media"));

        let config = FieldRenderConfig::new(Some("http://localhost:1337/".into())).expect("valid");
        assert_eq!(config.media_base_url(), Some("http://localhost:1337"));
    }

    #[test]
    fn rejects_non_http_urls() {
        for raw in ["cdn.example.com", "ftp://cdn.example.com", "https://", "https://a b.com"] {
            let err = FieldRenderConfig::new(Some(raw.into())).expect_err("should reject url");
            assert!(matches!(err, ContentError::Config(_)), "{raw}: {err}");
        }
    }

    #[test]
    fn default_has_no_base_url() {
        assert_eq!(FieldRenderConfig::default().media_base_url(), None);
    }
}
