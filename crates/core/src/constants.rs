//! Constants used throughout the content core crate.

/// Environment variable holding the public base url for uploaded media.
///
/// Only read by binaries at startup; services receive the resolved value via
/// [`crate::config::FieldRenderConfig`].
pub const MEDIA_BASE_URL_ENV: &str = "CONTENT_MEDIA_BASE_URL";

/// Link target for calls to action that open a new browsing context.
pub const TARGET_BLANK: &str = "_blank";

/// Link target for calls to action that stay in the current page.
pub const TARGET_SELF: &str = "_self";
