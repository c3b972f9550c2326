//! # Content Core
//!
//! Core data-shaping services for the content API.
//!
//! This crate turns stored content entries into the response payloads served to API
//! consumers:
//! - People normalisation ([`people::PeopleService`])
//! - Media and call-to-action rendering ([`field_render`])
//!
//! **No API concerns**: routing, HTTP servers and the CMS itself live outside this crate.
//! Services take their collaborators and configuration explicitly.

pub mod config;
pub mod constants;
pub mod error;
pub mod field_render;
pub mod people;

pub use config::FieldRenderConfig;
pub use error::{ContentError, ContentResult};
pub use field_render::{CtaResolver, FieldRenderService, MediaResolver};
pub use people::PeopleService;
