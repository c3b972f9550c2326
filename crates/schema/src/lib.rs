//! Component-schema wire/boundary support.
//!
//! The CMS describes reusable content components (for example `dynamic.standard-text`) in
//! JSON schema documents. Typed declarations for those components are generated by CMS
//! tooling; this crate treats the schemas purely as configuration data:
//! - a strict wire model for the schema documents
//! - a registry of the components this service recognises
//! - instance shapes for component content embedded in entries
//!
//! Nothing here generates declarations.

pub mod component;
pub mod registry;
pub mod standard_text;

// Re-export facades
pub use component::{Attribute, AttributeKind, ComponentSchema, ComponentUid};
pub use registry::ComponentRegistry;
pub use standard_text::{DynamicBlock, StandardText};

/// Errors returned by the `content-schema` boundary crate.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("translation error: {0}")]
    Translation(String),

    #[error("unknown component: {0}")]
    UnknownComponent(String),

    #[error("duplicate component: {0}")]
    DuplicateComponent(String),

    #[error("failed to serialise schema: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Type alias for Results that can fail with a [`SchemaError`].
pub type SchemaResult<T> = Result<T, SchemaError>;
