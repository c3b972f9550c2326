//! Component schema wire model and translation helpers.
//!
//! A component schema document looks like:
//!
//! ```json
//! {
//!   "collectionName": "components_dynamic_standard_texts",
//!   "info": { "displayName": "Standard Text" },
//!   "attributes": { "Title": { "type": "string" }, "Text": { "type": "richtext" } }
//! }
//! ```
//!
//! The uid (`dynamic.standard-text`) is not part of the document; it comes from where the
//! document lives (`<category>/<name>.json`) and is supplied by the caller.

use crate::{SchemaError, SchemaResult};
use content_types::NonEmptyText;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Public domain-level types
// ============================================================================

/// Field type of a component attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttributeKind {
    /// Short single-line text.
    String,
    /// Long plain text.
    Text,
    /// Long-form markdown text.
    RichText,
    /// Structured block content.
    Blocks,
    Email,
    Uid,
    Integer,
    BigInteger,
    Decimal,
    Float,
    Boolean,
    Date,
    DateTime,
    Time,
    Json,
    Enumeration,
    Media,
    Relation,
    Component,
    DynamicZone,
}

impl AttributeKind {
    fn to_wire(self) -> &'static str {
        match self {
            AttributeKind::String => "string",
            AttributeKind::Text => "text",
            AttributeKind::RichText => "richtext",
            AttributeKind::Blocks => "blocks",
            AttributeKind::Email => "email",
            AttributeKind::Uid => "uid",
            AttributeKind::Integer => "integer",
            AttributeKind::BigInteger => "biginteger",
            AttributeKind::Decimal => "decimal",
            AttributeKind::Float => "float",
            AttributeKind::Boolean => "boolean",
            AttributeKind::Date => "date",
            AttributeKind::DateTime => "datetime",
            AttributeKind::Time => "time",
            AttributeKind::Json => "json",
            AttributeKind::Enumeration => "enumeration",
            AttributeKind::Media => "media",
            AttributeKind::Relation => "relation",
            AttributeKind::Component => "component",
            AttributeKind::DynamicZone => "dynamiczone",
        }
    }

    fn from_wire(s: &str) -> Option<Self> {
        match s {
            "string" => Some(AttributeKind::String),
            "text" => Some(AttributeKind::Text),
            "richtext" => Some(AttributeKind::RichText),
            "blocks" => Some(AttributeKind::Blocks),
            "email" => Some(AttributeKind::Email),
            "uid" => Some(AttributeKind::Uid),
            "integer" => Some(AttributeKind::Integer),
            "biginteger" => Some(AttributeKind::BigInteger),
            "decimal" => Some(AttributeKind::Decimal),
            "float" => Some(AttributeKind::Float),
            "boolean" => Some(AttributeKind::Boolean),
            "date" => Some(AttributeKind::Date),
            "datetime" => Some(AttributeKind::DateTime),
            "time" => Some(AttributeKind::Time),
            "json" => Some(AttributeKind::Json),
            "enumeration" => Some(AttributeKind::Enumeration),
            "media" => Some(AttributeKind::Media),
            "relation" => Some(AttributeKind::Relation),
            "component" => Some(AttributeKind::Component),
            "dynamiczone" => Some(AttributeKind::DynamicZone),
            _ => None,
        }
    }
}

/// Component identifier of the form `<category>.<name>`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ComponentUid {
    category: String,
    name: String,
}

impl ComponentUid {
    /// Parse and validate a component uid.
    ///
    /// Both segments must be non-empty and use only `a-z`, `0-9` and `-`, and must not start
    /// with `-`.
    pub fn parse(input: &str) -> SchemaResult<Self> {
        let (category, name) = input.split_once('.').ok_or_else(|| {
            SchemaError::InvalidInput(format!(
                "component uid '{input}' must have the form <category>.<name>"
            ))
        })?;

        validate_uid_segment(input, category)?;
        validate_uid_segment(input, name)?;

        Ok(Self {
            category: category.to_owned(),
            name: name.to_owned(),
        })
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for ComponentUid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.category, self.name)
    }
}

fn validate_uid_segment(uid: &str, segment: &str) -> SchemaResult<()> {
    let valid = !segment.is_empty()
        && !segment.starts_with('-')
        && segment
            .bytes()
            .all(|b| matches!(b, b'a'..=b'z' | b'0'..=b'9' | b'-'));

    if !valid {
        return Err(SchemaError::InvalidInput(format!(
            "component uid '{uid}' has an invalid segment '{segment}' (only a-z, 0-9 and '-' allowed)"
        )));
    }
    Ok(())
}

/// A single named field of a component.
///
/// Companion fields only carry a value for the kinds that use them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub kind: AttributeKind,
    pub required: bool,
    pub max_length: Option<u32>,

    /// Allowed values of an enumeration.
    pub enum_values: Vec<String>,

    /// Nested component of a component attribute.
    pub component: Option<ComponentUid>,

    pub repeatable: bool,

    /// Components allowed in a dynamic zone.
    pub components: Vec<ComponentUid>,

    /// Relation cardinality, e.g. `oneToMany`.
    pub relation: Option<String>,

    /// Target content type of a relation, e.g. `api::person.person`.
    pub target: Option<String>,

    /// Whether a media attribute holds several files.
    pub multiple: bool,

    /// Media kinds accepted by a media attribute (`images`, `files`, ...).
    pub allowed_types: Vec<String>,
}

/// Domain-level carrier for a component schema.
#[derive(Clone, Debug, PartialEq)]
pub struct ComponentSchema {
    pub uid: ComponentUid,

    /// Storage collection backing the component.
    pub collection_name: String,

    /// Label shown to editors.
    pub display_name: NonEmptyText,

    pub description: Option<String>,

    pub icon: Option<String>,

    /// Free-form editor options, carried through untouched.
    pub options: BTreeMap<String, serde_json::Value>,

    /// Attributes ordered by name.
    pub attributes: Vec<Attribute>,
}

impl ComponentSchema {
    /// Parse a component schema document from JSON text.
    ///
    /// Uses `serde_path_to_error` so a mismatch reports where in the document it happened
    /// (e.g. `attributes.Title`).
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] if:
    /// - the JSON does not match the schema wire model or carries unknown keys,
    /// - the collection name is empty,
    /// - an attribute uses a type this service does not recognise,
    /// - a composite attribute lacks its companion field (`enum`, `component`, `components`,
    ///   `relation`/`target`) or names an invalid component uid.
    pub fn parse(uid: ComponentUid, json_text: &str) -> SchemaResult<Self> {
        let mut deserializer = serde_json::Deserializer::from_str(json_text);

        let wire = match serde_path_to_error::deserialize::<_, ComponentSchemaWire>(
            &mut deserializer,
        ) {
            Ok(parsed) => parsed,
            Err(err) => {
                let path = err.path().to_string();
                let source = err.into_inner();
                let path = if path.is_empty() || path == "." {
                    "<root>"
                } else {
                    path.as_str()
                };
                return Err(SchemaError::Translation(format!(
                    "Component schema mismatch for {uid} at {path}: {source}"
                )));
            }
        };

        deserializer.end().map_err(|e| {
            SchemaError::Translation(format!("Trailing content in schema for {uid}: {e}"))
        })?;

        wire_to_domain(uid, wire)
    }

    /// Render the schema back to its JSON document form.
    pub fn render(&self) -> SchemaResult<String> {
        let wire = domain_to_wire(self);
        Ok(serde_json::to_string_pretty(&wire)?)
    }

    /// Look up an attribute by its exact name.
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }
}

// ============================================================================
// Wire types (internal)
// ============================================================================

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct ComponentSchemaWire {
    pub collection_name: String,

    pub info: ComponentInfoWire,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub options: BTreeMap<String, serde_json::Value>,

    pub attributes: BTreeMap<String, AttributeWire>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct ComponentInfoWire {
    pub display_name: NonEmptyText,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct AttributeWire {
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,

    #[serde(rename = "enum", default, skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeatable: Option<bool>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiple: Option<bool>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_types: Vec<String>,
}

// ============================================================================
// Helper functions (internal)
// ============================================================================

fn wire_to_domain(uid: ComponentUid, wire: ComponentSchemaWire) -> SchemaResult<ComponentSchema> {
    if wire.collection_name.trim().is_empty() {
        return Err(SchemaError::InvalidInput(format!(
            "collectionName cannot be empty for {uid}"
        )));
    }

    let attributes = wire
        .attributes
        .into_iter()
        .map(|(name, attr)| attribute_from_wire(&uid, name, attr))
        .collect::<SchemaResult<Vec<_>>>()?;

    Ok(ComponentSchema {
        uid,
        collection_name: wire.collection_name,
        display_name: wire.info.display_name,
        description: wire.info.description,
        icon: wire.info.icon,
        options: wire.options,
        attributes,
    })
}

fn attribute_from_wire(
    uid: &ComponentUid,
    name: String,
    attr: AttributeWire,
) -> SchemaResult<Attribute> {
    let kind = AttributeKind::from_wire(&attr.kind).ok_or_else(|| {
        SchemaError::Translation(format!(
            "Unsupported attribute type '{}' for {uid}.{name}",
            attr.kind
        ))
    })?;

    let missing = |field: &str| {
        SchemaError::Translation(format!(
            "Attribute {uid}.{name} of type '{}' requires '{field}'",
            attr.kind
        ))
    };

    match kind {
        AttributeKind::Enumeration if attr.enum_values.is_empty() => return Err(missing("enum")),
        AttributeKind::Component if attr.component.is_none() => return Err(missing("component")),
        AttributeKind::DynamicZone if attr.components.is_empty() => {
            return Err(missing("components"))
        }
        AttributeKind::Relation if attr.relation.is_none() => return Err(missing("relation")),
        AttributeKind::Relation if attr.target.is_none() => return Err(missing("target")),
        _ => {}
    }

    let component = attr
        .component
        .as_deref()
        .map(ComponentUid::parse)
        .transpose()?;
    let components = attr
        .components
        .iter()
        .map(|c| ComponentUid::parse(c))
        .collect::<SchemaResult<Vec<_>>>()?;

    Ok(Attribute {
        name,
        kind,
        required: attr.required.unwrap_or(false),
        max_length: attr.max_length,
        enum_values: attr.enum_values,
        component,
        repeatable: attr.repeatable.unwrap_or(false),
        components,
        relation: attr.relation,
        target: attr.target,
        multiple: attr.multiple.unwrap_or(false),
        allowed_types: attr.allowed_types,
    })
}

fn attribute_to_wire(attr: &Attribute) -> AttributeWire {
    AttributeWire {
        kind: attr.kind.to_wire().to_string(),
        required: attr.required.then_some(true),
        max_length: attr.max_length,
        enum_values: attr.enum_values.clone(),
        component: attr.component.as_ref().map(ToString::to_string),
        repeatable: attr.repeatable.then_some(true),
        components: attr.components.iter().map(ToString::to_string).collect(),
        relation: attr.relation.clone(),
        target: attr.target.clone(),
        multiple: attr.multiple.then_some(true),
        allowed_types: attr.allowed_types.clone(),
    }
}

fn domain_to_wire(schema: &ComponentSchema) -> ComponentSchemaWire {
    ComponentSchemaWire {
        collection_name: schema.collection_name.clone(),
        info: ComponentInfoWire {
            display_name: schema.display_name.clone(),
            description: schema.description.clone(),
            icon: schema.icon.clone(),
        },
        options: schema.options.clone(),
        attributes: schema
            .attributes
            .iter()
            .map(|a| (a.name.clone(), attribute_to_wire(a)))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uid() -> ComponentUid {
        ComponentUid::parse("dynamic.standard-text").expect("valid uid")
    }

    #[test]
    fn parses_uid_segments() {
        let uid = uid();
        assert_eq!(uid.category(), "dynamic");
        assert_eq!(uid.name(), "standard-text");
        assert_eq!(uid.to_string(), "dynamic.standard-text");
    }

    #[test]
    fn rejects_malformed_uids() {
        for input in ["standard-text", "dynamic.", ".standard-text", "Dynamic.text", "dynamic.-x"] {
            let err = ComponentUid::parse(input).expect_err("should reject uid");
            assert!(matches!(err, SchemaError::InvalidInput(_)), "{input}: {err}");
        }
    }

    #[test]
    fn parses_attributes_with_constraints() {
        let input = r#"{
            "collectionName": "components_shared_quotes",
            "info": {"displayName": "Quote", "icon": "quote"},
            "attributes": {
                "Body": {"type": "text", "required": true},
                "Author": {"type": "string", "maxLength": 80}
            }
        }"#;

        let uid = ComponentUid::parse("shared.quote").expect("valid uid");
        let schema = ComponentSchema::parse(uid, input).expect("parse schema");

        let body = schema.attribute("Body").expect("Body attribute");
        assert_eq!(body.kind, AttributeKind::Text);
        assert!(body.required);

        let author = schema.attribute("Author").expect("Author attribute");
        assert_eq!(author.max_length, Some(80));
        assert!(!author.required);

        // BTreeMap ordering
        assert_eq!(schema.attributes[0].name, "Author");
        assert_eq!(schema.icon.as_deref(), Some("quote"));
    }

    fn parse_single_attribute(attribute_json: &str) -> SchemaResult<ComponentSchema> {
        let input = format!(
            r#"{{
                "collectionName": "components_shared_blocks",
                "info": {{"displayName": "Block"}},
                "attributes": {{"Field": {attribute_json}}}
            }}"#
        );
        let uid = ComponentUid::parse("shared.block").expect("valid uid");
        ComponentSchema::parse(uid, &input)
    }

    #[test]
    fn parses_enumeration_values() {
        let schema = parse_single_attribute(
            r#"{"type": "enumeration", "enum": ["primary", "secondary"], "required": true}"#,
        )
        .expect("parse enumeration");

        let field = schema.attribute("Field").expect("Field attribute");
        assert_eq!(field.kind, AttributeKind::Enumeration);
        assert_eq!(field.enum_values, vec!["primary", "secondary"]);
        assert!(field.required);
    }

    #[test]
    fn enumeration_requires_values() {
        let err = parse_single_attribute(r#"{"type": "enumeration"}"#)
            .expect_err("enumeration without values");
        match err {
            SchemaError::Translation(msg) => assert!(msg.contains("'enum'"), "{msg}"),
            other => panic!("expected Translation error, got {other:?}"),
        }
    }

    #[test]
    fn parses_nested_component() {
        let schema = parse_single_attribute(
            r#"{"type": "component", "component": "shared.cta", "repeatable": false}"#,
        )
        .expect("parse component");

        let field = schema.attribute("Field").expect("Field attribute");
        assert_eq!(field.kind, AttributeKind::Component);
        assert_eq!(
            field.component.as_ref().map(ToString::to_string).as_deref(),
            Some("shared.cta")
        );
        assert!(!field.repeatable);
    }

    #[test]
    fn component_attribute_validates_nested_uid() {
        let err = parse_single_attribute(r#"{"type": "component", "component": "SharedCta"}"#)
            .expect_err("invalid nested uid");
        assert!(matches!(err, SchemaError::InvalidInput(_)));

        let err = parse_single_attribute(r#"{"type": "component", "repeatable": true}"#)
            .expect_err("missing nested uid");
        assert!(matches!(err, SchemaError::Translation(_)));
    }

    #[test]
    fn parses_relation_target() {
        let schema = parse_single_attribute(
            r#"{"type": "relation", "relation": "oneToMany", "target": "api::person.person"}"#,
        )
        .expect("parse relation");

        let field = schema.attribute("Field").expect("Field attribute");
        assert_eq!(field.kind, AttributeKind::Relation);
        assert_eq!(field.relation.as_deref(), Some("oneToMany"));
        assert_eq!(field.target.as_deref(), Some("api::person.person"));

        let err = parse_single_attribute(r#"{"type": "relation", "relation": "oneToOne"}"#)
            .expect_err("relation without target");
        match err {
            SchemaError::Translation(msg) => assert!(msg.contains("'target'"), "{msg}"),
            other => panic!("expected Translation error, got {other:?}"),
        }
    }

    #[test]
    fn parses_media_options() {
        let schema = parse_single_attribute(
            r#"{"type": "media", "multiple": true, "allowedTypes": ["images", "videos"]}"#,
        )
        .expect("parse media");

        let field = schema.attribute("Field").expect("Field attribute");
        assert_eq!(field.kind, AttributeKind::Media);
        assert!(field.multiple);
        assert_eq!(field.allowed_types, vec!["images", "videos"]);
    }

    #[test]
    fn parses_dynamic_zone_components() {
        let schema = parse_single_attribute(
            r#"{"type": "dynamiczone", "components": ["dynamic.standard-text", "shared.cta"]}"#,
        )
        .expect("parse dynamic zone");

        let field = schema.attribute("Field").expect("Field attribute");
        assert_eq!(field.kind, AttributeKind::DynamicZone);
        let uids: Vec<String> = field.components.iter().map(ToString::to_string).collect();
        assert_eq!(uids, vec!["dynamic.standard-text", "shared.cta"]);

        let err = parse_single_attribute(r#"{"type": "dynamiczone", "components": []}"#)
            .expect_err("empty dynamic zone");
        assert!(matches!(err, SchemaError::Translation(_)));
    }

    #[test]
    fn render_keeps_composite_companions() {
        let schema = parse_single_attribute(
            r#"{"type": "component", "component": "shared.cta", "repeatable": true}"#,
        )
        .expect("parse component");

        let rendered = schema.render().expect("render schema");
        assert!(rendered.contains(r#""component": "shared.cta""#));
        assert!(rendered.contains(r#""repeatable": true"#));
    }

    #[test]
    fn rejects_trailing_content() {
        let input = r#"{
            "collectionName": "components_dynamic_standard_texts",
            "info": {"displayName": "Standard Text"},
            "attributes": {}
        } {}"#;

        let err = ComponentSchema::parse(uid(), input).expect_err("trailing document");
        match err {
            SchemaError::Translation(msg) => assert!(msg.contains("Trailing"), "{msg}"),
            other => panic!("expected Translation error, got {other:?}"),
        }
    }

    #[test]
    fn strict_validation_rejects_unknown_keys() {
        let input = r#"{
            "collectionName": "components_dynamic_standard_texts",
            "info": {"displayName": "Standard Text"},
            "attributes": {"Title": {"type": "string", "pluginOptions": {}}}
        }"#;

        let err = ComponentSchema::parse(uid(), input).expect_err("should reject unknown key");
        match err {
            SchemaError::Translation(msg) => {
                assert!(msg.contains("pluginOptions"));
                assert!(msg.contains("attributes"));
            }
            other => panic!("expected Translation error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unsupported_attribute_type() {
        let input = r#"{
            "collectionName": "components_dynamic_standard_texts",
            "info": {"displayName": "Standard Text"},
            "attributes": {"Title": {"type": "hologram"}}
        }"#;

        let err = ComponentSchema::parse(uid(), input).expect_err("should reject type");
        match err {
            SchemaError::Translation(msg) => assert!(msg.contains("hologram")),
            other => panic!("expected Translation error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_blank_display_name() {
        let input = r#"{
            "collectionName": "components_dynamic_standard_texts",
            "info": {"displayName": "  "},
            "attributes": {}
        }"#;

        let err = ComponentSchema::parse(uid(), input).expect_err("should reject blank name");
        assert!(matches!(err, SchemaError::Translation(_)));
    }

    #[test]
    fn rejects_empty_collection_name() {
        let input = r#"{
            "collectionName": "",
            "info": {"displayName": "Standard Text"},
            "attributes": {}
        }"#;

        let err = ComponentSchema::parse(uid(), input).expect_err("should reject collection");
        assert!(matches!(err, SchemaError::InvalidInput(_)));
    }

    #[test]
    fn render_omits_defaults() {
        let input = r#"{
            "collectionName": "components_dynamic_standard_texts",
            "info": {"displayName": "Standard Text"},
            "options": {},
            "attributes": {"Title": {"type": "string", "required": false}}
        }"#;

        let schema = ComponentSchema::parse(uid(), input).expect("parse schema");
        let rendered = schema.render().expect("render schema");

        assert!(rendered.contains(r#""collectionName": "components_dynamic_standard_texts""#));
        assert!(rendered.contains(r#""type": "string""#));
        assert!(!rendered.contains("required"));
        assert!(!rendered.contains("options"));

        let reparsed = ComponentSchema::parse(uid(), &rendered).expect("reparse schema");
        assert_eq!(schema, reparsed);
    }
}
