//! Registry of recognised content components.

use crate::component::{ComponentSchema, ComponentUid};
use crate::{SchemaError, SchemaResult};
use std::collections::BTreeMap;

const STANDARD_TEXT_SCHEMA: &str = include_str!("../schemas/dynamic/standard-text.json");

/// Schemas bundled with the service, keyed by uid.
const BUILTIN_SCHEMAS: &[(&str, &str)] = &[("dynamic.standard-text", STANDARD_TEXT_SCHEMA)];

/// Lookup table from component uid to schema.
#[derive(Clone, Debug, Default)]
pub struct ComponentRegistry {
    components: BTreeMap<ComponentUid, ComponentSchema>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry holding every bundled component schema.
    pub fn builtin() -> SchemaResult<Self> {
        let mut registry = Self::new();
        for (uid, json_text) in BUILTIN_SCHEMAS {
            let uid = ComponentUid::parse(uid)?;
            registry.register(ComponentSchema::parse(uid, json_text)?)?;
        }
        Ok(registry)
    }

    /// Add a schema. Registering the same uid twice is an error.
    pub fn register(&mut self, schema: ComponentSchema) -> SchemaResult<()> {
        if self.components.contains_key(&schema.uid) {
            return Err(SchemaError::DuplicateComponent(schema.uid.to_string()));
        }
        self.components.insert(schema.uid.clone(), schema);
        Ok(())
    }

    /// Look up a component by its textual uid.
    pub fn get(&self, uid: &str) -> SchemaResult<&ComponentSchema> {
        let parsed = ComponentUid::parse(uid)?;
        self.components
            .get(&parsed)
            .ok_or_else(|| SchemaError::UnknownComponent(uid.to_owned()))
    }

    /// Registered uids in sorted order.
    pub fn uids(&self) -> Vec<String> {
        self.components.keys().map(ToString::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
