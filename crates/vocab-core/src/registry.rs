//! Type registry: type tag to concrete vocabulary type.
//!
//! Built once, then shared immutably. Lookups need no locking, so any number
//! of codec calls may read the same registry concurrently.

use std::collections::{HashMap, HashSet};

use crate::{
    errors::RegistryError,
    object::VocabObject,
    schema::{Capability, TypeSchema},
};

#[derive(Debug, Default)]
pub struct RegistryBuilder {
    types: Vec<&'static TypeSchema>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(mut self, schema: &'static TypeSchema) -> Self {
        self.types.push(schema);
        self
    }

    pub fn register_all(mut self, schemas: &[&'static TypeSchema]) -> Self {
        self.types.extend_from_slice(schemas);
        self
    }

    /// Freezes the registrations. Two types sharing a canonical name is an error.
    pub fn build(self) -> Result<TypeRegistry, RegistryError> {
        tracing::debug!("building type registry");

        let mut seen = HashSet::new();
        for schema in &self.types {
            if !seen.insert(schema.name) {
                tracing::error!("found duplicate entry in type registry: {}", schema.name);
                return Err(RegistryError::DuplicateType(schema.name.to_owned()));
            }
        }

        let mut by_name = HashMap::with_capacity(self.types.len() * 2);
        for schema in &self.types {
            tracing::debug!("registering vocabulary type: {}", schema.name);
            by_name.insert(schema.name.to_owned(), *schema);
            by_name.insert(schema.iri(), *schema);
        }

        Ok(TypeRegistry {
            types: self.types,
            by_name,
        })
    }
}

/// Immutable lookup table from type tags to schemas.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: Vec<&'static TypeSchema>,
    // Canonical names and expanded IRIs both point at the schema.
    by_name: HashMap<String, &'static TypeSchema>,
}

impl TypeRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// The schema registered under `tag`, if it carries `capability`.
    pub fn resolve(&self, tag: &str, capability: Capability) -> Option<&'static TypeSchema> {
        self.by_name
            .get(tag)
            .copied()
            .filter(|schema| schema.capability == capability)
    }

    pub fn resolve_object(&self, tag: &str) -> Option<&'static TypeSchema> {
        self.resolve(tag, Capability::Object)
    }

    pub fn resolve_link(&self, tag: &str) -> Option<&'static TypeSchema> {
        self.resolve(tag, Capability::Link)
    }

    /// Tries the tags in the order given and returns the first that resolves.
    ///
    /// Order is the input's, not specificity: `["Note", "Article"]` resolves to
    /// `Note` even if the caller would consider `Article` the better match.
    pub fn resolve_tags<'a, I>(&self, tags: I, capability: Capability) -> Option<&'static TypeSchema>
    where
        I: IntoIterator<Item = &'a str>,
    {
        tags.into_iter().find_map(|tag| {
            let found = self.resolve(tag, capability);
            if found.is_none() {
                tracing::trace!("type tag `{tag}` has no {capability} registration");
            }
            found
        })
    }

    /// A new, empty object of the type registered under `tag`.
    pub fn instantiate(&self, tag: &str) -> Option<VocabObject> {
        self.by_name.get(tag).map(|schema| VocabObject::new(schema))
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.by_name.contains_key(tag)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Registered schemas in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &'static TypeSchema> + '_ {
        self.types.iter().copied()
    }
}
