//! Declarative description of a vocabulary.
//!
//! A vocabulary is nothing but static tables of [`TypeSchema`] values. The
//! codec interprets them uniformly, so adding a type means adding a table
//! entry, never code.

use std::fmt;

use crate::literal::LiteralKind;

/// A structural contract a concrete type may satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Object,
    Link,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::Object => f.write_str("Object"),
            Capability::Link => f.write_str("Link"),
        }
    }
}

/// One alternative shape a property value may take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Candidate {
    /// An inlined entity of any registered Object-capable type.
    Object,
    /// An inlined entity of any registered Link-capable type.
    Link,
    Literal(LiteralKind),
}

impl Candidate {
    pub fn capability(&self) -> Option<Capability> {
        match self {
            Candidate::Object => Some(Capability::Object),
            Candidate::Link => Some(Capability::Link),
            Candidate::Literal(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PropertySchema {
    pub name: &'static str,
    /// Holds at most one value when set.
    pub functional: bool,
    /// Alternatives in the order they are tried.
    pub candidates: &'static [Candidate],
    /// Whether a `<name>Map` companion key is recognised.
    pub language_map: bool,
}

impl PropertySchema {
    pub const fn functional(name: &'static str, candidates: &'static [Candidate]) -> Self {
        Self {
            name,
            functional: true,
            candidates,
            language_map: false,
        }
    }

    pub const fn non_functional(name: &'static str, candidates: &'static [Candidate]) -> Self {
        Self {
            name,
            functional: false,
            candidates,
            language_map: false,
        }
    }

    pub const fn with_language_map(mut self) -> Self {
        self.language_map = true;
        self
    }

    pub fn accepts(&self, candidate: Candidate) -> bool {
        self.candidates.contains(&candidate)
    }

    pub fn literal_kinds(&self) -> impl Iterator<Item = LiteralKind> + '_ {
        self.candidates.iter().filter_map(|c| match c {
            Candidate::Literal(kind) => Some(*kind),
            _ => None,
        })
    }

    /// The companion key of the natural language map, if any.
    pub fn map_key(&self) -> Option<String> {
        self.language_map.then(|| format!("{}Map", self.name))
    }
}

/// A concrete vocabulary type.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct TypeSchema {
    /// Canonical name, as it appears in `type`.
    pub name: &'static str,
    /// Base of the expanded type IRI, e.g. `https://www.w3.org/ns/activitystreams`.
    pub vocabulary: &'static str,
    pub capability: Capability,
    pub extends: Option<&'static TypeSchema>,
    /// Inherited properties this type and its descendants do not carry.
    pub without: &'static [&'static str],
    /// Properties introduced by this type; inherited ones live on the parent.
    pub properties: &'static [PropertySchema],
}

impl TypeSchema {
    /// `<vocabulary>#<name>`
    pub fn iri(&self) -> String {
        format!("{}#{}", self.vocabulary, self.name)
    }

    /// Whether a type tag names this type, either bare or as an expanded IRI.
    pub fn matches_tag(&self, tag: &str) -> bool {
        if tag == self.name {
            return true;
        }

        tag.strip_prefix(self.vocabulary)
            .and_then(|rest| rest.strip_prefix('#'))
            .is_some_and(|rest| rest == self.name)
    }

    /// Every property, ancestors first. This is the serialization order.
    pub fn all_properties(&self) -> Vec<&'static PropertySchema> {
        let mut chain = Vec::new();
        let mut dropped: Vec<&str> = Vec::new();
        let mut current = Some(self);
        while let Some(schema) = current {
            let kept: Vec<_> = schema
                .properties
                .iter()
                .filter(|p| !dropped.contains(&p.name))
                .collect();
            chain.push(kept);
            dropped.extend(schema.without);
            current = schema.extends;
        }

        chain.into_iter().rev().flatten().collect()
    }

    /// Looks a property up by name through the inheritance chain.
    pub fn property(&self, name: &str) -> Option<&'static PropertySchema> {
        let mut current = Some(self);
        while let Some(schema) = current {
            if let Some(found) = schema.properties.iter().find(|p| p.name == name) {
                return Some(found);
            }
            if schema.without.contains(&name) {
                return None;
            }
            current = schema.extends;
        }
        None
    }

    /// Resolves `<name>Map` to the property owning that language map.
    pub fn language_map_property(&self, key: &str) -> Option<&'static PropertySchema> {
        let base = key.strip_suffix("Map")?;
        self.property(base).filter(|p| p.language_map)
    }

    /// Whether this type is `ancestor` or inherits from it.
    pub fn is_a(&self, ancestor: &TypeSchema) -> bool {
        let mut current = Some(self);
        while let Some(schema) = current {
            if std::ptr::eq(schema, ancestor) {
                return true;
            }
            current = schema.extends;
        }
        false
    }
}

impl fmt::Display for TypeSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
