//! The vocabulary object: identity, type tags, schema slots and extension bag.

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::{
    codec,
    errors::PropertyError,
    iri::Iri,
    langmap::LanguageMap,
    property::{FunctionalProperty, NonFunctionalProperty, Property},
    schema::{PropertySchema, TypeSchema},
};

/// An instance of one concrete vocabulary type.
///
/// Slots are created on first mutable access. A stored non-functional slot
/// is written even when empty, as `[]`. Keys the schema does not claim live in the unknown bag and are
/// written back untouched; `@context` is never kept.
#[derive(Debug, Clone, PartialEq)]
pub struct VocabObject {
    schema: &'static TypeSchema,
    id: Option<Iri>,
    types: Vec<String>,
    properties: BTreeMap<&'static str, Property>,
    language_maps: BTreeMap<&'static str, LanguageMap>,
    unknown: Map<String, Value>,
}

impl VocabObject {
    pub fn new(schema: &'static TypeSchema) -> Self {
        Self {
            schema,
            id: None,
            types: Vec::new(),
            properties: BTreeMap::new(),
            language_maps: BTreeMap::new(),
            unknown: Map::new(),
        }
    }

    pub fn schema(&self) -> &'static TypeSchema {
        self.schema
    }

    pub fn type_name(&self) -> &'static str {
        self.schema.name
    }

    pub fn type_iri(&self) -> String {
        self.schema.iri()
    }

    // === Identity ===

    pub fn id(&self) -> Option<&Iri> {
        self.id.as_ref()
    }

    pub fn set_id(&mut self, id: Iri) {
        self.id = Some(id);
    }

    pub fn clear_id(&mut self) -> Option<Iri> {
        self.id.take()
    }

    // === Type tags ===

    /// Tags as read or set. The canonical name is added on output if missing.
    pub fn types(&self) -> &[String] {
        &self.types
    }

    pub fn push_type(&mut self, tag: impl Into<String>) {
        self.types.push(tag.into());
    }

    pub fn set_types(&mut self, tags: Vec<String>) {
        self.types = tags;
    }

    pub fn has_type(&self, tag: &str) -> bool {
        self.types.iter().any(|t| t == tag) || self.schema.matches_tag(tag)
    }

    // === Property slots ===

    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.get(name)
    }

    /// Stored slots, in schema order.
    pub fn properties(&self) -> impl Iterator<Item = &Property> + '_ {
        self.schema
            .all_properties()
            .into_iter()
            .filter_map(|p| self.properties.get(p.name))
    }

    pub fn functional(&self, name: &str) -> Option<&FunctionalProperty> {
        match self.properties.get(name)? {
            Property::Functional(p) => Some(p),
            Property::NonFunctional(_) => None,
        }
    }

    /// The functional slot `name`, created empty if unset.
    pub fn functional_mut(&mut self, name: &str) -> Result<&mut FunctionalProperty, PropertyError> {
        let schema = self.lookup(name)?;
        if !schema.functional {
            return Err(PropertyError::NotFunctional(schema.name));
        }

        match self
            .properties
            .entry(schema.name)
            .or_insert_with(|| Property::new(schema))
        {
            Property::Functional(p) => Ok(p),
            Property::NonFunctional(_) => Err(PropertyError::NotFunctional(schema.name)),
        }
    }

    pub fn non_functional(&self, name: &str) -> Option<&NonFunctionalProperty> {
        match self.properties.get(name)? {
            Property::NonFunctional(p) => Some(p),
            Property::Functional(_) => None,
        }
    }

    /// The non-functional slot `name`, created empty if unset.
    pub fn non_functional_mut(&mut self, name: &str) -> Result<&mut NonFunctionalProperty, PropertyError> {
        let schema = self.lookup(name)?;
        if schema.functional {
            return Err(PropertyError::NotNonFunctional(schema.name));
        }

        match self
            .properties
            .entry(schema.name)
            .or_insert_with(|| Property::new(schema))
        {
            Property::NonFunctional(p) => Ok(p),
            Property::Functional(_) => Err(PropertyError::NotNonFunctional(schema.name)),
        }
    }

    pub fn remove_property(&mut self, name: &str) -> Option<Property> {
        self.properties.remove(name)
    }

    // === Natural language maps ===

    pub fn language_map(&self, name: &str) -> Option<&LanguageMap> {
        self.language_maps.get(name)
    }

    /// The language map of `name`, created empty (and therefore emitted) if unset.
    pub fn language_map_mut(&mut self, name: &str) -> Result<&mut LanguageMap, PropertyError> {
        let schema = self.lookup(name)?;
        if !schema.language_map {
            return Err(PropertyError::NoLanguageMap(schema.name));
        }

        Ok(self.language_maps.entry(schema.name).or_default())
    }

    pub fn clear_language_map(&mut self, name: &str) -> Option<LanguageMap> {
        self.language_maps.remove(name)
    }

    // === Unknown bag ===

    pub fn unknown(&self) -> &Map<String, Value> {
        &self.unknown
    }

    /// Stores an extension value. Keys the object routes elsewhere are refused.
    pub fn insert_unknown(&mut self, key: impl Into<String>, value: Value) -> Result<Option<Value>, PropertyError> {
        let key = key.into();
        if self.is_reserved_key(&key) {
            return Err(PropertyError::ReservedKey(key));
        }

        Ok(self.unknown.insert(key, value))
    }

    pub fn remove_unknown(&mut self, key: &str) -> Option<Value> {
        self.unknown.remove(key)
    }

    /// Whether `key` is claimed by identity, type tags, `@context`, a schema
    /// slot or a language map companion.
    pub fn is_reserved_key(&self, key: &str) -> bool {
        matches!(key, "id" | "type" | "@context")
            || self.schema.property(key).is_some()
            || self.schema.language_map_property(key).is_some()
    }

    // === Codec plumbing ===

    pub(crate) fn put_property(&mut self, property: Property) {
        self.properties.insert(property.schema().name, property);
    }

    pub(crate) fn put_language_map(&mut self, schema: &'static PropertySchema, map: LanguageMap) {
        self.language_maps.insert(schema.name, map);
    }

    pub(crate) fn put_unknown(&mut self, key: String, value: Value) {
        self.unknown.insert(key, value);
    }

    fn lookup(&self, name: &str) -> Result<&'static PropertySchema, PropertyError> {
        self.schema
            .property(name)
            .ok_or_else(|| PropertyError::NoSuchProperty {
                type_name: self.schema.name,
                property: name.to_owned(),
            })
    }
}

impl Serialize for VocabObject {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        codec::to_value(self)
            .map_err(<S::Error as serde::ser::Error>::custom)?
            .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{
        literal::LiteralKind,
        property::PropertyValue,
        testing::{LINK, NOTE, OBJECT},
    };

    use super::*;

    #[test]
    fn test_new_object_is_empty() {
        let note = VocabObject::new(&NOTE);
        assert_eq!(note.type_name(), "Note");
        assert_eq!(note.type_iri(), "https://www.w3.org/ns/activitystreams#Note");
        assert!(note.id().is_none());
        assert!(note.types().is_empty());
        assert_eq!(note.properties().count(), 0);
        assert!(note.unknown().is_empty());
    }

    #[test]
    fn test_identity() {
        let mut note = VocabObject::new(&NOTE);
        note.set_id(Iri::parse("https://example.com/notes/1").unwrap());
        assert_eq!(note.id().map(Iri::as_str), Some("https://example.com/notes/1"));
        assert!(note.clear_id().is_some());
        assert!(note.id().is_none());
    }

    #[test]
    fn test_has_type_includes_the_schema_name() {
        let mut note = VocabObject::new(&NOTE);
        assert!(note.has_type("Note"));
        note.push_type("ex:Memo");
        assert!(note.has_type("ex:Memo"));
        assert!(!note.has_type("Article"));
    }

    #[test]
    fn test_slot_accessors_check_arity() {
        let mut note = VocabObject::new(&NOTE);
        assert_eq!(
            note.functional_mut("content").unwrap_err(),
            PropertyError::NotFunctional("content")
        );
        assert_eq!(
            note.non_functional_mut("published").unwrap_err(),
            PropertyError::NotNonFunctional("published")
        );
        assert_eq!(
            note.functional_mut("href").unwrap_err(),
            PropertyError::NoSuchProperty {
                type_name: "Note",
                property: "href".to_owned()
            }
        );
    }

    #[test]
    fn test_slots_are_created_on_demand() {
        let mut note = VocabObject::new(&NOTE);
        assert!(note.functional("wordCount").is_none());

        note.functional_mut("wordCount").unwrap().set_literal(12u64).unwrap();
        assert!(note
            .functional("wordCount")
            .unwrap()
            .is_literal_kind(LiteralKind::NonNegativeInteger));
        assert!(note.non_functional("wordCount").is_none());

        assert!(note.remove_property("wordCount").is_some());
        assert!(note.property("wordCount").is_none());
    }

    #[test]
    fn test_properties_iterate_in_schema_order() {
        let mut note = VocabObject::new(&NOTE);
        note.functional_mut("wordCount").unwrap().set_literal(3u64).unwrap();
        note.non_functional_mut("content").unwrap().push_literal("hi").unwrap();
        note.non_functional_mut("attachment")
            .unwrap()
            .push_object(VocabObject::new(&OBJECT))
            .unwrap();

        let names: Vec<_> = note.properties().map(|p| p.schema().name).collect();
        assert_eq!(names, vec!["attachment", "content", "wordCount"]);
    }

    #[test]
    fn test_language_maps() {
        let mut note = VocabObject::new(&NOTE);
        note.language_map_mut("content").unwrap().insert("en", "Hello");
        assert_eq!(note.language_map("content").and_then(|m| m.get("en")), Some("Hello"));

        assert_eq!(
            note.language_map_mut("published").unwrap_err(),
            PropertyError::NoLanguageMap("published")
        );
        assert!(note.clear_language_map("content").is_some());
        assert!(note.language_map("content").is_none());
    }

    #[test]
    fn test_unknown_bag_refuses_claimed_keys() {
        let mut note = VocabObject::new(&NOTE);
        assert_eq!(note.insert_unknown("xCustomField", json!(42)), Ok(None));
        assert_eq!(note.unknown().get("xCustomField"), Some(&json!(42)));

        for key in ["id", "type", "@context", "content", "contentMap", "wordCount"] {
            assert_eq!(
                note.insert_unknown(key, json!(1)),
                Err(PropertyError::ReservedKey(key.to_owned()))
            );
        }

        // `publishedMap` is not a companion key: published has no language map.
        assert!(note.insert_unknown("publishedMap", json!({})).is_ok());
        assert_eq!(note.remove_unknown("xCustomField"), Some(json!(42)));
    }

    #[test]
    fn test_serde_serialize_goes_through_the_codec() {
        let mut link = VocabObject::new(&LINK);
        link.functional_mut("href")
            .unwrap()
            .set(PropertyValue::Iri(Iri::parse("https://example.com/").unwrap()))
            .unwrap();

        let value = serde_json::to_value(&link).unwrap();
        assert_eq!(value, json!({"type": "Link", "href": "https://example.com/"}));
    }
}
