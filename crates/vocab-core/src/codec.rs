//! Whole-object conversion between [`VocabObject`] and JSON trees.
//!
//! Deserialization routes each input key to the identity, the type tags, a
//! schema slot, a language map companion or the unknown bag. A slot tries its
//! alternatives in declared order: inlined entities through the registry,
//! then literal kinds, then an IRI, and finally keeps the raw value. The only
//! hard failures are structural: a bad `id`, a bad top-level `type`, or
//! nesting deeper than the configured bound.

use serde_json::{Map, Value};

use crate::{
    errors::{DeserializeError, IriError, SerializeError},
    iri::Iri,
    langmap::LanguageMap,
    literal::json_type,
    object::VocabObject,
    property::{FunctionalProperty, NonFunctionalProperty, Property, PropertyValue},
    registry::TypeRegistry,
    schema::{Capability, PropertySchema, TypeSchema},
};

/// Nesting bound used when none is configured.
pub const DEFAULT_MAX_DEPTH: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    /// Maximum number of nested objects, the outermost included.
    pub max_depth: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Serializes with the default depth bound. No registry is needed to encode.
pub fn to_value(object: &VocabObject) -> Result<Value, SerializeError> {
    Encoder {
        max_depth: DEFAULT_MAX_DEPTH,
    }
    .encode_object(object, 1)
}

#[derive(Debug, Clone, Copy)]
pub struct Codec<'r> {
    registry: &'r TypeRegistry,
    config: CodecConfig,
}

impl<'r> Codec<'r> {
    pub fn new(registry: &'r TypeRegistry) -> Self {
        Self::with_config(registry, CodecConfig::default())
    }

    pub fn with_config(registry: &'r TypeRegistry, config: CodecConfig) -> Self {
        Self { registry, config }
    }

    pub fn registry(&self) -> &'r TypeRegistry {
        self.registry
    }

    pub fn config(&self) -> CodecConfig {
        self.config
    }

    /// Decodes a top-level document, picking its type from the `type` tags.
    ///
    /// Tags are tried in input order, Object-capable registrations first,
    /// then Link-capable ones.
    pub fn deserialize(&self, tree: &Value) -> Result<VocabObject, DeserializeError> {
        let map = tree
            .as_object()
            .ok_or_else(|| DeserializeError::NotAnObject(json_type(tree)))?;
        let raw_type = map.get("type").ok_or(DeserializeError::MissingType)?;
        let tags = type_tags(raw_type).ok_or(DeserializeError::InvalidTypeTag)?;

        let schema = self
            .registry
            .resolve_tags(tags.iter().copied(), Capability::Object)
            .or_else(|| self.registry.resolve_tags(tags.iter().copied(), Capability::Link))
            .ok_or_else(|| DeserializeError::UnresolvedType(tags.iter().map(|t| t.to_string()).collect()))?;

        tracing::debug!("decoding document as {}", schema.name);
        self.decode_object(schema, map, 1)
    }

    /// Decodes a document as a known type, whatever its tags say.
    pub fn deserialize_as(&self, schema: &'static TypeSchema, tree: &Value) -> Result<VocabObject, DeserializeError> {
        let map = tree
            .as_object()
            .ok_or_else(|| DeserializeError::NotAnObject(json_type(tree)))?;
        self.decode_object(schema, map, 1)
    }

    /// Decodes a single value as `property` would.
    pub fn deserialize_value(
        &self,
        property: &'static PropertySchema,
        raw: &Value,
    ) -> Result<PropertyValue, DeserializeError> {
        self.decode_value(property, raw, 1)
    }

    pub fn deserialize_str(&self, input: &str) -> Result<VocabObject, DeserializeError> {
        let tree: Value = serde_json::from_str(input).map_err(|e| DeserializeError::Json(e.to_string()))?;
        self.deserialize(&tree)
    }

    pub fn serialize(&self, object: &VocabObject) -> Result<Value, SerializeError> {
        self.encoder().encode_object(object, 1)
    }

    pub fn serialize_to_string(&self, object: &VocabObject) -> Result<String, SerializeError> {
        let tree = self.serialize(object)?;
        serde_json::to_string(&tree).map_err(|e| SerializeError::Json(e.to_string()))
    }

    fn encoder(&self) -> Encoder {
        Encoder {
            max_depth: self.config.max_depth,
        }
    }

    fn decode_object(
        &self,
        schema: &'static TypeSchema,
        map: &Map<String, Value>,
        depth: usize,
    ) -> Result<VocabObject, DeserializeError> {
        if depth > self.config.max_depth {
            tracing::warn!("rejecting {} nested beyond depth {}", schema.name, self.config.max_depth);
            return Err(DeserializeError::DepthExceeded(self.config.max_depth));
        }

        let mut object = VocabObject::new(schema);

        for (key, raw) in map {
            match key.as_str() {
                "@context" => continue,
                "id" => object.set_id(decode_id(raw)?),
                "type" => {
                    let tags = type_tags(raw).ok_or(DeserializeError::InvalidTypeTag)?;
                    object.set_types(tags.into_iter().map(str::to_owned).collect());
                }
                _ => {
                    if let Some(property) = schema.property(key) {
                        let slot = self
                            .decode_property(property, raw, depth)
                            .map_err(|source| DeserializeError::Property {
                                type_name: schema.name,
                                property: property.name,
                                source: Box::new(source),
                            })?;
                        object.put_property(slot);
                    } else if let Some(property) = schema.language_map_property(key) {
                        object.put_language_map(property, LanguageMap::from_json(raw));
                    } else {
                        object.put_unknown(key.clone(), raw.clone());
                    }
                }
            }
        }

        Ok(object)
    }

    fn decode_property(
        &self,
        property: &'static PropertySchema,
        raw: &Value,
        depth: usize,
    ) -> Result<Property, DeserializeError> {
        if property.functional {
            let value = self.decode_value(property, raw, depth)?;
            return Ok(Property::Functional(FunctionalProperty::with_value(property, value)));
        }

        // A bare value is a one-element list.
        let values = match raw {
            Value::Array(items) => items
                .iter()
                .map(|item| self.decode_value(property, item, depth))
                .collect::<Result<Vec<_>, _>>()?,
            single => vec![self.decode_value(property, single, depth)?],
        };

        Ok(Property::NonFunctional(NonFunctionalProperty::with_values(property, values)))
    }

    fn decode_value(
        &self,
        property: &'static PropertySchema,
        raw: &Value,
        depth: usize,
    ) -> Result<PropertyValue, DeserializeError> {
        if let Value::Object(map) = raw {
            if let Some(tags) = map.get("type").and_then(type_tags) {
                for capability in property.candidates.iter().filter_map(|c| c.capability()) {
                    let Some(schema) = self.registry.resolve_tags(tags.iter().copied(), capability) else {
                        continue;
                    };

                    let nested = Box::new(self.decode_object(schema, map, depth + 1)?);
                    return Ok(match capability {
                        Capability::Object => PropertyValue::Object(nested),
                        Capability::Link => PropertyValue::Link(nested),
                    });
                }

                tracing::debug!(
                    "no registered type for {:?} under `{}`, keeping the value as is",
                    tags,
                    property.name
                );
            }
        }

        for kind in property.literal_kinds() {
            match kind.parse(raw) {
                Ok(literal) => return Ok(PropertyValue::Literal(literal)),
                Err(err) => tracing::trace!("`{}`: {err}", property.name),
            }
        }

        if let Some(iri) = raw.as_str().and_then(|s| Iri::parse(s).ok()) {
            return Ok(PropertyValue::Iri(iri));
        }

        Ok(PropertyValue::Unknown(raw.clone()))
    }
}

struct Encoder {
    max_depth: usize,
}

impl Encoder {
    fn encode_object(&self, object: &VocabObject, depth: usize) -> Result<Value, SerializeError> {
        let schema = object.schema();
        if depth > self.max_depth {
            tracing::warn!("refusing to encode {} nested beyond depth {}", schema.name, self.max_depth);
            return Err(SerializeError::DepthExceeded(self.max_depth));
        }

        let mut out = object.unknown().clone();

        if let Some(id) = object.id() {
            out.insert("id".to_owned(), Value::String(id.as_str().to_owned()));
        }

        let mut tags: Vec<Value> = object.types().iter().cloned().map(Value::String).collect();
        if !object.types().iter().any(|t| schema.matches_tag(t)) {
            tags.push(Value::String(schema.name.to_owned()));
        }
        out.insert("type".to_owned(), collapse(tags));

        for property in schema.all_properties() {
            if let Some(slot) = object.property(property.name) {
                let encoded = self
                    .encode_property(slot, depth)
                    .map_err(|source| SerializeError::Property {
                        type_name: schema.name,
                        property: property.name,
                        source: Box::new(source),
                    })?;
                if let Some(value) = encoded {
                    out.insert(property.name.to_owned(), value);
                }
            }

            if let (Some(map), Some(key)) = (object.language_map(property.name), property.map_key()) {
                out.insert(key, map.to_json());
            }
        }

        Ok(Value::Object(out))
    }

    /// `None` for an empty slot: nothing is emitted, not even `null`.
    fn encode_property(&self, property: &Property, depth: usize) -> Result<Option<Value>, SerializeError> {
        match property {
            Property::Functional(p) => p.get().map(|v| self.encode_value(v, depth)).transpose(),
            // A stored slot is present even when empty and writes `[]`.
            Property::NonFunctional(p) => {
                let values = p
                    .iter()
                    .map(|v| self.encode_value(v, depth))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Some(collapse(values)))
            }
        }
    }

    fn encode_value(&self, value: &PropertyValue, depth: usize) -> Result<Value, SerializeError> {
        match value {
            PropertyValue::Object(object) | PropertyValue::Link(object) => self.encode_object(object, depth + 1),
            PropertyValue::Iri(iri) => Ok(Value::String(iri.as_str().to_owned())),
            PropertyValue::Literal(literal) => literal.encode(),
            PropertyValue::Unknown(raw) => Ok(raw.clone()),
        }
    }
}

/// One element stays bare, anything else is an array.
fn collapse(mut values: Vec<Value>) -> Value {
    if values.len() == 1 {
        values.remove(0)
    } else {
        Value::Array(values)
    }
}

/// A string or an array made only of strings.
fn type_tags(raw: &Value) -> Option<Vec<&str>> {
    match raw {
        Value::String(tag) => Some(vec![tag.as_str()]),
        Value::Array(items) => items.iter().map(Value::as_str).collect(),
        _ => None,
    }
}

fn decode_id(raw: &Value) -> Result<Iri, DeserializeError> {
    let id = raw
        .as_str()
        .ok_or_else(|| DeserializeError::InvalidId(IriError::NotAbsolute(raw.to_string())))?;
    Iri::parse(id).map_err(DeserializeError::InvalidId)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{
        literal::{Literal, LiteralKind},
        property::ValueKind,
        testing::{fixture_registry, COLLECTION, NOTE, OBJECT, PROFILE},
    };

    use super::*;

    fn canon(value: &Value) -> String {
        json_canon::to_string(value).unwrap()
    }

    #[test]
    fn test_round_trip_of_schema_known_properties() {
        let registry = fixture_registry();
        let codec = Codec::new(&registry);

        let mut note = VocabObject::new(&NOTE);
        note.set_id(Iri::parse("https://example.com/notes/1").unwrap());
        note.non_functional_mut("content").unwrap().push_literal("Hello").unwrap();
        note.functional_mut("published")
            .unwrap()
            .set_literal(Literal::from(
                chrono::DateTime::parse_from_rfc3339("2024-05-01T10:00:00Z").unwrap(),
            ))
            .unwrap();
        note.functional_mut("wordCount").unwrap().set_literal(1u64).unwrap();
        note.non_functional_mut("tag")
            .unwrap()
            .push_iri(Iri::parse("https://example.com/tags/a").unwrap());
        note.non_functional_mut("tag")
            .unwrap()
            .push_iri(Iri::parse("https://example.com/tags/b").unwrap());

        let tree = codec.serialize(&note).unwrap();
        let mut decoded = codec.deserialize(&tree).unwrap();

        // Output always carries the canonical tag; the source object had none.
        assert_eq!(decoded.types(), ["Note"]);
        decoded.set_types(Vec::new());
        assert_eq!(decoded, note);
    }

    #[test]
    fn test_unknown_keys_survive() {
        let registry = fixture_registry();
        let codec = Codec::new(&registry);
        let input = json!({
            "type": "Note",
            "id": "https://example.com/notes/1",
            "xCustomField": 42,
            "nested": {"a": [1, 2, {"b": null}]}
        });

        let note = codec.deserialize(&input).unwrap();
        assert_eq!(note.unknown().get("xCustomField"), Some(&json!(42)));
        assert_eq!(canon(&codec.serialize(&note).unwrap()), canon(&input));
    }

    #[test]
    fn test_schema_keys_never_land_in_the_unknown_bag() {
        let registry = fixture_registry();
        let codec = Codec::new(&registry);
        let note = codec
            .deserialize(&json!({
                "type": "Note",
                "content": "hi",
                "contentMap": {"en": "hi"},
                "published": "not a date"
            }))
            .unwrap();

        assert!(note.unknown().is_empty());
        assert!(note.functional("published").unwrap().is_unknown());
    }

    #[test]
    fn test_context_is_dropped() {
        let registry = fixture_registry();
        let codec = Codec::new(&registry);
        let note = codec
            .deserialize(&json!({
                "@context": "https://www.w3.org/ns/activitystreams",
                "type": "Note"
            }))
            .unwrap();

        assert!(note.unknown().get("@context").is_none());
        assert_eq!(codec.serialize(&note).unwrap(), json!({"type": "Note"}));
    }

    #[test]
    fn test_default_type_tag() {
        let registry = fixture_registry();
        let codec = Codec::new(&registry);
        let profile = VocabObject::new(&PROFILE);
        assert_eq!(codec.serialize(&profile).unwrap(), json!({"type": "Profile"}));
    }

    #[test]
    fn test_canonical_tag_appended_after_explicit_tags() {
        let registry = fixture_registry();
        let codec = Codec::new(&registry);
        let mut note = VocabObject::new(&NOTE);
        note.push_type("ex:Memo");
        assert_eq!(codec.serialize(&note).unwrap()["type"], json!(["ex:Memo", "Note"]));

        let mut expanded = VocabObject::new(&NOTE);
        expanded.push_type("https://www.w3.org/ns/activitystreams#Note");
        assert_eq!(
            codec.serialize(&expanded).unwrap()["type"],
            json!("https://www.w3.org/ns/activitystreams#Note")
        );
    }

    #[test]
    fn test_language_map_is_independent_of_the_plain_property() {
        let registry = fixture_registry();
        let codec = Codec::new(&registry);
        let mut note = VocabObject::new(&NOTE);
        note.non_functional_mut("content").unwrap().push_literal("Hello").unwrap();
        note.language_map_mut("content").unwrap().insert("fr", "Bonjour");

        let tree = codec.serialize(&note).unwrap();
        assert_eq!(tree["content"], json!("Hello"));
        assert_eq!(tree["contentMap"], json!({"fr": "Bonjour"}));

        let decoded = codec.deserialize(&tree).unwrap();
        assert_eq!(decoded.non_functional("content").map(|p| p.len()), Some(1));
        assert_eq!(decoded.language_map("content").and_then(|m| m.get("fr")), Some("Bonjour"));
    }

    #[test]
    fn test_empty_language_map_is_emitted() {
        let registry = fixture_registry();
        let codec = Codec::new(&registry);
        let mut note = VocabObject::new(&NOTE);
        note.language_map_mut("name").unwrap();

        assert_eq!(codec.serialize(&note).unwrap(), json!({"type": "Note", "nameMap": {}}));
        assert!(!codec.serialize(&VocabObject::new(&NOTE)).unwrap().as_object().unwrap().contains_key("nameMap"));
    }

    #[test]
    fn test_non_string_language_entries_are_dropped() {
        let registry = fixture_registry();
        let codec = Codec::new(&registry);
        let note = codec
            .deserialize(&json!({"type": "Note", "nameMap": {"en": "A", "de": 1}}))
            .unwrap();
        assert_eq!(
            codec.serialize(&note).unwrap(),
            json!({"type": "Note", "nameMap": {"en": "A"}})
        );
    }

    #[test]
    fn test_plain_string_wins_over_uri() {
        let registry = fixture_registry();
        let codec = Codec::new(&registry);
        let summary = OBJECT.property("summary").unwrap();

        let value = codec.deserialize_value(summary, &json!("http://example.com")).unwrap();
        assert!(value.is_literal_kind(LiteralKind::String));
        assert!(!value.is_literal_kind(LiteralKind::AnyUri));
        assert!(!value.is_iri());
    }

    #[test]
    fn test_iri_is_tried_after_literal_kinds() {
        let registry = fixture_registry();
        let codec = Codec::new(&registry);
        let published = NOTE.property("published").unwrap();

        let value = codec.deserialize_value(published, &json!("https://example.com/when")).unwrap();
        assert!(value.is_iri());

        let value = codec.deserialize_value(published, &json!("2024-05-01T10:00:00Z")).unwrap();
        assert!(value.is_literal_kind(LiteralKind::DateTime));

        let value = codec.deserialize_value(published, &json!("soon")).unwrap();
        assert_eq!(value, PropertyValue::Unknown(json!("soon")));
    }

    #[test]
    fn test_unregistered_type_falls_back_to_unknown() {
        let registry = fixture_registry();
        let codec = Codec::new(&registry);
        let raw = json!({"type": "TotallyUnregisteredType", "foo": 1});

        let mut note = codec
            .deserialize(&json!({"type": "Note", "attachment": raw.clone()}))
            .unwrap();
        let attachment = note.non_functional("attachment").unwrap().get(0).unwrap();
        assert!(!attachment.is_object());
        assert!(!attachment.is_link());
        assert_eq!(attachment.as_unknown(), Some(&raw));

        let tree = codec.serialize(&note).unwrap();
        assert_eq!(tree["attachment"], raw);

        note.remove_property("attachment");
        assert_eq!(codec.serialize(&note).unwrap(), json!({"type": "Note"}));
    }

    #[test]
    fn test_top_level_unregistered_type_is_an_error() {
        let registry = fixture_registry();
        let codec = Codec::new(&registry);
        assert_eq!(
            codec.deserialize(&json!({"type": "TotallyUnregisteredType", "foo": 1})),
            Err(DeserializeError::UnresolvedType(vec!["TotallyUnregisteredType".to_owned()]))
        );
        assert_eq!(codec.deserialize(&json!({"foo": 1})), Err(DeserializeError::MissingType));
        assert_eq!(codec.deserialize(&json!([1])), Err(DeserializeError::NotAnObject("array")));
        assert_eq!(
            codec.deserialize(&json!({"type": ["Note", 3]})),
            Err(DeserializeError::InvalidTypeTag)
        );
    }

    #[test]
    fn test_multi_tag_resolution_uses_input_order() {
        let registry = fixture_registry();
        let codec = Codec::new(&registry);

        let note = codec
            .deserialize(&json!({"type": ["UnregisteredKind", "Note"]}))
            .unwrap();
        assert_eq!(note.type_name(), "Note");
        assert_eq!(note.types(), ["UnregisteredKind", "Note"]);

        let object = codec.deserialize(&json!({"type": ["Object", "Note"]})).unwrap();
        assert_eq!(object.type_name(), "Object");
    }

    #[test]
    fn test_link_capable_fallback() {
        let registry = fixture_registry();
        let codec = Codec::new(&registry);
        let note = codec
            .deserialize(&json!({
                "type": "Note",
                "tag": {"type": "Mention", "href": "https://example.com/users/bob"},
                "replies": {"type": "Mention", "href": "https://example.com/users/bob"}
            }))
            .unwrap();

        assert!(note.non_functional("tag").unwrap().get(0).unwrap().is_link());
        // `replies` only takes Object-capable entities.
        assert!(note.functional("replies").unwrap().is_unknown());

        let mention = codec
            .deserialize(&json!({"type": "Mention", "href": "https://example.com/users/bob"}))
            .unwrap();
        assert_eq!(mention.type_name(), "Mention");
    }

    #[test]
    fn test_one_element_arrays_collapse() {
        let registry = fixture_registry();
        let codec = Codec::new(&registry);
        let note = codec
            .deserialize(&json!({"type": "Note", "tag": ["https://example.com/t"]}))
            .unwrap();
        assert_eq!(note.non_functional("tag").unwrap().len(), 1);
        assert_eq!(codec.serialize(&note).unwrap()["tag"], json!("https://example.com/t"));

        let note = codec
            .deserialize(&json!({"type": "Note", "tag": ["https://a.example", "https://b.example"]}))
            .unwrap();
        assert_eq!(
            codec.serialize(&note).unwrap()["tag"],
            json!(["https://a.example", "https://b.example"])
        );
    }

    #[test]
    fn test_empty_slots() {
        let registry = fixture_registry();
        let codec = Codec::new(&registry);
        let mut note = VocabObject::new(&NOTE);
        note.functional_mut("published").unwrap();
        assert_eq!(codec.serialize(&note).unwrap(), json!({"type": "Note"}));

        note.non_functional_mut("tag").unwrap();
        assert_eq!(codec.serialize(&note).unwrap(), json!({"type": "Note", "tag": []}));

        note.remove_property("tag");
        assert_eq!(codec.serialize(&note).unwrap(), json!({"type": "Note"}));
    }

    #[test]
    fn test_empty_array_under_a_schema_key_survives() {
        let registry = fixture_registry();
        let codec = Codec::new(&registry);
        let input = json!({"type": "Note", "tag": [], "xExt": []});

        let note = codec.deserialize(&input).unwrap();
        assert!(note.non_functional("tag").unwrap().is_empty());
        assert_eq!(note.unknown().get("xExt"), Some(&json!([])));
        assert_eq!(codec.serialize(&note).unwrap(), input);
    }

    #[test]
    fn test_functional_array_is_kept_verbatim() {
        let registry = fixture_registry();
        let codec = Codec::new(&registry);
        let note = codec
            .deserialize(&json!({"type": "Note", "published": ["2024-05-01T10:00:00Z"]}))
            .unwrap();
        assert_eq!(note.functional("published").unwrap().kind(), Some(ValueKind::Unknown));
    }

    #[test]
    fn test_nested_objects_are_decoded_recursively() {
        let registry = fixture_registry();
        let codec = Codec::new(&registry);
        let input = json!({
            "type": "Collection",
            "totalItems": 2,
            "items": [
                {"type": "Note", "content": "one", "wordCount": 1},
                {"type": "Profile", "describes": {"type": "Object", "id": "https://example.com/o"}}
            ]
        });

        let collection = codec.deserialize(&input).unwrap();
        assert!(std::ptr::eq(collection.schema(), &COLLECTION));
        let items = collection.non_functional("items").unwrap();
        let profile = items.get(1).and_then(PropertyValue::as_object).unwrap();
        let described = profile.functional("describes").and_then(|p| p.get()).and_then(PropertyValue::as_object);
        assert!(described.is_some_and(|o| std::ptr::eq(o.schema(), &OBJECT)));

        assert_eq!(canon(&codec.serialize(&collection).unwrap()), canon(&input));
    }

    #[test]
    fn test_nested_failure_aborts_the_whole_call() {
        let registry = fixture_registry();
        let codec = Codec::new(&registry);
        let err = codec
            .deserialize(&json!({
                "type": "Collection",
                "items": [
                    {"type": "Note"},
                    {"type": "Note", "id": "not an iri"}
                ]
            }))
            .unwrap_err();

        assert!(matches!(
            err,
            DeserializeError::Property {
                type_name: "Collection",
                property: "items",
                ..
            }
        ));
        assert!(matches!(err.root_cause(), DeserializeError::InvalidId(_)));
    }

    #[test]
    fn test_depth_guard() {
        let registry = fixture_registry();
        let codec = Codec::with_config(&registry, CodecConfig { max_depth: 3 });

        let mut tree = json!({"type": "Note"});
        for _ in 0..3 {
            tree = json!({"type": "Note", "attachment": tree});
        }

        let err = codec.deserialize(&tree).unwrap_err();
        assert_eq!(err.root_cause(), &DeserializeError::DepthExceeded(3));

        let shallow = json!({"type": "Note", "attachment": {"type": "Note", "attachment": {"type": "Note"}}});
        let decoded = codec.deserialize(&shallow).unwrap();

        let tight = Codec::with_config(&registry, CodecConfig { max_depth: 2 });
        let err = tight.serialize(&decoded).unwrap_err();
        assert_eq!(err.root_cause(), &SerializeError::DepthExceeded(2));
    }

    #[test]
    fn test_lang_string_value_objects() {
        let registry = fixture_registry();
        let codec = Codec::new(&registry);
        let note = codec
            .deserialize(&json!({
                "type": "Note",
                "content": [{"@value": "Hallo", "@language": "de"}, {"unrelated": true}]
            }))
            .unwrap();

        let content = note.non_functional("content").unwrap();
        assert!(content.get(0).unwrap().is_literal_kind(LiteralKind::LangString));
        assert!(content.get(1).unwrap().is_unknown());
    }

    #[test]
    fn test_non_finite_float_fails_serialization() {
        let registry = fixture_registry();
        let codec = Codec::new(&registry);
        let mut place = registry.instantiate("Place").unwrap();
        place.functional_mut("latitude").unwrap().set_literal(f64::NAN).unwrap();

        let err = codec.serialize(&place).unwrap_err();
        assert!(matches!(err.root_cause(), SerializeError::NonFiniteFloat(_)));
    }

    #[test]
    fn test_string_helpers() {
        let registry = fixture_registry();
        let codec = Codec::new(&registry);
        let note = codec.deserialize_str(r#"{"type":"Note","content":"hi"}"#).unwrap();
        assert_eq!(
            codec.serialize_to_string(&note).unwrap(),
            r#"{"type":"Note","content":"hi"}"#
        );
        assert!(matches!(codec.deserialize_str("{"), Err(DeserializeError::Json(_))));
    }

    #[test]
    fn test_invalid_id_is_an_error() {
        let registry = fixture_registry();
        let codec = Codec::new(&registry);
        assert!(matches!(
            codec.deserialize(&json!({"type": "Note", "id": 5})),
            Err(DeserializeError::InvalidId(_))
        ));
    }
}
