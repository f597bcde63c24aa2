//! Actor types, carrying the ActivityPub actor properties.

use vocab_core::{Capability, PropertySchema, TypeSchema};

use crate::{
    base::{OBJECT, OBJECT_ONLY, TEXT},
    VOCABULARY,
};

/// Shared by every actor type; the vocabulary has no common actor parent.
pub const ACTOR_PROPERTIES: &[PropertySchema] = &[
    PropertySchema::functional("endpoints", OBJECT_ONLY),
    PropertySchema::functional("followers", OBJECT_ONLY),
    PropertySchema::functional("following", OBJECT_ONLY),
    PropertySchema::functional("inbox", OBJECT_ONLY),
    PropertySchema::functional("liked", OBJECT_ONLY),
    PropertySchema::functional("outbox", OBJECT_ONLY),
    PropertySchema::functional("preferredUsername", TEXT).with_language_map(),
    PropertySchema::non_functional("streams", OBJECT_ONLY),
];

macro_rules! actor {
    ($ident:ident, $name:literal) => {
        pub static $ident: TypeSchema = TypeSchema {
            name: $name,
            vocabulary: VOCABULARY,
            capability: Capability::Object,
            extends: Some(&OBJECT),
            without: &[],
            properties: ACTOR_PROPERTIES,
        };
    };
}

actor!(APPLICATION, "Application");
actor!(GROUP, "Group");
actor!(ORGANIZATION, "Organization");
actor!(PERSON, "Person");
actor!(SERVICE, "Service");
