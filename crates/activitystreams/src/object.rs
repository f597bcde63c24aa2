//! Extended object and link types.

use vocab_core::{Candidate, Capability, LiteralKind, PropertySchema, TypeSchema};

use crate::{
    base::{DATE_TIME, ENTITY, FLOAT, LINK, OBJECT, OBJECT_ONLY},
    VOCABULARY,
};

macro_rules! plain {
    ($ident:ident, $name:literal, $parent:expr, $capability:expr) => {
        pub static $ident: TypeSchema = TypeSchema {
            name: $name,
            vocabulary: VOCABULARY,
            capability: $capability,
            extends: Some(&$parent),
            without: &[],
            properties: &[],
        };
    };
}

plain!(ARTICLE, "Article", OBJECT, Capability::Object);
plain!(DOCUMENT, "Document", OBJECT, Capability::Object);
plain!(AUDIO, "Audio", DOCUMENT, Capability::Object);
plain!(IMAGE, "Image", DOCUMENT, Capability::Object);
plain!(VIDEO, "Video", DOCUMENT, Capability::Object);
plain!(PAGE, "Page", DOCUMENT, Capability::Object);
plain!(EVENT, "Event", OBJECT, Capability::Object);
plain!(NOTE, "Note", OBJECT, Capability::Object);
plain!(MENTION, "Mention", LINK, Capability::Link);

pub static PLACE: TypeSchema = TypeSchema {
    name: "Place",
    vocabulary: VOCABULARY,
    capability: Capability::Object,
    extends: Some(&OBJECT),
    without: &[],
    properties: &[
        PropertySchema::functional("accuracy", FLOAT),
        PropertySchema::functional("altitude", FLOAT),
        PropertySchema::functional("latitude", FLOAT),
        PropertySchema::functional("longitude", FLOAT),
        PropertySchema::functional("radius", FLOAT),
        PropertySchema::functional(
            "units",
            &[
                Candidate::Literal(LiteralKind::String),
                Candidate::Literal(LiteralKind::AnyUri),
            ],
        ),
    ],
};

pub static PROFILE: TypeSchema = TypeSchema {
    name: "Profile",
    vocabulary: VOCABULARY,
    capability: Capability::Object,
    extends: Some(&OBJECT),
    without: &[],
    properties: &[PropertySchema::functional("describes", OBJECT_ONLY)],
};

pub static RELATIONSHIP: TypeSchema = TypeSchema {
    name: "Relationship",
    vocabulary: VOCABULARY,
    capability: Capability::Object,
    extends: Some(&OBJECT),
    without: &[],
    properties: &[
        PropertySchema::non_functional("object", ENTITY),
        PropertySchema::non_functional("relationship", OBJECT_ONLY),
        PropertySchema::functional("subject", ENTITY),
    ],
};

pub static TOMBSTONE: TypeSchema = TypeSchema {
    name: "Tombstone",
    vocabulary: VOCABULARY,
    capability: Capability::Object,
    extends: Some(&OBJECT),
    without: &[],
    properties: &[
        PropertySchema::functional("deleted", DATE_TIME),
        PropertySchema::non_functional("formerType", OBJECT_ONLY),
    ],
};
