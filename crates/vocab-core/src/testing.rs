//! A small vocabulary shaped like ActivityStreams, for unit tests.

use crate::{
    literal::LiteralKind,
    registry::TypeRegistry,
    schema::{Candidate, Capability, PropertySchema, TypeSchema},
};

const VOCABULARY: &str = "https://www.w3.org/ns/activitystreams";

const ENTITY: &[Candidate] = &[Candidate::Object, Candidate::Link];
const OBJECT_ONLY: &[Candidate] = &[Candidate::Object];
const TEXT: &[Candidate] = &[
    Candidate::Literal(LiteralKind::String),
    Candidate::Literal(LiteralKind::LangString),
];

pub static OBJECT: TypeSchema = TypeSchema {
    name: "Object",
    vocabulary: VOCABULARY,
    capability: Capability::Object,
    extends: None,
    without: &[],
    properties: &[
        PropertySchema::non_functional("attachment", ENTITY),
        PropertySchema::non_functional("attributedTo", ENTITY),
        PropertySchema::non_functional("content", TEXT).with_language_map(),
        PropertySchema::functional("duration", &[Candidate::Literal(LiteralKind::Duration)]),
        PropertySchema::non_functional("inReplyTo", ENTITY),
        PropertySchema::functional("mediaType", &[Candidate::Literal(LiteralKind::MimeType)]),
        PropertySchema::non_functional("name", TEXT).with_language_map(),
        PropertySchema::functional("published", &[Candidate::Literal(LiteralKind::DateTime)]),
        PropertySchema::functional("replies", OBJECT_ONLY),
        PropertySchema::functional("sensitive", &[Candidate::Literal(LiteralKind::Boolean)]),
        PropertySchema::non_functional(
            "summary",
            &[
                Candidate::Literal(LiteralKind::String),
                Candidate::Literal(LiteralKind::LangString),
                Candidate::Literal(LiteralKind::AnyUri),
            ],
        )
        .with_language_map(),
        PropertySchema::non_functional("tag", ENTITY),
        PropertySchema::non_functional("url", &[Candidate::Literal(LiteralKind::AnyUri), Candidate::Link]),
    ],
};

pub static NOTE: TypeSchema = TypeSchema {
    name: "Note",
    vocabulary: VOCABULARY,
    capability: Capability::Object,
    extends: Some(&OBJECT),
    without: &[],
    properties: &[PropertySchema::functional(
        "wordCount",
        &[Candidate::Literal(LiteralKind::NonNegativeInteger)],
    )],
};

pub static PLACE: TypeSchema = TypeSchema {
    name: "Place",
    vocabulary: VOCABULARY,
    capability: Capability::Object,
    extends: Some(&OBJECT),
    without: &[],
    properties: &[
        PropertySchema::functional("latitude", &[Candidate::Literal(LiteralKind::Float)]),
        PropertySchema::functional("longitude", &[Candidate::Literal(LiteralKind::Float)]),
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

pub static COLLECTION: TypeSchema = TypeSchema {
    name: "Collection",
    vocabulary: VOCABULARY,
    capability: Capability::Object,
    extends: Some(&OBJECT),
    without: &[],
    properties: &[
        PropertySchema::non_functional("items", ENTITY),
        PropertySchema::functional("totalItems", &[Candidate::Literal(LiteralKind::NonNegativeInteger)]),
    ],
};

pub static LINK: TypeSchema = TypeSchema {
    name: "Link",
    vocabulary: VOCABULARY,
    capability: Capability::Link,
    extends: None,
    without: &[],
    properties: &[
        PropertySchema::functional("height", &[Candidate::Literal(LiteralKind::NonNegativeInteger)]),
        PropertySchema::functional("href", &[Candidate::Literal(LiteralKind::AnyUri)]),
        PropertySchema::functional("hreflang", &[Candidate::Literal(LiteralKind::Bcp47)]),
        PropertySchema::non_functional("name", TEXT).with_language_map(),
        PropertySchema::non_functional("rel", &[Candidate::Literal(LiteralKind::LinkRelation)]),
    ],
};

pub static MENTION: TypeSchema = TypeSchema {
    name: "Mention",
    vocabulary: VOCABULARY,
    capability: Capability::Link,
    extends: Some(&LINK),
    without: &[],
    properties: &[],
};

pub fn fixture_registry() -> TypeRegistry {
    TypeRegistry::builder()
        .register_all(&[&OBJECT, &NOTE, &PLACE, &PROFILE, &COLLECTION, &LINK, &MENTION])
        .build()
        .unwrap()
}
