//! Root types: the two capability roots, activities and collections.

use vocab_core::{Candidate, Capability, LiteralKind, PropertySchema, TypeSchema};

use crate::VOCABULARY;

pub(crate) const ENTITY: &[Candidate] = &[Candidate::Object, Candidate::Link];
pub(crate) const OBJECT_ONLY: &[Candidate] = &[Candidate::Object];
pub(crate) const TEXT: &[Candidate] = &[
    Candidate::Literal(LiteralKind::String),
    Candidate::Literal(LiteralKind::LangString),
];
pub(crate) const DATE_TIME: &[Candidate] = &[Candidate::Literal(LiteralKind::DateTime)];
pub(crate) const FLOAT: &[Candidate] = &[Candidate::Literal(LiteralKind::Float)];
pub(crate) const COUNT: &[Candidate] = &[Candidate::Literal(LiteralKind::NonNegativeInteger)];
pub(crate) const MEDIA_TYPE: &[Candidate] = &[Candidate::Literal(LiteralKind::MimeType)];

pub static OBJECT: TypeSchema = TypeSchema {
    name: "Object",
    vocabulary: VOCABULARY,
    capability: Capability::Object,
    extends: None,
    without: &[],
    properties: &[
        PropertySchema::non_functional("attachment", ENTITY),
        PropertySchema::non_functional("attributedTo", ENTITY),
        PropertySchema::non_functional("audience", ENTITY),
        PropertySchema::non_functional("bcc", ENTITY),
        PropertySchema::non_functional("bto", ENTITY),
        PropertySchema::non_functional("cc", ENTITY),
        PropertySchema::non_functional("content", TEXT).with_language_map(),
        PropertySchema::non_functional("context", ENTITY),
        PropertySchema::functional("duration", &[Candidate::Literal(LiteralKind::Duration)]),
        PropertySchema::functional("endTime", DATE_TIME),
        PropertySchema::non_functional("generator", ENTITY),
        PropertySchema::non_functional("icon", ENTITY),
        PropertySchema::non_functional("image", ENTITY),
        PropertySchema::non_functional("inReplyTo", ENTITY),
        PropertySchema::functional("likes", OBJECT_ONLY),
        PropertySchema::non_functional("location", ENTITY),
        PropertySchema::functional("mediaType", MEDIA_TYPE),
        PropertySchema::non_functional("name", TEXT).with_language_map(),
        PropertySchema::non_functional("preview", ENTITY),
        PropertySchema::functional("published", DATE_TIME),
        PropertySchema::functional("replies", OBJECT_ONLY),
        PropertySchema::functional("sensitive", &[Candidate::Literal(LiteralKind::Boolean)]),
        PropertySchema::functional("shares", OBJECT_ONLY),
        PropertySchema::functional("source", OBJECT_ONLY),
        PropertySchema::functional("startTime", DATE_TIME),
        PropertySchema::non_functional("summary", TEXT).with_language_map(),
        PropertySchema::non_functional("tag", ENTITY),
        PropertySchema::non_functional("to", ENTITY),
        PropertySchema::functional("updated", DATE_TIME),
        PropertySchema::non_functional("url", &[Candidate::Literal(LiteralKind::AnyUri), Candidate::Link]),
    ],
};

pub static LINK: TypeSchema = TypeSchema {
    name: "Link",
    vocabulary: VOCABULARY,
    capability: Capability::Link,
    extends: None,
    without: &[],
    properties: &[
        PropertySchema::functional("height", COUNT),
        PropertySchema::functional("href", &[Candidate::Literal(LiteralKind::AnyUri)]),
        PropertySchema::functional("hreflang", &[Candidate::Literal(LiteralKind::Bcp47)]),
        PropertySchema::functional("mediaType", MEDIA_TYPE),
        PropertySchema::non_functional("name", TEXT).with_language_map(),
        PropertySchema::non_functional("preview", ENTITY),
        PropertySchema::non_functional("rel", &[Candidate::Literal(LiteralKind::LinkRelation)]),
        PropertySchema::functional("width", COUNT),
    ],
};

pub static ACTIVITY: TypeSchema = TypeSchema {
    name: "Activity",
    vocabulary: VOCABULARY,
    capability: Capability::Object,
    extends: Some(&OBJECT),
    without: &[],
    properties: &[
        PropertySchema::non_functional("actor", ENTITY),
        PropertySchema::non_functional("instrument", ENTITY),
        PropertySchema::non_functional("object", ENTITY),
        PropertySchema::non_functional("origin", ENTITY),
        PropertySchema::non_functional("result", ENTITY),
        PropertySchema::non_functional("target", ENTITY),
    ],
};

// An `object` key on an intransitive activity is kept as an extension.
pub static INTRANSITIVE_ACTIVITY: TypeSchema = TypeSchema {
    name: "IntransitiveActivity",
    vocabulary: VOCABULARY,
    capability: Capability::Object,
    extends: Some(&ACTIVITY),
    without: &["object"],
    properties: &[],
};

pub static COLLECTION: TypeSchema = TypeSchema {
    name: "Collection",
    vocabulary: VOCABULARY,
    capability: Capability::Object,
    extends: Some(&OBJECT),
    without: &[],
    properties: &[
        PropertySchema::functional("current", ENTITY),
        PropertySchema::functional("first", ENTITY),
        PropertySchema::non_functional("items", ENTITY),
        PropertySchema::functional("last", ENTITY),
        PropertySchema::functional("totalItems", COUNT),
    ],
};

pub static ORDERED_COLLECTION: TypeSchema = TypeSchema {
    name: "OrderedCollection",
    vocabulary: VOCABULARY,
    capability: Capability::Object,
    extends: Some(&COLLECTION),
    without: &[],
    properties: &[PropertySchema::non_functional("orderedItems", ENTITY)],
};

pub static COLLECTION_PAGE: TypeSchema = TypeSchema {
    name: "CollectionPage",
    vocabulary: VOCABULARY,
    capability: Capability::Object,
    extends: Some(&COLLECTION),
    without: &[],
    properties: &[
        PropertySchema::functional("next", ENTITY),
        PropertySchema::functional("partOf", ENTITY),
        PropertySchema::functional("prev", ENTITY),
    ],
};

pub static ORDERED_COLLECTION_PAGE: TypeSchema = TypeSchema {
    name: "OrderedCollectionPage",
    vocabulary: VOCABULARY,
    capability: Capability::Object,
    extends: Some(&COLLECTION_PAGE),
    without: &[],
    properties: &[
        PropertySchema::non_functional("orderedItems", ENTITY),
        PropertySchema::functional("startIndex", COUNT),
    ],
};
