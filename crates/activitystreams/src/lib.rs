/*! # activitystreams

The ActivityStreams 2.0 core and extended vocabulary as [`vocab_core`] schema
tables, with the ActivityPub actor properties, plus a process-wide
[`TypeRegistry`] holding all of them.

```
use serde_json::json;
use vocab_core::Codec;

let codec = Codec::new(activitystreams::registry());
let note = codec.deserialize(&json!({"type": "Note", "content": "Hello"})).unwrap();
assert_eq!(note.type_name(), "Note");
```
*/

pub mod activity;
pub mod actor;
pub mod base;
pub mod object;

use lazy_static::lazy_static;
use vocab_core::{TypeRegistry, TypeSchema, VocabObject};

pub use self::{activity::*, actor::*, base::*, object::*};

/// Base of every expanded type IRI in this vocabulary.
pub const VOCABULARY: &str = "https://www.w3.org/ns/activitystreams";

/// Every type of the vocabulary, roots first.
pub static ALL_TYPES: &[&TypeSchema] = &[
    &OBJECT,
    &LINK,
    &ACTIVITY,
    &INTRANSITIVE_ACTIVITY,
    &COLLECTION,
    &ORDERED_COLLECTION,
    &COLLECTION_PAGE,
    &ORDERED_COLLECTION_PAGE,
    &ACCEPT,
    &TENTATIVE_ACCEPT,
    &ADD,
    &ARRIVE,
    &CREATE,
    &DELETE,
    &FOLLOW,
    &IGNORE,
    &BLOCK,
    &JOIN,
    &LEAVE,
    &LIKE,
    &OFFER,
    &INVITE,
    &REJECT,
    &TENTATIVE_REJECT,
    &REMOVE,
    &UNDO,
    &UPDATE,
    &VIEW,
    &LISTEN,
    &READ,
    &MOVE,
    &TRAVEL,
    &ANNOUNCE,
    &FLAG,
    &DISLIKE,
    &QUESTION,
    &APPLICATION,
    &GROUP,
    &ORGANIZATION,
    &PERSON,
    &SERVICE,
    &ARTICLE,
    &DOCUMENT,
    &AUDIO,
    &IMAGE,
    &VIDEO,
    &PAGE,
    &EVENT,
    &NOTE,
    &PLACE,
    &PROFILE,
    &RELATIONSHIP,
    &TOMBSTONE,
    &MENTION,
];

lazy_static! {
    static ref REGISTRY: TypeRegistry = {
        tracing::debug!("initializing the ActivityStreams registry");
        TypeRegistry::builder()
            .register_all(ALL_TYPES)
            .build()
            .expect("ActivityStreams type names are unique")
    };
}

/// The shared registry of every ActivityStreams type, built on first use.
pub fn registry() -> &'static TypeRegistry {
    &REGISTRY
}

/// A new, empty object of the ActivityStreams type named `tag`.
pub fn new_object(tag: &str) -> Option<VocabObject> {
    registry().instantiate(tag)
}
