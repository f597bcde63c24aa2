//! Activity types. All but `Question` add nothing to their parent.

use vocab_core::{Candidate, Capability, LiteralKind, PropertySchema, TypeSchema};

use crate::{
    base::{ACTIVITY, ENTITY, INTRANSITIVE_ACTIVITY},
    VOCABULARY,
};

macro_rules! activity {
    ($ident:ident, $name:literal, $parent:expr) => {
        pub static $ident: TypeSchema = TypeSchema {
            name: $name,
            vocabulary: VOCABULARY,
            capability: Capability::Object,
            extends: Some(&$parent),
            without: &[],
            properties: &[],
        };
    };
}

activity!(ACCEPT, "Accept", ACTIVITY);
activity!(TENTATIVE_ACCEPT, "TentativeAccept", ACCEPT);
activity!(ADD, "Add", ACTIVITY);
activity!(ARRIVE, "Arrive", INTRANSITIVE_ACTIVITY);
activity!(CREATE, "Create", ACTIVITY);
activity!(DELETE, "Delete", ACTIVITY);
activity!(FOLLOW, "Follow", ACTIVITY);
activity!(IGNORE, "Ignore", ACTIVITY);
activity!(BLOCK, "Block", IGNORE);
activity!(JOIN, "Join", ACTIVITY);
activity!(LEAVE, "Leave", ACTIVITY);
activity!(LIKE, "Like", ACTIVITY);
activity!(OFFER, "Offer", ACTIVITY);
activity!(INVITE, "Invite", OFFER);
activity!(REJECT, "Reject", ACTIVITY);
activity!(TENTATIVE_REJECT, "TentativeReject", REJECT);
activity!(REMOVE, "Remove", ACTIVITY);
activity!(UNDO, "Undo", ACTIVITY);
activity!(UPDATE, "Update", ACTIVITY);
activity!(VIEW, "View", ACTIVITY);
activity!(LISTEN, "Listen", ACTIVITY);
activity!(READ, "Read", ACTIVITY);
activity!(MOVE, "Move", ACTIVITY);
activity!(TRAVEL, "Travel", INTRANSITIVE_ACTIVITY);
activity!(ANNOUNCE, "Announce", ACTIVITY);
activity!(FLAG, "Flag", ACTIVITY);
activity!(DISLIKE, "Dislike", ACTIVITY);

pub static QUESTION: TypeSchema = TypeSchema {
    name: "Question",
    vocabulary: VOCABULARY,
    capability: Capability::Object,
    extends: Some(&INTRANSITIVE_ACTIVITY),
    without: &[],
    properties: &[
        PropertySchema::non_functional("anyOf", ENTITY),
        PropertySchema::non_functional(
            "closed",
            &[
                Candidate::Object,
                Candidate::Link,
                Candidate::Literal(LiteralKind::DateTime),
                Candidate::Literal(LiteralKind::Boolean),
            ],
        ),
        PropertySchema::non_functional("oneOf", ENTITY),
    ],
};
