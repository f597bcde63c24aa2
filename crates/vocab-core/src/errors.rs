use thiserror::Error;

use crate::{literal::LiteralKind, property::ValueKind};

/// A literal parse attempt that failed its grammar.
///
/// Never surfaces from the codec: slots fall through to the next alternative.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LiteralError {
    #[error("{kind} cannot be read from a JSON {found}")]
    ShapeMismatch { kind: LiteralKind, found: &'static str },
    #[error("`{input}` is not a valid {kind}")]
    Grammar { kind: LiteralKind, input: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IriError {
    #[error("`{0}` is not an absolute IRI")]
    NotAbsolute(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeserializeError {
    #[error("expected a JSON object, found {0}")]
    NotAnObject(&'static str),
    #[error("document carries no type tag")]
    MissingType,
    #[error("type must be a string or an array of strings")]
    InvalidTypeTag,
    #[error("no registered type matches {0:?}")]
    UnresolvedType(Vec<String>),
    #[error("invalid id: {0}")]
    InvalidId(#[source] IriError),
    #[error("nesting exceeds the maximum depth of {0}")]
    DepthExceeded(usize),
    #[error("{type_name}.{property}: {source}")]
    Property {
        type_name: &'static str,
        property: &'static str,
        source: Box<DeserializeError>,
    },
    #[error("malformed JSON: {0}")]
    Json(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SerializeError {
    #[error("nesting exceeds the maximum depth of {0}")]
    DepthExceeded(usize),
    #[error("{0} cannot be represented as a JSON number")]
    NonFiniteFloat(f64),
    #[error("{type_name}.{property}: {source}")]
    Property {
        type_name: &'static str,
        property: &'static str,
        source: Box<SerializeError>,
    },
    #[error("JSON output failed: {0}")]
    Json(String),
}

/// Misuse of the typed accessors on a vocabulary object.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    #[error("`{type_name}` has no property `{property}`")]
    NoSuchProperty { type_name: &'static str, property: String },
    #[error("`{0}` is not a functional property")]
    NotFunctional(&'static str),
    #[error("`{0}` is not a non-functional property")]
    NotNonFunctional(&'static str),
    #[error("`{0}` has no natural language map")]
    NoLanguageMap(&'static str),
    #[error("`{property}` does not accept a {kind} value")]
    NotPermitted { property: &'static str, kind: ValueKind },
    #[error("`{0}` is reserved and cannot be stored as an unknown property")]
    ReservedKey(String),
    #[error("index {index} is out of bounds for `{property}` of length {len}")]
    IndexOutOfBounds {
        property: &'static str,
        index: usize,
        len: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("found duplicate entry in type registry: {0}")]
    DuplicateType(String),
}

impl DeserializeError {
    /// The failure itself, past the chain of properties that led to it.
    pub fn root_cause(&self) -> &DeserializeError {
        match self {
            DeserializeError::Property { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

impl SerializeError {
    /// The failure itself, past the chain of properties that led to it.
    pub fn root_cause(&self) -> &SerializeError {
        match self {
            SerializeError::Property { source, .. } => source.root_cause(),
            other => other,
        }
    }
}
