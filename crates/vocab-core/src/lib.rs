/*! # vocab-core

Schema-driven object model and lossless JSON codec for extensible linked-data
vocabularies in the style of ActivityStreams 2.0.

A vocabulary is a set of static [`TypeSchema`] tables. Registering them in a
[`TypeRegistry`] lets a [`Codec`] turn JSON trees into [`VocabObject`]s and back.

## Features

- **Polymorphic properties**: every slot holds exactly one alternative, chosen
  in declared order, with unrecognised values kept verbatim.
- **Lossless round trips**: keys outside the schema survive in an unknown bag.
- **Natural language maps**: `<property>Map` companions live beside their plain property.
- **Explicit registries**: no process-wide state is needed to decode.

*/

pub mod codec;
pub mod errors;
pub mod iri;
pub mod langmap;
pub mod literal;
pub mod object;
pub mod property;
pub mod registry;
pub mod router;
pub mod schema;

#[cfg(test)]
mod testing;

pub use codec::{Codec, CodecConfig, DEFAULT_MAX_DEPTH};
pub use errors::{DeserializeError, IriError, LiteralError, PropertyError, RegistryError, SerializeError};
pub use iri::Iri;
pub use langmap::LanguageMap;
pub use literal::{LangString, Literal, LiteralKind, XsdDateTime, XsdDuration};
pub use object::VocabObject;
pub use property::{FunctionalProperty, NonFunctionalProperty, Property, PropertyValue, ValueKind};
pub use registry::{RegistryBuilder, TypeRegistry};
pub use router::{RouteError, TypeRouter};
pub use schema::{Candidate, Capability, PropertySchema, TypeSchema};
