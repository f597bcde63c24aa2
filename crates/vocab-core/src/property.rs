//! Property slots: the polymorphic value union and its two containers.

use std::{cmp::Ordering, fmt};

use serde_json::Value;

use crate::{
    errors::PropertyError,
    iri::Iri,
    literal::{Literal, LiteralKind},
    object::VocabObject,
    schema::{Candidate, Capability, PropertySchema},
};

/// Which arm of a [`PropertyValue`] is populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ValueKind {
    Object,
    Link,
    Iri,
    Literal(LiteralKind),
    Unknown,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Object => f.write_str("Object"),
            ValueKind::Link => f.write_str("Link"),
            ValueKind::Iri => f.write_str("IRI"),
            ValueKind::Literal(kind) => write!(f, "{kind}"),
            ValueKind::Unknown => f.write_str("unknown"),
        }
    }
}

/// Exactly one of the alternative shapes a property value may take.
///
/// `Unknown` keeps an unrecognised value under a recognised key so that it
/// survives a round trip.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Object(Box<VocabObject>),
    Link(Box<VocabObject>),
    Iri(Iri),
    Literal(Literal),
    Unknown(Value),
}

impl PropertyValue {
    /// Wraps an inlined entity in the arm matching its capability.
    pub fn entity(object: VocabObject) -> Self {
        match object.schema().capability {
            Capability::Object => PropertyValue::Object(Box::new(object)),
            Capability::Link => PropertyValue::Link(Box::new(object)),
        }
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            PropertyValue::Object(_) => ValueKind::Object,
            PropertyValue::Link(_) => ValueKind::Link,
            PropertyValue::Iri(_) => ValueKind::Iri,
            PropertyValue::Literal(literal) => ValueKind::Literal(literal.kind()),
            PropertyValue::Unknown(_) => ValueKind::Unknown,
        }
    }

    pub fn is_object(&self) -> bool {
        matches!(self, PropertyValue::Object(_))
    }

    pub fn is_link(&self) -> bool {
        matches!(self, PropertyValue::Link(_))
    }

    pub fn is_iri(&self) -> bool {
        matches!(self, PropertyValue::Iri(_))
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, PropertyValue::Literal(_))
    }

    pub fn is_literal_kind(&self, kind: LiteralKind) -> bool {
        matches!(self, PropertyValue::Literal(literal) if literal.kind() == kind)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, PropertyValue::Unknown(_))
    }

    pub fn as_object(&self) -> Option<&VocabObject> {
        match self {
            PropertyValue::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut VocabObject> {
        match self {
            PropertyValue::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_link(&self) -> Option<&VocabObject> {
        match self {
            PropertyValue::Link(link) => Some(link),
            _ => None,
        }
    }

    pub fn as_iri(&self) -> Option<&Iri> {
        match self {
            PropertyValue::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            PropertyValue::Literal(literal) => Some(literal),
            _ => None,
        }
    }

    pub fn as_unknown(&self) -> Option<&Value> {
        match self {
            PropertyValue::Unknown(value) => Some(value),
            _ => None,
        }
    }

    /// The IRI an entity is known by: the IRI arm itself, or the `id` of an
    /// inlined object or link.
    pub fn identity(&self) -> Option<&Iri> {
        match self {
            PropertyValue::Object(object) | PropertyValue::Link(object) => object.id(),
            PropertyValue::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// Total order: arm first, then value within an arm.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (PropertyValue::Object(a), PropertyValue::Object(b))
            | (PropertyValue::Link(a), PropertyValue::Link(b)) => a
                .id()
                .cmp(&b.id())
                .then_with(|| a.type_name().cmp(b.type_name())),
            (PropertyValue::Iri(a), PropertyValue::Iri(b)) => a.cmp(b),
            (PropertyValue::Literal(a), PropertyValue::Literal(b)) => a.compare(b),
            (PropertyValue::Unknown(a), PropertyValue::Unknown(b)) => a.to_string().cmp(&b.to_string()),
            _ => self.kind().cmp(&other.kind()),
        }
    }

    /// Checks the arm against the property's declared alternatives. IRIs and
    /// unknown values are accepted by every property.
    fn check(&self, schema: &'static PropertySchema) -> Result<(), PropertyError> {
        let permitted = match self {
            PropertyValue::Object(object) => {
                schema.accepts(Candidate::Object) && object.schema().capability == Capability::Object
            }
            PropertyValue::Link(link) => {
                schema.accepts(Candidate::Link) && link.schema().capability == Capability::Link
            }
            PropertyValue::Iri(_) | PropertyValue::Unknown(_) => true,
            PropertyValue::Literal(literal) => schema.accepts(Candidate::Literal(literal.kind())),
        };

        if permitted {
            Ok(())
        } else {
            Err(PropertyError::NotPermitted {
                property: schema.name,
                kind: self.kind(),
            })
        }
    }
}

impl From<Iri> for PropertyValue {
    fn from(iri: Iri) -> Self {
        PropertyValue::Iri(iri)
    }
}

impl From<Literal> for PropertyValue {
    fn from(literal: Literal) -> Self {
        PropertyValue::Literal(literal)
    }
}

impl From<VocabObject> for PropertyValue {
    fn from(object: VocabObject) -> Self {
        PropertyValue::entity(object)
    }
}

/// A property holding zero or one value.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionalProperty {
    schema: &'static PropertySchema,
    value: Option<PropertyValue>,
}

impl FunctionalProperty {
    pub fn new(schema: &'static PropertySchema) -> Self {
        Self { schema, value: None }
    }

    pub(crate) fn with_value(schema: &'static PropertySchema, value: PropertyValue) -> Self {
        Self {
            schema,
            value: Some(value),
        }
    }

    pub fn schema(&self) -> &'static PropertySchema {
        self.schema
    }

    pub fn get(&self) -> Option<&PropertyValue> {
        self.value.as_ref()
    }

    pub fn get_mut(&mut self) -> Option<&mut PropertyValue> {
        self.value.as_mut()
    }

    pub fn kind(&self) -> Option<ValueKind> {
        self.value.as_ref().map(PropertyValue::kind)
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// Replaces whatever arm was populated.
    pub fn set(&mut self, value: PropertyValue) -> Result<(), PropertyError> {
        value.check(self.schema)?;
        self.value = Some(value);
        Ok(())
    }

    pub fn set_object(&mut self, object: VocabObject) -> Result<(), PropertyError> {
        self.set(PropertyValue::entity(object))
    }

    pub fn set_link(&mut self, link: VocabObject) -> Result<(), PropertyError> {
        self.set(PropertyValue::Link(Box::new(link)))
    }

    pub fn set_iri(&mut self, iri: Iri) {
        self.value = Some(PropertyValue::Iri(iri));
    }

    pub fn set_literal(&mut self, literal: impl Into<Literal>) -> Result<(), PropertyError> {
        self.set(PropertyValue::Literal(literal.into()))
    }

    pub fn set_unknown(&mut self, value: Value) {
        self.value = Some(PropertyValue::Unknown(value));
    }

    pub fn clear(&mut self) {
        self.value = None;
    }

    pub fn take(&mut self) -> Option<PropertyValue> {
        self.value.take()
    }

    pub fn is_object(&self) -> bool {
        self.value.as_ref().is_some_and(PropertyValue::is_object)
    }

    pub fn is_link(&self) -> bool {
        self.value.as_ref().is_some_and(PropertyValue::is_link)
    }

    pub fn is_iri(&self) -> bool {
        self.value.as_ref().is_some_and(PropertyValue::is_iri)
    }

    pub fn is_literal_kind(&self, kind: LiteralKind) -> bool {
        self.value.as_ref().is_some_and(|v| v.is_literal_kind(kind))
    }

    pub fn is_unknown(&self) -> bool {
        self.value.as_ref().is_some_and(PropertyValue::is_unknown)
    }
}

/// A property holding an ordered list of values. Order is significant.
#[derive(Debug, Clone, PartialEq)]
pub struct NonFunctionalProperty {
    schema: &'static PropertySchema,
    values: Vec<PropertyValue>,
}

impl NonFunctionalProperty {
    pub fn new(schema: &'static PropertySchema) -> Self {
        Self {
            schema,
            values: Vec::new(),
        }
    }

    pub(crate) fn with_values(schema: &'static PropertySchema, values: Vec<PropertyValue>) -> Self {
        Self { schema, values }
    }

    pub fn schema(&self) -> &'static PropertySchema {
        self.schema
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PropertyValue> {
        self.values.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut PropertyValue> {
        self.values.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PropertyValue> {
        self.values.iter()
    }

    pub fn as_slice(&self) -> &[PropertyValue] {
        &self.values
    }

    pub fn push(&mut self, value: PropertyValue) -> Result<(), PropertyError> {
        value.check(self.schema)?;
        self.values.push(value);
        Ok(())
    }

    pub fn push_object(&mut self, object: VocabObject) -> Result<(), PropertyError> {
        self.push(PropertyValue::entity(object))
    }

    pub fn push_link(&mut self, link: VocabObject) -> Result<(), PropertyError> {
        self.push(PropertyValue::Link(Box::new(link)))
    }

    pub fn push_iri(&mut self, iri: Iri) {
        self.values.push(PropertyValue::Iri(iri));
    }

    pub fn push_literal(&mut self, literal: impl Into<Literal>) -> Result<(), PropertyError> {
        self.push(PropertyValue::Literal(literal.into()))
    }

    pub fn prepend(&mut self, value: PropertyValue) -> Result<(), PropertyError> {
        self.insert(0, value)
    }

    pub fn insert(&mut self, index: usize, value: PropertyValue) -> Result<(), PropertyError> {
        if index > self.values.len() {
            return Err(self.out_of_bounds(index));
        }
        value.check(self.schema)?;
        self.values.insert(index, value);
        Ok(())
    }

    /// Replaces the value at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, value: PropertyValue) -> Result<PropertyValue, PropertyError> {
        if index >= self.values.len() {
            return Err(self.out_of_bounds(index));
        }
        value.check(self.schema)?;
        Ok(std::mem::replace(&mut self.values[index], value))
    }

    pub fn remove(&mut self, index: usize) -> Result<PropertyValue, PropertyError> {
        if index >= self.values.len() {
            return Err(self.out_of_bounds(index));
        }
        Ok(self.values.remove(index))
    }

    pub fn swap(&mut self, a: usize, b: usize) -> Result<(), PropertyError> {
        for index in [a, b] {
            if index >= self.values.len() {
                return Err(self.out_of_bounds(index));
            }
        }
        self.values.swap(a, b);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn retain(&mut self, f: impl FnMut(&PropertyValue) -> bool) {
        self.values.retain(f);
    }

    /// Stable sort by [`PropertyValue::compare`].
    pub fn sort(&mut self) {
        self.values.sort_by(PropertyValue::compare);
    }

    fn out_of_bounds(&self, index: usize) -> PropertyError {
        PropertyError::IndexOutOfBounds {
            property: self.schema.name,
            index,
            len: self.values.len(),
        }
    }
}

impl<'a> IntoIterator for &'a NonFunctionalProperty {
    type Item = &'a PropertyValue;
    type IntoIter = std::slice::Iter<'a, PropertyValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// A populated slot of either arity.
#[derive(Debug, Clone, PartialEq)]
pub enum Property {
    Functional(FunctionalProperty),
    NonFunctional(NonFunctionalProperty),
}

impl Property {
    pub fn new(schema: &'static PropertySchema) -> Self {
        if schema.functional {
            Property::Functional(FunctionalProperty::new(schema))
        } else {
            Property::NonFunctional(NonFunctionalProperty::new(schema))
        }
    }

    pub fn schema(&self) -> &'static PropertySchema {
        match self {
            Property::Functional(p) => p.schema(),
            Property::NonFunctional(p) => p.schema(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Property::Functional(p) => p.is_empty(),
            Property::NonFunctional(p) => p.is_empty(),
        }
    }

    /// Every held value, in order.
    pub fn values(&self) -> &[PropertyValue] {
        match self {
            Property::Functional(p) => p.value.as_slice(),
            Property::NonFunctional(p) => p.as_slice(),
        }
    }
}
