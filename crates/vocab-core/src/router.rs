//! Dispatch of decoded documents to handlers keyed by vocabulary type.

use std::{collections::HashMap, marker::PhantomData};

use serde_json::Value;
use thiserror::Error;

use crate::{codec::Codec, errors::DeserializeError, object::VocabObject};

type TypeHandler<S, E> = fn(&S, VocabObject) -> Result<(), E>;

#[derive(Debug, Error)]
pub enum RouteError<E>
where
    E: std::error::Error + 'static,
{
    #[error("no handler registered for `{0}`")]
    NoHandler(&'static str),
    #[error(transparent)]
    Deserialize(#[from] DeserializeError),
    #[error("handler failed: {0}")]
    Handler(#[source] E),
}

#[derive(Debug, Clone)]
pub struct TypeRouter<S, E>
where
    S: Sync + Send + 'static,
    E: Send + 'static,
{
    routes: HashMap<&'static str, TypeHandler<S, E>>,
    _marker: PhantomData<(S, E)>,
}

impl<S, E> TypeRouter<S, E>
where
    S: Sync + Send + 'static,
    E: Send + 'static,
{
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
            _marker: PhantomData,
        }
    }

    /// Registers `f` for the type with canonical name `type_name`.
    pub fn route(mut self, type_name: &'static str, f: TypeHandler<S, E>) -> Self {
        self.routes.insert(type_name, f);
        self
    }

    pub fn merge(&mut self, other: &Self) {
        for (key, handler) in &other.routes {
            self.routes.insert(*key, *handler);
        }
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.routes.contains_key(type_name)
    }

    /// Decodes `tree` and hands it to the first handler matching its type tags.
    ///
    /// Tags are tried in input order. When none has a handler, the resolved
    /// type and then its ancestors are tried, so an `Object` handler also
    /// receives a `Place`.
    pub fn dispatch(&self, codec: &Codec<'_>, state: &S, tree: &Value) -> Result<(), RouteError<E>>
    where
        E: std::error::Error + 'static,
    {
        let object = codec.deserialize(tree)?;

        let by_tag = object
            .types()
            .iter()
            .find_map(|tag| self.routes.get_key_value(tag.as_str()));

        let mut found = by_tag.map(|(key, handler)| (*key, *handler));
        let mut current = Some(object.schema());
        while found.is_none() {
            let Some(schema) = current else { break };
            found = self.routes.get(schema.name).map(|handler| (schema.name, *handler));
            current = schema.extends;
        }

        if let Some((key, handler)) = found {
            tracing::debug!("dispatching {} to the {key} handler", object.type_name());
            return handler(state, object).map_err(RouteError::Handler);
        }

        tracing::warn!("no handler registered for {}", object.type_name());
        Err(RouteError::NoHandler(object.type_name()))
    }
}

impl<S, E> Default for TypeRouter<S, E>
where
    S: Sync + Send + 'static,
    E: Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
