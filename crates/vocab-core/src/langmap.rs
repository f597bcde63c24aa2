//! Natural language maps: the `<property>Map` companion of a text property.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Language tag to text.
///
/// Lives beside the plain property of the same base name; either, both or
/// neither may be set. An empty map is still emitted, which distinguishes it
/// from an absent one.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct LanguageMap(BTreeMap<String, String>);

impl LanguageMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a map from its JSON form.
    ///
    /// Entries whose value is not a string are dropped without notice; the
    /// same happens to the whole map when the input is not an object.
    pub fn from_json(raw: &Value) -> Self {
        let entries = raw
            .as_object()
            .map(|map| {
                map.iter()
                    .filter_map(|(tag, text)| match text {
                        Value::String(text) => Some((tag.clone(), text.clone())),
                        _ => {
                            tracing::trace!("dropping non-string natural language entry `{tag}`");
                            None
                        }
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self(entries)
    }

    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .0
            .iter()
            .map(|(tag, text)| (tag.clone(), Value::String(text.clone())))
            .collect();
        Value::Object(map)
    }

    pub fn get(&self, language: &str) -> Option<&str> {
        self.0.get(language).map(String::as_str)
    }

    pub fn insert(&mut self, language: impl Into<String>, text: impl Into<String>) -> Option<String> {
        self.0.insert(language.into(), text.into())
    }

    pub fn remove(&mut self, language: &str) -> Option<String> {
        self.0.remove(language)
    }

    pub fn contains(&self, language: &str) -> bool {
        self.0.contains_key(language)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(tag, text)| (tag.as_str(), text.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LanguageMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
