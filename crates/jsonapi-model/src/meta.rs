use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::validation::ConversionError;

/// Key-ordered metadata mapping (`meta` members).
///
/// Keys keep their insertion order on the wire. Combining two mappings via
/// [`Meta::merge`] is a left-biased key union: keys already present in
/// `self` win, and the empty mapping is the identity on either side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meta(IndexMap<String, Value>);

impl Meta {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Builds a one-entry mapping holding a typed fragment under its fixed key.
    pub fn from_fragment<F: MetaFragment>(fragment: &F) -> Result<Self, ConversionError> {
        let value = serde_json::to_value(fragment)?;
        let mut map = IndexMap::new();
        map.insert(F::KEY.to_string(), value);
        Ok(Self(map))
    }

    /// Inserts a value, returning the previous value for the key if any.
    ///
    /// An existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    /// Looks up a value by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns `true` when the mapping carries no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Left-biased union: entries of `self` win on key conflict.
    pub fn merge(mut self, other: Meta) -> Meta {
        for (key, value) in other.0 {
            self.0.entry(key).or_insert(value);
        }
        self
    }
}

impl FromIterator<(String, Value)> for Meta {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Typed metadata fragment with a fixed member key.
///
/// Implementors declare the key their serialized form lives under, so a
/// domain type can be attached to a `meta` member without every call site
/// repeating the key.
pub trait MetaFragment: Serialize {
    /// Member key the fragment serializes under.
    const KEY: &'static str;
}
