//! Dotted-path key store backing a resolved configuration.
//!
//! The tree root is always a mapping. Paths are split on `.` and resolved by
//! walking nested mappings; lists and scalars are leaves.

use super::merge::merge_maps;
use crate::error::ConfigKeyError;
use serde::Serialize;
use serde_json::{Map, Value, map::Entry};

/// Mapping-backed container with dotted-path accessors.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct KeyStore {
    root: Map<String, Value>,
}

impl KeyStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from an existing mapping.
    pub fn from_map(root: Map<String, Value>) -> Self {
        Self { root }
    }

    /// Get the value at `path`, failing if any segment is absent.
    pub fn get(&self, path: &str) -> Result<&Value, ConfigKeyError> {
        self.fetch(path)
            .ok_or_else(|| ConfigKeyError::UnknownKey(path.to_string()))
    }

    /// Get the value at `path`, or `None` if it does not resolve.
    pub fn fetch(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let first = segments.next()?;
        let mut current = self.root.get(first)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    /// Mutable variant of [`KeyStore::fetch`].
    pub fn fetch_mut(&mut self, path: &str) -> Option<&mut Value> {
        let mut segments = path.split('.');
        let first = segments.next()?;
        let mut current = self.root.get_mut(first)?;
        for segment in segments {
            current = current.as_object_mut()?.get_mut(segment)?;
        }
        Some(current)
    }

    /// Whether `path` resolves to a value (a stored `null` counts).
    pub fn exists(&self, path: &str) -> bool {
        self.fetch(path).is_some()
    }

    /// Store `value` at `path` and return a reference to the stored value.
    ///
    /// Missing intermediate mappings are created. An intermediate that is not
    /// a mapping is replaced by an empty one.
    pub fn set(&mut self, path: &str, value: impl Into<Value>) -> &Value {
        let mut segments: Vec<&str> = path.split('.').collect();
        // split always yields at least one segment
        let last = segments.pop().unwrap_or_default();

        let mut node = &mut self.root;
        for segment in segments {
            let child = node
                .entry(segment.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            node = ensure_mapping(child);
        }

        match node.entry(last.to_string()) {
            Entry::Occupied(mut entry) => {
                entry.insert(value.into());
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(value.into()),
        }
    }

    /// Remove the entry at `path`. Returns whether anything was removed.
    ///
    /// Ancestors left empty by the removal are kept.
    pub fn delete(&mut self, path: &str) -> bool {
        let Some((parent, last)) = path.rsplit_once('.') else {
            return self.root.remove(path).is_some();
        };
        match self.fetch_mut(parent).and_then(Value::as_object_mut) {
            Some(map) => map.remove(last).is_some(),
            None => false,
        }
    }

    /// Deep merge `other` into this store. See [`merge_maps`].
    pub fn merge(&mut self, other: Map<String, Value>) {
        merge_maps(&mut self.root, other);
    }

    /// Remove every key.
    pub fn clear(&mut self) {
        self.root.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Borrow the root mapping.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.root
    }

    /// Owned snapshot of the whole tree.
    pub fn to_value(&self) -> Value {
        Value::Object(self.root.clone())
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.root)
    }
}

impl From<Map<String, Value>> for KeyStore {
    fn from(root: Map<String, Value>) -> Self {
        Self::from_map(root)
    }
}

/// Coerce `value` into a mapping, discarding whatever it held otherwise.
fn ensure_mapping(value: &mut Value) -> &mut Map<String, Value> {
    if !value.is_object() {
        *value = Value::Object(Map::new());
    }
    match value {
        Value::Object(map) => map,
        _ => unreachable!("value was coerced to a mapping"),
    }
}
