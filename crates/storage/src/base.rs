//! Committed storage
//!
//! The base store holds every committed key. It is written directly when no
//! transaction is open and replaced wholesale when a transaction stack is
//! committed.

use layerkv_core::{Key, Layer, SlotRef, Value};
use rustc_hash::FxHashMap;

/// Committed key/value mapping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BaseStore {
    data: FxHashMap<Key, Value>,
}

impl BaseStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Get the committed value for `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    /// Insert or overwrite `key`
    pub fn insert(&mut self, key: Key, value: Value) {
        self.data.insert(key, value);
    }

    /// Remove `key`, returning the old value. Absent keys are a no-op.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.data.remove(key)
    }

    /// Check if `key` is committed
    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Swap in a new committed mapping, dropping the old one
    pub fn replace(&mut self, data: FxHashMap<Key, Value>) {
        self.data = data;
    }

    /// Number of committed keys
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if nothing is committed
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate committed entries in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.data.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Borrow the underlying map
    pub fn as_map(&self) -> &FxHashMap<Key, Value> {
        &self.data
    }
}

impl FromIterator<(Key, Value)> for BaseStore {
    fn from_iter<I: IntoIterator<Item = (Key, Value)>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl Layer for BaseStore {
    fn slot(&self, key: &str) -> Option<SlotRef<'_>> {
        self.get(key).map(SlotRef::Value)
    }

    fn slots(&self) -> Box<dyn Iterator<Item = (&str, SlotRef<'_>)> + '_> {
        Box::new(self.iter().map(|(k, v)| (k, SlotRef::Value(v))))
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}
