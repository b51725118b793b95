//! Transaction overlays
//!
//! An overlay buffers one transaction's writes. Unsetting a key inside a
//! transaction records a tombstone rather than removing the entry, so the
//! key stays masked in the working view until the overlay is discarded.

use layerkv_core::{Key, Layer, Slot, SlotRef, Value};
use rustc_hash::FxHashMap;

/// One transaction's uncommitted writes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overlay {
    slots: FxHashMap<Key, Slot>,
}

impl Overlay {
    /// Create an empty overlay
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `key = value`, replacing any earlier slot in this overlay
    pub fn set(&mut self, key: Key, value: Value) {
        self.slots.insert(key, Slot::Value(value));
    }

    /// Record a tombstone for `key`, replacing any earlier slot in this overlay
    pub fn delete(&mut self, key: Key) {
        self.slots.insert(key, Slot::Deleted);
    }

    /// What this overlay records for `key`
    pub fn get(&self, key: &str) -> Option<&Slot> {
        self.slots.get(key)
    }

    /// Number of keys touched by this overlay
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if this overlay has touched no keys
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterate slots in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Slot)> {
        self.slots.iter().map(|(k, s)| (k.as_str(), s))
    }
}

impl Layer for Overlay {
    fn slot(&self, key: &str) -> Option<SlotRef<'_>> {
        self.slots.get(key).map(Slot::borrowed)
    }

    fn slots(&self) -> Box<dyn Iterator<Item = (&str, SlotRef<'_>)> + '_> {
        Box::new(self.iter().map(|(k, s)| (k, s.borrowed())))
    }

    fn len(&self) -> usize {
        self.slots.len()
    }
}
