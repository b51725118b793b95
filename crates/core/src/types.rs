//! Core types for the layered store
//!
//! Keys and values are opaque strings. Overlays record a [`Slot`] per key,
//! which is either a value or a tombstone masking every layer below it.

/// Key type. Any non-empty string.
pub type Key = String;

/// Value type. Opaque; may be empty.
pub type Value = String;

/// What a single overlay records for a key
///
/// # Examples
///
/// ```
/// use layerkv_core::Slot;
///
/// let slot = Slot::Value("10".to_string());
/// assert_eq!(slot.as_value(), Some("10"));
/// assert!(Slot::Deleted.is_deleted());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Key set to this value in this layer
    Value(Value),
    /// Key explicitly unset in this layer
    Deleted,
}

impl Slot {
    /// The value, or `None` for a tombstone
    pub fn as_value(&self) -> Option<&str> {
        match self {
            Slot::Value(v) => Some(v.as_str()),
            Slot::Deleted => None,
        }
    }

    /// Check if this slot is a tombstone
    pub fn is_deleted(&self) -> bool {
        matches!(self, Slot::Deleted)
    }

    /// Borrow this slot
    pub fn borrowed(&self) -> SlotRef<'_> {
        match self {
            Slot::Value(v) => SlotRef::Value(v.as_str()),
            Slot::Deleted => SlotRef::Deleted,
        }
    }
}

/// Borrowed form of [`Slot`], returned by [`crate::Layer`] lookups
///
/// The base store only ever yields `SlotRef::Value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotRef<'a> {
    /// Key resolves to this value in the layer
    Value(&'a str),
    /// Key is masked by a tombstone in the layer
    Deleted,
}

impl<'a> SlotRef<'a> {
    /// The value, or `None` for a tombstone
    pub fn as_value(self) -> Option<&'a str> {
        match self {
            SlotRef::Value(v) => Some(v),
            SlotRef::Deleted => None,
        }
    }

    /// Convert to an owned [`Slot`]
    pub fn to_slot(self) -> Slot {
        match self {
            SlotRef::Value(v) => Slot::Value(v.to_string()),
            SlotRef::Deleted => Slot::Deleted,
        }
    }
}

impl From<Value> for Slot {
    fn from(value: Value) -> Self {
        Slot::Value(value)
    }
}
