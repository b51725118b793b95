//! Layer abstraction
//!
//! The working view is a stack of layers: every open overlay, newest first,
//! followed by the base store. Resolution only needs point lookups and a
//! full scan of each layer, so that is all this trait exposes.

use crate::types::SlotRef;

/// Read access to one layer of the working view
pub trait Layer {
    /// What this layer records for `key`, if anything
    fn slot(&self, key: &str) -> Option<SlotRef<'_>>;

    /// Every key this layer mentions, in unspecified order
    fn slots(&self) -> Box<dyn Iterator<Item = (&str, SlotRef<'_>)> + '_>;

    /// Number of keys this layer mentions
    fn len(&self) -> usize;

    /// Check if this layer mentions no keys
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
