//! Stack of open transactions
//!
//! Overlays are stored outermost first. Only the newest overlay receives
//! writes; the stack is empty exactly when no transaction is open.

use layerkv_storage::Overlay;

/// Ordered stack of transaction overlays
#[derive(Debug, Clone, Default)]
pub struct OverlayStack {
    overlays: Vec<Overlay>,
}

impl OverlayStack {
    /// Create an empty stack
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new innermost transaction
    pub fn push(&mut self) {
        self.overlays.push(Overlay::new());
    }

    /// Discard the innermost transaction, returning it
    pub fn pop(&mut self) -> Option<Overlay> {
        self.overlays.pop()
    }

    /// The innermost overlay, which receives all writes
    pub fn top_mut(&mut self) -> Option<&mut Overlay> {
        self.overlays.last_mut()
    }

    /// Number of open transactions
    pub fn depth(&self) -> usize {
        self.overlays.len()
    }

    /// Check if no transaction is open
    pub fn is_empty(&self) -> bool {
        self.overlays.is_empty()
    }

    /// Drop every overlay
    pub fn clear(&mut self) {
        self.overlays.clear();
    }

    /// Iterate overlays innermost first, the order resolution consults them
    pub fn iter_newest_first(&self) -> impl Iterator<Item = &Overlay> {
        self.overlays.iter().rev()
    }

    /// Iterate overlays outermost first
    pub fn iter(&self) -> impl Iterator<Item = &Overlay> {
        self.overlays.iter()
    }
}
