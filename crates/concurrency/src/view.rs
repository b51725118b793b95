//! Working view resolution
//!
//! The working view is what the store would hold if every open transaction
//! were committed, innermost last. Layers are consulted newest first and the
//! first layer that mentions a key decides it. A tombstone decides "absent":
//! it is recorded as resolved so deeper layers cannot resurrect the key, and
//! then dropped from the result.

use layerkv_core::{Key, Layer, SlotRef, Value};
use layerkv_storage::BaseStore;
use rustc_hash::FxHashMap;
use tracing::trace;

use crate::OverlayStack;

/// Materialized working view: every live key and its resolved value
pub type WorkingView = FxHashMap<Key, Value>;

/// Layers in resolution order: overlays innermost first, then the base store
fn layers<'a>(
    base: &'a BaseStore,
    stack: &'a OverlayStack,
) -> impl Iterator<Item = &'a dyn Layer> + 'a {
    stack
        .iter_newest_first()
        .map(|overlay| overlay as &dyn Layer)
        .chain(std::iter::once(base as &dyn Layer))
}

/// Build the full working view
///
/// With no open transaction the view is the base store itself.
pub fn resolve_view(base: &BaseStore, stack: &OverlayStack) -> WorkingView {
    if stack.is_empty() {
        return base.as_map().clone();
    }

    let mut resolved: FxHashMap<&str, SlotRef<'_>> = FxHashMap::default();
    for layer in layers(base, stack) {
        for (key, slot) in layer.slots() {
            resolved.entry(key).or_insert(slot);
        }
    }

    let view: WorkingView = resolved
        .into_iter()
        .filter_map(|(key, slot)| slot.as_value().map(|v| (key.to_string(), v.to_string())))
        .collect();

    trace!(
        depth = stack.depth(),
        live_keys = view.len(),
        "Resolved working view"
    );
    view
}

/// Resolve a single key without materializing the view
///
/// Returns the same answer as `resolve_view(base, stack).get(key)`.
pub fn resolve_key<'a>(
    base: &'a BaseStore,
    stack: &'a OverlayStack,
    key: &str,
) -> Option<&'a str> {
    layers(base, stack)
        .find_map(|layer| layer.slot(key))
        .and_then(SlotRef::as_value)
}
