//! Results produced by the executor.

use layerkv_core::Value;

/// Result of executing a [`crate::Command`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// Operation succeeded with nothing to report
    Unit,
    /// A value lookup; `None` when the key is absent
    Maybe(Option<Value>),
    /// A key count
    Count(usize),
}
