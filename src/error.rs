//! Error types for the page behavior layer.
//!
//! Nothing here is fatal. Every variant is logged by the effect applier and
//! the affected feature degrades to inactive.

/// Failures reported by a [`crate::effect::Host`] while applying effects.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    /// The preference store rejected a write (quota, privacy mode, disabled storage).
    #[error("preference store write failed for '{key}': {reason}")]
    Storage { key: String, reason: String },

    /// A DOM call threw.
    #[error("dom operation failed: {0}")]
    Dom(String),
}
