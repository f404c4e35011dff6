//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Most ledger mutations are silent no-ops when a key is absent; this type is
/// only surfaced by queries that must distinguish "nothing there" from a value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A requested item or supplier was not found.
    #[error("not found")]
    NotFound,

    /// The item exists but has no reorder point entry.
    #[error("reorder point not set")]
    ReorderPointNotSet,

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
