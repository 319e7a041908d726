//! Unified error type for data store operations.

use thiserror::Error;

/// Errors surfaced by the hosted data store boundary.
///
/// Per the error-handling policy, callers treat every variant except
/// [`DatastoreError::NotFound`] as a uniform persistence failure: it is
/// logged once at the call site, the in-memory view stays at its
/// last-known-good value, and nothing is retried automatically.
#[derive(Debug, Error)]
pub enum DatastoreError {
    /// The targeted record does not exist (signaled at mutation time).
    #[error("record not found")]
    NotFound,

    /// The HTTP request itself failed (connect, timeout, TLS, ...).
    #[error("store request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The store answered with a non-success status.
    #[error("store responded with status {0}")]
    UnexpectedStatus(reqwest::StatusCode),

    /// The response payload did not match the expected row shape.
    #[error("malformed store response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The store is unreachable (used by the in-memory adapter to model
    /// outages in tests).
    #[error("store unavailable")]
    Unavailable,
}

impl DatastoreError {
    /// Whether this error means "the record was missing", as opposed to a
    /// persistence failure.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}
