//! Unified error handling for the admin back office.

use thiserror::Error;

use maktaba_core::pricing::DiscountRuleError;
use maktaba_datastore::DatastoreError;

/// Application-level error type for admin operations.
#[derive(Debug, Error)]
pub enum AdminError {
    /// The targeted record no longer exists.
    #[error("not found: {0}")]
    NotFound(String),

    /// A discount update was rejected by the pricing rules; nothing was
    /// persisted.
    #[error("invalid discount: {0}")]
    Discount(#[from] DiscountRuleError),

    /// A data store call failed. Surfaced once; the cached view keeps its
    /// last-known-good value and the operator retries explicitly.
    #[error("data store operation failed: {0}")]
    Store(#[source] DatastoreError),
}

impl AdminError {
    /// Map a store error, turning the store's not-found signal into a
    /// [`AdminError::NotFound`] naming the target.
    pub(crate) fn from_store(target: impl Into<String>, error: DatastoreError) -> Self {
        if error.is_not_found() {
            Self::NotFound(target.into())
        } else {
            Self::Store(error)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_mapping() {
        let err = AdminError::from_store("pre-order 42", DatastoreError::NotFound);
        assert!(matches!(err, AdminError::NotFound(_)));
        assert_eq!(err.to_string(), "not found: pre-order 42");
    }

    #[test]
    fn test_other_store_errors_stay_uniform() {
        let err = AdminError::from_store("pre-order 42", DatastoreError::Unavailable);
        assert!(matches!(err, AdminError::Store(_)));
    }
}
