//! Pre-order request submission.
//!
//! The pre-order form covers original books only: the customer names a
//! book the shop does not stock, and the shop tries to source it.
//! Validation is local and runs before any store call; a submission that
//! reaches the store is already trimmed, non-empty, and carries the fixed
//! category tag.

use core::fmt;

use tracing::error;

use maktaba_core::{NewPreorder, PreorderCategory};
use maktaba_datastore::{AuthSession, DatastoreError, PreorderRepository};

/// A required submission field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreorderField {
    Name,
    Phone,
    ItemName,
}

impl fmt::Display for PreorderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => f.write_str("name"),
            Self::Phone => f.write_str("phone"),
            Self::ItemName => f.write_str("item name"),
        }
    }
}

/// Rejection of a submission with one or more missing required fields.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub struct ValidationError {
    /// Every field that was empty after trimming.
    pub missing: Vec<PreorderField>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "missing required field(s): ")?;
        for (i, field) in self.missing.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{field}")?;
        }
        Ok(())
    }
}

/// Errors from a pre-order submission.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The draft was rejected locally; no store call was made.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The store rejected or never received the insert.
    #[error("could not save the pre-order request")]
    Store(#[source] DatastoreError),
}

/// The raw form contents, exactly as entered.
#[derive(Debug, Clone, Default)]
pub struct PreorderDraft {
    pub name: String,
    pub phone: String,
    pub item_name: String,
    /// Zero is treated as "not filled in" and becomes 1.
    pub quantity: u32,
    pub details: String,
}

/// Validate a draft and insert it as a new `pending` request.
///
/// The owning user is resolved from the session; anonymous submissions
/// are allowed and simply carry no user reference. Status and creation
/// timestamp are assigned by the store.
///
/// # Errors
///
/// Returns [`SubmitError::Validation`] listing every missing required
/// field (checked before any network call), or [`SubmitError::Store`] if
/// the session lookup or the insert fails.
pub async fn submit<R, A>(repo: &R, auth: &A, draft: &PreorderDraft) -> Result<(), SubmitError>
where
    R: PreorderRepository + ?Sized,
    A: AuthSession + ?Sized,
{
    let name = draft.name.trim();
    let phone = draft.phone.trim();
    let item_name = draft.item_name.trim();

    let mut missing = Vec::new();
    if name.is_empty() {
        missing.push(PreorderField::Name);
    }
    if phone.is_empty() {
        missing.push(PreorderField::Phone);
    }
    if item_name.is_empty() {
        missing.push(PreorderField::ItemName);
    }
    if !missing.is_empty() {
        return Err(ValidationError { missing }.into());
    }

    let user_id = auth.current_user().await.map_err(|e| {
        error!(error = %e, "failed to resolve the current user");
        SubmitError::Store(e)
    })?;

    let details = draft.details.trim();
    let preorder = NewPreorder {
        user_id,
        name: name.to_owned(),
        phone: phone.to_owned(),
        item_name: item_name.to_owned(),
        category: PreorderCategory::BookOriginal,
        quantity: draft.quantity.max(1),
        details: (!details.is_empty()).then(|| details.to_owned()),
    };

    repo.insert(&preorder).await.map_err(|e| {
        error!(error = %e, "failed to insert pre-order request");
        SubmitError::Store(e)
    })
}
