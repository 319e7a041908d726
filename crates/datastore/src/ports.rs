//! Repository port traits.
//!
//! These traits define the interface to the hosted data store as seen by
//! the storefront and admin crates. REST-backed adapters live in
//! [`crate::rest`]; in-memory adapters for tests live in
//! [`crate::memory`].

use async_trait::async_trait;

use maktaba_core::pricing::DiscountUpdate;
use maktaba_core::{Book, BookId, NewPreorder, Order, Preorder, PreorderId, PreorderStatus, UserId};

use crate::error::DatastoreError;

/// Repository for pre-order requests.
#[async_trait]
pub trait PreorderRepository: Send + Sync {
    /// Insert a validated submission. The store assigns the id, the
    /// `pending` status, and the creation timestamp.
    async fn insert(&self, preorder: &NewPreorder) -> Result<(), DatastoreError>;

    /// All requests, newest first.
    async fn list_all(&self) -> Result<Vec<Preorder>, DatastoreError>;

    /// Unconditionally overwrite a request's status.
    ///
    /// Fails with [`DatastoreError::NotFound`] if no request carries the
    /// identifier.
    async fn set_status(&self, id: PreorderId, status: PreorderStatus)
    -> Result<(), DatastoreError>;

    /// Delete a request.
    async fn delete(&self, id: PreorderId) -> Result<(), DatastoreError>;
}

/// Repository for the book catalog.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// All books, newest first.
    async fn list_books(&self) -> Result<Vec<Book>, DatastoreError>;

    /// Persist a validated discount update.
    ///
    /// Fails with [`DatastoreError::NotFound`] if no book carries the
    /// identifier.
    async fn update_discount(
        &self,
        id: BookId,
        update: &DiscountUpdate,
    ) -> Result<(), DatastoreError>;
}

/// Read-only repository for placed orders.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// A user's orders, newest first.
    async fn orders_for_user(&self, user_id: UserId) -> Result<Vec<Order>, DatastoreError>;
}

/// Authentication collaborator: who is the current user, if anyone?
#[async_trait]
pub trait AuthSession: Send + Sync {
    /// The signed-in user, or `None` for an anonymous visitor.
    async fn current_user(&self) -> Result<Option<UserId>, DatastoreError>;
}
