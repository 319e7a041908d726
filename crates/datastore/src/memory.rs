//! In-memory port implementations.
//!
//! One [`MemoryStore`] backs all repositories, so the storefront and
//! admin flows observe the same data in tests and local development. An
//! injectable failure flag turns every operation into a persistence
//! failure, for exercising the error paths.

use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;
use chrono::Utc;

use maktaba_core::pricing::DiscountUpdate;
use maktaba_core::{
    Book, BookId, NewPreorder, Order, Preorder, PreorderId, PreorderStatus, UserId,
};

use crate::error::DatastoreError;
use crate::ports::{AuthSession, CatalogRepository, OrderRepository, PreorderRepository};

#[derive(Debug, Default)]
struct Inner {
    preorders: Vec<Preorder>,
    books: Vec<Book>,
    orders: Vec<Order>,
    failing: bool,
}

/// A shared in-memory data store.
///
/// Cloning yields another handle to the same state.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate the catalog.
    #[must_use]
    pub fn with_books(self, books: Vec<Book>) -> Self {
        self.write().books = books;
        self
    }

    /// Pre-populate the orders table.
    #[must_use]
    pub fn with_orders(self, orders: Vec<Order>) -> Self {
        self.write().orders = orders;
        self
    }

    /// Pre-populate the pre-orders table.
    #[must_use]
    pub fn with_preorders(self, preorders: Vec<Preorder>) -> Self {
        self.write().preorders = preorders;
        self
    }

    /// Make every subsequent operation fail with a persistence error
    /// (or restore normal service).
    pub fn set_failing(&self, failing: bool) {
        self.write().failing = failing;
    }

    /// Snapshot of the stored pre-orders, in insertion order.
    #[must_use]
    pub fn preorders(&self) -> Vec<Preorder> {
        self.read().preorders.clone()
    }

    /// Snapshot of the stored books, in insertion order.
    #[must_use]
    pub fn books(&self) -> Vec<Book> {
        self.read().books.clone()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn guard(inner: &Inner) -> Result<(), DatastoreError> {
        if inner.failing {
            return Err(DatastoreError::Unavailable);
        }
        Ok(())
    }
}

#[async_trait]
impl PreorderRepository for MemoryStore {
    async fn insert(&self, preorder: &NewPreorder) -> Result<(), DatastoreError> {
        let mut inner = self.write();
        Self::guard(&inner)?;
        inner.preorders.push(Preorder {
            id: PreorderId::generate(),
            user_id: preorder.user_id,
            name: preorder.name.clone(),
            phone: preorder.phone.clone(),
            item_name: preorder.item_name.clone(),
            category: preorder.category,
            quantity: preorder.quantity,
            details: preorder.details.clone(),
            status: PreorderStatus::default(),
            created_at: Utc::now(),
        });
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Preorder>, DatastoreError> {
        let inner = self.read();
        Self::guard(&inner)?;
        let mut preorders = inner.preorders.clone();
        preorders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(preorders)
    }

    async fn set_status(
        &self,
        id: PreorderId,
        status: PreorderStatus,
    ) -> Result<(), DatastoreError> {
        let mut inner = self.write();
        Self::guard(&inner)?;
        let preorder = inner
            .preorders
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(DatastoreError::NotFound)?;
        preorder.status = status;
        Ok(())
    }

    async fn delete(&self, id: PreorderId) -> Result<(), DatastoreError> {
        let mut inner = self.write();
        Self::guard(&inner)?;
        // Deleting an absent row is a no-op, matching the REST adapter.
        inner.preorders.retain(|p| p.id != id);
        Ok(())
    }
}

#[async_trait]
impl CatalogRepository for MemoryStore {
    async fn list_books(&self) -> Result<Vec<Book>, DatastoreError> {
        let inner = self.read();
        Self::guard(&inner)?;
        let mut books = inner.books.clone();
        books.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(books)
    }

    async fn update_discount(
        &self,
        id: BookId,
        update: &DiscountUpdate,
    ) -> Result<(), DatastoreError> {
        let mut inner = self.write();
        Self::guard(&inner)?;
        let book = inner
            .books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(DatastoreError::NotFound)?;
        book.is_discounted = update.discounted;
        book.discount_price = update.discount_price;
        Ok(())
    }
}

#[async_trait]
impl OrderRepository for MemoryStore {
    async fn orders_for_user(&self, user_id: UserId) -> Result<Vec<Order>, DatastoreError> {
        let inner = self.read();
        Self::guard(&inner)?;
        let mut orders: Vec<Order> = inner
            .orders
            .iter()
            .filter(|o| o.user_id == user_id)
            .cloned()
            .collect();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(orders)
    }
}

/// Fixed-identity [`AuthSession`], for tests and local development.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticAuth(pub Option<UserId>);

impl StaticAuth {
    /// An anonymous session.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self(None)
    }

    /// A session signed in as the given user.
    #[must_use]
    pub const fn signed_in(user_id: UserId) -> Self {
        Self(Some(user_id))
    }
}

#[async_trait]
impl AuthSession for StaticAuth {
    async fn current_user(&self) -> Result<Option<UserId>, DatastoreError> {
        Ok(self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use maktaba_core::PreorderCategory;

    fn draft(name: &str) -> NewPreorder {
        NewPreorder {
            user_id: None,
            name: name.to_owned(),
            phone: "0930000000".to_owned(),
            item_name: "Dune".to_owned(),
            category: PreorderCategory::BookOriginal,
            quantity: 1,
            details: None,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_defaults() {
        let store = MemoryStore::new();
        store.insert(&draft("Rami")).await.unwrap();

        let stored = store.preorders();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].status, PreorderStatus::Pending);
    }

    #[tokio::test]
    async fn test_list_all_is_newest_first() {
        let store = MemoryStore::new();
        store.insert(&draft("first")).await.unwrap();
        store.insert(&draft("second")).await.unwrap();

        let listed = store.list_all().await.unwrap();
        assert!(listed[0].created_at >= listed[1].created_at);
    }

    #[tokio::test]
    async fn test_set_status_unknown_id_is_not_found() {
        let store = MemoryStore::new();
        let err = store
            .set_status(PreorderId::generate(), PreorderStatus::Confirmed)
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_failing_store_reports_unavailable() {
        let store = MemoryStore::new();
        store.set_failing(true);

        let err = store.insert(&draft("Rami")).await.unwrap_err();
        assert!(matches!(err, DatastoreError::Unavailable));

        store.set_failing(false);
        assert!(store.insert(&draft("Rami")).await.is_ok());
    }
}
