//! Offers desk: discount management over the catalog.
//!
//! Mirrors the dashboard shape: a wholesale-refreshed snapshot of the
//! catalog, a local filter, and a validated update path. A rejected
//! discount never reaches the store.

use std::sync::Arc;

use tracing::error;

use maktaba_core::pricing::{self, DiscountUpdate};
use maktaba_core::{Book, BookId};
use maktaba_datastore::CatalogRepository;

use crate::error::AdminError;

/// The administrator's view over the catalog's discounts.
pub struct OffersDesk<R: CatalogRepository> {
    repo: Arc<R>,
    books: Vec<Book>,
}

impl<R: CatalogRepository> OffersDesk<R> {
    /// Create a desk with an empty snapshot; call [`Self::refresh`] to
    /// load it.
    #[must_use]
    pub fn new(repo: Arc<R>) -> Self {
        Self {
            repo,
            books: Vec::new(),
        }
    }

    /// The current snapshot, newest first.
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Re-fetch the whole snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Store`] on failure; the previous snapshot is
    /// kept as-is.
    pub async fn refresh(&mut self) -> Result<(), AdminError> {
        let books = self.repo.list_books().await.map_err(|e| {
            error!(error = %e, "failed to fetch catalog");
            AdminError::Store(e)
        })?;
        self.books = books;
        Ok(())
    }

    /// Filter the snapshot by title substring (case-insensitive; empty
    /// matches all) and optionally to discounted books only. Order is
    /// preserved.
    #[must_use]
    pub fn filter(&self, query: &str, only_discounted: bool) -> Vec<&Book> {
        let needle = query.trim().to_lowercase();
        self.books
            .iter()
            .filter(|book| {
                let text_match = needle.is_empty() || book.title.to_lowercase().contains(&needle);
                text_match && (!only_discounted || book.is_discounted)
            })
            .collect()
    }

    /// Validate a discount update against the book's current price and
    /// persist it, then refresh the snapshot.
    ///
    /// Disabling a discount always clears the stored discount price.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Discount`] if the pricing rules reject the
    /// update (nothing is persisted), [`AdminError::NotFound`] if the
    /// book is gone, or [`AdminError::Store`] on store failure — in every
    /// failure case the snapshot keeps its last-known-good value.
    pub async fn apply_discount(
        &mut self,
        id: BookId,
        update: DiscountUpdate,
    ) -> Result<(), AdminError> {
        let book = self
            .books
            .iter()
            .find(|b| b.id == id)
            .ok_or_else(|| AdminError::NotFound(format!("book {id}")))?;

        let normalized = pricing::validate_discount_update(book.price, update)?;

        self.repo
            .update_discount(id, &normalized)
            .await
            .map_err(|e| {
                error!(error = %e, %id, "failed to update discount");
                AdminError::from_store(format!("book {id}"), e)
            })?;
        self.refresh().await
    }
}
