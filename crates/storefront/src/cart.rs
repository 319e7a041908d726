//! Client-held cart and the add-to-cart reconciler.
//!
//! The cart lives in a single browser-session-scoped key-value slot,
//! persisted as one serialized sequence and rewritten whole on every
//! mutation. The slot is deliberately unsynchronized: within one session
//! the execution model is cooperative, so two additions cannot interleave
//! mid-write. [`CartStore`] makes that read-modify-write contract explicit
//! and injectable instead of hiding it behind ambient global access.
//!
//! Deduplication rules:
//! - plain catalog books are unique per identifier; re-adding one is a
//!   no-op reported as [`AddOutcome::AlreadyPresent`];
//! - series bundles append unconditionally, each addition being a
//!   separate purchase intent.

use std::sync::{Arc, PoisonError, RwLock};

use serde::{Deserialize, Serialize};

use maktaba_core::{BookId, Price, SeriesId};

/// Identifier of a cart entry.
///
/// Series entries are namespaced under a `series-` prefix on the wire so
/// they can never collide with a plain book identifier; here the enum
/// makes that collision impossible by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum CartEntryId {
    Book(BookId),
    Series(SeriesId),
}

impl std::fmt::Display for CartEntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Book(id) => write!(f, "{id}"),
            Self::Series(id) => write!(f, "series-{id}"),
        }
    }
}

/// One line in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    pub id: CartEntryId,
    pub title: String,
    pub price: Price,
}

/// An item a view wants to add to the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartItem {
    /// A plain catalog book; deduplicated by identifier.
    Book {
        id: BookId,
        title: String,
        price: Price,
    },
    /// A series bundle; always appended.
    Series {
        id: SeriesId,
        title: String,
        price: Price,
    },
}

impl CartItem {
    fn into_entry(self) -> CartEntry {
        match self {
            Self::Book { id, title, price } => CartEntry {
                id: CartEntryId::Book(id),
                title,
                price,
            },
            Self::Series { id, title, price } => CartEntry {
                id: CartEntryId::Series(id),
                title,
                price,
            },
        }
    }
}

/// Result of an add-to-cart action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The entry was appended and the slot rewritten.
    Added,
    /// A book with the same identifier was already in the cart; the slot
    /// was left untouched.
    AlreadyPresent,
}

/// Errors from the cart slot.
#[derive(Debug, thiserror::Error)]
pub enum CartError {
    /// The slot contents could not be (de)serialized.
    #[error("cart slot serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// The cart's key-value slot: load the whole sequence, save the whole
/// sequence.
pub trait CartStore {
    /// Read the current cart. An empty or never-written slot is an empty
    /// cart.
    ///
    /// # Errors
    ///
    /// Returns [`CartError`] if the slot contents are corrupt.
    fn load(&self) -> Result<Vec<CartEntry>, CartError>;

    /// Overwrite the slot with the given sequence.
    ///
    /// # Errors
    ///
    /// Returns [`CartError`] if the sequence cannot be serialized.
    fn save(&self, entries: &[CartEntry]) -> Result<(), CartError>;
}

/// Session-scoped in-memory slot holding the serialized cart, the direct
/// analog of the browser's local storage entry.
#[derive(Debug, Clone, Default)]
pub struct SessionCartStore {
    slot: Arc<RwLock<Option<String>>>,
}

impl SessionCartStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartStore for SessionCartStore {
    fn load(&self) -> Result<Vec<CartEntry>, CartError> {
        let slot = self.slot.read().unwrap_or_else(PoisonError::into_inner);
        match slot.as_deref() {
            Some(raw) => Ok(serde_json::from_str(raw)?),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, entries: &[CartEntry]) -> Result<(), CartError> {
        let raw = serde_json::to_string(entries)?;
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = Some(raw);
        Ok(())
    }
}

/// Merge an item into the cart, enforcing the per-variant deduplication
/// rules, and persist the updated sequence back to the slot.
///
/// # Errors
///
/// Returns [`CartError`] if the slot cannot be read or rewritten.
pub fn add_to_cart(store: &dyn CartStore, item: CartItem) -> Result<AddOutcome, CartError> {
    let mut entries = store.load()?;

    if let CartItem::Book { id, .. } = &item {
        let id = CartEntryId::Book(*id);
        if entries.iter().any(|entry| entry.id == id) {
            return Ok(AddOutcome::AlreadyPresent);
        }
    }

    entries.push(item.into_entry());
    store.save(&entries)?;
    Ok(AddOutcome::Added)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn book(id: BookId, title: &str) -> CartItem {
        CartItem::Book {
            id,
            title: title.to_owned(),
            price: Price::new(dec!(25000)),
        }
    }

    fn series(id: SeriesId, title: &str) -> CartItem {
        CartItem::Series {
            id,
            title: title.to_owned(),
            price: Price::new(dec!(90000)),
        }
    }

    #[test]
    fn test_add_book_to_empty_cart() {
        let store = SessionCartStore::new();
        let id = BookId::generate();

        let outcome = add_to_cart(&store, book(id, "Dune")).unwrap();
        assert_eq!(outcome, AddOutcome::Added);
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn test_duplicate_book_is_a_no_op() {
        let store = SessionCartStore::new();
        let id = BookId::generate();

        add_to_cart(&store, book(id, "Dune")).unwrap();
        let outcome = add_to_cart(&store, book(id, "Dune")).unwrap();

        assert_eq!(outcome, AddOutcome::AlreadyPresent);
        // Length invariant: the cart is unchanged.
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn test_distinct_books_both_added() {
        let store = SessionCartStore::new();
        add_to_cart(&store, book(BookId::generate(), "Dune")).unwrap();
        add_to_cart(&store, book(BookId::generate(), "Fourth Wing")).unwrap();
        assert_eq!(store.load().unwrap().len(), 2);
    }

    #[test]
    fn test_series_never_deduplicates() {
        let store = SessionCartStore::new();
        let id = SeriesId::generate();

        assert_eq!(
            add_to_cart(&store, series(id, "Naruto Box Set")).unwrap(),
            AddOutcome::Added
        );
        assert_eq!(
            add_to_cart(&store, series(id, "Naruto Box Set")).unwrap(),
            AddOutcome::Added
        );
        assert_eq!(store.load().unwrap().len(), 2);
    }

    #[test]
    fn test_series_id_cannot_collide_with_book_id() {
        let store = SessionCartStore::new();
        let raw = uuid::Uuid::new_v4();

        add_to_cart(&store, book(BookId::new(raw), "Dune")).unwrap();
        let outcome = add_to_cart(
            &store,
            series(SeriesId::new(raw), "Dune Trilogy"),
        )
        .unwrap();

        assert_eq!(outcome, AddOutcome::Added);
        assert_eq!(store.load().unwrap().len(), 2);
    }

    #[test]
    fn test_series_display_is_namespaced() {
        let raw = uuid::Uuid::new_v4();
        assert_eq!(
            CartEntryId::Series(SeriesId::new(raw)).to_string(),
            format!("series-{raw}")
        );
        assert_eq!(CartEntryId::Book(BookId::new(raw)).to_string(), raw.to_string());
    }

    #[test]
    fn test_slot_roundtrip_preserves_order() {
        let store = SessionCartStore::new();
        let first = BookId::generate();
        let second = BookId::generate();

        add_to_cart(&store, book(first, "A")).unwrap();
        add_to_cart(&store, book(second, "B")).unwrap();

        let entries = store.load().unwrap();
        assert_eq!(entries[0].id, CartEntryId::Book(first));
        assert_eq!(entries[1].id, CartEntryId::Book(second));
    }
}
