//! Integration tests for Maktaba.
//!
//! The scenarios in `tests/` run the storefront and admin flows against
//! one shared in-memory store, the same wiring a local development
//! session uses. No network or hosted store is required.
//!
//! # Test Categories
//!
//! - `preorder_lifecycle` - Customer submission through admin triage and
//!   CSV export
//! - `offers_flow` - Discount management against the catalog
//! - `storefront_flows` - Cart deduplication and account order history

use chrono::{DateTime, Utc};

use maktaba_core::{Book, BookId, Price};

/// Build a catalog book for seeding the in-memory store.
#[must_use]
pub fn seed_book(title: &str, price: Price, created_at: DateTime<Utc>) -> Book {
    Book {
        id: BookId::generate(),
        title: title.to_owned(),
        price,
        is_discounted: false,
        discount_price: None,
        created_at,
    }
}
