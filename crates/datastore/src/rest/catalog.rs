//! REST adapter for the `books` table.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use maktaba_core::pricing::DiscountUpdate;
use maktaba_core::{Book, BookId, Price};

use crate::client::{RestDatastore, SelectQuery};
use crate::error::DatastoreError;
use crate::ports::CatalogRepository;

const TABLE: &str = "books";

#[derive(Debug, Deserialize)]
struct BookRow {
    id: Uuid,
    #[serde(default)]
    title: String,
    #[serde(default)]
    price: Option<Price>,
    #[serde(default)]
    is_discounted: bool,
    #[serde(default)]
    discount_price: Option<Price>,
    created_at: DateTime<Utc>,
}

impl From<BookRow> for Book {
    fn from(row: BookRow) -> Self {
        Self {
            id: BookId::new(row.id),
            title: row.title,
            price: row.price.unwrap_or_default(),
            is_discounted: row.is_discounted,
            discount_price: row.discount_price,
            created_at: row.created_at,
        }
    }
}

/// Patch applied by a discount update. `discount_price` must serialize as
/// an explicit `null` when cleared, so it is never skipped.
#[derive(Debug, Serialize)]
struct DiscountPatch {
    is_discounted: bool,
    discount_price: Option<Price>,
}

/// [`CatalogRepository`] backed by the hosted store.
pub struct RestCatalog {
    client: Arc<RestDatastore>,
}

impl RestCatalog {
    #[must_use]
    pub fn new(client: Arc<RestDatastore>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CatalogRepository for RestCatalog {
    async fn list_books(&self) -> Result<Vec<Book>, DatastoreError> {
        let rows: Vec<BookRow> = self
            .client
            .select(TABLE, &SelectQuery::new().order_desc("created_at"))
            .await?;
        Ok(rows.into_iter().map(Book::from).collect())
    }

    async fn update_discount(
        &self,
        id: BookId,
        update: &DiscountUpdate,
    ) -> Result<(), DatastoreError> {
        let patch = DiscountPatch {
            is_discounted: update.discounted,
            discount_price: update.discount_price,
        };
        self.client.update(TABLE, id.as_uuid(), &patch).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_row_with_null_price_decodes_to_zero() {
        let json = r#"{
            "id": "4f1c0d9e-2f5b-4a8a-9d1e-0b1f2c3d4e5f",
            "title": "Fourth Wing",
            "price": null,
            "is_discounted": false,
            "discount_price": null,
            "created_at": "2026-02-10T08:00:00Z"
        }"#;
        let row: BookRow = serde_json::from_str(json).unwrap();
        let book = Book::from(row);

        assert_eq!(book.price, Price::zero());
        assert!(!book.is_discounted);
    }

    #[test]
    fn test_discount_patch_serializes_explicit_null() {
        let patch = DiscountPatch {
            is_discounted: false,
            discount_price: None,
        };
        assert_eq!(
            serde_json::to_string(&patch).unwrap(),
            r#"{"is_discounted":false,"discount_price":null}"#
        );
    }

    #[test]
    fn test_numeric_price_decodes() {
        let json = r#"{
            "id": "4f1c0d9e-2f5b-4a8a-9d1e-0b1f2c3d4e5f",
            "title": "Dune",
            "price": 45000,
            "is_discounted": true,
            "discount_price": 30000,
            "created_at": "2026-02-10T08:00:00Z"
        }"#;
        let row: BookRow = serde_json::from_str(json).unwrap();
        let book = Book::from(row);

        assert_eq!(book.price, Price::new(dec!(45000)));
        assert_eq!(book.discount_percent(), Some(33));
    }
}
