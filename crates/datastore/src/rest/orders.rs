//! REST adapter for the `orders` table (read-only here; orders are
//! created by the external checkout flow).

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use maktaba_core::{LineItem, Order, OrderId, OrderStatus, Price, UserId};

use crate::client::{RestDatastore, SelectQuery};
use crate::error::DatastoreError;
use crate::ports::OrderRepository;

const TABLE: &str = "orders";

#[derive(Debug, Deserialize)]
struct LineItemRow {
    #[serde(default)]
    title: String,
    #[serde(default)]
    price: Option<Price>,
}

#[derive(Debug, Deserialize)]
struct OrderRow {
    id: Uuid,
    user_id: Uuid,
    #[serde(default)]
    location: String,
    #[serde(default)]
    note: Option<String>,
    #[serde(default)]
    items: Vec<LineItemRow>,
    #[serde(default)]
    status: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<OrderRow> for Order {
    fn from(row: OrderRow) -> Self {
        Self {
            id: OrderId::new(row.id),
            user_id: UserId::new(row.user_id),
            location: row.location,
            note: row.note.filter(|n| !n.is_empty()),
            items: row
                .items
                .into_iter()
                .map(|item| LineItem {
                    title: item.title,
                    price: item.price,
                })
                .collect(),
            status: OrderStatus::from_stored(row.status.as_deref()),
            created_at: row.created_at,
        }
    }
}

/// [`OrderRepository`] backed by the hosted store.
pub struct RestOrders {
    client: Arc<RestDatastore>,
}

impl RestOrders {
    #[must_use]
    pub fn new(client: Arc<RestDatastore>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OrderRepository for RestOrders {
    async fn orders_for_user(&self, user_id: UserId) -> Result<Vec<Order>, DatastoreError> {
        let rows: Vec<OrderRow> = self
            .client
            .select(
                TABLE,
                &SelectQuery::new()
                    .eq("user_id", user_id)
                    .order_desc("created_at"),
            )
            .await?;
        Ok(rows.into_iter().map(Order::from).collect())
    }
}
