//! Placed order records.
//!
//! Orders are created by the checkout process, which lives outside this
//! core; everything here treats them as read-only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{OrderId, OrderStatus, Price, UserId};

/// A purchased line item inside an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub title: String,
    /// Rows written by early checkout versions can miss the price; a
    /// missing price counts as zero when totalling.
    #[serde(default)]
    pub price: Option<Price>,
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    /// Delivery location as entered at checkout.
    pub location: String,
    pub note: Option<String>,
    pub items: Vec<LineItem>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}
