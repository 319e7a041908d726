//! Order history for the account page.
//!
//! Orders are written by the external checkout flow; here they are only
//! read and projected into display-ready summaries.

use tracing::error;

use maktaba_core::{Order, Price, UserId};
use maktaba_datastore::{DatastoreError, OrderRepository};

/// An order together with its derived total.
///
/// The total is a projection, never written back to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSummary {
    pub order: Order,
    /// Sum of line-item prices; items with a missing price count as zero.
    pub total: Price,
}

/// Attach the computed total to an order. Pure and idempotent.
#[must_use]
pub fn with_computed_total(order: Order) -> OrderSummary {
    let total = order
        .items
        .iter()
        .map(|item| item.price.unwrap_or_default())
        .sum();
    OrderSummary { order, total }
}

/// Fetch a user's orders, newest first, each with its computed total.
///
/// # Errors
///
/// Returns [`DatastoreError`] if the fetch fails; the caller keeps
/// whatever view it already had.
pub async fn order_history<R>(
    repo: &R,
    user_id: UserId,
) -> Result<Vec<OrderSummary>, DatastoreError>
where
    R: OrderRepository + ?Sized,
{
    let orders = repo.orders_for_user(user_id).await.map_err(|e| {
        error!(error = %e, %user_id, "failed to fetch order history");
        e
    })?;
    Ok(orders.into_iter().map(with_computed_total).collect())
}
