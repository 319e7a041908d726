//! Customer pre-order request records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{PreorderCategory, PreorderId, PreorderStatus, UserId};

/// A stored pre-order request.
///
/// Created by a customer submission, mutated only by administrator status
/// overwrites, destroyed only by explicit administrator deletion. The
/// creation timestamp is server-assigned and immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preorder {
    pub id: PreorderId,
    /// Anonymous submissions carry no owning user.
    pub user_id: Option<UserId>,
    pub name: String,
    pub phone: String,
    pub item_name: String,
    pub category: PreorderCategory,
    pub quantity: u32,
    pub details: Option<String>,
    pub status: PreorderStatus,
    pub created_at: DateTime<Utc>,
}

/// A validated pre-order submission, ready to insert.
///
/// Produced by the storefront submission flow: fields are already trimmed
/// and non-empty, the quantity is positive, and the category is fixed.
/// The store assigns the id, the `pending` status, and the timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPreorder {
    pub user_id: Option<UserId>,
    pub name: String,
    pub phone: String,
    pub item_name: String,
    pub category: PreorderCategory,
    pub quantity: u32,
    pub details: Option<String>,
}
