//! Status enums for pre-orders and orders.
//!
//! The hosted data store keeps statuses as nullable text columns. Both
//! enums are closed: the value space is exactly the listed variants, and
//! anything absent or unrecognized falls back to the default variant
//! through an explicit [`PreorderStatus::from_stored`] /
//! [`OrderStatus::from_stored`] branch rather than implicit string
//! comparison against a magic literal.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a customer pre-order request.
///
/// There is no transition graph: every status may overwrite every other,
/// so an administrator can always correct a mistaken update. `Pending` is
/// a real literal in the store, not an empty value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PreorderStatus {
    /// Awaiting review by an administrator.
    #[default]
    Pending,
    /// The shop confirmed it can source the requested item.
    Confirmed,
    /// The requested item cannot be sourced.
    Unavailable,
}

impl PreorderStatus {
    /// Decode a status read from the store.
    ///
    /// Missing, empty, or unrecognized values fall back to [`Self::Pending`].
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("confirmed") => Self::Confirmed,
            Some("unavailable") => Self::Unavailable,
            Some("pending") => Self::Pending,
            // Absent or unknown: legacy rows never got a status written.
            None | Some(_) => Self::Pending,
        }
    }

    /// The stored wire literal for this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Unavailable => "unavailable",
        }
    }

    /// Human-readable label, used by the dashboard and the CSV export.
    #[must_use]
    pub const fn display(&self) -> &'static str {
        match self {
            Self::Pending => "Pending review",
            Self::Confirmed => "Confirmed",
            Self::Unavailable => "Unavailable",
        }
    }
}

impl std::fmt::Display for PreorderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display())
    }
}

/// Delivery status of a placed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Being prepared or on its way.
    #[default]
    Processing,
    /// Handed over to the customer.
    Delivered,
}

impl OrderStatus {
    /// Decode a status read from the store, defaulting to [`Self::Processing`].
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("delivered") => Self::Delivered,
            None | Some(_) => Self::Processing,
        }
    }

    /// The stored wire literal for this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Processing => "processing",
            Self::Delivered => "delivered",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Processing => f.write_str("Processing"),
            Self::Delivered => f.write_str("Delivered"),
        }
    }
}

/// The fixed category tag attached to every pre-order submission.
///
/// The pre-order form only accepts original-book requests today; the tag
/// is stored anyway so other request types can be added without a
/// migration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PreorderCategory {
    /// A request for an original (non-reprint) book.
    #[default]
    BookOriginal,
}

impl PreorderCategory {
    /// The stored wire literal for this category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BookOriginal => "book_original",
        }
    }
}
