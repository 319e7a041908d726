//! Catalog book record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::pricing;
use crate::types::{BookId, Price};

/// A book in the catalog.
///
/// Invariant (enforced at update time by the pricing rules, assumed for
/// stored rows): `is_discounted == true` implies `discount_price` holds a
/// positive amount strictly below `price`; `false` implies `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub price: Price,
    pub is_discounted: bool,
    pub discount_price: Option<Price>,
    pub created_at: DateTime<Utc>,
}

impl Book {
    /// Percentage saved at the current discount price, when applicable.
    #[must_use]
    pub fn discount_percent(&self) -> Option<u32> {
        if !self.is_discounted {
            return None;
        }
        pricing::discount_percent(self.price, self.discount_price)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn book(price: Price, is_discounted: bool, discount_price: Option<Price>) -> Book {
        Book {
            id: BookId::generate(),
            title: "Fourth Wing".to_owned(),
            price,
            is_discounted,
            discount_price,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_discount_percent_when_discounted() {
        let b = book(
            Price::new(dec!(200)),
            true,
            Some(Price::new(dec!(150))),
        );
        assert_eq!(b.discount_percent(), Some(25));
    }

    #[test]
    fn test_no_percent_when_not_discounted() {
        let b = book(Price::new(dec!(200)), false, None);
        assert_eq!(b.discount_percent(), None);
    }
}
