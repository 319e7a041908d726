//! Discount rules for catalog items.
//!
//! Two pure operations: computing the display percentage for a discounted
//! price, and validating an administrator's discount update before it may
//! be persisted. Neither touches the store; callers must not persist a
//! rejected update.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::types::Price;

/// Errors that reject a [`DiscountUpdate`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DiscountRuleError {
    /// A discount was enabled without a positive discount price.
    #[error("a discounted item requires a positive discount price")]
    MissingDiscountPrice,
    /// The discount price does not undercut the original price.
    #[error("discount price {discount_price} must be strictly below the original price {price}")]
    NotBelowPrice {
        /// The item's original price.
        price: Price,
        /// The rejected discount price.
        discount_price: Price,
    },
}

/// An administrator's draft change to an item's discount state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscountUpdate {
    /// Whether the discount is enabled.
    pub discounted: bool,
    /// The offer price, meaningful only while `discounted` is true.
    pub discount_price: Option<Price>,
}

/// Percentage saved when buying at `discount_price` instead of `price`.
///
/// Returns `round((price - discount_price) / price * 100)` using
/// round-half-away-from-zero. Returns `None` (not zero) whenever the
/// discount is not applicable: price or discount price missing or not
/// positive, or a discount price that does not undercut the price.
#[must_use]
pub fn discount_percent(price: Price, discount_price: Option<Price>) -> Option<u32> {
    let discount_price = discount_price.unwrap_or_default();
    if !price.is_positive() || !discount_price.is_positive() || discount_price >= price {
        return None;
    }

    let saved = price.amount() - discount_price.amount();
    let percent = (saved / price.amount() * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    percent.to_u32()
}

/// Validate a discount update against the item's current price.
///
/// Disabling the discount always succeeds and forces the discount price to
/// `None`, regardless of what was entered. Enabling it requires a positive
/// discount price strictly below the original price (when the price is
/// known and positive).
///
/// # Errors
///
/// Returns [`DiscountRuleError::MissingDiscountPrice`] if the discount is
/// enabled without a positive discount price, and
/// [`DiscountRuleError::NotBelowPrice`] if the discount price is not
/// strictly below the original price.
pub fn validate_discount_update(
    price: Price,
    update: DiscountUpdate,
) -> Result<DiscountUpdate, DiscountRuleError> {
    if !update.discounted {
        return Ok(DiscountUpdate {
            discounted: false,
            discount_price: None,
        });
    }

    let discount_price = update
        .discount_price
        .filter(Price::is_positive)
        .ok_or(DiscountRuleError::MissingDiscountPrice)?;

    if price.is_positive() && discount_price >= price {
        return Err(DiscountRuleError::NotBelowPrice {
            price,
            discount_price,
        });
    }

    Ok(DiscountUpdate {
        discounted: true,
        discount_price: Some(discount_price),
    })
}
