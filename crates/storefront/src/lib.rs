//! Maktaba Storefront - customer-facing core flows.
//!
//! # Modules
//!
//! - [`cart`] - Client-held cart slot and the add-to-cart reconciler
//! - [`preorders`] - Pre-order request submission
//! - [`account`] - Order history with computed totals
//!
//! Presentation (layout, routing, images) lives elsewhere; this crate only
//! implements the rules those views call into.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod account;
pub mod cart;
pub mod preorders;
