//! Maktaba Core - Shared types library.
//!
//! This crate provides common types used across all Maktaba components:
//! - `storefront` - Customer-facing catalog, cart, and pre-order flows
//! - `admin` - Back-office dashboards for pre-orders and offers
//! - `datastore` - Boundary to the hosted data store
//!
//! # Architecture
//!
//! The core crate contains only types and pure rules - no I/O, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and statuses
//! - [`models`] - Domain records stored in the hosted data store
//! - [`pricing`] - Discount percentage and discount-update validation rules

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod models;
pub mod pricing;
pub mod types;

pub use models::*;
pub use types::*;
