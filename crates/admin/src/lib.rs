//! Maktaba Admin - back-office core flows.
//!
//! # Modules
//!
//! - [`preorders`] - Pre-order dashboard: refreshable view, status
//!   overwrites, guarded deletion, search
//! - [`offers`] - Offers desk: discount management over the catalog
//! - [`export`] - CSV export of pre-order requests
//! - [`error`] - Shared admin error type
//!
//! All mutating flows follow the same shape: validate locally, write to
//! the store, then re-fetch the whole view. A failed write or re-fetch
//! surfaces exactly once and leaves the cached view at its
//! last-known-good value.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod error;
pub mod export;
pub mod offers;
pub mod preorders;

pub use error::AdminError;
