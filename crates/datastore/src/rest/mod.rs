//! REST-backed repository adapters.
//!
//! Each adapter wraps the shared [`RestDatastore`](crate::client::RestDatastore)
//! client and maps between raw row shapes and the typed domain models.
//! Raw rows are lenient: legacy rows can miss columns, and statuses fall
//! back to their default literal through the explicit `from_stored`
//! branch.

pub mod catalog;
pub mod orders;
pub mod preorders;

pub use catalog::RestCatalog;
pub use orders::RestOrders;
pub use preorders::RestPreorders;
