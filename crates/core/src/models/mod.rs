//! Domain records persisted in the hosted data store.
//!
//! These are the decoded, typed shapes; the raw row formats live with the
//! datastore adapters.

pub mod book;
pub mod order;
pub mod preorder;

pub use book::Book;
pub use order::{LineItem, Order};
pub use preorder::{NewPreorder, Preorder};
