//! Maktaba Datastore - boundary to the hosted data store.
//!
//! The store is an external collaborator; this crate pins down its
//! interface and nothing more. It exposes:
//!
//! - [`config`] - Environment-driven connection configuration
//! - [`client`] - A generic REST client speaking the store's row API
//!   (filtered read, single read, insert, update-by-id, delete-by-id)
//! - [`ports`] - Repository traits consumed by the storefront and admin
//!   crates
//! - [`rest`] - Port implementations backed by the REST client
//! - [`memory`] - In-memory port implementations for tests and local
//!   development
//!
//! Every store call either yields a payload or a [`DatastoreError`],
//! never both. Nothing here retries; failures surface once and the caller
//! decides what to do.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod client;
pub mod config;
pub mod error;
pub mod memory;
pub mod ports;
pub mod rest;

pub use client::{RestDatastore, SelectQuery};
pub use config::{ConfigError, DatastoreConfig};
pub use error::DatastoreError;
pub use memory::{MemoryStore, StaticAuth};
pub use ports::{AuthSession, CatalogRepository, OrderRepository, PreorderRepository};
