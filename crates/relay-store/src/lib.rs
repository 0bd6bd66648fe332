//! Document access layer for Relay.
//!
//! A small capability interface ([`DocumentStore`]) over a collection of
//! [`Document`](relay_types::Document)s, with two implementations:
//!
//! - [`InMemoryDocumentStore`] -- holds the documents (`RwLock<Vec<_>>`)
//! - [`DocumentStoreProxy`] -- forwards every call to any other store
//!   without changing results, ordering, or errors
//!
//! # Design Rules
//!
//! 1. The store owns the authoritative copy; callers only get clones.
//! 2. Lookups are linear and first-match: with duplicate IDs the earliest
//!    upload wins.
//! 3. Search is a literal, case-sensitive substring test on title and
//!    content, returned in insertion order.
//! 4. "Not found" is absence (`None`, empty `Vec`, `false`), never an error,
//!    unless [`StoreConfig`] opts in to stricter reporting.

pub mod config;
pub mod error;
pub mod memory;
pub mod proxy;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use memory::InMemoryDocumentStore;
pub use proxy::{DocumentStoreProxy, ProxyStats};
pub use traits::DocumentStore;
