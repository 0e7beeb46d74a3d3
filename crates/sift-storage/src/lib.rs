//! # sift-storage
//!
//! Reference implementations of the store contracts the retrieval core
//! consumes: an in-memory vector corpus, a petgraph-backed triple store,
//! and a SQLite canonical entity store. Ingestion happens through `&mut`
//! builders; once shared, every store is read-only.

pub mod corpus;
pub mod entities;
pub mod triples;

pub use corpus::InMemoryCorpus;
pub use entities::SqliteEntityStore;
pub use triples::GraphTripleStore;

use sift_core::errors::{SiftError, StoreError};

/// Map a backend failure to `StoreError::Unavailable`.
pub(crate) fn to_store_err(store: &str, operation: &str, reason: impl ToString) -> SiftError {
    StoreError::unavailable(store, operation, reason).into()
}
