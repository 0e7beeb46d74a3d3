//! # sift-embeddings
//!
//! Encoders the retrieval core consumes through `IDenseEncoder` and
//! `ISparseEncoder`, a cache wrapper for repeated dense encodes, and the
//! HTTP client for the cross-encoder scoring service.

pub mod cache;
pub mod providers;
pub mod rerank_client;

pub use cache::CachedDenseEncoder;
pub use providers::{Bm25SparseEncoder, HashingDenseEncoder};
pub use rerank_client::RemoteCrossEncoder;
