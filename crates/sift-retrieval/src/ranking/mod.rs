//! Cross-encoder reranking of the candidate pool.

pub mod reranker;

pub use reranker::Reranker;
