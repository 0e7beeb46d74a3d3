//! # sift-retrieval
//!
//! Query-time retrieval pipeline: optional entity filtering, one of three
//! ranked retrieval strategies with filter fallback, optional cross-encoder
//! reranking, and optional graph expansion.

pub mod engine;
pub mod entity;
pub mod ranking;
pub mod search;

pub use engine::{RetrievalEngine, SearchRequest};
pub use entity::{EntityFilterBuilder, EntityMatcher};
pub use ranking::Reranker;
pub use search::{RetrievalStrategy, StrategyKind};
