//! Ranked retrieval strategies and the shared entity-filter fallback.

pub mod fallback;
pub mod strategy;

pub use fallback::FilterFallback;
pub use strategy::{HybridStrategy, LexicalStrategy, SemanticStrategy, StrategyKind};

use sift_core::errors::SiftResult;
use sift_core::models::{Deadline, EntityFilter, ScoredCandidate};

/// A ranked retrieval over the corpus.
///
/// Returns at most `k` candidates, best first. An empty corpus is an empty
/// list, not an error.
pub trait RetrievalStrategy: Send + Sync {
    fn kind(&self) -> StrategyKind;

    fn execute(
        &self,
        query: &str,
        k: usize,
        filter: Option<&EntityFilter>,
        deadline: &Deadline,
    ) -> SiftResult<Vec<ScoredCandidate>>;
}
