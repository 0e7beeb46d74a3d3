//! Entity-filter fallback shared by every strategy.

use std::collections::HashSet;

use tracing::debug;

use sift_core::errors::SiftResult;
use sift_core::models::{Deadline, EntityFilter, ScoredCandidate};

use super::{RetrievalStrategy, StrategyKind};

/// Wraps a strategy so that a filtered search returning fewer than `k`
/// results is topped up from the same search without the filter.
pub struct FilterFallback<'s> {
    inner: &'s dyn RetrievalStrategy,
}

impl<'s> FilterFallback<'s> {
    pub fn new(inner: &'s dyn RetrievalStrategy) -> Self {
        Self { inner }
    }
}

impl RetrievalStrategy for FilterFallback<'_> {
    fn kind(&self) -> StrategyKind {
        self.inner.kind()
    }

    fn execute(
        &self,
        query: &str,
        k: usize,
        filter: Option<&EntityFilter>,
        deadline: &Deadline,
    ) -> SiftResult<Vec<ScoredCandidate>> {
        let filtered = self.inner.execute(query, k, filter, deadline)?;
        if filter.is_none() || filtered.len() >= k {
            return Ok(filtered);
        }

        debug!(
            strategy = %self.kind(),
            filtered = filtered.len(),
            k,
            "filtered results short, topping up unfiltered"
        );
        let unfiltered = self.inner.execute(query, k, None, deadline)?;
        Ok(merge_fallback(filtered, unfiltered, k))
    }
}

/// `filtered` followed by unseen `unfiltered` entries, first occurrence
/// wins, truncated to `k`.
pub fn merge_fallback(
    filtered: Vec<ScoredCandidate>,
    unfiltered: Vec<ScoredCandidate>,
    k: usize,
) -> Vec<ScoredCandidate> {
    let mut seen = HashSet::new();
    let mut merged = Vec::with_capacity(k);
    for candidate in filtered.into_iter().chain(unfiltered) {
        if merged.len() >= k {
            break;
        }
        if seen.insert(candidate.id().clone()) {
            merged.push(candidate);
        }
    }
    merged
}
