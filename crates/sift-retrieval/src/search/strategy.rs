use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use sift_core::errors::{RetrievalError, SiftError, SiftResult};
use sift_core::models::{Deadline, EntityFilter, ScoredCandidate};
use sift_core::traits::{ICorpusStore, IDenseEncoder, ISparseEncoder};
use sift_observability::strategy_span;

use super::RetrievalStrategy;

/// The closed set of retrieval strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// Sparse term-weight similarity.
    #[serde(alias = "bm25")]
    Lexical,
    /// Dense embedding cosine similarity.
    #[serde(alias = "dense")]
    Semantic,
    /// Lexical and semantic fused by Reciprocal Rank Fusion.
    Hybrid,
}

impl StrategyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Lexical => "lexical",
            StrategyKind::Semantic => "semantic",
            StrategyKind::Hybrid => "hybrid",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = SiftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bm25" | "lexical" => Ok(StrategyKind::Lexical),
            "dense" | "semantic" => Ok(StrategyKind::Semantic),
            "hybrid" => Ok(StrategyKind::Hybrid),
            _ => Err(SiftError::UnknownStrategy {
                name: s.to_string(),
            }),
        }
    }
}

fn wrap(kind: StrategyKind) -> impl FnOnce(SiftError) -> SiftError {
    move |e| RetrievalError::strategy_failed(kind.as_str(), e).into()
}

/// Top-k by sparse vector similarity.
pub struct LexicalStrategy<'a> {
    encoder: &'a dyn ISparseEncoder,
    store: &'a dyn ICorpusStore,
}

impl<'a> LexicalStrategy<'a> {
    pub fn new(encoder: &'a dyn ISparseEncoder, store: &'a dyn ICorpusStore) -> Self {
        Self { encoder, store }
    }
}

impl RetrievalStrategy for LexicalStrategy<'_> {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Lexical
    }

    fn execute(
        &self,
        query: &str,
        k: usize,
        filter: Option<&EntityFilter>,
        deadline: &Deadline,
    ) -> SiftResult<Vec<ScoredCandidate>> {
        let span = strategy_span!(self.kind(), k, filter.is_some());
        let _guard = span.enter();
        if k == 0 {
            return Ok(Vec::new());
        }

        deadline.check("strategy.encode").map_err(wrap(self.kind()))?;
        let vector = self.encoder.encode_sparse(query).map_err(wrap(self.kind()))?;
        deadline.check("strategy.query").map_err(wrap(self.kind()))?;
        let results = self
            .store
            .query_by_sparse(&vector, k, filter)
            .map_err(wrap(self.kind()))?;
        debug!(results = results.len(), "lexical retrieval");
        Ok(results)
    }
}

/// Top-k by dense embedding cosine similarity.
pub struct SemanticStrategy<'a> {
    encoder: &'a dyn IDenseEncoder,
    store: &'a dyn ICorpusStore,
}

impl<'a> SemanticStrategy<'a> {
    pub fn new(encoder: &'a dyn IDenseEncoder, store: &'a dyn ICorpusStore) -> Self {
        Self { encoder, store }
    }
}

impl RetrievalStrategy for SemanticStrategy<'_> {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Semantic
    }

    fn execute(
        &self,
        query: &str,
        k: usize,
        filter: Option<&EntityFilter>,
        deadline: &Deadline,
    ) -> SiftResult<Vec<ScoredCandidate>> {
        let span = strategy_span!(self.kind(), k, filter.is_some());
        let _guard = span.enter();
        if k == 0 {
            return Ok(Vec::new());
        }

        deadline.check("strategy.encode").map_err(wrap(self.kind()))?;
        let vector = self.encoder.encode_dense(query).map_err(wrap(self.kind()))?;
        deadline.check("strategy.query").map_err(wrap(self.kind()))?;
        let results = self
            .store
            .query_by_dense(&vector, k, filter)
            .map_err(wrap(self.kind()))?;
        debug!(results = results.len(), "semantic retrieval");
        Ok(results)
    }
}

/// One fused query: sparse and dense sub-retrievals merged by RRF in the store.
pub struct HybridStrategy<'a> {
    sparse: &'a dyn ISparseEncoder,
    dense: &'a dyn IDenseEncoder,
    store: &'a dyn ICorpusStore,
}

impl<'a> HybridStrategy<'a> {
    pub fn new(
        sparse: &'a dyn ISparseEncoder,
        dense: &'a dyn IDenseEncoder,
        store: &'a dyn ICorpusStore,
    ) -> Self {
        Self {
            sparse,
            dense,
            store,
        }
    }
}

impl RetrievalStrategy for HybridStrategy<'_> {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Hybrid
    }

    fn execute(
        &self,
        query: &str,
        k: usize,
        filter: Option<&EntityFilter>,
        deadline: &Deadline,
    ) -> SiftResult<Vec<ScoredCandidate>> {
        let span = strategy_span!(self.kind(), k, filter.is_some());
        let _guard = span.enter();
        if k == 0 {
            return Ok(Vec::new());
        }

        deadline.check("strategy.encode").map_err(wrap(self.kind()))?;
        let sparse = self.sparse.encode_sparse(query).map_err(wrap(self.kind()))?;
        let dense = self.dense.encode_dense(query).map_err(wrap(self.kind()))?;
        deadline.check("strategy.query").map_err(wrap(self.kind()))?;
        let results = self
            .store
            .query_fused(&sparse, &dense, k, filter)
            .map_err(wrap(self.kind()))?;
        debug!(results = results.len(), "hybrid retrieval");
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_aliases() {
        assert_eq!("bm25".parse::<StrategyKind>().unwrap(), StrategyKind::Lexical);
        assert_eq!("Lexical".parse::<StrategyKind>().unwrap(), StrategyKind::Lexical);
        assert_eq!("DENSE".parse::<StrategyKind>().unwrap(), StrategyKind::Semantic);
        assert_eq!("semantic".parse::<StrategyKind>().unwrap(), StrategyKind::Semantic);
        assert_eq!(" hybrid ".parse::<StrategyKind>().unwrap(), StrategyKind::Hybrid);
    }

    #[test]
    fn unknown_name_is_a_configuration_error() {
        let err = "splade".parse::<StrategyKind>().unwrap_err();
        assert!(matches!(err, SiftError::UnknownStrategy { ref name } if name == "splade"));
        assert!(!err.is_transient());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for kind in [StrategyKind::Lexical, StrategyKind::Semantic, StrategyKind::Hybrid] {
            assert_eq!(kind.to_string().parse::<StrategyKind>().unwrap(), kind);
        }
    }
}
