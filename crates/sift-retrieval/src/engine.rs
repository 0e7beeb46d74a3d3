//! RetrievalEngine: per-query orchestration.
//!
//! entity filter → strategy (with fallback) at effective k → rerank →
//! graph expansion merge → documents.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info};

use sift_core::config::SiftConfig;
use sift_core::errors::{SiftError, SiftResult};
use sift_core::models::{Deadline, Document, EntityFilter, ScoredCandidate};
use sift_core::traits::{
    ICorpusStore, ICrossEncoder, IDenseEncoder, IEntityStore, IExtractor, ISparseEncoder,
    ITripleStore,
};
use sift_graph::GraphExpander;
use sift_observability::search_span;

use crate::entity::{EntityFilterBuilder, EntityMatcher};
use crate::ranking::Reranker;
use crate::search::{
    FilterFallback, HybridStrategy, LexicalStrategy, RetrievalStrategy, SemanticStrategy,
    StrategyKind,
};

/// One search call. Unset `method` and `k` take the configured defaults.
#[derive(Debug, Clone, Default)]
pub struct SearchRequest {
    pub query: String,
    pub method: Option<StrategyKind>,
    pub k: Option<usize>,
    pub filter_by_entity: bool,
    pub do_rerank: bool,
    pub do_graph_expansion: bool,
    pub deadline: Deadline,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn method(mut self, method: StrategyKind) -> Self {
        self.method = Some(method);
        self
    }

    pub fn k(mut self, k: usize) -> Self {
        self.k = Some(k);
        self
    }

    pub fn filter_by_entity(mut self, enabled: bool) -> Self {
        self.filter_by_entity = enabled;
        self
    }

    pub fn rerank(mut self, enabled: bool) -> Self {
        self.do_rerank = enabled;
        self
    }

    pub fn graph_expansion(mut self, enabled: bool) -> Self {
        self.do_graph_expansion = enabled;
        self
    }

    pub fn deadline(mut self, deadline: Deadline) -> Self {
        self.deadline = deadline;
        self
    }
}

/// The retrieval pipeline over injected collaborators.
///
/// Corpus access and both encoders are required. Entity filtering,
/// reranking, and graph expansion need their collaborators attached with
/// the `with_*` builders; requesting a stage whose collaborators are
/// missing is a configuration error.
pub struct RetrievalEngine<'a> {
    corpus: &'a dyn ICorpusStore,
    sparse: &'a dyn ISparseEncoder,
    dense: &'a dyn IDenseEncoder,
    extractor: Option<&'a dyn IExtractor>,
    entity_store: Option<&'a dyn IEntityStore>,
    scorer: Option<&'a dyn ICrossEncoder>,
    triples: Option<&'a dyn ITripleStore>,
    config: SiftConfig,
}

impl<'a> RetrievalEngine<'a> {
    pub fn new(
        corpus: &'a dyn ICorpusStore,
        sparse: &'a dyn ISparseEncoder,
        dense: &'a dyn IDenseEncoder,
        config: SiftConfig,
    ) -> Self {
        Self {
            corpus,
            sparse,
            dense,
            extractor: None,
            entity_store: None,
            scorer: None,
            triples: None,
            config,
        }
    }

    /// Extraction service used for entity filtering and graph expansion.
    pub fn with_extractor(mut self, extractor: &'a dyn IExtractor) -> Self {
        self.extractor = Some(extractor);
        self
    }

    pub fn with_entity_store(mut self, store: &'a dyn IEntityStore) -> Self {
        self.entity_store = Some(store);
        self
    }

    pub fn with_cross_encoder(mut self, scorer: &'a dyn ICrossEncoder) -> Self {
        self.scorer = Some(scorer);
        self
    }

    pub fn with_triple_store(mut self, triples: &'a dyn ITripleStore) -> Self {
        self.triples = Some(triples);
        self
    }

    pub fn config(&self) -> &SiftConfig {
        &self.config
    }

    /// String-typed entry point. `method` must name a known strategy.
    pub fn search_str(
        &self,
        query: &str,
        method: &str,
        k: usize,
        filter_by_entity: bool,
        do_rerank: bool,
        do_graph_expansion: bool,
    ) -> SiftResult<Vec<Arc<Document>>> {
        let method: StrategyKind = method.parse()?;
        self.search(
            &SearchRequest::new(query)
                .method(method)
                .k(k)
                .filter_by_entity(filter_by_entity)
                .rerank(do_rerank)
                .graph_expansion(do_graph_expansion),
        )
    }

    /// Run the full pipeline for one request.
    pub fn search(&self, request: &SearchRequest) -> SiftResult<Vec<Arc<Document>>> {
        let method = match request.method {
            Some(method) => method,
            None => self.config.retrieval.default_method.parse()?,
        };
        let k = request.k.unwrap_or(self.config.retrieval.default_k);
        let query = request.query.as_str();
        let deadline = &request.deadline;

        let span = search_span!(query, method, k);
        let _guard = span.enter();

        if k == 0 {
            return Ok(Vec::new());
        }

        // Stage 1: entity filter.
        let filter = if request.filter_by_entity {
            self.entity_filter()?.build(query, deadline)?
        } else {
            None
        };

        // Stage 2: primary retrieval, widened when a rerank follows.
        let effective_k = if request.do_rerank {
            k.saturating_mul(self.config.retrieval.rerank_multiplier)
        } else {
            k
        };
        let pool = self.run_strategy(method, query, effective_k, filter.as_ref(), deadline)?;
        debug!(
            candidates = pool.len(),
            effective_k,
            filtered = filter.is_some(),
            "primary retrieval complete"
        );

        // Stage 3: rerank.
        let mut ranked = if request.do_rerank {
            let scorer = self.scorer.ok_or_else(|| missing("rerank", "cross encoder"))?;
            Reranker::new(scorer).rerank(query, pool.clone(), deadline)?
        } else {
            pool.clone()
        };
        ranked.truncate(k);

        // Stage 4: graph expansion over the full pool.
        let expansion = if request.do_graph_expansion {
            let extractor = self
                .extractor
                .ok_or_else(|| missing("graph expansion", "extractor"))?;
            let triples = self
                .triples
                .ok_or_else(|| missing("graph expansion", "triple store"))?;
            GraphExpander::new(extractor, triples, self.corpus, self.dense, self.config.graph.clone())
                .expand(query, &pool, deadline)?
        } else {
            Vec::new()
        };

        let documents = merge_expansion(ranked, expansion);
        info!(
            results = documents.len(),
            method = %method,
            reranked = request.do_rerank,
            expanded = request.do_graph_expansion,
            "search complete"
        );
        Ok(documents)
    }

    fn entity_filter(&self) -> SiftResult<EntityFilterBuilder<'a>> {
        let extractor = self
            .extractor
            .ok_or_else(|| missing("entity filtering", "extractor"))?;
        let store = self
            .entity_store
            .ok_or_else(|| missing("entity filtering", "entity store"))?;
        Ok(EntityFilterBuilder::new(
            extractor,
            EntityMatcher::new(store, self.config.entity.similarity_threshold),
            self.config.entity.entity_types.clone(),
        ))
    }

    fn run_strategy(
        &self,
        method: StrategyKind,
        query: &str,
        k: usize,
        filter: Option<&EntityFilter>,
        deadline: &Deadline,
    ) -> SiftResult<Vec<ScoredCandidate>> {
        let strategy: Box<dyn RetrievalStrategy + '_> = match method {
            StrategyKind::Lexical => Box::new(LexicalStrategy::new(self.sparse, self.corpus)),
            StrategyKind::Semantic => Box::new(SemanticStrategy::new(self.dense, self.corpus)),
            StrategyKind::Hybrid => {
                Box::new(HybridStrategy::new(self.sparse, self.dense, self.corpus))
            }
        };
        FilterFallback::new(strategy.as_ref()).execute(query, k, filter, deadline)
    }
}

/// Ranked documents followed by expansion documents not already present.
///
/// The expansion is appended in full, so the result can exceed the ranked
/// list's `k`.
pub fn merge_expansion(
    ranked: Vec<ScoredCandidate>,
    expansion: Vec<Arc<Document>>,
) -> Vec<Arc<Document>> {
    let mut seen = HashSet::new();
    ranked
        .into_iter()
        .map(|c| c.document)
        .chain(expansion)
        .filter(|d| seen.insert(d.id.clone()))
        .collect()
}

fn missing(stage: &str, collaborator: &str) -> SiftError {
    SiftError::Configuration {
        reason: format!("{stage} requested but no {collaborator} is attached"),
    }
}
