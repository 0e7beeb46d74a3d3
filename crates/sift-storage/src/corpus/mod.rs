//! In-memory corpus with sparse and dense indexes.
//!
//! Brute-force scoring over every stored document: dot product for sparse
//! vectors, cosine for dense. Ties keep insertion order.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use sift_core::config::defaults::DEFAULT_RRF_K;
use sift_core::errors::SiftResult;
use sift_core::fusion::reciprocal_rank_fusion;
use sift_core::models::{Document, DocumentId, EntityFilter, ScoredCandidate, SparseVector};
use sift_core::similarity::cosine_similarity;
use sift_core::traits::{ICorpusStore, IDenseEncoder, ISparseEncoder};

struct CorpusEntry {
    document: Arc<Document>,
    sparse: SparseVector,
    dense: Vec<f32>,
}

pub struct InMemoryCorpus {
    entries: Vec<CorpusEntry>,
    by_id: HashMap<DocumentId, usize>,
    rrf_k: u32,
}

impl InMemoryCorpus {
    pub fn new() -> Self {
        Self::with_rrf_k(DEFAULT_RRF_K)
    }

    /// Corpus whose fused queries use RRF constant `rrf_k`.
    pub fn with_rrf_k(rrf_k: u32) -> Self {
        Self {
            entries: Vec::new(),
            by_id: HashMap::new(),
            rrf_k,
        }
    }

    /// Store a document with precomputed vectors. Re-inserting an id
    /// replaces the earlier entry in place.
    pub fn insert(&mut self, document: Document, sparse: SparseVector, dense: Vec<f32>) {
        let entry = CorpusEntry {
            document: Arc::new(document),
            sparse,
            dense,
        };
        match self.by_id.get(&entry.document.id) {
            Some(&idx) => self.entries[idx] = entry,
            None => {
                self.by_id
                    .insert(entry.document.id.clone(), self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    /// Encode and store a document.
    pub fn insert_encoded(
        &mut self,
        document: Document,
        sparse: &dyn ISparseEncoder,
        dense: &dyn IDenseEncoder,
    ) -> SiftResult<()> {
        let s = sparse.encode_sparse(&document.text)?;
        let d = dense.encode_dense(&document.text)?;
        self.insert(document, s, d);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Score, filter, and rank every entry. `require_overlap` drops
    /// zero-scoring entries (no shared terms).
    fn top_k<F>(
        &self,
        k: usize,
        filter: Option<&EntityFilter>,
        require_overlap: bool,
        score: F,
    ) -> Vec<ScoredCandidate>
    where
        F: Fn(&CorpusEntry) -> f64,
    {
        let mut scored: Vec<ScoredCandidate> = self
            .entries
            .iter()
            .filter(|e| filter.map_or(true, |f| f.matches(&e.document)))
            .map(|e| ScoredCandidate::new(e.document.clone(), score(e)))
            .filter(|c| !require_overlap || c.score > 0.0)
            .collect();

        // Stable sort: ties keep insertion order.
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored.truncate(k);
        scored
    }
}

impl Default for InMemoryCorpus {
    fn default() -> Self {
        Self::new()
    }
}

impl ICorpusStore for InMemoryCorpus {
    fn query_by_sparse(
        &self,
        vector: &SparseVector,
        k: usize,
        filter: Option<&EntityFilter>,
    ) -> SiftResult<Vec<ScoredCandidate>> {
        let results = self.top_k(k, filter, true, |e| vector.dot(&e.sparse));
        debug!(k, returned = results.len(), filtered = filter.is_some(), "sparse query");
        Ok(results)
    }

    fn query_by_dense(
        &self,
        vector: &[f32],
        k: usize,
        filter: Option<&EntityFilter>,
    ) -> SiftResult<Vec<ScoredCandidate>> {
        let results = self.top_k(k, filter, false, |e| cosine_similarity(vector, &e.dense));
        debug!(k, returned = results.len(), filtered = filter.is_some(), "dense query");
        Ok(results)
    }

    fn query_fused(
        &self,
        sparse: &SparseVector,
        dense: &[f32],
        k: usize,
        filter: Option<&EntityFilter>,
    ) -> SiftResult<Vec<ScoredCandidate>> {
        // Independent sub-retrievals; fusion order is fixed regardless of
        // which finishes first.
        let (lexical, semantic) = rayon::join(
            || self.query_by_sparse(sparse, k, filter),
            || self.query_by_dense(dense, k, filter),
        );
        Ok(reciprocal_rank_fusion(&[lexical?, semantic?], k, self.rrf_k))
    }

    fn get_documents(&self, ids: &[DocumentId]) -> SiftResult<Vec<Arc<Document>>> {
        Ok(ids
            .iter()
            .filter_map(|id| self.by_id.get(id))
            .map(|&idx| self.entries[idx].document.clone())
            .collect())
    }
}
