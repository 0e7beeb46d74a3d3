use std::sync::Arc;

use crate::errors::SiftResult;
use crate::models::{Document, DocumentId, EntityFilter, ScoredCandidate, SparseVector};

/// Read access to the passage corpus.
///
/// Every query returns at most `k` candidates ordered best first. An empty
/// corpus yields an empty list, never an error. Unavailability surfaces as
/// `StoreError::Unavailable`.
pub trait ICorpusStore: Send + Sync {
    fn query_by_sparse(
        &self,
        vector: &SparseVector,
        k: usize,
        filter: Option<&EntityFilter>,
    ) -> SiftResult<Vec<ScoredCandidate>>;

    fn query_by_dense(
        &self,
        vector: &[f32],
        k: usize,
        filter: Option<&EntityFilter>,
    ) -> SiftResult<Vec<ScoredCandidate>>;

    /// One fused query: a sparse and a dense sub-retrieval of up to `k` each,
    /// merged by Reciprocal Rank Fusion. The filter applies to both.
    fn query_fused(
        &self,
        sparse: &SparseVector,
        dense: &[f32],
        k: usize,
        filter: Option<&EntityFilter>,
    ) -> SiftResult<Vec<ScoredCandidate>>;

    /// Fetch documents by id. Unknown ids are skipped.
    fn get_documents(&self, ids: &[DocumentId]) -> SiftResult<Vec<Arc<Document>>>;
}
