use crate::errors::SiftResult;
use crate::models::SparseVector;

/// Maps text to a dense vector. Deterministic for a given model version.
pub trait IDenseEncoder: Send + Sync {
    fn encode_dense(&self, text: &str) -> SiftResult<Vec<f32>>;

    /// Encode a batch. Output is the same length and order as `texts`.
    fn encode_dense_batch(&self, texts: &[String]) -> SiftResult<Vec<Vec<f32>>> {
        texts.iter().map(|t| self.encode_dense(t)).collect()
    }

    /// Dimensionality of produced vectors.
    fn dimensions(&self) -> usize;

    /// Human-readable model name.
    fn name(&self) -> &str;
}

/// Maps text to a sparse term-weight vector.
pub trait ISparseEncoder: Send + Sync {
    fn encode_sparse(&self, text: &str) -> SiftResult<SparseVector>;

    /// Encode a batch. Output is the same length and order as `texts`.
    fn encode_sparse_batch(&self, texts: &[String]) -> SiftResult<Vec<SparseVector>> {
        texts.iter().map(|t| self.encode_sparse(t)).collect()
    }

    fn name(&self) -> &str;
}
