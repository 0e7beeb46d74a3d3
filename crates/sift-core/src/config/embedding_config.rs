use serde::{Deserialize, Serialize};

use super::defaults;

/// Encoder configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Dense vector dimensionality.
    pub dimensions: usize,
    /// Max entries in the dense embedding cache.
    pub cache_size: u64,
    /// BM25 term-frequency saturation.
    pub bm25_k1: f32,
    /// BM25 length normalization.
    pub bm25_b: f32,
    /// Average document length (tokens) assumed by length normalization.
    pub bm25_avg_len: f32,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            dimensions: defaults::DEFAULT_DIMENSIONS,
            cache_size: defaults::DEFAULT_CACHE_SIZE,
            bm25_k1: defaults::DEFAULT_BM25_K1,
            bm25_b: defaults::DEFAULT_BM25_B,
            bm25_avg_len: defaults::DEFAULT_BM25_AVG_LEN,
        }
    }
}
