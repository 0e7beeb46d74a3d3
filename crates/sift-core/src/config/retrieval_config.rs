use serde::{Deserialize, Serialize};

use super::defaults;

/// Retrieval orchestration configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Number of documents returned when the caller does not say.
    pub default_k: usize,
    /// Candidate pool multiplier applied to `k` when reranking.
    pub rerank_multiplier: usize,
    /// RRF smoothing constant `c`.
    pub rrf_k: u32,
    /// Strategy used when the caller does not name one.
    pub default_method: String,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            default_k: defaults::DEFAULT_K,
            rerank_multiplier: defaults::DEFAULT_RERANK_MULTIPLIER,
            rrf_k: defaults::DEFAULT_RRF_K,
            default_method: defaults::DEFAULT_METHOD.to_string(),
        }
    }
}
