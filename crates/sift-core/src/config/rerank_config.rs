use serde::{Deserialize, Serialize};

use super::defaults;

/// Cross-encoder scoring service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RerankConfig {
    /// Base URL of the scoring service.
    pub endpoint: String,
    /// Request timeout when no tighter deadline applies.
    pub timeout_ms: u64,
}

impl Default for RerankConfig {
    fn default() -> Self {
        Self {
            endpoint: defaults::DEFAULT_RERANK_ENDPOINT.to_string(),
            timeout_ms: defaults::DEFAULT_RERANK_TIMEOUT_MS,
        }
    }
}
