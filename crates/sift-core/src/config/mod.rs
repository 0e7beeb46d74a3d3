//! Configuration for every subsystem, loadable from partial TOML.

pub mod defaults;
mod embedding_config;
mod entity_config;
mod graph_config;
mod observability_config;
mod rerank_config;
mod retrieval_config;

pub use embedding_config::EmbeddingConfig;
pub use entity_config::EntityConfig;
pub use graph_config::GraphConfig;
pub use observability_config::ObservabilityConfig;
pub use rerank_config::RerankConfig;
pub use retrieval_config::RetrievalConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{SiftError, SiftResult};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiftConfig {
    pub retrieval: RetrievalConfig,
    pub entity: EntityConfig,
    pub graph: GraphConfig,
    pub embedding: EmbeddingConfig,
    pub rerank: RerankConfig,
    pub observability: ObservabilityConfig,
}

impl SiftConfig {
    /// Parse configuration from TOML. Missing sections and keys take defaults.
    pub fn from_toml(source: &str) -> SiftResult<Self> {
        let config: SiftConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the pipeline cannot run with.
    pub fn validate(&self) -> SiftResult<()> {
        if self.retrieval.rrf_k == 0 {
            return Err(invalid("retrieval.rrf_k must be greater than zero"));
        }
        if self.retrieval.rerank_multiplier == 0 {
            return Err(invalid("retrieval.rerank_multiplier must be greater than zero"));
        }
        let threshold = self.entity.similarity_threshold;
        if threshold.is_nan() || threshold <= 0.0 || threshold > 1.0 {
            return Err(invalid(format!(
                "entity.similarity_threshold must be in (0, 1], got {threshold}"
            )));
        }
        if self.graph.beam_size == 0 {
            return Err(invalid("graph.beam_size must be greater than zero"));
        }
        if self.graph.n_neighbours == 0 {
            return Err(invalid("graph.n_neighbours must be greater than zero"));
        }
        if self.graph.gamma <= 0.0 || !self.graph.gamma.is_finite() {
            return Err(invalid(format!(
                "graph.gamma must be a positive number, got {}",
                self.graph.gamma
            )));
        }
        if self.embedding.dimensions == 0 {
            return Err(invalid("embedding.dimensions must be greater than zero"));
        }
        Ok(())
    }
}

fn invalid(reason: impl Into<String>) -> SiftError {
    SiftError::Configuration {
        reason: reason.into(),
    }
}
