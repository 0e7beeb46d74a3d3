use serde::{Deserialize, Serialize};

use super::defaults;

/// Entity extraction and matching configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityConfig {
    /// Matches need a normalized edit distance strictly below this.
    pub similarity_threshold: f64,
    /// Entity types kept from extraction. Empty keeps every type.
    pub entity_types: Vec<String>,
}

impl Default for EntityConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: defaults::DEFAULT_SIMILARITY_THRESHOLD,
            entity_types: defaults::DEFAULT_ENTITY_TYPES
                .iter()
                .map(|t| t.to_string())
                .collect(),
        }
    }
}
