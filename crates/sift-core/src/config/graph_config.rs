use serde::{Deserialize, Serialize};

use super::defaults;

/// Graph expansion (beam search) configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Number of expansion rounds. Paths never exceed `rounds + 1` triples.
    pub rounds: usize,
    /// Beams carried from one round to the next.
    pub beam_size: usize,
    /// Extensions kept per beam after rank decay.
    pub n_neighbours: usize,
    /// Rank-decay constant.
    pub gamma: f64,
    /// Only re-surface documents already in the candidate set.
    pub restrict_to_candidates: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            rounds: defaults::DEFAULT_GRAPH_ROUNDS,
            beam_size: defaults::DEFAULT_BEAM_SIZE,
            n_neighbours: defaults::DEFAULT_N_NEIGHBOURS,
            gamma: defaults::DEFAULT_GAMMA,
            restrict_to_candidates: true,
        }
    }
}
