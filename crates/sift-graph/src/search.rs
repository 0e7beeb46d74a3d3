//! Bounded beam search over the triple graph.
//!
//! Rounds run in sequence with an explicit frontier. Within a round each
//! beam expands independently on the rayon pool; selection of the next
//! frontier waits for every beam.

use rayon::prelude::*;
use tracing::debug;

use sift_core::config::GraphConfig;
use sift_core::errors::{GraphError, SiftResult};
use sift_core::models::{Deadline, Triple};
use sift_core::similarity::cosine_similarity;
use sift_core::traits::{IDenseEncoder, ITripleStore};

use crate::beam::{by_score_desc, rank_decay, Beam};
use crate::neighbours;

/// Beam search parameters bound to the graph and encoder it walks with.
pub struct BeamSearch<'a> {
    store: &'a dyn ITripleStore,
    encoder: &'a dyn IDenseEncoder,
    rounds: usize,
    beam_size: usize,
    n_neighbours: usize,
    gamma: f64,
}

impl<'a> BeamSearch<'a> {
    pub fn new(
        store: &'a dyn ITripleStore,
        encoder: &'a dyn IDenseEncoder,
        config: &GraphConfig,
    ) -> Self {
        Self {
            store,
            encoder,
            rounds: config.rounds,
            beam_size: config.beam_size,
            n_neighbours: config.n_neighbours,
            gamma: config.gamma,
        }
    }

    /// Walk from `seeds` for at most `rounds` rounds.
    ///
    /// A beam with no unvisited neighbour is finished: it keeps its path and
    /// score and competes with the extended beams for the top `beam_size`
    /// slots, but is never expanded again. No path grows past `rounds + 1`.
    /// A round in which no beam extends ends the walk with the frontier
    /// unchanged.
    pub fn run(
        &self,
        seeds: Vec<Beam>,
        query_embedding: &[f32],
        deadline: &Deadline,
    ) -> SiftResult<Vec<Beam>> {
        let mut frontier: Vec<Frontier> = seeds.into_iter().map(Frontier::Live).collect();

        for round in 0..self.rounds {
            if !frontier.iter().any(Frontier::is_live) {
                break;
            }
            deadline.check("graph.round")?;

            let per_beam: Vec<Option<Vec<Beam>>> = frontier
                .par_iter()
                .map(|entry| match entry {
                    Frontier::Live(beam) => self.expand(beam, query_embedding, deadline).map(Some),
                    Frontier::Finished(_) => Ok(None),
                })
                .collect::<SiftResult<_>>()?;

            let mut extended = false;
            let mut next: Vec<Frontier> = Vec::with_capacity(frontier.len());
            for (entry, extensions) in frontier.into_iter().zip(per_beam) {
                match extensions {
                    Some(extensions) if !extensions.is_empty() => {
                        extended = true;
                        next.extend(extensions.into_iter().map(Frontier::Live));
                    }
                    _ => next.push(Frontier::Finished(entry.into_beam())),
                }
            }

            if !extended {
                debug!(round, beams = next.len(), "no extensions, stopping walk");
                frontier = next;
                break;
            }
            next.sort_by(|a, b| by_score_desc(a.beam().score, b.beam().score));
            next.truncate(self.beam_size);

            debug!(round, beams = next.len(), "round complete");
            frontier = next;
        }

        Ok(frontier.into_iter().map(Frontier::into_beam).collect())
    }

    /// Candidate extensions of one beam after rank decay, best first.
    fn expand(&self, beam: &Beam, query_embedding: &[f32], deadline: &Deadline) -> SiftResult<Vec<Beam>> {
        deadline.check("graph.neighbors")?;
        let candidates = neighbours::find(self.store, beam)
            .map_err(|e| GraphError::stage_failed("neighbors", e))?;
        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        let prefix = beam.path_text();
        let texts: Vec<String> = candidates
            .iter()
            .map(|t| format!("{prefix} {}", t.flatten()))
            .collect();

        deadline.check("graph.embedding")?;
        let embeddings = self
            .encoder
            .encode_dense_batch(&texts)
            .map_err(|e| GraphError::stage_failed("path_embedding", e))?;
        if embeddings.len() != texts.len() {
            return Err(GraphError::EmbeddingCountMismatch {
                expected: texts.len(),
                actual: embeddings.len(),
            }
            .into());
        }

        let scored: Vec<(Triple, f64)> = candidates
            .into_iter()
            .zip(embeddings)
            .map(|(t, emb)| {
                let raw = beam.score + cosine_similarity(query_embedding, &emb);
                (t, raw)
            })
            .collect();

        Ok(rank_decay(scored, self.gamma, self.n_neighbours)
            .into_iter()
            .map(|(t, score)| beam.extend(t, score))
            .collect())
    }
}

/// A frontier slot; finished beams had nothing left to walk to.
enum Frontier {
    Live(Beam),
    Finished(Beam),
}

impl Frontier {
    fn is_live(&self) -> bool {
        matches!(self, Frontier::Live(_))
    }

    fn beam(&self) -> &Beam {
        match self {
            Frontier::Live(beam) | Frontier::Finished(beam) => beam,
        }
    }

    fn into_beam(self) -> Beam {
        match self {
            Frontier::Live(beam) | Frontier::Finished(beam) => beam,
        }
    }
}
