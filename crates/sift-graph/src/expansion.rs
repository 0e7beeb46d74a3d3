//! Graph expansion stage.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, warn};

use sift_core::config::GraphConfig;
use sift_core::errors::{GraphError, SiftResult};
use sift_core::models::{Deadline, Document, ScoredCandidate, Triple};
use sift_core::traits::{ICorpusStore, IDenseEncoder, IExtractor, ITripleStore};
use sift_observability::graph_span;

use crate::beam::Beam;
use crate::search::BeamSearch;
use crate::seeding;

/// Re-surfaces candidate documents reachable through the knowledge graph.
pub struct GraphExpander<'a> {
    extractor: &'a dyn IExtractor,
    triples: &'a dyn ITripleStore,
    corpus: &'a dyn ICorpusStore,
    encoder: &'a dyn IDenseEncoder,
    config: GraphConfig,
}

impl<'a> GraphExpander<'a> {
    pub fn new(
        extractor: &'a dyn IExtractor,
        triples: &'a dyn ITripleStore,
        corpus: &'a dyn ICorpusStore,
        encoder: &'a dyn IDenseEncoder,
        config: GraphConfig,
    ) -> Self {
        Self {
            extractor,
            triples,
            corpus,
            encoder,
            config,
        }
    }

    /// Documents linked to the surviving beam paths.
    ///
    /// With `restrict_to_candidates` the result is a subset of `candidates`
    /// in their original order. Extraction failures and an expired deadline
    /// yield an empty expansion. Store and encoder failures propagate.
    pub fn expand(
        &self,
        question: &str,
        candidates: &[ScoredCandidate],
        deadline: &Deadline,
    ) -> SiftResult<Vec<Arc<Document>>> {
        let span = graph_span!(candidates.len(), self.config.rounds);
        let _guard = span.enter();

        if self.config.restrict_to_candidates && candidates.is_empty() {
            return Ok(Vec::new());
        }

        match self.walk(question, candidates, deadline) {
            Ok(docs) => {
                debug!(documents = docs.len(), "graph expansion complete");
                Ok(docs)
            }
            Err(e) if e.is_deadline_exceeded() => {
                warn!(error = %e, "graph expansion cancelled, discarding partial beams");
                Ok(Vec::new())
            }
            Err(e) if e.is_extraction_failure() => {
                warn!(error = %e, "triple extraction failed, skipping graph expansion");
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    /// Surviving beams for `question` without the document lookup.
    pub fn beams(
        &self,
        question: &str,
        candidates: &[ScoredCandidate],
        deadline: &Deadline,
    ) -> SiftResult<Vec<Beam>> {
        deadline.check("graph.extract")?;
        let extracted = self
            .extractor
            .extract_triples(question, &seeding::documents_text(candidates))
            .map_err(|e| GraphError::stage_failed("extract_triples", e))?;
        if extracted.is_empty() {
            debug!("no triples extracted");
            return Ok(Vec::new());
        }

        let matched = seeding::match_triples(self.triples, &extracted, deadline)?;
        if matched.is_empty() {
            return Ok(Vec::new());
        }

        deadline.check("graph.query_embedding")?;
        let query_embedding = self
            .encoder
            .encode_dense(question)
            .map_err(|e| GraphError::stage_failed("query_embedding", e))?;

        let seeds = seeding::seed_beams(self.encoder, &query_embedding, matched, deadline)?;
        debug!(extracted = extracted.len(), seeds = seeds.len(), "beams seeded");

        BeamSearch::new(self.triples, self.encoder, &self.config).run(seeds, &query_embedding, deadline)
    }

    fn walk(
        &self,
        question: &str,
        candidates: &[ScoredCandidate],
        deadline: &Deadline,
    ) -> SiftResult<Vec<Arc<Document>>> {
        let beams = self.beams(question, candidates, deadline)?;
        let triples = path_triples(&beams);
        if triples.is_empty() {
            return Ok(Vec::new());
        }

        let flattened: Vec<String> = triples.iter().map(Triple::flatten).collect();
        deadline.check("graph.documents")?;
        let ids = self
            .triples
            .documents_for_triples(&flattened)
            .map_err(|e| GraphError::stage_failed("documents_for_triples", e))?;

        if self.config.restrict_to_candidates {
            let linked: HashSet<&str> = ids.iter().map(String::as_str).collect();
            let mut seen = HashSet::new();
            return Ok(candidates
                .iter()
                .filter(|c| linked.contains(c.id().as_str()) && seen.insert(c.id().clone()))
                .map(|c| Arc::clone(&c.document))
                .collect());
        }

        deadline.check("graph.documents")?;
        self.corpus
            .get_documents(&ids)
            .map_err(|e| GraphError::stage_failed("get_documents", e).into())
    }
}

/// Distinct triples across all beam paths, in first-seen order.
pub fn path_triples(beams: &[Beam]) -> Vec<Triple> {
    let mut seen = HashSet::new();
    beams
        .iter()
        .flat_map(|b| b.path.iter())
        .filter(|t| seen.insert((*t).clone()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_triples_dedups_across_beams() {
        let a = Triple::new("a", "r", "b");
        let b = Triple::new("b", "r", "c");
        let c = Triple::new("b", "r", "d");
        let beams = vec![
            Beam::seed(a.clone(), 0.1).extend(b.clone(), 0.5),
            Beam::seed(a.clone(), 0.1).extend(c.clone(), 0.4),
        ];
        assert_eq!(path_triples(&beams), vec![a, b, c]);
    }

    #[test]
    fn path_triples_empty() {
        assert!(path_triples(&[]).is_empty());
    }
}
