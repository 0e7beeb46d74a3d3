//! Property tests for graph expansion: subset of candidates, depth bound.

use std::collections::HashSet;
use std::sync::Arc;

use proptest::prelude::*;

use sift_core::config::GraphConfig;
use sift_core::errors::SiftResult;
use sift_core::models::{Deadline, Document, ExtractedEntity, ScoredCandidate, Triple};
use sift_core::traits::IExtractor;
use sift_embeddings::HashingDenseEncoder;
use sift_graph::GraphExpander;
use sift_storage::{GraphTripleStore, InMemoryCorpus};

struct FixedExtractor(Vec<Triple>);

impl IExtractor for FixedExtractor {
    fn extract_triples(&self, _question: &str, _documents_text: &str) -> SiftResult<Vec<Triple>> {
        Ok(self.0.clone())
    }

    fn extract_entities(&self, _question: &str) -> SiftResult<Vec<ExtractedEntity>> {
        Ok(Vec::new())
    }
}

fn triple_strategy() -> impl Strategy<Value = (Triple, usize)> {
    (0..6usize, 0..3usize, 0..6usize, 0..10usize).prop_map(|(h, r, t, doc)| {
        (Triple::new(format!("e{h}"), format!("r{r}"), format!("e{t}")), doc)
    })
}

fn build_graph(edges: &[(Triple, usize)]) -> GraphTripleStore {
    let mut graph = GraphTripleStore::new();
    for (triple, doc) in edges {
        graph.insert(triple, format!("d{doc}"));
    }
    graph
}

fn candidates(ids: &[usize]) -> Vec<ScoredCandidate> {
    ids.iter()
        .map(|i| ScoredCandidate::new(Arc::new(Document::new(format!("d{i}"), format!("doc {i}"))), 1.0))
        .collect()
}

proptest! {
    #[test]
    fn expansion_is_subset_of_candidates(
        edges in prop::collection::vec(triple_strategy(), 1..30),
        extracted in prop::collection::vec(triple_strategy(), 0..4),
        candidate_ids in prop::collection::vec(0..10usize, 0..8),
        rounds in 0..4usize,
    ) {
        let graph = build_graph(&edges);
        let corpus = InMemoryCorpus::new();
        let dense = HashingDenseEncoder::new(32);
        let extractor = FixedExtractor(extracted.into_iter().map(|(t, _)| t).collect());
        let config = GraphConfig { rounds, ..GraphConfig::default() };
        let expander = GraphExpander::new(&extractor, &graph, &corpus, &dense, config);

        let cands = candidates(&candidate_ids);
        let docs = expander.expand("question", &cands, &Deadline::none()).unwrap();

        let allowed: HashSet<&str> = cands.iter().map(|c| c.id().as_str()).collect();
        let mut seen = HashSet::new();
        for doc in &docs {
            prop_assert!(allowed.contains(doc.id.as_str()));
            prop_assert!(seen.insert(doc.id.clone()), "duplicate {}", doc.id);
        }
    }

    #[test]
    fn beam_paths_respect_depth_bound(
        edges in prop::collection::vec(triple_strategy(), 1..40),
        extracted in prop::collection::vec(triple_strategy(), 1..4),
        rounds in 0..5usize,
        beam_size in 1..6usize,
    ) {
        let graph = build_graph(&edges);
        let corpus = InMemoryCorpus::new();
        let dense = HashingDenseEncoder::new(32);
        let extractor = FixedExtractor(extracted.into_iter().map(|(t, _)| t).collect());
        let config = GraphConfig { rounds, beam_size, ..GraphConfig::default() };
        let expander = GraphExpander::new(&extractor, &graph, &corpus, &dense, config);

        let beams = expander.beams("question", &candidates(&[0, 1]), &Deadline::none()).unwrap();
        // Seeds survive unchanged when the first round finds no extension.
        if rounds > 0 {
            prop_assert!(beams.len() <= beam_size.max(3));
        }
        for beam in &beams {
            prop_assert!(!beam.path.is_empty());
            prop_assert!(beam.path.len() <= rounds + 1);
            let distinct: HashSet<&Triple> = beam.path.iter().collect();
            prop_assert_eq!(distinct.len(), beam.path.len());
        }
    }
}
