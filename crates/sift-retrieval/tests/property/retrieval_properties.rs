//! Property tests: fallback merge, fused retrieval bounds, rerank stability.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use proptest::prelude::*;

use sift_core::errors::SiftResult;
use sift_core::models::{Deadline, Document, ScoredCandidate};
use sift_core::traits::{ICorpusStore, ICrossEncoder, IDenseEncoder, ISparseEncoder};
use sift_embeddings::{Bm25SparseEncoder, HashingDenseEncoder};
use sift_retrieval::search::fallback::merge_fallback;
use sift_retrieval::Reranker;
use sift_storage::InMemoryCorpus;

fn cand(id: usize) -> ScoredCandidate {
    ScoredCandidate::new(Arc::new(Document::new(format!("d{id}"), format!("text {id}"))), 1.0)
}

fn unique(ids: Vec<usize>) -> Vec<usize> {
    let mut seen = HashSet::new();
    ids.into_iter().filter(|i| seen.insert(*i)).collect()
}

struct ById(HashMap<String, f64>);

impl ICrossEncoder for ById {
    fn score(&self, _query: &str, text: &str) -> SiftResult<f64> {
        Ok(self.0.get(text).copied().unwrap_or(0.0))
    }
}

const WORDS: &[&str] = &[
    "mario", "zelda", "nintendo", "sega", "console", "platform", "puzzle", "release", "capital",
    "france",
];

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 1..8).prop_map(|w| w.join(" "))
}

proptest! {
    #[test]
    fn fallback_merge_is_bounded_deduplicated_and_filtered_first(
        filtered in prop::collection::vec(0..20usize, 0..10).prop_map(unique),
        unfiltered in prop::collection::vec(0..20usize, 0..20).prop_map(unique),
        k in 1..12usize,
    ) {
        let filtered: Vec<usize> = filtered.into_iter().take(k).collect();
        let merged = merge_fallback(
            filtered.iter().map(|&i| cand(i)).collect(),
            unfiltered.iter().map(|&i| cand(i)).collect(),
            k,
        );

        prop_assert!(merged.len() <= k);
        let ids: Vec<String> = merged.iter().map(|c| c.id().clone()).collect();
        let distinct: HashSet<&String> = ids.iter().collect();
        prop_assert_eq!(distinct.len(), ids.len());

        let prefix: Vec<String> = filtered.iter().map(|i| format!("d{i}")).collect();
        prop_assert_eq!(&ids[..prefix.len()], &prefix[..]);
    }

    #[test]
    fn fused_query_never_exceeds_k(
        texts in prop::collection::vec(text_strategy(), 0..15),
        query in text_strategy(),
        k in 0..10usize,
    ) {
        let sparse = Bm25SparseEncoder::default();
        let dense = HashingDenseEncoder::new(32);
        let mut corpus = InMemoryCorpus::new();
        for (i, text) in texts.iter().enumerate() {
            corpus.insert_encoded(Document::new(format!("d{i}"), text.as_str()), &sparse, &dense).unwrap();
        }

        let s = sparse.encode_sparse(&query).unwrap();
        let d = dense.encode_dense(&query).unwrap();
        let fused = corpus.query_fused(&s, &d, k, None).unwrap();
        prop_assert!(fused.len() <= k);
        prop_assert!(fused.len() <= texts.len());
        prop_assert!(fused.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn rerank_is_a_stable_descending_permutation(
        scores in prop::collection::vec(prop::sample::select(vec![0.1f64, 0.5, 0.9]), 0..12),
    ) {
        let candidates: Vec<ScoredCandidate> = (0..scores.len()).map(cand).collect();
        let table: HashMap<String, f64> = scores
            .iter()
            .enumerate()
            .map(|(i, s)| (format!("text {i}"), *s))
            .collect();
        let scorer = ById(table);

        let out = Reranker::new(&scorer).rerank("q", candidates, &Deadline::none()).unwrap();
        prop_assert_eq!(out.len(), scores.len());
        for w in out.windows(2) {
            prop_assert!(w[0].score >= w[1].score);
            if w[0].score == w[1].score {
                let a: usize = w[0].id()[1..].parse().unwrap();
                let b: usize = w[1].id()[1..].parse().unwrap();
                prop_assert!(a < b, "tie order broken: {} before {}", a, b);
            }
        }
    }
}
