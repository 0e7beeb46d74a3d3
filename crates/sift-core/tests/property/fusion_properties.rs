//! Property tests for Reciprocal Rank Fusion.

use std::collections::HashSet;
use std::sync::Arc;

use proptest::prelude::*;

use sift_core::fusion::reciprocal_rank_fusion;
use sift_core::models::{Document, ScoredCandidate};

fn to_list(ids: &[u8], scale: f64) -> Vec<ScoredCandidate> {
    let mut seen = HashSet::new();
    ids.iter()
        .filter(|id| seen.insert(**id))
        .enumerate()
        .map(|(rank, id)| {
            let name = format!("d{id}");
            ScoredCandidate::new(
                Arc::new(Document::new(name.clone(), name)),
                scale / (rank + 1) as f64,
            )
        })
        .collect()
}

proptest! {
    #[test]
    fn fused_length_never_exceeds_k(
        a in prop::collection::vec(0u8..30, 0..20),
        b in prop::collection::vec(0u8..30, 0..20),
        k in 0usize..25,
    ) {
        let fused = reciprocal_rank_fusion(&[to_list(&a, 1.0), to_list(&b, 1.0)], k, 60);
        prop_assert!(fused.len() <= k);
    }

    #[test]
    fn fused_output_has_no_duplicates(
        a in prop::collection::vec(0u8..30, 0..20),
        b in prop::collection::vec(0u8..30, 0..20),
    ) {
        let fused = reciprocal_rank_fusion(&[to_list(&a, 1.0), to_list(&b, 1.0)], 100, 60);
        let ids: HashSet<_> = fused.iter().map(|c| c.id().clone()).collect();
        prop_assert_eq!(ids.len(), fused.len());
    }

    #[test]
    fn fused_scores_are_non_increasing(
        a in prop::collection::vec(0u8..30, 0..20),
        b in prop::collection::vec(0u8..30, 0..20),
    ) {
        let fused = reciprocal_rank_fusion(&[to_list(&a, 1.0), to_list(&b, 1.0)], 100, 60);
        for w in fused.windows(2) {
            prop_assert!(w[0].score >= w[1].score);
        }
    }

    #[test]
    fn fusion_is_independent_of_raw_score_scale(
        a in prop::collection::vec(0u8..30, 0..20),
        b in prop::collection::vec(0u8..30, 0..20),
        scale in 0.001f64..10_000.0,
    ) {
        let unit = reciprocal_rank_fusion(&[to_list(&a, 1.0), to_list(&b, 1.0)], 10, 60);
        let scaled = reciprocal_rank_fusion(&[to_list(&a, scale), to_list(&b, 1.0 / scale)], 10, 60);
        let unit_ids: Vec<_> = unit.iter().map(|c| c.id().clone()).collect();
        let scaled_ids: Vec<_> = scaled.iter().map(|c| c.id().clone()).collect();
        prop_assert_eq!(unit_ids, scaled_ids);
    }
}
