//! Reciprocal Rank Fusion: score = Σ 1/(rank_i + c)
//!
//! Combines ranked lists into a single ranking without normalizing scores
//! across retrieval methods. Ranks are 1-based positions within each list.

use std::collections::HashMap;

use crate::models::ScoredCandidate;

/// Fuse ranked lists, returning the top `k` by fused score.
///
/// Each document keeps the `Arc` from its first appearance. Equal fused
/// scores keep first-appearance order (earlier list, then earlier position),
/// so the output does not depend on how the input lists were produced.
pub fn reciprocal_rank_fusion(
    ranked_lists: &[Vec<ScoredCandidate>],
    k: usize,
    c: u32,
) -> Vec<ScoredCandidate> {
    let mut position: HashMap<String, usize> = HashMap::new();
    let mut fused: Vec<ScoredCandidate> = Vec::new();

    for list in ranked_lists {
        for (rank, candidate) in list.iter().enumerate() {
            let contribution = 1.0 / ((rank + 1) as f64 + c as f64);
            match position.get(candidate.id()) {
                Some(&idx) => fused[idx].score += contribution,
                None => {
                    position.insert(candidate.id().clone(), fused.len());
                    fused.push(ScoredCandidate::new(
                        candidate.document.clone(),
                        contribution,
                    ));
                }
            }
        }
    }

    // Stable sort: ties keep first-appearance order.
    fused.sort_by(|a, b| b.score.total_cmp(&a.score));
    fused.truncate(k);
    fused
}
