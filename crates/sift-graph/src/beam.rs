//! Beams and rank-decayed extension scoring.

use std::cmp::Ordering;

use sift_core::models::Triple;

/// A partial walk through the triple graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Beam {
    pub path: Vec<Triple>,
    pub score: f64,
}

impl Beam {
    pub fn seed(triple: Triple, score: f64) -> Self {
        Self {
            path: vec![triple],
            score,
        }
    }

    /// Last triple on the path; the walk continues from its entities.
    pub fn last(&self) -> Option<&Triple> {
        self.path.last()
    }

    pub fn contains(&self, triple: &Triple) -> bool {
        self.path.contains(triple)
    }

    /// Path triples flattened and joined by single spaces.
    pub fn path_text(&self) -> String {
        self.path
            .iter()
            .map(Triple::flatten)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Copy of this beam with `triple` appended at `score`.
    pub fn extend(&self, triple: Triple, score: f64) -> Beam {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend(self.path.iter().cloned());
        path.push(triple);
        Beam { path, score }
    }
}

/// Descending by score under the IEEE total order, so NaN cannot break the sort.
pub(crate) fn by_score_desc(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}

/// Apply the rank-decay penalty to one beam's candidate extensions.
///
/// Sorts by raw score, multiplies each by `exp(-min(rank, gamma) / gamma)`
/// with `rank` the 0-based position, re-sorts by the adjusted score, and
/// keeps the top `keep`. Both sorts are stable.
pub fn rank_decay(mut scored: Vec<(Triple, f64)>, gamma: f64, keep: usize) -> Vec<(Triple, f64)> {
    scored.sort_by(|a, b| by_score_desc(a.1, b.1));
    for (rank, (_, score)) in scored.iter_mut().enumerate() {
        *score *= (-(rank as f64).min(gamma) / gamma).exp();
    }
    scored.sort_by(|a, b| by_score_desc(a.1, b.1));
    scored.truncate(keep);
    scored
}
