//! Re-score candidates with a cross-encoder and sort by relevance.

use tracing::debug;

use sift_core::errors::{RetrievalError, SiftResult};
use sift_core::models::{Deadline, ScoredCandidate};
use sift_core::traits::ICrossEncoder;
use sift_observability::rerank_span;

/// Reorders candidates by cross-encoder relevance, descending.
///
/// The sort is stable: candidates with equal scores keep their input
/// order. Scoring failures are fatal; a partially scored list is never
/// returned.
pub struct Reranker<'a> {
    scorer: &'a dyn ICrossEncoder,
}

impl<'a> Reranker<'a> {
    pub fn new(scorer: &'a dyn ICrossEncoder) -> Self {
        Self { scorer }
    }

    /// Rerank `candidates` against `query`. Each returned candidate carries
    /// its cross-encoder score.
    pub fn rerank(
        &self,
        query: &str,
        candidates: Vec<ScoredCandidate>,
        deadline: &Deadline,
    ) -> SiftResult<Vec<ScoredCandidate>> {
        let span = rerank_span!(candidates.len());
        let _guard = span.enter();

        if candidates.is_empty() {
            return Ok(candidates);
        }

        let texts: Vec<&str> = candidates.iter().map(ScoredCandidate::text).collect();
        let scores = self.scorer.score_batch_until(query, &texts, deadline)?;
        if scores.len() != candidates.len() {
            return Err(RetrievalError::ScoreCountMismatch {
                expected: candidates.len(),
                actual: scores.len(),
            }
            .into());
        }

        let mut rescored: Vec<ScoredCandidate> = candidates
            .into_iter()
            .zip(scores)
            .map(|(c, score)| ScoredCandidate::new(c.document, score))
            .collect();
        rescored.sort_by(|a, b| b.score.total_cmp(&a.score));

        debug!(
            top = rescored.first().map(|c| c.id().as_str()).unwrap_or(""),
            "rerank complete"
        );
        Ok(rescored)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};
    use std::sync::Arc;

    use sift_core::errors::SiftError;
    use sift_core::models::Document;

    use super::*;

    /// Scores by exact text lookup.
    struct TableScorer {
        scores: HashMap<&'static str, f64>,
        calls: AtomicUsize,
    }

    impl TableScorer {
        fn new(pairs: &[(&'static str, f64)]) -> Self {
            Self {
                scores: pairs.iter().copied().collect(),
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl ICrossEncoder for TableScorer {
        fn score(&self, _query: &str, text: &str) -> SiftResult<f64> {
            self.calls.fetch_add(1, AtomicOrdering::SeqCst);
            Ok(self.scores.get(text).copied().unwrap_or(0.0))
        }
    }

    struct FailingScorer;

    impl ICrossEncoder for FailingScorer {
        fn score(&self, _query: &str, _text: &str) -> SiftResult<f64> {
            Err(SiftError::ScoringService {
                reason: "503 Service Unavailable".into(),
            })
        }
    }

    struct ShortScorer;

    impl ICrossEncoder for ShortScorer {
        fn score(&self, _query: &str, _text: &str) -> SiftResult<f64> {
            Ok(1.0)
        }

        fn score_batch(&self, _query: &str, _texts: &[&str]) -> SiftResult<Vec<f64>> {
            Ok(vec![1.0])
        }
    }

    fn cands(texts: &[&str]) -> Vec<ScoredCandidate> {
        texts
            .iter()
            .map(|t| ScoredCandidate::new(Arc::new(Document::new(*t, *t)), 0.0))
            .collect()
    }

    fn ids(list: &[ScoredCandidate]) -> Vec<&str> {
        list.iter().map(|c| c.id().as_str()).collect()
    }

    #[test]
    fn ties_keep_input_order() {
        let scorer = TableScorer::new(&[("A", 0.2), ("B", 0.9), ("C", 0.2)]);
        let out = Reranker::new(&scorer)
            .rerank("q", cands(&["A", "B", "C"]), &Deadline::none())
            .unwrap();
        assert_eq!(ids(&out), vec!["B", "A", "C"]);
        assert!((out[0].score - 0.9).abs() < f64::EPSILON);
    }

    #[test]
    fn nan_score_does_not_disturb_finite_order() {
        let scorer = TableScorer::new(&[("A", 0.2), ("B", f64::NAN), ("C", 0.9), ("D", 0.5)]);
        let out = Reranker::new(&scorer)
            .rerank("q", cands(&["A", "B", "C", "D"]), &Deadline::none())
            .unwrap();
        assert_eq!(out.len(), 4);
        let finite: Vec<&str> = out
            .iter()
            .filter(|c| !c.score.is_nan())
            .map(|c| c.id().as_str())
            .collect();
        assert_eq!(finite, vec!["C", "D", "A"]);
    }

    #[test]
    fn empty_input_skips_scorer() {
        let scorer = TableScorer::new(&[]);
        let out = Reranker::new(&scorer)
            .rerank("q", Vec::new(), &Deadline::none())
            .unwrap();
        assert!(out.is_empty());
        assert_eq!(scorer.calls.load(AtomicOrdering::SeqCst), 0);
    }

    #[test]
    fn scorer_failure_is_fatal() {
        let err = Reranker::new(&FailingScorer)
            .rerank("q", cands(&["A", "B"]), &Deadline::none())
            .unwrap_err();
        assert!(matches!(err, SiftError::ScoringService { .. }));
    }

    #[test]
    fn short_score_list_is_rejected() {
        let err = Reranker::new(&ShortScorer)
            .rerank("q", cands(&["A", "B"]), &Deadline::none())
            .unwrap_err();
        assert!(matches!(
            err,
            SiftError::Retrieval(RetrievalError::ScoreCountMismatch { expected: 2, actual: 1 })
        ));
    }
}
