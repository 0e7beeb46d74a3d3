use crate::errors::SiftResult;
use crate::models::Deadline;

/// Joint (query, passage) relevance scoring.
pub trait ICrossEncoder: Send + Sync {
    fn score(&self, query: &str, text: &str) -> SiftResult<f64>;

    /// Score every text against `query`. Output matches `texts` in length
    /// and order.
    fn score_batch(&self, query: &str, texts: &[&str]) -> SiftResult<Vec<f64>> {
        texts.iter().map(|t| self.score(query, t)).collect()
    }

    /// `score_batch` bounded by `deadline`. Remote implementations should
    /// cap their request timeout by the time remaining.
    fn score_batch_until(
        &self,
        query: &str,
        texts: &[&str],
        deadline: &Deadline,
    ) -> SiftResult<Vec<f64>> {
        deadline.check("rerank")?;
        self.score_batch(query, texts)
    }
}
