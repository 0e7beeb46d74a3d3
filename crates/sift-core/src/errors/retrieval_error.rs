use super::SiftError;

/// Retrieval subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("{strategy} retrieval failed")]
    StrategyFailed {
        strategy: String,
        #[source]
        source: Box<SiftError>,
    },

    #[error("rerank failed: expected {expected} scores, got {actual}")]
    ScoreCountMismatch { expected: usize, actual: usize },
}

impl RetrievalError {
    /// Wrap a lower-level error with the strategy that raised it.
    pub fn strategy_failed(strategy: impl Into<String>, source: SiftError) -> Self {
        RetrievalError::StrategyFailed {
            strategy: strategy.into(),
            source: Box::new(source),
        }
    }
}
