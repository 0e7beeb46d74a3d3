//! Error taxonomy for the retrieval core.
//!
//! `SiftError` is the single error type surfaced to callers. Subsystem errors
//! convert into it with `?`, and stage wrappers keep the original error as
//! their `source`.

mod graph_error;
mod retrieval_error;
mod store_error;

pub use graph_error::GraphError;
pub use retrieval_error::RetrievalError;
pub use store_error::StoreError;

/// Result alias used across the workspace.
pub type SiftResult<T> = Result<T, SiftError>;

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum SiftError {
    #[error("configuration error: {reason}")]
    Configuration { reason: String },

    #[error("unknown retrieval strategy '{name}': expected bm25, dense, or hybrid")]
    UnknownStrategy { name: String },

    #[error("extraction failed: {reason}")]
    Extraction { reason: String },

    #[error("scoring service error: {reason}")]
    ScoringService { reason: String },

    #[error("encoder error: {reason}")]
    Encoder { reason: String },

    #[error("deadline exceeded during {stage}")]
    DeadlineExceeded { stage: String },

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl SiftError {
    /// Whether the caller may retry the whole request with backoff.
    ///
    /// Only store unavailability is transient. The core itself never
    /// retries beyond the entity-filter fallback.
    pub fn is_transient(&self) -> bool {
        match self {
            SiftError::Store(StoreError::Unavailable { .. }) => true,
            SiftError::Retrieval(RetrievalError::StrategyFailed { source, .. }) => {
                source.is_transient()
            }
            SiftError::Graph(GraphError::StageFailed { source, .. }) => source.is_transient(),
            _ => false,
        }
    }

    /// Whether this error came from an expired deadline, at any wrapping depth.
    pub fn is_deadline_exceeded(&self) -> bool {
        match self {
            SiftError::DeadlineExceeded { .. } => true,
            SiftError::Retrieval(RetrievalError::StrategyFailed { source, .. }) => {
                source.is_deadline_exceeded()
            }
            SiftError::Graph(GraphError::StageFailed { source, .. }) => {
                source.is_deadline_exceeded()
            }
            _ => false,
        }
    }

    /// Whether this error is an extraction-service failure, at any wrapping depth.
    pub fn is_extraction_failure(&self) -> bool {
        match self {
            SiftError::Extraction { .. } => true,
            SiftError::Graph(GraphError::StageFailed { source, .. }) => {
                source.is_extraction_failure()
            }
            _ => false,
        }
    }
}

impl From<toml::de::Error> for SiftError {
    fn from(err: toml::de::Error) -> Self {
        SiftError::Configuration {
            reason: err.to_string(),
        }
    }
}
