use super::SiftError;

/// Graph expansion errors.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("graph expansion failed at {stage}")]
    StageFailed {
        stage: String,
        #[source]
        source: Box<SiftError>,
    },

    #[error("encoder returned {actual} embeddings for {expected} texts")]
    EmbeddingCountMismatch { expected: usize, actual: usize },
}

impl GraphError {
    pub fn stage_failed(stage: impl Into<String>, source: SiftError) -> Self {
        GraphError::StageFailed {
            stage: stage.into(),
            source: Box::new(source),
        }
    }
}
