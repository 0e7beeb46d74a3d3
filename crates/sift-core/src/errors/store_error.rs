/// Errors raised by the corpus, triple, and entity stores.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{store} unavailable during {operation}: {reason}")]
    Unavailable {
        store: String,
        operation: String,
        reason: String,
    },

    #[error("{store} rejected {operation}: {reason}")]
    InvalidRequest {
        store: String,
        operation: String,
        reason: String,
    },
}

impl StoreError {
    pub fn unavailable(
        store: impl Into<String>,
        operation: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        StoreError::Unavailable {
            store: store.into(),
            operation: operation.into(),
            reason: reason.to_string(),
        }
    }

    pub fn invalid_request(
        store: impl Into<String>,
        operation: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        StoreError::InvalidRequest {
            store: store.into(),
            operation: operation.into(),
            reason: reason.to_string(),
        }
    }
}
