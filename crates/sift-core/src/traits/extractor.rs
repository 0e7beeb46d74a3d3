use crate::errors::SiftResult;
use crate::models::{ExtractedEntity, Triple};

/// LLM-backed extraction service.
pub trait IExtractor: Send + Sync {
    /// Relational triples from the question and the concatenated documents.
    fn extract_triples(&self, question: &str, documents_text: &str) -> SiftResult<Vec<Triple>>;

    /// Named entity mentions in the question.
    fn extract_entities(&self, question: &str) -> SiftResult<Vec<ExtractedEntity>>;
}
