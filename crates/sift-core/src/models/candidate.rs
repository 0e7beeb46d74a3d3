use std::sync::Arc;

use super::document::{Document, DocumentId};

/// A document with the score assigned by the stage that produced it.
///
/// Scores are only comparable within one stage: BM25-like, cosine, fused
/// rank score, and cross-encoder logits live on different scales.
#[derive(Debug, Clone)]
pub struct ScoredCandidate {
    pub document: Arc<Document>,
    pub score: f64,
}

impl ScoredCandidate {
    pub fn new(document: Arc<Document>, score: f64) -> Self {
        Self { document, score }
    }

    pub fn id(&self) -> &DocumentId {
        &self.document.id
    }

    pub fn text(&self) -> &str {
        &self.document.text
    }
}
