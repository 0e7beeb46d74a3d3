//! Triple matching and beam seeding.

use std::collections::HashSet;

use sift_core::errors::{GraphError, SiftResult};
use sift_core::models::{Deadline, ScoredCandidate, Triple};
use sift_core::similarity::cosine_similarity;
use sift_core::traits::{IDenseEncoder, ITripleStore};

use crate::beam::Beam;

/// Concatenate candidate texts the way the extraction prompt expects them.
pub fn documents_text(candidates: &[ScoredCandidate]) -> String {
    candidates
        .iter()
        .enumerate()
        .map(|(i, c)| format!("Document {i}:\n{}", c.text()))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Snap each extracted triple to its nearest stored triple.
///
/// Distinct matches only, in extraction order.
pub fn match_triples(
    store: &dyn ITripleStore,
    extracted: &[Triple],
    deadline: &Deadline,
) -> SiftResult<Vec<Triple>> {
    let mut seen = HashSet::new();
    let mut matched = Vec::new();
    for triple in extracted {
        deadline.check("graph.match")?;
        let nearest = store
            .nearest_triple(&triple.flatten())
            .map_err(|e| GraphError::stage_failed("nearest_triple", e))?;
        if let Some(nearest) = nearest {
            if seen.insert(nearest.clone()) {
                matched.push(nearest);
            }
        }
    }
    Ok(matched)
}

/// One beam per matched triple, scored by cosine against the query.
pub fn seed_beams(
    encoder: &dyn IDenseEncoder,
    query_embedding: &[f32],
    matched: Vec<Triple>,
    deadline: &Deadline,
) -> SiftResult<Vec<Beam>> {
    if matched.is_empty() {
        return Ok(Vec::new());
    }
    deadline.check("graph.seed")?;
    let texts: Vec<String> = matched.iter().map(Triple::flatten).collect();
    let embeddings = encoder
        .encode_dense_batch(&texts)
        .map_err(|e| GraphError::stage_failed("seed_embedding", e))?;
    if embeddings.len() != texts.len() {
        return Err(GraphError::EmbeddingCountMismatch {
            expected: texts.len(),
            actual: embeddings.len(),
        }
        .into());
    }

    Ok(matched
        .into_iter()
        .zip(embeddings)
        .map(|(triple, emb)| Beam::seed(triple, cosine_similarity(query_embedding, &emb)))
        .collect())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use sift_core::models::Document;

    use super::*;

    #[test]
    fn documents_text_numbers_blocks_from_zero() {
        let candidates = vec![
            ScoredCandidate::new(Arc::new(Document::new("a", "First.")), 1.0),
            ScoredCandidate::new(Arc::new(Document::new("b", "Second.")), 0.5),
        ];
        assert_eq!(
            documents_text(&candidates),
            "Document 0:\nFirst.\n\nDocument 1:\nSecond."
        );
    }

    #[test]
    fn documents_text_empty() {
        assert_eq!(documents_text(&[]), "");
    }
}
