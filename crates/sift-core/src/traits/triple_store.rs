use crate::errors::SiftResult;
use crate::models::{DocumentId, Triple, TripleSide};

/// Read access to the persisted knowledge graph.
pub trait ITripleStore: Send + Sync {
    /// Closest stored triple to `term` by normalized edit distance over the
    /// flattened form. No threshold. `None` only when the store is empty.
    fn nearest_triple(&self, term: &str) -> SiftResult<Option<Triple>>;

    /// Triples whose `side` entity equals `entity`.
    fn neighbors(&self, entity: &str, side: TripleSide) -> SiftResult<Vec<Triple>>;

    /// Distinct ids of documents any of the flattened triples came from.
    fn documents_for_triples(&self, flattened: &[String]) -> SiftResult<Vec<DocumentId>>;
}
