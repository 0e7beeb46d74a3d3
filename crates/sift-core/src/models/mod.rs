//! Data model shared by every stage of the retrieval pipeline.

mod candidate;
mod deadline;
mod document;
mod entity;
mod entity_filter;
mod sparse_vector;
mod triple;

pub use candidate::ScoredCandidate;
pub use deadline::Deadline;
pub use document::{Document, DocumentId};
pub use entity::ExtractedEntity;
pub use entity_filter::EntityFilter;
pub use sparse_vector::SparseVector;
pub use triple::{Triple, TripleSide};
