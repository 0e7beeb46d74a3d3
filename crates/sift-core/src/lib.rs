//! # sift-core
//!
//! Foundation crate for the Sift retrieval core.
//! Defines the data model, error taxonomy, configuration, the collaborator
//! traits (encoders, stores, extraction, cross-encoder scoring), and the
//! ranking math shared by every other crate in the workspace.

pub mod config;
pub mod errors;
pub mod fusion;
pub mod models;
pub mod similarity;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::SiftConfig;
pub use errors::{SiftError, SiftResult};
pub use models::{
    Deadline, Document, DocumentId, EntityFilter, ScoredCandidate, SparseVector, Triple,
    TripleSide,
};
