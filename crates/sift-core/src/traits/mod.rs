//! Collaborator contracts. The retrieval core only talks to encoders,
//! stores, extraction, and scoring services through these traits, and
//! receives concrete implementations by injection.

mod corpus_store;
mod cross_encoder;
mod encoder;
mod entity_store;
mod extractor;
mod triple_store;

pub use corpus_store::ICorpusStore;
pub use cross_encoder::ICrossEncoder;
pub use encoder::{IDenseEncoder, ISparseEncoder};
pub use entity_store::IEntityStore;
pub use extractor::IExtractor;
pub use triple_store::ITripleStore;
