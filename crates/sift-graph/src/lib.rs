//! # sift-graph
//!
//! Broadens a candidate set through the knowledge graph:
//!
//! 1. Extract triples from the question and candidate texts.
//! 2. Snap each to its nearest stored triple and seed one beam per match.
//! 3. Run a fixed number of beam-search rounds over shared head/tail
//!    entities, scoring paths against the query embedding with rank decay.
//! 4. Map every triple on a surviving path back to its source documents,
//!    keeping only documents already in the candidate set.

pub mod beam;
pub mod expansion;
pub mod neighbours;
pub mod search;
pub mod seeding;

pub use beam::Beam;
pub use expansion::GraphExpander;
pub use search::BeamSearch;
