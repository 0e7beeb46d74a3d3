//! # sift-observability
//!
//! Span macros for each pipeline stage and one-call subscriber setup.

pub mod tracing_setup;

pub use tracing_setup::{init, spans};

#[doc(hidden)]
pub use tracing;
