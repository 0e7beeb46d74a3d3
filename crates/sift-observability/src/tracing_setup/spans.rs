//! Span definitions per pipeline stage: search, strategy, rerank, graph expansion.

/// Create a search span.
#[macro_export]
macro_rules! search_span {
    ($query:expr, $method:expr, $k:expr) => {
        $crate::tracing::info_span!("sift.search", query = %$query, method = %$method, k = $k)
    };
}

/// Create a strategy span.
#[macro_export]
macro_rules! strategy_span {
    ($strategy:expr, $k:expr, $filtered:expr) => {
        $crate::tracing::debug_span!("sift.strategy", strategy = %$strategy, k = $k, filtered = $filtered)
    };
}

/// Create a rerank span.
#[macro_export]
macro_rules! rerank_span {
    ($candidates:expr) => {
        $crate::tracing::debug_span!("sift.rerank", candidates = $candidates)
    };
}

/// Create a graph expansion span.
#[macro_export]
macro_rules! graph_span {
    ($candidates:expr, $rounds:expr) => {
        $crate::tracing::debug_span!("sift.graph", candidates = $candidates, rounds = $rounds)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const SEARCH: &str = "sift.search";
    pub const STRATEGY: &str = "sift.strategy";
    pub const RERANK: &str = "sift.rerank";
    pub const GRAPH: &str = "sift.graph";
}
