//! Default values for every configuration key.

// Retrieval
pub const DEFAULT_K: usize = 5;
pub const DEFAULT_RERANK_MULTIPLIER: usize = 3;
pub const DEFAULT_RRF_K: u32 = 60;
pub const DEFAULT_METHOD: &str = "hybrid";

// Entity matching
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.1;
pub const DEFAULT_ENTITY_TYPES: [&str; 3] = ["Game", "Console", "Publisher"];

// Graph expansion
pub const DEFAULT_GRAPH_ROUNDS: usize = 1;
pub const DEFAULT_BEAM_SIZE: usize = 10;
pub const DEFAULT_N_NEIGHBOURS: usize = 100;
pub const DEFAULT_GAMMA: f64 = 4.0;

// Embedding
pub const DEFAULT_DIMENSIONS: usize = 384;
pub const DEFAULT_CACHE_SIZE: u64 = 10_000;
pub const DEFAULT_BM25_K1: f32 = 1.2;
pub const DEFAULT_BM25_B: f32 = 0.75;
pub const DEFAULT_BM25_AVG_LEN: f32 = 256.0;

// Rerank service
pub const DEFAULT_RERANK_ENDPOINT: &str = "http://localhost:5001";
pub const DEFAULT_RERANK_TIMEOUT_MS: u64 = 10_000;

// Observability
pub const DEFAULT_LOG_LEVEL: &str = "info";
