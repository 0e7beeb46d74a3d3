//! Hashed term-frequency dense encoder.
//!
//! Generates fixed-dimension vectors from term frequencies hashed into
//! buckets. No model files, no network: always available and deterministic,
//! which makes it the encoder used in tests and air-gapped deployments.

use std::collections::HashMap;

use sift_core::errors::SiftResult;
use sift_core::traits::IDenseEncoder;

use super::{hash_term, tokenize};

pub struct HashingDenseEncoder {
    dimensions: usize,
}

impl HashingDenseEncoder {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }

    fn vector(&self, text: &str) -> Vec<f32> {
        let tokens = tokenize(text);
        let mut vec = vec![0.0f32; self.dimensions];
        if tokens.is_empty() {
            return vec;
        }

        let mut tf: HashMap<&str, f32> = HashMap::new();
        for tok in &tokens {
            *tf.entry(tok.as_str()).or_default() += 1.0;
        }

        let total = tokens.len() as f32;
        for (term, count) in &tf {
            let freq = count / total;
            // IDF approximation: penalize very short terms (likely stopwords).
            let idf = 1.0 + (term.len() as f32).ln();
            let bucket = (hash_term(term) % self.dimensions as u64) as usize;
            vec[bucket] += freq * idf;
        }

        // L2 normalize.
        let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut vec {
                *v /= norm;
            }
        }

        vec
    }
}

impl IDenseEncoder for HashingDenseEncoder {
    fn encode_dense(&self, text: &str) -> SiftResult<Vec<f32>> {
        Ok(self.vector(text))
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "hashing-tf"
    }
}
