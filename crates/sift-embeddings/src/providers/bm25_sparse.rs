//! BM25-style sparse encoder.
//!
//! Term ids are FNV-1a hashes folded into 31 bits; weights use BM25
//! term-frequency saturation with length normalization. IDF is left to the
//! corpus side, as sparse vector stores apply it at query time.

use std::collections::BTreeMap;

use sift_core::config::EmbeddingConfig;
use sift_core::errors::SiftResult;
use sift_core::models::SparseVector;
use sift_core::traits::ISparseEncoder;

use super::{hash_term, tokenize};

pub struct Bm25SparseEncoder {
    k1: f32,
    b: f32,
    avg_len: f32,
}

impl Bm25SparseEncoder {
    pub fn new(k1: f32, b: f32, avg_len: f32) -> Self {
        Self {
            k1,
            b,
            avg_len: avg_len.max(1.0),
        }
    }

    pub fn from_config(config: &EmbeddingConfig) -> Self {
        Self::new(config.bm25_k1, config.bm25_b, config.bm25_avg_len)
    }

    fn term_id(term: &str) -> u32 {
        (hash_term(term) & 0x7fff_ffff) as u32
    }
}

impl Default for Bm25SparseEncoder {
    fn default() -> Self {
        Self::from_config(&EmbeddingConfig::default())
    }
}

impl ISparseEncoder for Bm25SparseEncoder {
    fn encode_sparse(&self, text: &str) -> SiftResult<SparseVector> {
        let tokens = tokenize(text);
        let doc_len = tokens.len() as f32;

        let mut tf: BTreeMap<u32, f32> = BTreeMap::new();
        for tok in &tokens {
            *tf.entry(Self::term_id(tok)).or_default() += 1.0;
        }

        let norm = self.k1 * (1.0 - self.b + self.b * doc_len / self.avg_len);
        let (indices, values): (Vec<u32>, Vec<f32>) = tf
            .into_iter()
            .map(|(id, f)| (id, f * (self.k1 + 1.0) / (f + norm)))
            .unzip();

        SparseVector::new(indices, values)
    }

    fn name(&self) -> &str {
        "bm25-hashed"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_terms_saturate() {
        let enc = Bm25SparseEncoder::default();
        let once = enc.encode_sparse("mario").unwrap();
        let thrice = enc.encode_sparse("mario mario mario").unwrap();
        assert_eq!(once.len(), 1);
        assert_eq!(thrice.len(), 1);
        let (w1, w3) = (once.values()[0], thrice.values()[0]);
        assert!(w3 > w1);
        assert!(w3 < 3.0 * w1);
    }

    #[test]
    fn indices_unique_and_sorted() {
        let enc = Bm25SparseEncoder::default();
        let v = enc.encode_sparse("the cat and the dog and the bird").unwrap();
        assert!(v.indices().windows(2).all(|w| w[0] < w[1]));
        assert_eq!(v.len(), 5);
    }

    #[test]
    fn shared_terms_score_higher() {
        let enc = Bm25SparseEncoder::default();
        let q = enc.encode_sparse("capital of France").unwrap();
        let paris = enc.encode_sparse("Paris is the capital of France.").unwrap();
        let berlin = enc.encode_sparse("Berlin is the capital of Germany.").unwrap();
        assert!(q.dot(&paris) > q.dot(&berlin));
    }

    #[test]
    fn empty_text_is_empty_vector() {
        let enc = Bm25SparseEncoder::default();
        assert!(enc.encode_sparse("  ").unwrap().is_empty());
    }
}
