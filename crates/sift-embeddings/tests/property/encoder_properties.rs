//! Property tests for the local encoders and the encoder cache.

use proptest::prelude::*;

use sift_core::traits::{IDenseEncoder, ISparseEncoder};
use sift_embeddings::{Bm25SparseEncoder, CachedDenseEncoder, HashingDenseEncoder};

proptest! {
    #[test]
    fn sparse_indices_are_sorted_unique_and_weights_positive(text in "[a-zA-Z ,.]{0,200}") {
        let v = Bm25SparseEncoder::default().encode_sparse(&text).unwrap();
        prop_assert!(v.indices().windows(2).all(|w| w[0] < w[1]));
        prop_assert!(v.values().iter().all(|x| *x > 0.0));
        prop_assert_eq!(v.indices().len(), v.values().len());
    }

    #[test]
    fn dense_vectors_are_unit_or_zero(text in "[a-z ]{0,120}", dims in 1..256usize) {
        let v = HashingDenseEncoder::new(dims).encode_dense(&text).unwrap();
        prop_assert_eq!(v.len(), dims);
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        prop_assert!(norm == 0.0 || (norm - 1.0).abs() < 1e-4, "norm = {}", norm);
    }

    #[test]
    fn cache_is_transparent(texts in prop::collection::vec("[a-z ]{1,40}", 1..10)) {
        let plain = HashingDenseEncoder::new(64);
        let cached = CachedDenseEncoder::new(HashingDenseEncoder::new(64), 100);

        let first = cached.encode_dense_batch(&texts).unwrap();
        let second = cached.encode_dense_batch(&texts).unwrap();
        let expected = plain.encode_dense_batch(&texts).unwrap();
        prop_assert_eq!(&first, &expected);
        prop_assert_eq!(&second, &expected);
    }
}
