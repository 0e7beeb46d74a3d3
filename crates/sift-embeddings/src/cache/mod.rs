//! In-memory dense embedding cache using moka.
//!
//! Graph expansion re-embeds the same path strings across beams and rounds,
//! so the wrapper sits in front of any `IDenseEncoder`. Keys are blake3
//! hashes of the input text.

use std::time::Duration;

use moka::sync::Cache;
use tracing::trace;

use sift_core::errors::SiftResult;
use sift_core::traits::IDenseEncoder;

pub struct CachedDenseEncoder<E> {
    inner: E,
    cache: Cache<String, Vec<f32>>,
}

impl<E: IDenseEncoder> CachedDenseEncoder<E> {
    /// Wrap `inner` with a cache holding up to `max_entries` vectors.
    pub fn new(inner: E, max_entries: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_idle(Duration::from_secs(3600)) // 1 hour idle TTL
            .build();
        Self { inner, cache }
    }

    pub fn inner(&self) -> &E {
        &self.inner
    }

    /// Approximate number of cached vectors.
    pub fn len(&self) -> u64 {
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.cache.invalidate_all();
    }

    fn key(text: &str) -> String {
        blake3::hash(text.as_bytes()).to_hex().to_string()
    }
}

impl<E: IDenseEncoder> IDenseEncoder for CachedDenseEncoder<E> {
    fn encode_dense(&self, text: &str) -> SiftResult<Vec<f32>> {
        let key = Self::key(text);
        if let Some(vec) = self.cache.get(&key) {
            trace!(hash = %key, "dense cache hit");
            return Ok(vec);
        }
        let vec = self.inner.encode_dense(text)?;
        self.cache.insert(key, vec.clone());
        Ok(vec)
    }

    fn encode_dense_batch(&self, texts: &[String]) -> SiftResult<Vec<Vec<f32>>> {
        let keys: Vec<String> = texts.iter().map(|t| Self::key(t)).collect();
        let mut out: Vec<Option<Vec<f32>>> = keys.iter().map(|k| self.cache.get(k)).collect();

        // One inner batch call for every miss.
        let misses: Vec<usize> = (0..texts.len()).filter(|i| out[*i].is_none()).collect();
        if !misses.is_empty() {
            let miss_texts: Vec<String> = misses.iter().map(|i| texts[*i].clone()).collect();
            let encoded = self.inner.encode_dense_batch(&miss_texts)?;
            if encoded.len() != miss_texts.len() {
                return Err(sift_core::SiftError::Encoder {
                    reason: format!(
                        "{} returned {} vectors for {} texts",
                        self.inner.name(),
                        encoded.len(),
                        miss_texts.len()
                    ),
                });
            }
            for (idx, vec) in misses.into_iter().zip(encoded) {
                self.cache.insert(keys[idx].clone(), vec.clone());
                out[idx] = Some(vec);
            }
        }

        Ok(out.into_iter().flatten().collect())
    }

    fn dimensions(&self) -> usize {
        self.inner.dimensions()
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
