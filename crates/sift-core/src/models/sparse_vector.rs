use serde::{Deserialize, Serialize};

use crate::errors::{SiftError, SiftResult};

/// Term-weight vector with explicit non-zero indices.
///
/// Indices are unique and kept in ascending order so two vectors can be
/// compared with a single merge pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SparseVector {
    indices: Vec<u32>,
    values: Vec<f32>,
}

impl SparseVector {
    /// Build a vector from parallel index/value sequences.
    ///
    /// Fails when the lengths differ or an index repeats.
    pub fn new(indices: Vec<u32>, values: Vec<f32>) -> SiftResult<Self> {
        if indices.len() != values.len() {
            return Err(SiftError::Encoder {
                reason: format!(
                    "sparse vector has {} indices but {} values",
                    indices.len(),
                    values.len()
                ),
            });
        }
        let mut pairs: Vec<(u32, f32)> = indices.into_iter().zip(values).collect();
        pairs.sort_by_key(|(index, _)| *index);
        if let Some(w) = pairs.windows(2).find(|w| w[0].0 == w[1].0) {
            return Err(SiftError::Encoder {
                reason: format!("sparse vector repeats index {}", w[0].0),
            });
        }
        let (indices, values) = pairs.into_iter().unzip();
        Ok(Self { indices, values })
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Dot product over shared indices.
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0_f64;
        while i < self.indices.len() && j < other.indices.len() {
            match self.indices[i].cmp(&other.indices[j]) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += self.values[i] as f64 * other.values[j] as f64;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }
}
