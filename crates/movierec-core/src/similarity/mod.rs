//! Sparse vectors and cosine similarity

use serde::{Deserialize, Serialize};

/// Sparse feature vector: `(feature index, weight)` pairs sorted by index
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    /// Build from arbitrary pairs; duplicates are summed and zeros dropped
    pub fn from_pairs(mut pairs: Vec<(usize, f64)>) -> Self {
        pairs.sort_by_key(|&(idx, _)| idx);

        let mut entries: Vec<(usize, f64)> = Vec::with_capacity(pairs.len());
        for (idx, weight) in pairs {
            match entries.last_mut() {
                Some((last, acc)) if *last == idx => *acc += weight,
                _ => entries.push((idx, weight)),
            }
        }
        entries.retain(|&(_, w)| w != 0.0);

        SparseVector { entries }
    }

    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Euclidean norm
    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
    }

    /// Scale to unit length; a zero vector stays zero
    pub fn normalized(mut self) -> Self {
        let norm = self.norm();
        if norm > 0.0 {
            for (_, w) in &mut self.entries {
                *w /= norm;
            }
        }
        self
    }

    /// Dot product via a merge walk over both sorted entry lists
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        let (a, b) = (&self.entries, &other.entries);

        while i < a.len() && j < b.len() {
            match a[i].0.cmp(&b[j].0) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += a[i].1 * b[j].1;
                    i += 1;
                    j += 1;
                }
            }
        }

        sum
    }
}

/// Cosine similarity; 0.0 when either vector has zero norm
pub fn cosine_similarity(vec_a: &SparseVector, vec_b: &SparseVector) -> f64 {
    let norm_a = vec_a.norm();
    let norm_b = vec_b.norm();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    vec_a.dot(vec_b) / (norm_a * norm_b)
}
