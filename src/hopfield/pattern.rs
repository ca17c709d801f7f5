//! Bipolar pattern helpers
//!
//! Validation, the shared threshold rule used by both recall paths,
//! and a few distance measures for comparing recalled patterns.

use rand::seq::index::sample;
use rand::Rng;

use crate::error::{MemoryError, Result};

/// Maximum number of synchronous updates performed by a recall
pub const MAX_RECALL_ITERATIONS: usize = 10;

/// Check that a pattern has `expected_len` elements, all of them +1 or -1
pub fn validate_bipolar(pattern: &[i8], expected_len: usize) -> Result<()> {
    if pattern.len() != expected_len {
        return Err(MemoryError::DimensionMismatch {
            expected: expected_len,
            actual: pattern.len(),
        });
    }

    match pattern.iter().position(|&v| v != 1 && v != -1) {
        Some(index) => Err(MemoryError::InvalidValue {
            index,
            value: pattern[index],
        }),
        None => Ok(()),
    }
}

/// Threshold activation shared by every recall variant
///
/// A positive local field maps to +1, everything else (including zero) to -1,
/// so iterates never leave the bipolar domain.
#[inline]
pub fn threshold(field: i64) -> i8 {
    if field > 0 {
        1
    } else {
        -1
    }
}

/// Discretize a real-valued vector into bipolar form (non-negative -> +1)
pub fn binarize(values: &[f64]) -> Vec<i8> {
    values.iter().map(|&x| if x >= 0.0 { 1 } else { -1 }).collect()
}

/// Number of positions where two patterns differ
pub fn hamming_distance(a: &[i8], b: &[i8]) -> usize {
    assert_eq!(a.len(), b.len(), "Patterns must have same length");
    a.iter().zip(b.iter()).filter(|(x, y)| x != y).count()
}

/// Normalized overlap (a · b / N), in [-1, 1] for bipolar patterns
pub fn overlap(a: &[i8], b: &[i8]) -> f64 {
    assert_eq!(a.len(), b.len(), "Patterns must have same length");
    if a.is_empty() {
        return 0.0;
    }

    let dot: i64 = a
        .iter()
        .zip(b.iter())
        .map(|(&x, &y)| i64::from(x) * i64::from(y))
        .sum();

    dot as f64 / a.len() as f64
}

/// Flip a fraction of randomly chosen units
///
/// `fraction` is clamped to [0, 1]; the number of flipped units is rounded
/// to the nearest integer.
pub fn corrupt<R: Rng + ?Sized>(pattern: &[i8], fraction: f64, rng: &mut R) -> Vec<i8> {
    let mut noisy = pattern.to_vec();
    let flips = (fraction.clamp(0.0, 1.0) * pattern.len() as f64).round() as usize;

    for idx in sample(rng, pattern.len(), flips.min(pattern.len())).into_iter() {
        noisy[idx] = -noisy[idx];
    }

    noisy
}

/// Generate a uniformly random bipolar pattern
pub fn random_pattern<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<i8> {
    (0..len)
        .map(|_| if rng.gen_bool(0.5) { 1 } else { -1 })
        .collect()
}
