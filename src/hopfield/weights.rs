//! Hebbian weight matrix
//!
//! Entries are `i32` and accumulate with saturation: a pair that would
//! exceed `i32::MAX` (or fall below `i32::MIN`) sticks at the bound instead
//! of wrapping around. The diagonal is never touched, so it stays at zero.

use ndarray::{Array1, Array2, ArrayView2};

/// Square weight matrix of a discrete Hopfield network
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightMatrix {
    weights: Array2<i32>,
}

impl WeightMatrix {
    /// All-zero matrix for `size` neurons
    pub fn zeros(size: usize) -> Self {
        Self {
            weights: Array2::zeros((size, size)),
        }
    }

    /// Number of neurons (rows == columns)
    pub fn size(&self) -> usize {
        self.weights.nrows()
    }

    /// Weight between neurons `i` and `j`
    pub fn get(&self, i: usize, j: usize) -> i32 {
        self.weights[[i, j]]
    }

    /// Read-only view of the raw matrix
    pub fn view(&self) -> ArrayView2<'_, i32> {
        self.weights.view()
    }

    /// Fold a bipolar pattern into the weights
    ///
    /// Adds the outer product `p pᵀ` minus the identity: every off-diagonal
    /// entry moves by `p[i] * p[j]`, the diagonal term `p[i]² - 1` is zero.
    /// Returns the number of entries that hit a saturation bound.
    pub fn accumulate(&mut self, pattern: &[i8]) -> usize {
        let n = self.size();
        debug_assert_eq!(pattern.len(), n);

        let mut saturated = 0;
        for (i, mut row) in self.weights.outer_iter_mut().enumerate() {
            let pi = i32::from(pattern[i]);
            for j in 0..n {
                if i == j {
                    continue;
                }
                let delta = pi * i32::from(pattern[j]);
                match row[j].checked_add(delta) {
                    Some(value) => row[j] = value,
                    None => {
                        row[j] = row[j].saturating_add(delta);
                        saturated += 1;
                    }
                }
            }
        }

        saturated
    }

    /// Matrix widened to `i64` for overflow-free field computation
    pub fn widened(&self) -> Array2<i64> {
        self.weights.mapv(i64::from)
    }

    /// Local field `W · s` computed with ndarray
    pub fn field(widened: &Array2<i64>, state: &[i8]) -> Array1<i64> {
        let s: Array1<i64> = state.iter().map(|&v| i64::from(v)).collect();
        widened.dot(&s)
    }

    /// Local field of neuron `i`, summed one term at a time
    pub fn field_at(&self, i: usize, state: &[i8]) -> i64 {
        let mut weighted_sum = 0i64;
        for j in 0..self.size() {
            weighted_sum += i64::from(self.weights[[i, j]]) * i64::from(state[j]);
        }
        weighted_sum
    }

    /// True when every diagonal entry is zero
    pub fn has_zero_diagonal(&self) -> bool {
        self.weights.diag().iter().all(|&w| w == 0)
    }

    /// True when `W == Wᵀ`
    pub fn is_symmetric(&self) -> bool {
        self.weights == self.weights.t()
    }

    /// True when no learning has happened since the last reset
    pub fn is_zero(&self) -> bool {
        self.weights.iter().all(|&w| w == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulate_outer_product() {
        let mut w = WeightMatrix::zeros(4);
        w.accumulate(&[1, -1, 1, -1]);

        assert_eq!(w.get(0, 1), -1);
        assert_eq!(w.get(0, 2), 1);
        assert_eq!(w.get(0, 3), -1);
        assert_eq!(w.get(1, 2), -1);
        assert_eq!(w.get(1, 3), 1);
        assert_eq!(w.get(2, 3), -1);
        assert!(w.has_zero_diagonal());
        assert!(w.is_symmetric());
    }

    #[test]
    fn test_accumulate_is_additive() {
        let mut w = WeightMatrix::zeros(3);
        w.accumulate(&[1, 1, -1]);
        w.accumulate(&[1, 1, 1]);

        assert_eq!(w.get(0, 1), 2);
        assert_eq!(w.get(0, 2), 0);
        assert_eq!(w.get(1, 2), 0);
        assert!(w.has_zero_diagonal());
    }

    #[test]
    fn test_saturation_instead_of_wraparound() {
        let mut w = WeightMatrix::zeros(2);
        w.weights[[0, 1]] = i32::MAX;
        w.weights[[1, 0]] = i32::MAX;

        let saturated = w.accumulate(&[1, 1]);

        assert_eq!(saturated, 2);
        assert_eq!(w.get(0, 1), i32::MAX);
        assert_eq!(w.get(1, 0), i32::MAX);
    }

    #[test]
    fn test_field_paths_agree() {
        let mut w = WeightMatrix::zeros(5);
        w.accumulate(&[1, -1, 1, 1, -1]);
        w.accumulate(&[-1, -1, 1, -1, 1]);

        let state = [1, 1, -1, 1, -1];
        let field = WeightMatrix::field(&w.widened(), &state);

        for i in 0..5 {
            assert_eq!(field[i], w.field_at(i, &state));
        }
    }
}
