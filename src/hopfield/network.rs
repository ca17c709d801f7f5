//! Classical Hopfield Network (1982)
//!
//! Binary (bipolar) neurons, Hebbian storage and synchronous threshold
//! updates. The network keeps only the aggregate weights; learned patterns
//! themselves are not retained.

use super::pattern::{threshold, validate_bipolar};
use super::weights::WeightMatrix;
use super::{HopfieldConfig, RecallOutcome, RecallStatus};
use crate::error::{MemoryError, Result};

/// Classical Hopfield Network with a dense integer weight matrix
///
/// # Example
///
/// ```rust
/// use hopfield_memory::hopfield::HopfieldNetwork;
///
/// let mut network = HopfieldNetwork::new(4)?;
/// network.learn(&[1, -1, 1, -1])?;
///
/// let outcome = network.recall(&[1, -1, 1, -1])?;
/// assert_eq!(outcome.pattern, vec![1, -1, 1, -1]);
/// assert_eq!(outcome.iterations, 1);
/// # Ok::<(), hopfield_memory::MemoryError>(())
/// ```
#[derive(Debug, Clone)]
pub struct HopfieldNetwork {
    /// Number of neurons
    size: usize,
    /// floor(sqrt(size)), for callers that view patterns as square grids
    side_length: usize,
    /// Hebbian weights
    weights: WeightMatrix,
    /// Number of patterns folded in since the last reset
    learned: usize,
    /// Configuration
    config: HopfieldConfig,
}

impl HopfieldNetwork {
    /// Create a network with `size` neurons and an all-zero weight matrix
    pub fn new(size: usize) -> Result<Self> {
        Self::with_config(size, HopfieldConfig::default())
    }

    /// Create with custom configuration
    pub fn with_config(size: usize, config: HopfieldConfig) -> Result<Self> {
        check_size(size)?;
        config.validate()?;

        Ok(Self {
            size,
            side_length: side_length(size),
            weights: WeightMatrix::zeros(size),
            learned: 0,
            config,
        })
    }

    /// Number of neurons
    pub fn size(&self) -> usize {
        self.size
    }

    /// Side of the square grid the pattern can be reshaped into
    pub fn side_length(&self) -> usize {
        self.side_length
    }

    /// Current weight matrix
    pub fn weights(&self) -> &WeightMatrix {
        &self.weights
    }

    /// Get the configuration
    pub fn config(&self) -> &HopfieldConfig {
        &self.config
    }

    /// Number of learn calls since construction or the last resize
    pub fn pattern_count(&self) -> usize {
        self.learned
    }

    /// Theoretical capacity (0.138 * N for random patterns)
    pub fn capacity(&self) -> f64 {
        0.138 * self.size as f64
    }

    /// Change the number of neurons, discarding everything learned
    ///
    /// On error the network is left as it was.
    pub fn resize(&mut self, size: usize) -> Result<()> {
        check_size(size)?;

        log::info!("Resizing network from {} to {} neurons", self.size, size);
        self.size = size;
        self.side_length = side_length(size);
        self.weights = WeightMatrix::zeros(size);
        self.learned = 0;
        Ok(())
    }

    /// Store a bipolar pattern using Hebbian learning
    ///
    /// W += p pᵀ - I
    pub fn learn(&mut self, pattern: &[i8]) -> Result<()> {
        validate_bipolar(pattern, self.size)?;

        let saturated = self.weights.accumulate(pattern);
        if saturated > 0 {
            log::warn!("{} weights saturated while learning pattern", saturated);
        }

        self.learned += 1;
        log::debug!("Learned pattern, total: {}", self.learned);
        Ok(())
    }

    /// Recall the attractor closest to `probe` (matrix-vector updates)
    pub fn recall(&self, probe: &[i8]) -> Result<RecallOutcome> {
        validate_bipolar(probe, self.size)?;

        let widened = self.weights.widened();
        let outcome = self.relax(probe, |state| {
            WeightMatrix::field(&widened, state)
                .iter()
                .map(|&h| threshold(h))
                .collect()
        });

        Ok(outcome)
    }

    /// Recall using explicit per-neuron weighted sums
    ///
    /// Produces the same trajectory as [`recall`](Self::recall).
    pub fn recall_explicit(&self, probe: &[i8]) -> Result<RecallOutcome> {
        validate_bipolar(probe, self.size)?;

        let outcome = self.relax(probe, |state| {
            let mut next = vec![0i8; self.size];
            for (i, unit) in next.iter_mut().enumerate() {
                *unit = threshold(self.weights.field_at(i, state));
            }
            next
        });

        Ok(outcome)
    }

    /// Compute energy
    ///
    /// E = -1/2 Σ_ij w_ij s_i s_j
    pub fn energy(&self, state: &[i8]) -> Result<f64> {
        validate_bipolar(state, self.size)?;
        Ok(self.energy_unchecked(state))
    }

    fn energy_unchecked(&self, state: &[i8]) -> f64 {
        let total: i64 = state
            .iter()
            .enumerate()
            .map(|(i, &s)| i64::from(s) * self.weights.field_at(i, state))
            .sum();
        -0.5 * total as f64
    }

    /// Synchronous relaxation shared by both recall variants
    fn relax<F>(&self, probe: &[i8], mut step: F) -> RecallOutcome
    where
        F: FnMut(&[i8]) -> Vec<i8>,
    {
        let mut current = probe.to_vec();
        let mut trajectory = Vec::new();
        let mut status = RecallStatus::IterationLimitReached;
        let mut iterations = 0;

        for iter in 0..self.config.max_iterations {
            let next = step(&current);
            iterations = iter + 1;
            trajectory.push(next.clone());

            if next == current {
                status = RecallStatus::Converged;
                break;
            }

            current = next;
        }

        if status == RecallStatus::IterationLimitReached {
            log::warn!(
                "Recall stopped after {} iterations without converging",
                iterations
            );
        } else {
            log::debug!("Recall converged after {} iterations", iterations);
        }

        let energy = self.energy_unchecked(&current);
        RecallOutcome {
            pattern: current,
            iterations,
            status,
            trajectory,
            energy,
        }
    }
}

fn check_size(size: usize) -> Result<()> {
    if size == 0 {
        return Err(MemoryError::Configuration { size });
    }
    Ok(())
}

fn side_length(size: usize) -> usize {
    let mut side = (size as f64).sqrt() as usize;
    // correct float rounding for large sizes
    while side * side > size {
        side -= 1;
    }
    while (side + 1) * (side + 1) <= size {
        side += 1;
    }
    side
}
