//! Discrete Hopfield network
//!
//! This module provides the associative memory engine: Hebbian learning
//! into a dense weight matrix and synchronous threshold recall, with an
//! explicit scalar recall path that mirrors the matrix one step for step.

pub mod network;
pub mod pattern;
pub mod weights;

pub use network::HopfieldNetwork;
pub use pattern::{
    binarize, corrupt, hamming_distance, overlap, random_pattern, threshold, validate_bipolar,
    MAX_RECALL_ITERATIONS,
};
pub use weights::WeightMatrix;

use serde::{Deserialize, Serialize};

use crate::error::{MemoryError, Result};

/// Configuration for recall behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HopfieldConfig {
    /// Maximum synchronous updates before recall gives up
    pub max_iterations: usize,
}

impl Default for HopfieldConfig {
    fn default() -> Self {
        Self {
            max_iterations: MAX_RECALL_ITERATIONS,
        }
    }
}

impl HopfieldConfig {
    /// The cap must be even and non-zero
    ///
    /// An odd cap stops on the other member of a two-cycle.
    pub fn validate(&self) -> Result<()> {
        if self.max_iterations == 0 || self.max_iterations % 2 != 0 {
            return Err(MemoryError::IterationCap {
                max_iterations: self.max_iterations,
            });
        }
        Ok(())
    }
}

/// Terminal state of a recall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecallStatus {
    /// An update left the state unchanged
    Converged,
    /// The iteration cap was reached without a fixed point
    IterationLimitReached,
}

/// Result of pattern recall
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecallOutcome {
    /// The recalled pattern
    pub pattern: Vec<i8>,
    /// Number of updates computed
    pub iterations: usize,
    /// How the recall terminated
    pub status: RecallStatus,
    /// Every computed iterate, in order (the last one is `pattern`)
    pub trajectory: Vec<Vec<i8>>,
    /// Energy of the recalled pattern
    pub energy: f64,
}

impl RecallOutcome {
    /// Whether a fixed point was reached
    pub fn converged(&self) -> bool {
        self.status == RecallStatus::Converged
    }
}
