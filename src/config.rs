//! Memory configuration
//!
//! Settings can be built in code, loaded from a JSON file, or overridden by
//! command-line flags in the binaries.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MemoryError, Result};
use crate::hopfield::{HopfieldConfig, MAX_RECALL_ITERATIONS};

/// Default neuron count: a 64x64 grid
pub const DEFAULT_NEURONS: usize = 4096;

/// Configuration for a pattern memory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    /// Number of neurons (pattern length)
    pub neurons: usize,
    /// Maximum synchronous updates per recall
    pub max_iterations: usize,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            neurons: DEFAULT_NEURONS,
            max_iterations: MAX_RECALL_ITERATIONS,
        }
    }
}

impl MemoryConfig {
    /// Load configuration from a JSON file; missing fields take defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the neuron count
    pub fn with_neurons(mut self, neurons: usize) -> Self {
        self.neurons = neurons;
        self
    }

    /// Reject a zero neuron count or an unusable iteration cap
    pub fn validate(&self) -> Result<()> {
        if self.neurons == 0 {
            return Err(MemoryError::Configuration { size: self.neurons });
        }
        self.hopfield().validate()
    }

    /// Recall settings for the network
    pub fn hopfield(&self) -> HopfieldConfig {
        HopfieldConfig {
            max_iterations: self.max_iterations,
        }
    }
}
