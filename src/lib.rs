//! # Hopfield Memory
//!
//! An associative pattern store built on a discrete Hopfield network.
//! Bipolar patterns are learned by Hebbian accumulation into a dense
//! weight matrix and recalled from noisy probes by synchronous threshold
//! updates.
//!
//! ## Features
//!
//! - Classical Hopfield network with saturating integer weights
//! - Matrix and explicit scalar recall paths with identical trajectories
//! - Thread-safe pattern memory with a log of learned pattern sources
//! - Text grid encoding for authoring and displaying patterns
//!
//! ## Quick Start
//!
//! ```rust
//! use hopfield_memory::{GridEncoder, MemoryConfig, PatternMemory};
//!
//! let memory = PatternMemory::new(&MemoryConfig::default().with_neurons(9))?;
//! let encoder = GridEncoder::default();
//!
//! let cross = encoder.encode_rows(&["#.#", ".#.", "#.#"])?;
//! memory.add_pattern("cross", &cross)?;
//!
//! let noisy = encoder.encode_rows(&["#.#", ".#.", "#.."])?;
//! let outcome = memory.recognize(&noisy)?;
//! assert_eq!(outcome.pattern, cross);
//! # Ok::<(), hopfield_memory::MemoryError>(())
//! ```

pub mod config;
pub mod encoding;
pub mod error;
pub mod hopfield;
pub mod memory;

// Re-export main types for convenience
pub use config::MemoryConfig;
pub use encoding::{GridEncoder, GridEncoderConfig};
pub use error::{MemoryError, Result};
pub use hopfield::{HopfieldConfig, HopfieldNetwork, RecallOutcome, RecallStatus};
pub use memory::{PatternMemory, PatternSource};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::MemoryConfig;
    pub use crate::encoding::{GridEncoder, GridEncoderConfig};
    pub use crate::error::{MemoryError, Result};
    pub use crate::hopfield::{
        HopfieldConfig, HopfieldNetwork, RecallOutcome, RecallStatus, WeightMatrix,
    };
    pub use crate::memory::{PatternMemory, PatternSource};
}
