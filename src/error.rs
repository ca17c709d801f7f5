//! Error types for the associative memory

use thiserror::Error;

/// Errors raised by the network, the pattern memory and the encoders
#[derive(Error, Debug)]
pub enum MemoryError {
    #[error("Invalid network size: {size} (must be at least 1 neuron)")]
    Configuration { size: usize },

    #[error("Invalid iteration cap: {max_iterations} (must be even and at least 2)")]
    IterationCap { max_iterations: usize },

    #[error("Pattern dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Invalid value {value} at index {index}: patterns must be bipolar (+1 or -1)")]
    InvalidValue { index: usize, value: i8 },

    #[error("Invalid glyph {glyph:?} at row {row}, column {column}")]
    InvalidGlyph { row: usize, column: usize, glyph: char },

    #[error("Pattern memory state is poisoned")]
    StatePoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for associative memory operations
pub type Result<T> = std::result::Result<T, MemoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_context() {
        let err = MemoryError::DimensionMismatch { expected: 4, actual: 3 };
        assert_eq!(err.to_string(), "Pattern dimension mismatch: expected 4, got 3");

        let err = MemoryError::InvalidValue { index: 2, value: 0 };
        assert!(err.to_string().contains("index 2"));
    }
}
