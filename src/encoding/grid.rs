//! Text grid encoding
//!
//! Square grids of glyphs are the human-facing form of a pattern: an "on"
//! glyph becomes +1 and an "off" glyph becomes -1, row by row.

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::error::{MemoryError, Result};
use crate::hopfield::validate_bipolar;

/// Grid encoder configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridEncoderConfig {
    /// Glyph for +1
    pub on: char,
    /// Glyph for -1
    pub off: char,
}

impl Default for GridEncoderConfig {
    fn default() -> Self {
        Self { on: '#', off: '.' }
    }
}

/// Converts between square text grids and bipolar patterns
///
/// # Example
///
/// ```rust
/// use hopfield_memory::encoding::GridEncoder;
///
/// let encoder = GridEncoder::default();
/// let pattern = encoder.encode_rows(&["#.", ".#"])?;
/// assert_eq!(pattern, vec![1, -1, -1, 1]);
/// assert_eq!(encoder.render(&pattern, 2)?, "#.\n.#");
/// # Ok::<(), hopfield_memory::MemoryError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct GridEncoder {
    config: GridEncoderConfig,
}

impl GridEncoder {
    /// Create a new grid encoder with custom configuration
    pub fn new(config: GridEncoderConfig) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &GridEncoderConfig {
        &self.config
    }

    /// Encode square rows into a flat pattern
    pub fn encode_rows<S: AsRef<str>>(&self, rows: &[S]) -> Result<Vec<i8>> {
        let side = rows.len();
        let mut pattern = Vec::with_capacity(side * side);

        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let width = line.chars().count();
            if width != side {
                return Err(MemoryError::DimensionMismatch {
                    expected: side,
                    actual: width,
                });
            }

            for (column, glyph) in line.chars().enumerate() {
                pattern.push(self.encode_glyph(glyph, row, column)?);
            }
        }

        Ok(pattern)
    }

    fn encode_glyph(&self, glyph: char, row: usize, column: usize) -> Result<i8> {
        if glyph == self.config.on {
            Ok(1)
        } else if glyph == self.config.off {
            Ok(-1)
        } else {
            Err(MemoryError::InvalidGlyph { row, column, glyph })
        }
    }

    /// Render a pattern as `side` lines of glyphs
    pub fn render(&self, pattern: &[i8], side: usize) -> Result<String> {
        let grid = to_grid(pattern, side)?;

        let lines: Vec<String> = grid
            .outer_iter()
            .map(|row| {
                row.iter()
                    .map(|&v| if v > 0 { self.config.on } else { self.config.off })
                    .collect()
            })
            .collect();

        Ok(lines.join("\n"))
    }
}

/// Reshape a flat bipolar pattern into a `side` x `side` grid
pub fn to_grid(pattern: &[i8], side: usize) -> Result<Array2<i8>> {
    validate_bipolar(pattern, side * side)?;

    Array2::from_shape_vec((side, side), pattern.to_vec()).map_err(|_| {
        MemoryError::DimensionMismatch {
            expected: side * side,
            actual: pattern.len(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_rows() {
        let encoder = GridEncoder::default();
        let pattern = encoder.encode_rows(&["#.#", ".#.", "#.#"]).unwrap();
        assert_eq!(pattern, vec![1, -1, 1, -1, 1, -1, 1, -1, 1]);
    }

    #[test]
    fn test_non_square_rejected() {
        let encoder = GridEncoder::default();
        assert!(matches!(
            encoder.encode_rows(&["#.#", ".#"]),
            Err(MemoryError::DimensionMismatch { expected: 2, actual: 3 })
        ));
    }

    #[test]
    fn test_invalid_glyph() {
        let encoder = GridEncoder::default();
        match encoder.encode_rows(&["#.", ".x"]) {
            Err(MemoryError::InvalidGlyph { row, column, glyph }) => {
                assert_eq!((row, column, glyph), (1, 1, 'x'));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_custom_glyphs() {
        let encoder = GridEncoder::new(GridEncoderConfig { on: '1', off: '0' });
        let pattern = encoder.encode_rows(&["10", "01"]).unwrap();
        assert_eq!(encoder.render(&pattern, 2).unwrap(), "10\n01");
    }

    #[test]
    fn test_to_grid() {
        let grid = to_grid(&[1, -1, -1, 1], 2).unwrap();
        assert_eq!(grid[[0, 1]], -1);
        assert_eq!(grid[[1, 1]], 1);

        assert!(to_grid(&[1, -1, -1], 2).is_err());
    }
}
