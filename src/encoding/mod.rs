//! Pattern encoding
//!
//! Conversions between human-readable grids and bipolar pattern vectors.

pub mod grid;

pub use grid::{to_grid, GridEncoder, GridEncoderConfig};
