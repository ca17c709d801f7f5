//! Pattern memory service
//!
//! Provides:
//! - A lock-guarded Hopfield network shared between callers
//! - The append-only log of learned pattern sources

pub mod store;

pub use store::*;
