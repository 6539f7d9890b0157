//! # Procedural Error Types
//!
//! The noise functions themselves are total. These errors only cover
//! selector and shape misuse by the caller.

use thiserror::Error;

/// Errors raised when selecting or shaping procedural evaluation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProceduralError {
    /// Composition mode index outside the enumerated set.
    #[error("invalid composition mode: {0} (expected 0..=10)")]
    InvalidMode(u8),

    /// Unknown noise kind selector.
    #[error("invalid noise kind: {0:?} (expected \"lattice\" or \"simplex\")")]
    InvalidNoiseKind(String),

    /// Field grid with a zero-sized axis.
    #[error("invalid field dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
}

/// Result type for procedural operations.
pub type ProceduralResult<T> = Result<T, ProceduralError>;
