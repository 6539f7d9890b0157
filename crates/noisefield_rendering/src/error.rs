//! # Rendering Error Types

use thiserror::Error;

/// Errors that can occur while building color maps or pixel buffers.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderingError {
    /// Color stop list violates the palette invariants.
    #[error("invalid palette: {0}")]
    InvalidPalette(String),

    /// Histogram requested with zero buckets.
    #[error("histogram needs at least one bin")]
    InvalidBinCount,

    /// Source and destination buffers disagree in length.
    #[error("buffer size mismatch: expected {expected} samples, got {actual}")]
    BufferSizeMismatch {
        /// Required number of samples.
        expected: usize,
        /// Number of samples supplied.
        actual: usize,
    },
}

/// Result type for rendering operations.
pub type RenderingResult<T> = Result<T, RenderingError>;
