//! # Pipeline Error Types

use std::path::PathBuf;

use noisefield_procedural::ProceduralError;
use noisefield_rendering::RenderingError;
use thiserror::Error;

/// Errors surfaced by configuration loading and frame rendering.
#[derive(Error, Debug)]
pub enum NoisefieldError {
    /// Invalid noise kind, mode, or field size.
    #[error(transparent)]
    Procedural(#[from] ProceduralError),

    /// Invalid palette, bin count, or buffer size.
    #[error(transparent)]
    Rendering(#[from] RenderingError),

    /// Config file could not be read.
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        /// Path that was opened.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Config text is not valid TOML for [`crate::config::EngineConfig`].
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Result type for pipeline operations.
pub type NoisefieldResult<T> = Result<T, NoisefieldError>;
