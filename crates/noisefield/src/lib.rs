//! # NOISEFIELD
//!
//! Animated procedural noise fields: configuration plus a frame pipeline
//! over the two engine crates.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                        NOISEFIELD                        │
//! ├──────────────────────────────────────────────────────────┤
//! │  ┌───────────────────────┐    ┌───────────────────────┐  │
//! │  │  PROCEDURAL           │    │  RENDERING            │  │
//! │  │  • Lattice / simplex  │───>│  • Color maps + LUT   │  │
//! │  │  • 11 fractal modes   │    │  • Histogram + panel  │  │
//! │  │  • Scalar fields      │    │  • Pixel buffers      │  │
//! │  └───────────────────────┘    └───────────────────────┘  │
//! │              │                            │              │
//! │              └──────────┬─────────────────┘              │
//! │                         ▼                                │
//! │               FrameRenderer (frame.rs)                   │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `config`: TOML configuration
//! - `frame`: frame renderer and time coordinate
//! - `error`: pipeline error type

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod error;
pub mod frame;

// Re-export the engine crates
pub use noisefield_procedural as procedural;
pub use noisefield_rendering as rendering;

pub use config::{EngineConfig, FieldConfig, HistogramConfig, PaletteConfig, PalettePreset};
pub use error::{NoisefieldError, NoisefieldResult};
pub use frame::{time_coordinate, Frame, FrameRenderer, FrameTiming};
