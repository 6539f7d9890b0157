//! # NOISEFIELD Procedural Generation
//!
//! Deterministic scalar fields from constant-table gradient noise.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: same `(x, y, z)` always produces the same value
//! 2. **Stateless**: noise generators are zero-sized, tables are `static`
//! 3. **Closed modes**: every composition is a fixed, documented formula
//!
//! ## Core Components
//!
//! - `tables`: permutation and gradient constants
//! - `LatticeNoise` / `SimplexNoise`: 3D noise generators
//! - `CompositionMode` / `compose`: fractal compositor
//! - `ScalarField`: grid evaluation and range stretching
//!
//! ## Example
//!
//! ```rust
//! use noisefield_procedural::{CompositionMode, FieldDimensions, NoiseKind, ScalarField};
//!
//! let field = ScalarField::evaluate(
//!     FieldDimensions::DEFAULT,
//!     NoiseKind::Lattice,
//!     CompositionMode::OctaveSum,
//!     0.0,
//! );
//! assert_eq!(field.get(0, 0), Some(0.5));
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]
#![allow(clippy::cast_precision_loss)]

pub mod error;
pub mod field;
pub mod fractal;
pub mod noise;
pub mod tables;

pub use error::{ProceduralError, ProceduralResult};
pub use field::{FieldDimensions, ScalarField};
pub use fractal::{compose, CompositionMode};
pub use noise::{fade, fast_floor, lerp, LatticeNoise, Noise3D, NoiseKind, SimplexNoise};
