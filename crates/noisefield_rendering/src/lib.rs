//! # NOISEFIELD Rendering
//!
//! Turns scalar fields into pixels.
//!
//! ## Design Principles
//!
//! 1. **Build once, look up often**: palettes are baked into a 256-entry LUT
//! 2. **Upload-ready**: pixel buffers are `Pod` and expose a byte view
//! 3. **No host coupling**: no window, no GPU, just buffers
//!
//! ## Core Components
//!
//! - `ColorMap`: validated piecewise-linear palette
//! - `GradientLut`: sampled palette used for per-pixel colorization
//! - `PixelBuffer` / `Rgba`: packed output pixels
//! - `Histogram` / `HistogramPanel`: value distribution and its bar chart
//!
//! ## Example
//!
//! ```rust
//! use noisefield_rendering::{ColorMap, GradientLut, Histogram, PixelBuffer};
//!
//! let values = [0.0, 0.5, 0.75, 1.0];
//! let lut = GradientLut::build(&ColorMap::blue());
//! let mut pixels = PixelBuffer::new(2, 2);
//! lut.colorize(&values, &mut pixels).unwrap();
//! assert_eq!(pixels.as_bytes().len(), 16);
//!
//! let histogram = Histogram::analyze(&values, 4).unwrap();
//! assert_eq!(histogram.total(), 4);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]
#![allow(clippy::cast_precision_loss)]

pub mod color;
pub mod error;
pub mod histogram;
pub mod lut;
pub mod pixel;

pub use color::{ColorMap, ColorStop, BLUE_STOPS, RED_STOPS};
pub use error::{RenderingError, RenderingResult};
pub use histogram::{Histogram, HistogramPanel};
pub use lut::{GradientLut, LUT_SIZE};
pub use pixel::{PixelBuffer, Rgba};
