//! # Gradient Lookup Table
//!
//! A color map sampled at 256 evenly spaced points. Field values are
//! colorized by table lookup instead of walking the stop list per pixel.

use crate::color::ColorMap;
use crate::error::{RenderingError, RenderingResult};
use crate::pixel::{PixelBuffer, Rgba};

/// Number of LUT entries.
pub const LUT_SIZE: usize = 256;

const LAST_ENTRY: f32 = (LUT_SIZE - 1) as f32;

/// 256-entry color table built from a [`ColorMap`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GradientLut {
    entries: [Rgba; LUT_SIZE],
}

impl GradientLut {
    /// Samples `map` at `i / 255` for every entry `i`.
    #[must_use]
    pub fn build(map: &ColorMap) -> Self {
        let entries: [Rgba; LUT_SIZE] = std::array::from_fn(|i| map.map(i as f32 / LAST_ENTRY));
        tracing::debug!(
            stops = map.stops().len(),
            first = entries[0].0,
            last = entries[LUT_SIZE - 1].0,
            "gradient LUT built"
        );
        Self { entries }
    }

    /// Entry `i`, or `None` past the end.
    #[inline]
    #[must_use]
    pub fn entry(&self, i: usize) -> Option<Rgba> {
        self.entries.get(i).copied()
    }

    /// All entries.
    #[inline]
    #[must_use]
    pub const fn entries(&self) -> &[Rgba; LUT_SIZE] {
        &self.entries
    }

    /// Table index for a field value: `floor(v·255)` clamped to `[0, 255]`.
    ///
    /// NaN maps to 0.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn index(v: f32) -> usize {
        (v * LAST_ENTRY).floor().clamp(0.0, LAST_ENTRY) as usize
    }

    /// Color for a field value.
    #[inline]
    #[must_use]
    pub fn lookup(&self, v: f32) -> Rgba {
        self.entries[Self::index(v)]
    }

    /// Colors every value into `out`, in order.
    ///
    /// # Errors
    ///
    /// Returns [`RenderingError::BufferSizeMismatch`] if `values` and `out`
    /// differ in length.
    pub fn colorize(&self, values: &[f32], out: &mut PixelBuffer) -> RenderingResult<()> {
        let pixels = out.pixels_mut();
        if pixels.len() != values.len() {
            return Err(RenderingError::BufferSizeMismatch {
                expected: pixels.len(),
                actual: values.len(),
            });
        }
        for (pixel, &v) in pixels.iter_mut().zip(values) {
            *pixel = self.lookup(v);
        }
        Ok(())
    }
}

impl Default for GradientLut {
    fn default() -> Self {
        Self::build(&ColorMap::default())
    }
}
