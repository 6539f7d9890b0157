//! # Scalar Fields
//!
//! A row-major `width × height` grid of `f32` produced by running the
//! fractal compositor over every pixel.
//!
//! Fields are transient: [`ScalarField::fill`] overwrites every value, so a
//! caller can keep one field alive and refill it each frame without
//! reallocating.

use crate::error::{ProceduralError, ProceduralResult};
use crate::fractal::{compose, CompositionMode};
use crate::noise::{Noise3D, NoiseKind};

/// Grid size of a scalar field. Both axes are non-zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FieldDimensions {
    width: usize,
    height: usize,
}

impl FieldDimensions {
    /// The 256×256 default grid.
    pub const DEFAULT: Self = Self {
        width: 256,
        height: 256,
    };

    /// Creates dimensions, rejecting a zero-sized axis.
    ///
    /// # Errors
    ///
    /// Returns [`ProceduralError::InvalidDimensions`] if either axis is 0.
    pub fn new(width: usize, height: usize) -> ProceduralResult<Self> {
        if width == 0 || height == 0 {
            return Err(ProceduralError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Number of columns.
    #[inline]
    #[must_use]
    pub const fn width(self) -> usize {
        self.width
    }

    /// Number of rows.
    #[inline]
    #[must_use]
    pub const fn height(self) -> usize {
        self.height
    }

    /// Total number of samples.
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.width * self.height
    }

    /// Row-major index of `(x, y)`.
    #[inline]
    #[must_use]
    pub const fn index(self, x: usize, y: usize) -> usize {
        y * self.width + x
    }
}

impl Default for FieldDimensions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Row-major grid of scalar samples.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarField {
    dims: FieldDimensions,
    values: Vec<f32>,
}

impl ScalarField {
    /// Creates a zero-filled field.
    #[must_use]
    pub fn new(dims: FieldDimensions) -> Self {
        Self {
            dims,
            values: vec![0.0; dims.len()],
        }
    }

    /// Evaluates `mode` over a fresh field using the selected noise kind.
    #[must_use]
    pub fn evaluate(dims: FieldDimensions, kind: NoiseKind, mode: CompositionMode, z: f32) -> Self {
        let mut field = Self::new(dims);
        field.fill(&kind, mode, z);
        field
    }

    /// Overwrites every sample with `compose(mode, noise, x, y, z)`.
    pub fn fill<N: Noise3D + ?Sized>(&mut self, noise: &N, mode: CompositionMode, z: f32) {
        let dims = self.dims;
        for (y, row) in self.values.chunks_exact_mut(dims.width()).enumerate() {
            for (x, value) in row.iter_mut().enumerate() {
                *value = compose(mode, noise, x, y, z, dims);
            }
        }
        tracing::trace!(%mode, z, samples = dims.len(), "field evaluated");
    }

    /// Grid size.
    #[inline]
    #[must_use]
    pub const fn dimensions(&self) -> FieldDimensions {
        self.dims
    }

    /// All samples, row-major.
    #[inline]
    #[must_use]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Sample at `(x, y)`, or `None` outside the grid.
    #[inline]
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<f32> {
        if x >= self.dims.width() || y >= self.dims.height() {
            return None;
        }
        self.values.get(self.dims.index(x, y)).copied()
    }

    /// Smallest sample.
    #[must_use]
    pub fn min(&self) -> f32 {
        self.values.iter().copied().fold(f32::INFINITY, f32::min)
    }

    /// Largest sample.
    #[must_use]
    pub fn max(&self) -> f32 {
        self.values.iter().copied().fold(f32::NEG_INFINITY, f32::max)
    }

    /// Arithmetic mean of all samples.
    #[must_use]
    pub fn mean(&self) -> f32 {
        let sum: f64 = self.values.iter().map(|&v| f64::from(v)).sum();
        (sum / self.values.len() as f64) as f32
    }

    /// Applies `v * scale + bias` to every sample.
    pub fn scale_bias(&mut self, scale: f32, bias: f32) {
        for v in &mut self.values {
            *v = *v * scale + bias;
        }
    }

    /// Remaps the observed `[min, max]` onto `[0, 1]`.
    ///
    /// Returns `false` and leaves the field untouched when it is flat or
    /// holds non-finite values.
    pub fn stretch(&mut self) -> bool {
        let min = self.min();
        let max = self.max();
        let span = max - min;
        if !span.is_finite() || span <= 0.0 {
            return false;
        }
        self.scale_bias(1.0 / span, min / (min - max));
        true
    }
}
