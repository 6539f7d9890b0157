//! # Histogram Analysis
//!
//! Buckets a field's values into `B` equal bins over `[0, 1)` and draws the
//! counts as a bar panel. Out-of-range values land in the edge buckets.

use crate::color::ColorMap;
use crate::error::{RenderingError, RenderingResult};
use crate::pixel::{PixelBuffer, Rgba};

/// Counts per pixel row of bar height in the panel.
pub const COUNTS_PER_ROW: f64 = 8.0;

/// Value histogram with a cached maximum.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Histogram {
    counts: Vec<u32>,
    max: u32,
}

impl Histogram {
    /// Creates an empty histogram.
    ///
    /// # Errors
    ///
    /// Returns [`RenderingError::InvalidBinCount`] if `bins` is 0.
    pub fn new(bins: usize) -> RenderingResult<Self> {
        if bins == 0 {
            return Err(RenderingError::InvalidBinCount);
        }
        Ok(Self {
            counts: vec![0; bins],
            max: 0,
        })
    }

    /// Counts `values` into `bins` buckets.
    ///
    /// # Errors
    ///
    /// Returns [`RenderingError::InvalidBinCount`] if `bins` is 0.
    pub fn analyze(values: &[f32], bins: usize) -> RenderingResult<Self> {
        let mut histogram = Self::new(bins)?;
        histogram.recount(values);
        Ok(histogram)
    }

    /// Resets every count and recounts `values`.
    pub fn recount(&mut self, values: &[f32]) {
        self.counts.fill(0);
        let bins = self.counts.len();
        for &v in values {
            self.counts[Self::bucket(v, bins)] += 1;
        }
        self.max = self.counts.iter().copied().max().unwrap_or(0);
    }

    /// Bucket of `v`: `floor(v·bins)` clamped to `[0, bins − 1]`.
    ///
    /// NaN lands in bucket 0.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn bucket(v: f32, bins: usize) -> usize {
        let scaled = (v * bins as f32).floor();
        if scaled.is_nan() || scaled <= 0.0 {
            0
        } else {
            (scaled as usize).min(bins - 1)
        }
    }

    /// Number of buckets.
    #[inline]
    #[must_use]
    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    /// Count per bucket.
    #[inline]
    #[must_use]
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    /// Largest count.
    #[inline]
    #[must_use]
    pub const fn max(&self) -> u32 {
        self.max
    }

    /// Sum of all counts, equal to the number of values analyzed.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| u64::from(c)).sum()
    }
}

/// Bar chart of a histogram: one column per bucket, bars colored by the
/// palette at the bucket's position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistogramPanel {
    bar_colors: Vec<Rgba>,
    background: Rgba,
    height: usize,
}

impl HistogramPanel {
    /// Builds a panel `bins` columns wide and `height` rows tall.
    #[must_use]
    pub fn new(map: &ColorMap, bins: usize, height: usize) -> Self {
        let bar_colors = (0..bins).map(|x| map.map(x as f32 / bins as f32)).collect();
        Self {
            bar_colors,
            background: Self::background(),
            height,
        }
    }

    /// Fill color for rows above the bars.
    #[must_use]
    pub fn background() -> Rgba {
        Rgba::from_unit(0.03, 0.03, 0.03, 1.0)
    }

    /// Panel width in columns.
    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.bar_colors.len()
    }

    /// Panel height in rows.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Allocates a buffer of the panel's size.
    #[must_use]
    pub fn buffer(&self) -> PixelBuffer {
        PixelBuffer::new(self.width(), self.height)
    }

    /// Draws `histogram` into `out`.
    ///
    /// Pixel `(x, row)` takes the bar color when
    /// `count[x] / 8 > height − row`, otherwise the background. Row 0 is the
    /// top, so bars grow upward from the bottom edge.
    ///
    /// # Errors
    ///
    /// Returns [`RenderingError::BufferSizeMismatch`] if the histogram's bin
    /// count or the size of `out` does not match the panel.
    #[allow(clippy::cast_precision_loss)]
    pub fn render(&self, histogram: &Histogram, out: &mut PixelBuffer) -> RenderingResult<()> {
        if histogram.bins() != self.width() {
            return Err(RenderingError::BufferSizeMismatch {
                expected: self.width(),
                actual: histogram.bins(),
            });
        }
        if out.width() != self.width() || out.height() != self.height {
            return Err(RenderingError::BufferSizeMismatch {
                expected: self.width() * self.height,
                actual: out.width() * out.height(),
            });
        }

        let bars: Vec<f64> = histogram
            .counts()
            .iter()
            .map(|&c| f64::from(c) / COUNTS_PER_ROW)
            .collect();
        for (row, line) in out.pixels_mut().chunks_exact_mut(self.width()).enumerate() {
            let threshold = (self.height - row) as f64;
            for ((pixel, &bar), &color) in line.iter_mut().zip(&bars).zip(&self.bar_colors) {
                *pixel = if bar > threshold { color } else { self.background };
            }
        }
        Ok(())
    }
}
