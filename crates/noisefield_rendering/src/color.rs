//! # Color Maps
//!
//! A color map is an ordered list of stops. Each stop carries an RGBA color
//! and the width of the segment that starts at it; the last stop has width
//! zero and is terminal. Mapping walks the segments with a running offset
//! and interpolates linearly inside the first segment that contains the
//! value.
//!
//! Values past the final segment return the terminal color. Values below
//! zero extrapolate the first segment, which may push a channel out of
//! range; `Rgba::from_unit` handles that the same way for every channel.

use serde::Deserialize;

use crate::error::{RenderingError, RenderingResult};
use crate::pixel::Rgba;

/// Allowed drift of the summed segment widths from 1.
pub const WIDTH_SUM_TOLERANCE: f32 = 1e-4;

/// One color stop: a unit-range RGBA color and its segment width.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct ColorStop {
    /// Red, `[0, 1]`.
    pub r: f32,
    /// Green, `[0, 1]`.
    pub g: f32,
    /// Blue, `[0, 1]`.
    pub b: f32,
    /// Alpha, `[0, 1]`.
    pub a: f32,
    /// Width of the segment starting at this stop. Zero marks the end.
    pub width: f32,
}

impl ColorStop {
    /// Creates a stop.
    #[inline]
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32, width: f32) -> Self {
        Self { r, g, b, a, width }
    }

    /// The stop's color, packed.
    #[inline]
    #[must_use]
    pub fn color(&self) -> Rgba {
        Rgba::from_unit(self.r, self.g, self.b, self.a)
    }

    fn channels(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    fn blend(&self, to: &Self, t: f32) -> Rgba {
        Rgba::from_unit(
            lerp(self.r, to.r, t),
            lerp(self.g, to.g, t),
            lerp(self.b, to.b, t),
            lerp(self.a, to.a, t),
        )
    }
}

/// Black through deep blue and violet to white.
pub const BLUE_STOPS: [ColorStop; 4] = [
    ColorStop::new(0.0, 0.0, 0.0, 1.0, 0.3),
    ColorStop::new(0.0, 0.0, 0.25, 1.0, 0.45),
    ColorStop::new(0.2, 0.13, 0.93, 1.0, 0.25),
    ColorStop::new(1.0, 1.0, 1.0, 1.0, 0.0),
];

/// White through yellow and orange to black.
pub const RED_STOPS: [ColorStop; 4] = [
    ColorStop::new(1.0, 1.0, 1.0, 1.0, 0.3),
    ColorStop::new(0.95, 0.95, 0.0, 1.0, 0.25),
    ColorStop::new(0.75, 0.35, 0.0, 1.0, 0.45),
    ColorStop::new(0.0, 0.0, 0.0, 1.0, 0.0),
];

/// Validated piecewise-linear color map.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorMap {
    stops: Vec<ColorStop>,
}

impl ColorMap {
    /// Creates a color map from a stop list.
    ///
    /// # Errors
    ///
    /// Returns [`RenderingError::InvalidPalette`] unless:
    /// - there are at least two stops,
    /// - every channel is finite and within `[0, 1]`,
    /// - the last stop has width 0 and every other width is positive,
    /// - the widths sum to 1 within [`WIDTH_SUM_TOLERANCE`].
    #[allow(clippy::float_cmp)]
    pub fn new(stops: Vec<ColorStop>) -> RenderingResult<Self> {
        if stops.len() < 2 {
            return Err(RenderingError::InvalidPalette(format!(
                "need at least 2 stops, got {}",
                stops.len()
            )));
        }

        let last = stops.len() - 1;
        let mut sum = 0.0f32;
        for (i, stop) in stops.iter().enumerate() {
            if stop.channels().iter().any(|c| !(0.0..=1.0).contains(c)) {
                return Err(RenderingError::InvalidPalette(format!(
                    "stop {i} has a channel outside [0, 1]"
                )));
            }
            if i == last {
                if stop.width != 0.0 {
                    return Err(RenderingError::InvalidPalette(format!(
                        "last stop must have width 0, got {}",
                        stop.width
                    )));
                }
            } else if !(stop.width.is_finite() && stop.width > 0.0) {
                return Err(RenderingError::InvalidPalette(format!(
                    "stop {i} has non-positive width {}",
                    stop.width
                )));
            }
            sum += stop.width;
        }

        if (sum - 1.0).abs() > WIDTH_SUM_TOLERANCE {
            return Err(RenderingError::InvalidPalette(format!(
                "stop widths sum to {sum}, expected 1"
            )));
        }

        Ok(Self { stops })
    }

    /// The default palette.
    #[must_use]
    pub fn blue() -> Self {
        Self {
            stops: BLUE_STOPS.to_vec(),
        }
    }

    /// The alternate warm palette.
    #[must_use]
    pub fn red() -> Self {
        Self {
            stops: RED_STOPS.to_vec(),
        }
    }

    /// Stop list.
    #[inline]
    #[must_use]
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Maps a scalar onto the palette.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn map(&self, v: f32) -> Rgba {
        let mut start = 0.0f32;
        for pair in self.stops.windows(2) {
            let (from, to) = (&pair[0], &pair[1]);
            if v < start + from.width {
                return from.blend(to, (v - start) / from.width);
            }
            if to.width == 0.0 {
                return to.color();
            }
            start += from.width;
        }
        // Validated maps always end on a zero-width stop.
        self.stops.last().map_or(Rgba::default(), ColorStop::color)
    }
}

impl Default for ColorMap {
    fn default() -> Self {
        Self::blue()
    }
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    (1.0 - t) * a + t * b
}
