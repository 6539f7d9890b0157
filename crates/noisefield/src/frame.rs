//! # Frame Pipeline
//!
//! One frame is: evaluate the scalar field, optionally stretch it to
//! `[0, 1]`, colorize through the gradient LUT, count the histogram, and
//! draw the histogram panel.
//!
//! ```text
//! ScalarField ──► GradientLut ──► pixels
//!      │
//!      └──────► Histogram ──► HistogramPanel ──► panel pixels
//! ```
//!
//! The renderer owns every buffer and overwrites all of them on each call,
//! so nothing from one frame leaks into the next.

use std::time::{Duration, Instant};

use noisefield_procedural::{CompositionMode, FieldDimensions, NoiseKind, ScalarField};
use noisefield_rendering::{ColorMap, GradientLut, Histogram, HistogramPanel, PixelBuffer};

use crate::config::EngineConfig;
use crate::error::NoisefieldResult;

/// Frames per cycle of the time coordinate formula.
pub const FRAMES_PER_CYCLE: u32 = 512;

/// Depth advanced over [`FRAMES_PER_CYCLE`] frames.
pub const DEPTH_PER_CYCLE: f64 = 10.0;

/// Smoothing factor of the frame time moving average.
pub const TIMING_EMA_ALPHA: f64 = 0.05;

/// Depth coordinate for an animation frame: `10·frame / 512`.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn time_coordinate(frame: u32) -> f32 {
    (DEPTH_PER_CYCLE * f64::from(frame) / f64::from(FRAMES_PER_CYCLE)) as f32
}

/// Output of one [`FrameRenderer::render`] call, borrowed from the renderer.
#[derive(Debug)]
pub struct Frame<'a> {
    /// Noise kind used.
    pub kind: NoiseKind,
    /// Composition mode used.
    pub mode: CompositionMode,
    /// Depth coordinate.
    pub z: f32,
    /// Whether the field was stretched to `[0, 1]`.
    pub stretched: bool,
    /// Scalar values, after stretching.
    pub field: &'a ScalarField,
    /// Colorized field.
    pub pixels: &'a PixelBuffer,
    /// Value distribution of the field.
    pub histogram: &'a Histogram,
    /// Bar chart of the histogram.
    pub panel: &'a PixelBuffer,
    /// Wall time spent producing the frame.
    pub elapsed: Duration,
}

/// Exponential moving average of frame times.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameTiming {
    frames: u64,
    last_ms: f64,
    ema_ms: f64,
}

impl FrameTiming {
    /// Adds one frame time. The first sample seeds the average.
    pub fn record(&mut self, elapsed: Duration) {
        let ms = elapsed.as_secs_f64() * 1000.0;
        self.ema_ms = if self.frames == 0 {
            ms
        } else {
            TIMING_EMA_ALPHA * ms + (1.0 - TIMING_EMA_ALPHA) * self.ema_ms
        };
        self.last_ms = ms;
        self.frames += 1;
    }

    /// Frames recorded.
    #[inline]
    #[must_use]
    pub const fn frames(&self) -> u64 {
        self.frames
    }

    /// Most recent frame time in milliseconds.
    #[inline]
    #[must_use]
    pub const fn last_ms(&self) -> f64 {
        self.last_ms
    }

    /// Smoothed frame time in milliseconds.
    #[inline]
    #[must_use]
    pub const fn average_ms(&self) -> f64 {
        self.ema_ms
    }
}

/// Reusable frame renderer.
#[derive(Debug)]
pub struct FrameRenderer {
    kind: NoiseKind,
    mode: CompositionMode,
    stretch: bool,
    map: ColorMap,
    lut: GradientLut,
    field: ScalarField,
    pixels: PixelBuffer,
    histogram: Histogram,
    panel: HistogramPanel,
    panel_pixels: PixelBuffer,
    timing: FrameTiming,
}

impl FrameRenderer {
    /// Builds the palette, LUT, and every buffer from `config`.
    ///
    /// # Errors
    ///
    /// Returns the first invalid setting in `config`.
    pub fn new(config: &EngineConfig) -> NoisefieldResult<Self> {
        let dims = config.dimensions()?;
        let mode = config.mode()?;
        let map = config.palette.color_map()?;
        let bins = config.bins();

        let histogram = Histogram::new(bins)?;
        let lut = GradientLut::build(&map);
        let panel = HistogramPanel::new(&map, bins, dims.height());
        let panel_pixels = panel.buffer();

        tracing::info!(
            width = dims.width(),
            height = dims.height(),
            noise = %config.field.noise,
            %mode,
            bins,
            stretch = config.field.stretch,
            "frame renderer ready"
        );

        Ok(Self {
            kind: config.field.noise,
            mode,
            stretch: config.field.stretch,
            map,
            lut,
            field: ScalarField::new(dims),
            pixels: PixelBuffer::new(dims.width(), dims.height()),
            histogram,
            panel,
            panel_pixels,
            timing: FrameTiming::default(),
        })
    }

    /// Field size.
    #[inline]
    #[must_use]
    pub const fn dimensions(&self) -> FieldDimensions {
        self.field.dimensions()
    }

    /// Configured noise kind.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> NoiseKind {
        self.kind
    }

    /// Configured composition mode.
    #[inline]
    #[must_use]
    pub const fn mode(&self) -> CompositionMode {
        self.mode
    }

    /// Active palette.
    #[inline]
    #[must_use]
    pub const fn color_map(&self) -> &ColorMap {
        &self.map
    }

    /// Gradient table built from the palette.
    #[inline]
    #[must_use]
    pub const fn lut(&self) -> &GradientLut {
        &self.lut
    }

    /// Frame time statistics across every rendered frame.
    #[inline]
    #[must_use]
    pub const fn timing(&self) -> &FrameTiming {
        &self.timing
    }

    /// Switches the configured noise kind.
    pub fn set_kind(&mut self, kind: NoiseKind) {
        self.kind = kind;
    }

    /// Switches the configured composition mode.
    pub fn set_mode(&mut self, mode: CompositionMode) {
        self.mode = mode;
    }

    /// Renders one frame with an explicit selection.
    ///
    /// # Errors
    ///
    /// Returns a buffer size mismatch if an internal buffer disagrees with
    /// the field size. Buffers are sized together in [`Self::new`], so
    /// this does not happen for a renderer built from a valid config.
    pub fn render(
        &mut self,
        kind: NoiseKind,
        mode: CompositionMode,
        z: f32,
    ) -> NoisefieldResult<Frame<'_>> {
        let start = Instant::now();

        self.field.fill(&kind, mode, z);
        let stretched = self.stretch && self.field.stretch();
        self.lut.colorize(self.field.values(), &mut self.pixels)?;
        self.histogram.recount(self.field.values());
        self.panel.render(&self.histogram, &mut self.panel_pixels)?;

        let elapsed = start.elapsed();
        self.timing.record(elapsed);
        tracing::debug!(
            %kind,
            %mode,
            z,
            stretched,
            histogram_max = self.histogram.max(),
            elapsed_us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX),
            "frame rendered"
        );

        Ok(Frame {
            kind,
            mode,
            z,
            stretched,
            field: &self.field,
            pixels: &self.pixels,
            histogram: &self.histogram,
            panel: &self.panel_pixels,
            elapsed,
        })
    }

    /// Renders animation frame `frame_index` with the configured selection.
    ///
    /// # Errors
    ///
    /// As [`Self::render`].
    pub fn render_frame(&mut self, frame_index: u32) -> NoisefieldResult<Frame<'_>> {
        self.render(self.kind, self.mode, time_coordinate(frame_index))
    }
}
