//! # Fractal Composition
//!
//! Combines one to four calls to a base noise into a value in `[0, 1]`.
//!
//! Every mode is a fixed closed form. Pixel `(px, py)` on a
//! `width × height` grid is sampled at `(fx·px / height, fy·py / height, z)`
//! for a per-term frequency pair `(fx, fy)`. Both axes are scaled by the
//! grid height, so non-square grids stretch horizontally.
//!
//! | # | Mode | Terms | Remap |
//! |---|------|-------|-------|
//! | 0 | `Smooth` | `N(2, 2)` | `0.5·v + 0.5` |
//! | 1 | `Grain` | `N(128, 64)` | `0.5·v + 0.5` |
//! | 2 | `Streaks` | `N(256, 4)` | `0.5·v + 0.5` |
//! | 3 | `Cells` | `N(16, 16)` | `0.5·v + 0.5` |
//! | 4 | `OctaveSum` | `Σ 2⁻ˡ·N(2ˡ, 2ˡ)`, l = 1..4 | `0.5·v·16/15 + 0.5` |
//! | 5 | `StretchedOctaveSum` | `Σ 2⁻ˡ·N(2ˡ, 2^(l²))` | `0.5·v·16/15 + 0.5` |
//! | 6 | `Turbulence` | `Σ |2⁻ˡ·N(2ˡ, 2ˡ)|` | `v·16/15 + 0.25` |
//! | 7 | `WovenTurbulence` | as 6, x/y exponents swap `l` and `l²` by parity | `v·16/15 + 0.25` |
//! | 8 | `Marble` | turbulence sum `T` | `0.5·sin(−1 + 1.8π·py/h + T) + 0.5` |
//! | 9 | `Ripples` | `Σ sin(lπ·py/h + (5−l)π·px/w + |N(2ˡ, 2ˡ)|)` | `v/8 + 0.5` |
//! | 10 | `Bands` | `T = Σ |N(2ˡ, 2ˡ)/l|`, l = 2..3 | `0.5·sin(−1 + 0.8π·py/h + T) + 0.5` |

use std::f32::consts::PI;
use std::fmt;

use crate::error::ProceduralError;
use crate::field::FieldDimensions;
use crate::noise::Noise3D;

/// Exact reciprocal of the 4-octave amplitude sum `1/2 + 1/4 + 1/8 + 1/16`.
const OCTAVE_NORM: f32 = 16.0 / 15.0;

/// Closed set of composition policies, selected by index `0..=10`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CompositionMode {
    /// Single low-frequency octave.
    Smooth = 0,
    /// Single high-frequency octave, 2:1 anisotropic.
    Grain = 1,
    /// Single octave stretched 64:1 along x.
    Streaks = 2,
    /// Single mid-frequency octave.
    Cells = 3,
    /// Four-octave weighted sum.
    #[default]
    OctaveSum = 4,
    /// Four-octave sum with y frequency growing as `2^(l²)`.
    StretchedOctaveSum = 5,
    /// Four-octave absolute-value sum.
    Turbulence = 6,
    /// Turbulence with alternating anisotropy per octave.
    WovenTurbulence = 7,
    /// Turbulence used as the phase of a vertical sine.
    Marble = 8,
    /// Sum of diagonal sines perturbed by absolute noise.
    Ripples = 9,
    /// Two-octave turbulence phase on a slow vertical sine.
    Bands = 10,
}

impl CompositionMode {
    /// Number of modes.
    pub const COUNT: u8 = 11;

    /// All modes in index order.
    pub const ALL: [Self; Self::COUNT as usize] = [
        Self::Smooth,
        Self::Grain,
        Self::Streaks,
        Self::Cells,
        Self::OctaveSum,
        Self::StretchedOctaveSum,
        Self::Turbulence,
        Self::WovenTurbulence,
        Self::Marble,
        Self::Ripples,
        Self::Bands,
    ];

    /// Selector index of this mode.
    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// The following mode, wrapping after the last one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self::ALL[((self.index() + 1) % Self::COUNT) as usize]
    }

    /// Short human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Smooth => "smooth",
            Self::Grain => "grain",
            Self::Streaks => "streaks",
            Self::Cells => "cells",
            Self::OctaveSum => "octave-sum",
            Self::StretchedOctaveSum => "stretched-octave-sum",
            Self::Turbulence => "turbulence",
            Self::WovenTurbulence => "woven-turbulence",
            Self::Marble => "marble",
            Self::Ripples => "ripples",
            Self::Bands => "bands",
        }
    }
}

impl TryFrom<u8> for CompositionMode {
    type Error = ProceduralError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(ProceduralError::InvalidMode(value))
    }
}

impl fmt::Display for CompositionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.index())
    }
}

/// `2^exp` as a float.
#[inline]
fn pow2(exp: u32) -> f32 {
    (1u32 << exp) as f32
}

/// Samples the base noise for one pixel at scaled frequencies.
struct PixelSampler<'a, N: ?Sized> {
    noise: &'a N,
    px: f32,
    py: f32,
    z: f32,
    width: f32,
    height: f32,
}

impl<N: Noise3D + ?Sized> PixelSampler<'_, N> {
    #[inline]
    fn at(&self, fx: f32, fy: f32) -> f32 {
        self.noise
            .sample(fx * self.px / self.height, fy * self.py / self.height, self.z)
    }

    /// `Σ 2⁻ˡ · N(fx(l), fy(l))` for `l = 1..4`.
    #[inline]
    fn octave_sum(&self, freq: impl Fn(u32) -> (f32, f32)) -> f32 {
        (1..=4)
            .map(|l| {
                let (fx, fy) = freq(l);
                (1.0 / pow2(l)) * self.at(fx, fy)
            })
            .sum()
    }

    /// `Σ |2⁻ˡ · N(fx(l), fy(l))|` for `l = 1..4`.
    #[inline]
    fn turbulence(&self, freq: impl Fn(u32) -> (f32, f32)) -> f32 {
        (1..=4)
            .map(|l| {
                let (fx, fy) = freq(l);
                ((1.0 / pow2(l)) * self.at(fx, fy)).abs()
            })
            .sum()
    }
}

#[inline]
fn isotropic(l: u32) -> (f32, f32) {
    (pow2(l), pow2(l))
}

#[inline]
fn unit(v: f32) -> f32 {
    0.5 * v + 0.5
}

/// Evaluates composition `mode` at pixel `(px, py)` of a `dims` grid.
///
/// `z` is the caller's time coordinate, passed straight through to every
/// noise call.
#[must_use]
pub fn compose<N: Noise3D + ?Sized>(
    mode: CompositionMode,
    noise: &N,
    px: usize,
    py: usize,
    z: f32,
    dims: FieldDimensions,
) -> f32 {
    let s = PixelSampler {
        noise,
        px: px as f32,
        py: py as f32,
        z,
        width: dims.width() as f32,
        height: dims.height() as f32,
    };

    match mode {
        CompositionMode::Smooth => unit(s.at(2.0, 2.0)),
        CompositionMode::Grain => unit(s.at(128.0, 64.0)),
        CompositionMode::Streaks => unit(s.at(256.0, 4.0)),
        CompositionMode::Cells => unit(s.at(16.0, 16.0)),
        CompositionMode::OctaveSum => 0.5 * s.octave_sum(isotropic) * OCTAVE_NORM + 0.5,
        CompositionMode::StretchedOctaveSum => {
            0.5 * s.octave_sum(|l| (pow2(l), pow2(l * l))) * OCTAVE_NORM + 0.5
        }
        CompositionMode::Turbulence => s.turbulence(isotropic) * OCTAVE_NORM + 0.25,
        CompositionMode::WovenTurbulence => {
            let woven = |l: u32| {
                if l % 2 == 1 {
                    (pow2(l * l), pow2(l))
                } else {
                    (pow2(l), pow2(l * l))
                }
            };
            s.turbulence(woven) * OCTAVE_NORM + 0.25
        }
        CompositionMode::Marble => {
            let phase = s.turbulence(isotropic);
            unit((-1.0 + (1.8 * PI * s.py) / s.height + phase).sin())
        }
        CompositionMode::Ripples => {
            let sum: f32 = (1..=4u32)
                .map(|l| {
                    let lf = l as f32;
                    ((lf * PI * s.py) / s.height
                        + ((5.0 - lf) * PI * s.px) / s.width
                        + s.at(pow2(l), pow2(l)).abs())
                    .sin()
                })
                .sum();
            (1.0 / 8.0) * sum + 0.5
        }
        CompositionMode::Bands => {
            let phase: f32 = (2..=3u32)
                .map(|l| ((1.0 / l as f32) * s.at(pow2(l), pow2(l))).abs())
                .sum();
            unit((-1.0 + (0.8 * PI * s.py) / s.height + phase).sin())
        }
    }
}
