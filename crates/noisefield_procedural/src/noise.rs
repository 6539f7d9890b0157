//! # Lattice and Simplex Noise
//!
//! Two deterministic 3D noise generators sharing the constant tables in
//! [`crate::tables`].
//!
//! - [`LatticeNoise`]: classic Perlin-style gradient noise. Eight cube
//!   corners, quintic fade, trilinear interpolation.
//! - [`SimplexNoise`]: skewed tetrahedral lattice, four corners with a
//!   radial `t⁴` falloff, scaled by 32.
//!
//! ## Determinism Guarantee
//!
//! Neither generator holds state. Both are zero-sized and read only the
//! static tables, so identical inputs give bit-identical outputs.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ProceduralError;
use crate::tables::{gradient_dot, hash3};

/// A deterministic 3D scalar noise function.
pub trait Noise3D {
    /// Samples the noise at `(x, y, z)`.
    ///
    /// Total over all finite inputs. Output is roughly in `[-1, 1]`.
    fn sample(&self, x: f32, y: f32, z: f32) -> f32;
}

/// Floor toward negative infinity.
///
/// A plain `as i64` truncates toward zero, which picks the wrong lattice
/// cell for every negative non-integer coordinate.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn fast_floor(x: f32) -> i64 {
    let xi = x as i64;
    if x < xi as f32 {
        // Saturated casts below i64::MIN land here; the cell only feeds `& 255`.
        xi.wrapping_sub(1)
    } else {
        xi
    }
}

/// Quintic fade curve `6t⁵ − 15t⁴ + 10t³`.
#[inline]
#[must_use]
pub fn fade(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Linear interpolation `(1 − t)·a + t·b`.
#[inline]
#[must_use]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    (1.0 - t) * a + t * b
}

/// Wraps a lattice coordinate into `[0, 255]`.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn wrap(cell: i64) -> usize {
    (cell & 255) as usize
}

/// Classic 3D gradient (Perlin-style) noise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LatticeNoise;

impl Noise3D for LatticeNoise {
    fn sample(&self, x: f32, y: f32, z: f32) -> f32 {
        // Find grid cell
        let gx = fast_floor(x);
        let gy = fast_floor(y);
        let gz = fast_floor(z);

        // Relative coords within the cell, taken from the float floor so they
        // stay in [0, 1) even where the integer cell saturates
        let rx = x - x.floor();
        let ry = y - y.floor();
        let rz = z - z.floor();

        let (cx, cy, cz) = (wrap(gx), wrap(gy), wrap(gz));

        // Corner i selects +1 on x with bit 2, y with bit 1, z with bit 0
        let mut n = [0.0f32; 8];
        for (i, corner) in n.iter_mut().enumerate() {
            let ox = (i >> 2) & 1;
            let oy = (i >> 1) & 1;
            let oz = i & 1;
            let gi = hash3(cx + ox, cy + oy, cz + oz);
            *corner = gradient_dot(gi, rx - ox as f32, ry - oy as f32, rz - oz as f32);
        }

        let u = fade(rx);
        let v = fade(ry);
        let w = fade(rz);

        let nx = [
            lerp(n[0], n[4], u),
            lerp(n[1], n[5], u),
            lerp(n[2], n[6], u),
            lerp(n[3], n[7], u),
        ];
        let nxy = [lerp(nx[0], nx[2], v), lerp(nx[1], nx[3], v)];

        lerp(nxy[0], nxy[1], w)
    }
}

/// 3D simplex noise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SimplexNoise;

impl SimplexNoise {
    /// Skewing factor for the 3D simplex grid.
    const F3: f32 = 1.0 / 3.0;
    /// Unskewing factor for the 3D simplex grid.
    const G3: f32 = 1.0 / 6.0;
    /// Squared radius of each corner's kernel.
    const RADIUS_SQ: f32 = 0.6;
    /// Output scale.
    const SCALE: f32 = 32.0;

    /// Picks the two intermediate corners of the tetrahedron holding
    /// `(x0, y0, z0)`.
    #[inline]
    fn simplex_corners(x0: f32, y0: f32, z0: f32) -> ([usize; 3], [usize; 3]) {
        if x0 >= y0 {
            if y0 >= z0 {
                ([1, 0, 0], [1, 1, 0])
            } else if x0 >= z0 {
                ([1, 0, 0], [1, 0, 1])
            } else {
                ([0, 0, 1], [1, 0, 1])
            }
        } else if y0 < z0 {
            ([0, 0, 1], [0, 1, 1])
        } else if x0 < z0 {
            ([0, 1, 0], [0, 1, 1])
        } else {
            ([0, 1, 0], [1, 1, 0])
        }
    }
}

/// Contribution of one simplex corner at offset `(x, y, z)`.
///
/// Exactly zero once the squared distance reaches the kernel radius.
#[inline]
#[must_use]
pub fn simplex_contribution(x: f32, y: f32, z: f32, gradient_index: usize) -> f32 {
    let t = SimplexNoise::RADIUS_SQ - x * x - y * y - z * z;
    if t < 0.0 {
        0.0
    } else {
        let t2 = t * t;
        t2 * t2 * gradient_dot(gradient_index, x, y, z)
    }
}

impl Noise3D for SimplexNoise {
    fn sample(&self, x: f32, y: f32, z: f32) -> f32 {
        // Skew input space to find the cell
        let s = (x + y + z) * Self::F3;
        let i = fast_floor(x + s);
        let j = fast_floor(y + s);
        let k = fast_floor(z + s);

        // Unskew the cell origin back to (x, y, z) space
        let t = (i128::from(i) + i128::from(j) + i128::from(k)) as f32 * Self::G3;
        let x0 = x - (i as f32 - t);
        let y0 = y - (j as f32 - t);
        let z0 = z - (k as f32 - t);

        let ([i1, j1, k1], [i2, j2, k2]) = Self::simplex_corners(x0, y0, z0);

        let x1 = x0 - i1 as f32 + Self::G3;
        let y1 = y0 - j1 as f32 + Self::G3;
        let z1 = z0 - k1 as f32 + Self::G3;
        let x2 = x0 - i2 as f32 + 2.0 * Self::G3;
        let y2 = y0 - j2 as f32 + 2.0 * Self::G3;
        let z2 = z0 - k2 as f32 + 2.0 * Self::G3;
        let x3 = x0 - 1.0 + 3.0 * Self::G3;
        let y3 = y0 - 1.0 + 3.0 * Self::G3;
        let z3 = z0 - 1.0 + 3.0 * Self::G3;

        let (ii, jj, kk) = (wrap(i), wrap(j), wrap(k));

        let gi0 = hash3(ii, jj, kk);
        let gi1 = hash3(ii + i1, jj + j1, kk + k1);
        let gi2 = hash3(ii + i2, jj + j2, kk + k2);
        let gi3 = hash3(ii + 1, jj + 1, kk + 1);

        let n0 = simplex_contribution(x0, y0, z0, gi0);
        let n1 = simplex_contribution(x1, y1, z1, gi1);
        let n2 = simplex_contribution(x2, y2, z2, gi2);
        let n3 = simplex_contribution(x3, y3, z3, gi3);

        Self::SCALE * (n0 + n1 + n2 + n3)
    }
}

/// Selects which base noise the compositor samples.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoiseKind {
    /// [`LatticeNoise`].
    #[default]
    #[serde(alias = "perlin")]
    Lattice,
    /// [`SimplexNoise`].
    Simplex,
}

impl NoiseKind {
    /// All kinds, in selector order.
    pub const ALL: [Self; 2] = [Self::Lattice, Self::Simplex];

    /// The other kind.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Lattice => Self::Simplex,
            Self::Simplex => Self::Lattice,
        }
    }

    /// Lowercase name, as used in config files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lattice => "lattice",
            Self::Simplex => "simplex",
        }
    }
}

impl Noise3D for NoiseKind {
    #[inline]
    fn sample(&self, x: f32, y: f32, z: f32) -> f32 {
        match self {
            Self::Lattice => LatticeNoise.sample(x, y, z),
            Self::Simplex => SimplexNoise.sample(x, y, z),
        }
    }
}

impl TryFrom<u8> for NoiseKind {
    type Error = ProceduralError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Lattice),
            1 => Ok(Self::Simplex),
            other => Err(ProceduralError::InvalidNoiseKind(other.to_string())),
        }
    }
}

impl FromStr for NoiseKind {
    type Err = ProceduralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lattice" | "perlin" => Ok(Self::Lattice),
            "simplex" => Ok(Self::Simplex),
            _ => Err(ProceduralError::InvalidNoiseKind(s.to_string())),
        }
    }
}

impl fmt::Display for NoiseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_fixed_points() {
        assert_eq!(fade(0.0), 0.0);
        assert_eq!(fade(1.0), 1.0);
        assert_eq!(fade(0.5), 0.5);
    }

    #[test]
    fn test_fast_floor_negative() {
        assert_eq!(fast_floor(1.5), 1);
        assert_eq!(fast_floor(0.0), 0);
        assert_eq!(fast_floor(-0.5), -1);
        assert_eq!(fast_floor(-1.0), -1);
        assert_eq!(fast_floor(-1.25), -2);
        assert_eq!(fast_floor(-3.0e9), -3_000_000_000);
        assert_eq!(fast_floor(3.0e9), 3_000_000_000);
    }

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(2.0, 7.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 7.0, 1.0), 7.0);
        assert_eq!(lerp(0.0, 1.0, 0.25), 0.25);
    }

    #[test]
    fn test_lattice_determinism() {
        for i in 0..200 {
            let x = i as f32 * 0.173 - 11.0;
            let y = i as f32 * 0.311 + 3.5;
            let z = i as f32 * 0.057;
            assert_eq!(
                LatticeNoise.sample(x, y, z).to_bits(),
                LatticeNoise.sample(x, y, z).to_bits(),
                "Lattice noise should be deterministic"
            );
        }
    }

    #[test]
    fn test_lattice_zero_on_lattice_points() {
        // Every corner offset is the zero vector there, so every dot is zero.
        for x in -3..4 {
            for y in -3..4 {
                for z in [-300, -1, 0, 1, 255, 256, 1000] {
                    let v = LatticeNoise.sample(x as f32, y as f32, z as f32);
                    assert_eq!(v, 0.0, "Lattice point ({x}, {y}, {z}) gave {v}");
                }
            }
        }
    }

    #[test]
    fn test_lattice_periodic_in_256() {
        let a = LatticeNoise.sample(1.3, 2.7, 0.4);
        let b = LatticeNoise.sample(257.3, 2.7, 0.4);
        assert!((a - b).abs() < 1e-4, "Lattice should repeat every 256 cells: {a} vs {b}");
    }

    #[test]
    fn test_lattice_negative_coordinates_use_floor() {
        // -0.5 lives in cell -1 (wrapped to 255), not cell 0
        let v = LatticeNoise.sample(-0.5, 0.25, 0.75);
        let wrapped = LatticeNoise.sample(255.5, 0.25, 0.75);
        assert!((v - wrapped).abs() < 1e-5, "{v} vs {wrapped}");
    }

    #[test]
    fn test_lattice_continuity() {
        let x = 10.0;
        let y = 3.3;
        let z = 0.7;
        let delta = 0.0005;

        let below = LatticeNoise.sample(x - delta, y, z);
        let at = LatticeNoise.sample(x, y, z);
        let above = LatticeNoise.sample(x + delta, y, z);

        assert!((below - at).abs() < 0.01, "Noise should be continuous across cells");
        assert!((above - at).abs() < 0.01, "Noise should be continuous across cells");
    }

    #[test]
    fn test_lattice_range() {
        for i in 0..10_000 {
            let x = i as f32 * 0.0731 - 300.0;
            let y = i as f32 * 0.0419;
            let z = i as f32 * 0.013;
            let v = LatticeNoise.sample(x, y, z);
            assert!((-1.1..=1.1).contains(&v), "Value {v} out of range at ({x}, {y}, {z})");
        }
    }

    #[test]
    fn test_simplex_determinism() {
        for i in 0..200 {
            let x = i as f32 * 0.173 - 11.0;
            let y = i as f32 * 0.311 + 3.5;
            let z = i as f32 * 0.057;
            assert_eq!(
                SimplexNoise.sample(x, y, z).to_bits(),
                SimplexNoise.sample(x, y, z).to_bits(),
                "Simplex noise should be deterministic"
            );
        }
    }

    #[test]
    fn test_simplex_origin_is_zero() {
        // Corner 0 has a zero offset; the other three are outside the kernel.
        assert_eq!(SimplexNoise.sample(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_simplex_falloff_outside_kernel() {
        for gi in 0..12 {
            assert_eq!(simplex_contribution(0.6f32.sqrt() + 1e-4, 0.0, 0.0, gi), 0.0);
            assert_eq!(simplex_contribution(0.5, 0.5, 0.5, gi), 0.0);
            assert_eq!(simplex_contribution(-1.0, 0.0, 0.2, gi), 0.0);
        }
    }

    #[test]
    fn test_simplex_contribution_inside_kernel() {
        // gradient 0 = (1, 1, 0); t = 0.6 - 0.02 = 0.58
        let c = simplex_contribution(0.1, 0.1, 0.0, 0);
        let t: f32 = 0.6 - 0.01 - 0.01;
        let expected = t * t * t * t * 0.2;
        assert!((c - expected).abs() < 1e-7, "{c} vs {expected}");
    }

    #[test]
    fn test_simplex_corner_selection() {
        assert_eq!(SimplexNoise::simplex_corners(0.3, 0.2, 0.1), ([1, 0, 0], [1, 1, 0]));
        assert_eq!(SimplexNoise::simplex_corners(0.3, 0.1, 0.2), ([1, 0, 0], [1, 0, 1]));
        assert_eq!(SimplexNoise::simplex_corners(0.2, 0.1, 0.3), ([0, 0, 1], [1, 0, 1]));
        assert_eq!(SimplexNoise::simplex_corners(0.1, 0.2, 0.3), ([0, 0, 1], [0, 1, 1]));
        assert_eq!(SimplexNoise::simplex_corners(0.1, 0.3, 0.2), ([0, 1, 0], [0, 1, 1]));
        assert_eq!(SimplexNoise::simplex_corners(0.2, 0.3, 0.1), ([0, 1, 0], [1, 1, 0]));
        // Ties resolve through the >= branches
        assert_eq!(SimplexNoise::simplex_corners(0.2, 0.2, 0.2), ([1, 0, 0], [1, 1, 0]));
        assert_eq!(SimplexNoise::simplex_corners(0.1, 0.2, 0.1), ([0, 1, 0], [1, 1, 0]));
    }

    #[test]
    fn test_simplex_range() {
        for i in 0..10_000 {
            let x = i as f32 * 0.0731 - 300.0;
            let y = i as f32 * 0.0419;
            let z = i as f32 * 0.013;
            let v = SimplexNoise.sample(x, y, z);
            assert!((-1.1..=1.1).contains(&v), "Value {v} out of range at ({x}, {y}, {z})");
        }
    }

    #[test]
    fn test_huge_coordinates_stay_finite() {
        let points = [
            (-3.0e9, 0.5, 0.5),
            (3.0e9, 0.5, 0.5),
            (1.0e9, 1.0e9, 1.0e9),
            (-3.0e9, -3.0e9, -3.0e9),
            (f32::MAX, -f32::MAX, 0.25),
        ];
        for (x, y, z) in points {
            for kind in NoiseKind::ALL {
                let v = kind.sample(x, y, z);
                assert!(v.is_finite(), "{kind} gave {v} at ({x}, {y}, {z})");
            }
            assert!(LatticeNoise.sample(x, y, z).is_finite());
            assert!(SimplexNoise.sample(x, y, z).is_finite());
        }
    }

    #[test]
    fn test_noise_kind_dispatch() {
        let (x, y, z) = (1.37, 4.2, 0.9);
        assert_eq!(NoiseKind::Lattice.sample(x, y, z), LatticeNoise.sample(x, y, z));
        assert_eq!(NoiseKind::Simplex.sample(x, y, z), SimplexNoise.sample(x, y, z));
    }

    #[test]
    fn test_noise_kind_selectors() {
        assert_eq!(NoiseKind::try_from(0), Ok(NoiseKind::Lattice));
        assert_eq!(NoiseKind::try_from(1), Ok(NoiseKind::Simplex));
        assert_eq!(
            NoiseKind::try_from(2),
            Err(ProceduralError::InvalidNoiseKind("2".to_string()))
        );
        assert_eq!("Simplex".parse::<NoiseKind>(), Ok(NoiseKind::Simplex));
        assert!("worley".parse::<NoiseKind>().is_err());
        assert_eq!(NoiseKind::Lattice.toggled(), NoiseKind::Simplex);
        assert_eq!(NoiseKind::Simplex.toggled().toggled(), NoiseKind::Simplex);
        assert_eq!(NoiseKind::Simplex.to_string(), "simplex");
    }
}
