//! # Constant Noise Tables
//!
//! The permutation and gradient tables shared by every noise kind.
//!
//! Both tables are compile-time constants. Nothing here is seeded or
//! shuffled at runtime, so a given `(x, y, z)` maps to the same value on
//! every platform and in every process.

/// Number of distinct lattice cells before the hash repeats.
pub const PERMUTATION_SIZE: usize = 256;

/// Number of gradient directions.
pub const GRADIENT_COUNT: usize = 12;

/// The base permutation of `0..=255`.
const BASE_PERMUTATION: [u8; PERMUTATION_SIZE] = [
    182, 232, 51, 15, 55, 119, 7, 107, 230, 227, 6, 34, 216, 61, 183, 36,
    40, 134, 74, 45, 157, 78, 81, 114, 145, 9, 209, 189, 147, 58, 126, 0,
    240, 169, 228, 235, 67, 198, 72, 64, 88, 98, 129, 194, 99, 71, 30, 127,
    18, 150, 155, 179, 132, 62, 116, 200, 251, 178, 32, 140, 130, 139, 250, 26,
    151, 203, 106, 123, 53, 255, 75, 254, 86, 234, 223, 19, 199, 244, 241, 1,
    172, 70, 24, 97, 196, 10, 90, 246, 252, 68, 84, 161, 236, 205, 80, 91,
    233, 225, 164, 217, 239, 220, 20, 46, 204, 35, 31, 175, 154, 17, 133, 117,
    73, 224, 125, 65, 77, 173, 3, 2, 242, 221, 120, 218, 56, 190, 166, 11,
    138, 208, 231, 50, 135, 109, 213, 187, 152, 201, 47, 168, 185, 186, 167, 165,
    102, 153, 156, 49, 202, 69, 195, 92, 21, 229, 63, 104, 197, 136, 148, 94,
    171, 93, 59, 149, 23, 144, 160, 57, 76, 141, 96, 158, 163, 219, 237, 113,
    206, 181, 112, 111, 191, 137, 207, 215, 13, 83, 238, 249, 100, 131, 118, 243,
    162, 248, 43, 66, 226, 27, 211, 95, 214, 105, 108, 101, 170, 128, 210, 87,
    38, 44, 174, 188, 176, 39, 14, 143, 159, 16, 124, 222, 33, 247, 37, 245,
    8, 4, 22, 82, 110, 180, 184, 12, 25, 5, 193, 41, 85, 177, 192, 253,
    79, 29, 115, 103, 142, 146, 52, 48, 89, 54, 121, 212, 122, 60, 28, 42,
];

/// 512-entry permutation (256 entries, doubled for overflow handling).
static PERMUTATION: [u8; 2 * PERMUTATION_SIZE] = double(BASE_PERMUTATION);

/// Gradient directions: the 12 edge midpoints of a cube.
static GRADIENTS: [[i8; 3]; GRADIENT_COUNT] = [
    [1, 1, 0], [-1, 1, 0], [1, -1, 0], [-1, -1, 0],
    [1, 0, 1], [-1, 0, 1], [1, 0, -1], [-1, 0, -1],
    [0, 1, 1], [0, -1, 1], [0, 1, -1], [0, -1, -1],
];

const fn double(base: [u8; PERMUTATION_SIZE]) -> [u8; 2 * PERMUTATION_SIZE] {
    let mut out = [0u8; 2 * PERMUTATION_SIZE];
    let mut i = 0;
    while i < PERMUTATION_SIZE {
        out[i] = base[i];
        out[i + PERMUTATION_SIZE] = base[i];
        i += 1;
    }
    out
}

/// Returns the permutation value at `index`.
///
/// Valid for `index` in `[0, 511]`. Callers wrap lattice coordinates with
/// `& 255` first and may then add neighbour offsets of 0 or 1 plus one
/// nested lookup without leaving the table.
#[inline]
#[must_use]
pub fn permutation(index: usize) -> u8 {
    PERMUTATION[index]
}

/// Returns the gradient vector at `index` (`0..12`).
#[inline]
#[must_use]
pub fn gradient(index: usize) -> [i8; 3] {
    GRADIENTS[index]
}

/// Reduces a permutation value to a gradient index (`0..12`).
#[inline]
#[must_use]
pub fn gradient_index(hash: u8) -> usize {
    usize::from(hash) % GRADIENT_COUNT
}

/// Hashes a wrapped lattice coordinate into a gradient index (`0..12`).
///
/// `x`, `y` and `z` are cell coordinates already wrapped into `[0, 255]`,
/// optionally plus a neighbour offset of 1.
#[inline]
#[must_use]
pub fn hash3(x: usize, y: usize, z: usize) -> usize {
    let hz = usize::from(permutation(z));
    let hy = usize::from(permutation(y + hz));
    gradient_index(permutation(x + hy))
}

/// Dot product of gradient `index` with the offset vector `(x, y, z)`.
#[inline]
#[must_use]
pub fn gradient_dot(index: usize, x: f32, y: f32, z: f32) -> f32 {
    let g = gradient(index);
    f32::from(g[0]) * x + f32::from(g[1]) * y + f32::from(g[2]) * z
}
