//! Packed RGBA pixels and pixel buffers.
//!
//! One pixel is one `u32` with R in the lowest byte and A in the highest,
//! so a little-endian byte view of a buffer is plain `R, G, B, A` order,
//! ready for an `RGBA8` texture upload.

use bytemuck::{Pod, Zeroable};

/// Packed 32-bit RGBA color: `a << 24 | b << 16 | g << 8 | r`.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable, PartialEq, Eq, Hash)]
pub struct Rgba(pub u32);

impl Rgba {
    /// Opaque black.
    pub const BLACK: Self = Self::from_channels(0, 0, 0, 255);

    /// Packs four 8-bit channels.
    #[inline]
    #[must_use]
    pub const fn from_channels(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(u32::from_le_bytes([r, g, b, a]))
    }

    /// Packs four unit-range channels.
    ///
    /// Each channel becomes `(255·c) as u32 & 0xff`: truncated, not
    /// rounded, so `0.03` maps to 7.
    #[inline]
    #[must_use]
    pub fn from_unit(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self::from_channels(unit_to_byte(r), unit_to_byte(g), unit_to_byte(b), unit_to_byte(a))
    }

    /// Red channel.
    #[inline]
    #[must_use]
    pub const fn r(self) -> u8 {
        self.to_bytes()[0]
    }

    /// Green channel.
    #[inline]
    #[must_use]
    pub const fn g(self) -> u8 {
        self.to_bytes()[1]
    }

    /// Blue channel.
    #[inline]
    #[must_use]
    pub const fn b(self) -> u8 {
        self.to_bytes()[2]
    }

    /// Alpha channel.
    #[inline]
    #[must_use]
    pub const fn a(self) -> u8 {
        self.to_bytes()[3]
    }

    /// Channels in memory order `[r, g, b, a]`.
    #[inline]
    #[must_use]
    pub const fn to_bytes(self) -> [u8; 4] {
        self.0.to_le_bytes()
    }
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn unit_to_byte(c: f32) -> u8 {
    ((255.0 * c) as u32 & 0xff) as u8
}

/// Row-major grid of packed pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Rgba>,
}

impl PixelBuffer {
    /// Creates a zero-filled (transparent black) buffer.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgba::default(); width * height],
        }
    }

    /// Number of columns.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// All pixels, row-major.
    #[inline]
    #[must_use]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// All pixels, row-major, writable.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Rgba] {
        &mut self.pixels
    }

    /// Pixel at `(x, y)`, or `None` outside the buffer.
    #[inline]
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y * self.width + x).copied()
    }

    /// Packed words, one per pixel.
    #[inline]
    #[must_use]
    pub fn as_words(&self) -> &[u32] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Raw bytes, four per pixel, for texture upload.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packing_order() {
        let c = Rgba::from_channels(0x11, 0x22, 0x33, 0x44);
        assert_eq!(c.0, 0x4433_2211);
        assert_eq!((c.r(), c.g(), c.b(), c.a()), (0x11, 0x22, 0x33, 0x44));
        assert_eq!(c.to_bytes(), [0x11, 0x22, 0x33, 0x44]);
    }

    #[test]
    fn test_from_unit_truncates() {
        let c = Rgba::from_unit(0.03, 0.5, 1.0, 1.0);
        assert_eq!(c.to_bytes(), [7, 127, 255, 255]);
        assert_eq!(Rgba::from_unit(0.0, 0.0, 0.0, 1.0), Rgba::BLACK);
    }

    #[test]
    fn test_buffer_views() {
        let mut buffer = PixelBuffer::new(2, 2);
        buffer.pixels_mut()[3] = Rgba::from_channels(1, 2, 3, 4);

        assert_eq!(buffer.as_words()[3], 0x0403_0201);
        assert_eq!(buffer.as_bytes().len(), 16);
        assert_eq!(buffer.get(1, 1), Some(Rgba::from_channels(1, 2, 3, 4)));
        assert_eq!(buffer.get(2, 0), None);
    }
}
