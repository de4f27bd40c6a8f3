//! PixelBuffer: a decoded image as a grid of [`Rgb`] cells.

use thiserror::Error;

use crate::color::Rgb;

/// Error type for pixel buffer construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BufferError {
    /// The pixel data does not cover exactly `width * height` cells.
    #[error("pixel data has {actual} values, expected {expected} for {width}x{height}")]
    SizeMismatch {
        /// Image width in pixels
        width: usize,
        /// Image height in pixels
        height: usize,
        /// Required number of values
        expected: usize,
        /// Number of values supplied
        actual: usize,
    },
}

/// A width × height grid of colors in row-major order.
///
/// The buffer is owned by the caller (usually an image decoder); conversion
/// only reads and overwrites individual cells.
///
/// # Example
///
/// ```
/// use lab_match::{PixelBuffer, Rgb};
///
/// let mut buffer = PixelBuffer::from_rgb_bytes(2, 1, &[0, 0, 0, 255, 255, 255]).unwrap();
/// assert_eq!(buffer.get(1, 0), Some(Rgb::WHITE));
///
/// buffer.set(1, 0, Rgb::BLACK);
/// assert_eq!(buffer.to_rgb_bytes(), vec![0, 0, 0, 0, 0, 0]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Pixels, one per cell, row-major order.
    pixels: Vec<Rgb>,
    /// Image width in pixels.
    width: usize,
    /// Image height in pixels.
    height: usize,
}

impl PixelBuffer {
    /// Create a buffer from row-major pixels.
    ///
    /// # Errors
    ///
    /// [`BufferError::SizeMismatch`] unless `pixels.len() == width * height`.
    pub fn new(width: usize, height: usize, pixels: Vec<Rgb>) -> Result<Self, BufferError> {
        let expected = width * height;
        if pixels.len() != expected {
            return Err(BufferError::SizeMismatch {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Create a buffer from packed `[R, G, B, R, G, B, ...]` bytes.
    ///
    /// # Errors
    ///
    /// [`BufferError::SizeMismatch`] unless `bytes.len() == width * height * 3`.
    pub fn from_rgb_bytes(width: usize, height: usize, bytes: &[u8]) -> Result<Self, BufferError> {
        let expected = width * height * 3;
        if bytes.len() != expected {
            return Err(BufferError::SizeMismatch {
                width,
                height,
                expected,
                actual: bytes.len(),
            });
        }
        let pixels = bytes
            .chunks_exact(3)
            .map(|px| Rgb::new(px[0], px[1], px[2]))
            .collect();
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Mutable access to all pixels in row-major order.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Rgb] {
        &mut self.pixels
    }

    /// The pixel at column `x`, row `y`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<Rgb> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Overwrite the pixel at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the grid.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, color: Rgb) {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} buffer",
            self.width,
            self.height
        );
        self.pixels[y * self.width + x] = color;
    }

    /// Pack into `[R, G, B, R, G, B, ...]` bytes, length `width * height * 3`.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.pixels.len() * 3);
        for px in &self.pixels {
            rgb.extend_from_slice(&px.to_bytes());
        }
        rgb
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stores_fields() {
        let pixels: Vec<Rgb> = [Rgb::BLACK, Rgb::WHITE].repeat(3);
        let buffer = PixelBuffer::new(3, 2, pixels.clone()).unwrap();

        assert_eq!(buffer.width(), 3);
        assert_eq!(buffer.height(), 2);
        assert_eq!(buffer.pixels(), pixels.as_slice());
    }

    #[test]
    fn test_new_rejects_wrong_length() {
        let result = PixelBuffer::new(2, 2, vec![Rgb::BLACK; 3]);
        assert_eq!(
            result.unwrap_err(),
            BufferError::SizeMismatch {
                width: 2,
                height: 2,
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn test_from_rgb_bytes_layout() {
        let buffer = PixelBuffer::from_rgb_bytes(2, 1, &[1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(buffer.pixels(), &[Rgb::new(1, 2, 3), Rgb::new(4, 5, 6)]);
        assert_eq!(buffer.to_rgb_bytes(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_from_rgb_bytes_rejects_partial_pixel() {
        let result = PixelBuffer::from_rgb_bytes(1, 1, &[1, 2]);
        assert!(matches!(result, Err(BufferError::SizeMismatch { .. })));
    }

    #[test]
    fn test_row_major_addressing() {
        let pixels: Vec<Rgb> = (0..6).map(|i| Rgb::new(i, 0, 0)).collect();
        let mut buffer = PixelBuffer::new(3, 2, pixels).unwrap();

        // (x=1, y=1) is the fifth cell
        assert_eq!(buffer.get(1, 1), Some(Rgb::new(4, 0, 0)));
        assert_eq!(buffer.get(3, 0), None);
        assert_eq!(buffer.get(0, 2), None);

        buffer.set(2, 0, Rgb::WHITE);
        assert_eq!(buffer.pixels()[2], Rgb::WHITE);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_set_out_of_bounds_panics() {
        let mut buffer = PixelBuffer::new(1, 1, vec![Rgb::BLACK]).unwrap();
        buffer.set(1, 0, Rgb::WHITE);
    }

    #[test]
    fn test_empty_buffer() {
        let buffer = PixelBuffer::new(0, 0, Vec::new()).unwrap();
        assert!(buffer.pixels().is_empty());
        assert!(buffer.to_rgb_bytes().is_empty());
    }
}
