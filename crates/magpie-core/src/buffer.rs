//! Owned, strided RGBA pixel storage.
//!
//! [`PixelBuffer`] is the one buffer type the engine reads from and writes
//! to. It stores interleaved 8-bit RGBA samples with an explicit row stride
//! and an absolute bounding rectangle, so a buffer may describe a window
//! that does not start at the origin.
//!
//! ```text
//! data: [R G B A R G B A ... pad][R G B A ... pad]...
//!        |<- width * 4 ->|       |
//!        |<----- stride ------->|
//! ```
//!
//! # Example
//!
//! ```rust
//! use magpie_core::{AlphaMode, PixelBuffer, Rect};
//!
//! let mut buf = PixelBuffer::new(Rect::new(10, 10, 20, 20), AlphaMode::Straight);
//! buf.set_pixel(12, 15, [255, 0, 0, 255]).unwrap();
//! assert_eq!(buf.pixel(12, 15).unwrap(), [255, 0, 0, 255]);
//! assert!(buf.pixel(0, 0).is_err());
//! ```

use crate::error::{Error, Result};
use crate::pixel::{self, AlphaMode, BYTES_PER_PIXEL};
use crate::rect::Rect;

/// Interleaved 8-bit RGBA pixels covering an absolute rectangle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Vec<u8>,
    stride: usize,
    rect: Rect,
    alpha: AlphaMode,
}

impl PixelBuffer {
    /// Creates a zeroed (fully transparent) buffer with a tight stride.
    pub fn new(rect: Rect, alpha: AlphaMode) -> Self {
        let stride = rect.width() * BYTES_PER_PIXEL;
        Self {
            data: vec![0; stride * rect.height()],
            stride,
            rect,
            alpha,
        }
    }

    /// Creates a buffer where every pixel is `px`.
    pub fn filled(rect: Rect, alpha: AlphaMode, px: [u8; 4]) -> Self {
        let mut buf = Self::new(rect, alpha);
        buf.fill(px);
        buf
    }

    /// Wraps existing pixel data.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidStride`] if `stride < width * 4`
    /// - [`Error::BufferTooSmall`] if `data` cannot hold the last row
    pub fn from_vec(rect: Rect, stride: usize, alpha: AlphaMode, data: Vec<u8>) -> Result<Self> {
        let row_bytes = rect.width() * BYTES_PER_PIXEL;
        if stride < row_bytes {
            return Err(Error::InvalidStride {
                stride,
                min: row_bytes,
            });
        }

        let expected = match rect.height() {
            0 => 0,
            h => (h - 1)
                .checked_mul(stride)
                .and_then(|n| n.checked_add(row_bytes))
                .ok_or(Error::InvalidDimensions {
                    width: rect.width() as i64,
                    height: h as i64,
                })?,
        };
        if data.len() < expected {
            return Err(Error::BufferTooSmall {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            data,
            stride,
            rect,
            alpha,
        })
    }

    /// Bounding rectangle in absolute coordinates.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Bytes between the starts of consecutive rows.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Alpha representation of the stored pixels.
    #[inline]
    pub fn alpha(&self) -> AlphaMode {
        self.alpha
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.rect.width()
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.rect.height()
    }

    /// Raw backing storage.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw backing storage.
    #[inline]
    pub fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consumes the buffer, returning its backing storage.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Byte offset of pixel (x, y), or `None` outside the bounds.
    #[inline]
    pub fn pix_offset(&self, x: i32, y: i32) -> Option<usize> {
        if !self.rect.contains(x, y) {
            return None;
        }
        let dy = (y as i64 - self.rect.min.y as i64) as usize;
        let dx = (x as i64 - self.rect.min.x as i64) as usize;
        Some(dy * self.stride + dx * BYTES_PER_PIXEL)
    }

    fn checked_offset(&self, x: i32, y: i32) -> Result<usize> {
        self.pix_offset(x, y).ok_or_else(|| Error::OutOfBounds {
            x,
            y,
            bounds: self.rect.to_string(),
        })
    }

    /// Reads the pixel at (x, y).
    pub fn pixel(&self, x: i32, y: i32) -> Result<[u8; 4]> {
        let i = self.checked_offset(x, y)?;
        let p = &self.data[i..i + BYTES_PER_PIXEL];
        Ok([p[0], p[1], p[2], p[3]])
    }

    /// Writes the pixel at (x, y).
    pub fn set_pixel(&mut self, x: i32, y: i32, px: [u8; 4]) -> Result<()> {
        let i = self.checked_offset(x, y)?;
        self.data[i..i + BYTES_PER_PIXEL].copy_from_slice(&px);
        Ok(())
    }

    /// Pixel bytes of row `y` (absolute), without stride padding.
    pub fn row(&self, y: i32) -> Option<&[u8]> {
        let start = self.pix_offset(self.rect.min.x, y)?;
        Some(&self.data[start..start + self.width() * BYTES_PER_PIXEL])
    }

    /// Sets every pixel inside the bounds to `px`. Padding bytes are untouched.
    pub fn fill(&mut self, px: [u8; 4]) {
        let row_bytes = self.width() * BYTES_PER_PIXEL;
        for y in 0..self.height() {
            let start = y * self.stride;
            for dst in self.data[start..start + row_bytes].chunks_exact_mut(BYTES_PER_PIXEL) {
                dst.copy_from_slice(&px);
            }
        }
    }

    /// Converts the stored pixels to `mode` in place.
    pub fn convert_alpha(&mut self, mode: AlphaMode) {
        if self.alpha == mode {
            return;
        }
        let row_bytes = self.width() * BYTES_PER_PIXEL;
        for y in 0..self.height() {
            let start = y * self.stride;
            pixel::convert_row(&mut self.data[start..start + row_bytes], self.alpha, mode);
        }
        self.alpha = mode;
    }

    /// Returns a copy of this buffer in the requested representation.
    pub fn to_alpha(&self, mode: AlphaMode) -> PixelBuffer {
        let mut out = self.clone();
        out.convert_alpha(mode);
        out
    }
}
