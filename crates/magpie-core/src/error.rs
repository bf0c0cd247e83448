//! Error types for magpie-core operations.
//!
//! Every error here is a precondition violation detected while a buffer is
//! being built or addressed. Pixel arithmetic itself never fails.
//!
//! # Usage
//!
//! ```rust
//! use magpie_core::{Error, Result};
//!
//! fn check_stride(stride: usize, width: usize) -> Result<()> {
//!     if stride < width * 4 {
//!         return Err(Error::InvalidStride { stride, min: width * 4 });
//!     }
//!     Ok(())
//! }
//! assert!(check_stride(16, 4).is_ok());
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while constructing or addressing pixel buffers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Pixel coordinates are outside the buffer's bounding rectangle.
    #[error("pixel ({x}, {y}) out of bounds for {bounds}")]
    OutOfBounds {
        /// X coordinate that was out of bounds
        x: i32,
        /// Y coordinate that was out of bounds
        y: i32,
        /// Bounding rectangle, formatted
        bounds: String,
    },

    /// Dimensions overflow or are otherwise unusable.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width in pixels
        width: i64,
        /// Height in pixels
        height: i64,
    },

    /// Row stride is smaller than one row of pixels.
    #[error("stride {stride} is smaller than a row of pixels ({min} bytes)")]
    InvalidStride {
        /// Supplied stride in bytes
        stride: usize,
        /// Minimum stride in bytes (`width * 4`)
        min: usize,
    },

    /// Backing storage is shorter than the rectangle and stride require.
    #[error("buffer too small: expected at least {expected} bytes, got {actual}")]
    BufferTooSmall {
        /// Required length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },
}
