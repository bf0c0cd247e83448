//! # magpie-core
//!
//! Core types for 8-bit-per-channel RGBA compositing.
//!
//! This crate provides the foundational types used throughout magpie:
//!
//! - [`Point`], [`Rect`] - Integer geometry in absolute image coordinates
//! - [`AlphaMode`] - Straight vs premultiplied alpha representation
//! - [`PixelBuffer`] - Owned, strided, interleaved RGBA pixel storage
//! - [`fixed`] - Table-driven fixed-point kernels (`mul_div255`, `div255`, ...)
//!
//! ## Crate Structure
//!
//! ```text
//! magpie-core (this crate)
//!    ^
//!    |
//!    +-- magpie-ops (region mapping, row iteration, kernels)
//!    +-- magpie (context, config, output policy)
//!    +-- magpie-cli
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Enable serialization for [`AlphaMode`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod buffer;
pub mod error;
pub mod fixed;
pub mod pixel;
pub mod rect;

pub use buffer::PixelBuffer;
pub use error::{Error, Result};
pub use pixel::{AlphaMode, BYTES_PER_PIXEL, TRANSPARENT};
pub use rect::{Point, Rect};

/// Prelude module for convenient imports.
///
/// ```
/// use magpie_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::buffer::PixelBuffer;
    pub use crate::error::{Error, Result};
    pub use crate::pixel::AlphaMode;
    pub use crate::rect::{Point, Rect};
}
