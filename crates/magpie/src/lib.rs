//! # magpie
//!
//! Porter-Duff compositing and Photoshop-style blend modes for 8-bit RGBA
//! images.
//!
//! This is the high-level entry point. It wraps the row engine in
//! [`magpie_ops`] with:
//!
//! - [`Config`] - Worker count and defaults, loadable from YAML
//! - [`Context`] - Draw calls with operator validation, alpha
//!   normalization and output allocation
//! - [`Output`] - Where a draw call writes its result
//!
//! # Quick Start
//!
//! ```rust
//! use magpie::prelude::*;
//!
//! let rect = Rect::from_size(8, 8);
//! let mut dst = PixelBuffer::filled(rect, AlphaMode::Straight, [64, 128, 192, 128]);
//! let src = PixelBuffer::filled(rect, AlphaMode::Straight, [192, 64, 128, 128]);
//!
//! magpie::draw_to_dst(&mut dst, rect, &src, Point::ZERO, CompositeMode::SourceOver).unwrap();
//! assert_eq!(dst.pixel(0, 0).unwrap()[3], 192);
//! ```
//!
//! # Alpha representations
//!
//! Buffers are either straight ([`AlphaMode::Straight`]) or premultiplied
//! ([`AlphaMode::Premultiplied`]). A draw call picks one representation for
//! the whole operation: the output's, else the destination's. Inputs in the
//! other representation are converted into a temporary copy first.
//!
//! ## Feature Flags
//!
//! - `parallel` (default) - Multi-threaded row processing

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
mod context;
mod error;

pub use config::{Config, DefaultOutput};
pub use context::{Context, Output};
pub use error::{Error, Result};

pub use magpie_core::{AlphaMode, PixelBuffer, Point, Rect};
pub use magpie_ops::{BlendMode, BlendOp, CompositeMode, Compositing, Operator, RowIterator};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::{
        AlphaMode, BlendMode, BlendOp, CompositeMode, Compositing, Config, Context, Operator,
        Output, PixelBuffer, Point, Rect,
    };
}

/// [`Context::draw`] with default settings.
pub fn draw(
    dst: &mut PixelBuffer,
    region: Rect,
    src: &PixelBuffer,
    src_origin: Point,
    op: impl Into<Operator>,
    output: Option<Output<'_>>,
) -> Result<Option<PixelBuffer>> {
    Context::default().draw(dst, region, src, src_origin, op, output)
}

/// [`Context::draw_to_dst`] with default settings.
pub fn draw_to_dst(
    dst: &mut PixelBuffer,
    region: Rect,
    src: &PixelBuffer,
    src_origin: Point,
    op: impl Into<Operator>,
) -> Result<()> {
    Context::default().draw_to_dst(dst, region, src, src_origin, op)
}

/// [`Context::draw_to_new_image`] with default settings.
pub fn draw_to_new_image(
    dst: &PixelBuffer,
    region: Rect,
    src: &PixelBuffer,
    src_origin: Point,
    op: impl Into<Operator>,
    alpha: Option<AlphaMode>,
) -> Result<PixelBuffer> {
    Context::default().draw_to_new_image(dst, region, src, src_origin, op, alpha)
}

/// [`Context::draw_to_image`] with default settings.
#[allow(clippy::too_many_arguments)]
pub fn draw_to_image(
    dst: &PixelBuffer,
    region: Rect,
    src: &PixelBuffer,
    src_origin: Point,
    op: impl Into<Operator>,
    out: &mut PixelBuffer,
    out_origin: Point,
) -> Result<()> {
    Context::default().draw_to_image(dst, region, src, src_origin, op, out, out_origin)
}
