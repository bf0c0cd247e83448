//! # magpie-ops
//!
//! Pixel operations over strided 8-bit RGBA buffers.
//!
//! Every operation reads a destination and a source buffer and writes an
//! output buffer (which may be the destination itself). The pieces:
//!
//! # Modules
//!
//! - [`region`] - Intersects the three buffers and slices them row by row
//! - [`iter`] - Runs rows serially or across a per-call worker pool
//! - [`composite`] - The twelve Porter-Duff operators
//! - [`blend`] - Nineteen blend modes with four compositing flags
//! - [`op`] - Operator values, validation and dispatch
//!
//! # Example
//!
//! ```rust
//! use magpie_core::{AlphaMode, PixelBuffer, Point, Rect};
//! use magpie_ops::{BlendMode, Operator, RowAccessor, RowIterator};
//!
//! let rect = Rect::from_size(16, 16);
//! let dst = PixelBuffer::filled(rect, AlphaMode::Straight, [0, 128, 255, 255]);
//! let src = PixelBuffer::filled(rect, AlphaMode::Straight, [255, 128, 0, 255]);
//! let mut out = PixelBuffer::new(rect, AlphaMode::Straight);
//!
//! let mut acc = RowAccessor::new(&dst, rect, &src, Point::ZERO, &mut out, Point::ZERO);
//! Operator::from(BlendMode::Screen)
//!     .apply(&RowIterator::new(4), &mut acc)
//!     .unwrap();
//! drop(acc);
//!
//! assert_eq!(out.pixel(3, 7).unwrap(), [255, 192, 255, 255]);
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel` (default) - Worker pools via `rayon`. Without it,
//!   [`RowIterator::Parallel`] runs serially.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod blend;
pub mod composite;
pub mod iter;
pub mod op;
pub mod region;

pub use blend::{BlendMode, Compositing};
pub use composite::CompositeMode;
pub use error::{OpsError, OpsResult};
pub use iter::RowIterator;
pub use op::{BlendOp, Operator};
pub use region::{Row, RowAccessor, intersect_region};
