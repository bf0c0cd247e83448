//! Porter-Duff compositing.
//!
//! Twelve operators, each implemented once for straight alpha
//! ([`straight`]) and once for premultiplied alpha ([`premul`]).
//!
//! | Operator | Result |
//! |----------|--------|
//! | Clear | transparent |
//! | Source | source |
//! | SourceOver | source over destination |
//! | SourceIn | source inside destination |
//! | SourceOut | source outside destination |
//! | SourceAtop | source over destination, destination's alpha |
//! | Destination | destination |
//! | DestinationOver | destination over source |
//! | DestinationIn | destination inside source |
//! | DestinationOut | destination outside source |
//! | DestinationAtop | destination over source, source's alpha |
//! | Xor | non-overlapping parts of both |
//!
//! # Example
//!
//! ```rust
//! use magpie_core::{AlphaMode, PixelBuffer, Point, Rect};
//! use magpie_ops::composite::{apply_composite, CompositeMode};
//! use magpie_ops::iter::RowIterator;
//! use magpie_ops::region::RowAccessor;
//!
//! let rect = Rect::from_size(2, 2);
//! let mut dst = PixelBuffer::filled(rect, AlphaMode::Straight, [0, 128, 255, 255]);
//! let src = PixelBuffer::filled(rect, AlphaMode::Straight, [255, 128, 0, 255]);
//!
//! let mut acc = RowAccessor::in_place(&mut dst, rect, &src, Point::ZERO);
//! apply_composite(CompositeMode::SourceOver, AlphaMode::Straight, &RowIterator::Serial, &mut acc)
//!     .unwrap();
//! drop(acc);
//! assert_eq!(dst.pixel(1, 1).unwrap(), [255, 128, 0, 255]);
//! ```

pub mod premul;
pub mod straight;

use std::str::FromStr;

use magpie_core::{AlphaMode, TRANSPARENT};
use tracing::{debug, trace};

use crate::iter::{RowIterator, for_each_row, map_pixels};
use crate::op::normalize_name;
use crate::region::RowAccessor;
use crate::{OpsError, OpsResult};

/// Porter-Duff operator.
///
/// Ids follow declaration order starting at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CompositeMode {
    /// Transparent output.
    Clear = 0,
    /// Copy of the source.
    Source,
    /// Source over destination.
    SourceOver,
    /// Source inside destination.
    SourceIn,
    /// Source outside destination.
    SourceOut,
    /// Source atop destination.
    SourceAtop,
    /// Copy of the destination.
    Destination,
    /// Destination over source.
    DestinationOver,
    /// Destination inside source.
    DestinationIn,
    /// Destination outside source.
    DestinationOut,
    /// Destination atop source.
    DestinationAtop,
    /// Source xor destination.
    Xor,
}

impl CompositeMode {
    /// Every operator, in id order.
    pub const ALL: [CompositeMode; 12] = [
        Self::Clear,
        Self::Source,
        Self::SourceOver,
        Self::SourceIn,
        Self::SourceOut,
        Self::SourceAtop,
        Self::Destination,
        Self::DestinationOver,
        Self::DestinationIn,
        Self::DestinationOut,
        Self::DestinationAtop,
        Self::Xor,
    ];

    /// Stable numeric id.
    #[inline]
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Looks up an operator by id.
    pub fn from_id(id: u8) -> OpsResult<Self> {
        Self::ALL
            .get(id as usize)
            .copied()
            .ok_or_else(|| OpsError::InvalidOperator(format!("unknown composite mode id {id}")))
    }

    /// Kebab-case name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Source => "source",
            Self::SourceOver => "source-over",
            Self::SourceIn => "source-in",
            Self::SourceOut => "source-out",
            Self::SourceAtop => "source-atop",
            Self::Destination => "destination",
            Self::DestinationOver => "destination-over",
            Self::DestinationIn => "destination-in",
            Self::DestinationOut => "destination-out",
            Self::DestinationAtop => "destination-atop",
            Self::Xor => "xor",
        }
    }
}

impl std::fmt::Display for CompositeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CompositeMode {
    type Err = OpsError;

    /// Accepts `source-over`, `source_over` and `SourceOver` alike.
    fn from_str(s: &str) -> OpsResult<Self> {
        let key = normalize_name(s);
        Self::ALL
            .into_iter()
            .find(|m| normalize_name(m.name()) == key)
            .ok_or_else(|| OpsError::InvalidOperator(format!("unknown composite mode '{s}'")))
    }
}

/// Composites every row of `acc` with `mode`.
///
/// # Errors
///
/// [`OpsError::UnsupportedLayout`] if any of the three buffers is not in
/// `alpha` representation. Nothing is written in that case.
pub fn apply_composite(
    mode: CompositeMode,
    alpha: AlphaMode,
    iter: &RowIterator,
    acc: &mut RowAccessor<'_>,
) -> OpsResult<()> {
    acc.check_layout(alpha)?;
    trace!(%mode, %alpha, region = %acc.region(), "composite");

    match mode {
        CompositeMode::Clear => for_each_row(iter, acc, |row| row.fill(TRANSPARENT)),
        CompositeMode::Source => for_each_row(iter, acc, |row| row.copy_from_src()),
        CompositeMode::Destination => {
            if acc.is_in_place() {
                debug!("destination onto itself, nothing to do");
            } else {
                for_each_row(iter, acc, |row| row.copy_from_dst());
            }
        }
        CompositeMode::SourceOver => {
            by_alpha(alpha, iter, acc, straight::source_over, premul::source_over)
        }
        CompositeMode::SourceIn => by_alpha(alpha, iter, acc, straight::source_in, premul::source_in),
        CompositeMode::SourceOut => {
            by_alpha(alpha, iter, acc, straight::source_out, premul::source_out)
        }
        CompositeMode::SourceAtop => {
            by_alpha(alpha, iter, acc, straight::source_atop, premul::source_atop)
        }
        CompositeMode::DestinationOver => by_alpha(
            alpha,
            iter,
            acc,
            straight::destination_over,
            premul::destination_over,
        ),
        CompositeMode::DestinationIn => by_alpha(
            alpha,
            iter,
            acc,
            straight::destination_in,
            premul::destination_in,
        ),
        CompositeMode::DestinationOut => by_alpha(
            alpha,
            iter,
            acc,
            straight::destination_out,
            premul::destination_out,
        ),
        CompositeMode::DestinationAtop => by_alpha(
            alpha,
            iter,
            acc,
            straight::destination_atop,
            premul::destination_atop,
        ),
        CompositeMode::Xor => by_alpha(alpha, iter, acc, straight::xor, premul::xor),
    }
    Ok(())
}

/// Picks the straight or premultiplied kernel and runs it over every pixel.
fn by_alpha<S, P>(
    alpha: AlphaMode,
    iter: &RowIterator,
    acc: &mut RowAccessor<'_>,
    straight_kernel: S,
    premul_kernel: P,
) where
    S: Fn([u8; 4], [u8; 4]) -> [u8; 4] + Sync,
    P: Fn([u8; 4], [u8; 4]) -> [u8; 4] + Sync,
{
    match alpha {
        AlphaMode::Straight => map_pixels(iter, acc, straight_kernel),
        AlphaMode::Premultiplied => map_pixels(iter, acc, premul_kernel),
    }
}
