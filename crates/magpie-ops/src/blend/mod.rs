//! Photoshop-style blend modes.
//!
//! A blend runs in two steps. A per-channel [`kernel`] combines the source
//! and destination colours into a blended colour. Then [`compose`] mixes that
//! colour back with the operands according to a [`Compositing`] flag, which
//! only decides how the two alphas govern the result.
//!
//! # Modes
//!
//! | Mode | Kernel |
//! |------|--------|
//! | ColorBurn | `1 - (1 - Cd) / Cs` |
//! | ColorDodge | `Cd / (1 - Cs)` |
//! | Darken / Lighten | `min` / `max` |
//! | Difference | `abs(Cs - Cd)` |
//! | Divide | `Cd / Cs` |
//! | Exclusion | `Cs + Cd - 2 Cs Cd` |
//! | HardLight / Overlay | multiply or screen, split on `Cs` / `Cd` |
//! | HardMix | `0` or `1` |
//! | LinearBurn / LinearDodge | `Cs + Cd - 1` / `Cs + Cd` |
//! | LinearLight | `Cd + 2 Cs - 1` |
//! | Multiply / Screen | `Cs Cd` / `1 - (1 - Cs)(1 - Cd)` |
//! | PinLight | darken or lighten, split on `Cs` |
//! | SoftLight | gentle contrast |
//! | Subtract | `Cd - Cs` |
//! | VividLight | burn or dodge, split on `Cs` |
//!
//! On premultiplied buffers, Multiply, Screen, Exclusion and Difference
//! under [`Compositing::All`] use closed-form equations over the
//! premultiplied channels. Every other combination unpremultiplies first.

pub mod compose;
pub mod kernel;

use std::str::FromStr;

use magpie_core::AlphaMode;
use tracing::{debug, trace};

use crate::iter::{RowIterator, map_pixels};
use crate::op::normalize_name;
use crate::region::RowAccessor;
use crate::{OpsError, OpsResult};

/// Blend mode.
///
/// Ids follow declaration order starting at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BlendMode {
    /// Darkens by dividing the inverted destination by the source.
    ColorBurn = 0,
    /// Brightens by dividing the destination by the inverted source.
    ColorDodge,
    /// Minimum of both channels.
    Darken,
    /// Absolute difference.
    Difference,
    /// Destination divided by source.
    Divide,
    /// Lower-contrast difference.
    Exclusion,
    /// Multiply or screen, by source.
    HardLight,
    /// Thresholded sum.
    HardMix,
    /// Maximum of both channels.
    Lighten,
    /// Sum minus one.
    LinearBurn,
    /// Sum, also known as Add.
    LinearDodge,
    /// Linear burn or linear dodge, by source.
    LinearLight,
    /// Product.
    Multiply,
    /// Multiply or screen, by destination.
    Overlay,
    /// Darken or lighten, by source.
    PinLight,
    /// Inverted product of inverses.
    Screen,
    /// Soft contrast.
    SoftLight,
    /// Destination minus source.
    Subtract,
    /// Color burn or color dodge, by source.
    VividLight,
}

impl BlendMode {
    /// Alias for [`BlendMode::LinearDodge`].
    pub const ADD: BlendMode = BlendMode::LinearDodge;

    /// Every mode, in id order.
    pub const ALL: [BlendMode; 19] = [
        Self::ColorBurn,
        Self::ColorDodge,
        Self::Darken,
        Self::Difference,
        Self::Divide,
        Self::Exclusion,
        Self::HardLight,
        Self::HardMix,
        Self::Lighten,
        Self::LinearBurn,
        Self::LinearDodge,
        Self::LinearLight,
        Self::Multiply,
        Self::Overlay,
        Self::PinLight,
        Self::Screen,
        Self::SoftLight,
        Self::Subtract,
        Self::VividLight,
    ];

    /// Stable numeric id.
    #[inline]
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Looks up a mode by id.
    pub fn from_id(id: u8) -> OpsResult<Self> {
        Self::ALL
            .get(id as usize)
            .copied()
            .ok_or_else(|| OpsError::InvalidOperator(format!("unknown blend mode id {id}")))
    }

    /// Kebab-case name.
    pub fn name(self) -> &'static str {
        match self {
            Self::ColorBurn => "color-burn",
            Self::ColorDodge => "color-dodge",
            Self::Darken => "darken",
            Self::Difference => "difference",
            Self::Divide => "divide",
            Self::Exclusion => "exclusion",
            Self::HardLight => "hard-light",
            Self::HardMix => "hard-mix",
            Self::Lighten => "lighten",
            Self::LinearBurn => "linear-burn",
            Self::LinearDodge => "linear-dodge",
            Self::LinearLight => "linear-light",
            Self::Multiply => "multiply",
            Self::Overlay => "overlay",
            Self::PinLight => "pin-light",
            Self::Screen => "screen",
            Self::SoftLight => "soft-light",
            Self::Subtract => "subtract",
            Self::VividLight => "vivid-light",
        }
    }

    /// Closed-form premultiplied equation, for the modes that have one.
    pub fn premul_equation(self) -> Option<fn(u32, u32, u32, u32) -> u32> {
        match self {
            Self::Multiply => Some(kernel::premul::multiply),
            Self::Screen => Some(kernel::premul::screen),
            Self::Exclusion => Some(kernel::premul::exclusion),
            Self::Difference => Some(kernel::premul::difference),
            _ => None,
        }
    }
}

impl std::fmt::Display for BlendMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BlendMode {
    type Err = OpsError;

    /// Accepts kebab, snake or Pascal case, plus `add`.
    fn from_str(s: &str) -> OpsResult<Self> {
        let key = normalize_name(s);
        if key == "add" {
            return Ok(Self::ADD);
        }
        Self::ALL
            .into_iter()
            .find(|m| normalize_name(m.name()) == key)
            .ok_or_else(|| OpsError::InvalidOperator(format!("unknown blend mode '{s}'")))
    }
}

/// How the blended colour interacts with the operands' alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Compositing {
    /// Blended colour only, over the area both operands cover.
    BlendOnly = 1,
    /// Blend composited onto the destination; destination alpha kept.
    BlendAndDst = 2,
    /// Blend composited onto the source; source alpha kept.
    BlendAndSrc = 4,
    /// Full two-sided compositing.
    #[default]
    All = 6,
}

impl Compositing {
    /// Every flag.
    pub const ALL: [Compositing; 4] = [
        Self::BlendOnly,
        Self::BlendAndDst,
        Self::BlendAndSrc,
        Self::All,
    ];

    /// Flag bits.
    #[inline]
    pub fn bits(self) -> u8 {
        self as u8
    }

    /// Parses flag bits. Only 1, 2, 4 and 6 are valid.
    pub fn from_bits(bits: u8) -> OpsResult<Self> {
        match bits {
            1 => Ok(Self::BlendOnly),
            2 => Ok(Self::BlendAndDst),
            4 => Ok(Self::BlendAndSrc),
            6 => Ok(Self::All),
            _ => Err(OpsError::InvalidOperator(format!(
                "invalid compositing flags {bits:#x}"
            ))),
        }
    }

    /// Kebab-case name.
    pub fn name(self) -> &'static str {
        match self {
            Self::BlendOnly => "blend-only",
            Self::BlendAndDst => "blend-and-dst",
            Self::BlendAndSrc => "blend-and-src",
            Self::All => "all",
        }
    }
}

impl std::fmt::Display for Compositing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Compositing {
    type Err = OpsError;

    fn from_str(s: &str) -> OpsResult<Self> {
        let key = normalize_name(s);
        Self::ALL
            .into_iter()
            .find(|c| normalize_name(c.name()) == key)
            .ok_or_else(|| OpsError::InvalidOperator(format!("unknown compositing '{s}'")))
    }
}

/// Blends every row of `acc` with `mode`, mixed according to `compositing`.
///
/// # Errors
///
/// [`OpsError::UnsupportedLayout`] if any of the three buffers is not in
/// `alpha` representation. Nothing is written in that case.
pub fn apply_blend(
    mode: BlendMode,
    compositing: Compositing,
    alpha: AlphaMode,
    iter: &RowIterator,
    acc: &mut RowAccessor<'_>,
) -> OpsResult<()> {
    acc.check_layout(alpha)?;
    trace!(%mode, %compositing, %alpha, region = %acc.region(), "blend");

    if let (AlphaMode::Premultiplied, Compositing::All, Some(eq)) =
        (alpha, compositing, mode.premul_equation())
    {
        debug!(%mode, "premultiplied fast path");
        map_pixels(iter, acc, move |d, s| compose::all_premul_equation(eq, d, s));
        return Ok(());
    }

    match mode {
        BlendMode::ColorBurn => blend_rows(kernel::color_burn, compositing, alpha, iter, acc),
        BlendMode::ColorDodge => blend_rows(kernel::color_dodge, compositing, alpha, iter, acc),
        BlendMode::Darken => blend_rows(kernel::darken, compositing, alpha, iter, acc),
        BlendMode::Difference => blend_rows(kernel::difference, compositing, alpha, iter, acc),
        BlendMode::Divide => blend_rows(kernel::divide, compositing, alpha, iter, acc),
        BlendMode::Exclusion => blend_rows(kernel::exclusion, compositing, alpha, iter, acc),
        BlendMode::HardLight => blend_rows(kernel::hard_light, compositing, alpha, iter, acc),
        BlendMode::HardMix => blend_rows(kernel::hard_mix, compositing, alpha, iter, acc),
        BlendMode::Lighten => blend_rows(kernel::lighten, compositing, alpha, iter, acc),
        BlendMode::LinearBurn => blend_rows(kernel::linear_burn, compositing, alpha, iter, acc),
        BlendMode::LinearDodge => blend_rows(kernel::linear_dodge, compositing, alpha, iter, acc),
        BlendMode::LinearLight => blend_rows(kernel::linear_light, compositing, alpha, iter, acc),
        BlendMode::Multiply => blend_rows(kernel::multiply, compositing, alpha, iter, acc),
        BlendMode::Overlay => blend_rows(kernel::overlay, compositing, alpha, iter, acc),
        BlendMode::PinLight => blend_rows(kernel::pin_light, compositing, alpha, iter, acc),
        BlendMode::Screen => blend_rows(kernel::screen, compositing, alpha, iter, acc),
        BlendMode::SoftLight => blend_rows(kernel::soft_light, compositing, alpha, iter, acc),
        BlendMode::Subtract => blend_rows(kernel::subtract, compositing, alpha, iter, acc),
        BlendMode::VividLight => blend_rows(kernel::vivid_light, compositing, alpha, iter, acc),
    }
    Ok(())
}

/// Instantiates the composer for one kernel, flag and representation.
fn blend_rows<K>(
    k: K,
    compositing: Compositing,
    alpha: AlphaMode,
    iter: &RowIterator,
    acc: &mut RowAccessor<'_>,
) where
    K: Fn(u32, u32) -> u32 + Sync,
{
    let k = &k;
    match (alpha, compositing) {
        (AlphaMode::Straight, Compositing::All) => {
            map_pixels(iter, acc, |d, s| compose::all(k, d, s))
        }
        (AlphaMode::Straight, Compositing::BlendAndDst) => {
            map_pixels(iter, acc, |d, s| compose::blend_and_dst(k, d, s))
        }
        (AlphaMode::Straight, Compositing::BlendAndSrc) => {
            map_pixels(iter, acc, |d, s| compose::blend_and_src(k, d, s))
        }
        (AlphaMode::Straight, Compositing::BlendOnly) => {
            map_pixels(iter, acc, |d, s| compose::blend_only(k, d, s))
        }
        (AlphaMode::Premultiplied, Compositing::All) => {
            map_pixels(iter, acc, |d, s| compose::all_premul(k, d, s))
        }
        (AlphaMode::Premultiplied, Compositing::BlendAndDst) => map_pixels(iter, acc, |d, s| {
            compose::via_straight(|d, s| compose::blend_and_dst(k, d, s), d, s)
        }),
        (AlphaMode::Premultiplied, Compositing::BlendAndSrc) => map_pixels(iter, acc, |d, s| {
            compose::via_straight(|d, s| compose::blend_and_src(k, d, s), d, s)
        }),
        (AlphaMode::Premultiplied, Compositing::BlendOnly) => map_pixels(iter, acc, |d, s| {
            compose::via_straight(|d, s| compose::blend_only(k, d, s), d, s)
        }),
    }
}
