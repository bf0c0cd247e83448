//! Per-channel blend kernels.
//!
//! Every kernel maps a straight-alpha `(source, destination)` channel pair
//! in `[0, 255]` to the blended channel. Alpha never passes through here;
//! [`compose`](super::compose) decides how the blended colour is mixed back
//! in.
//!
//! The formulas are integer approximations of the usual `[0, 1]` blend
//! definitions (noted on each function as `Cr`, with `Cs` the source and `Cd`
//! the destination channel).

use magpie_core::fixed::{div255, mul_div255 as md, sqrt255};

/// `Cr = 1 - (1 - Cd) / Cs`
#[inline]
pub fn color_burn(s: u32, d: u32) -> u32 {
    if s + d <= 255 {
        0
    } else {
        255u32.saturating_sub(((255 - d) * 255 + s / 2) / s)
    }
}

/// `Cr = Cd / (1 - Cs)`
#[inline]
pub fn color_dodge(s: u32, d: u32) -> u32 {
    if s == 255 {
        255
    } else {
        (d * 255 / (255 - s)).min(255)
    }
}

/// `Cr = min(Cs, Cd)`
#[inline]
pub fn darken(s: u32, d: u32) -> u32 {
    s.min(d)
}

/// `Cr = |Cs - Cd|`
#[inline]
pub fn difference(s: u32, d: u32) -> u32 {
    s.abs_diff(d)
}

/// `Cr = Cd / Cs`
#[inline]
pub fn divide(s: u32, d: u32) -> u32 {
    if s == 0 {
        255
    } else {
        ((d * 255 + s / 2) / s).min(255)
    }
}

/// `Cr = Cs + Cd - 2 * Cs * Cd`
#[inline]
pub fn exclusion(s: u32, d: u32) -> u32 {
    (s + d).saturating_sub(2 * md(s, d))
}

/// Multiply below half source, screen above.
#[inline]
pub fn hard_light(s: u32, d: u32) -> u32 {
    if s < 128 {
        2 * md(s, d)
    } else {
        255u32.saturating_sub(2 * md(255 - s, 255 - d))
    }
}

/// `Cr = 0` if `Cs + Cd < 1`, else `1`.
#[inline]
pub fn hard_mix(s: u32, d: u32) -> u32 {
    if s + d < 255 { 0 } else { 255 }
}

/// `Cr = max(Cs, Cd)`
#[inline]
pub fn lighten(s: u32, d: u32) -> u32 {
    s.max(d)
}

/// `Cr = Cs + Cd - 1`, floored at 0.
#[inline]
pub fn linear_burn(s: u32, d: u32) -> u32 {
    (s + d).saturating_sub(255)
}

/// `Cr = Cs + Cd`, capped at 1.
#[inline]
pub fn linear_dodge(s: u32, d: u32) -> u32 {
    (s + d).min(255)
}

/// `Cr = Cd + 2 * Cs - 1`, clamped.
#[inline]
pub fn linear_light(s: u32, d: u32) -> u32 {
    (d + 2 * s).saturating_sub(255).min(255)
}

/// `Cr = Cs * Cd`
#[inline]
pub fn multiply(s: u32, d: u32) -> u32 {
    md(s, d)
}

/// Hard light with the operands swapped: branches on the destination.
#[inline]
pub fn overlay(s: u32, d: u32) -> u32 {
    if d < 128 {
        2 * md(s, d)
    } else {
        255u32.saturating_sub(2 * md(255 - s, 255 - d))
    }
}

/// Darken below half source, lighten above.
#[inline]
pub fn pin_light(s: u32, d: u32) -> u32 {
    if s < 128 {
        d.min(2 * s)
    } else {
        d.max(2 * s - 255)
    }
}

/// `Cr = 1 - (1 - Cs) * (1 - Cd)`
#[inline]
pub fn screen(s: u32, d: u32) -> u32 {
    255 - md(255 - s, 255 - d)
}

/// Below half source: `Cd - (1 - 2Cs) * Cd * (1 - Cd)`.
/// Above: `Cd + (2Cs - 1) * (sqrt(Cd) - Cd)`.
#[inline]
pub fn soft_light(s: u32, d: u32) -> u32 {
    if s < 128 {
        d.saturating_sub(div255(div255((255 - 2 * s) * d * (255 - d))))
    } else {
        (d + md(2 * s - 255, sqrt255(d).saturating_sub(d))).min(255)
    }
}

/// `Cr = Cd - Cs`, floored at 0.
#[inline]
pub fn subtract(s: u32, d: u32) -> u32 {
    d.saturating_sub(s)
}

/// Color burn below half source, color dodge above, at double strength.
#[inline]
pub fn vivid_light(s: u32, d: u32) -> u32 {
    match s {
        0 | 255 => s,
        1..=127 => 255 - (((255 - d) * 255 + s) / (2 * s)).min(255),
        _ => ((d * 255 + (255 - s)) / (510 - 2 * s)).min(255),
    }
}

/// Equations over premultiplied channels, skipping the unpremultiply step.
///
/// Arguments are `(source, destination, source alpha, destination alpha)`.
pub mod premul {
    use super::*;

    /// Multiply, premultiplied.
    #[inline]
    pub fn multiply(sp: u32, dp: u32, sa: u32, da: u32) -> u32 {
        md(dp, 255 - sa) + md(sp, 255 - da) + md(sp, dp)
    }

    /// Screen, premultiplied.
    #[inline]
    pub fn screen(sp: u32, dp: u32, _sa: u32, _da: u32) -> u32 {
        sp + dp - md(sp, dp)
    }

    /// Exclusion, premultiplied.
    #[inline]
    pub fn exclusion(sp: u32, dp: u32, _sa: u32, _da: u32) -> u32 {
        (sp + dp).saturating_sub(2 * md(sp, dp))
    }

    /// Difference, premultiplied.
    #[inline]
    pub fn difference(sp: u32, dp: u32, sa: u32, da: u32) -> u32 {
        (sp + dp).saturating_sub(div255(2 * (sp * da).min(dp * sa)))
    }
}
