//! Porter-Duff kernels for straight-alpha (NRGBA) pixels.
//!
//! Each kernel takes `(dst, src)` and returns the output pixel. Wherever an
//! operand's alpha is exactly 0 or 255 the result is computed exactly,
//! without dividing by an accumulated alpha. A zero output alpha always
//! comes with zero colour.

use magpie_core::TRANSPARENT;
use magpie_core::fixed::{div255, mul_div255 as md};

/// `(s*ws + d*wd) / (ws + wd)` per colour channel, rounded.
#[inline(always)]
fn weighted(s: [u8; 4], ws: u32, d: [u8; 4], wd: u32) -> [u8; 4] {
    let oa = ws + wd;
    if oa == 0 {
        return TRANSPARENT;
    }
    let half = oa / 2;
    let ch = |i: usize| ((s[i] as u32 * ws + d[i] as u32 * wd + half) / oa) as u8;
    [ch(0), ch(1), ch(2), oa as u8]
}

#[inline(always)]
fn with_alpha(c: [u8; 4], a: u32) -> [u8; 4] {
    if a == 0 {
        TRANSPARENT
    } else {
        [c[0], c[1], c[2], a as u8]
    }
}

/// Source over destination.
#[inline]
pub fn source_over(d: [u8; 4], s: [u8; 4]) -> [u8; 4] {
    let sa = s[3] as u32;
    match sa {
        0 => d,
        255 => s,
        _ => weighted(s, sa, d, md(d[3] as u32, 255 - sa)),
    }
}

/// Source where the destination is opaque.
#[inline]
pub fn source_in(d: [u8; 4], s: [u8; 4]) -> [u8; 4] {
    let (sa, da) = (s[3] as u32, d[3] as u32);
    if sa == 0 || da == 0 {
        return TRANSPARENT;
    }
    let oa = if da == 255 { sa } else { md(sa, da) };
    with_alpha(s, oa)
}

/// Source where the destination is transparent.
#[inline]
pub fn source_out(d: [u8; 4], s: [u8; 4]) -> [u8; 4] {
    let (sa, da) = (s[3] as u32, d[3] as u32);
    if sa == 0 || da == 255 {
        return TRANSPARENT;
    }
    let oa = if da == 0 { sa } else { md(sa, 255 - da) };
    with_alpha(s, oa)
}

/// Source over destination, clipped to the destination's coverage.
#[inline]
pub fn source_atop(d: [u8; 4], s: [u8; 4]) -> [u8; 4] {
    let (sa, da) = (s[3] as u32, d[3] as u32);
    if da == 0 {
        return TRANSPARENT;
    }
    match sa {
        0 => d,
        255 => with_alpha(s, da),
        _ => {
            let ch = |i: usize| div255(s[i] as u32 * sa + d[i] as u32 * (255 - sa)) as u8;
            [ch(0), ch(1), ch(2), da as u8]
        }
    }
}

/// Destination over source.
#[inline]
pub fn destination_over(d: [u8; 4], s: [u8; 4]) -> [u8; 4] {
    let (sa, da) = (s[3] as u32, d[3] as u32);
    if da == 255 || sa == 0 {
        return d;
    }
    weighted(d, da, s, md(sa, 255 - da))
}

/// Destination where the source is opaque.
#[inline]
pub fn destination_in(d: [u8; 4], s: [u8; 4]) -> [u8; 4] {
    let (sa, da) = (s[3] as u32, d[3] as u32);
    if sa == 0 || da == 0 {
        return TRANSPARENT;
    }
    let oa = if sa == 255 { da } else { md(sa, da) };
    with_alpha(d, oa)
}

/// Destination where the source is transparent.
#[inline]
pub fn destination_out(d: [u8; 4], s: [u8; 4]) -> [u8; 4] {
    let (sa, da) = (s[3] as u32, d[3] as u32);
    if da == 0 || sa == 255 {
        return TRANSPARENT;
    }
    let oa = if sa == 0 { da } else { md(da, 255 - sa) };
    with_alpha(d, oa)
}

/// Destination over source, clipped to the source's coverage.
#[inline]
pub fn destination_atop(d: [u8; 4], s: [u8; 4]) -> [u8; 4] {
    let (sa, da) = (s[3] as u32, d[3] as u32);
    if sa == 0 {
        return TRANSPARENT;
    }
    match da {
        0 => s,
        255 => with_alpha(d, sa),
        _ => {
            let ch = |i: usize| div255(d[i] as u32 * da + s[i] as u32 * (255 - da)) as u8;
            [ch(0), ch(1), ch(2), sa as u8]
        }
    }
}

/// Source and destination where they don't overlap.
#[inline]
pub fn xor(d: [u8; 4], s: [u8; 4]) -> [u8; 4] {
    let (sa, da) = (s[3] as u32, d[3] as u32);
    match (sa, da) {
        (0, _) => d,
        (_, 0) => s,
        (255, 255) => TRANSPARENT,
        _ => weighted(s, md(sa, 255 - da), d, md(da, 255 - sa)),
    }
}
