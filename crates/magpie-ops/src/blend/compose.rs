//! Mixing a blended colour back in according to the compositing flag.
//!
//! With `sA`, `dA` the alphas in `[0, 1]`, `B` the blended channel and
//! `Cs`, `Cd` the straight source and destination channels:
//!
//! | Flag | Alpha | Colour |
//! |------|-------|--------|
//! | `BlendOnly` | `sA·dA` | `B` |
//! | `BlendAndDst` | `dA` | `(B·sA + Cd·dA(1-sA)) / (sA + dA(1-sA))` |
//! | `BlendAndSrc` | `sA` | `(B·dA + Cs·sA(1-dA)) / (dA + sA(1-dA))` |
//! | `All` | `sA + dA - sA·dA` | `(B·sA·dA + Cs·sA(1-dA) + Cd·dA(1-sA)) / αo` |
//!
//! Kernels are `(s, d) -> blended` channel functions from
//! [`kernel`](super::kernel); pixels are passed as `(dst, src)`.

use magpie_core::TRANSPARENT;
use magpie_core::fixed::{mul_div255 as md, unpremultiply};
use magpie_core::pixel::{premultiply_pixel, unpremultiply_pixel};

#[inline(always)]
fn blended<K: Fn(u32, u32) -> u32>(k: &K, d: [u8; 4], s: [u8; 4]) -> [u32; 3] {
    [
        k(s[0] as u32, d[0] as u32),
        k(s[1] as u32, d[1] as u32),
        k(s[2] as u32, d[2] as u32),
    ]
}

/// Full two-sided blend over straight-alpha pixels.
#[inline]
pub fn all<K: Fn(u32, u32) -> u32>(k: &K, d: [u8; 4], s: [u8; 4]) -> [u8; 4] {
    let (sa, da) = (s[3] as u32, d[3] as u32);
    if sa == 0 {
        return d;
    }
    if da == 0 {
        return s;
    }

    let b = blended(k, d, s);
    let wb = md(sa, da);
    let ws = sa - wb;
    let wd = da - wb;
    let oa = sa + da - wb;
    let half = oa / 2;
    let ch = |i: usize| ((b[i] * wb + s[i] as u32 * ws + d[i] as u32 * wd + half) / oa) as u8;
    [ch(0), ch(1), ch(2), oa as u8]
}

/// Blended colour paired with the source alpha, composited over the
/// destination; keeps the destination alpha.
#[inline]
pub fn blend_and_dst<K: Fn(u32, u32) -> u32>(k: &K, d: [u8; 4], s: [u8; 4]) -> [u8; 4] {
    let (sa, da) = (s[3] as u32, d[3] as u32);
    if da == 0 {
        return TRANSPARENT;
    }
    if sa == 0 {
        return d;
    }

    let b = blended(k, d, s);
    let wt = md(da, 255 - sa);
    let total = sa + wt;
    let ch = |i: usize| ((b[i] * sa + d[i] as u32 * wt) / total) as u8;
    [ch(0), ch(1), ch(2), da as u8]
}

/// Blended colour paired with the destination alpha, composited over the
/// source; keeps the source alpha.
#[inline]
pub fn blend_and_src<K: Fn(u32, u32) -> u32>(k: &K, d: [u8; 4], s: [u8; 4]) -> [u8; 4] {
    let (sa, da) = (s[3] as u32, d[3] as u32);
    if sa == 0 {
        return TRANSPARENT;
    }
    if da == 0 {
        return s;
    }

    let b = blended(k, d, s);
    let wt = md(sa, 255 - da);
    let total = da + wt;
    let ch = |i: usize| ((b[i] * da + s[i] as u32 * wt) / total) as u8;
    [ch(0), ch(1), ch(2), sa as u8]
}

/// Raw blended colour over the area both operands cover.
#[inline]
pub fn blend_only<K: Fn(u32, u32) -> u32>(k: &K, d: [u8; 4], s: [u8; 4]) -> [u8; 4] {
    let oa = md(s[3] as u32, d[3] as u32);
    if oa == 0 {
        return TRANSPARENT;
    }
    let b = blended(k, d, s);
    [b[0] as u8, b[1] as u8, b[2] as u8, oa as u8]
}

/// Full two-sided blend over premultiplied pixels.
///
/// Each channel is unpremultiplied just long enough to run the kernel.
#[inline]
pub fn all_premul<K: Fn(u32, u32) -> u32>(k: &K, d: [u8; 4], s: [u8; 4]) -> [u8; 4] {
    let (sa, da) = (s[3], d[3]);
    if sa == 0 {
        return d;
    }
    if da == 0 {
        return s;
    }

    let (sa32, da32) = (sa as u32, da as u32);
    let both = md(sa32, da32);
    let ch = |i: usize| {
        let b = k(
            unpremultiply(s[i], sa) as u32,
            unpremultiply(d[i], da) as u32,
        );
        (md(b, both) + md(s[i] as u32, 255 - da32) + md(d[i] as u32, 255 - sa32)).min(255) as u8
    };
    [ch(0), ch(1), ch(2), (sa32 + da32 - both) as u8]
}

/// Full two-sided blend using a closed-form premultiplied equation.
#[inline]
pub fn all_premul_equation(
    eq: fn(u32, u32, u32, u32) -> u32,
    d: [u8; 4],
    s: [u8; 4],
) -> [u8; 4] {
    let (sa, da) = (s[3] as u32, d[3] as u32);
    if sa == 0 {
        return d;
    }
    if da == 0 {
        return s;
    }

    let ch = |i: usize| eq(s[i] as u32, d[i] as u32, sa, da).min(255) as u8;
    [ch(0), ch(1), ch(2), (sa + da - md(sa, da)) as u8]
}

/// Runs a straight-alpha composer on premultiplied pixels.
#[inline]
pub fn via_straight<F>(f: F, d: [u8; 4], s: [u8; 4]) -> [u8; 4]
where
    F: Fn([u8; 4], [u8; 4]) -> [u8; 4],
{
    premultiply_pixel(f(unpremultiply_pixel(d), unpremultiply_pixel(s)))
}
