//! Porter-Duff kernels for premultiplied (RGBA) pixels.
//!
//! With colour already scaled by alpha every operator reduces to sums of
//! `mul_div255` terms applied uniformly to all four channels. Sums saturate
//! at 255.

use magpie_core::fixed::mul_div255 as md;

#[inline(always)]
fn map4(f: impl Fn(usize) -> u32) -> [u8; 4] {
    [
        f(0).min(255) as u8,
        f(1).min(255) as u8,
        f(2).min(255) as u8,
        f(3).min(255) as u8,
    ]
}

#[inline(always)]
fn ch(p: [u8; 4], i: usize) -> u32 {
    p[i] as u32
}

/// Source over destination.
#[inline]
pub fn source_over(d: [u8; 4], s: [u8; 4]) -> [u8; 4] {
    let sa = s[3] as u32;
    match sa {
        0 => d,
        255 => s,
        _ => map4(|i| ch(s, i) + md(ch(d, i), 255 - sa)),
    }
}

/// Source where the destination is opaque.
#[inline]
pub fn source_in(d: [u8; 4], s: [u8; 4]) -> [u8; 4] {
    let da = d[3] as u32;
    map4(|i| md(ch(s, i), da))
}

/// Source where the destination is transparent.
#[inline]
pub fn source_out(d: [u8; 4], s: [u8; 4]) -> [u8; 4] {
    let da = d[3] as u32;
    map4(|i| md(ch(s, i), 255 - da))
}

/// Source over destination, clipped to the destination's coverage.
#[inline]
pub fn source_atop(d: [u8; 4], s: [u8; 4]) -> [u8; 4] {
    let (sa, da) = (s[3] as u32, d[3] as u32);
    let mut out = map4(|i| md(ch(s, i), da) + md(ch(d, i), 255 - sa));
    out[3] = da as u8;
    out
}

/// Destination over source.
#[inline]
pub fn destination_over(d: [u8; 4], s: [u8; 4]) -> [u8; 4] {
    let da = d[3] as u32;
    match da {
        255 => d,
        0 => s,
        _ => map4(|i| ch(d, i) + md(ch(s, i), 255 - da)),
    }
}

/// Destination where the source is opaque.
#[inline]
pub fn destination_in(d: [u8; 4], s: [u8; 4]) -> [u8; 4] {
    let sa = s[3] as u32;
    map4(|i| md(ch(d, i), sa))
}

/// Destination where the source is transparent.
#[inline]
pub fn destination_out(d: [u8; 4], s: [u8; 4]) -> [u8; 4] {
    let sa = s[3] as u32;
    map4(|i| md(ch(d, i), 255 - sa))
}

/// Destination over source, clipped to the source's coverage.
#[inline]
pub fn destination_atop(d: [u8; 4], s: [u8; 4]) -> [u8; 4] {
    let (sa, da) = (s[3] as u32, d[3] as u32);
    let mut out = map4(|i| md(ch(d, i), sa) + md(ch(s, i), 255 - da));
    out[3] = sa as u8;
    out
}

/// Source and destination where they don't overlap.
#[inline]
pub fn xor(d: [u8; 4], s: [u8; 4]) -> [u8; 4] {
    let (sa, da) = (s[3] as u32, d[3] as u32);
    map4(|i| md(ch(s, i), 255 - da) + md(ch(d, i), 255 - sa))
}
