//! Pixel layout and alpha representation.
//!
//! Every buffer in magpie stores 8-bit R, G, B, A samples interleaved in
//! that order. What differs between buffers is only how colour relates to
//! alpha:
//!
//! | Mode | Also known as | Colour channels |
//! |------|---------------|-----------------|
//! | [`AlphaMode::Straight`] | NRGBA | independent of alpha |
//! | [`AlphaMode::Premultiplied`] | RGBA | already scaled by alpha/255 |
//!
//! The two representations need different arithmetic. Converting between
//! them goes through [`premultiply_pixel`] and [`unpremultiply_pixel`].

use crate::fixed;

/// Bytes per RGBA pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// A fully transparent pixel (all channels zero).
pub const TRANSPARENT: [u8; 4] = [0; 4];

/// How colour channels relate to the alpha channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AlphaMode {
    /// Colour stored independently of alpha (NRGBA).
    #[default]
    Straight,
    /// Colour pre-scaled by alpha (RGBA).
    Premultiplied,
}

impl AlphaMode {
    /// Short name used in logs and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Straight => "straight",
            Self::Premultiplied => "premultiplied",
        }
    }

    /// Returns `true` for [`AlphaMode::Premultiplied`].
    #[inline]
    pub fn is_premultiplied(&self) -> bool {
        matches!(self, Self::Premultiplied)
    }
}

impl std::fmt::Display for AlphaMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Converts a straight-alpha pixel to premultiplied alpha.
#[inline]
pub fn premultiply_pixel(p: [u8; 4]) -> [u8; 4] {
    let a = p[3];
    match a {
        255 => p,
        0 => TRANSPARENT,
        _ => [
            fixed::premultiply(p[0], a),
            fixed::premultiply(p[1], a),
            fixed::premultiply(p[2], a),
            a,
        ],
    }
}

/// Converts a premultiplied pixel to straight alpha.
///
/// A zero alpha yields [`TRANSPARENT`].
#[inline]
pub fn unpremultiply_pixel(p: [u8; 4]) -> [u8; 4] {
    let a = p[3];
    match a {
        255 => p,
        0 => TRANSPARENT,
        _ => [
            fixed::unpremultiply(p[0], a),
            fixed::unpremultiply(p[1], a),
            fixed::unpremultiply(p[2], a),
            a,
        ],
    }
}

/// Converts every pixel of an interleaved row between representations.
///
/// A no-op when `from == to`. The slice length must be a multiple of 4;
/// trailing bytes are left untouched.
pub fn convert_row(row: &mut [u8], from: AlphaMode, to: AlphaMode) {
    if from == to {
        return;
    }
    let f = match to {
        AlphaMode::Premultiplied => premultiply_pixel,
        AlphaMode::Straight => unpremultiply_pixel,
    };
    for px in row.chunks_exact_mut(BYTES_PER_PIXEL) {
        let out = f([px[0], px[1], px[2], px[3]]);
        px.copy_from_slice(&out);
    }
}
