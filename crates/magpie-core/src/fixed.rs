//! Table-driven fixed-point kernels over the 8-bit channel domain.
//!
//! Every pixel formula in magpie is built from four primitives:
//!
//! | Function | Approximates | Backing |
//! |----------|--------------|---------|
//! | [`mul_div255`] | `round(a*b/255)` | 256x256 table |
//! | [`div255`] | `round(x/255)` | shift-and-add |
//! | [`sqrt255`] | `round(sqrt(x/255)*255)` | 256-entry table |
//! | [`unpremultiply`] | `round(c*255/a)` | 256x256 table |
//!
//! The tables are built once per process. [`init`] builds them eagerly and
//! is safe to call any number of times from any thread; every accessor also
//! builds them on first use, so calling it is optional.
//!
//! Inputs are masked to 8 bits before a table lookup. Values above 255 are
//! outside the contract but never index out of bounds.
//!
//! # Example
//!
//! ```rust
//! use magpie_core::fixed;
//!
//! fixed::init();
//! assert_eq!(fixed::mul_div255(128, 128), 64);
//! assert_eq!(fixed::sqrt255(64), 128);
//! assert_eq!(fixed::unpremultiply(64, 128), 128);
//! ```

use std::sync::OnceLock;

struct Tables {
    /// `(a*b + 127) / 255`, indexed by `a << 8 | b`
    mul: Vec<u8>,
    /// `(c*255 + a/2) / a`, indexed by `c << 8 | a`
    unpremul: Vec<u8>,
    sqrt: [u8; 256],
}

impl Tables {
    fn build() -> Self {
        let mut mul = vec![0u8; 256 * 256];
        let mut unpremul = vec![0u8; 256 * 256];
        let mut sqrt = [0u8; 256];

        for a in 0..256u32 {
            for b in 0..256u32 {
                let idx = (a << 8 | b) as usize;
                mul[idx] = ((a * b + 127) / 255) as u8;
                // Here a is the colour and b the alpha
                unpremul[idx] = if b == 0 {
                    0
                } else {
                    ((a * 255 + b / 2) / b).min(255) as u8
                };
            }
        }

        for (i, v) in sqrt.iter_mut().enumerate() {
            *v = ((i as f64 / 255.0).sqrt() * 255.0 + 0.5) as u8;
        }

        Self {
            mul,
            unpremul,
            sqrt,
        }
    }
}

static TABLES: OnceLock<Tables> = OnceLock::new();

#[inline]
fn tables() -> &'static Tables {
    TABLES.get_or_init(Tables::build)
}

/// Builds the lookup tables if they don't exist yet.
pub fn init() {
    let _ = tables();
}

#[inline]
fn index(hi: u32, lo: u32) -> usize {
    (((hi & 0xff) << 8) | (lo & 0xff)) as usize
}

/// Returns `(a*b + 127) / 255` for `a, b` in `[0, 255]`.
#[inline]
pub fn mul_div255(a: u32, b: u32) -> u32 {
    tables().mul[index(a, b)] as u32
}

/// Rounded division by 255 for `x` in `[0, 65535]`.
///
/// Monotonic, and within 1 of `x / 255` everywhere in that range.
#[inline]
pub fn div255(x: u32) -> u32 {
    (x + (x >> 8) + 128) >> 8
}

/// Returns `round(sqrt(x/255) * 255)` for `x` in `[0, 255]`.
#[inline]
pub fn sqrt255(x: u32) -> u32 {
    tables().sqrt[(x & 0xff) as usize] as u32
}

/// Returns `round(color * 255 / alpha)`, saturated at 255.
///
/// `alpha == 0` yields 0.
#[inline]
pub fn unpremultiply(color: u8, alpha: u8) -> u8 {
    tables().unpremul[index(color as u32, alpha as u32)]
}

/// Returns `round(color * alpha / 255)`.
#[inline]
pub fn premultiply(color: u8, alpha: u8) -> u8 {
    tables().mul[index(color as u32, alpha as u32)]
}
