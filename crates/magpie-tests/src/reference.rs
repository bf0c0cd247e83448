//! Shared colour pairs and single-pixel runners.

use magpie_core::pixel::premultiply_pixel;
use magpie_core::{AlphaMode, PixelBuffer, Point, Rect};
use magpie_ops::{
    BlendMode, BlendOp, CompositeMode, Compositing, Operator, RowAccessor, RowIterator,
};

/// A destination/source pair in straight alpha.
#[derive(Debug, Clone, Copy)]
pub struct TestColors {
    /// Label used in failure messages
    pub name: &'static str,
    /// Destination pixel
    pub dst: [u8; 4],
    /// Source pixel
    pub src: [u8; 4],
}

/// Unpacks `0xRR_GG_BB_AA`.
pub const fn c(v: u32) -> [u8; 4] {
    v.to_be_bytes()
}

/// Builds a pair from packed colours.
pub const fn colors(name: &'static str, dst: u32, src: u32) -> TestColors {
    TestColors {
        name,
        dst: c(dst),
        src: c(src),
    }
}

/// Opaque blue-ish under opaque orange.
pub const OPAQUE1: TestColors = colors("Opaque1", 0x00_80_ff_ff, 0xff_80_00_ff);
/// Two opaque mid-tones.
pub const OPAQUE2: TestColors = colors("Opaque2", 0x40_80_c0_ff, 0xc0_40_80_ff);
/// Fully transparent source.
pub const TRANSPARENT_SRC: TestColors = colors("TransparentSrc", 0x00_80_ff_ff, 0x00_00_00_00);
/// Fully transparent destination.
pub const TRANSPARENT_DST: TestColors = colors("TransparentDst", 0x00_00_00_00, 0x00_80_ff_ff);
/// Both operands at half alpha.
pub const TRANSLUCENT: TestColors = colors("Translucent", 0x40_80_c0_80, 0xc0_40_80_80);

/// Runs `op` over a single pixel pair and returns the output pixel.
///
/// Both inputs and the output use `alpha`.
pub fn run_pixel(op: Operator, alpha: AlphaMode, dst: [u8; 4], src: [u8; 4]) -> [u8; 4] {
    let rect = Rect::from_size(1, 1);
    let d = PixelBuffer::filled(rect, alpha, dst);
    let s = PixelBuffer::filled(rect, alpha, src);
    let mut out = PixelBuffer::new(rect, alpha);

    let mut acc = RowAccessor::new(&d, rect, &s, Point::ZERO, &mut out, Point::ZERO);
    if let Err(e) = op.apply(&RowIterator::Serial, &mut acc) {
        panic!("{op} failed: {e}");
    }
    drop(acc);

    match out.pixel(0, 0) {
        Ok(px) => px,
        Err(e) => panic!("{e}"),
    }
}

/// Returns `true` if every channel differs by at most `tolerance`.
pub fn almost_equal(a: [u8; 4], b: [u8; 4], tolerance: u8) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| x.abs_diff(*y) <= tolerance)
}

/// Checks `op` on `colors` in both representations.
///
/// The premultiplied run uses premultiplied copies of the inputs and of
/// the expected colour.
pub fn check(op: Operator, colors: TestColors, expected: [u8; 4], tolerance: u8) {
    let got = run_pixel(op, AlphaMode::Straight, colors.dst, colors.src);
    assert!(
        almost_equal(got, expected, tolerance),
        "straight/{op}/{}: expected {expected:02x?}, got {got:02x?} (tolerance {tolerance})",
        colors.name
    );

    let expected = premultiply_pixel(expected);
    let got = run_pixel(
        op,
        AlphaMode::Premultiplied,
        premultiply_pixel(colors.dst),
        premultiply_pixel(colors.src),
    );
    assert!(
        almost_equal(got, expected, tolerance),
        "premultiplied/{op}/{}: expected {expected:02x?}, got {got:02x?} (tolerance {tolerance})",
        colors.name
    );
}

/// One colour pair with the expected result per compositing flag.
#[derive(Debug, Clone, Copy)]
pub struct BlendCase {
    /// Inputs
    pub colors: TestColors,
    /// Per-channel tolerance
    pub tolerance: u8,
    /// Expected `0xRR_GG_BB_AA` per flag
    pub expected: &'static [(Compositing, u32)],
}

/// Shorthand constructor for [`BlendCase`].
pub fn case(
    colors: TestColors,
    tolerance: u8,
    expected: &'static [(Compositing, u32)],
) -> BlendCase {
    BlendCase {
        colors,
        tolerance,
        expected,
    }
}

/// Runs every case of a blend mode in both representations.
pub fn run_blend_test(mode: BlendMode, cases: &[BlendCase]) {
    for case in cases {
        for &(flag, expected) in case.expected {
            let op = Operator::from(BlendOp::new(mode).with_compositing(flag));
            check(op, case.colors, c(expected), case.tolerance);
        }
    }
}

/// One colour pair with its expected Porter-Duff result.
#[derive(Debug, Clone, Copy)]
pub struct CompositeCase {
    /// Inputs
    pub colors: TestColors,
    /// Expected `0xRR_GG_BB_AA`
    pub expected: u32,
    /// Per-channel tolerance
    pub tolerance: u8,
}

/// Runs every case of a composite operator in both representations.
pub fn run_composite_test(mode: CompositeMode, cases: &[CompositeCase]) {
    for case in cases {
        check(Operator::from(mode), case.colors, c(case.expected), case.tolerance);
    }
}
