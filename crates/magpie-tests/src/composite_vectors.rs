//! Reference colours for the Porter-Duff operators.

use magpie_core::TRANSPARENT;
use magpie_ops::CompositeMode;

use crate::reference::{
    CompositeCase, OPAQUE1, OPAQUE2, TRANSLUCENT, TRANSPARENT_DST, TRANSPARENT_SRC, TestColors,
    check, run_composite_test,
};

fn case(colors: TestColors, expected: u32, tolerance: u8) -> CompositeCase {
    CompositeCase {
        colors,
        expected,
        tolerance,
    }
}

#[test]
fn test_composite_clear() {
    for colors in [OPAQUE1, OPAQUE2, TRANSPARENT_SRC, TRANSPARENT_DST, TRANSLUCENT] {
        check(CompositeMode::Clear.into(), colors, TRANSPARENT, 0);
    }
}

#[test]
fn test_composite_copies() {
    for colors in [OPAQUE1, OPAQUE2, TRANSPARENT_SRC, TRANSPARENT_DST, TRANSLUCENT] {
        check(CompositeMode::Source.into(), colors, colors.src, 0);
        check(CompositeMode::Destination.into(), colors, colors.dst, 0);
    }
}

#[test]
fn test_composite_source_over() {
    run_composite_test(CompositeMode::SourceOver, &[
        case(OPAQUE1, 0xff_80_00_ff, 0),
        case(TRANSPARENT_SRC, 0x00_80_ff_ff, 0),
        case(TRANSPARENT_DST, 0x00_80_ff_ff, 0),
        case(TRANSLUCENT, 0x96_55_95_bf, 2),
    ]);
}

#[test]
fn test_composite_source_in() {
    run_composite_test(CompositeMode::SourceIn, &[
        case(OPAQUE1, 0xff_80_00_ff, 0),
        case(OPAQUE2, 0xc0_40_80_ff, 0),
        case(TRANSPARENT_SRC, 0x00_00_00_00, 0),
        case(TRANSPARENT_DST, 0x00_00_00_00, 0),
        case(TRANSLUCENT, 0xc0_40_80_40, 0),
    ]);
}

#[test]
fn test_composite_source_out() {
    run_composite_test(CompositeMode::SourceOut, &[
        case(OPAQUE1, 0x00_00_00_00, 0),
        case(OPAQUE2, 0x00_00_00_00, 0),
        case(TRANSPARENT_SRC, 0x00_00_00_00, 0),
        case(TRANSPARENT_DST, 0x00_80_ff_ff, 0),
        case(TRANSLUCENT, 0xc0_40_80_40, 0),
    ]);
}

#[test]
fn test_composite_source_atop() {
    run_composite_test(CompositeMode::SourceAtop, &[
        case(OPAQUE1, 0xff_80_00_ff, 0),
        case(OPAQUE2, 0xc0_40_80_ff, 0),
        case(TRANSPARENT_SRC, 0x00_80_ff_ff, 0),
        case(TRANSPARENT_DST, 0x00_00_00_00, 0),
        case(TRANSLUCENT, 0x80_60_a0_80, 0),
    ]);
}

#[test]
fn test_composite_destination_over() {
    run_composite_test(CompositeMode::DestinationOver, &[
        case(OPAQUE1, 0x00_80_ff_ff, 0),
        case(TRANSPARENT_SRC, 0x00_80_ff_ff, 0),
        case(TRANSPARENT_DST, 0x00_80_ff_ff, 0),
        case(TRANSLUCENT, 0x6b_6b_ab_bf, 1),
    ]);
}

#[test]
fn test_composite_destination_in() {
    run_composite_test(CompositeMode::DestinationIn, &[
        case(OPAQUE1, 0x00_80_ff_ff, 0),
        case(TRANSPARENT_SRC, 0x00_00_00_00, 0),
        case(TRANSPARENT_DST, 0x00_00_00_00, 0),
        case(TRANSLUCENT, 0x40_80_c0_40, 1),
    ]);
}

#[test]
fn test_composite_destination_out() {
    run_composite_test(CompositeMode::DestinationOut, &[
        case(OPAQUE1, 0x00_00_00_00, 0),
        case(TRANSPARENT_SRC, 0x00_80_ff_ff, 0),
        case(TRANSPARENT_DST, 0x00_00_00_00, 0),
        case(TRANSLUCENT, 0x40_80_c0_3f, 1),
    ]);
}

#[test]
fn test_composite_destination_atop() {
    run_composite_test(CompositeMode::DestinationAtop, &[
        case(OPAQUE1, 0x00_80_ff_ff, 0),
        case(OPAQUE2, 0x40_80_c0_ff, 0),
        case(TRANSPARENT_SRC, 0x00_00_00_00, 0),
        case(TRANSPARENT_DST, 0x00_80_ff_ff, 0),
        case(TRANSLUCENT, 0x80_60_a0_80, 0),
    ]);
}

#[test]
fn test_composite_xor() {
    run_composite_test(CompositeMode::Xor, &[
        case(OPAQUE1, 0x00_00_00_00, 0),
        case(TRANSPARENT_SRC, 0x00_80_ff_ff, 0),
        case(TRANSPARENT_DST, 0x00_80_ff_ff, 0),
        case(TRANSLUCENT, 0x80_60_a0_80, 1),
    ]);
}
