//! Reference colours for every blend mode under each compositing flag.
//!
//! Tolerances absorb the rounding differences between the straight and
//! premultiplied paths.

use magpie_ops::BlendMode;
use magpie_ops::Compositing::*;

use crate::reference::*;

#[test]
fn test_blend_color_burn() {
    run_blend_test(BlendMode::ColorBurn, &[
        case(OPAQUE1, 1, &[
            (All, 0x00_02_00_ff), (BlendAndSrc, 0x00_02_00_ff),
            (BlendAndDst, 0x00_02_00_ff), (BlendOnly, 0x00_02_00_ff),
        ]),
        case(OPAQUE2, 1, &[
            (All, 0x02_00_82_ff), (BlendAndSrc, 0x02_00_82_ff),
            (BlendAndDst, 0x02_00_82_ff), (BlendOnly, 0x02_00_82_ff),
        ]),
        case(TRANSPARENT_SRC, 0, &[
            (All, 0x00_80_ff_ff), (BlendAndSrc, 0x00_00_00_00),
            (BlendAndDst, 0x00_80_ff_ff), (BlendOnly, 0x00_00_00_00),
        ]),
        case(TRANSPARENT_DST, 0, &[
            (All, 0x00_80_ff_ff), (BlendAndSrc, 0x00_80_ff_ff),
            (BlendAndDst, 0x00_00_00_00), (BlendOnly, 0x00_00_00_00),
        ]),
        case(TRANSLUCENT, 1, &[
            (All, 0x56_40_96_c0), (BlendAndSrc, 0x41_15_81_80),
            (BlendAndDst, 0x17_2b_96_80), (BlendOnly, 0x02_00_82_40),
        ]),
    ]);
}

#[test]
fn test_blend_color_dodge() {
    run_blend_test(BlendMode::ColorDodge, &[
        case(OPAQUE1, 0, &[
            (All, 0xff_ff_ff_ff), (BlendAndSrc, 0xff_ff_ff_ff),
            (BlendAndDst, 0xff_ff_ff_ff), (BlendOnly, 0xff_ff_ff_ff),
        ]),
        case(OPAQUE2, 0, &[
            (All, 0xff_aa_ff_ff), (BlendAndSrc, 0xff_aa_ff_ff),
            (BlendAndDst, 0xff_aa_ff_ff), (BlendOnly, 0xff_aa_ff_ff),
        ]),
        case(TRANSPARENT_SRC, 0, &[
            (All, 0x00_80_ff_ff), (BlendAndSrc, 0x00_00_00_00),
            (BlendAndDst, 0x00_80_ff_ff), (BlendOnly, 0x00_00_00_00),
        ]),
        case(TRANSPARENT_DST, 0, &[
            (All, 0x00_80_ff_ff), (BlendAndSrc, 0x00_80_ff_ff),
            (BlendAndDst, 0x00_00_00_00), (BlendOnly, 0x00_00_00_00),
        ]),
        case(TRANSLUCENT, 1, &[
            (All, 0xaa_79_c0_c0), (BlendAndSrc, 0xea_86_d4_80),
            (BlendAndDst, 0xbf_9c_ea_80), (BlendOnly, 0xff_aa_ff_40),
        ]),
    ]);
}

#[test]
fn test_blend_darken() {
    run_blend_test(BlendMode::Darken, &[
        case(OPAQUE1, 0, &[
            (All, 0x00_80_00_ff), (BlendAndSrc, 0x00_80_00_ff),
            (BlendAndDst, 0x00_80_00_ff), (BlendOnly, 0x00_80_00_ff),
        ]),
        case(OPAQUE2, 0, &[
            (All, 0x40_40_80_ff), (BlendAndSrc, 0x40_40_80_ff),
            (BlendAndDst, 0x40_40_80_ff), (BlendOnly, 0x40_40_80_ff),
        ]),
        case(TRANSPARENT_SRC, 0, &[
            (All, 0x00_80_ff_ff), (BlendAndSrc, 0x00_00_00_00),
            (BlendAndDst, 0x00_80_ff_ff), (BlendOnly, 0x00_00_00_00),
        ]),
        case(TRANSPARENT_DST, 0, &[
            (All, 0x00_80_ff_ff), (BlendAndSrc, 0x00_80_ff_ff),
            (BlendAndDst, 0x00_00_00_00), (BlendOnly, 0x00_00_00_00),
        ]),
        case(TRANSLUCENT, 1, &[
            (All, 0x6a_55_95_c0), (BlendAndSrc, 0x6a_40_80_80),
            (BlendAndDst, 0x40_55_95_80), (BlendOnly, 0x40_40_80_40),
        ]),
    ]);
}

#[test]
fn test_blend_difference() {
    run_blend_test(BlendMode::Difference, &[
        case(OPAQUE1, 0, &[
            (All, 0xff_00_ff_ff), (BlendAndSrc, 0xff_00_ff_ff),
            (BlendAndDst, 0xff_00_ff_ff), (BlendOnly, 0xff_00_ff_ff),
        ]),
        case(OPAQUE2, 0, &[
            (All, 0x80_40_40_ff), (BlendAndSrc, 0x80_40_40_ff),
            (BlendAndDst, 0x80_40_40_ff), (BlendOnly, 0x80_40_40_ff),
        ]),
        case(TRANSPARENT_SRC, 0, &[
            (All, 0x00_80_ff_ff), (BlendAndSrc, 0x00_00_00_00),
            (BlendAndDst, 0x00_80_ff_ff), (BlendOnly, 0x00_00_00_00),
        ]),
        case(TRANSPARENT_DST, 0, &[
            (All, 0x00_80_ff_ff), (BlendAndSrc, 0x00_80_ff_ff),
            (BlendAndDst, 0x00_00_00_00), (BlendOnly, 0x00_00_00_00),
        ]),
        case(TRANSLUCENT, 1, &[
            (All, 0x80_55_80_c0), (BlendAndSrc, 0x95_40_55_80),
            (BlendAndDst, 0x6a_55_6a_80), (BlendOnly, 0x80_40_40_40),
        ]),
    ]);
}

#[test]
fn test_blend_divide() {
    run_blend_test(BlendMode::Divide, &[
        case(OPAQUE1, 0, &[
            (All, 0x00_ff_ff_ff), (BlendAndSrc, 0x00_ff_ff_ff),
            (BlendAndDst, 0x00_ff_ff_ff), (BlendOnly, 0x00_ff_ff_ff),
        ]),
        case(OPAQUE2, 0, &[
            (All, 0x55_ff_ff_ff), (BlendAndSrc, 0x55_ff_ff_ff),
            (BlendAndDst, 0x55_ff_ff_ff), (BlendOnly, 0x55_ff_ff_ff),
        ]),
        case(TRANSPARENT_SRC, 0, &[
            (All, 0x00_80_ff_ff), (BlendAndSrc, 0x00_00_00_00),
            (BlendAndDst, 0x00_80_ff_ff), (BlendOnly, 0x00_00_00_00),
        ]),
        case(TRANSPARENT_DST, 0, &[
            (All, 0x00_80_ff_ff), (BlendAndSrc, 0x00_80_ff_ff),
            (BlendAndDst, 0x00_00_00_00), (BlendOnly, 0x00_00_00_00),
        ]),
        case(TRANSLUCENT, 1, &[
            (All, 0x71_95_bf_c0), (BlendAndSrc, 0x79_bf_d5_80),
            (BlendAndDst, 0x4e_d5_ea_80), (BlendOnly, 0x55_ff_ff_40),
        ]),
    ]);
}

#[test]
fn test_blend_exclusion() {
    run_blend_test(BlendMode::Exclusion, &[
        case(OPAQUE1, 0, &[
            (All, 0xff_80_ff_ff), (BlendAndSrc, 0xff_80_ff_ff),
            (BlendAndDst, 0xff_80_ff_ff), (BlendOnly, 0xff_80_ff_ff),
        ]),
        case(OPAQUE2, 1, &[
            (All, 0xa0_80_80_ff), (BlendAndSrc, 0xa0_80_80_ff),
            (BlendAndDst, 0xa0_80_80_ff), (BlendOnly, 0xa0_80_80_ff),
        ]),
        case(TRANSPARENT_SRC, 0, &[
            (All, 0x00_80_ff_ff), (BlendAndSrc, 0x00_00_00_00),
            (BlendAndDst, 0x00_80_ff_ff), (BlendOnly, 0x00_00_00_00),
        ]),
        case(TRANSPARENT_DST, 0, &[
            (All, 0x00_80_ff_ff), (BlendAndSrc, 0x00_80_ff_ff),
            (BlendAndDst, 0x00_00_00_00), (BlendOnly, 0x00_00_00_00),
        ]),
        case(TRANSLUCENT, 1, &[
            (All, 0x8a_6a_95_c0), (BlendAndSrc, 0xaa_6a_80_80),
            (BlendAndDst, 0x80_80_95_80), (BlendOnly, 0xa0_80_80_40),
        ]),
    ]);
}

#[test]
fn test_blend_hard_light() {
    run_blend_test(BlendMode::HardLight, &[
        case(OPAQUE1, 1, &[
            (All, 0xff_81_00_ff), (BlendAndSrc, 0xff_81_00_ff),
            (BlendAndDst, 0xff_81_00_ff), (BlendOnly, 0xff_81_00_ff),
        ]),
        case(OPAQUE2, 1, &[
            (All, 0xa1_40_c1_ff), (BlendAndSrc, 0xa1_40_c1_ff),
            (BlendAndDst, 0xa1_40_c1_ff), (BlendOnly, 0xa1_40_c1_ff),
        ]),
        case(TRANSPARENT_SRC, 0, &[
            (All, 0x00_80_ff_ff), (BlendAndSrc, 0x00_00_00_00),
            (BlendAndDst, 0x00_80_ff_ff), (BlendOnly, 0x00_00_00_00),
        ]),
        case(TRANSPARENT_DST, 0, &[
            (All, 0x00_80_ff_ff), (BlendAndSrc, 0x00_80_ff_ff),
            (BlendAndDst, 0x00_00_00_00), (BlendOnly, 0x00_00_00_00),
        ]),
        case(TRANSLUCENT, 1, &[
            (All, 0x8a_55_aa_c0), (BlendAndSrc, 0xab_40_ab_80),
            (BlendAndDst, 0x81_55_c1_80), (BlendOnly, 0xa1_40_c1_40),
        ]),
    ]);
}

#[test]
fn test_blend_hard_mix() {
    run_blend_test(BlendMode::HardMix, &[
        case(OPAQUE1, 0, &[
            (All, 0xff_ff_ff_ff), (BlendAndSrc, 0xff_ff_ff_ff),
            (BlendAndDst, 0xff_ff_ff_ff), (BlendOnly, 0xff_ff_ff_ff),
        ]),
        case(OPAQUE2, 0, &[
            (All, 0xff_00_ff_ff), (BlendAndSrc, 0xff_00_ff_ff),
            (BlendAndDst, 0xff_00_ff_ff), (BlendOnly, 0xff_00_ff_ff),
        ]),
        case(TRANSPARENT_SRC, 0, &[
            (All, 0x00_80_ff_ff), (BlendAndSrc, 0x00_00_00_00),
            (BlendAndDst, 0x00_80_ff_ff), (BlendOnly, 0x00_00_00_00),
        ]),
        case(TRANSPARENT_DST, 0, &[
            (All, 0x00_80_ff_ff), (BlendAndSrc, 0x00_80_ff_ff),
            (BlendAndDst, 0x00_00_00_00), (BlendOnly, 0x00_00_00_00),
        ]),
        case(TRANSLUCENT, 1, &[
            (All, 0xaa_40_c0_c0), (BlendAndSrc, 0xea_15_d4_80),
            (BlendAndDst, 0xbf_2a_ea_80), (BlendOnly, 0xff_00_ff_40),
        ]),
    ]);
}

#[test]
fn test_blend_lighten() {
    run_blend_test(BlendMode::Lighten, &[
        case(OPAQUE1, 0, &[
            (All, 0xff_80_ff_ff), (BlendAndSrc, 0xff_80_ff_ff),
            (BlendAndDst, 0xff_80_ff_ff), (BlendOnly, 0xff_80_ff_ff),
        ]),
        case(OPAQUE2, 0, &[
            (All, 0xc0_80_c0_ff), (BlendAndSrc, 0xc0_80_c0_ff),
            (BlendAndDst, 0xc0_80_c0_ff), (BlendOnly, 0xc0_80_c0_ff),
        ]),
        case(TRANSPARENT_SRC, 0, &[
            (All, 0x00_80_ff_ff), (BlendAndSrc, 0x00_00_00_00),
            (BlendAndDst, 0x00_80_ff_ff), (BlendOnly, 0x00_00_00_00),
        ]),
        case(TRANSPARENT_DST, 0, &[
            (All, 0x00_80_ff_ff), (BlendAndSrc, 0x00_80_ff_ff),
            (BlendAndDst, 0x00_00_00_00), (BlendOnly, 0x00_00_00_00),
        ]),
        case(TRANSLUCENT, 1, &[
            (All, 0x95_6a_aa_c0), (BlendAndSrc, 0xbf_6a_aa_80),
            (BlendAndDst, 0x95_80_bf_80), (BlendOnly, 0xc0_80_c0_40),
        ]),
    ]);
}

#[test]
fn test_blend_linear_burn() {
    run_blend_test(BlendMode::LinearBurn, &[
        case(OPAQUE1, 1, &[
            (All, 0x00_01_00_ff), (BlendAndSrc, 0x00_01_00_ff),
            (BlendAndDst, 0x00_01_00_ff), (BlendOnly, 0x00_01_00_ff),
        ]),
        case(OPAQUE2, 1, &[
            (All, 0x01_00_41_ff), (BlendAndSrc, 0x01_00_41_ff),
            (BlendAndDst, 0x01_00_41_ff), (BlendOnly, 0x01_00_41_ff),
        ]),
        case(TRANSPARENT_SRC, 0, &[
            (All, 0x00_80_ff_ff), (BlendAndSrc, 0x00_00_00_00),
            (BlendAndDst, 0x00_80_ff_ff), (BlendOnly, 0x00_00_00_00),
        ]),
        case(TRANSPARENT_DST, 0, &[
            (All, 0x00_80_ff_ff), (BlendAndSrc, 0x00_80_ff_ff),
            (BlendAndDst, 0x00_00_00_00), (BlendOnly, 0x00_00_00_00),
        ]),
        case(TRANSLUCENT, 1, &[
            (All, 0x55_40_80_c0), (BlendAndSrc, 0x41_15_56_80),
            (BlendAndDst, 0x17_2b_6c_80), (BlendOnly, 0x01_00_41_40),
        ]),
    ]);
}

#[test]
fn test_blend_linear_dodge() {
    run_blend_test(BlendMode::LinearDodge, &[
        case(OPAQUE1, 0, &[
            (All, 0xff_ff_ff_ff), (BlendAndSrc, 0xff_ff_ff_ff),
            (BlendAndDst, 0xff_ff_ff_ff), (BlendOnly, 0xff_ff_ff_ff),
        ]),
        case(OPAQUE2, 0, &[
            (All, 0xff_c0_ff_ff), (BlendAndSrc, 0xff_c0_ff_ff),
            (BlendAndDst, 0xff_c0_ff_ff), (BlendOnly, 0xff_c0_ff_ff),
        ]),
        case(TRANSPARENT_SRC, 0, &[
            (All, 0x00_80_ff_ff), (BlendAndSrc, 0x00_00_00_00),
            (BlendAndDst, 0x00_80_ff_ff), (BlendOnly, 0x00_00_00_00),
        ]),
        case(TRANSPARENT_DST, 0, &[
            (All, 0x00_80_ff_ff), (BlendAndSrc, 0x00_80_ff_ff),
            (BlendAndDst, 0x00_00_00_00), (BlendOnly, 0x00_00_00_00),
        ]),
        case(TRANSLUCENT, 1, &[
            (All, 0xaa_80_c0_c0), (BlendAndSrc, 0xea_95_d5_80),
            (BlendAndDst, 0xbf_aa_ea_80), (BlendOnly, 0xff_c0_ff_40),
        ]),
    ]);
}

#[test]
fn test_blend_linear_light() {
    run_blend_test(BlendMode::LinearLight, &[
        case(OPAQUE1, 0, &[
            (All, 0xff_81_00_ff), (BlendAndSrc, 0xff_81_00_ff),
            (BlendAndDst, 0xff_81_00_ff), (BlendOnly, 0xff_81_00_ff),
        ]),
        case(OPAQUE2, 0, &[
            (All, 0xc1_01_c1_ff), (BlendAndSrc, 0xc1_01_c1_ff),
            (BlendAndDst, 0xc1_01_c1_ff), (BlendOnly, 0xc1_01_c1_ff),
        ]),
        case(TRANSPARENT_SRC, 0, &[
            (All, 0x00_80_ff_ff), (BlendAndSrc, 0x00_00_00_00),
            (BlendAndDst, 0x00_80_ff_ff), (BlendOnly, 0x00_00_00_00),
        ]),
        case(TRANSPARENT_DST, 0, &[
            (All, 0x00_80_ff_ff), (BlendAndSrc, 0x00_80_ff_ff),
            (BlendAndDst, 0x00_00_00_00), (BlendOnly, 0x00_00_00_00),
        ]),
        case(TRANSLUCENT, 1, &[
            (All, 0x96_40_ab_c0), (BlendAndSrc, 0xc0_16_ab_80),
            (BlendAndDst, 0x96_2b_c0_80), (BlendOnly, 0xc1_01_c1_40),
        ]),
    ]);
}

#[test]
fn test_blend_multiply() {
    run_blend_test(BlendMode::Multiply, &[
        case(OPAQUE1, 0, &[
            (All, 0x00_40_00_ff), (BlendAndSrc, 0x00_40_00_ff),
            (BlendAndDst, 0x00_40_00_ff), (BlendOnly, 0x00_40_00_ff),
        ]),
        case(OPAQUE2, 1, &[
            (All, 0x30_20_60_ff), (BlendAndSrc, 0x30_20_60_ff),
            (BlendAndDst, 0x30_20_60_ff), (BlendOnly, 0x30_20_60_ff),
        ]),
        case(TRANSPARENT_SRC, 0, &[
            (All, 0x00_80_ff_ff), (BlendAndSrc, 0x00_00_00_00),
            (BlendAndDst, 0x00_80_ff_ff), (BlendOnly, 0x00_00_00_00),
        ]),
        case(TRANSPARENT_DST, 0, &[
            (All, 0x00_80_ff_ff), (BlendAndSrc, 0x00_80_ff_ff),
            (BlendAndDst, 0x00_00_00_00), (BlendOnly, 0x00_00_00_00),
        ]),
        case(TRANSLUCENT, 1, &[
            (All, 0x65_4a_8a_c0), (BlendAndSrc, 0x60_2b_6a_80),
            (BlendAndDst, 0x35_40_80_80), (BlendOnly, 0x30_20_60_40),
        ]),
    ]);
}

#[test]
fn test_blend_overlay() {
    run_blend_test(BlendMode::Overlay, &[
        case(OPAQUE1, 1, &[
            (All, 0x00_81_ff_ff), (BlendAndSrc, 0x00_81_ff_ff),
            (BlendAndDst, 0x00_81_ff_ff), (BlendOnly, 0x00_81_ff_ff),
        ]),
        case(OPAQUE2, 1, &[
            (All, 0x60_41_c1_ff), (BlendAndSrc, 0x60_41_c1_ff),
            (BlendAndDst, 0x60_41_c1_ff), (BlendOnly, 0x60_41_c1_ff),
        ]),
        case(TRANSPARENT_SRC, 0, &[
            (All, 0x00_80_ff_ff), (BlendAndSrc, 0x00_00_00_00),
            (BlendAndDst, 0x00_80_ff_ff), (BlendOnly, 0x00_00_00_00),
        ]),
        case(TRANSPARENT_DST, 0, &[
            (All, 0x00_80_ff_ff), (BlendAndSrc, 0x00_80_ff_ff),
            (BlendAndDst, 0x00_00_00_00), (BlendOnly, 0x00_00_00_00),
        ]),
        case(TRANSLUCENT, 1, &[
            (All, 0x75_55_aa_c0), (BlendAndSrc, 0x80_41_ab_80),
            (BlendAndDst, 0x55_56_c1_80), (BlendOnly, 0x60_41_c1_40),
        ]),
        case(colors("Dst_Dark", 0x40_40_40_ff, 0xb0_b0_b0_ff), 1, &[
            (All, 0x58_58_58_ff),
        ]),
        case(colors("Dst_Light", 0xd0_d0_d0_ff, 0xb0_b0_b0_ff), 1, &[
            (All, 0xe2_e2_e2_ff),
        ]),
    ]);
}

#[test]
fn test_blend_pin_light() {
    run_blend_test(BlendMode::PinLight, &[
        case(OPAQUE1, 0, &[
            (All, 0xff_80_00_ff), (BlendAndSrc, 0xff_80_00_ff),
            (BlendAndDst, 0xff_80_00_ff), (BlendOnly, 0xff_80_00_ff),
        ]),
        case(OPAQUE2, 1, &[
            (All, 0x81_80_c0_ff), (BlendAndSrc, 0x81_80_c0_ff),
            (BlendAndDst, 0x81_80_c0_ff), (BlendOnly, 0x81_80_c0_ff),
        ]),
        case(TRANSPARENT_SRC, 0, &[
            (All, 0x00_80_ff_ff), (BlendAndSrc, 0x00_00_00_00),
            (BlendAndDst, 0x00_80_ff_ff), (BlendOnly, 0x00_00_00_00),
        ]),
        case(TRANSPARENT_DST, 0, &[
            (All, 0x00_80_ff_ff), (BlendAndSrc, 0x00_80_ff_ff),
            (BlendAndDst, 0x00_00_00_00), (BlendOnly, 0x00_00_00_00),
        ]),
        case(TRANSLUCENT, 1, &[
            (All, 0x80_6a_aa_c0), (BlendAndSrc, 0x96_6a_aa_80),
            (BlendAndDst, 0x6c_80_bf_80), (BlendOnly, 0x81_80_c0_40),
        ]),
        case(colors("DarkSrc_DstDarker", 0x40_40_40_ff, 0x60_60_60_ff), 0, &[
            (All, 0x40_40_40_ff),
        ]),
        case(colors("DarkSrc_DstLighter", 0xe0_e0_e0_ff, 0x60_60_60_ff), 0, &[
            (All, 0xc0_c0_c0_ff),
        ]),
        case(colors("LightSrc_DstLighter", 0xe0_e0_e0_ff, 0xa0_a0_a0_ff), 0, &[
            (All, 0xe0_e0_e0_ff),
        ]),
        case(colors("LightSrc_DstDarker", 0x20_20_20_ff, 0xa0_a0_a0_ff), 1, &[
            (All, 0x41_41_41_ff),
        ]),
        case(colors("DarkSrc_DstDarker_Translucent", 0x40_40_40_80, 0x60_60_60_80), 1, &[
            (All, 0x4b_4b_4b_c0),
        ]),
        case(colors("DarkSrc_DstLighter_Translucent", 0xe0_e0_e0_80, 0x60_60_60_80), 1, &[
            (All, 0xab_ab_ab_c0),
        ]),
        case(colors("LightSrc_DstLighter_Translucent", 0xe0_e0_e0_80, 0xa0_a0_a0_80), 1, &[
            (All, 0xca_ca_ca_c0),
        ]),
        case(colors("LightSrc_DstDarker_Translucent", 0x20_20_20_80, 0xa0_a0_a0_80), 1, &[
            (All, 0x56_56_56_c0),
        ]),
    ]);
}

#[test]
fn test_blend_screen() {
    run_blend_test(BlendMode::Screen, &[
        case(OPAQUE1, 1, &[
            (All, 0xff_c0_ff_ff), (BlendAndSrc, 0xff_c0_ff_ff),
            (BlendAndDst, 0xff_c0_ff_ff), (BlendOnly, 0xff_c0_ff_ff),
        ]),
        case(OPAQUE2, 1, &[
            (All, 0xd0_a0_e0_ff), (BlendAndSrc, 0xd0_a0_e0_ff),
            (BlendAndDst, 0xd0_a0_e0_ff), (BlendOnly, 0xd0_a0_e0_ff),
        ]),
        case(TRANSPARENT_SRC, 0, &[
            (All, 0x00_80_ff_ff), (BlendAndSrc, 0x00_00_00_00),
            (BlendAndDst, 0x00_80_ff_ff), (BlendOnly, 0x00_00_00_00),
        ]),
        case(TRANSPARENT_DST, 0, &[
            (All, 0x00_80_ff_ff), (BlendAndSrc, 0x00_80_ff_ff),
            (BlendAndDst, 0x00_00_00_00), (BlendOnly, 0x00_00_00_00),
        ]),
        case(TRANSLUCENT, 1, &[
            (All, 0x9a_75_b5_c0), (BlendAndSrc, 0xca_80_bf_80),
            (BlendAndDst, 0x9f_95_d5_80), (BlendOnly, 0xd0_a0_e0_40),
        ]),
    ]);
}

#[test]
fn test_blend_soft_light() {
    run_blend_test(BlendMode::SoftLight, &[
        case(OPAQUE1, 1, &[
            (All, 0x00_80_ff_ff), (BlendAndSrc, 0x00_80_ff_ff),
            (BlendAndDst, 0x00_80_ff_ff), (BlendOnly, 0x00_80_ff_ff),
        ]),
        case(OPAQUE2, 1, &[
            (All, 0x60_60_c0_ff), (BlendAndSrc, 0x60_60_c0_ff),
            (BlendAndDst, 0x60_60_c0_ff), (BlendOnly, 0x60_60_c0_ff),
        ]),
        case(TRANSPARENT_SRC, 0, &[
            (All, 0x00_80_ff_ff), (BlendAndSrc, 0x00_00_00_00),
            (BlendAndDst, 0x00_80_ff_ff), (BlendOnly, 0x00_00_00_00),
        ]),
        case(TRANSPARENT_DST, 0, &[
            (All, 0x00_80_ff_ff), (BlendAndSrc, 0x00_80_ff_ff),
            (BlendAndDst, 0x00_00_00_00), (BlendOnly, 0x00_00_00_00),
        ]),
        case(TRANSLUCENT, 1, &[
            (All, 0x75_60_aa_c0), (BlendAndSrc, 0x80_55_aa_80),
            (BlendAndDst, 0x55_6a_bf_80), (BlendOnly, 0x60_60_c0_40),
        ]),
    ]);
}

#[test]
fn test_blend_subtract() {
    run_blend_test(BlendMode::Subtract, &[
        case(OPAQUE1, 0, &[
            (All, 0x00_00_ff_ff), (BlendAndSrc, 0x00_00_ff_ff),
            (BlendAndDst, 0x00_00_ff_ff), (BlendOnly, 0x00_00_ff_ff),
        ]),
        case(OPAQUE2, 0, &[
            (All, 0x00_40_40_ff), (BlendAndSrc, 0x00_40_40_ff),
            (BlendAndDst, 0x00_40_40_ff), (BlendOnly, 0x00_40_40_ff),
        ]),
        case(TRANSPARENT_SRC, 0, &[
            (All, 0x00_80_ff_ff), (BlendAndSrc, 0x00_00_00_00),
            (BlendAndDst, 0x00_80_ff_ff), (BlendOnly, 0x00_00_00_00),
        ]),
        case(TRANSPARENT_DST, 0, &[
            (All, 0x00_80_ff_ff), (BlendAndSrc, 0x00_80_ff_ff),
            (BlendAndDst, 0x00_00_00_00), (BlendOnly, 0x00_00_00_00),
        ]),
        case(TRANSLUCENT, 1, &[
            (All, 0x55_55_80_c0), (BlendAndSrc, 0x40_40_55_80),
            (BlendAndDst, 0x15_55_6a_80), (BlendOnly, 0x00_40_40_40),
        ]),
    ]);
}

#[test]
fn test_blend_vivid_light() {
    run_blend_test(BlendMode::VividLight, &[
        case(OPAQUE1, 1, &[
            (All, 0xff_80_00_ff), (BlendAndSrc, 0xff_80_00_ff),
            (BlendAndDst, 0xff_80_00_ff), (BlendOnly, 0xff_80_00_ff),
        ]),
        case(OPAQUE2, 1, &[
            (All, 0x81_02_c0_ff), (BlendAndSrc, 0x81_02_c0_ff),
            (BlendAndDst, 0x81_02_c0_ff), (BlendOnly, 0x81_02_c0_ff),
        ]),
        case(TRANSPARENT_SRC, 0, &[
            (All, 0x00_80_ff_ff), (BlendAndSrc, 0x00_00_00_00),
            (BlendAndDst, 0x00_80_ff_ff), (BlendOnly, 0x00_00_00_00),
        ]),
        case(TRANSPARENT_DST, 0, &[
            (All, 0x00_80_ff_ff), (BlendAndSrc, 0x00_80_ff_ff),
            (BlendAndDst, 0x00_00_00_00), (BlendOnly, 0x00_00_00_00),
        ]),
        case(TRANSLUCENT, 1, &[
            (All, 0x80_41_aa_c0), (BlendAndSrc, 0x96_17_aa_80),
            (BlendAndDst, 0x6c_2c_bf_80), (BlendOnly, 0x81_02_c0_40),
        ]),
        case(colors("DarkSrc", 0x80_80_80_ff, 0x40_40_40_ff), 0, &[
            (All, 0x02_02_02_ff),
        ]),
        case(colors("LightSrc", 0x80_80_80_ff, 0xc0_c0_c0_ff), 0, &[
            (All, 0xff_ff_ff_ff),
        ]),
        case(colors("DarkSrc_Translucent", 0x80_80_80_80, 0x40_40_40_80), 1, &[
            (All, 0x40_40_40_c0),
        ]),
        case(colors("LightSrc_Translucent", 0x80_80_80_80, 0xc0_c0_c0_80), 1, &[
            (All, 0xc0_c0_c0_c0),
        ]),
    ]);
}
