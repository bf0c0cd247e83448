//! Blend command

use anyhow::{Result, bail};
use magpie::{BlendMode, BlendOp, Compositing, Operator};

use crate::BlendArgs;

pub fn run(args: BlendArgs, ctx: &magpie::Context, verbose: u8) -> Result<()> {
    let Ok(mode) = args.mode.parse::<BlendMode>() else {
        bail!("Unknown blend mode: {} (see `magpie modes`)", args.mode);
    };
    let Ok(compositing) = args.compositing.parse::<Compositing>() else {
        bail!(
            "Unknown compositing: {} (all, blend-only, blend-and-dst, blend-and-src)",
            args.compositing
        );
    };
    let op = Operator::from(BlendOp::new(mode).with_compositing(compositing));
    super::draw(&args.draw, op, ctx, verbose)
}
