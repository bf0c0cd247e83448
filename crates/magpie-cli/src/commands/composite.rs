//! Composite command

use anyhow::{Result, bail};
use magpie::{CompositeMode, Operator};

use crate::CompositeArgs;

pub fn run(args: CompositeArgs, ctx: &magpie::Context, verbose: u8) -> Result<()> {
    let mode: CompositeMode = match args.mode.parse() {
        Ok(mode) => mode,
        Err(_) => bail!(
            "Unknown composite mode: {} (see `magpie modes`)",
            args.mode
        ),
    };
    super::draw(&args.draw, Operator::from(mode), ctx, verbose)
}
