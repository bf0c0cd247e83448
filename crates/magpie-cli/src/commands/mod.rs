//! CLI command implementations

pub mod blend;
pub mod composite;
pub mod modes;

use anyhow::{Context, Result, bail};
use magpie::{AlphaMode, Operator};
use tracing::{debug, info};

use crate::DrawArgs;
use crate::png_io;

/// Loads both inputs, draws `op` onto a copy of the destination and
/// writes the result.
pub fn draw(args: &DrawArgs, op: Operator, ctx: &magpie::Context, verbose: u8) -> Result<()> {
    let mut dst = png_io::read(&args.dst)?;
    let src = png_io::read(&args.src)?;

    let alpha = if args.premultiplied {
        AlphaMode::Premultiplied
    } else {
        ctx.default_alpha()
    };
    if alpha != dst.alpha() {
        debug!(%alpha, "converting inputs");
        dst.convert_alpha(alpha);
    }

    // Whole destination, with the source shifted so that src_origin lands
    // on --at. The source bounds clip the rest.
    let region = dst.rect();
    let Some(src_origin) = args
        .at
        .checked_sub(region.min)
        .and_then(|shift| args.src_origin.checked_sub(shift))
    else {
        bail!("placement out of range: --at {} --src-origin {}", args.at, args.src_origin);
    };

    if verbose > 0 {
        println!(
            "{} {} onto {} at {}",
            op,
            args.src.display(),
            args.dst.display(),
            args.at
        );
    }

    ctx.draw_to_dst(&mut dst, region, &src, src_origin, op)
        .with_context(|| format!("Failed to apply {op}"))?;
    info!(%op, output = %args.output.display(), "done");

    png_io::write(&args.output, &dst)
}
