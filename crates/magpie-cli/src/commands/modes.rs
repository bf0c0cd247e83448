//! Modes command

use anyhow::Result;
use magpie::{BlendMode, CompositeMode, Compositing};

pub fn run(verbose: u8) -> Result<()> {
    println!("Composite modes:");
    for mode in CompositeMode::ALL {
        println!("  {:>2}  {}", mode.id(), mode);
    }

    println!();
    println!("Blend modes:");
    for mode in BlendMode::ALL {
        if mode == BlendMode::ADD {
            println!("  {:>2}  {} (add)", mode.id(), mode);
        } else {
            println!("  {:>2}  {}", mode.id(), mode);
        }
    }

    println!();
    println!("Compositing:");
    for c in Compositing::ALL {
        if verbose > 0 {
            println!("  {:>2}  {}", c.bits(), c);
        } else {
            println!("  {}", c);
        }
    }
    Ok(())
}
