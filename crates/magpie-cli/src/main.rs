//! magpie - Porter-Duff compositing and blend modes for PNG images

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod png_io;

#[derive(Parser)]
#[command(name = "magpie")]
#[command(author, version, about = "Porter-Duff compositing and blend modes for PNG images")]
#[command(long_about = "
Composites or blends a source PNG onto a destination PNG.

Examples:
  magpie composite bg.png fg.png -o out.png -m source-over
  magpie composite bg.png logo.png -o out.png -m source-atop --at 40,40
  magpie blend photo.png texture.png -o out.png -m multiply
  magpie blend a.png b.png -o out.png -m soft-light -c blend-and-dst --premultiplied
  magpie -j 8 -vv blend a.png b.png -o out.png -m screen
  magpie modes
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Number of row workers (overrides the config; 1 = serial)
    #[arg(short = 'j', long, global = true)]
    threads: Option<usize>,

    /// YAML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Porter-Duff compositing (source-over, xor, ...)
    #[command(visible_alias = "comp")]
    Composite(CompositeArgs),

    /// Blend modes (multiply, screen, overlay, ...)
    Blend(BlendArgs),

    /// List every operator with its id
    Modes,
}

/// Inputs, output and placement shared by `composite` and `blend`.
#[derive(Args)]
struct DrawArgs {
    /// Destination image
    dst: PathBuf,

    /// Source image
    src: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Destination point where the source is placed, as X,Y
    #[arg(long, default_value = "0,0", value_parser = parse_point)]
    at: magpie::Point,

    /// Source point lined up with --at, as X,Y
    #[arg(long, default_value = "0,0", value_parser = parse_point)]
    src_origin: magpie::Point,

    /// Run on premultiplied copies instead of straight alpha
    #[arg(long)]
    premultiplied: bool,
}

#[derive(Args)]
struct CompositeArgs {
    #[command(flatten)]
    draw: DrawArgs,

    /// Operator: clear, source, source-over, source-in, ..., xor
    #[arg(short, long, default_value = "source-over")]
    mode: String,
}

#[derive(Args)]
struct BlendArgs {
    #[command(flatten)]
    draw: DrawArgs,

    /// Blend mode: multiply, screen, overlay, ...
    #[arg(short, long)]
    mode: String,

    /// Compositing: all, blend-only, blend-and-dst, blend-and-src
    #[arg(short, long, default_value = "all")]
    compositing: String,
}

fn parse_point(s: &str) -> std::result::Result<magpie::Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{s}'"))?;
    let x = x.trim().parse().map_err(|e| format!("bad X in '{s}': {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad Y in '{s}': {e}"))?;
    Ok(magpie::Point::new(x, y))
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<magpie::Config> {
    let mut config = match &cli.config {
        Some(path) => magpie::Config::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => magpie::Config::default(),
    };
    if let Some(threads) = cli.threads {
        config.workers = threads;
    }
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(&cli)?;
    tracing::debug!(?config, "loaded config");
    let ctx = magpie::Context::new(&config);

    match cli.command {
        Commands::Composite(args) => commands::composite::run(args, &ctx, cli.verbose),
        Commands::Blend(args) => commands::blend::run(args, &ctx, cli.verbose),
        Commands::Modes => commands::modes::run(cli.verbose),
    }
}
