//! retouch - pixel pipeline CLI
//!
//! Resize, tone curves, filters, histogram and color picking on PNG files.

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use retouch_color::ColorSample;
use retouch_ops::CurvePoint;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use retouch_cli::parse;

#[derive(Parser)]
#[command(name = "retouch")]
#[command(author, version, about = "Pixel pipeline for PNG images")]
#[command(long_about = "
Runs the retouch pixel pipeline on PNG files.

Examples:
  retouch info photo.png --histogram
  retouch resize photo.png -o small.png -s 50
  retouch resize photo.png -o thumb.png -w 320
  retouch curves photo.png -o flat.png --enter 0,128 --exit 255,128
  retouch filter photo.png -o soft.png -k gaussian
  retouch pick photo.png --at 10,20 --with 40,20
  retouch contrast '#777777' 255,255,255
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Display dimensions and histogram summary
    #[command(visible_alias = "i")]
    Info(InfoArgs),

    /// Nearest-neighbor resize
    #[command(visible_alias = "r")]
    Resize(ResizeArgs),

    /// Apply a two-point tone curve
    Curves(CurvesArgs),

    /// Apply a 3x3 convolution filter
    Filter(FilterArgs),

    /// Show RGB, XYZ and LAB of a pixel
    Pick(PickArgs),

    /// Contrast ratio of two colors
    Contrast(ContrastArgs),
}

#[derive(Args)]
struct InfoArgs {
    /// Input image(s)
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Include histogram peak and channel means
    #[arg(long)]
    histogram: bool,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct ResizeArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Target width
    #[arg(short, long)]
    width: Option<u32>,

    /// Target height
    #[arg(short = 'H', long)]
    height: Option<u32>,

    /// Scale in percent (e.g. 50, 200)
    #[arg(short, long, conflicts_with_all = ["width", "height"])]
    scale: Option<u32>,
}

#[derive(Args)]
struct CurvesArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Lower control point IN,OUT
    #[arg(long, value_parser = parse::curve_point, default_value = "0,0")]
    enter: CurvePoint,

    /// Upper control point IN,OUT
    #[arg(long, value_parser = parse::curve_point, default_value = "255,255")]
    exit: CurvePoint,
}

#[derive(Args)]
struct FilterArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Kernel: identity, box, gaussian, sharpen, edge
    #[arg(short, long, default_value = "gaussian")]
    kernel: String,
}

#[derive(Args)]
struct PickArgs {
    /// Input image
    input: PathBuf,

    /// Pixel to sample X,Y
    #[arg(long, value_parser = parse::coords)]
    at: (u32, u32),

    /// Second pixel X,Y; prints the contrast between both
    #[arg(long, value_parser = parse::coords)]
    with: Option<(u32, u32)>,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct ContrastArgs {
    /// First color (#rrggbb or r,g,b)
    first: ColorSample,

    /// Second color (#rrggbb or r,g,b)
    second: ColorSample,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Resize(args) => commands::resize::run(args),
        Commands::Curves(args) => commands::curves::run(args),
        Commands::Filter(args) => commands::filter::run(args),
        Commands::Pick(args) => commands::pick::run(args),
        Commands::Contrast(args) => commands::contrast::run(args),
    }
}
