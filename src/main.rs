use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::error;

use clockface::{logging, ClockList, ClockOptions, WindowConfig, PAGE_BACKGROUND};

/// Shows a board of analog world clocks.
#[derive(Debug, Parser)]
#[command(name = "clockface", version, about)]
struct Args {
    /// TOML clock list; the built-in cities when omitted.
    #[arg(long, value_name = "PATH")]
    cities: Option<PathBuf>,

    /// Clocks per row.
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..))]
    columns: u32,

    /// Redraw rate limit.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Enable the keyboard inspector.
    #[arg(long)]
    debug: bool,

    /// Seed for the coincidence tick colors.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = logging::init() {
        eprintln!("failed to initialise logging: {e}");
    }

    if let Err(e) = run(args) {
        error!(error = %e, "clockface failed");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let list = match &args.cities {
        Some(path) => ClockList::load(path)?,
        None => ClockList::built_in()?,
    };

    let board = list.build_board(ClockOptions {
        debug: args.debug,
        seed: args.seed,
        backdrop: Some(PAGE_BACKGROUND.opaque()),
    })?;

    let window = WindowConfig::builder()
        .columns(args.columns)
        .max_framerate(args.fps)
        .build();

    clockface::run(board, window)
}
