//! aerostrum - air guitar in the terminal
//!
//! The keyboard stands in for the camera: it poses a chord hand and moves
//! the strumming point across the strings.
//!
//! Run with: cargo run -- --assets chords

mod app;
mod sim;
mod ui;

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use clap::Parser;
use color_eyre::eyre::{Result as EyreResult, WrapErr};
use tracing_subscriber::EnvFilter;

use aerostrum::SessionConfig;
use app::Aerostrum;

#[derive(Parser)]
#[command(name = "aerostrum")]
#[command(about = "Play chord samples by strumming virtual strings")]
struct Cli {
    /// Root of the <mode>/<chord>/string<n>.wav tree
    #[arg(long, default_value = "chords")]
    assets: PathBuf,

    /// Virtual camera frame width in pixels
    #[arg(long, default_value_t = 1920)]
    width: u32,

    /// Virtual camera frame height in pixels
    #[arg(long, default_value_t = 1080)]
    height: u32,

    /// Body landmark index that strums
    #[arg(long, default_value_t = 19)]
    strum_landmark: usize,

    /// Frames a struck string stays lit
    #[arg(long, default_value_t = 10)]
    highlight_frames: u64,

    /// Log file; the terminal belongs to the UI
    #[arg(long, default_value = "aerostrum.log")]
    log: PathBuf,
}

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let log = File::create(&cli.log)
        .wrap_err_with(|| format!("failed to create log file {}", cli.log.display()))?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(log))
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("aerostrum=info")),
        )
        .init();

    let config = SessionConfig::new()
        .asset_root(cli.assets)
        .frame_size(cli.width, cli.height)
        .strum_landmark(cli.strum_landmark)
        .highlight_frames(cli.highlight_frames);

    Aerostrum::new().config(config).run()
}
