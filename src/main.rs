//! fpsplot - Plot FPS against color changes.
//!
//! Reads `plot_data.txt` from the working directory and writes
//! `colors_vs_fps.png` next to it.

use anyhow::{Context, Result};
use clap::Parser;
use fpsplot::config::PlotConfig;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "fpsplot", version)]
#[command(
    about = "Plot FPS against color changes from plot_data.txt into colors_vs_fps.png",
    long_about = None
)]
struct Args {
    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(log_path) = &args.log {
        // Fail before doing any work if the log file cannot be created.
        let log_file = std::fs::File::create(log_path)
            .with_context(|| format!("Failed to open log file {}", log_path.display()))?;
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(log_file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    } else {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    }
    tracing::info!("Starting fpsplot");

    let config = PlotConfig::default();
    let summary = fpsplot::pipeline::run(&config).with_context(|| {
        format!(
            "Failed to plot {} into {}",
            config.input.display(),
            config.output.display()
        )
    })?;

    tracing::info!(samples = summary.samples, "fpsplot finished");
    Ok(())
}
