mod app;
mod convert;
mod input;
mod messages;
mod panels;
mod picker;
mod states;
mod viewer;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use twinview_core::config::ViewerConfig;
use twinview_core::error::ViewerError;

#[derive(Parser)]
#[command(name = "twinview-gui", about = "Image viewer with a detached control panel")]
#[command(version)]
struct Cli {
    /// Image to open on startup
    image: Option<PathBuf>,

    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    let config = match cli.config {
        Some(ref path) => ViewerConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ViewerConfig::default(),
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.windows.control_size)
            .with_min_inner_size([240.0, 180.0])
            .with_title("twinview controls"),
        ..Default::default()
    };

    let initial = cli.image;
    eframe::run_native(
        "twinview",
        options,
        Box::new(move |cc| Ok(Box::new(app::TwinviewApp::new(&cc.egui_ctx, config, initial)?))),
    )
    .map_err(|e| ViewerError::SurfaceTerminated(e.to_string()))?;

    tracing::info!("twinview exited");
    Ok(())
}
