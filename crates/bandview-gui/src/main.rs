mod app;
mod convert;
mod messages;
mod panels;
mod state;
mod surface;

use std::path::PathBuf;

use anyhow::{Context, Result};
use bandview_core::config::{load_config, ViewerConfig};
use bandview_core::consts::SYNTHETIC_SHAPE;
use bandview_core::io::{describe_sources, load_any};
use bandview_core::raster::Raster;
use clap::Parser;

#[derive(Parser)]
#[command(name = "bandview-gui", about = "Interactive multi-band raster viewer")]
#[command(version)]
struct Args {
    /// One multi-channel image, or one grayscale image per band
    files: Vec<PathBuf>,

    /// Viewer config (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Synthetic demo raster as HEIGHTxWIDTHxBANDS (used when no files are given)
    #[arg(long, value_parser = Raster::parse_shape)]
    synthetic: Option<(usize, usize, usize)>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ViewerConfig::default(),
    };

    let (raster, source) = if args.files.is_empty() {
        let (h, w, b) = args.synthetic.unwrap_or(SYNTHETIC_SHAPE);
        (
            Raster::synthetic(h, w, b)?,
            format!("synthetic {h}x{w}x{b}"),
        )
    } else {
        let raster = load_any(&args.files).context("Failed to load raster")?;
        (raster, describe_sources(&args.files))
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([640.0, 480.0])
            .with_title(config.title.clone()),
        ..Default::default()
    };

    eframe::run_native(
        "Bandview",
        options,
        Box::new(move |cc| {
            let app = app::BandviewApp::new(&cc.egui_ctx, raster, source, config)?;
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
