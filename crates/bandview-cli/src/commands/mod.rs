pub mod composite;
pub mod config;
pub mod info;

use std::path::PathBuf;

use anyhow::{Context, Result};
use bandview_core::io::{describe_sources, load_any};
use bandview_core::raster::Raster;

/// Load the raster named on the command line, or a synthetic one.
pub(crate) fn load_input(
    files: &[PathBuf],
    synthetic: Option<(usize, usize, usize)>,
) -> Result<(Raster, String)> {
    if files.is_empty() {
        let (h, w, b) =
            synthetic.context("No input files given (use --synthetic for a demo raster)")?;
        return Ok((Raster::synthetic(h, w, b)?, format!("synthetic {h}x{w}x{b}")));
    }
    let source = describe_sources(files);
    let raster = load_any(files).with_context(|| format!("Failed to load {source}"))?;
    Ok((raster, source))
}
