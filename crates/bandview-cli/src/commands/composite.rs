use std::path::PathBuf;

use anyhow::{Context, Result};
use bandview_core::composite::compose_bands;
use bandview_core::config::DisplayStretch;
use bandview_core::display::to_display_image;
use bandview_core::io::save_png;
use bandview_core::raster::Raster;
use bandview_core::selection::BandSelection;
use clap::{Args, ValueEnum};

#[derive(Clone, Copy, ValueEnum)]
pub enum StretchArg {
    Auto,
    Clip,
    MinMax,
}

impl From<StretchArg> for DisplayStretch {
    fn from(arg: StretchArg) -> Self {
        match arg {
            StretchArg::Auto => DisplayStretch::Auto,
            StretchArg::Clip => DisplayStretch::Clip,
            StretchArg::MinMax => DisplayStretch::MinMax,
        }
    }
}

#[derive(Args)]
pub struct CompositeArgs {
    /// One multi-channel image, or one grayscale image per band
    pub files: Vec<PathBuf>,

    /// Use a synthetic HEIGHTxWIDTHxBANDS raster instead of files
    #[arg(long, value_parser = Raster::parse_shape)]
    pub synthetic: Option<(usize, usize, usize)>,

    /// Band combination, e.g. "3,2,1" (default: first three bands)
    #[arg(short, long)]
    pub bands: Option<String>,

    /// How values map to display intensities
    #[arg(long, value_enum, default_value = "auto")]
    pub stretch: StretchArg,

    /// Output PNG path
    #[arg(short, long, default_value = "composite.png")]
    pub output: PathBuf,
}

pub fn run(args: &CompositeArgs) -> Result<()> {
    let (raster, source) = super::load_input(&args.files, args.synthetic)?;

    let selection = match &args.bands {
        Some(label) => BandSelection::parse(label, raster.band_count())
            .with_context(|| format!("Invalid band combination {label:?}"))?,
        None => BandSelection::initial(raster.band_count()),
    };

    println!(
        "Composing bands [{}] of {} ({}x{})",
        selection,
        source,
        raster.width(),
        raster.height()
    );
    let composite = compose_bands(&raster, &selection)?;
    let image = to_display_image(&composite, args.stretch.into());

    save_png(&image, &args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    println!("Saved to {}", args.output.display());

    Ok(())
}
