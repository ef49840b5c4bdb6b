use std::path::PathBuf;

use anyhow::Result;
use bandview_core::raster::Raster;
use clap::Args;

use crate::summary::print_raster_summary;

#[derive(Args)]
pub struct InfoArgs {
    /// One multi-channel image, or one grayscale image per band
    pub files: Vec<PathBuf>,

    /// Describe a synthetic HEIGHTxWIDTHxBANDS raster instead
    #[arg(long, value_parser = Raster::parse_shape)]
    pub synthetic: Option<(usize, usize, usize)>,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let (raster, source) = super::load_input(&args.files, args.synthetic)?;
    print_raster_summary(&raster, &source);
    Ok(())
}
