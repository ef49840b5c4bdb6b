use ndarray::{Array2, Array3};

use crate::error::{BandviewError, Result};
use crate::raster::Raster;
use crate::selection::BandSelection;

/// Pixel data handed to the display surface.
#[derive(Clone, Debug, PartialEq)]
pub enum Composite {
    /// The only band of a single-band raster, shape `(height, width)`.
    Gray(Array2<f32>),
    /// Selected bands stacked along the last axis, shape
    /// `(height, width, selection.len())`.
    Stacked(Array3<f32>),
}

impl Composite {
    pub fn height(&self) -> usize {
        match self {
            Composite::Gray(data) => data.nrows(),
            Composite::Stacked(data) => data.dim().0,
        }
    }

    pub fn width(&self) -> usize {
        match self {
            Composite::Gray(data) => data.ncols(),
            Composite::Stacked(data) => data.dim().1,
        }
    }

    /// Number of display channels (1 for `Gray`).
    pub fn channels(&self) -> usize {
        match self {
            Composite::Gray(_) => 1,
            Composite::Stacked(data) => data.dim().2,
        }
    }
}

/// Build the band composite for `selection`.
///
/// A single-band raster yields its band unchanged and ignores the selection.
/// Otherwise the selected bands are copied in selection order, repeats
/// included. Indices are re-checked against this raster since a selection may
/// have been validated against a different one.
pub fn compose_bands(raster: &Raster, selection: &BandSelection) -> Result<Composite> {
    let band_count = raster.band_count();
    if band_count == 1 {
        return Ok(Composite::Gray(raster.band(0).to_owned()));
    }

    let bands = selection.bands();
    if let Some(&band) = bands.iter().find(|&&b| b >= band_count) {
        return Err(BandviewError::BandOutOfRange { band, band_count });
    }

    let data = raster.data();
    let stacked = Array3::from_shape_fn(
        (raster.height(), raster.width(), bands.len()),
        |(row, col, channel)| data[[row, col, bands[channel]]],
    );
    tracing::debug!(selection = %selection, "composed {} bands", bands.len());
    Ok(Composite::Stacked(stacked))
}
