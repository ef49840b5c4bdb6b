use ndarray::{Array2, Array3, ArrayView2, Axis};

use crate::error::{BandviewError, Result};

/// A multi-band raster image, immutable once constructed.
///
/// Pixel data is stored as `(height, width, bands)`, so a single band is a
/// lane along the last axis.
#[derive(Clone, Debug)]
pub struct Raster {
    data: Array3<f32>,
}

impl Raster {
    /// Wrap a `(height, width, bands)` array. Every axis must be non-empty.
    pub fn new(data: Array3<f32>) -> Result<Self> {
        let (height, width, bands) = data.dim();
        if height == 0 || width == 0 || bands == 0 {
            return Err(BandviewError::InvalidDimensions {
                height,
                width,
                bands,
            });
        }
        Ok(Self { data })
    }

    /// Single-band raster from a 2-D grid.
    pub fn from_band(band: Array2<f32>) -> Result<Self> {
        Self::new(band.insert_axis(Axis(2)))
    }

    /// Deterministic demo raster with a distinct smooth pattern per band.
    /// Values lie in [0.0, 1.0].
    pub fn synthetic(height: usize, width: usize, bands: usize) -> Result<Self> {
        let data = Array3::from_shape_fn((height, width, bands), |(row, col, band)| {
            let y = row as f32 / height.max(1) as f32;
            let x = col as f32 / width.max(1) as f32;
            let phase = band as f32 * std::f32::consts::FRAC_PI_3;
            let freq = 2.0 + band as f32;
            0.5 + 0.25 * (freq * std::f32::consts::TAU * x + phase).sin()
                + 0.25 * (freq * std::f32::consts::TAU * y - phase).cos()
        });
        Self::new(data)
    }

    /// Parse a `HEIGHTxWIDTHxBANDS` shape such as `"100x100x3"`.
    pub fn parse_shape(s: &str) -> Result<(usize, usize, usize)> {
        let parts = s
            .split('x')
            .map(|p| p.trim().parse::<usize>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|_| BandviewError::InvalidShape(s.to_string()))?;
        match parts.as_slice() {
            [h, w, b] => Ok((*h, *w, *b)),
            _ => Err(BandviewError::InvalidShape(s.to_string())),
        }
    }

    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    pub fn band_count(&self) -> usize {
        self.data.dim().2
    }

    /// View of one band. Panics if `index >= band_count()`.
    pub fn band(&self, index: usize) -> ArrayView2<'_, f32> {
        self.data.index_axis(Axis(2), index)
    }

    pub fn data(&self) -> &Array3<f32> {
        &self.data
    }
}
