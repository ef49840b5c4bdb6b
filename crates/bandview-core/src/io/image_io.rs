use std::path::Path;

use image::{DynamicImage, ImageFormat, RgbaImage};
use ndarray::{Array2, Array3, Axis};
use tracing::info;

use crate::display::DisplayImage;
use crate::error::{BandviewError, Result};
use crate::raster::Raster;

/// Load an image file as a raster, one band per stored channel.
///
/// Gray images give 1 band, gray+alpha 2, RGB 3 and RGBA 4 (a four-band
/// product such as RGB+NIR is commonly stored with NIR in the alpha slot).
/// Integer samples are scaled to [0.0, 1.0].
pub fn load_raster(path: &Path) -> Result<Raster> {
    let img = image::open(path)?;
    let raster = dynamic_to_raster(&img)?;
    info!(
        path = %path.display(),
        height = raster.height(),
        width = raster.width(),
        bands = raster.band_count(),
        "loaded raster"
    );
    Ok(raster)
}

fn dynamic_to_raster(img: &DynamicImage) -> Result<Raster> {
    let (w, h) = (img.width() as usize, img.height() as usize);
    let channels = img.color().channel_count() as usize;
    let samples = match channels {
        1 => img.to_luma32f().into_raw(),
        2 => img.to_luma_alpha32f().into_raw(),
        3 => img.to_rgb32f().into_raw(),
        _ => img.to_rgba32f().into_raw(),
    };
    let bands = channels.min(4);
    let data = Array3::from_shape_vec((h, w, bands), samples).map_err(|_| {
        BandviewError::InvalidDimensions {
            height: h,
            width: w,
            bands,
        }
    })?;
    Raster::new(data)
}

/// Load one grayscale file per band and stack them in the given order.
///
/// All files must share the dimensions of the first one.
pub fn load_band_stack<P: AsRef<Path>>(paths: &[P]) -> Result<Raster> {
    let mut bands: Vec<Array2<f32>> = Vec::with_capacity(paths.len());
    for (index, path) in paths.iter().enumerate() {
        let gray = image::open(path.as_ref())?.to_luma32f();
        let (w, h) = (gray.width() as usize, gray.height() as usize);
        if let Some(first) = bands.first() {
            let (height, width) = first.dim();
            if (h, w) != (height, width) {
                return Err(BandviewError::DimensionMismatch {
                    index,
                    width,
                    height,
                    actual_width: w,
                    actual_height: h,
                });
            }
        }
        let band = Array2::from_shape_vec((h, w), gray.into_raw()).map_err(|_| {
            BandviewError::InvalidDimensions {
                height: h,
                width: w,
                bands: 1,
            }
        })?;
        bands.push(band);
    }

    let Some(first) = bands.first() else {
        return Err(BandviewError::InvalidDimensions {
            height: 0,
            width: 0,
            bands: 0,
        });
    };
    let (h, w) = first.dim();
    let mut data = Array3::<f32>::zeros((h, w, bands.len()));
    for (i, band) in bands.iter().enumerate() {
        data.index_axis_mut(Axis(2), i).assign(band);
    }

    let raster = Raster::new(data)?;
    info!(
        files = paths.len(),
        height = raster.height(),
        width = raster.width(),
        "loaded band stack"
    );
    Ok(raster)
}

/// Load a raster from one multi-channel file or from one file per band.
pub fn load_any<P: AsRef<Path>>(paths: &[P]) -> Result<Raster> {
    match paths {
        [single] => load_raster(single.as_ref()),
        _ => load_band_stack(paths),
    }
}

/// Short human-readable name for the files passed to [`load_any`].
pub fn describe_sources<P: AsRef<Path>>(paths: &[P]) -> String {
    match paths {
        [single] => single.as_ref().display().to_string(),
        _ => format!("{} band files", paths.len()),
    }
}

/// Save display pixels as an 8-bit RGBA PNG.
pub fn save_png(image: &DisplayImage, path: &Path) -> Result<()> {
    let buffer = RgbaImage::from_raw(
        image.width as u32,
        image.height as u32,
        image.rgba.clone(),
    )
    .ok_or(BandviewError::InvalidDimensions {
        height: image.height,
        width: image.width,
        bands: 4,
    })?;
    buffer.save_with_format(path, ImageFormat::Png)?;
    info!(path = %path.display(), "saved composite");
    Ok(())
}
