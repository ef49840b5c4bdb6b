use thiserror::Error;

#[derive(Error, Debug)]
pub enum BandviewError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid raster dimensions: {height}x{width}x{bands}")]
    InvalidDimensions {
        height: usize,
        width: usize,
        bands: usize,
    },

    #[error("Band file {index} is {actual_width}x{actual_height}, expected {width}x{height}")]
    DimensionMismatch {
        index: usize,
        width: usize,
        height: usize,
        actual_width: usize,
        actual_height: usize,
    },

    #[error("Band selection is empty")]
    EmptySelection,

    #[error("Band selection has {count} bands (at most {max} can be displayed)")]
    TooManyBands { count: usize, max: usize },

    #[error("Band {band} out of range (raster has {band_count} bands)")]
    BandOutOfRange { band: usize, band_count: usize },

    #[error("Invalid shape {0:?} (expected HEIGHTxWIDTHxBANDS)")]
    InvalidShape(String),

    #[error("Invalid band label: {0:?}")]
    InvalidBandLabel(String),

    #[error("Operation not supported: {operation}")]
    Unsupported { operation: &'static str },

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, BandviewError>;
