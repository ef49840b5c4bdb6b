pub mod image_io;

pub use image_io::{describe_sources, load_any, load_band_stack, load_raster, save_png};
