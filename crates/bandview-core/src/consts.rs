/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Largest number of bands a composite can map onto display channels (R, G, B).
pub const MAX_DISPLAY_CHANNELS: usize = 3;

/// Lower bound of the zoom slider.
pub const DEFAULT_ZOOM_MIN: f64 = 1.0;

/// Upper bound of the zoom slider.
pub const DEFAULT_ZOOM_MAX: f64 = 10.0;

/// Zoom change applied per scroll-wheel tick.
pub const DEFAULT_ZOOM_STEP: f64 = 1.0;

/// Scroll distance in points that counts as one wheel tick, for devices that
/// report smooth (pixel) deltas.
pub const SCROLL_POINTS_PER_TICK: f32 = 40.0;

/// Window title shown on the display surface.
pub const DEFAULT_TITLE: &str = "Raster Viewer";

/// Small epsilon to avoid division by zero when normalizing constant data.
pub const EPSILON: f32 = 1e-10;

/// Dimensions of the demo raster used when no input is given.
pub const SYNTHETIC_SHAPE: (usize, usize, usize) = (100, 100, 3);
