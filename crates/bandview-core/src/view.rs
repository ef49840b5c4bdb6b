use crate::selection::BandSelection;

/// Visible window in plot coordinates.
///
/// The raster occupies `[0, width] x [0, height]`; `y` grows upward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
}

impl Extent {
    /// Window of `width` x `height` anchored at the origin.
    pub fn from_origin(width: f64, height: f64) -> Self {
        Self {
            x0: 0.0,
            x1: width,
            y0: 0.0,
            y1: height,
        }
    }

    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }
}

/// Mutable session state: zoom factor and active band selection.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    pub zoom: f64,
    pub selection: BandSelection,
}

impl ViewState {
    pub fn new(zoom: f64, selection: BandSelection) -> Self {
        Self { zoom, selection }
    }

    /// Visible extent for a raster of the given size at the current zoom.
    /// Always starts at (0, 0); zooming never re-centres the view.
    pub fn visible_extent(&self, raster_width: usize, raster_height: usize) -> Extent {
        Extent::from_origin(
            raster_width as f64 / self.zoom,
            raster_height as f64 / self.zoom,
        )
    }
}
