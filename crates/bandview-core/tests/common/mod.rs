#![allow(dead_code)]

use ndarray::Array3;

use bandview_core::composite::Composite;
use bandview_core::config::ViewerConfig;
use bandview_core::raster::Raster;
use bandview_core::surface::{DisplaySurface, DragMode};
use bandview_core::view::Extent;
use bandview_core::viewer::Viewer;

/// Build a raster whose pixel value encodes its position:
/// `band * 1000 + row * width + col`.
pub fn make_raster(height: usize, width: usize, bands: usize) -> Raster {
    let data = Array3::from_shape_fn((height, width, bands), |(row, col, band)| {
        (band * 1000 + row * width + col) as f32
    });
    Raster::new(data).expect("non-empty raster")
}

/// Viewer over `make_raster` with the default config.
pub fn make_viewer(height: usize, width: usize, bands: usize) -> Viewer<RecordingSurface> {
    Viewer::new(
        make_raster(height, width, bands),
        RecordingSurface::default(),
        &ViewerConfig::default(),
    )
    .expect("default config is valid")
}

/// One call made against a `RecordingSurface`.
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceCall {
    Title(String),
    Composite { channels: usize },
    Extent(Extent),
    ToggleDragMode(DragMode),
    Redraw,
}

/// Display surface double that records every call and mimics a toolkit's
/// drag-mode toggle.
#[derive(Default)]
pub struct RecordingSurface {
    pub calls: Vec<SurfaceCall>,
    pub title: Option<String>,
    pub composite: Option<Composite>,
    pub extent: Option<Extent>,
    pub drag_mode: Option<DragMode>,
    pub pending_redraw: bool,
}

impl RecordingSurface {
    pub fn clear(&mut self) {
        self.calls.clear();
        self.pending_redraw = false;
    }

    pub fn count(&self, pred: impl Fn(&SurfaceCall) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }
}

impl DisplaySurface for RecordingSurface {
    fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
        self.calls.push(SurfaceCall::Title(title.to_string()));
    }

    fn show_composite(&mut self, composite: &Composite) {
        self.calls.push(SurfaceCall::Composite {
            channels: composite.channels(),
        });
        self.composite = Some(composite.clone());
    }

    fn set_extent(&mut self, extent: Extent) {
        self.extent = Some(extent);
        self.calls.push(SurfaceCall::Extent(extent));
    }

    fn toggle_drag_mode(&mut self, mode: DragMode) {
        self.drag_mode = if self.drag_mode == Some(mode) {
            None
        } else {
            Some(mode)
        };
        self.calls.push(SurfaceCall::ToggleDragMode(mode));
    }

    fn request_redraw(&mut self) {
        self.pending_redraw = true;
        self.calls.push(SurfaceCall::Redraw);
    }
}
