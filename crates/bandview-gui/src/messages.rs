use std::path::PathBuf;

use bandview_core::raster::Raster;

/// Results sent from background dialog/load threads back to the UI thread.
pub enum AppEvent {
    RasterLoaded { raster: Raster, source: String },
    ExportRequested { path: PathBuf },
    Cancelled,
    Error { message: String },
}
