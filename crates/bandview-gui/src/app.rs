use std::path::Path;
use std::sync::mpsc;

use bandview_core::config::{DisplayStretch, ViewerConfig};
use bandview_core::display::to_display_image;
use bandview_core::error::Result;
use bandview_core::input::{ScrollAccumulator, ViewerInput};
use bandview_core::io::save_png;
use bandview_core::raster::Raster;
use bandview_core::surface::DisplaySurface;
use bandview_core::viewer::Viewer;

use crate::messages::AppEvent;
use crate::panels;
use crate::state::UIState;
use crate::surface::PlotSurface;

pub struct BandviewApp {
    pub viewer: Viewer<PlotSurface>,
    pub config: ViewerConfig,
    pub ui_state: UIState,
    pub scroll: ScrollAccumulator,
    pub event_tx: mpsc::Sender<AppEvent>,
    pub event_rx: mpsc::Receiver<AppEvent>,
}

impl BandviewApp {
    pub fn new(
        ctx: &egui::Context,
        raster: Raster,
        source: String,
        config: ViewerConfig,
    ) -> Result<Self> {
        let (event_tx, event_rx) = mpsc::channel();
        let viewer = Viewer::new(raster, PlotSurface::new(ctx.clone(), config.stretch), &config)?;

        let mut ui_state = UIState {
            custom_bands: viewer.view().selection.label(),
            ..Default::default()
        };
        ui_state.add_log(format!("Opened: {}", describe_raster(&viewer, &source)));
        ui_state.source = source;

        Ok(Self {
            viewer,
            config,
            ui_state,
            scroll: ScrollAccumulator::default(),
            event_tx,
            event_rx,
        })
    }

    /// Drain all pending events from background threads.
    fn poll_events(&mut self, ctx: &egui::Context) {
        while let Ok(event) = self.event_rx.try_recv() {
            match event {
                AppEvent::RasterLoaded { raster, source } => {
                    self.ui_state.loading = false;
                    self.replace_raster(ctx, raster, source);
                }
                AppEvent::ExportRequested { path } => {
                    self.ui_state.loading = false;
                    self.export_composite(&path);
                }
                AppEvent::Cancelled => {
                    self.ui_state.loading = false;
                }
                AppEvent::Error { message } => {
                    self.ui_state.loading = false;
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
            }
        }
    }

    /// Start a fresh viewer for a newly loaded raster.
    fn replace_raster(&mut self, ctx: &egui::Context, raster: Raster, source: String) {
        let surface = PlotSurface::new(ctx.clone(), self.config.stretch);
        match Viewer::new(raster, surface, &self.config) {
            Ok(viewer) => {
                self.viewer = viewer;
                self.ui_state.custom_bands = self.viewer.view().selection.label();
                self.ui_state
                    .add_log(format!("Opened: {}", describe_raster(&self.viewer, &source)));
                self.ui_state.source = source;
            }
            Err(e) => self.ui_state.add_log(format!("ERROR: {e}")),
        }
    }

    /// Route a band label through the viewer and report the outcome.
    pub fn select_bands(&mut self, label: &str) {
        match self.viewer.on_band_selection_changed(label) {
            Ok(()) => {
                let selection = self.viewer.view().selection.label();
                self.ui_state.add_log(format!("Bands: {selection}"));
                self.ui_state.custom_bands = selection;
            }
            Err(e) => {
                tracing::warn!("band selection {label:?} failed: {e}");
                self.ui_state.add_log(format!("ERROR: {e}"));
            }
        }
    }

    pub fn set_stretch(&mut self, stretch: DisplayStretch) {
        self.config.stretch = stretch;
        match self.viewer.current_composite() {
            Ok(composite) => {
                let surface = self.viewer.surface_mut();
                surface.set_stretch(stretch);
                surface.show_composite(&composite);
                surface.request_redraw();
            }
            Err(e) => self.ui_state.add_log(format!("ERROR: {e}")),
        }
    }

    fn export_composite(&mut self, path: &Path) {
        let stretch = self.config.stretch;
        let result = self
            .viewer
            .current_composite()
            .and_then(|composite| save_png(&to_display_image(&composite, stretch), path));
        match result {
            Ok(()) => self.ui_state.add_log(format!("Saved: {}", path.display())),
            Err(e) => self.ui_state.add_log(format!("ERROR: {e}")),
        }
    }
}

impl eframe::App for BandviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_events(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::controls::show(ctx, self);
        panels::viewport::show(ctx, self);

        if self.ui_state.show_about {
            egui::Window::new("About Bandview")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Bandview");
                        ui.label("Multi-band Raster Viewer");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.ui_state.show_about = false;
                        }
                    });
                });
        }
    }
}

fn describe_raster(viewer: &Viewer<PlotSurface>, source: &str) -> String {
    let raster = viewer.raster();
    format!(
        "{source} ({}x{}, {} bands)",
        raster.width(),
        raster.height(),
        raster.band_count()
    )
}
