use ndarray::{Array2, ArrayView2};
use tracing::{debug, info, warn};

use crate::composite::{compose_bands, Composite};
use crate::config::ViewerConfig;
use crate::controls::{BandSelector, ZoomControl};
use crate::error::{BandviewError, Result};
use crate::input::{MouseButton, ScrollDirection, ViewerInput};
use crate::raster::Raster;
use crate::selection::BandSelection;
use crate::surface::{DisplaySurface, DragMode};
use crate::view::{Extent, ViewState};

/// Binds a raster to a display surface and reacts to user input.
///
/// The viewer owns the raster, the view state, the widget models and the
/// surface. Every input callback mutates the view state, pushes the result
/// to the surface, and requests a deferred redraw.
pub struct Viewer<S: DisplaySurface> {
    raster: Raster,
    view: ViewState,
    zoom: ZoomControl,
    zoom_step: f64,
    selector: BandSelector,
    surface: S,
}

impl<S: DisplaySurface> Viewer<S> {
    pub fn new(raster: Raster, mut surface: S, config: &ViewerConfig) -> Result<Self> {
        config.validate()?;

        let band_count = raster.band_count();
        let selection = BandSelection::initial(band_count);
        let zoom = ZoomControl::new(config.zoom.min, config.zoom.max, config.zoom.min);
        let selector = BandSelector::for_band_count(band_count, &selection);
        let view = ViewState::new(zoom.value(), selection);

        let composite = compose_bands(&raster, &view.selection)?;
        surface.set_title(&config.title);
        surface.show_composite(&composite);
        surface.set_extent(view.visible_extent(raster.width(), raster.height()));
        surface.request_redraw();

        info!(
            height = raster.height(),
            width = raster.width(),
            bands = band_count,
            selection = %view.selection,
            "viewer initialized"
        );

        Ok(Self {
            raster,
            view,
            zoom,
            zoom_step: config.zoom.step,
            selector,
            surface,
        })
    }

    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn zoom_control(&self) -> &ZoomControl {
        &self.zoom
    }

    pub fn band_selector(&self) -> &BandSelector {
        &self.selector
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Composite for the active selection.
    pub fn current_composite(&self) -> Result<Composite> {
        compose_bands(&self.raster, &self.view.selection)
    }

    pub fn visible_extent(&self) -> Extent {
        self.view
            .visible_extent(self.raster.width(), self.raster.height())
    }

    /// Apply a per-pixel math operation to the raster.
    ///
    /// Not defined yet: which bands it touches and whether it works in place
    /// are open. Always fails with `Unsupported`.
    pub fn apply_math_operation<F>(&mut self, _operation: F) -> Result<()>
    where
        F: Fn(f32) -> f32,
    {
        Err(BandviewError::Unsupported {
            operation: "apply_math_operation",
        })
    }

    /// Apply a 2-D filter to the raster bands. Always fails with `Unsupported`.
    pub fn apply_filter<F>(&mut self, _filter: F) -> Result<()>
    where
        F: Fn(ArrayView2<'_, f32>) -> Array2<f32>,
    {
        Err(BandviewError::Unsupported {
            operation: "apply_filter",
        })
    }

    /// Always fails with `Unsupported`.
    pub fn calculate_statistics(&self) -> Result<()> {
        Err(BandviewError::Unsupported {
            operation: "calculate_statistics",
        })
    }
}

impl<S: DisplaySurface> ViewerInput for Viewer<S> {
    fn on_zoom_changed(&mut self, value: f64) {
        if !value.is_finite() {
            warn!(value, "ignored non-finite zoom");
            return;
        }
        self.zoom.set_value(value);
        self.view.zoom = self.zoom.value();

        let extent = self.visible_extent();
        debug!(zoom = self.view.zoom, ?extent, "zoom changed");
        self.surface.set_extent(extent);
        self.surface.request_redraw();
    }

    fn on_band_selection_changed(&mut self, label: &str) -> Result<()> {
        let selection = match BandSelection::parse(label, self.raster.band_count()) {
            Ok(selection) => selection,
            Err(e) => {
                warn!(label, "rejected band selection: {e}");
                return Err(e);
            }
        };
        let composite = compose_bands(&self.raster, &selection)?;

        debug!(selection = %selection, "band selection changed");
        self.selector.activate(&selection.label());
        self.view.selection = selection;
        self.surface.show_composite(&composite);
        self.surface.request_redraw();
        Ok(())
    }

    fn on_scroll(&mut self, direction: ScrollDirection) {
        let delta = match direction {
            ScrollDirection::Up => self.zoom_step,
            ScrollDirection::Down => -self.zoom_step,
        };
        if self.zoom.set_value(self.zoom.value() + delta) {
            self.on_zoom_changed(self.zoom.value());
        }
    }

    fn on_click(&mut self, button: MouseButton) {
        let mode = match button {
            MouseButton::Secondary => DragMode::Zoom,
            MouseButton::Tertiary => DragMode::Pan,
            MouseButton::Primary | MouseButton::Other => return,
        };
        debug!(%mode, "toggling drag mode");
        self.surface.toggle_drag_mode(mode);
    }
}
