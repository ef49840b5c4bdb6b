use bandview_core::composite::Composite;
use bandview_core::config::DisplayStretch;
use bandview_core::display::to_display_image;
use bandview_core::surface::{DisplaySurface, DragMode};
use bandview_core::view::Extent;

use crate::convert::display_to_color_image;

/// egui_plot-backed display surface.
///
/// Composites are uploaded to a texture immediately; axis limits are held
/// until the next paint, where the viewport applies them to the plot.
pub struct PlotSurface {
    ctx: egui::Context,
    stretch: DisplayStretch,
    texture: Option<egui::TextureHandle>,
    /// Displayed image size in pixels (width, height).
    image_size: [usize; 2],
    title: String,
    pending_extent: Option<Extent>,
    drag_mode: Option<DragMode>,
}

impl PlotSurface {
    pub fn new(ctx: egui::Context, stretch: DisplayStretch) -> Self {
        Self {
            ctx,
            stretch,
            texture: None,
            image_size: [0, 0],
            title: String::new(),
            pending_extent: None,
            drag_mode: None,
        }
    }

    pub fn texture(&self) -> Option<&egui::TextureHandle> {
        self.texture.as_ref()
    }

    pub fn image_size(&self) -> [usize; 2] {
        self.image_size
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn drag_mode(&self) -> Option<DragMode> {
        self.drag_mode
    }

    pub fn stretch(&self) -> DisplayStretch {
        self.stretch
    }

    /// Takes effect with the next `show_composite`.
    pub fn set_stretch(&mut self, stretch: DisplayStretch) {
        self.stretch = stretch;
    }

    /// Axis limits set since the last paint, if any.
    pub fn take_pending_extent(&mut self) -> Option<Extent> {
        self.pending_extent.take()
    }
}

impl DisplaySurface for PlotSurface {
    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
        self.ctx
            .send_viewport_cmd(egui::ViewportCommand::Title(title.to_string()));
    }

    fn show_composite(&mut self, composite: &Composite) {
        let image = display_to_color_image(&to_display_image(composite, self.stretch));
        self.image_size = image.size;
        match self.texture.as_mut() {
            Some(texture) => texture.set(image, egui::TextureOptions::NEAREST),
            None => {
                let texture = self
                    .ctx
                    .load_texture("raster", image, egui::TextureOptions::NEAREST);
                self.texture = Some(texture);
            }
        }
    }

    fn set_extent(&mut self, extent: Extent) {
        self.pending_extent = Some(extent);
    }

    fn toggle_drag_mode(&mut self, mode: DragMode) {
        self.drag_mode = if self.drag_mode == Some(mode) {
            None
        } else {
            Some(mode)
        };
    }

    fn request_redraw(&mut self) {
        self.ctx.request_repaint();
    }
}
