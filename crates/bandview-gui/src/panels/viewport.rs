use bandview_core::input::{MouseButton, ScrollUnit, ViewerInput};
use bandview_core::surface::DragMode;
use egui_plot::{Plot, PlotBounds, PlotImage, PlotPoint};

use crate::app::BandviewApp;

pub fn show(ctx: &egui::Context, app: &mut BandviewApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let surface = app.viewer.surface_mut();
        let Some(texture_id) = surface.texture().map(|t| t.id()) else {
            show_placeholder(ui);
            return;
        };
        let [w, h] = surface.image_size();
        let (w, h) = (w as f64, h as f64);
        let drag_mode = surface.drag_mode();
        let pending_extent = surface.take_pending_extent();
        let title = surface.title().to_string();

        ui.vertical_centered(|ui| {
            ui.heading(title);
        });

        // Scroll and plain drags belong to the viewer; the plot only zooms
        // or pans in the matching drag mode.
        let plot = Plot::new("raster_plot")
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_double_click_reset(false)
            .allow_drag(drag_mode == Some(DragMode::Pan))
            .allow_boxed_zoom(drag_mode == Some(DragMode::Zoom))
            .boxed_zoom_pointer_button(egui::PointerButton::Primary)
            .show_grid(false)
            .x_axis_label("x (px)")
            .y_axis_label("y (px)");

        let response = plot
            .show(ui, |plot_ui| {
                if let Some(extent) = pending_extent {
                    plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                        [extent.x0, extent.y0],
                        [extent.x1, extent.y1],
                    ));
                }
                plot_ui.image(PlotImage::new(
                    "raster",
                    texture_id,
                    PlotPoint::new(w / 2.0, h / 2.0),
                    egui::vec2(w as f32, h as f32),
                ));
            })
            .response;

        dispatch_input(ui, &response, app);
    });
}

fn dispatch_input(ui: &egui::Ui, response: &egui::Response, app: &mut BandviewApp) {
    if response.hovered() {
        let events = ui.input(|i| i.events.clone());
        for event in events {
            let egui::Event::MouseWheel { unit, delta, .. } = event else {
                continue;
            };
            let unit = match unit {
                egui::MouseWheelUnit::Line => ScrollUnit::Line,
                egui::MouseWheelUnit::Point => ScrollUnit::Point,
                egui::MouseWheelUnit::Page => ScrollUnit::Page,
            };
            for direction in app.scroll.push(unit, delta.y) {
                app.viewer.on_scroll(direction);
            }
        }
    } else {
        app.scroll.reset();
    }

    if response.clicked_by(egui::PointerButton::Secondary) {
        app.viewer.on_click(MouseButton::Secondary);
    }
    if response.clicked_by(egui::PointerButton::Middle) {
        app.viewer.on_click(MouseButton::Tertiary);
    }
}

fn show_placeholder(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new("Open an image or band stack to begin")
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}
