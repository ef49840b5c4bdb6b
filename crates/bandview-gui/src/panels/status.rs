use crate::app::BandviewApp;

pub fn show(ctx: &egui::Context, app: &mut BandviewApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area — fixed height for 4 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                for msg in &app.ui_state.log_messages {
                    ui.label(msg);
                }
            });

        // Status line
        let raster = app.viewer.raster();
        let view = app.viewer.view();
        ui.horizontal(|ui| {
            ui.label(&app.ui_state.source);
            ui.separator();
            ui.label(format!(
                "{}x{}, {} bands",
                raster.width(),
                raster.height(),
                raster.band_count()
            ));
            ui.separator();
            ui.label(format!("Zoom: {:.1}x", view.zoom));
            ui.separator();
            ui.label(format!("Bands: {}", view.selection));
            if app.ui_state.loading {
                ui.separator();
                ui.spinner();
            }
        });

        ui.add_space(2.0);
    });
}
