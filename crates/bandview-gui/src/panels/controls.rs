use bandview_core::config::DisplayStretch;
use bandview_core::input::ViewerInput;
use bandview_core::surface::{DisplaySurface, DragMode};

use crate::app::BandviewApp;

const RIGHT_PANEL_WIDTH: f32 = 200.0;

pub fn show(ctx: &egui::Context, app: &mut BandviewApp) {
    egui::SidePanel::right("controls")
        .default_width(RIGHT_PANEL_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.set_min_width(RIGHT_PANEL_WIDTH - 20.0);

                zoom_section(ui, app);
                ui.separator();
                band_section(ui, app);
                ui.separator();
                mode_section(ui, app);
                ui.separator();
                stretch_section(ui, app);
            });
        });
}

fn zoom_section(ui: &mut egui::Ui, app: &mut BandviewApp) {
    let control = app.viewer.zoom_control();
    let (min, max) = (control.min(), control.max());
    let mut value = control.value();

    let status = format!("{value:.1}x");
    super::section_header(ui, "Zoom", Some(&status));
    ui.add_space(4.0);

    if ui
        .add(egui::Slider::new(&mut value, min..=max).text("Zoom"))
        .changed()
    {
        app.viewer.on_zoom_changed(value);
    }
}

fn band_section(ui: &mut egui::Ui, app: &mut BandviewApp) {
    let band_count = app.viewer.raster().band_count();
    let status = format!("{band_count} available");
    super::section_header(ui, "Bands", Some(&status));
    ui.add_space(4.0);

    let selector = app.viewer.band_selector();
    let active = selector.active();
    let mut clicked = None;
    for (i, label) in selector.options().iter().enumerate() {
        if ui.radio(active == Some(i), label.as_str()).clicked() {
            clicked = Some(label.clone());
        }
    }
    if let Some(label) = clicked {
        app.select_bands(&label);
    }

    ui.add_space(4.0);
    ui.label("Custom (e.g. 3,2,1):");
    ui.horizontal(|ui| {
        let edit = ui.add(
            egui::TextEdit::singleline(&mut app.ui_state.custom_bands).desired_width(90.0),
        );
        let submitted = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button("Apply").clicked() || submitted {
            let label = app.ui_state.custom_bands.clone();
            app.select_bands(&label);
        }
    });
}

fn mode_section(ui: &mut egui::Ui, app: &mut BandviewApp) {
    let mode = app.viewer.surface().drag_mode();
    let status = mode.map_or_else(|| "none".to_string(), |m| m.to_string());
    super::section_header(ui, "Drag Mode", Some(&status));
    ui.add_space(4.0);

    ui.horizontal(|ui| {
        for candidate in [DragMode::Zoom, DragMode::Pan] {
            if ui
                .selectable_label(mode == Some(candidate), candidate.to_string())
                .clicked()
            {
                app.viewer.surface_mut().toggle_drag_mode(candidate);
            }
        }
    });
    ui.small("Right click: zoom box, middle click: pan");
}

fn stretch_section(ui: &mut egui::Ui, app: &mut BandviewApp) {
    super::section_header(ui, "Display", None);
    ui.add_space(4.0);

    let mut stretch = app.config.stretch;
    egui::ComboBox::from_label("Stretch")
        .selected_text(stretch.to_string())
        .show_ui(ui, |ui| {
            for option in [
                DisplayStretch::Auto,
                DisplayStretch::Clip,
                DisplayStretch::MinMax,
            ] {
                ui.selectable_value(&mut stretch, option, option.to_string());
            }
        });
    if stretch != app.config.stretch {
        app.set_stretch(stretch);
    }
}
