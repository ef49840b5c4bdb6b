use bandview_core::io::{describe_sources, load_any};

use crate::app::BandviewApp;
use crate::messages::AppEvent;

const IMAGE_EXTENSIONS: &[&str] = &["png", "tif", "tiff", "jpg", "jpeg", "bmp"];

pub fn show(ctx: &egui::Context, app: &mut BandviewApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let open_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
                if ui.add_enabled(!app.ui_state.loading, egui::Button::new("Open Image...").shortcut_text(ctx.format_shortcut(&open_shortcut))).clicked() {
                    ui.close();
                    open_files(ctx, app, false);
                }

                if ui.add_enabled(!app.ui_state.loading, egui::Button::new("Open Band Stack...")).clicked() {
                    ui.close();
                    open_files(ctx, app, true);
                }

                ui.separator();

                let save_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::S);
                if ui.add(egui::Button::new("Export Composite...").shortcut_text(ctx.format_shortcut(&save_shortcut))).clicked() {
                    ui.close();
                    export_composite(ctx, app);
                }

                ui.separator();

                let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.ui_state.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O))) && !app.ui_state.loading {
            open_files(ctx, app, false);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::S))) {
            export_composite(ctx, app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q))) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

/// Pick one image (or several band files) and load it off the UI thread.
fn open_files(ctx: &egui::Context, app: &mut BandviewApp, band_stack: bool) {
    app.ui_state.loading = true;
    let event_tx = app.event_tx.clone();
    let ctx = ctx.clone();
    std::thread::spawn(move || {
        let dialog = rfd::FileDialog::new()
            .add_filter("Images", IMAGE_EXTENSIONS)
            .add_filter("All files", &["*"]);
        let paths = if band_stack {
            dialog.pick_files()
        } else {
            dialog.pick_file().map(|path| vec![path])
        };

        let event = match paths {
            Some(paths) if !paths.is_empty() => match load_any(&paths) {
                Ok(raster) => AppEvent::RasterLoaded {
                    raster,
                    source: describe_sources(&paths),
                },
                Err(e) => AppEvent::Error {
                    message: e.to_string(),
                },
            },
            _ => AppEvent::Cancelled,
        };
        let _ = event_tx.send(event);
        ctx.request_repaint();
    });
}

fn export_composite(ctx: &egui::Context, app: &mut BandviewApp) {
    app.ui_state.loading = true;
    let event_tx = app.event_tx.clone();
    let ctx = ctx.clone();
    std::thread::spawn(move || {
        let event = match rfd::FileDialog::new()
            .add_filter("PNG", &["png"])
            .set_file_name("composite.png")
            .save_file()
        {
            Some(path) => AppEvent::ExportRequested { path },
            None => AppEvent::Cancelled,
        };
        let _ = event_tx.send(event);
        ctx.request_repaint();
    });
}
