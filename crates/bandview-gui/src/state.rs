/// UI-only state that is not part of the viewer's view state.
#[derive(Default)]
pub struct UIState {
    /// Where the current raster came from (file name or "synthetic ...").
    pub source: String,

    /// Text of the custom band-combination field.
    pub custom_bands: String,

    /// Log messages.
    pub log_messages: Vec<String>,

    /// A file dialog or load is running in the background.
    pub loading: bool,

    pub show_about: bool,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}
