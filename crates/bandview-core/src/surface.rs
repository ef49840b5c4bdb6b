use std::fmt;

use crate::composite::Composite;
use crate::view::Extent;

/// Interactive drag modes provided by the plotting toolkit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragMode {
    /// Drag a rectangle to zoom into it.
    Zoom,
    /// Drag to move the visible window.
    Pan,
}

impl fmt::Display for DragMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DragMode::Zoom => write!(f, "Zoom"),
            DragMode::Pan => write!(f, "Pan"),
        }
    }
}

/// Rendering target the viewer drives.
///
/// Implementations own all toolkit state (textures, axis limits, drag mode).
/// Changes become visible at the next paint, which `request_redraw`
/// schedules; several requests before that paint coalesce into one.
pub trait DisplaySurface {
    fn set_title(&mut self, title: &str);

    /// Replace the displayed pixel data.
    fn show_composite(&mut self, composite: &Composite);

    /// Set the visible window in plot coordinates.
    fn set_extent(&mut self, extent: Extent);

    /// Switch the toolkit into `mode`, or back to no mode if `mode` is
    /// already active.
    fn toggle_drag_mode(&mut self, mode: DragMode);

    /// Schedule a deferred repaint.
    fn request_redraw(&mut self);
}
