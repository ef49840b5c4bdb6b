use crate::consts::SCROLL_POINTS_PER_TICK;
use crate::error::Result;

/// One scroll-wheel tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

/// How a wheel delta is measured by the windowing backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollUnit {
    /// Notched wheel: one unit per notch.
    Line,
    /// Smooth scrolling (trackpads, high-resolution wheels), in points.
    Point,
    /// One unit per page.
    Page,
}

/// Turns raw wheel deltas into discrete ticks.
///
/// Each line or page counts as one tick. Point deltas build up until they
/// cover `points_per_tick`, so a stream of small trackpad deltas fires one
/// tick per tick-sized distance rather than one per frame. Positive deltas
/// scroll up.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollAccumulator {
    points_per_tick: f32,
    pending: f32,
}

impl Default for ScrollAccumulator {
    fn default() -> Self {
        Self::new(SCROLL_POINTS_PER_TICK)
    }
}

impl ScrollAccumulator {
    pub fn new(points_per_tick: f32) -> Self {
        Self {
            points_per_tick,
            pending: 0.0,
        }
    }

    /// Feed one wheel event and return the ticks it completes, in order.
    pub fn push(&mut self, unit: ScrollUnit, delta: f32) -> Vec<ScrollDirection> {
        if !delta.is_finite() {
            return Vec::new();
        }
        let ticks = match unit {
            ScrollUnit::Line | ScrollUnit::Page => delta,
            ScrollUnit::Point => delta / self.points_per_tick,
        };
        // Reversing direction drops the partial tick built up the other way.
        if self.pending * ticks < 0.0 {
            self.pending = 0.0;
        }
        self.pending += ticks;

        // Tolerance keeps e.g. ten deltas of 0.1 from stopping just short.
        let whole = (self.pending.abs() + 1e-4).floor();
        if whole < 1.0 {
            return Vec::new();
        }
        let direction = if self.pending > 0.0 {
            ScrollDirection::Up
        } else {
            ScrollDirection::Down
        };
        self.pending -= whole.copysign(self.pending);
        vec![direction; whole as usize]
    }

    /// Forget any partial tick.
    pub fn reset(&mut self) {
        self.pending = 0.0;
    }
}

/// Pointer buttons as reported by the windowing backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseButton {
    Primary,
    /// Usually the right button.
    Secondary,
    /// Usually the middle button or wheel press.
    Tertiary,
    Other,
}

/// Input callbacks a viewer reacts to. The toolkit's event loop calls these
/// serially, one event at a time.
pub trait ViewerInput {
    /// Zoom slider moved to `value`.
    fn on_zoom_changed(&mut self, value: f64);

    /// Band radio selector switched to `label`.
    fn on_band_selection_changed(&mut self, label: &str) -> Result<()>;

    fn on_scroll(&mut self, direction: ScrollDirection);

    fn on_click(&mut self, button: MouseButton);
}
