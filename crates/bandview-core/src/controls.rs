//! Widget models for the zoom slider and the band radio selector.
//!
//! These hold the value a toolkit widget displays. The GUI binds its widgets
//! to them; tests drive them directly.

use crate::selection::BandSelection;

/// Slider model: a value clamped to `[min, max]`.
#[derive(Clone, Debug, PartialEq)]
pub struct ZoomControl {
    min: f64,
    max: f64,
    value: f64,
}

impl ZoomControl {
    pub fn new(min: f64, max: f64, initial: f64) -> Self {
        Self {
            min,
            max,
            value: initial.clamp(min, max),
        }
    }

    /// Clamp `value` into range and store it. Returns `true` when the stored
    /// value changed, i.e. when a change notification should fire.
    /// Non-finite values are ignored.
    pub fn set_value(&mut self, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }
        let clamped = value.clamp(self.min, self.max);
        let changed = clamped != self.value;
        self.value = clamped;
        changed
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }
}

/// Radio selector model: a list of band labels and the active one.
#[derive(Clone, Debug, PartialEq)]
pub struct BandSelector {
    options: Vec<String>,
    active: Option<usize>,
}

impl BandSelector {
    /// Options are the initial composite (for multi-band rasters) followed by
    /// every single band.
    pub fn for_band_count(band_count: usize, initial: &BandSelection) -> Self {
        let mut options = Vec::with_capacity(band_count + 1);
        if band_count > 1 {
            options.push(initial.label());
        }
        options.extend((0..band_count).map(|band| band.to_string()));

        let mut selector = Self {
            options,
            active: None,
        };
        selector.activate(&initial.label());
        selector
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn active_label(&self) -> Option<&str> {
        self.active.map(|i| self.options[i].as_str())
    }

    /// Mark the option matching `label` as active; labels not in the list
    /// leave no option active.
    pub fn activate(&mut self, label: &str) {
        self.active = self.options.iter().position(|option| option == label);
    }
}
