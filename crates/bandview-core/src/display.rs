use ndarray::{ArrayView2, Axis};
use rayon::prelude::*;

use crate::composite::Composite;
use crate::config::DisplayStretch;
use crate::consts::{EPSILON, PARALLEL_PIXEL_THRESHOLD};

/// 8-bit RGBA pixels, row-major, ready for a texture or a PNG.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayImage {
    pub width: usize,
    pub height: usize,
    pub rgba: Vec<u8>,
}

/// A channel view plus the linear map `(v - low) * scale` onto [0, 1].
struct ChannelMap<'a> {
    data: ArrayView2<'a, f32>,
    low: f32,
    scale: f32,
}

impl<'a> ChannelMap<'a> {
    fn new(data: ArrayView2<'a, f32>, min_max: bool) -> Self {
        if !min_max {
            return Self {
                data,
                low: 0.0,
                scale: 1.0,
            };
        }
        let low = data.iter().copied().fold(f32::INFINITY, f32::min);
        let high = data.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        let range = high - low;
        let scale = if range.is_finite() && range > EPSILON {
            1.0 / range
        } else {
            0.0
        };
        Self {
            data,
            low: if low.is_finite() { low } else { 0.0 },
            scale,
        }
    }

    fn byte(&self, row: usize, col: usize) -> u8 {
        let v = ((self.data[[row, col]] - self.low) * self.scale).clamp(0.0, 1.0);
        (v * 255.0).round() as u8
    }
}

/// Convert a composite to display pixels.
///
/// One channel renders as gray, two as red/green with blue off, three as
/// RGB. With `DisplayStretch::Auto`, single-channel data is min-max
/// normalized and colour data is clipped to [0, 1].
pub fn to_display_image(composite: &Composite, stretch: DisplayStretch) -> DisplayImage {
    let views: Vec<ArrayView2<'_, f32>> = match composite {
        Composite::Gray(data) => vec![data.view()],
        Composite::Stacked(data) => data.axis_iter(Axis(2)).collect(),
    };
    let min_max = match stretch {
        DisplayStretch::Auto => views.len() == 1,
        DisplayStretch::Clip => false,
        DisplayStretch::MinMax => true,
    };
    let channels: Vec<ChannelMap<'_>> = views
        .into_iter()
        .map(|view| ChannelMap::new(view, min_max))
        .collect();

    let (h, w) = (composite.height(), composite.width());
    let mut rgba = vec![0u8; h * w * 4];
    if w == 0 {
        return DisplayImage {
            width: w,
            height: h,
            rgba,
        };
    }
    if h * w >= PARALLEL_PIXEL_THRESHOLD {
        rgba.par_chunks_mut(w * 4)
            .enumerate()
            .for_each(|(row, out)| fill_row(&channels, row, out));
    } else {
        for (row, out) in rgba.chunks_mut(w * 4).enumerate() {
            fill_row(&channels, row, out);
        }
    }

    DisplayImage {
        width: w,
        height: h,
        rgba,
    }
}

fn fill_row(channels: &[ChannelMap<'_>], row: usize, out: &mut [u8]) {
    for (col, pixel) in out.chunks_exact_mut(4).enumerate() {
        let [r, g, b] = match channels {
            [gray] => {
                let v = gray.byte(row, col);
                [v, v, v]
            }
            [red, green] => [red.byte(row, col), green.byte(row, col), 0],
            [red, green, blue, ..] => [
                red.byte(row, col),
                green.byte(row, col),
                blue.byte(row, col),
            ],
            [] => [0, 0, 0],
        };
        pixel.copy_from_slice(&[r, g, b, 255]);
    }
}
