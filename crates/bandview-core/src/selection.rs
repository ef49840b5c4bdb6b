use std::fmt;

use crate::consts::MAX_DISPLAY_CHANNELS;
use crate::error::{BandviewError, Result};

/// An ordered, bounds-checked list of band indices to composite.
///
/// Holds 1 to 3 indices, each below the band count it was validated
/// against. Repeats are kept: `[0, 0, 0]` renders band 0 on every channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BandSelection {
    bands: Vec<usize>,
}

impl BandSelection {
    pub fn new(bands: Vec<usize>, band_count: usize) -> Result<Self> {
        if bands.is_empty() {
            return Err(BandviewError::EmptySelection);
        }
        if bands.len() > MAX_DISPLAY_CHANNELS {
            return Err(BandviewError::TooManyBands {
                count: bands.len(),
                max: MAX_DISPLAY_CHANNELS,
            });
        }
        if let Some(&band) = bands.iter().find(|&&b| b >= band_count) {
            return Err(BandviewError::BandOutOfRange { band, band_count });
        }
        Ok(Self { bands })
    }

    /// The first `min(3, band_count)` bands.
    pub fn initial(band_count: usize) -> Self {
        Self {
            bands: (0..band_count.clamp(1, MAX_DISPLAY_CHANNELS)).collect(),
        }
    }

    /// Parse a selector label such as `"2"`, `"0,1,2"` or `"3 2 1"`.
    ///
    /// Tokens are separated by commas and/or whitespace; each token is one
    /// index, so `"12"` is band 12.
    pub fn parse(label: &str, band_count: usize) -> Result<Self> {
        let bands = label
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| {
                token
                    .parse::<usize>()
                    .map_err(|_| BandviewError::InvalidBandLabel(label.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(bands, band_count)
    }

    pub fn bands(&self) -> &[usize] {
        &self.bands
    }

    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    /// Canonical selector label, e.g. `"0,1,2"`.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for BandSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, band) in self.bands.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{band}")?;
        }
        Ok(())
    }
}
