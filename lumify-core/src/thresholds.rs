//! Threshold specification parsing.
//!
//! A threshold spec is a flat comma-separated list of alternating
//! `luminancePercent,colorHex` tokens, e.g. `"0,80C9AC,50,221F20"`: recolor
//! pixels below 50% luminance to #80C9AC and the rest to #221F20. Luminance
//! tokens may carry a trailing `%`, color tokens a leading `#`.

use thiserror::Error;

use crate::color::Rgb;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ThresholdSpecError {
    #[error("luminance threshold '{token}' is not a valid integer")]
    InvalidLuminance { token: String },

    #[error("luminance threshold percent {percent} must be within 0-100")]
    LuminanceOutOfRange { percent: i64 },

    #[error("color '{token}' must be exactly 6 hexadecimal digits")]
    InvalidColor { token: String },

    #[error("odd number of tokens ({count}) in threshold spec")]
    OddTokenCount { count: usize },

    #[error("threshold spec has {count} tokens, need at least two luminance,color pairs")]
    TooFewPairs { count: usize },

    #[error("duplicate luminance threshold percent {percent}")]
    DuplicateThreshold { percent: u8 },

    #[error("no threshold pair for luminance percent 0")]
    MissingZeroBand,
}

/// One recoloring rule: pixels whose luminance meets or exceeds `threshold`
/// (and no higher band's threshold) take on `color`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LuminanceBand {
    /// Minimum luminance percent, 0-100.
    pub threshold: u8,
    pub color: Rgb,
}

/// Bands sorted ascending by threshold. Only [`parse_thresholds`] builds
/// one, so a `BandList` always holds distinct thresholds and the 0-percent
/// catch-all band.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BandList {
    bands: Vec<LuminanceBand>,
}

impl BandList {
    pub(crate) fn from_sorted(bands: Vec<LuminanceBand>) -> Self {
        Self { bands }
    }

    pub fn bands(&self) -> &[LuminanceBand] {
        &self.bands
    }

    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }
}

fn parse_band(lum_token: &str, color_token: &str) -> Result<LuminanceBand, ThresholdSpecError> {
    let percent: i64 = lum_token
        .trim_end_matches('%')
        .parse()
        .map_err(|_| ThresholdSpecError::InvalidLuminance {
            token: lum_token.to_string(),
        })?;
    if !(0..=100).contains(&percent) {
        return Err(ThresholdSpecError::LuminanceOutOfRange { percent });
    }

    let digits = color_token.strip_prefix('#').unwrap_or(color_token);
    if digits.len() != 6 {
        return Err(ThresholdSpecError::InvalidColor {
            token: color_token.to_string(),
        });
    }
    // Six hex digits cap the value at 0xFFFFFF, and from_str_radix rejects
    // signs and non-hex characters.
    let packed = u32::from_str_radix(digits, 16).map_err(|_| ThresholdSpecError::InvalidColor {
        token: color_token.to_string(),
    })?;

    Ok(LuminanceBand {
        threshold: percent as u8,
        color: Rgb::new(
            ((packed >> 16) & 0xFF) as u8,
            ((packed >> 8) & 0xFF) as u8,
            (packed & 0xFF) as u8,
        ),
    })
}

/// Parse a threshold spec into a validated, ascending-sorted [`BandList`].
///
/// Rejects specs with an odd token count, fewer than two pairs, duplicate
/// luminance percents, or no 0-percent catch-all band. Returns either a
/// complete valid list or an error, never a partial one.
pub fn parse_thresholds(spec: &str) -> Result<BandList, ThresholdSpecError> {
    let tokens: Vec<&str> = spec.split(',').collect();
    if tokens.len() % 2 != 0 {
        return Err(ThresholdSpecError::OddTokenCount {
            count: tokens.len(),
        });
    }
    if tokens.len() < 4 {
        return Err(ThresholdSpecError::TooFewPairs {
            count: tokens.len(),
        });
    }

    let mut bands: Vec<LuminanceBand> = Vec::with_capacity(tokens.len() / 2);
    for pair in tokens.chunks_exact(2) {
        let band = parse_band(pair[0], pair[1])?;
        if bands.iter().any(|b| b.threshold == band.threshold) {
            return Err(ThresholdSpecError::DuplicateThreshold {
                percent: band.threshold,
            });
        }
        bands.push(band);
    }

    if !bands.iter().any(|b| b.threshold == 0) {
        return Err(ThresholdSpecError::MissingZeroBand);
    }

    bands.sort_by_key(|b| b.threshold);
    Ok(BandList::from_sorted(bands))
}
