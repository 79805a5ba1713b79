// SPDX-License-Identifier: MIT
//
// Validator — checks raw input against a model's arity and channel bounds.
//
// Only upper bounds are enforced. Negative channels pass for rgb, hsl and
// cmyk alike; callers that need a floor must check it themselves.

use tracing::debug;

use crate::error::ColorError;
use crate::model::{ColorModel, ColorValue, RawChannel, RawInput};

/// Whether `raw` is a valid value of `model`.
///
/// Hex accepts a bare string or a one-element sequence holding a string;
/// the sequence is unwrapped before checking. The string must be exactly
/// six hex digits. `"000000"` is valid.
#[must_use]
pub fn validate(model: ColorModel, raw: &RawInput) -> bool {
    match model {
        ColorModel::Hex => hex_text(raw).is_some_and(is_hex),
        ColorModel::Rgb | ColorModel::Hsl | ColorModel::Cmyk => {
            numeric_channels(model, raw).is_some()
        }
    }
}

/// Whether `s` is exactly six hex digits.
#[must_use]
pub fn is_hex(s: &str) -> bool {
    s.len() == 6 && s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Unwrap the hex text from a bare string or a singleton sequence.
fn hex_text(raw: &RawInput) -> Option<&str> {
    match raw {
        RawInput::Text(s) => Some(s),
        RawInput::Sequence(entries) => match entries.as_slice() {
            [RawChannel::Text(s)] => Some(s),
            _ => None,
        },
    }
}

/// Extract the channels of a numeric model if arity, type and upper bounds
/// all hold.
fn numeric_channels(model: ColorModel, raw: &RawInput) -> Option<Vec<f64>> {
    let RawInput::Sequence(entries) = raw else {
        return None;
    };
    if entries.len() != model.arity() {
        return None;
    }
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| match entry {
            RawChannel::Number(n) if *n <= model.channel_max(i) => Some(*n),
            _ => None,
        })
        .collect()
}

impl ColorValue {
    /// Validate `raw` and build the typed value.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::Invalid`] when [`validate`] rejects the input.
    pub fn from_raw(model: ColorModel, raw: &RawInput) -> Result<Self, ColorError> {
        let invalid = || ColorError::Invalid {
            model,
            input: raw.to_string(),
        };

        let value = match model {
            ColorModel::Hex => {
                let hex = hex_text(raw).filter(|s| is_hex(s)).ok_or_else(invalid)?;
                Self::Hex(hex.to_string())
            }
            ColorModel::Rgb => Self::Rgb(channels::<3>(model, raw).ok_or_else(invalid)?),
            ColorModel::Hsl => Self::Hsl(channels::<3>(model, raw).ok_or_else(invalid)?),
            ColorModel::Cmyk => Self::Cmyk(channels::<4>(model, raw).ok_or_else(invalid)?),
        };
        debug!(%model, %value, "validated color input");
        Ok(value)
    }
}

fn channels<const N: usize>(model: ColorModel, raw: &RawInput) -> Option<[f64; N]> {
    numeric_channels(model, raw)?.try_into().ok()
}

// ─── Tests ───────────────────────────────────────────────────────────────────
