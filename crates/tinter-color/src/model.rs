// SPDX-License-Identifier: MIT
//
// Model registry — static metadata for the four color representations.
//
// Each model knows its arity, the upper bound of every channel, whether it is
// typed as text or numbers, and how its values print. The set is closed: a
// model that isn't listed here can't be named, so every lookup is an
// exhaustive match rather than a string-keyed table.
//
//   model   arity   channel bounds        display
//   ─────   ─────   ───────────────────   ─────────────────────────
//   hex     1       6 digit positions     #336699
//   rgb     3       255 / 255 / 255       rgb(51, 102, 153)
//   hsl     3       360 / 100 / 100       hsl(210, 50%, 40%)
//   cmyk    4       100 / 100 / 100 / 100 cmyk(67%, 33%, 0%, 40%)

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ColorError;

// ─── ColorModel ──────────────────────────────────────────────────────────────

/// One of the four supported color representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorModel {
    Hex,
    Rgb,
    Hsl,
    Cmyk,
}

/// How a model's channels are entered by a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// A single text field (hex digits).
    Text,
    /// One number per channel.
    Numeric,
}

impl ColorModel {
    /// Every model, in registry order.
    pub const ALL: [Self; 4] = [Self::Hex, Self::Rgb, Self::Hsl, Self::Cmyk];

    /// Lowercase model name, as used in CLI arguments and serialized values.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
            Self::Cmyk => "cmyk",
        }
    }

    /// Number of entries a raw value of this model carries.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Hex => 1,
            Self::Rgb | Self::Hsl => 3,
            Self::Cmyk => 4,
        }
    }

    /// Upper bound for the channel at `index`.
    ///
    /// HSL is the only model whose bound depends on the position (hue runs to
    /// 360, saturation and lightness to 100). For hex the bound is the number
    /// of digit positions. Out-of-range indices reuse the last channel's bound.
    #[must_use]
    pub const fn channel_max(self, index: usize) -> f64 {
        match self {
            Self::Hex => 6.0,
            Self::Rgb => 255.0,
            Self::Hsl => {
                if index == 0 {
                    360.0
                } else {
                    100.0
                }
            }
            Self::Cmyk => 100.0,
        }
    }

    /// Whether the model is entered as text or as numbers.
    #[must_use]
    pub const fn input_kind(self) -> InputKind {
        match self {
            Self::Hex => InputKind::Text,
            Self::Rgb | Self::Hsl | Self::Cmyk => InputKind::Numeric,
        }
    }
}

impl fmt::Display for ColorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorModel {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|model| model.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ColorError::UnknownModel(s.to_string()))
    }
}

// ─── ColorValue ──────────────────────────────────────────────────────────────

/// A color in one specific model. The variant is the model tag.
///
/// Values are not guaranteed valid: build them through
/// [`ColorValue::from_raw`](crate::validate) when the input comes from a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum ColorValue {
    /// Six hex digits, no `#`.
    Hex(String),
    Rgb([f64; 3]),
    Hsl([f64; 3]),
    Cmyk([f64; 4]),
}

impl ColorValue {
    /// The model this value belongs to.
    #[must_use]
    pub const fn model(&self) -> ColorModel {
        match self {
            Self::Hex(_) => ColorModel::Hex,
            Self::Rgb(_) => ColorModel::Rgb,
            Self::Hsl(_) => ColorModel::Hsl,
            Self::Cmyk(_) => ColorModel::Cmyk,
        }
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hex(hex) => write!(f, "#{hex}"),
            Self::Rgb(rgb) => f.write_str(&rgb_string(*rgb)),
            Self::Hsl([h, s, l]) => write!(f, "hsl({h}, {s}%, {l}%)"),
            Self::Cmyk([c, m, y, k]) => write!(f, "cmyk({c}%, {m}%, {y}%, {k}%)"),
        }
    }
}

/// Functional notation for an RGB triple: `rgb(51, 102, 153)`.
#[must_use]
pub fn rgb_string([r, g, b]: [f64; 3]) -> String {
    format!("rgb({r}, {g}, {b})")
}

static RGB_NOTATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*rgba?\(\s*(-?[0-9.]+)\s*,\s*(-?[0-9.]+)\s*,\s*(-?[0-9.]+)\s*(?:,\s*[0-9.]+\s*)?\)\s*$",
    )
    .expect("RGB notation pattern is valid")
});

/// Parse `rgb(r, g, b)` (or `rgba(r, g, b, a)`, alpha dropped) back into a
/// channel array. The inverse of [`rgb_string`].
#[must_use]
pub fn parse_rgb(display: &str) -> Option<[f64; 3]> {
    let caps = RGB_NOTATION.captures(display)?;
    let channel = |i: usize| caps.get(i)?.as_str().parse::<f64>().ok();
    Some([channel(1)?, channel(2)?, channel(3)?])
}

// ─── RawInput ────────────────────────────────────────────────────────────────

/// Untyped user input, before validation.
///
/// Hex arrives as text (or a one-element list holding text); the numeric
/// models arrive as lists. Entries that aren't numbers are kept as text so
/// the validator can reject them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawInput {
    Text(String),
    Sequence(Vec<RawChannel>),
}

/// One entry of a raw sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawChannel {
    Number(f64),
    Text(String),
}

impl RawInput {
    /// Build a raw sequence from command-line style words, keeping anything
    /// that doesn't parse as a number as text.
    #[must_use]
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Self {
        Self::Sequence(
            words
                .iter()
                .map(|w| {
                    let w = w.as_ref();
                    w.trim()
                        .parse::<f64>()
                        .map_or_else(|_| RawChannel::Text(w.to_string()), RawChannel::Number)
                })
                .collect(),
        )
    }
}

impl From<&str> for RawInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl<const N: usize> From<[f64; N]> for RawInput {
    fn from(values: [f64; N]) -> Self {
        Self::Sequence(values.into_iter().map(RawChannel::Number).collect())
    }
}

impl fmt::Display for RawInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s:?}"),
            Self::Sequence(entries) => {
                f.write_str("[")?;
                for (i, entry) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    match entry {
                        RawChannel::Number(n) => write!(f, "{n}")?,
                        RawChannel::Text(s) => write!(f, "{s:?}")?,
                    }
                }
                f.write_str("]")
            }
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── Registry ─────────────────────────────────────────────────────────

    #[test]
    fn arity_per_model() {
        assert_eq!(ColorModel::Hex.arity(), 1);
        assert_eq!(ColorModel::Rgb.arity(), 3);
        assert_eq!(ColorModel::Hsl.arity(), 3);
        assert_eq!(ColorModel::Cmyk.arity(), 4);
    }

    #[test]
    fn hsl_bounds_depend_on_position() {
        assert!((ColorModel::Hsl.channel_max(0) - 360.0).abs() < f64::EPSILON);
        assert!((ColorModel::Hsl.channel_max(1) - 100.0).abs() < f64::EPSILON);
        assert!((ColorModel::Hsl.channel_max(2) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn single_bound_models_reuse_it() {
        for i in 0..4 {
            assert!((ColorModel::Rgb.channel_max(i) - 255.0).abs() < f64::EPSILON);
            assert!((ColorModel::Cmyk.channel_max(i) - 100.0).abs() < f64::EPSILON);
        }
        assert!((ColorModel::Hex.channel_max(0) - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn only_hex_is_text() {
        assert_eq!(ColorModel::Hex.input_kind(), InputKind::Text);
        assert_eq!(ColorModel::Cmyk.input_kind(), InputKind::Numeric);
    }

    #[test]
    fn model_from_str() {
        assert_eq!("RGB".parse::<ColorModel>(), Ok(ColorModel::Rgb));
        assert_eq!(" cmyk ".parse::<ColorModel>(), Ok(ColorModel::Cmyk));
        assert_eq!(
            "lab".parse::<ColorModel>(),
            Err(ColorError::UnknownModel("lab".to_string()))
        );
    }

    // ── Display ──────────────────────────────────────────────────────────

    #[test]
    fn display_strings() {
        assert_eq!(ColorValue::Hex("336699".into()).to_string(), "#336699");
        assert_eq!(ColorValue::Rgb([51.0, 102.0, 153.0]).to_string(), "rgb(51, 102, 153)");
        assert_eq!(ColorValue::Hsl([210.0, 50.0, 40.0]).to_string(), "hsl(210, 50%, 40%)");
        assert_eq!(
            ColorValue::Cmyk([67.0, 33.0, 0.0, 40.0]).to_string(),
            "cmyk(67%, 33%, 0%, 40%)"
        );
    }

    #[test]
    fn fractional_channels_keep_decimals() {
        assert_eq!(rgb_string([0.5, 1.0, 2.25]), "rgb(0.5, 1, 2.25)");
    }

    // ── parse_rgb ────────────────────────────────────────────────────────

    #[test]
    fn parse_rgb_inverts_display() {
        assert_eq!(parse_rgb("rgb(51, 102, 153)"), Some([51.0, 102.0, 153.0]));
        assert_eq!(parse_rgb(&rgb_string([1.0, 2.0, 3.0])), Some([1.0, 2.0, 3.0]));
    }

    #[test]
    fn parse_rgb_accepts_alpha_form() {
        assert_eq!(parse_rgb("rgba(10, 20, 30, 0.98)"), Some([10.0, 20.0, 30.0]));
    }

    #[test]
    fn parse_rgb_rejects_other_notation() {
        assert_eq!(parse_rgb("#336699"), None);
        assert_eq!(parse_rgb("hsl(1, 2%, 3%)"), None);
        assert_eq!(parse_rgb("rgb(1, 2)"), None);
    }

    // ── RawInput ─────────────────────────────────────────────────────────

    #[test]
    fn from_words_keeps_non_numbers_as_text() {
        let raw = RawInput::from_words(&["1", "x", "3.5"]);
        assert_eq!(
            raw,
            RawInput::Sequence(vec![
                RawChannel::Number(1.0),
                RawChannel::Text("x".into()),
                RawChannel::Number(3.5),
            ])
        );
    }

    #[test]
    fn raw_display() {
        assert_eq!(RawInput::from("abc").to_string(), "\"abc\"");
        assert_eq!(RawInput::from([1.0, 2.0]).to_string(), "[1, 2]");
    }
}
