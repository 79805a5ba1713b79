// SPDX-License-Identifier: MIT
//
// Pairwise conversion routines and the converter facade.
//
// RGB is the hub: every routine either starts or ends in RGB, and the
// remaining pairs are compositions through it. Hex digits and 8-bit channels
// are rounded to whole units; HSL and CMYK keep one decimal (tenths of a
// degree or percent) so that a color converted out and back lands within one
// 8-bit unit of where it started.
//
//   hex ──┐          ┌── hsl
//         ├── rgb ───┤
//   cmyk ─┘          └── (and back)
//
// Nothing here validates. Unparseable hex text decodes as black; channels
// outside their range pass through the arithmetic unchanged.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::{ColorModel, ColorValue};

// ─── ColorSet ────────────────────────────────────────────────────────────────

/// One color in all four representations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorSet {
    /// Six uppercase hex digits, no `#` (unless the input was hex, which is
    /// kept verbatim).
    pub hex: String,
    pub rgb: [f64; 3],
    pub hsl: [f64; 3],
    pub cmyk: [f64; 4],
}

impl ColorSet {
    /// The field matching `model`, re-wrapped as a [`ColorValue`].
    #[must_use]
    pub fn value(&self, model: ColorModel) -> ColorValue {
        match model {
            ColorModel::Hex => ColorValue::Hex(self.hex.clone()),
            ColorModel::Rgb => ColorValue::Rgb(self.rgb),
            ColorModel::Hsl => ColorValue::Hsl(self.hsl),
            ColorModel::Cmyk => ColorValue::Cmyk(self.cmyk),
        }
    }
}

/// Convert `value` into all four models.
///
/// The input is placed verbatim under its own key; the other three come from
/// the pairwise routines. Validate first: this never fails, it degrades.
#[must_use]
pub fn convert(value: &ColorValue) -> ColorSet {
    let set = match value {
        ColorValue::Hex(hex) => ColorSet {
            hex: hex.clone(),
            rgb: hex_to_rgb(hex),
            hsl: hex_to_hsl(hex),
            cmyk: hex_to_cmyk(hex),
        },
        ColorValue::Rgb(rgb) => ColorSet {
            hex: rgb_to_hex(*rgb),
            rgb: *rgb,
            hsl: rgb_to_hsl(*rgb),
            cmyk: rgb_to_cmyk(*rgb),
        },
        ColorValue::Hsl(hsl) => ColorSet {
            hex: hsl_to_hex(*hsl),
            rgb: hsl_to_rgb(*hsl),
            hsl: *hsl,
            cmyk: hsl_to_cmyk(*hsl),
        },
        ColorValue::Cmyk(cmyk) => ColorSet {
            hex: cmyk_to_hex(*cmyk),
            rgb: cmyk_to_rgb(*cmyk),
            hsl: cmyk_to_hsl(*cmyk),
            cmyk: *cmyk,
        },
    };
    debug!(input = %value, hex = %set.hex, "converted color");
    set
}

/// Round every channel to the nearest integer.
///
/// Used to turn converted (possibly fractional) channels into clean integers
/// for display and for the theme's variable bundle.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn normalize<const N: usize>(values: [f64; N]) -> [i64; N] {
    values.map(|v| v.round() as i64)
}

/// Round to a whole unit without producing `-0`.
#[inline]
fn whole(v: f64) -> f64 {
    v.round() + 0.0
}

/// Round to one decimal place without producing `-0`.
#[inline]
fn tenth(v: f64) -> f64 {
    (v * 10.0).round() / 10.0 + 0.0
}

// ─── Hex ─────────────────────────────────────────────────────────────────────

/// Decode hex digits (`RRGGBB` or shorthand `RGB`, optional `#`) into RGB.
///
/// Anything else decodes as black.
#[must_use]
pub fn hex_to_rgb(hex: &str) -> [f64; 3] {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        _ => digits.to_string(),
    };
    if expanded.len() != 6 || !expanded.bytes().all(|b| b.is_ascii_hexdigit()) {
        return [0.0; 3];
    }
    u32::from_str_radix(&expanded, 16).map_or([0.0; 3], |n| {
        [
            f64::from((n >> 16) & 0xFF),
            f64::from((n >> 8) & 0xFF),
            f64::from(n & 0xFF),
        ]
    })
}

#[must_use]
pub fn hex_to_hsl(hex: &str) -> [f64; 3] {
    rgb_to_hsl(hex_to_rgb(hex))
}

#[must_use]
pub fn hex_to_cmyk(hex: &str) -> [f64; 4] {
    rgb_to_cmyk(hex_to_rgb(hex))
}

// ─── RGB ─────────────────────────────────────────────────────────────────────

/// Encode RGB as six uppercase hex digits.
///
/// Channels are rounded and wrapped to a byte, so out-of-range input still
/// produces six digits.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn rgb_to_hex(rgb: [f64; 3]) -> String {
    let [r, g, b] = rgb.map(|v| (v.round() as i64 & 0xFF) as u8);
    format!("{r:02X}{g:02X}{b:02X}")
}

/// RGB (0–255) to HSL (degrees, percent, percent), to one decimal.
#[must_use]
pub fn rgb_to_hsl(rgb: [f64; 3]) -> [f64; 3] {
    let [r, g, b] = rgb.map(|v| v / 255.0);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let l = (max + min) / 2.0;

    if delta == 0.0 {
        return [0.0, 0.0, tenth(l * 100.0)];
    }

    let s = if l <= 0.5 {
        delta / (max + min)
    } else {
        delta / (2.0 - max - min)
    };

    let sector = if max == r {
        (g - b) / delta
    } else if max == g {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };
    let mut h = (sector * 60.0).min(360.0);
    if h < 0.0 {
        h += 360.0;
    }

    [tenth(h), tenth(s * 100.0), tenth(l * 100.0)]
}

/// RGB (0–255) to CMYK (percent), to one decimal.
#[must_use]
pub fn rgb_to_cmyk(rgb: [f64; 3]) -> [f64; 4] {
    let [r, g, b] = rgb.map(|v| v / 255.0);
    let k = (1.0 - r).min(1.0 - g).min(1.0 - b);
    let ink = |v: f64| {
        let c = (1.0 - v - k) / (1.0 - k);
        if c.is_finite() { c } else { 0.0 }
    };
    [
        tenth(ink(r) * 100.0),
        tenth(ink(g) * 100.0),
        tenth(ink(b) * 100.0),
        tenth(k * 100.0),
    ]
}

// ─── HSL ─────────────────────────────────────────────────────────────────────

/// HSL (degrees, percent, percent) to RGB (0–255).
#[must_use]
pub fn hsl_to_rgb([h, s, l]: [f64; 3]) -> [f64; 3] {
    let s = s / 100.0;
    let l = l / 100.0;
    let h = h.rem_euclid(360.0);

    let c = (1.0 - 2.0f64.mul_add(l, -1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match h {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    [r, g, b].map(|v| whole((v + m) * 255.0))
}

#[must_use]
pub fn hsl_to_hex(hsl: [f64; 3]) -> String {
    rgb_to_hex(hsl_to_rgb(hsl))
}

#[must_use]
pub fn hsl_to_cmyk(hsl: [f64; 3]) -> [f64; 4] {
    rgb_to_cmyk(hsl_to_rgb(hsl))
}

// ─── CMYK ────────────────────────────────────────────────────────────────────

/// CMYK (percent) to RGB (0–255).
#[must_use]
pub fn cmyk_to_rgb([c, m, y, k]: [f64; 4]) -> [f64; 3] {
    let k = k / 100.0;
    [c, m, y].map(|v| whole((1.0 - (v / 100.0).mul_add(1.0 - k, k).min(1.0)) * 255.0))
}

#[must_use]
pub fn cmyk_to_hex(cmyk: [f64; 4]) -> String {
    rgb_to_hex(cmyk_to_rgb(cmyk))
}

#[must_use]
pub fn cmyk_to_hsl(cmyk: [f64; 4]) -> [f64; 3] {
    rgb_to_hsl(cmyk_to_rgb(cmyk))
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn steel_blue() -> ColorSet {
        ColorSet {
            hex: "336699".into(),
            rgb: [51.0, 102.0, 153.0],
            hsl: [210.0, 50.0, 40.0],
            cmyk: [66.7, 33.3, 0.0, 40.0],
        }
    }

    // ── Pairwise routines ────────────────────────────────────────────────

    #[test]
    fn hex_decodes() {
        assert_eq!(hex_to_rgb("336699"), [51.0, 102.0, 153.0]);
        assert_eq!(hex_to_rgb("#FF0000"), [255.0, 0.0, 0.0]);
        assert_eq!(hex_to_rgb("abc"), [170.0, 187.0, 204.0]);
    }

    #[test]
    fn bad_hex_decodes_as_black() {
        assert_eq!(hex_to_rgb("GGGGGG"), [0.0; 3]);
        assert_eq!(hex_to_rgb("12345"), [0.0; 3]);
        assert_eq!(hex_to_rgb(""), [0.0; 3]);
    }

    #[test]
    fn rgb_encodes_uppercase() {
        assert_eq!(rgb_to_hex([51.0, 102.0, 153.0]), "336699");
        assert_eq!(rgb_to_hex([255.0, 170.0, 0.0]), "FFAA00");
        assert_eq!(rgb_to_hex([0.0, 0.0, 0.0]), "000000");
    }

    #[test]
    fn rgb_to_hsl_known_values() {
        assert_eq!(rgb_to_hsl([255.0, 0.0, 0.0]), [0.0, 100.0, 50.0]);
        assert_eq!(rgb_to_hsl([0.0, 255.0, 0.0]), [120.0, 100.0, 50.0]);
        assert_eq!(rgb_to_hsl([0.0, 0.0, 255.0]), [240.0, 100.0, 50.0]);
        assert_eq!(rgb_to_hsl([255.0, 255.0, 255.0]), [0.0, 0.0, 100.0]);
        assert_eq!(rgb_to_hsl([0.0, 0.0, 0.0]), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn hsl_to_rgb_known_values() {
        assert_eq!(hsl_to_rgb([120.0, 100.0, 50.0]), [0.0, 255.0, 0.0]);
        assert_eq!(hsl_to_rgb([360.0, 100.0, 50.0]), [255.0, 0.0, 0.0]);
        assert_eq!(hsl_to_rgb([0.0, 0.0, 100.0]), [255.0, 255.0, 255.0]);
    }

    #[test]
    fn cmyk_known_values() {
        assert_eq!(rgb_to_cmyk([0.0, 0.0, 0.0]), [0.0, 0.0, 0.0, 100.0]);
        assert_eq!(rgb_to_cmyk([255.0, 255.0, 255.0]), [0.0, 0.0, 0.0, 0.0]);
        assert_eq!(cmyk_to_rgb([0.0, 100.0, 100.0, 0.0]), [255.0, 0.0, 0.0]);
        assert_eq!(cmyk_to_rgb([0.0, 0.0, 0.0, 100.0]), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn no_negative_zero() {
        for v in rgb_to_hsl([0.0, 0.0, 0.0]).into_iter().chain(rgb_to_cmyk([0.0; 3])) {
            assert!(v.is_sign_positive(), "got {v}");
        }
    }

    // ── Facade ───────────────────────────────────────────────────────────

    fn orange() -> ColorSet {
        ColorSet {
            hex: "FF8000".into(),
            rgb: [255.0, 128.0, 0.0],
            hsl: [30.1, 100.0, 50.0],
            cmyk: [0.0, 49.8, 100.0, 0.0],
        }
    }

    #[test]
    fn convert_from_each_model() {
        let expected = orange();
        for model in ColorModel::ALL {
            assert_eq!(convert(&expected.value(model)), expected, "from {model}");
        }
    }

    #[test]
    fn convert_steel_blue_from_each_model() {
        let expected = steel_blue();
        for model in ColorModel::ALL {
            assert_eq!(convert(&expected.value(model)), expected, "from {model}");
        }
    }

    #[test]
    fn hsl_and_cmyk_keep_tenths() {
        assert_eq!(rgb_to_hsl([0.0, 0.0, 125.0]), [240.0, 100.0, 24.5]);
        assert_eq!(rgb_to_cmyk([0.0, 95.0, 200.0]), [100.0, 52.5, 0.0, 21.6]);
    }

    #[test]
    fn round_trips_stay_within_one_unit() {
        let within = |a: [f64; 3], b: [f64; 3]| a.iter().zip(b).all(|(x, y)| (x - y).abs() <= 1.0);
        let channels = (0..=255_u8).step_by(5).map(f64::from);
        for r in channels.clone() {
            for g in channels.clone() {
                for b in channels.clone() {
                    let set = convert(&ColorValue::Rgb([r, g, b]));
                    let via_hsl = convert(&ColorValue::Hsl(set.hsl)).rgb;
                    let via_cmyk = convert(&ColorValue::Cmyk(set.cmyk)).rgb;
                    assert!(within(via_hsl, set.rgb), "hsl {:?} -> {via_hsl:?}", set.rgb);
                    assert!(within(via_cmyk, set.rgb), "cmyk {:?} -> {via_cmyk:?}", set.rgb);
                }
            }
        }
    }

    #[test]
    fn input_kept_verbatim() {
        let set = convert(&ColorValue::Hex("abcdef".into()));
        assert_eq!(set.hex, "abcdef");
        assert_eq!(set.rgb, [171.0, 205.0, 239.0]);
    }

    #[test]
    fn lowercase_hex_matches_reconverted_hex_ignoring_case() {
        let first = convert(&ColorValue::Hex("abcdef".into()));
        let again = convert(&ColorValue::Rgb(first.rgb));
        assert_eq!(again.hex, "ABCDEF");
        assert!(again.hex.eq_ignore_ascii_case(&first.hex));
        assert_eq!((again.rgb, again.hsl, again.cmyk), (first.rgb, first.hsl, first.cmyk));
    }

    #[test]
    fn round_trip_through_rgb() {
        let first = convert(&ColorValue::Hex("336699".into()));
        let again = convert(&ColorValue::Rgb(first.rgb));
        assert_eq!(again.hex, "336699");
        assert_eq!(again, first);
    }

    #[test]
    fn unvalidated_hex_degrades() {
        let set = convert(&ColorValue::Hex("nope".into()));
        assert_eq!(set.rgb, [0.0; 3]);
        assert_eq!(set.cmyk, [0.0, 0.0, 0.0, 100.0]);
    }

    // ── normalize ────────────────────────────────────────────────────────

    #[test]
    fn normalize_rounds() {
        assert_eq!(normalize([0.4, 127.5, 254.6]), [0, 128, 255]);
        assert_eq!(normalize([-0.2, 1.0, 2.0, 3.0]), [0, 1, 2, 3]);
    }
}
