//! Contrast decisions: the YIQ heuristic and the WCAG luminance ratio.
//!
//! Two independent measures:
//!
//! - **YIQ** — a luma-weighted brightness score. Fast, and only used to pick
//!   black or white as the contrasting color for a background.
//! - **Relative luminance** — the WCAG 2.x definition (sRGB linearization +
//!   Rec. 709 weights), compared pairwise to grade foreground/background
//!   combinations against the AA/AAA thresholds.

use serde::{Deserialize, Serialize};
use tinter_color::{ColorValue, convert};

/// YIQ score at or above which a background calls for black text.
pub const YIQ_THRESHOLD: f64 = 128.0;

// ---------------------------------------------------------------------------
// YIQ
// ---------------------------------------------------------------------------

/// Which of black or white contrasts with a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Contrast {
    Black,
    White,
}

impl Contrast {
    /// Lowercase name, also a valid CSS color keyword.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::White => "white",
        }
    }

    /// The contrasting color as an RGB triple.
    #[must_use]
    pub const fn rgb(self) -> [i64; 3] {
        match self {
            Self::Black => [0, 0, 0],
            Self::White => [255, 255, 255],
        }
    }
}

/// YIQ score of a color plus the black/white decision derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContrastResult {
    pub yiq: f64,
    pub result: Contrast,
}

/// Score an RGB triple with the YIQ luma weights and pick black or white.
///
///   yiq = (r·299 + g·587 + b·114) / 1000
///
/// A score of [`YIQ_THRESHOLD`] or more is a light color: black contrasts.
#[must_use]
pub fn yiq_contrast_ratio([r, g, b]: [f64; 3]) -> ContrastResult {
    let yiq = b.mul_add(114.0, r.mul_add(299.0, g * 587.0)) / 1000.0;
    let result = if yiq >= YIQ_THRESHOLD {
        Contrast::Black
    } else {
        Contrast::White
    };
    ContrastResult { yiq, result }
}

// ---------------------------------------------------------------------------
// Relative luminance
// ---------------------------------------------------------------------------

/// Linearize one 0–255 sRGB channel.
#[inline]
fn linearize(channel: f64) -> f64 {
    let v = channel / 255.0;
    if v <= 0.039_28 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of an RGB triple per WCAG 2.x.
///
///   L = 0.2126·R + 0.7152·G + 0.0722·B   (linearized channels)
///
/// Returns a value in [0.0, 1.0] for in-range input.
#[must_use]
pub fn get_luminance([r, g, b]: [f64; 3]) -> f64 {
    0.2126f64.mul_add(linearize(r), 0.7152f64.mul_add(linearize(g), 0.0722 * linearize(b)))
}

// ---------------------------------------------------------------------------
// WCAG levels
// ---------------------------------------------------------------------------

/// One side of a contrast comparison: an RGB triple or hex digits.
#[derive(Debug, Clone, PartialEq)]
pub enum ContrastInput {
    Rgb([f64; 3]),
    Hex(String),
}

impl ContrastInput {
    fn rgb(&self) -> [f64; 3] {
        match self {
            Self::Rgb(rgb) => *rgb,
            Self::Hex(hex) => convert(&ColorValue::Hex(hex.clone())).rgb,
        }
    }
}

impl From<[f64; 3]> for ContrastInput {
    fn from(rgb: [f64; 3]) -> Self {
        Self::Rgb(rgb)
    }
}

impl From<&str> for ContrastInput {
    fn from(hex: &str) -> Self {
        Self::Hex(hex.to_string())
    }
}

/// Pass/fail flags for a foreground/background pair.
///
/// `ratio` is stored inverted — darker over lighter — so it is always in
/// (0, 1] and each flag is a plain `ratio < 1/N` comparison. The thresholds
/// are 3, 4.5, 4.5 and 7 in field order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct ContrastLevels {
    pub ratio: f64,
    pub aa_lvl_lg: bool,
    pub aa_lvl_sm: bool,
    pub aaa_lvl_lg: bool,
    pub aaa_lvl_sm: bool,
}

impl ContrastLevels {
    /// The conventional `N:1` contrast ratio, in [1.0, 21.0].
    #[must_use]
    pub fn conventional_ratio(&self) -> f64 {
        1.0 / self.ratio
    }
}

/// Grade a foreground/background pair against the WCAG thresholds.
///
/// Either side may be an RGB triple or hex digits. The result does not
/// depend on which side is lighter.
#[must_use]
pub fn calculate_contrast(
    foreground: impl Into<ContrastInput>,
    background: impl Into<ContrastInput>,
) -> ContrastLevels {
    let fg = get_luminance(foreground.into().rgb());
    let bg = get_luminance(background.into().rgb());
    let ratio = if fg > bg {
        (bg + 0.05) / (fg + 0.05)
    } else {
        (fg + 0.05) / (bg + 0.05)
    };

    ContrastLevels {
        ratio,
        aa_lvl_lg: ratio < 1.0 / 3.0,
        aa_lvl_sm: ratio < 1.0 / 4.5,
        aaa_lvl_lg: ratio < 1.0 / 4.5,
        aaa_lvl_sm: ratio < 1.0 / 7.0,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    // ── YIQ ─────────────────────────────────────────────────────────

    #[test]
    fn yiq_white_is_255_black_text() {
        let c = yiq_contrast_ratio([255.0, 255.0, 255.0]);
        assert!(approx_eq(c.yiq, 255.0, 1e-9), "White yiq: {}", c.yiq);
        assert_eq!(c.result, Contrast::Black);
    }

    #[test]
    fn yiq_black_is_zero_white_text() {
        let c = yiq_contrast_ratio([0.0, 0.0, 0.0]);
        assert!(approx_eq(c.yiq, 0.0, 1e-9));
        assert_eq!(c.result, Contrast::White);
    }

    #[test]
    fn yiq_threshold_is_inclusive() {
        assert_eq!(yiq_contrast_ratio([128.0, 128.0, 128.0]).result, Contrast::Black);
        assert_eq!(yiq_contrast_ratio([127.0, 127.0, 127.0]).result, Contrast::White);
    }

    #[test]
    fn yiq_weights_green_heaviest() {
        let c = yiq_contrast_ratio([51.0, 102.0, 153.0]);
        // (51·299 + 102·587 + 153·114) / 1000
        assert!(approx_eq(c.yiq, 92.565, 1e-9), "yiq: {}", c.yiq);
        assert_eq!(c.result, Contrast::White);
    }

    // ── Relative luminance ──────────────────────────────────────────

    #[test]
    fn luminance_black_is_zero() {
        assert!(approx_eq(get_luminance([0.0, 0.0, 0.0]), 0.0, 1e-9));
    }

    #[test]
    fn luminance_white_is_one() {
        let lum = get_luminance([255.0, 255.0, 255.0]);
        assert!(approx_eq(lum, 1.0, 1e-9), "White luminance: {lum}");
    }

    #[test]
    fn luminance_pure_primaries() {
        assert!(approx_eq(get_luminance([255.0, 0.0, 0.0]), 0.2126, 1e-9));
        assert!(approx_eq(get_luminance([0.0, 255.0, 0.0]), 0.7152, 1e-9));
        assert!(approx_eq(get_luminance([0.0, 0.0, 255.0]), 0.0722, 1e-9));
    }

    #[test]
    fn luminance_low_channel_uses_linear_segment() {
        // 10/255 ≈ 0.0392 sits under the 0.03928 knee.
        let lum = get_luminance([10.0, 10.0, 10.0]);
        assert!(approx_eq(lum, 10.0 / 255.0 / 12.92, 1e-12), "lum: {lum}");
    }

    #[test]
    fn luminance_mid_gray() {
        let lum = get_luminance([128.0, 128.0, 128.0]);
        assert!(lum > 0.20 && lum < 0.23, "Mid-gray luminance: {lum}");
    }

    // ── WCAG levels ─────────────────────────────────────────────────

    #[test]
    fn white_on_black_passes_everything() {
        let levels = calculate_contrast("FFFFFF", "000000");
        assert!(approx_eq(levels.ratio, 0.05 / 1.05, 1e-9), "ratio: {}", levels.ratio);
        assert!(levels.aa_lvl_lg);
        assert!(levels.aa_lvl_sm);
        assert!(levels.aaa_lvl_lg);
        assert!(levels.aaa_lvl_sm);
        assert!(approx_eq(levels.conventional_ratio(), 21.0, 1e-9));
    }

    #[test]
    fn same_color_fails_everything() {
        let levels = calculate_contrast([51.0, 102.0, 153.0], "336699");
        assert!(approx_eq(levels.ratio, 1.0, 1e-9));
        assert!(!levels.aa_lvl_lg);
        assert!(!levels.aa_lvl_sm);
        assert!(!levels.aaa_lvl_lg);
        assert!(!levels.aaa_lvl_sm);
    }

    #[test]
    fn ratio_is_order_independent() {
        let a = calculate_contrast("336699", "FFFFFF");
        let b = calculate_contrast("FFFFFF", "336699");
        assert!(approx_eq(a.ratio, b.ratio, 1e-12));
        assert!(a.ratio <= 1.0);
    }

    #[test]
    fn mid_contrast_passes_only_the_three_to_one_check() {
        // #808080 on white ≈ 3.95:1
        let levels = calculate_contrast("808080", "FFFFFF");
        let n = levels.conventional_ratio();
        assert!(n > 3.0 && n < 4.5, "ratio: {n}");
        assert!(levels.aa_lvl_lg);
        assert!(!levels.aa_lvl_sm);
        assert!(!levels.aaa_lvl_lg);
        assert!(!levels.aaa_lvl_sm);
    }

    #[test]
    fn steel_blue_on_white_misses_seven_to_one() {
        // #336699 on white ≈ 6.0:1
        let levels = calculate_contrast("336699", "FFFFFF");
        assert!(levels.aa_lvl_lg);
        assert!(levels.aa_lvl_sm);
        assert!(levels.aaa_lvl_lg);
        assert!(!levels.aaa_lvl_sm);
    }
}
