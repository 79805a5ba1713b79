//! Theme derivation — one input color in, a complete style bundle out.
//!
//! A [`Theme`] is rebuilt from scratch on every call; nothing is cached or
//! updated incrementally. The pipeline:
//!
//! ```text
//! ColorValue ─► convert ─► ColorSet ─┬─► yiq_contrast_ratio(rgb) ─► Black | White
//!                                    └─► generate_gradients(hex) ─► 8 stops (or none)
//!                                                       │
//!            text / secondary / dark picked by contrast ┘
//!                                    │
//!                                    ▼
//!                 css_variables + variable bundle
//! ```
//!
//! When the gradient seed is invalid the ramp is empty and every value picked
//! from it comes out as `None`. That propagates into the declarations and the
//! variable bundle rather than being papered over.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tinter_color::{ColorSet, ColorValue, convert, normalize, parse_rgb, rgb_string};
use tracing::debug;

use crate::contrast::{Contrast, ContrastResult, yiq_contrast_ratio};
use crate::gradient::generate_gradients;

/// Alpha of the translucent dark variant.
pub const DARK_ALPHA: f64 = 0.98;

/// Value written for a declaration whose color is absent.
pub const ABSENT_VALUE: &str = "unset";

// ---------------------------------------------------------------------------
// StyleDeclaration
// ---------------------------------------------------------------------------

/// One named style variable, e.g. `--primary-color: rgb(51, 102, 153)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleDeclaration {
    pub name: String,
    /// `None` when the value came from a missing gradient stop.
    pub value: Option<String>,
}

impl StyleDeclaration {
    #[must_use]
    pub fn new(name: impl Into<String>, value: Option<String>) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl fmt::Display for StyleDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value.as_deref().unwrap_or(ABSENT_VALUE))
    }
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

/// Normalized channel triples for programmatic consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeVariables {
    pub primary: [i64; 3],
    pub secondary: Option<[i64; 3]>,
    pub text: Option<[i64; 3]>,
    /// Black or white, matching the contrast decision.
    pub contrast: [i64; 3],
}

/// Everything derived from one input color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub colors: ColorSet,
    pub contrast: ContrastResult,
    /// Darkest first. Eight stops, or empty for an invalid seed.
    pub gradients: Vec<String>,
    /// Six named colors followed by one `--gradient-N00` per stop.
    pub css_variables: Vec<StyleDeclaration>,
    pub variable: ThemeVariables,
}

impl Theme {
    /// Whether the theme's background wants light text (the dark mode flag).
    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.contrast.result == Contrast::White
    }

    /// Look up a declaration's value by name.
    #[must_use]
    pub fn declaration(&self, name: &str) -> Option<&StyleDeclaration> {
        self.css_variables.iter().find(|d| d.name == name)
    }
}

static OPAQUE_RGB: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^rgb\((.*)\)$").expect("opaque rgb pattern is valid"));

/// Rewrite `rgb(r, g, b)` as `rgba(r, g, b, alpha)`.
///
/// Anything not in opaque functional notation is returned unchanged.
#[must_use]
pub fn with_alpha(color: &str, alpha: f64) -> String {
    OPAQUE_RGB
        .replace(color, format!("rgba(${{1}}, {alpha})"))
        .into_owned()
}

/// Derive the full theme for `value`.
///
/// Validate `value` first if it came from a user: conversion degrades rather
/// than failing, and so does everything downstream of it.
#[must_use]
pub fn generate_css_color(value: &ColorValue) -> Theme {
    let colors = convert(value);
    let contrast = yiq_contrast_ratio(colors.rgb);
    let gradients = generate_gradients(&colors.hex);

    let primary = rgb_string(colors.rgb);
    let stop = |i: usize| gradients.get(i).cloned();

    let text = match contrast.result {
        Contrast::Black => stop(7),
        Contrast::White => Some(primary.clone()),
    };
    let (secondary, dark) = match contrast.result {
        Contrast::Black => (stop(1), stop(7)),
        Contrast::White => (stop(7), stop(1)),
    };
    let dark_transparent = dark.as_deref().map(|d| with_alpha(d, DARK_ALPHA));

    let mut css_variables = vec![
        StyleDeclaration::new("--primary-color", Some(primary)),
        StyleDeclaration::new("--secondary-color", secondary.clone()),
        StyleDeclaration::new("--text-color", text.clone()),
        StyleDeclaration::new("--dark-color", dark),
        StyleDeclaration::new("--dark-transparent-color", dark_transparent),
        StyleDeclaration::new("--contrast-color", Some(contrast.result.name().to_string())),
    ];
    css_variables.extend(
        gradients
            .iter()
            .rev()
            .enumerate()
            .map(|(i, g)| StyleDeclaration::new(format!("--gradient-{}", (i + 1) * 100), Some(g.clone()))),
    );

    let triple = |color: Option<String>| color.as_deref().and_then(parse_rgb).map(normalize);
    let variable = ThemeVariables {
        primary: normalize(colors.rgb),
        secondary: triple(secondary),
        text: triple(text),
        contrast: contrast.result.rgb(),
    };

    debug!(
        hex = %colors.hex,
        yiq = contrast.yiq,
        contrast = contrast.result.name(),
        stops = gradients.len(),
        "derived theme"
    );

    Theme {
        colors,
        contrast,
        gradients,
        css_variables,
        variable,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
