//! # tinter-theme — theme derivation from a single color
//!
//! Takes one color in any model and derives everything a UI theme needs:
//! a black/white contrast decision, an 8-stop gradient ramp, six named
//! style variables plus one per ramp stop, and a bundle of normalized
//! channel triples.
//!
//! # Architecture
//!
//! ```text
//! ColorValue (hex | rgb | hsl | cmyk)
//!     │
//!     ▼
//! tinter_color::convert:  ColorSet (all four models)
//!     │
//!     ├──► contrast.rs:   YIQ black/white decision, WCAG luminance grading
//!     │
//!     ├──► gradient.rs:   two-pass interpolated ramp seeded from the hex
//!     │
//!     ▼
//! theme.rs:               assemble Theme (declarations + variable bundle)
//!     │
//!     ▼
//! surface.rs:             push a Theme onto a caller-supplied Surface
//! ```
//!
//! Everything up to `surface.rs` is pure: the same input always yields the
//! same `Theme`.

// Single-char channel names (r, g, b) are standard in color math.
#![allow(clippy::many_single_char_names)]

pub mod contrast;
pub mod gradient;
pub mod surface;
pub mod theme;

pub use contrast::{
    Contrast, ContrastInput, ContrastLevels, ContrastResult, calculate_contrast, get_luminance,
    yiq_contrast_ratio,
};
pub use gradient::generate_gradients;
pub use surface::{Surface, apply_theme, calculate_color};
pub use theme::{StyleDeclaration, Theme, ThemeVariables, generate_css_color};
