//! Gradient ramp seeded from a single hex color.
//!
//! Two passes, both 8 stops:
//!
//! ```text
//! pass 1 (hex space):  DARK_ANCHOR ──── #input ──── WHITE_ANCHOR
//!                          [0] [1] ...               ... [6] [7]
//!                               │                         │
//! pass 2 (rgb space):  rgb(pass1[1]) ── rgb(input) ── rgb(pass1[6])
//! ```
//!
//! The second pass pulls the ends in from pure dark gray and pure white, so
//! every stop keeps some of the input's hue. Its stops are the ramp.

use tinter_color::convert::hex_to_rgb;
use tinter_color::{
    ColorError, ColorModel, ColorValue, GradientFormat, RawInput, convert, interpolate, rgb_string,
    validate,
};
use tracing::{debug, warn};

/// Number of stops in a ramp.
pub const GRADIENT_STOPS: usize = 8;

/// Dark end of the first pass.
pub const DARK_ANCHOR: &str = "#222222";

/// Light end of the first pass.
pub const WHITE_ANCHOR: &str = "#FFFFFF";

/// Build the 8-stop ramp for `hex` (six digits, no `#`), darkest first.
///
/// Returns an empty ramp when `hex` fails validation.
#[must_use]
pub fn generate_gradients(hex: &str) -> Vec<String> {
    if !validate(ColorModel::Hex, &RawInput::from(hex)) {
        warn!(hex, "gradient seed is not a valid hex color; ramp is empty");
        return Vec::new();
    }

    match ramp(hex) {
        Ok(stops) => {
            debug!(hex, ?stops, "generated gradient ramp");
            stops
        }
        Err(err) => {
            warn!(hex, %err, "gradient interpolation failed; ramp is empty");
            Vec::new()
        }
    }
}

fn ramp(hex: &str) -> Result<Vec<String>, ColorError> {
    let seed = format!("#{hex}");
    let first = interpolate(
        GRADIENT_STOPS,
        GradientFormat::Hex,
        &[DARK_ANCHOR, seed.as_str(), WHITE_ANCHOR],
    )?;

    let anchors = [
        rgb_string(hex_to_rgb(&first[1])),
        rgb_string(convert(&ColorValue::Hex(hex.to_string())).rgb),
        rgb_string(hex_to_rgb(&first[GRADIENT_STOPS - 2])),
    ];
    interpolate(GRADIENT_STOPS, GradientFormat::Rgb, &anchors)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
