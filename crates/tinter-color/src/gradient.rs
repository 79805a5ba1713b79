// SPDX-License-Identifier: MIT
//
// Gradient interpolation between anchor colors.
//
// Anchors are spread evenly over [0, 1] and stops are sampled at even
// intervals across the same range, blending linearly in 8-bit RGB between
// the two anchors that bracket each stop. The first and last stops land
// exactly on the first and last anchors.
//
//   anchors:  A ─────────── B ─────────── C
//   stops:    0   1   2   3   4   5   6   7

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::convert::{hex_to_rgb, rgb_to_hex};
use crate::error::ColorError;
use crate::model::{parse_rgb, rgb_string};
use crate::validate::is_hex;

/// Notation used for gradient anchors and the stops generated from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientFormat {
    /// `#RRGGBB`
    Hex,
    /// `rgb(r, g, b)`
    Rgb,
}

impl GradientFormat {
    fn parse(self, anchor: &str) -> Option<[f64; 3]> {
        match self {
            Self::Hex => {
                let digits = anchor.strip_prefix('#').unwrap_or(anchor);
                is_hex(digits).then(|| hex_to_rgb(digits))
            }
            Self::Rgb => parse_rgb(anchor),
        }
    }

    fn format(self, rgb: [f64; 3]) -> String {
        match self {
            Self::Hex => format!("#{}", rgb_to_hex(rgb)),
            Self::Rgb => rgb_string(rgb),
        }
    }
}

impl fmt::Display for GradientFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
        })
    }
}

/// Interpolate `stops` colors through `anchors`, in `format`.
///
/// # Errors
///
/// - [`ColorError::Stops`] when `stops` is zero or fewer than two anchors
///   are given.
/// - [`ColorError::Anchor`] when an anchor isn't valid `format` notation.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn interpolate<S: AsRef<str>>(
    stops: usize,
    format: GradientFormat,
    anchors: &[S],
) -> Result<Vec<String>, ColorError> {
    if stops == 0 || anchors.len() < 2 {
        return Err(ColorError::Stops {
            stops,
            anchors: anchors.len(),
        });
    }

    let points = anchors
        .iter()
        .map(|a| {
            let a = a.as_ref();
            format.parse(a).ok_or_else(|| ColorError::Anchor {
                format,
                anchor: a.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let segments = points.len() - 1;
    let gradient = (0..stops)
        .map(|i| {
            let t = if stops == 1 {
                0.0
            } else {
                i as f64 / (stops - 1) as f64
            };
            let pos = t * segments as f64;
            let seg = (pos.floor() as usize).min(segments - 1);
            let local = pos - seg as f64;
            let (from, to) = (points[seg], points[seg + 1]);
            let rgb: [f64; 3] =
                std::array::from_fn(|c| (to[c] - from[c]).mul_add(local, from[c]).round());
            format.format(rgb)
        })
        .collect();

    Ok(gradient)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
