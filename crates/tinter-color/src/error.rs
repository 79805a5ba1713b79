// SPDX-License-Identifier: MIT
//
// Error type for the fallible edges of the color layer.
//
// Validation itself never errors (it answers yes/no) and conversion degrades
// instead of failing. Only the typed constructors and the gradient
// interpolator report a `ColorError`.

use thiserror::Error;

use crate::gradient::GradientFormat;
use crate::model::ColorModel;

/// Errors raised when building typed color values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Raw input does not satisfy the model's arity or channel bounds.
    #[error("invalid {model} value: {input}")]
    Invalid { model: ColorModel, input: String },

    /// A model name that is not one of hex, rgb, hsl, cmyk.
    #[error("unknown color model: {0:?}")]
    UnknownModel(String),

    /// A gradient anchor could not be parsed in the requested format.
    #[error("unparseable {format} gradient anchor: {anchor:?}")]
    Anchor { format: GradientFormat, anchor: String },

    /// A gradient was requested with too few stops or anchors.
    #[error("gradient needs at least 1 stop and 2 anchors (got {stops} stops, {anchors} anchors)")]
    Stops { stops: usize, anchors: usize },
}
