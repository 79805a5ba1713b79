// SPDX-License-Identifier: MIT
//
// tinter-color — the color model layer for tinter.
//
// Four representations (hex, RGB, HSL, CMYK), a validator that checks raw
// user input against each model's domain, and a converter that turns any
// one of them into all four. The theme crate builds on top of this; nothing
// here knows about contrast or style variables.
//
//   model.rs     registry: arity, channel bounds, display notation
//   validate.rs  raw input → yes/no (and → typed value)
//   convert.rs   pairwise routines + ColorSet facade
//   gradient.rs  linear interpolation through anchor colors

pub mod convert;
pub mod error;
pub mod gradient;
pub mod model;
pub mod validate;

pub use convert::{ColorSet, convert, normalize};
pub use error::ColorError;
pub use gradient::{GradientFormat, interpolate};
pub use model::{ColorModel, ColorValue, InputKind, RawChannel, RawInput, parse_rgb, rgb_string};
pub use validate::{is_hex, validate};
