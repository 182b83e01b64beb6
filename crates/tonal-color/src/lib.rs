// SPDX-License-Identifier: MIT
//
// tonal-color: the color value type underneath the tonal palette engine.
//
// A `Color` is an immutable sRGB value with on-demand views in HSL, CIE
// Lab/LCh and Oklab/OKLCH. All conversion math lives in `space`; nothing
// else in the workspace multiplies a matrix or applies a transfer curve.
//
// Modules:
//
//   space  → pure color-space conversion functions on f64 tuples
//   color  → the Color value, coordinate views, brighten/darken/hue ops
//   parse  → user input grammars (hex, rgb(), hsl(), names) and errors
//   names  → the CSS named-color table

pub mod color;
pub mod names;
pub mod parse;
pub mod space;

pub use color::{Color, Hsl, LAB_STEP, Lab, Lch, Oklab, Oklch};
pub use names::{named_color, named_colors};
pub use parse::{ParseColorError, parse_color};
