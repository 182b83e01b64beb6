// SPDX-License-Identifier: MIT
//
// Color input parsing.
//
// Accepted grammars, tried in order on the trimmed input:
//
//   name                  CSS named color, case-insensitive
//   #rgb #rgba #rrggbb #rrggbbaa   (the `#` is optional)
//   rgb(r, g, b)  rgba(r, g, b, a)  : commas or spaces, `/` before alpha
//   hsl(h, s%, l%)  hsla(h, s%, l%, a) : `%` optional, `deg` suffix allowed
//
// Values that match a grammar but sit outside their range are clamped
// (channels, saturation, lightness, alpha) or wrapped (hue), never rejected.
// Anything else is `InvalidColorInput`.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use thiserror::Error;

use crate::color::Color;
use crate::names::named_color;

/// The single failure mode of color parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// The input matched none of the supported grammars.
    #[error("invalid color input {input:?}: expected a hex, rgb(), hsl() or named color")]
    InvalidColorInput { input: String },
}

const NUM: &str = r"([+-]?(?:\d+(?:\.\d*)?|\.\d+))";
const SEP: &str = r"\s*(?:,\s*|\s+)";
const ALPHA: &str = r"(?:\s*[,/]\s*([+-]?(?:\d+(?:\.\d*)?|\.\d+))(%?))?";

static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(r"(?i)^rgba?\(\s*{NUM}{SEP}{NUM}{SEP}{NUM}{ALPHA}\s*\)$");
    Regex::new(&pattern).expect("rgb() pattern is a valid regex")
});

static HSL_RE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(r"(?i)^hsla?\(\s*{NUM}(?:deg)?{SEP}{NUM}%?{SEP}{NUM}%?{ALPHA}\s*\)$");
    Regex::new(&pattern).expect("hsl() pattern is a valid regex")
});

/// Parse a color from user input.
///
/// # Errors
///
/// Returns [`ParseColorError::InvalidColorInput`] when the input matches
/// none of the supported grammars.
///
/// # Examples
///
/// ```
/// use tonal_color::parse_color;
///
/// assert_eq!(parse_color("#F6F0C2").unwrap().to_hex(), "#f6f0c2");
/// assert_eq!(parse_color("rgb(255, 0, 0)").unwrap().to_hex(), "#ff0000");
/// assert_eq!(parse_color("hsl(120, 100%, 25%)").unwrap().to_hex(), "#008000");
/// assert!(parse_color("not-a-color").is_err());
/// ```
pub fn parse_color(input: &str) -> Result<Color, ParseColorError> {
    let trimmed = input.trim();

    let parsed = if trimmed.eq_ignore_ascii_case("transparent") {
        Some(Color::TRANSPARENT)
    } else {
        named_color(trimmed)
            .or_else(|| Color::hex(trimmed))
            .or_else(|| RGB_RE.captures(trimmed).and_then(|caps| rgb_from_captures(&caps)))
            .or_else(|| HSL_RE.captures(trimmed).and_then(|caps| hsl_from_captures(&caps)))
    };

    parsed.ok_or_else(|| {
        tracing::debug!(input, "rejected color input");
        ParseColorError::InvalidColorInput {
            input: input.to_owned(),
        }
    })
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

/// A numeric component. Digit runs too long for an f64 overflow to
/// infinity and are rejected rather than clamped.
fn number(caps: &Captures<'_>, idx: usize) -> Option<f64> {
    finite(caps.get(idx)?.as_str())
}

fn finite(raw: &str) -> Option<f64> {
    raw.parse().ok().filter(|v: &f64| v.is_finite())
}

/// Alpha from captures 4 (value) and 5 (`%`); absent means opaque.
fn alpha(caps: &Captures<'_>) -> Option<f64> {
    match caps.get(4) {
        None => Some(1.0),
        Some(m) => {
            let value = finite(m.as_str())?;
            let percent = caps.get(5).is_some_and(|p| !p.as_str().is_empty());
            Some(if percent { value / 100.0 } else { value })
        }
    }
}

fn rgb_from_captures(caps: &Captures<'_>) -> Option<Color> {
    let channel = |idx| number(caps, idx).map(|v| v.clamp(0.0, 255.0) / 255.0);
    Some(Color::srgba(channel(1)?, channel(2)?, channel(3)?, alpha(caps)?))
}

fn hsl_from_captures(caps: &Captures<'_>) -> Option<Color> {
    let h = number(caps, 1)?;
    let s = number(caps, 2)?.clamp(0.0, 100.0) / 100.0;
    let l = number(caps, 3)?.clamp(0.0, 100.0) / 100.0;
    Some(Color::hsla(h, s, l, alpha(caps)?))
}

// ─── Tests ───────────────────────────────────────────────────────────────────
