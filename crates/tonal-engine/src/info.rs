//! Descriptive snapshot of a color: coordinates, a human name, and how it
//! reads against white.

use serde::Serialize;
use tonal_color::{Color, named_colors};
use tonal_color::names::from_packed;

use crate::contrast::{contrast_ratio, relative_luminance};

/// Name reported when no swatch is close enough.
pub const CUSTOM_COLOR: &str = "Custom Color";

/// CIE76 distance at which two colors stop looking the same.
pub const JUST_NOTICEABLE_DIFFERENCE: f64 = 2.3;

/// Named swatches used for [`ColorInfo::name`], as `(0xRRGGBB, name)`.
const SWATCHES: [(u32, &str); 20] = [
    (0xff0000, "Red"),
    (0x00ff00, "Green"),
    (0x0000ff, "Blue"),
    (0xffff00, "Yellow"),
    (0xff00ff, "Magenta"),
    (0x00ffff, "Cyan"),
    (0xffffff, "White"),
    (0x000000, "Black"),
    (0x808080, "Gray"),
    (0xffa500, "Orange"),
    (0x800080, "Purple"),
    (0x008000, "Green"),
    (0xffc0cb, "Pink"),
    (0xa52a2a, "Brown"),
    (0x000080, "Navy"),
    (0x008080, "Teal"),
    (0x800000, "Maroon"),
    (0x808000, "Olive"),
    (0xc0c0c0, "Silver"),
    (0xffd700, "Gold"),
];

/// Everything worth showing about one color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorInfo {
    pub hex: String,
    pub rgb: [u8; 3],
    /// Hue in degrees, saturation and lightness as fractions.
    pub hsl: [f64; 3],
    pub lab: [f64; 3],
    pub name: &'static str,
    pub luminance: f64,
    /// Contrast ratio against pure white.
    pub contrast: f64,
}

/// Describe a color.
///
/// The name is the nearest of a small set of familiar swatches when the
/// color is indistinguishable from it, otherwise [`CUSTOM_COLOR`].
#[must_use]
pub fn describe(color: Color) -> ColorInfo {
    let (r, g, b) = color.to_rgb8();
    ColorInfo {
        hex: color.to_hex(),
        rgb: [r, g, b],
        hsl: color.to_hsl().to_array(),
        lab: color.to_lab().to_array(),
        name: swatch_name(color),
        luminance: relative_luminance(color),
        contrast: contrast_ratio(color, Color::WHITE),
    }
}

fn swatch_name(color: Color) -> &'static str {
    let lab = color.to_lab();
    SWATCHES
        .iter()
        .map(|&(rgb, name)| (name, lab.delta_e(from_packed(rgb).to_lab())))
        .filter(|&(_, d)| d <= JUST_NOTICEABLE_DIFFERENCE)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map_or(CUSTOM_COLOR, |(name, _)| name)
}

/// The CSS named color nearest to `color`, with its CIE76 distance.
///
/// Always returns something; exact matches have distance 0.
#[must_use]
pub fn closest_named_color(color: Color) -> (&'static str, f64) {
    let lab = color.to_lab();
    named_colors()
        .map(|(name, c)| (name, lab.delta_e(c.to_lab())))
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .unwrap_or(("black", f64::INFINITY))
}
