// SPDX-License-Identifier: MIT
//
// Text export formats for a tonal scale.
//
// Each format lists the ten stops under a variable prefix (`--brand-500`,
// `$brand-500`, `brand: { '500': … }`), followed by the secondary color
// when one was given:
//
//   css             :root { --name-500: #rrggbb; }
//   css-rgb         :root { --name-500: r, g, b; }
//   scss            $name-500: #rrggbb;
//   tailwind        module.exports config, hex values
//   tailwind-hsl    … hsl(H S% L%) values, rounded
//   tailwind-oklch  … oklch(L C H) values, three decimals
//   svg             one 100×50 rect per stop, stacked vertically
//
// JSON is the serialized complete palette rather than just the scale.

use tonal_color::Color;
use tonal_engine::{CompletePalette, Scale};

use crate::options::Format;

/// Height of one SVG swatch; the width is twice this.
const SVG_SWATCH_HEIGHT: usize = 50;

/// Turn a free-form name into a CSS/SCSS identifier fragment.
///
/// Lowercases, maps every run of non-alphanumerics to a single `-` and trims
/// dashes from the ends. Falls back to `color` when nothing is left.
#[must_use]
pub fn export_name(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    if out.is_empty() { "color".to_owned() } else { out }
}

/// Render a palette in one of the text formats.
///
/// # Errors
///
/// Only JSON serialization can fail.
pub fn render(format: Format, palette: &CompletePalette, name: &str) -> serde_json::Result<String> {
    let scale = &palette.scale;
    let secondary = palette.secondary;
    Ok(match format {
        Format::CssHex => css(scale, name, secondary, |c| c.to_hex()),
        Format::CssRgb => css(scale, name, secondary, rgb_triplet),
        Format::Scss => scss(scale, name, secondary),
        Format::TailwindHex => tailwind(scale, name, secondary, |c| c.to_hex()),
        Format::TailwindHsl => tailwind(scale, name, secondary, hsl_function),
        Format::TailwindOklch => tailwind(scale, name, secondary, oklch_function),
        Format::Svg => svg(scale, secondary),
        Format::Json => serde_json::to_string_pretty(palette)?,
        // Swatches are drawn by `swatch::render`; as text they read as JSON.
        Format::Swatch => serde_json::to_string_pretty(palette)?,
    })
}

// ─── Value Formats ───────────────────────────────────────────────────────────

fn rgb_triplet(c: Color) -> String {
    let (r, g, b) = c.to_rgb8();
    format!("{r}, {g}, {b}")
}

fn hsl_function(c: Color) -> String {
    let hsl = c.to_hsl();
    format!(
        "hsl({} {}% {}%)",
        hsl.h.round(),
        (hsl.s * 100.0).round(),
        (hsl.l * 100.0).round()
    )
}

fn oklch_function(c: Color) -> String {
    let lch = c.to_oklch();
    format!("oklch({:.3} {:.3} {:.3})", lch.l, lch.c, lch.h)
}

// ─── Templates ───────────────────────────────────────────────────────────────

fn css(scale: &Scale, name: &str, secondary: Option<Color>, value: impl Fn(Color) -> String) -> String {
    let mut lines = vec![":root {".to_owned()];
    lines.extend(scale.iter().map(|(stop, color)| format!("  --{name}-{stop}: {};", value(color))));
    if let Some(s) = secondary {
        lines.push(format!("  --secondary-color: {};", value(s)));
    }
    lines.push("}".to_owned());
    lines.join("\n")
}

fn scss(scale: &Scale, name: &str, secondary: Option<Color>) -> String {
    let mut lines: Vec<String> = scale
        .iter()
        .map(|(stop, color)| format!("${name}-{stop}: {color};"))
        .collect();
    if let Some(s) = secondary {
        lines.push(format!("$secondary-color: {s};"));
    }
    lines.join("\n")
}

fn tailwind(
    scale: &Scale,
    name: &str,
    secondary: Option<Color>,
    value: impl Fn(Color) -> String,
) -> String {
    let mut out = String::from("module.exports = {\n  theme: {\n    extend: {\n      colors: {\n");
    out.push_str(&format!("        '{name}': {{\n"));
    for (stop, color) in scale.iter() {
        out.push_str(&format!("          '{stop}': '{}',\n", value(color)));
    }
    out.push_str("        },\n");
    if let Some(s) = secondary {
        out.push_str(&format!("        secondary: '{}',\n", value(s)));
    }
    out.push_str("      },\n    },\n  },\n};");
    out
}

fn svg(scale: &Scale, secondary: Option<Color>) -> String {
    let width = SVG_SWATCH_HEIGHT * 2;
    let colors: Vec<Color> = scale.iter().map(|(_, c)| c).chain(secondary).collect();
    let height = colors.len() * SVG_SWATCH_HEIGHT;

    let mut lines = vec![format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\">"
    )];
    lines.extend(colors.iter().enumerate().map(|(i, color)| {
        format!(
            "  <rect x=\"0\" y=\"{}\" width=\"{width}\" height=\"{SVG_SWATCH_HEIGHT}\" fill=\"{color}\" />",
            i * SVG_SWATCH_HEIGHT
        )
    }));
    lines.push("</svg>".to_owned());
    lines.join("\n")
}

// ─── Tests ───────────────────────────────────────────────────────────────────
