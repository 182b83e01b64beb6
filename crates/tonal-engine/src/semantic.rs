//! Semantic role colors derived from a base.
//!
//! Roles tied to the brand (primary, secondary, accent, muted, background,
//! foreground) follow the base color. Status roles (success, warning,
//! error, info) are fixed so that they mean the same thing in every palette.

use serde::Serialize;
use tonal_color::Color;
use tonal_color::names::from_packed;

/// Hue rotation of the secondary role.
const SECONDARY_SHIFT: f64 = 30.0;
/// Hue rotation of the accent role.
const ACCENT_SHIFT: f64 = 60.0;
/// Chroma removed for the muted role, in Lab steps.
const MUTED_DESATURATE: f64 = 0.5;
/// Opacity of the background tint.
const BACKGROUND_ALPHA: f64 = 0.05;
/// Lab steps the foreground is darkened by.
const FOREGROUND_DARKEN: f64 = 2.0;

/// Fixed status colors as `0xRRGGBB`.
pub const SUCCESS: u32 = 0x10b981;
pub const WARNING: u32 = 0xf59e0b;
pub const ERROR: u32 = 0xef4444;
pub const INFO: u32 = 0x3b82f6;

/// The ten semantic roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SemanticPalette {
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub muted: Color,
    /// The base at 5% opacity; prints as `#rrggbb0d`.
    pub background: Color,
    pub foreground: Color,
}

impl SemanticPalette {
    /// `(role, color)` pairs in declaration order.
    #[must_use]
    pub const fn roles(&self) -> [(&'static str, Color); 10] {
        [
            ("primary", self.primary),
            ("secondary", self.secondary),
            ("accent", self.accent),
            ("success", self.success),
            ("warning", self.warning),
            ("error", self.error),
            ("info", self.info),
            ("muted", self.muted),
            ("background", self.background),
            ("foreground", self.foreground),
        ]
    }
}

/// Derive the semantic palette of `base`.
#[must_use]
pub fn semantic_palette(base: Color) -> SemanticPalette {
    SemanticPalette {
        primary: base,
        secondary: base.shift_hue(SECONDARY_SHIFT),
        accent: base.shift_hue(ACCENT_SHIFT),
        success: from_packed(SUCCESS),
        warning: from_packed(WARNING),
        error: from_packed(ERROR),
        info: from_packed(INFO),
        muted: base.desaturate(MUTED_DESATURATE),
        background: base.with_alpha(BACKGROUND_ALPHA),
        foreground: base.darken(FOREGROUND_DARKEN),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn hex(s: &str) -> Color {
        Color::hex(s).unwrap()
    }

    #[test]
    fn status_colors_are_fixed() {
        for base in ["#f6f0c2", "#000000", "#3b82f6"] {
            let p = semantic_palette(hex(base));
            assert_eq!(p.success.to_hex(), "#10b981");
            assert_eq!(p.warning.to_hex(), "#f59e0b");
            assert_eq!(p.error.to_hex(), "#ef4444");
            assert_eq!(p.info.to_hex(), "#3b82f6");
        }
    }

    #[test]
    fn primary_is_the_base() {
        let base = hex("#f6f0c2");
        assert_eq!(semantic_palette(base).primary, base);
    }

    #[test]
    fn secondary_and_accent_rotate_hue() {
        let p = semantic_palette(Color::hsl(200.0, 0.7, 0.5));
        assert!((p.secondary.hue() - 230.0).abs() < 1.0, "{}", p.secondary.hue());
        assert!((p.accent.hue() - 260.0).abs() < 1.0, "{}", p.accent.hue());
    }

    #[test]
    fn accent_wraps() {
        let p = semantic_palette(Color::hsl(330.0, 0.7, 0.5));
        assert!((p.accent.hue() - 30.0).abs() < 1.0, "{}", p.accent.hue());
    }

    #[test]
    fn background_is_a_faint_tint() {
        let p = semantic_palette(hex("#3b82f6"));
        assert_eq!(p.background.to_hex(), "#3b82f60d");
    }

    #[test]
    fn muted_has_less_chroma() {
        let base = hex("#ef4444");
        let p = semantic_palette(base);
        assert!(p.muted.to_lch().c < base.to_lch().c);
    }

    #[test]
    fn foreground_is_darker() {
        let base = hex("#f6f0c2");
        let p = semantic_palette(base);
        assert!(p.foreground.to_lab().l < base.to_lab().l - 30.0);
    }

    #[test]
    fn roles_in_order() {
        let names: Vec<&str> = semantic_palette(Color::WHITE).roles().iter().map(|r| r.0).collect();
        assert_eq!(names[0], "primary");
        assert_eq!(names[9], "foreground");
    }
}
