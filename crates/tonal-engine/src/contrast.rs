//! WCAG contrast metrics and accessible text pairings.
//!
//! Readability is judged in sRGB relative luminance (the WCAG definition).
//! A color is AA/AAA compliant when it contrasts enough against *either*
//! pure white or pure black: it is treated as a background that needs
//! legible text of the opposite extreme.
//!
//! - AA: max(contrast vs white, contrast vs black) >= 4.5
//! - AAA: the same maximum >= 7.0

use serde::Serialize;
use tonal_color::Color;
use tonal_color::space::srgb_to_linear;

/// Minimum contrast ratio for WCAG AA normal text.
pub const AA_THRESHOLD: f64 = 4.5;

/// Minimum contrast ratio for WCAG AAA normal text.
pub const AAA_THRESHOLD: f64 = 7.0;

/// Luminance above which a color counts as light for text pairing.
const LIGHT_LUMINANCE: f64 = 0.5;

/// Red, green and blue weights of relative luminance.
const LUMA_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// Viewing flare added to both luminances of a contrast ratio.
const FLARE: f64 = 0.05;

/// WCAG 2.1 relative luminance: the Rec. 709 weighted sum of the
/// linearized channels. 0 for black, 1 for white.
#[must_use]
pub fn relative_luminance(color: Color) -> f64 {
    let [r, g, b] = color.to_srgb().into();
    let [wr, wg, wb] = LUMA_WEIGHTS;
    wb.mul_add(srgb_to_linear(b), wr.mul_add(srgb_to_linear(r), wg * srgb_to_linear(g)))
}

/// WCAG 2.1 contrast ratio, `(L1 + 0.05) / (L2 + 0.05)` with L1 the
/// lighter of the two. Symmetric, in [1, 21].
#[must_use]
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let (la, lb) = (relative_luminance(a), relative_luminance(b));
    (la.max(lb) + FLARE) / (la.min(lb) + FLARE)
}

// ─── Accessibility Metrics ───────────────────────────────────────────────────

/// Contrast summary of one color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilityMetrics {
    pub luminance: f64,
    pub contrast_white: f64,
    pub contrast_black: f64,
    pub aa: bool,
    pub aaa: bool,
}

/// Measure a color against pure white and pure black.
#[must_use]
pub fn accessibility(color: Color) -> AccessibilityMetrics {
    let contrast_white = contrast_ratio(color, Color::WHITE);
    let contrast_black = contrast_ratio(color, Color::BLACK);
    let best = contrast_white.max(contrast_black);
    AccessibilityMetrics {
        luminance: relative_luminance(color),
        contrast_white,
        contrast_black,
        aa: best >= AA_THRESHOLD,
        aaa: best >= AAA_THRESHOLD,
    }
}

// ─── Accessible Combinations ─────────────────────────────────────────────────

/// Text colors and contrast variants to pair with a background color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibleCombinations {
    pub text_on_light: Color,
    pub text_on_dark: Color,
    /// The color pushed two Lab steps away from its own luminance.
    pub high_contrast: Color,
    /// Half a Lab step away.
    pub low_contrast: Color,
}

/// Suggest text pairings for `color` used as a background.
///
/// Light colors (luminance > 0.5) get black text and darker variants; dark
/// colors get white text and brighter variants.
#[must_use]
pub fn accessible_combinations(color: Color) -> AccessibleCombinations {
    if relative_luminance(color) > LIGHT_LUMINANCE {
        AccessibleCombinations {
            text_on_light: Color::BLACK,
            text_on_dark: Color::WHITE,
            high_contrast: color.darken(2.0),
            low_contrast: color.darken(0.5),
        }
    } else {
        AccessibleCombinations {
            text_on_light: Color::WHITE,
            text_on_dark: Color::BLACK,
            high_contrast: color.brighten(2.0),
            low_contrast: color.brighten(0.5),
        }
    }
}
