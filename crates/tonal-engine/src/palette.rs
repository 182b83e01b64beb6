//! The complete palette: every derivation of one base color at once.

use serde::Serialize;
use tonal_color::Color;

use crate::contrast::{AccessibilityMetrics, AccessibleCombinations, accessibility, accessible_combinations};
use crate::gradient::{GradientSet, generate_gradients};
use crate::harmony::{HarmonySet, generate_harmony};
use crate::info::{ColorInfo, describe};
use crate::scale::{Scale, generate_scale};
use crate::semantic::{SemanticPalette, semantic_palette};
use crate::temperature::{Temperature, temperature};

/// Every derivation of a base color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletePalette {
    pub base: Color,
    pub secondary: Option<Color>,
    pub scale: Scale,
    pub harmony: HarmonySet,
    pub info: ColorInfo,
    pub accessibility: AccessibilityMetrics,
    pub accessible: AccessibleCombinations,
    pub gradients: GradientSet,
    pub temperature: Temperature,
    pub semantic: SemanticPalette,
}

/// Derive everything from `base`. The secondary color only feeds the
/// gradients.
#[must_use]
pub fn generate_complete_palette(base: Color, secondary: Option<Color>) -> CompletePalette {
    tracing::debug!(%base, secondary = ?secondary, "generating complete palette");
    CompletePalette {
        base,
        secondary,
        scale: generate_scale(base),
        harmony: generate_harmony(base),
        info: describe(base),
        accessibility: accessibility(base),
        accessible: accessible_combinations(base),
        gradients: generate_gradients(base, secondary),
        temperature: temperature(base),
        semantic: semantic_palette(base),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::Stop;
    use pretty_assertions::assert_eq;

    #[test]
    fn parts_match_standalone_calls() {
        let base = Color::hex("#f6f0c2").unwrap();
        let p = generate_complete_palette(base, None);
        assert_eq!(p.scale, generate_scale(base));
        assert_eq!(p.harmony, generate_harmony(base));
        assert_eq!(p.info, describe(base));
        assert_eq!(p.semantic, semantic_palette(base));
        assert_eq!(p.temperature, Temperature::Warm);
        assert_eq!(p.scale[Stop::S500], base);
    }

    #[test]
    fn secondary_reaches_gradients() {
        let base = Color::hex("#3b82f6").unwrap();
        let second = Color::hex("#10b981").unwrap();
        let p = generate_complete_palette(base, Some(second));
        assert!(p.gradients.linear.ends_with("#10b981)"), "{}", p.gradients.linear);
        assert_eq!(p.secondary, Some(second));
    }

    #[test]
    fn serializes_every_section() {
        let p = generate_complete_palette(Color::hex("#ff0000").unwrap(), None);
        let json = serde_json::to_value(&p).unwrap();
        for key in [
            "base", "scale", "harmony", "info", "accessibility", "accessible", "gradients",
            "temperature", "semantic",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert_eq!(json["temperature"], "warm");
        assert_eq!(json["info"]["name"], "Red");
        assert_eq!(json["accessible"]["textOnLight"], "#ffffff");
    }
}
