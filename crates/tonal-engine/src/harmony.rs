//! Color harmony generation: pure hue math on the HSL wheel.
//!
//! Each harmony rotates the base hue by fixed offsets and rebuilds the color
//! at the base's own saturation and lightness, so every member shares the
//! base's weight and only the hue changes. Monochromatic is the exception:
//! hue and saturation stay fixed while lightness moves.
//!
//! All hue arithmetic wraps onto [0, 360): 350 − 30 is 320, never −10.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;
use tonal_color::Color;

/// The six harmony relationships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Harmony {
    /// Base and its opposite (0°, 180°).
    Complementary,
    /// Three hues evenly spaced (0°, 120°, 240°).
    Triadic,
    /// Four hues on a square (0°, 90°, 180°, 270°).
    Tetradic,
    /// Neighbours on either side (−30°, 0°, +30°).
    Analogous,
    /// Base plus the two neighbours of its complement (0°, 150°, 210°).
    SplitComplementary,
    /// One hue at three lightness offsets (+0.3, −0.1, −0.3).
    Monochromatic,
}

impl Harmony {
    /// Every harmony, in display order.
    pub const ALL: [Self; 6] = [
        Self::Complementary,
        Self::Triadic,
        Self::Tetradic,
        Self::Analogous,
        Self::SplitComplementary,
        Self::Monochromatic,
    ];

    /// Human-readable name (also what [`FromStr`] accepts).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Complementary => "complementary",
            Self::Triadic => "triadic",
            Self::Tetradic => "tetradic",
            Self::Analogous => "analogous",
            Self::SplitComplementary => "split-complementary",
            Self::Monochromatic => "monochromatic",
        }
    }

    /// Hue offsets in degrees. Empty for monochromatic.
    #[must_use]
    pub const fn hue_offsets(self) -> &'static [f64] {
        match self {
            Self::Complementary => &[0.0, 180.0],
            Self::Triadic => &[0.0, 120.0, 240.0],
            Self::Tetradic => &[0.0, 90.0, 180.0, 270.0],
            Self::Analogous => &[-30.0, 0.0, 30.0],
            Self::SplitComplementary => &[0.0, 150.0, 210.0],
            Self::Monochromatic => &[],
        }
    }
}

impl fmt::Display for Harmony {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A harmony name that matched nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown harmony {name:?}")]
pub struct UnknownHarmony {
    pub name: String,
}

impl FromStr for Harmony {
    type Err = UnknownHarmony;

    /// Case-insensitive; `_` and `-` are interchangeable and may be omitted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Self::ALL
            .into_iter()
            .find(|h| h.name().replace('-', "") == key)
            .ok_or_else(|| UnknownHarmony { name: s.to_owned() })
    }
}

/// Monochromatic lightness offsets, applied to HSL lightness and clamped.
const MONO_LIGHTNESS: [f64; 3] = [0.3, -0.1, -0.3];

/// All six harmonies of one base color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HarmonySet {
    pub complementary: [Color; 2],
    pub triadic: [Color; 3],
    pub tetradic: [Color; 4],
    pub analogous: [Color; 3],
    pub split_complementary: [Color; 3],
    pub monochromatic: [Color; 3],
}

impl HarmonySet {
    /// Members of one harmony.
    #[must_use]
    pub const fn get(&self, harmony: Harmony) -> &[Color] {
        match harmony {
            Harmony::Complementary => &self.complementary,
            Harmony::Triadic => &self.triadic,
            Harmony::Tetradic => &self.tetradic,
            Harmony::Analogous => &self.analogous,
            Harmony::SplitComplementary => &self.split_complementary,
            Harmony::Monochromatic => &self.monochromatic,
        }
    }

    /// Iterate `(harmony, members)` in [`Harmony::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Harmony, &[Color])> {
        Harmony::ALL.into_iter().map(|h| (h, self.get(h)))
    }
}

/// Generate every harmony of `base`.
///
/// Members at offset 0° are the base itself, not a rebuilt approximation.
/// Achromatic bases have hue 0.
#[must_use]
pub fn generate_harmony(base: Color) -> HarmonySet {
    HarmonySet {
        complementary: rotations(base, Harmony::Complementary),
        triadic: rotations(base, Harmony::Triadic),
        tetradic: rotations(base, Harmony::Tetradic),
        analogous: rotations(base, Harmony::Analogous),
        split_complementary: rotations(base, Harmony::SplitComplementary),
        monochromatic: MONO_LIGHTNESS.map(|dl| {
            let l = base.to_hsl().l + dl;
            base.with_hsl_lightness(l.clamp(0.0, 1.0))
        }),
    }
}

fn rotations<const N: usize>(base: Color, harmony: Harmony) -> [Color; N] {
    let offsets = harmony.hue_offsets();
    std::array::from_fn(|i| {
        let offset = offsets[i];
        if offset.abs() < f64::EPSILON { base } else { base.shift_hue(offset) }
    })
}

// ─── Tests ───────────────────────────────────────────────────────────────────
