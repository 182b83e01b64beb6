//! # tonal-engine: palette derivation from a single color
//!
//! Takes one base color (and optionally a secondary) and derives everything
//! a design system needs from it: a ten-stop tonal scale, six harmony sets,
//! semantic role colors, descriptive metadata, WCAG contrast metrics,
//! accessible text pairings, a temperature class and CSS gradients.
//!
//! # Architecture
//!
//! ```text
//! base Color (+ optional secondary)
//!     │
//!     ├─▶ scale.rs:       white → base → black in OKLCH, 10 stops
//!     ├─▶ harmony.rs:     HSL hue rotations at fixed offsets
//!     ├─▶ contrast.rs:    WCAG luminance, ratios, AA/AAA, text pairings
//!     ├─▶ info.rs:        hex/RGB/HSL/Lab snapshot + nearest name
//!     ├─▶ semantic.rs:    role colors (primary … foreground)
//!     ├─▶ temperature.rs: warm / cool bucket by hue
//!     └─▶ gradient.rs:    CSS gradient strings
//!              │
//!              ▼
//!     palette.rs: CompletePalette aggregate
//! ```
//!
//! Every derivation is a pure function of its inputs. Nothing here performs
//! I/O, holds state between calls or returns an error: invalid input is
//! rejected earlier, by [`tonal_color::parse_color`].

// Hue and lightness names (h, s, l) are inherently similar.
#![allow(clippy::similar_names)]
// Stop indices are tiny; the casts never lose anything.
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

pub mod contrast;
pub mod gradient;
pub mod harmony;
pub mod info;
pub mod palette;
pub mod scale;
pub mod semantic;
pub mod temperature;

pub use contrast::{
    AccessibilityMetrics, AccessibleCombinations, accessibility, accessible_combinations,
    contrast_ratio, relative_luminance,
};
pub use gradient::{GradientSet, generate_gradients};
pub use harmony::{Harmony, HarmonySet, generate_harmony};
pub use info::{ColorInfo, closest_named_color, describe};
pub use palette::{CompletePalette, generate_complete_palette};
pub use scale::{Scale, Stop, generate_scale, generate_scale_with_steps};
pub use semantic::{SemanticPalette, semantic_palette};
pub use temperature::{Temperature, temperature};
pub use tonal_color::Color;
