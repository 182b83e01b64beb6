//! Tonal scale generation.
//!
//! A scale is a three-point gradient white → base → black interpolated in
//! OKLCH, sampled at evenly spaced positions and mapped onto ten fixed
//! stops. Stop 500 is always the base color verbatim, whatever the sampling
//! produced at the midpoint. Every other stop is snapped to 8-bit sRGB, so
//! a stop's views (HSL, OKLCH) match what its hex string would parse to.
//!
//! If interpolation cannot run (too few samples, or a base with non-finite
//! channels), generation degrades to a fixed brighten/darken ladder in CIE
//! Lab instead of failing.

use std::fmt;
use std::ops::Index;

use serde::ser::{Serialize, SerializeMap, Serializer};
use thiserror::Error;
use tonal_color::{Color, Oklch};

/// Number of gradient samples in a default scale.
pub const DEFAULT_STEPS: usize = 9;

// ─── Stops ───────────────────────────────────────────────────────────────────

/// One of the ten fixed stops of a tonal scale, lightest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stop {
    S50,
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
}

impl Stop {
    /// Every stop in order, 50 through 900.
    pub const ALL: [Self; 10] = [
        Self::S50,
        Self::S100,
        Self::S200,
        Self::S300,
        Self::S400,
        Self::S500,
        Self::S600,
        Self::S700,
        Self::S800,
        Self::S900,
    ];

    /// The numeric label (50, 100, …, 900).
    #[must_use]
    pub const fn label(self) -> u16 {
        match self {
            Self::S50 => 50,
            Self::S100 => 100,
            Self::S200 => 200,
            Self::S300 => 300,
            Self::S400 => 400,
            Self::S500 => 500,
            Self::S600 => 600,
            Self::S700 => 700,
            Self::S800 => 800,
            Self::S900 => 900,
        }
    }

    /// Parse a numeric label back into a stop.
    #[must_use]
    pub fn from_label(label: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }

    /// Position in [`Stop::ALL`].
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Multiplier for the Lab fallback ladder: positive brightens, negative
    /// darkens, zero is the base.
    const fn fallback_amount(self) -> f64 {
        match self {
            Self::S50 => 2.0,
            Self::S100 => 1.5,
            Self::S200 => 1.0,
            Self::S300 => 0.5,
            Self::S400 => 0.2,
            Self::S500 => 0.0,
            Self::S600 => -0.2,
            Self::S700 => -0.5,
            Self::S800 => -1.0,
            Self::S900 => -1.5,
        }
    }
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ─── Scale ───────────────────────────────────────────────────────────────────

/// A ten-stop tonal scale. Indexable by [`Stop`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scale {
    colors: [Color; 10],
}

impl Scale {
    /// The base color (stop 500).
    #[must_use]
    pub const fn base(&self) -> Color {
        self.colors[Stop::S500.index()]
    }

    /// Color at a stop.
    #[must_use]
    pub const fn get(&self, stop: Stop) -> Color {
        self.colors[stop.index()]
    }

    /// Iterate `(stop, color)` pairs from 50 to 900.
    pub fn iter(&self) -> impl Iterator<Item = (Stop, Color)> + '_ {
        Stop::ALL.into_iter().zip(self.colors.iter().copied())
    }

    /// The colors in stop order.
    #[must_use]
    pub const fn colors(&self) -> &[Color; 10] {
        &self.colors
    }
}

impl Index<Stop> for Scale {
    type Output = Color;

    fn index(&self, stop: Stop) -> &Color {
        &self.colors[stop.index()]
    }
}

impl Serialize for Scale {
    /// Serializes as a map from stop label to hex string, in stop order.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Stop::ALL.len()))?;
        for (stop, color) in self.iter() {
            map.serialize_entry(&stop.label().to_string(), &color)?;
        }
        map.end()
    }
}

// ─── Generation ──────────────────────────────────────────────────────────────

/// Why OKLCH interpolation could not produce a scale.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScaleError {
    #[error("a scale needs at least 2 samples, got {steps}")]
    TooFewSteps { steps: usize },
    #[error("base color {base} has non-finite channels")]
    NonFiniteBase { base: Color },
}

/// Generate a ten-stop scale from nine gradient samples.
///
/// # Examples
///
/// ```
/// use tonal_color::Color;
/// use tonal_engine::{generate_scale, Stop};
///
/// let base = Color::hex("#F6F0C2").unwrap();
/// let scale = generate_scale(base);
/// assert_eq!(scale[Stop::S500], base);
/// assert_eq!(scale[Stop::S50].to_hex(), "#ffffff");
/// ```
#[must_use]
pub fn generate_scale(base: Color) -> Scale {
    generate_scale_with_steps(base, DEFAULT_STEPS)
}

/// Generate a scale from `steps` gradient samples.
///
/// With nine samples the stops 50–400 take samples 0–4 and 600–900 take
/// samples 5–8. Other sample counts are resampled onto the same nine
/// positions. Never fails: when interpolation is impossible the Lab
/// fallback ladder is returned and a warning is logged.
#[must_use]
pub fn generate_scale_with_steps(base: Color, steps: usize) -> Scale {
    match oklch_scale(base, steps) {
        Ok(scale) => scale,
        Err(err) => {
            tracing::warn!(%err, "scale interpolation failed, using fallback");
            fallback_scale(base)
        }
    }
}

/// The fallback ladder: each stop brightened or darkened from the base by a
/// fixed multiple of the Lab lightness step.
#[must_use]
pub fn fallback_scale(base: Color) -> Scale {
    let mut colors = [base; 10];
    for stop in Stop::ALL {
        let amount = stop.fallback_amount();
        if amount > 0.0 {
            colors[stop.index()] = base.brighten(amount).quantize();
        } else if amount < 0.0 {
            colors[stop.index()] = base.darken(-amount).quantize();
        }
    }
    Scale { colors }
}

fn oklch_scale(base: Color, steps: usize) -> Result<Scale, ScaleError> {
    if steps < 2 {
        return Err(ScaleError::TooFewSteps { steps });
    }
    if !base.is_finite() {
        return Err(ScaleError::NonFiniteBase { base });
    }

    let gradient = Gradient3::new(Color::WHITE.to_oklch(), base.to_oklch(), Color::BLACK.to_oklch());
    // Only the nine sampled positions are ever evaluated, whatever `steps`.
    let last = (steps - 1) as f64;
    let mut colors = [base; 10];
    let non_base = Stop::ALL.into_iter().filter(|&s| s != Stop::S500);
    for (k, stop) in non_base.enumerate() {
        let idx = (k as f64 * last / 8.0).round().min(last);
        colors[stop.index()] = Color::from_oklch(gradient.at(idx / last), 1.0).quantize();
    }
    Ok(Scale { colors })
}

/// Piecewise-linear OKLCH gradient through three evenly spaced colors.
struct Gradient3 {
    start: Oklch,
    mid: Oklch,
    end: Oklch,
}

impl Gradient3 {
    const fn new(start: Oklch, mid: Oklch, end: Oklch) -> Self {
        Self { start, mid, end }
    }

    fn at(&self, t: f64) -> Oklch {
        if t <= 0.5 {
            self.start.mix(self.mid, t * 2.0)
        } else {
            self.mid.mix(self.end, t.mul_add(2.0, -1.0))
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn hex(s: &str) -> Color {
        Color::hex(s).unwrap()
    }

    fn lightness(c: Color) -> f64 {
        c.to_oklch().l
    }

    // ── Stops ────────────────────────────────────────────────────────

    #[test]
    fn stop_labels_in_order() {
        let labels: Vec<u16> = Stop::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec![50, 100, 200, 300, 400, 500, 600, 700, 800, 900]);
    }

    #[test]
    fn stop_from_label() {
        assert_eq!(Stop::from_label(700), Some(Stop::S700));
        assert_eq!(Stop::from_label(750), None);
    }

    #[test]
    fn stop_index_matches_all() {
        for (i, stop) in Stop::ALL.iter().enumerate() {
            assert_eq!(stop.index(), i);
        }
    }

    // ── OKLCH scale ──────────────────────────────────────────────────

    #[test]
    fn base_is_stop_500_verbatim() {
        let base = hex("#F6F0C2");
        let scale = generate_scale(base);
        assert_eq!(scale[Stop::S500].to_hex(), "#f6f0c2");
        assert_eq!(scale.base(), base);
    }

    #[test]
    fn endpoints_are_white_and_black() {
        let scale = generate_scale(hex("#3b82f6"));
        assert_eq!(scale[Stop::S50].to_hex(), "#ffffff");
        assert_eq!(scale[Stop::S900].to_hex(), "#000000");
    }

    #[test]
    fn stop_400_sits_on_the_base() {
        let base = hex("#3b82f6");
        let scale = generate_scale(base);
        assert!(scale[Stop::S400].delta_e(base) < 1.0, "400 = {:?}", scale[Stop::S400]);
    }

    #[test]
    fn lightness_decreases_with_label() {
        let scale = generate_scale(hex("#10b981"));
        let ls: Vec<f64> = scale.iter().map(|(_, c)| lightness(c)).collect();
        for pair in ls.windows(2) {
            assert!(pair[0] >= pair[1] - 1e-3, "not monotone: {ls:?}");
        }
        assert!(ls[0] > ls[5] && ls[5] > ls[9], "{ls:?}");
    }

    #[test]
    fn midtones_keep_the_hue() {
        let base = hex("#ef4444");
        let scale = generate_scale(base);
        let h = base.to_oklch().h;
        for stop in [Stop::S200, Stop::S300, Stop::S700] {
            let got = scale[stop].to_oklch().h;
            let diff = tonal_color::space::hue_diff(h, got).abs();
            assert!(diff < 5.0, "stop {stop} hue {got} vs {h}");
        }
    }

    #[test]
    fn gray_base_stays_gray() {
        let scale = generate_scale(hex("#808080"));
        for (stop, c) in scale.iter() {
            let (r, g, b) = c.to_rgb8();
            assert!(r.abs_diff(g) <= 1 && g.abs_diff(b) <= 1, "stop {stop}: {c:?}");
        }
    }

    #[test]
    fn nine_steps_is_the_default() {
        let base = hex("#f59e0b");
        assert_eq!(generate_scale(base), generate_scale_with_steps(base, 9));
    }

    #[test]
    fn other_step_counts_resample() {
        let base = hex("#f59e0b");
        let coarse = generate_scale_with_steps(base, 3);
        // Three samples: white, base, black.
        assert_eq!(coarse[Stop::S50].to_hex(), "#ffffff");
        assert_eq!(coarse[Stop::S900].to_hex(), "#000000");
        assert_eq!(coarse[Stop::S500], base);

        let fine = generate_scale_with_steps(base, 17);
        assert_eq!(fine[Stop::S50].to_hex(), "#ffffff");
        assert_eq!(fine[Stop::S900].to_hex(), "#000000");
        // 17 samples land on the same positions as 9.
        assert_eq!(fine, generate_scale(base));
    }

    // ── Fallback ─────────────────────────────────────────────────────

    #[test]
    fn too_few_steps_falls_back() {
        let base = hex("#3b82f6");
        assert_eq!(generate_scale_with_steps(base, 1), fallback_scale(base));
        assert_eq!(generate_scale_with_steps(base, 0), fallback_scale(base));
    }

    #[test]
    fn huge_step_counts_resample_without_allocating() {
        let base = hex("#3b82f6");
        for steps in [100_000_000_000, usize::MAX] {
            let scale = generate_scale_with_steps(base, steps);
            assert_eq!(scale[Stop::S50].to_hex(), "#ffffff", "steps {steps}");
            assert_eq!(scale[Stop::S500], base);
            assert_eq!(scale[Stop::S900].to_hex(), "#000000", "steps {steps}");
        }
    }

    #[test]
    fn non_finite_base_falls_back_without_panicking() {
        let broken = Color::srgb(f64::NAN, 0.5, 0.5);
        assert!(matches!(
            oklch_scale(broken, 9),
            Err(ScaleError::NonFiniteBase { .. })
        ));
        let scale = generate_scale(broken);
        assert_eq!(scale[Stop::S500], broken);
    }

    #[test]
    fn fallback_ladder_uses_lab_steps() {
        let base = hex("#3b82f6");
        let scale = fallback_scale(base);
        assert_eq!(scale[Stop::S500], base);
        assert_eq!(scale[Stop::S200], base.brighten(1.0));
        assert_eq!(scale[Stop::S800], base.darken(1.0));

        let ls: Vec<f64> = scale.iter().map(|(_, c)| c.to_lab().l).collect();
        for pair in ls.windows(2) {
            assert!(pair[0] >= pair[1], "fallback not monotone: {ls:?}");
        }
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ScaleError::TooFewSteps { steps: 1 }.to_string(),
            "a scale needs at least 2 samples, got 1"
        );
    }

    // ── Serialization ────────────────────────────────────────────────

    #[test]
    fn serializes_as_label_map() {
        let scale = generate_scale(hex("#f6f0c2"));
        let json = serde_json::to_value(scale).unwrap();
        assert_eq!(json["500"], "#f6f0c2");
        assert_eq!(json["50"], "#ffffff");
        assert_eq!(json.as_object().unwrap().len(), 10);
    }
}
