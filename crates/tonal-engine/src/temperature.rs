//! Warm / cool classification by HSL hue.

use std::fmt;

use serde::Serialize;
use tonal_color::Color;

/// Perceived temperature of a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Temperature {
    Warm,
    Cool,
    /// Only reachable for a hue outside [0, 360], which `Color` never reports.
    Neutral,
}

impl Temperature {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Warm => "warm",
            Self::Cool => "cool",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify a color by hue: reds through yellows (0–60°) and magentas
/// (300–360°) are warm, the rest of the wheel is cool.
///
/// Achromatic colors have hue 0 and therefore count as warm.
#[must_use]
pub fn temperature(color: Color) -> Temperature {
    classify_hue(color.hue())
}

fn classify_hue(hue: f64) -> Temperature {
    if (0.0..=60.0).contains(&hue) || (300.0..=360.0).contains(&hue) {
        Temperature::Warm
    } else if (60.0..=300.0).contains(&hue) {
        Temperature::Cool
    } else {
        Temperature::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn buckets() {
        assert_eq!(temperature(Color::hsl(0.0, 1.0, 0.5)), Temperature::Warm);
        assert_eq!(temperature(Color::hsl(45.0, 1.0, 0.5)), Temperature::Warm);
        assert_eq!(temperature(Color::hsl(120.0, 1.0, 0.5)), Temperature::Cool);
        assert_eq!(temperature(Color::hsl(240.0, 1.0, 0.5)), Temperature::Cool);
        assert_eq!(temperature(Color::hsl(330.0, 1.0, 0.5)), Temperature::Warm);
    }

    #[test]
    fn boundaries() {
        assert_eq!(classify_hue(60.0), Temperature::Warm);
        assert_eq!(classify_hue(60.5), Temperature::Cool);
        assert_eq!(classify_hue(300.0), Temperature::Warm);
        assert_eq!(classify_hue(299.5), Temperature::Cool);
    }

    #[test]
    fn grays_are_warm() {
        assert_eq!(temperature(Color::rgb8(0x80, 0x80, 0x80)), Temperature::Warm);
        assert_eq!(temperature(Color::WHITE), Temperature::Warm);
    }

    #[test]
    fn neutral_needs_an_impossible_hue() {
        assert_eq!(classify_hue(-1.0), Temperature::Neutral);
        assert_eq!(classify_hue(f64::NAN), Temperature::Neutral);
    }

    #[test]
    fn display() {
        assert_eq!(Temperature::Cool.to_string(), "cool");
    }
}
