// SPDX-License-Identifier: MIT
//
// tonal color value: sRGB storage with perceptual views.
//
// A `Color` stores gamma-encoded sRGB channels as fractions plus an alpha.
// sRGB is the canonical form because it is the one every input grammar and
// every output format speaks: a hex string parsed into a Color and printed
// back comes out byte-identical. All other coordinate systems (HSL, CIE
// Lab/LCh, Oklab/OKLCH) are views computed on demand through `space`.
//
// Operations that edit a color (brighten, darken, desaturate, hue shifts)
// always return a new value; a Color is never mutated in place.
#![allow(clippy::many_single_char_names)]

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::space;

/// Lab lightness step used by [`Color::brighten`] and [`Color::darken`], and
/// the LCh chroma step used by [`Color::saturate`] and [`Color::desaturate`].
pub const LAB_STEP: f64 = 18.0;

// ─── Coordinate Views ────────────────────────────────────────────────────────

/// HSL coordinates: hue in degrees [0, 360), saturation and lightness as
/// fractions in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// CIE L*a*b* coordinates (D65 white point).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

/// CIE LCh(ab) coordinates: the polar form of [`Lab`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Lch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

/// Oklab coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Oklab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

/// OKLCH coordinates: lightness in [0, 1], chroma in [0, ~0.37], hue in
/// degrees. The perceptually uniform space used for interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Oklch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

impl Hsl {
    /// The coordinates as an `[h, s, l]` triple.
    #[must_use]
    pub const fn to_array(self) -> [f64; 3] {
        [self.h, self.s, self.l]
    }
}

impl Lab {
    /// The coordinates as an `[L, a, b]` triple.
    #[must_use]
    pub const fn to_array(self) -> [f64; 3] {
        [self.l, self.a, self.b]
    }

    /// CIE76 color difference (Euclidean distance in Lab).
    ///
    /// A difference of about 2.3 is a just-noticeable difference.
    #[must_use]
    pub fn delta_e(self, other: Self) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        db.mul_add(db, dl.mul_add(dl, da * da)).sqrt()
    }
}

impl Oklch {
    /// Whether the chroma is too small for the hue to mean anything.
    #[inline]
    #[must_use]
    pub fn is_achromatic(self) -> bool {
        self.c < space::ACHROMATIC_CHROMA
    }

    /// Interpolate towards `other` in OKLCH.
    ///
    /// `t` = 0.0 returns `self`, `t` = 1.0 returns `other`. Hue takes the
    /// shortest path around the wheel; an achromatic endpoint has no hue of
    /// its own and adopts the other endpoint's.
    #[must_use]
    pub fn mix(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let inv_t = 1.0 - t;

        let h = if self.is_achromatic() {
            other.h
        } else if other.is_achromatic() {
            self.h
        } else {
            space::interpolate_hue(self.h, other.h, t)
        };

        Self {
            l: self.l.mul_add(inv_t, other.l * t),
            c: self.c.mul_add(inv_t, other.c * t),
            h,
        }
    }
}

// ─── Color ───────────────────────────────────────────────────────────────────

/// An immutable color value.
///
/// # Examples
///
/// ```
/// use tonal_color::Color;
///
/// let cream = Color::hex("#F6F0C2").unwrap();
/// assert_eq!(cream.to_hex(), "#f6f0c2");
///
/// let hsl = cream.to_hsl();
/// let complement = cream.shift_hue(180.0);
/// assert!((complement.to_hsl().l - hsl.l).abs() < 0.01);
/// ```
#[derive(Clone, Copy)]
pub struct Color {
    r: f64,
    g: f64,
    b: f64,
    alpha: f64,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Pure black.
    pub const BLACK: Self = Self::from_parts(0.0, 0.0, 0.0, 1.0);

    /// Pure white.
    pub const WHITE: Self = Self::from_parts(1.0, 1.0, 1.0, 1.0);

    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::from_parts(0.0, 0.0, 0.0, 0.0);

    const fn from_parts(r: f64, g: f64, b: f64, alpha: f64) -> Self {
        Self { r, g, b, alpha }
    }

    /// Create a color from sRGB fractions, clipping each channel to [0, 1].
    ///
    /// Infinities clip like any other out-of-range value. Only NaN survives,
    /// so that [`Color::is_finite`] can report it.
    #[must_use]
    pub fn srgb(r: f64, g: f64, b: f64) -> Self {
        Self::srgba(r, g, b, 1.0)
    }

    /// Create a color from sRGB fractions with alpha.
    #[must_use]
    pub fn srgba(r: f64, g: f64, b: f64, alpha: f64) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    /// Create a color from 8-bit sRGB values.
    #[must_use]
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgba8(r, g, b, u8::MAX)
    }

    /// Create a color from 8-bit sRGB values with 8-bit alpha.
    #[must_use]
    pub fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_parts(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
            f64::from(a) / 255.0,
        )
    }

    /// Create a color from a hex string.
    ///
    /// Supports `#RGB`, `#RGBA`, `#RRGGBB` and `#RRGGBBAA`, with or without
    /// the leading `#`. Returns `None` for anything else.
    #[must_use]
    pub fn hex(s: &str) -> Option<Self> {
        parse_hex(s)
    }

    /// Create a color from HSL: hue in degrees (wrapped), saturation and
    /// lightness as fractions (clamped to [0, 1]).
    #[must_use]
    pub fn hsl(h: f64, s: f64, l: f64) -> Self {
        Self::hsla(h, s, l, 1.0)
    }

    /// Create a color from HSL with alpha.
    #[must_use]
    pub fn hsla(h: f64, s: f64, l: f64, alpha: f64) -> Self {
        let (r, g, b) = space::hsl_to_srgb(h, s.clamp(0.0, 1.0), l.clamp(0.0, 1.0));
        Self::srgba(r, g, b, alpha)
    }

    /// Create a color from OKLCH, clipping out-of-gamut channels.
    #[must_use]
    pub fn oklch(l: f64, c: f64, h: f64) -> Self {
        let (r, g, b) = space::oklch_to_srgb(l, c.max(0.0), h);
        Self::srgb(r, g, b)
    }

    /// Create a color from CIE Lab (D65), clipping out-of-gamut channels.
    #[must_use]
    pub fn lab(l: f64, a: f64, b: f64) -> Self {
        let (r, g, bl) = space::lab_to_srgb(l, a, b);
        Self::srgb(r, g, bl)
    }

    /// Create a color from CIE LCh(ab), clipping out-of-gamut channels.
    #[must_use]
    pub fn lch(l: f64, c: f64, h: f64) -> Self {
        let (r, g, b) = space::lch_to_srgb(l, c.max(0.0), h);
        Self::srgb(r, g, b)
    }

    // ─── Channels ────────────────────────────────────────────────────────

    /// Red channel as a fraction.
    #[inline]
    #[must_use]
    pub const fn red(self) -> f64 {
        self.r
    }

    /// Green channel as a fraction.
    #[inline]
    #[must_use]
    pub const fn green(self) -> f64 {
        self.g
    }

    /// Blue channel as a fraction.
    #[inline]
    #[must_use]
    pub const fn blue(self) -> f64 {
        self.b
    }

    /// Alpha (opacity): 0.0 transparent to 1.0 opaque.
    #[inline]
    #[must_use]
    pub const fn alpha(self) -> f64 {
        self.alpha
    }

    /// Whether this color is fully opaque.
    #[inline]
    #[must_use]
    pub fn is_opaque(self) -> bool {
        self.alpha >= 1.0
    }

    /// Whether every channel is a finite number.
    #[must_use]
    pub const fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.alpha.is_finite()
    }

    /// Whether this color has no hue (a gray, black or white).
    #[must_use]
    pub fn is_achromatic(self) -> bool {
        self.to_hsl().s <= 0.0
    }

    // ─── Views ───────────────────────────────────────────────────────────

    /// sRGB fractions `(r, g, b)`.
    #[inline]
    #[must_use]
    pub const fn to_srgb(self) -> (f64, f64, f64) {
        (self.r, self.g, self.b)
    }

    /// 8-bit sRGB `(r, g, b)` with correct rounding.
    #[must_use]
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        (to_u8(self.r), to_u8(self.g), to_u8(self.b))
    }

    /// 8-bit sRGBA.
    #[must_use]
    pub fn to_rgba8(self) -> (u8, u8, u8, u8) {
        let (r, g, b) = self.to_rgb8();
        (r, g, b, to_u8(self.alpha))
    }

    /// Lowercase hex string: `#rrggbb`, or `#rrggbbaa` when alpha < 1.0.
    #[must_use]
    pub fn to_hex(self) -> String {
        let (r, g, b, a) = self.to_rgba8();
        if self.is_opaque() {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }

    /// Snap every channel to the nearest 8-bit value, as a hex round trip
    /// would.
    #[must_use]
    pub fn quantize(self) -> Self {
        let (r, g, b, a) = self.to_rgba8();
        Self::rgba8(r, g, b, a)
    }

    /// HSL view. Achromatic colors report hue 0.
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        let (h, s, l) = space::srgb_to_hsl(self.r, self.g, self.b);
        Hsl { h, s, l }
    }

    /// HSL hue in degrees [0, 360). Achromatic colors report 0.
    #[must_use]
    pub fn hue(self) -> f64 {
        self.to_hsl().h
    }

    /// CIE Lab (D65) view.
    #[must_use]
    pub fn to_lab(self) -> Lab {
        let (l, a, b) = space::srgb_to_lab(self.r, self.g, self.b);
        Lab { l, a, b }
    }

    /// CIE LCh(ab) view.
    #[must_use]
    pub fn to_lch(self) -> Lch {
        let (l, c, h) = space::srgb_to_lch(self.r, self.g, self.b);
        Lch { l, c, h }
    }

    /// Oklab view.
    #[must_use]
    pub fn to_oklab(self) -> Oklab {
        let (l, a, b) = space::srgb_to_oklab(self.r, self.g, self.b);
        Oklab { l, a, b }
    }

    /// OKLCH view.
    #[must_use]
    pub fn to_oklch(self) -> Oklch {
        let (l, c, h) = space::srgb_to_oklch(self.r, self.g, self.b);
        Oklch { l, c, h }
    }

    /// Build a color back from an OKLCH view, keeping this color's alpha.
    #[must_use]
    pub fn from_oklch(view: Oklch, alpha: f64) -> Self {
        Self::oklch(view.l, view.c, view.h).with_alpha(alpha)
    }

    // ─── Operations ──────────────────────────────────────────────────────

    /// Return a copy with the given alpha (clamped to [0, 1]).
    #[inline]
    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self {
            alpha: alpha.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Lighten by moving Lab L* up by `amount` × [`LAB_STEP`].
    #[must_use]
    pub fn brighten(self, amount: f64) -> Self {
        self.darken(-amount)
    }

    /// Darken by moving Lab L* down by `amount` × [`LAB_STEP`].
    #[must_use]
    pub fn darken(self, amount: f64) -> Self {
        let lab = self.to_lab();
        Self::lab(amount.mul_add(-LAB_STEP, lab.l), lab.a, lab.b).with_alpha(self.alpha)
    }

    /// Increase LCh chroma by `amount` × [`LAB_STEP`].
    #[must_use]
    pub fn saturate(self, amount: f64) -> Self {
        let lch = self.to_lch();
        Self::lch(lch.l, amount.mul_add(LAB_STEP, lch.c), lch.h).with_alpha(self.alpha)
    }

    /// Decrease LCh chroma by `amount` × [`LAB_STEP`] (never below zero).
    #[must_use]
    pub fn desaturate(self, amount: f64) -> Self {
        self.saturate(-amount)
    }

    /// Rotate the HSL hue by `degrees`, keeping saturation and lightness.
    ///
    /// The result wraps around the wheel: -30° from 10° lands on 340°.
    #[must_use]
    pub fn shift_hue(self, degrees: f64) -> Self {
        let hsl = self.to_hsl();
        Self::hsla(hsl.h + degrees, hsl.s, hsl.l, self.alpha)
    }

    /// Replace the HSL lightness (clamped to [0, 1]).
    #[must_use]
    pub fn with_hsl_lightness(self, l: f64) -> Self {
        let hsl = self.to_hsl();
        Self::hsla(hsl.h, hsl.s, l, self.alpha)
    }

    /// The complementary color (HSL hue + 180°).
    #[must_use]
    pub fn complement(self) -> Self {
        self.shift_hue(180.0)
    }

    /// Mix with another color in OKLCH space; alpha is mixed linearly.
    #[must_use]
    pub fn mix(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let view = self.to_oklch().mix(other.to_oklch(), t);
        Self::from_oklch(view, self.alpha.mul_add(1.0 - t, other.alpha * t))
    }

    /// CIE76 ΔE between two colors.
    #[must_use]
    pub fn delta_e(self, other: Self) -> f64 {
        self.to_lab().delta_e(other.to_lab())
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({})", self.to_hex())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl PartialEq for Color {
    /// Two colors are equal when they print the same hex string.
    fn eq(&self, other: &Self) -> bool {
        self.to_rgba8() == other.to_rgba8()
    }
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_rgba8().hash(state);
    }
}

impl Default for Color {
    /// Default is fully opaque black.
    fn default() -> Self {
        Self::BLACK
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        crate::parse_color(&s).map_err(serde::de::Error::custom)
    }
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

fn parse_hex(s: &str) -> Option<Color> {
    let s = s.strip_prefix('#').unwrap_or(s);
    let bytes = s.as_bytes();

    match bytes.len() {
        // #RGB
        3 => {
            let r = parse_hex_digit(bytes[0])?;
            let g = parse_hex_digit(bytes[1])?;
            let b = parse_hex_digit(bytes[2])?;
            Some(Color::rgb8(r << 4 | r, g << 4 | g, b << 4 | b))
        }
        // #RGBA
        4 => {
            let r = parse_hex_digit(bytes[0])?;
            let g = parse_hex_digit(bytes[1])?;
            let b = parse_hex_digit(bytes[2])?;
            let a = parse_hex_digit(bytes[3])?;
            Some(Color::rgba8(r << 4 | r, g << 4 | g, b << 4 | b, a << 4 | a))
        }
        // #RRGGBB
        6 => {
            let r = parse_hex_byte(&bytes[0..2])?;
            let g = parse_hex_byte(&bytes[2..4])?;
            let b = parse_hex_byte(&bytes[4..6])?;
            Some(Color::rgb8(r, g, b))
        }
        // #RRGGBBAA
        8 => {
            let r = parse_hex_byte(&bytes[0..2])?;
            let g = parse_hex_byte(&bytes[2..4])?;
            let b = parse_hex_byte(&bytes[4..6])?;
            let a = parse_hex_byte(&bytes[6..8])?;
            Some(Color::rgba8(r, g, b, a))
        }
        _ => None,
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

/// Convert a fraction (0.0–1.0) to a u8 (0–255) with correct rounding.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // Clamp guarantees 0.0 <= value <= 255.0 before truncation; NaN maps to 0.
    v.mul_add(255.0, 0.5).clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    fn assert_rgb8_close(actual: (u8, u8, u8), expected: (u8, u8, u8)) {
        let (ar, ag, ab) = actual;
        let (er, eg, eb) = expected;
        assert!(
            (i16::from(ar) - i16::from(er)).unsigned_abs() <= 1
                && (i16::from(ag) - i16::from(eg)).unsigned_abs() <= 1
                && (i16::from(ab) - i16::from(eb)).unsigned_abs() <= 1,
            "RGB mismatch: got ({ar}, {ag}, {ab}), expected ({er}, {eg}, {eb})"
        );
    }

    // ── Hex ──────────────────────────────────────────────────────────────

    #[test]
    fn hex_parsing_rrggbb() {
        let color = Color::hex("#ff8000").unwrap();
        assert_eq!(color.to_rgb8(), (255, 128, 0));
        assert!(color.is_opaque());
    }

    #[test]
    fn hex_parsing_short() {
        let color = Color::hex("#f80").unwrap();
        assert_eq!(color.to_rgb8(), (255, 136, 0));
    }

    #[test]
    fn hex_parsing_with_alpha() {
        let color = Color::hex("#ff000080").unwrap();
        assert!(approx_eq(color.alpha(), 128.0 / 255.0, 1e-9));
        assert_eq!(color.to_hex(), "#ff000080");
    }

    #[test]
    fn hex_parsing_no_hash() {
        let color = Color::hex("00ff00").unwrap();
        assert_eq!(color.to_rgb8(), (0, 255, 0));
    }

    #[test]
    fn hex_parsing_invalid() {
        assert!(Color::hex("xyz").is_none());
        assert!(Color::hex("#12345").is_none());
        assert!(Color::hex("").is_none());
        assert!(Color::hex("#").is_none());
    }

    #[test]
    fn hex_roundtrip_is_exact() {
        for original in ["#c86432", "#000000", "#ffffff", "#f6f0c2", "#010203"] {
            assert_eq!(Color::hex(original).unwrap().to_hex(), original);
        }
    }

    #[test]
    fn hex_output_is_lowercase() {
        assert_eq!(Color::hex("#ABCDEF").unwrap().to_hex(), "#abcdef");
    }

    // ── HSL ──────────────────────────────────────────────────────────────

    #[test]
    fn hsl_roundtrip_within_one_unit() {
        let original = Color::hex("#3a7bd5").unwrap();
        let hsl = original.to_hsl();
        let back = Color::hsl(hsl.h, hsl.s, hsl.l);
        assert_rgb8_close(back.to_rgb8(), original.to_rgb8());
    }

    #[test]
    fn hsl_constructor_clamps() {
        let c = Color::hsl(0.0, 2.0, 0.5);
        assert_eq!(c.to_rgb8(), (255, 0, 0));
        let c = Color::hsl(0.0, 1.0, -1.0);
        assert_eq!(c, Color::BLACK);
    }

    #[test]
    fn gray_is_achromatic() {
        assert!(Color::rgb8(128, 128, 128).is_achromatic());
        assert!(!Color::rgb8(128, 100, 128).is_achromatic());
        assert!(approx_eq(Color::WHITE.hue(), 0.0, 1e-9));
    }

    // ── Known Values ─────────────────────────────────────────────────────

    #[test]
    fn black_and_white_oklch() {
        assert!(approx_eq(Color::BLACK.to_oklch().l, 0.0, 1e-6));
        let white = Color::WHITE.to_oklch();
        assert!(approx_eq(white.l, 1.0, 1e-4));
        assert!(white.is_achromatic());
    }

    #[test]
    fn lab_of_white_is_100() {
        assert!(approx_eq(Color::WHITE.to_lab().l, 100.0, 0.01));
    }

    // ── Operations ───────────────────────────────────────────────────────

    #[test]
    fn darken_lowers_lab_lightness() {
        let base = Color::hex("#3a7bd5").unwrap();
        let darker = base.darken(1.0);
        let drop = base.to_lab().l - darker.to_lab().l;
        assert!(approx_eq(drop, LAB_STEP, 0.5), "L* drop: {drop}");
    }

    #[test]
    fn brighten_is_inverse_of_darken() {
        let base = Color::hex("#8a7f6b").unwrap();
        assert_rgb8_close(base.brighten(0.5).darken(0.5).to_rgb8(), base.to_rgb8());
    }

    #[test]
    fn brighten_white_stays_white() {
        assert_eq!(Color::WHITE.brighten(2.0), Color::WHITE);
    }

    #[test]
    fn darken_keeps_alpha() {
        let c = Color::hex("#3a7bd580").unwrap();
        assert!(approx_eq(c.darken(1.0).alpha(), c.alpha(), 1e-9));
    }

    #[test]
    fn desaturate_reduces_chroma() {
        let base = Color::hex("#e63946").unwrap();
        let muted = base.desaturate(0.5);
        assert!(muted.to_lch().c < base.to_lch().c);
    }

    #[test]
    fn desaturate_gray_stays_gray() {
        let gray = Color::rgb8(120, 120, 120);
        assert_rgb8_close(gray.desaturate(1.0).to_rgb8(), gray.to_rgb8());
    }

    #[test]
    fn shift_hue_wraps_negative() {
        let c = Color::hsl(10.0, 0.8, 0.5);
        let shifted = c.shift_hue(-30.0);
        assert!(approx_eq(shifted.hue(), 340.0, 0.5), "hue: {}", shifted.hue());
    }

    #[test]
    fn complement_is_180_degrees() {
        let c = Color::hsl(40.0, 0.6, 0.5);
        assert!(approx_eq(c.complement().hue(), 220.0, 0.5));
    }

    #[test]
    fn with_alpha_hex_has_alpha_byte() {
        let c = Color::hex("#3b82f6").unwrap().with_alpha(0.05);
        assert_eq!(c.to_hex(), "#3b82f60d");
    }

    // ── Mix ──────────────────────────────────────────────────────────────

    #[test]
    fn mix_endpoints() {
        let a = Color::hex("#ff0000").unwrap();
        let b = Color::hex("#0000ff").unwrap();
        assert_rgb8_close(a.mix(b, 0.0).to_rgb8(), a.to_rgb8());
        assert_rgb8_close(a.mix(b, 1.0).to_rgb8(), b.to_rgb8());
    }

    #[test]
    fn mix_with_white_keeps_hue() {
        let base = Color::hex("#3a7bd5").unwrap();
        let tint = Color::WHITE.mix(base, 0.5).to_oklch();
        let hue = base.to_oklch().h;
        assert!(space::hue_diff(tint.h, hue) < 2.0, "tint hue {} vs {}", tint.h, hue);
    }

    #[test]
    fn mix_lightness_is_linear() {
        let mid = Color::WHITE.mix(Color::BLACK, 0.5).to_oklch();
        assert!(approx_eq(mid.l, 0.5, 0.01), "L: {}", mid.l);
    }

    // ── Equality / serde ─────────────────────────────────────────────────

    #[test]
    fn equality_uses_quantized_channels() {
        let a = Color::srgb(0.5, 0.5, 0.5);
        let b = Color::srgb(0.500_5, 0.5, 0.5);
        assert_eq!(a, b);
        assert_ne!(a, Color::srgb(0.52, 0.5, 0.5));
    }

    #[test]
    fn non_finite_is_detected() {
        assert!(!Color::srgb(f64::NAN, 0.0, 0.0).is_finite());
        assert!(Color::srgb(2.0, -1.0, 0.5).is_finite());
    }

    #[test]
    fn infinite_channels_clip() {
        let c = Color::srgb(f64::INFINITY, f64::NEG_INFINITY, 0.5);
        assert!(c.is_finite());
        assert_eq!(c.to_srgb(), (1.0, 0.0, 0.5));
    }

    #[test]
    fn serializes_as_hex_string() {
        let json = serde_json::to_string(&Color::rgb8(16, 185, 129)).unwrap();
        assert_eq!(json, "\"#10b981\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::rgb8(16, 185, 129));
    }

    #[test]
    fn debug_and_display() {
        let c = Color::rgb8(255, 0, 0);
        assert_eq!(format!("{c}"), "#ff0000");
        assert_eq!(format!("{c:?}"), "Color(#ff0000)");
    }

    #[test]
    fn quantize_matches_hex_round_trip() {
        let c = Color::srgb(0.123_456, 0.654_321, 0.999);
        let q = c.quantize();
        assert_eq!(q.to_hex(), c.to_hex());
        assert_eq!(Color::hex(&q.to_hex()).unwrap().red().to_bits(), q.red().to_bits());
    }

    // ── Properties ───────────────────────────────────────────────────────

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn rgb8_hex_round_trip(r: u8, g: u8, b: u8) {
                let c = Color::rgb8(r, g, b);
                prop_assert_eq!(Color::hex(&c.to_hex()), Some(c));
            }

            #[test]
            fn hsl_round_trip_within_one_unit(r: u8, g: u8, b: u8) {
                let c = Color::rgb8(r, g, b);
                let hsl = c.to_hsl();
                let (br, bg, bb) = Color::hsl(hsl.h, hsl.s, hsl.l).to_rgb8();
                prop_assert!(r.abs_diff(br) <= 1 && g.abs_diff(bg) <= 1 && b.abs_diff(bb) <= 1);
            }

            #[test]
            fn lab_round_trip_within_one_unit(r: u8, g: u8, b: u8) {
                let c = Color::rgb8(r, g, b);
                let lab = c.to_lab();
                let (br, bg, bb) = Color::lab(lab.l, lab.a, lab.b).to_rgb8();
                prop_assert!(r.abs_diff(br) <= 1 && g.abs_diff(bg) <= 1 && b.abs_diff(bb) <= 1);
            }

            #[test]
            fn shift_hue_stays_in_range(r: u8, g: u8, b: u8, degrees in -720.0f64..720.0) {
                let h = Color::rgb8(r, g, b).shift_hue(degrees).hue();
                prop_assert!((0.0..=360.0).contains(&h), "hue {}", h);
            }
        }
    }
}
