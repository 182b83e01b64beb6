// SPDX-License-Identifier: MIT
//
// Color space conversions, the only place in tonal that does color math.
//
// Every function here is pure and works on plain f64 tuples. The `Color`
// type and the derivation engine call into this module and never touch a
// matrix or a transfer curve themselves, so the math can be swapped or
// audited in one place.
//
// Pipelines:
//
//   sRGB ↔ Linear sRGB ↔ Oklab ↔ OKLCH     (perceptual interpolation)
//   sRGB ↔ Linear sRGB ↔ XYZ ↔ CIE Lab ↔ LCh (D65, brighten/darken/name lookup)
//   sRGB ↔ HSL                              (harmony hue rotation)
//
// sRGB values are gamma-encoded fractions. Results of inverse conversions
// may land outside [0, 1]; callers decide whether to clip.
#![allow(clippy::many_single_char_names)]

// ─── Hue Helpers ─────────────────────────────────────────────────────────────

/// Normalize a hue angle to the range [0, 360).
///
/// Negative angles wrap to the positive range (-30 → 330).
#[inline]
#[must_use]
pub fn normalize_hue(h: f64) -> f64 {
    let h = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if h >= 360.0 { 0.0 } else { h }
}

/// Absolute hue difference along the shortest arc of the color wheel.
#[inline]
#[must_use]
pub fn hue_diff(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % 360.0;
    if d > 180.0 { 360.0 - d } else { d }
}

/// Interpolate between two hue angles taking the shortest path.
#[inline]
#[must_use]
pub fn interpolate_hue(h1: f64, h2: f64, t: f64) -> f64 {
    let diff = h2 - h1;
    let diff = if diff > 180.0 {
        diff - 360.0
    } else if diff < -180.0 {
        diff + 360.0
    } else {
        diff
    };
    normalize_hue(diff.mul_add(t, h1))
}

// ─── Linear sRGB ↔ sRGB (Gamma) ─────────────────────────────────────────────

/// Convert a single linear sRGB component to sRGB (apply gamma).
#[inline]
#[must_use]
pub fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055f64.mul_add(c.powf(1.0 / 2.4), -0.055)
    }
}

/// Convert a single sRGB component to linear sRGB (remove gamma).
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

// ─── Oklab ↔ Linear sRGB ────────────────────────────────────────────────────
//
// Björn Ottosson's Oklab, through the intermediate LMS cone space.
// Reference: https://bottosson.github.io/posts/oklab/

/// Convert linear sRGB to Oklab (L, a, b).
#[inline]
#[must_use]
pub fn linear_srgb_to_oklab(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let l = 0.051_445_992_9f64.mul_add(b, 0.412_221_470_8f64.mul_add(r, 0.536_332_536_3 * g));
    let m = 0.107_396_956_6f64.mul_add(b, 0.211_903_498_2f64.mul_add(r, 0.680_699_545_1 * g));
    let s = 0.629_978_700_5f64.mul_add(b, 0.088_302_461_9f64.mul_add(r, 0.281_718_837_6 * g));

    let l_ = l.cbrt();
    let m_ = m.cbrt();
    let s_ = s.cbrt();

    let l_ok = 0.004_072_046_8f64.mul_add(-s_, 0.210_454_255_3f64.mul_add(l_, 0.793_617_785_0 * m_));
    let a = 0.450_593_709_9f64.mul_add(s_, 1.977_998_495_1f64.mul_add(l_, -(2.428_592_205_0 * m_)));
    let b_ok = 0.808_675_766_0f64.mul_add(-s_, 0.025_904_037_1f64.mul_add(l_, 0.782_771_766_2 * m_));

    (l_ok, a, b_ok)
}

/// Convert Oklab (L, a, b) to linear sRGB.
#[inline]
#[must_use]
pub fn oklab_to_linear_srgb(l_ok: f64, a: f64, b: f64) -> (f64, f64, f64) {
    let l_ = 0.215_803_757_3f64.mul_add(b, 0.396_337_777_4f64.mul_add(a, l_ok));
    let m_ = 0.063_854_172_8f64.mul_add(-b, 0.105_561_345_8f64.mul_add(-a, l_ok));
    let s_ = 1.291_485_548_0f64.mul_add(-b, 0.089_484_177_5f64.mul_add(-a, l_ok));

    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    let r = 0.230_969_929_2f64.mul_add(s, 4.076_741_662_1f64.mul_add(l, -(3.307_711_591_3 * m)));
    let g = 0.341_319_396_5f64.mul_add(-s, (-1.268_438_004_6f64).mul_add(l, 2.609_757_401_1 * m));
    let bl = 1.707_614_701_0f64.mul_add(s, (-0.004_196_086_3f64).mul_add(l, -(0.703_418_614_7 * m)));

    (r, g, bl)
}

// ─── Polar ↔ Rectangular ────────────────────────────────────────────────────
//
// Shared by Oklab ↔ OKLCH and CIE Lab ↔ LCh.

/// Chroma below this is treated as achromatic: the hue is undefined.
pub const ACHROMATIC_CHROMA: f64 = 5e-5;

/// Convert rectangular (a, b) components to polar (chroma, hue°).
///
/// Achromatic inputs report hue 0.
#[inline]
#[must_use]
pub fn ab_to_chroma_hue(a: f64, b: f64) -> (f64, f64) {
    let c = a.hypot(b);
    let h = if c < ACHROMATIC_CHROMA {
        0.0
    } else {
        normalize_hue(b.atan2(a).to_degrees())
    };
    (c, h)
}

/// Convert polar (chroma, hue°) to rectangular (a, b) components.
#[inline]
#[must_use]
pub fn chroma_hue_to_ab(c: f64, h: f64) -> (f64, f64) {
    let h_rad = h.to_radians();
    (c * h_rad.cos(), c * h_rad.sin())
}

// ─── CIE Lab (D65) ──────────────────────────────────────────────────────────

/// D65 reference white.
const XN: f64 = 0.950_470;
const YN: f64 = 1.0;
const ZN: f64 = 1.088_830;

const T0: f64 = 4.0 / 29.0;
const T1: f64 = 6.0 / 29.0;
const T2: f64 = 3.0 * T1 * T1;
const T3: f64 = T1 * T1 * T1;

#[inline]
fn xyz_to_lab_f(t: f64) -> f64 {
    if t > T3 { t.cbrt() } else { t / T2 + T0 }
}

#[inline]
fn lab_to_xyz_f(t: f64) -> f64 {
    if t > T1 { t * t * t } else { T2 * (t - T0) }
}

/// Convert sRGB (0.0–1.0) to CIE L*a*b* with a D65 white point.
///
/// L* is in [0, 100]; a* and b* are roughly in [-128, 128].
#[must_use]
pub fn srgb_to_lab(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let lr = srgb_to_linear(r);
    let lg = srgb_to_linear(g);
    let lb = srgb_to_linear(b);

    let x = 0.180_437_5f64.mul_add(lb, 0.412_456_4f64.mul_add(lr, 0.357_576_1 * lg)) / XN;
    let y = 0.072_175_0f64.mul_add(lb, 0.212_672_9f64.mul_add(lr, 0.715_152_2 * lg)) / YN;
    let z = 0.950_304_1f64.mul_add(lb, 0.019_333_9f64.mul_add(lr, 0.119_192_0 * lg)) / ZN;

    let fx = xyz_to_lab_f(x);
    let fy = xyz_to_lab_f(y);
    let fz = xyz_to_lab_f(z);

    let l = 116.0f64.mul_add(fy, -16.0).max(0.0);
    (l, 500.0 * (fx - fy), 200.0 * (fy - fz))
}

/// Convert CIE L*a*b* (D65) to sRGB. The result may be out of gamut.
#[must_use]
pub fn lab_to_srgb(l: f64, a: f64, b: f64) -> (f64, f64, f64) {
    let fy = (l + 16.0) / 116.0;
    let fx = a / 500.0 + fy;
    let fz = fy - b / 200.0;

    let x = XN * lab_to_xyz_f(fx);
    let y = YN * lab_to_xyz_f(fy);
    let z = ZN * lab_to_xyz_f(fz);

    let lr = 0.498_531_4f64.mul_add(-z, 3.240_454_2f64.mul_add(x, -(1.537_138_5 * y)));
    let lg = 0.041_556_0f64.mul_add(z, (-0.969_266_0f64).mul_add(x, 1.876_010_8 * y));
    let lb = 1.057_225_2f64.mul_add(z, 0.055_643_4f64.mul_add(x, -(0.204_025_9 * y)));

    (linear_to_srgb(lr), linear_to_srgb(lg), linear_to_srgb(lb))
}

// ─── HSL ─────────────────────────────────────────────────────────────────────

/// Convert sRGB (0.0–1.0) to HSL: hue in degrees [0, 360), saturation and
/// lightness as fractions. Achromatic colors report hue 0.
#[must_use]
pub fn srgb_to_hsl(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    let delta = max - min;

    if delta.abs() < f64::EPSILON {
        return (0.0, 0.0, l);
    }

    let s = if l < 0.5 {
        delta / (max + min)
    } else {
        delta / (2.0 - max - min)
    };

    let h = if (r - max).abs() < f64::EPSILON {
        (g - b) / delta
    } else if (g - max).abs() < f64::EPSILON {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };

    (normalize_hue(h * 60.0), s, l)
}

/// Convert HSL (hue in degrees, saturation and lightness as fractions) to sRGB.
#[must_use]
pub fn hsl_to_srgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    if s <= 0.0 {
        return (l, l, l);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0f64.mul_add(l, -q);
    let h = normalize_hue(h) / 360.0;

    let channel = |t: f64| {
        let t = if t < 0.0 {
            t + 1.0
        } else if t > 1.0 {
            t - 1.0
        } else {
            t
        };
        if 6.0 * t < 1.0 {
            ((q - p) * 6.0).mul_add(t, p)
        } else if 2.0 * t < 1.0 {
            q
        } else if 3.0 * t < 2.0 {
            ((q - p) * (2.0 / 3.0 - t)).mul_add(6.0, p)
        } else {
            p
        }
    };

    (channel(h + 1.0 / 3.0), channel(h), channel(h - 1.0 / 3.0))
}

// ─── Composite Conversions ───────────────────────────────────────────────────

/// Convert sRGB (0.0–1.0) → Oklab.
#[must_use]
pub fn srgb_to_oklab(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    linear_srgb_to_oklab(srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b))
}

/// Convert sRGB (0.0–1.0) → OKLCH.
#[must_use]
pub fn srgb_to_oklch(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let (l, a, b_ok) = srgb_to_oklab(r, g, b);
    let (c, h) = ab_to_chroma_hue(a, b_ok);
    (l, c, h)
}

/// Convert OKLCH → sRGB (0.0–1.0, may be out of gamut).
#[must_use]
pub fn oklch_to_srgb(l: f64, c: f64, h: f64) -> (f64, f64, f64) {
    let (a, b) = chroma_hue_to_ab(c, h);
    let (lr, lg, lb) = oklab_to_linear_srgb(l, a, b);
    (linear_to_srgb(lr), linear_to_srgb(lg), linear_to_srgb(lb))
}

/// Convert sRGB (0.0–1.0) → CIE LCh(ab).
#[must_use]
pub fn srgb_to_lch(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let (l, a, b_lab) = srgb_to_lab(r, g, b);
    let (c, h) = ab_to_chroma_hue(a, b_lab);
    (l, c, h)
}

/// Convert CIE LCh(ab) → sRGB (may be out of gamut).
#[must_use]
pub fn lch_to_srgb(l: f64, c: f64, h: f64) -> (f64, f64, f64) {
    let (a, b) = chroma_hue_to_ab(c, h);
    lab_to_srgb(l, a, b)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
