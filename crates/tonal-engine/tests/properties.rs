//! Universal properties of the derivation engine, checked on random input.

use proptest::prelude::*;
use tonal_color::space::hue_diff;
use tonal_color::{Color, parse_color};
use tonal_engine::{
    Stop, accessibility, contrast_ratio, describe, generate_harmony, generate_scale,
    generate_scale_with_steps,
};

fn rgb8() -> impl Strategy<Value = Color> {
    any::<(u8, u8, u8)>().prop_map(|(r, g, b)| Color::rgb8(r, g, b))
}

proptest! {
    #[test]
    fn hex_round_trips_through_parse(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let upper = format!("#{r:02X}{g:02X}{b:02X}");
        let parsed = parse_color(&upper).unwrap();
        prop_assert_eq!(parsed.to_hex(), upper.to_lowercase());
    }

    #[test]
    fn parse_never_panics(input in ".{0,40}") {
        let _ = parse_color(&input);
    }

    #[test]
    fn scale_keeps_base_at_500(base in rgb8(), steps in 0usize..24) {
        prop_assert_eq!(generate_scale(base)[Stop::S500], base);
        prop_assert_eq!(generate_scale_with_steps(base, steps)[Stop::S500], base);
    }

    #[test]
    fn scale_lightness_runs_light_to_dark(base in rgb8()) {
        prop_assume!(base != Color::WHITE && base != Color::BLACK);
        let scale = generate_scale(base);
        let l50 = scale[Stop::S50].to_oklch().l;
        let l500 = scale[Stop::S500].to_oklch().l;
        let l900 = scale[Stop::S900].to_oklch().l;
        prop_assert!(l50 > l500, "50: {l50} vs 500: {l500}");
        prop_assert!(l500 > l900, "500: {l500} vs 900: {l900}");
    }

    #[test]
    fn analogous_hue_wraps(h in 0.0f64..360.0, s in 0.2f64..1.0, l in 0.2f64..0.8) {
        let set = generate_harmony(Color::hsl(h, s, l));
        let first = set.analogous[0].hue();
        let expected = (h - 30.0).rem_euclid(360.0);
        prop_assert!((0.0..=360.0).contains(&first), "hue out of range: {first}");
        prop_assert!(hue_diff(first, expected) < 1e-6, "{first} vs {expected}");
    }

    #[test]
    fn contrast_is_symmetric(a in rgb8(), b in rgb8()) {
        prop_assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
    }

    #[test]
    fn contrast_stays_in_wcag_range(a in rgb8(), b in rgb8()) {
        let ratio = contrast_ratio(a, b);
        prop_assert!((1.0..=21.0 + 1e-9).contains(&ratio), "{ratio}");
    }

    #[test]
    fn aaa_implies_aa(c in rgb8()) {
        let m = accessibility(c);
        prop_assert!(!m.aaa || m.aa, "{m:?}");
    }

    #[test]
    fn every_color_passes_aa_against_some_extreme(c in rgb8()) {
        // max(white, black) contrast never drops below ~4.58:1.
        prop_assert!(accessibility(c).aa);
    }

    #[test]
    fn describe_hex_matches_input(c in rgb8()) {
        prop_assert_eq!(describe(c).hex, c.to_hex());
    }
}
