// SPDX-License-Identifier: MIT
//
// Terminal swatch view of a complete palette.
//
//   #f6f0c2  Custom Color  warm
//
//   Scale
//     [ 50  ] #ffffff
//     [ 100 ] #fdfbf0
//     …
//   Harmony
//     complementary        ████ ████  #f6f0c2 #c2c8f6
//     …
//
// With color disabled the chips are dropped and only the text remains, so
// the output stays readable when piped or under NO_COLOR.

use std::io::{self, Write};

use tonal_color::Color;
use tonal_engine::{CompletePalette, relative_luminance};
use unicode_width::UnicodeWidthStr;

use crate::ansi::{self, Attr};

/// Chip width in cells for scale and semantic rows.
const WIDE_CHIP: usize = 6;
/// Chip width in cells for harmony members.
const NARROW_CHIP: usize = 4;
/// Label column width.
const LABEL_WIDTH: usize = 20;

/// Writes styled text, or plain text when color is off.
struct Painter<'a, W: Write> {
    out: &'a mut W,
    color: bool,
}

impl<W: Write> Painter<'_, W> {
    fn chip(&mut self, color: Color, width: usize) -> io::Result<()> {
        if !self.color {
            return Ok(());
        }
        ansi::bg(self.out, color)?;
        write!(self.out, "{:width$}", "")?;
        ansi::reset(self.out)?;
        self.out.write_all(b" ")
    }

    /// A scale row. In color the stop label sits inside its own chip.
    fn stop_row(&mut self, label: &str, c: Color) -> io::Result<()> {
        write!(self.out, "  ")?;
        if self.color {
            let ink = if relative_luminance(c) > 0.5 { Color::BLACK } else { Color::WHITE };
            ansi::bg(self.out, c)?;
            ansi::fg(self.out, ink)?;
            write!(self.out, "{}", pad_right(&format!(" {label}"), WIDE_CHIP))?;
            ansi::reset(self.out)?;
            write!(self.out, " ")?;
        } else {
            write!(self.out, "{}", pad_right(label, 5))?;
        }
        writeln!(self.out, "{c}")
    }

    fn styled(&mut self, attr: Attr, text: &str) -> io::Result<()> {
        if self.color && !attr.is_empty() {
            ansi::attrs(self.out, attr)?;
            self.out.write_all(text.as_bytes())?;
            ansi::reset(self.out)
        } else {
            self.out.write_all(text.as_bytes())
        }
    }

    fn heading(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.out)?;
        self.styled(Attr::BOLD, title)?;
        writeln!(self.out)
    }

    fn verdict(&mut self, level: &str, pass: bool) -> io::Result<()> {
        let (attr, word) = if pass { (Attr::BOLD, "pass") } else { (Attr::DIM, "fail") };
        self.styled(attr, &format!("{level} {word}"))
    }

    fn label(&mut self, label: &str) -> io::Result<()> {
        write!(self.out, "  {}", pad_right(label, LABEL_WIDTH))
    }
}

/// Pad `text` with spaces to `width` display cells.
fn pad_right(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{text}{:fill$}", "")
}

/// Draw the palette.
///
/// # Errors
///
/// Propagates write failures from `out`.
pub fn render(out: &mut impl Write, palette: &CompletePalette, color: bool) -> io::Result<()> {
    let mut p = Painter { out, color };

    // ── Header ──
    p.chip(palette.base, WIDE_CHIP)?;
    p.styled(Attr::BOLD, &palette.info.hex)?;
    write!(p.out, "  ")?;
    p.styled(Attr::ITALIC, palette.info.name)?;
    write!(p.out, "  ")?;
    p.styled(Attr::DIM, palette.temperature.name())?;
    writeln!(p.out)?;

    // ── Scale ──
    p.heading("Scale")?;
    for (stop, c) in palette.scale.iter() {
        p.stop_row(&stop.to_string(), c)?;
    }

    // ── Harmony ──
    p.heading("Harmony")?;
    for (harmony, members) in palette.harmony.iter() {
        p.label(harmony.name())?;
        for &c in members {
            p.chip(c, NARROW_CHIP)?;
        }
        let hexes: Vec<String> = members.iter().map(|c| c.to_hex()).collect();
        writeln!(p.out, " {}", hexes.join(" "))?;
    }

    // ── Semantic ──
    p.heading("Semantic")?;
    for (role, c) in palette.semantic.roles() {
        p.label(role)?;
        p.chip(c, WIDE_CHIP)?;
        writeln!(p.out, "{c}")?;
    }

    // ── Accessibility ──
    let m = &palette.accessibility;
    p.heading("Accessibility")?;
    p.label("luminance")?;
    writeln!(p.out, "{:.3}", m.luminance)?;
    p.label("contrast vs white")?;
    writeln!(p.out, "{:.2}:1", m.contrast_white)?;
    p.label("contrast vs black")?;
    writeln!(p.out, "{:.2}:1", m.contrast_black)?;
    p.label("wcag")?;
    p.verdict("AA", m.aa)?;
    write!(p.out, "  ")?;
    p.verdict("AAA", m.aaa)?;
    writeln!(p.out)?;

    let combos = &palette.accessible;
    for (label, c) in [
        ("text on light", combos.text_on_light),
        ("text on dark", combos.text_on_dark),
        ("high contrast", combos.high_contrast),
        ("low contrast", combos.low_contrast),
    ] {
        p.label(label)?;
        p.chip(c, NARROW_CHIP)?;
        writeln!(p.out, "{c}")?;
    }

    // ── Gradients ──
    p.heading("Gradients")?;
    for (kind, css) in palette.gradients.entries() {
        p.label(kind)?;
        writeln!(p.out, "{css}")?;
    }

    p.out.flush()
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tonal_engine::generate_complete_palette;

    fn draw(base: &str, color: bool) -> String {
        let palette = generate_complete_palette(Color::hex(base).unwrap(), None);
        let mut buf = Vec::new();
        render(&mut buf, &palette, color).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn plain_output_has_no_escapes() {
        let out = draw("#f6f0c2", false);
        assert!(!out.contains('\x1b'), "{out:?}");
        assert!(out.starts_with("#f6f0c2  Custom Color  warm\n"), "{out}");
    }

    #[test]
    fn plain_scale_rows() {
        let out = draw("#f6f0c2", false);
        assert!(out.contains("\n  50   #ffffff\n"), "{out}");
        assert!(out.contains("\n  500  #f6f0c2\n"), "{out}");
        assert!(out.contains("\n  900  #000000\n"), "{out}");
    }

    #[test]
    fn every_section_is_present() {
        let out = draw("#3b82f6", false);
        for section in ["Scale", "Harmony", "Semantic", "Accessibility", "Gradients"] {
            assert!(out.contains(&format!("\n{section}\n")), "missing {section}");
        }
        assert!(out.contains("split-complementary"), "{out}");
        assert!(out.contains("linear-gradient(135deg, #3b82f6, "), "{out}");
    }

    #[test]
    fn colored_output_uses_truecolor_chips() {
        let out = draw("#f6f0c2", true);
        assert!(out.contains("\x1b[48;2;246;240;194m      \x1b[0m"), "{out:?}");
        assert!(out.contains("\x1b[1m#f6f0c2\x1b[0m"), "{out:?}");
        // Stop labels are inked for contrast against their own chip.
        assert!(out.contains("\x1b[48;2;0;0;0m\x1b[38;2;255;255;255m 900  \x1b[0m #000000"), "{out:?}");
        assert!(out.contains("\x1b[48;2;255;255;255m\x1b[38;2;0;0;0m 50   \x1b[0m #ffffff"), "{out:?}");
    }

    #[test]
    fn wcag_verdicts() {
        let out = draw("#000000", false);
        assert!(out.contains("AA pass  AAA pass"), "{out}");
    }

    #[test]
    fn padding_counts_display_cells() {
        assert_eq!(pad_right("ab", 4), "ab  ");
        assert_eq!(pad_right("色", 4), "色  ");
        assert_eq!(pad_right("toolong", 3), "toolong");
    }
}
