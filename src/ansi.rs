// SPDX-License-Identifier: MIT
//
// ANSI escape sequence generation for swatch output.
//
// Pure functions that write SGR sequences to any `impl Write`. Colors are
// always emitted as 24-bit TrueColor: a palette preview quantized to the
// 256-color cube would show the wrong colors, which defeats its purpose.
use std::io::{self, Write};

use tonal_color::Color;

bitflags::bitflags! {
    /// Text attributes, mapped to SGR parameters.
    ///
    /// ```text
    /// Attr::BOLD | Attr::DIM  →  ESC[1;2m
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct Attr: u8 {
        /// SGR 1: increased intensity.
        const BOLD   = 1 << 0;
        /// SGR 2: decreased intensity (faint).
        const DIM    = 1 << 1;
        /// SGR 3: italic or oblique.
        const ITALIC = 1 << 2;
    }
}

/// `ESC[0m`: back to the terminal's default style.
#[inline]
pub fn reset(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[0m")
}

/// 24-bit text color, `ESC[38;2;R;G;Bm`.
pub fn fg(w: &mut impl Write, color: Color) -> io::Result<()> {
    let (red, green, blue) = color.to_rgb8();
    write!(w, "\x1b[38;2;{red};{green};{blue}m")
}

/// 24-bit cell color, `ESC[48;2;R;G;Bm`. Swatch chips are drawn with this.
pub fn bg(w: &mut impl Write, color: Color) -> io::Result<()> {
    let (red, green, blue) = color.to_rgb8();
    write!(w, "\x1b[48;2;{red};{green};{blue}m")
}

/// All set attributes in one sequence, e.g. `ESC[1;3m` for bold italic.
/// Writes nothing for an empty set.
pub fn attrs(w: &mut impl Write, attr: Attr) -> io::Result<()> {
    if attr.is_empty() {
        return Ok(());
    }

    let codes: Vec<&str> = [(Attr::BOLD, "1"), (Attr::DIM, "2"), (Attr::ITALIC, "3")]
        .into_iter()
        .filter(|(flag, _)| attr.contains(*flag))
        .map(|(_, code)| code)
        .collect();
    write!(w, "\x1b[{}m", codes.join(";"))
}
