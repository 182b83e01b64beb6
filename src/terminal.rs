// SPDX-License-Identifier: MIT
//
// Terminal detection for swatch output.
//
// Safety: `isatty` is the POSIX way to ask whether a descriptor is a
// terminal; there is no safe std alternative that works on a raw fd.
#![allow(unsafe_code)]

/// Check whether stdout is connected to a terminal (TTY).
#[cfg(unix)]
#[must_use]
pub fn stdout_is_tty() -> bool {
    // SAFETY: isatty only inspects the descriptor; STDOUT_FILENO is always
    // a valid integer to pass, even when closed.
    unsafe { libc::isatty(libc::STDOUT_FILENO) != 0 }
}

#[cfg(not(unix))]
#[must_use]
pub fn stdout_is_tty() -> bool {
    false
}

/// Whether swatches should carry ANSI colors.
///
/// Off when `--no-color` was given, when `NO_COLOR` is set to anything
/// non-empty (<https://no-color.org>), or when stdout is not a terminal.
#[must_use]
pub fn color_enabled(no_color_flag: bool) -> bool {
    let no_color_env = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    resolve_color(no_color_flag, no_color_env, stdout_is_tty())
}

const fn resolve_color(no_color_flag: bool, no_color_env: bool, is_tty: bool) -> bool {
    !no_color_flag && !no_color_env && is_tty
}
