// SPDX-License-Identifier: MIT
//
// Seeded pseudo-random base colors for `--random`.
//
// Any 24-bit sRGB value is equally likely. A given seed always produces the
// same color, so `--random 42` is reproducible; without a seed the current
// time's sub-second nanoseconds are used.

use tonal_color::Color;
use tonal_color::names::from_packed;

/// Xorshift32: a minimal deterministic PRNG.
struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    fn new(seed: u32) -> Self {
        Self { state: seed.max(1) }
    }

    const fn next(&mut self) -> u32 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        self.state
    }
}

/// A seed from the clock, for runs without an explicit one.
#[must_use]
pub fn clock_seed() -> u32 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_or(42, |d| d.subsec_nanos())
}

/// The pseudo-random color for `seed`.
#[must_use]
pub fn random_color(seed: u32) -> Color {
    let mut rng = Xorshift32::new(seed);
    // The first outputs of small seeds are poorly mixed.
    for _ in 0..4 {
        rng.next();
    }
    from_packed(rng.next() & 0x00ff_ffff)
}
