//! Injectable pseudo-random sources for the randomized paths.
//!
//! Only the `random` harmony strategy and [`surprise`](crate::surprise::surprise)
//! draw random numbers. They take any [`RandomSource`], so tests can replay
//! a fixed [`Sequence`] and production can use a clock-seeded
//! [`Xorshift32`].

use std::time::{SystemTime, UNIX_EPOCH};

/// A source of uniformly distributed values in `[0, 1)`.
pub trait RandomSource {
    /// The next value, in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

// ---------------------------------------------------------------------------
// Xorshift32 — a minimal deterministic PRNG
// ---------------------------------------------------------------------------

/// Xorshift generator behind the default random source. Same seed, same
/// stream, on every platform.
#[derive(Debug, Clone)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    /// A generator with a fixed seed. Zero is bumped to one.
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self { state: seed.max(1) }
    }

    /// A generator seeded from the sub-second part of the system clock.
    #[must_use]
    pub fn from_clock() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(42, |d| d.subsec_nanos());
        Self::new(seed)
    }

    pub const fn next_u32(&mut self) -> u32 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        self.state
    }
}

impl RandomSource for Xorshift32 {
    fn next_unit(&mut self) -> f64 {
        // 2^32: the largest u32 still maps strictly below 1.0.
        f64::from(self.next_u32()) / 4_294_967_296.0
    }
}

// ---------------------------------------------------------------------------
// Sequence — replay of fixed values
// ---------------------------------------------------------------------------

/// Replays a fixed list of values, cycling when exhausted.
///
/// An empty sequence yields `0.0` forever.
#[derive(Debug, Clone, Default)]
pub struct Sequence {
    values: Vec<f64>,
    next: usize,
}

impl Sequence {
    #[must_use]
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self { values: values.into(), next: 0 }
    }
}

impl RandomSource for Sequence {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}

/// Uniform index into a pool of `len` items (`len > 0`).
///
/// Clamped to the last index, so a source that strays to `1.0` still picks
/// a valid item.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn pick_index<R: RandomSource + ?Sized>(rng: &mut R, len: usize) -> usize {
    let raw = (rng.next_unit() * len as f64).floor();
    // Negative or NaN draws saturate to 0 in the cast.
    (raw as usize).min(len.saturating_sub(1))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
