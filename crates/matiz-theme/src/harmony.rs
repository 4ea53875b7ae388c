//! Color-wheel harmony strategies.
//!
//! Every strategy maps a seed to a [`HarmonyTriple`]. All but `random` are
//! pure functions of the seed; `random` ignores the seed entirely and draws
//! a fresh base color from the injected [`RandomSource`].

use std::fmt;
use std::str::FromStr;

use matiz_color::{HexColor, Hsl};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::ParseStrategyError;
use crate::random::{RandomSource, Xorshift32, pick_index};

// ─── Strategy ───────────────────────────────────────────────────────────────

/// A color-wheel rule for deriving primary, secondary, and accent colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HarmonyStrategy {
    #[default]
    Monochromatic,
    Analogous,
    Complementary,
    SplitComplementary,
    Triadic,
    Tetradic,
    Random,
}

/// The strategies `random` picks from once it has drawn a base color.
///
/// Monochromatic and tetradic are deliberately absent.
pub const RANDOM_POOL: [HarmonyStrategy; 4] = [
    HarmonyStrategy::Complementary,
    HarmonyStrategy::Analogous,
    HarmonyStrategy::Triadic,
    HarmonyStrategy::SplitComplementary,
];

impl HarmonyStrategy {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Monochromatic => "monochromatic",
            Self::Analogous => "analogous",
            Self::Complementary => "complementary",
            Self::SplitComplementary => "splitComplementary",
            Self::Triadic => "triadic",
            Self::Tetradic => "tetradic",
            Self::Random => "random",
        }
    }

    /// Parse a strategy from its name.
    ///
    /// Case-insensitive; `split-complementary` and `split_complementary`
    /// are accepted alongside `splitComplementary`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted: String = name
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        Self::all()
            .iter()
            .find(|s| s.name().to_lowercase() == wanted)
            .copied()
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Monochromatic,
            Self::Analogous,
            Self::Complementary,
            Self::SplitComplementary,
            Self::Triadic,
            Self::Tetradic,
            Self::Random,
        ]
    }

    #[inline]
    #[must_use]
    pub const fn is_random(self) -> bool {
        matches!(self, Self::Random)
    }
}

impl fmt::Display for HarmonyStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HarmonyStrategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseStrategyError(s.to_string()))
    }
}

// ─── Results ────────────────────────────────────────────────────────────────

/// The three colors every strategy produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HarmonyTriple {
    pub primary: HexColor,
    pub secondary: HexColor,
    pub accent: HexColor,
}

/// Five lightness steps of the seed's hue and saturation.
///
/// Only `dark` and `light` feed the monochromatic triple; the full ramp is
/// exposed for callers that want the whole scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonochromaticRamp {
    pub very_dark: HexColor,
    pub dark: HexColor,
    pub base: HexColor,
    pub light: HexColor,
    pub very_light: HexColor,
}

impl MonochromaticRamp {
    const VERY_DARK_L: f64 = 20.0;
    const DARK_L: f64 = 40.0;
    const LIGHT_L: f64 = 70.0;
    const VERY_LIGHT_L: f64 = 85.0;

    #[must_use]
    pub fn from_seed(seed: HexColor) -> Self {
        let Hsl { h, s, .. } = seed.to_hsl();
        let step = |l: f64| HexColor::from_hsl(Hsl::new(h, s, l));
        Self {
            very_dark: step(Self::VERY_DARK_L),
            dark: step(Self::DARK_L),
            base: seed,
            light: step(Self::LIGHT_L),
            very_light: step(Self::VERY_LIGHT_L),
        }
    }

    /// Darkest to lightest.
    #[must_use]
    pub const fn to_array(self) -> [HexColor; 5] {
        [self.very_dark, self.dark, self.base, self.light, self.very_light]
    }
}

/// The seed and its three quarter-turn rotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetrad {
    pub base: HexColor,
    pub quarter: HexColor,
    pub half: HexColor,
    pub three_quarter: HexColor,
}

impl Tetrad {
    #[must_use]
    pub fn from_seed(seed: HexColor) -> Self {
        Self {
            base: seed,
            quarter: seed.rotate_hue(90.0),
            half: seed.rotate_hue(180.0),
            three_quarter: seed.rotate_hue(270.0),
        }
    }
}

// ─── Generation ─────────────────────────────────────────────────────────────

/// Derive the harmony triple for `seed`, drawing from a clock-seeded
/// generator when `strategy` is [`HarmonyStrategy::Random`].
#[must_use]
pub fn generate_harmony(seed: HexColor, strategy: HarmonyStrategy) -> HarmonyTriple {
    let mut rng = Xorshift32::from_clock();
    generate_harmony_with(seed, strategy, &mut rng)
}

/// Derive the harmony triple for `seed` with an explicit random source.
///
/// `rng` is only consulted for [`HarmonyStrategy::Random`], which draws four
/// values in order: hue, saturation, lightness, then the pool index.
pub fn generate_harmony_with<R: RandomSource + ?Sized>(
    seed: HexColor,
    strategy: HarmonyStrategy,
    rng: &mut R,
) -> HarmonyTriple {
    debug!(%seed, strategy = strategy.name(), "generating harmony");
    match strategy {
        HarmonyStrategy::Monochromatic => {
            let ramp = MonochromaticRamp::from_seed(seed);
            HarmonyTriple { primary: seed, secondary: ramp.dark, accent: ramp.light }
        }
        HarmonyStrategy::Analogous => HarmonyTriple {
            primary: seed.rotate_hue(30.0),
            secondary: seed.rotate_hue(-30.0),
            accent: seed,
        },
        HarmonyStrategy::Complementary => HarmonyTriple {
            primary: seed,
            secondary: seed.adjust_lightness(-20.0),
            accent: seed.rotate_hue(180.0),
        },
        HarmonyStrategy::SplitComplementary => HarmonyTriple {
            primary: seed,
            secondary: seed.rotate_hue(150.0),
            accent: seed.rotate_hue(210.0),
        },
        HarmonyStrategy::Triadic => HarmonyTriple {
            primary: seed,
            secondary: seed.rotate_hue(120.0),
            accent: seed.rotate_hue(240.0),
        },
        HarmonyStrategy::Tetradic => {
            let tetrad = Tetrad::from_seed(seed);
            HarmonyTriple { primary: seed, secondary: tetrad.half, accent: tetrad.quarter }
        }
        HarmonyStrategy::Random => random_harmony(rng),
    }
}

fn random_harmony<R: RandomSource + ?Sized>(rng: &mut R) -> HarmonyTriple {
    let hue = rng.next_unit() * 360.0;
    let saturation = 40.0 + rng.next_unit() * 40.0;
    let lightness = 45.0 + rng.next_unit() * 20.0;
    let base = HexColor::from_hsl(Hsl::new(hue, saturation, lightness));
    let strategy = RANDOM_POOL[pick_index(rng, RANDOM_POOL.len())];
    trace!(%base, strategy = strategy.name(), "drew random base");
    generate_harmony_with(base, strategy, rng)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
