//! "Surprise me": a random seed, mode, and strategy in one draw.

use matiz_color::{HexColor, Hsl};
use serde::Serialize;
use tracing::debug;

use crate::compose::compose_theme_with;
use crate::harmony::HarmonyStrategy;
use crate::mode::Mode;
use crate::random::{RandomSource, Sequence, pick_index};
use crate::record::ThemeRecord;

/// Strategies a surprise draw picks from. `random` is excluded since the
/// seed is already random.
pub const SURPRISE_POOL: [HarmonyStrategy; 6] = [
    HarmonyStrategy::Complementary,
    HarmonyStrategy::Analogous,
    HarmonyStrategy::Triadic,
    HarmonyStrategy::SplitComplementary,
    HarmonyStrategy::Tetradic,
    HarmonyStrategy::Monochromatic,
];

/// The parameters of one surprise draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SurpriseDraw {
    pub seed: HexColor,
    pub mode: Mode,
    pub strategy: HarmonyStrategy,
}

impl SurpriseDraw {
    /// Compose the drawn theme. Deterministic, since the pool never
    /// contains `random`.
    #[must_use]
    pub fn compose(self) -> ThemeRecord {
        // Only `random` reads the source, and SURPRISE_POOL excludes it, so
        // an empty replay is never consulted.
        let mut unused = Sequence::default();
        compose_theme_with(self.seed, self.mode, self.strategy, &mut unused)
    }
}

/// Draw a seed, mode, and strategy.
///
/// Consumes five values in order: mode, strategy, hue (0–360), saturation
/// (50–90), lightness (40–70).
pub fn surprise<R: RandomSource + ?Sized>(rng: &mut R) -> SurpriseDraw {
    let mode = if rng.next_unit() < 0.5 { Mode::Light } else { Mode::Dark };
    let strategy = SURPRISE_POOL[pick_index(rng, SURPRISE_POOL.len())];
    let hue = rng.next_unit() * 360.0;
    let saturation = 50.0 + rng.next_unit() * 40.0;
    let lightness = 40.0 + rng.next_unit() * 30.0;
    let seed = HexColor::from_hsl(Hsl::new(hue, saturation, lightness));

    debug!(%seed, %mode, strategy = strategy.name(), "surprise draw");
    SurpriseDraw { seed, mode, strategy }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::Xorshift32;
    use pretty_assertions::assert_eq;

    #[test]
    fn draw_order() {
        let mut rng = Sequence::new([0.2, 0.9, 0.5, 0.5, 0.5]);
        let draw = surprise(&mut rng);
        assert_eq!(
            draw,
            SurpriseDraw {
                seed: HexColor::parse_lossy("#3CDDDD"),
                mode: Mode::Light,
                strategy: HarmonyStrategy::Monochromatic,
            }
        );
    }

    #[test]
    fn upper_half_draws_dark() {
        let draw = surprise(&mut Sequence::new([0.5, 0.0, 0.0, 0.0, 0.0]));
        assert_eq!(draw.mode, Mode::Dark);
        assert_eq!(draw.strategy, HarmonyStrategy::Complementary);
    }

    #[test]
    fn compose_uses_drawn_parameters() {
        let draw = surprise(&mut Sequence::new([0.2, 0.9, 0.5, 0.5, 0.5]));
        let theme = draw.compose();
        assert_eq!(theme.primary_color.to_string(), "#3CDDDD");
        assert_eq!(theme.accent_color.to_string(), "#7DE8E8");
        assert_eq!(theme.background_color.to_string(), "#F7F8F8");
        assert_eq!(theme.text_primary_color.to_string(), "#113C3C");
        assert_eq!(theme.deposit_color.to_string(), "#00000088");
    }

    #[test]
    fn compose_ignores_the_random_source() {
        let mut rng = Xorshift32::new(5);
        for _ in 0..50 {
            let draw = surprise(&mut rng);
            let mut other = Sequence::new([0.73, 0.11, 0.42]);
            assert_eq!(
                draw.compose(),
                compose_theme_with(draw.seed, draw.mode, draw.strategy, &mut other)
            );
        }
    }

    #[test]
    fn pool_never_contains_random() {
        assert!(!SURPRISE_POOL.iter().any(|s| s.is_random()));
        let mut rng = Xorshift32::new(11);
        for _ in 0..200 {
            assert!(!surprise(&mut rng).strategy.is_random());
        }
    }
}
