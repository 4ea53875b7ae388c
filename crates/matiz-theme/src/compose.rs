//! Theme composition: seed + mode + strategy → [`ThemeRecord`].
//!
//! Every token is derived from the harmony triple and a mode-dependent
//! background through the [`matiz_color`] operators. The per-mode constants
//! live in [`ModeOffsets`]; nothing else differs between light and dark.

use matiz_color::{HexColor, HexaColor, Hsl, Rgb};
use tracing::debug;

use crate::contrast::harmonious_text;
use crate::harmony::{HarmonyStrategy, HarmonyTriple, generate_harmony_with};
use crate::mode::Mode;
use crate::random::{RandomSource, Xorshift32};
use crate::record::ThemeRecord;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Near-black base the dark background is mixed from.
pub const DEEP_BASE: HexColor = HexColor::new(0x0B, 0x0B, 0x0F);

/// Fixed deposit token for light mode, independent of the seed.
pub const DEPOSIT_LIGHT: HexaColor = HexaColor::new(Rgb::new(0x00, 0x00, 0x00), 0x88);

/// Fixed deposit token for dark mode, independent of the seed.
pub const DEPOSIT_DARK: HexaColor = HexaColor::new(Rgb::new(0xFF, 0xFF, 0xFF), 0x66);

const GRADIENT_FROM_ALPHA: f64 = 0.25;
const GRADIENT_TO_ALPHA: f64 = 0.18;
const OVERLAY_ALPHA: f64 = 0.14;
const OVERLAY_HOVER_ALPHA: f64 = 0.22;
const SHADOW_ALPHA: f64 = 0.28;

/// Lightness offsets that differ between modes.
///
/// | token              | from       | light | dark |
/// |--------------------|------------|-------|------|
/// | header             | background | -12   | -6   |
/// | top text           | primary    | +40   | +20  |
/// | profile background | background | +6    | -6   |
/// | button 1           | primary    | -5    | 0    |
/// | button 2           | primary    | -12   | -8   |
/// | button 3           | primary    | -20   | -16  |
/// | button 4           | primary    | +8    | +10  |
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeOffsets {
    pub header: f64,
    pub top_text: f64,
    pub profile: f64,
    pub buttons: [f64; 4],
}

impl ModeOffsets {
    pub const LIGHT: Self = Self {
        header: -12.0,
        top_text: 40.0,
        profile: 6.0,
        buttons: [-5.0, -12.0, -20.0, 8.0],
    };

    pub const DARK: Self = Self {
        header: -6.0,
        top_text: 20.0,
        profile: -6.0,
        buttons: [0.0, -8.0, -16.0, 10.0],
    };

    #[must_use]
    pub const fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Light => Self::LIGHT,
            Mode::Dark => Self::DARK,
        }
    }
}

// ---------------------------------------------------------------------------
// Composition
// ---------------------------------------------------------------------------

/// Compose a complete theme, drawing from a clock-seeded generator when
/// `strategy` is [`HarmonyStrategy::Random`].
#[must_use]
pub fn compose_theme(seed: HexColor, mode: Mode, strategy: HarmonyStrategy) -> ThemeRecord {
    let mut rng = Xorshift32::from_clock();
    compose_theme_with(seed, mode, strategy, &mut rng)
}

/// Compose a complete theme with an explicit random source.
///
/// For every strategy except `random` the result is a pure function of
/// `(seed, mode, strategy)`.
pub fn compose_theme_with<R: RandomSource + ?Sized>(
    seed: HexColor,
    mode: Mode,
    strategy: HarmonyStrategy,
    rng: &mut R,
) -> ThemeRecord {
    let HarmonyTriple { primary, secondary, accent } = generate_harmony_with(seed, strategy, rng);
    let offsets = ModeOffsets::for_mode(mode);
    let background = background_for(seed, mode);
    let [b1, b2, b3, b4] = offsets.buttons.map(|amount| primary.adjust_lightness(amount));

    debug!(%seed, %mode, strategy = strategy.name(), %primary, %background, "composed theme");

    ThemeRecord {
        swiper_theme_color: accent,
        primary_color: primary,
        secondary_color: secondary,
        accent_color: accent,
        background_color: background,
        text_primary_color: harmonious_text(background, primary, mode),
        background_opacity: primary.to_rgba(OVERLAY_ALPHA),
        background_opacity_hover: primary.to_rgba(OVERLAY_HOVER_ALPHA),
        header_color: background.adjust_lightness(offsets.header),
        deposit_color: match mode {
            Mode::Light => DEPOSIT_LIGHT,
            Mode::Dark => DEPOSIT_DARK,
        },
        gradient_color: primary.to_rgba(GRADIENT_FROM_ALPHA),
        gradient_color_to: secondary.to_rgba(GRADIENT_TO_ALPHA),
        tw_shadow: primary.to_rgba(SHADOW_ALPHA),
        text_top_color: primary.adjust_lightness(offsets.top_text),
        background_profile: background.adjust_lightness(offsets.profile),
        text_btn_primary: harmonious_text(primary, primary, mode),
        color_button1: b1,
        color_button2: b2,
        color_button3: b3,
        color_button4: b4,
    }
}

/// The page background for `seed`.
///
/// Light: the seed's hue at low saturation (at most 8) and lightness 97.
/// Dark: a quarter of the darkened seed mixed into [`DEEP_BASE`].
#[must_use]
pub fn background_for(seed: HexColor, mode: Mode) -> HexColor {
    match mode {
        Mode::Light => {
            let Hsl { h, s, .. } = seed.to_hsl();
            HexColor::from_hsl(Hsl::new(h, (s * 0.15).min(8.0), 97.0))
        }
        Mode::Dark => DEEP_BASE.mix(seed.adjust_lightness(-40.0), 0.25),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::Sequence;
    use pretty_assertions::assert_eq;

    fn hex(s: &str) -> HexColor {
        HexColor::parse_lossy(s)
    }

    fn compose(seed: &str, mode: Mode, strategy: HarmonyStrategy) -> ThemeRecord {
        compose_theme_with(hex(seed), mode, strategy, &mut Sequence::default())
    }

    fn token_map(record: &ThemeRecord) -> Vec<(&'static str, String)> {
        record.tokens().to_vec()
    }

    fn expected(pairs: &[(&'static str, &str)]) -> Vec<(&'static str, String)> {
        pairs.iter().map(|(k, v)| (*k, (*v).to_string())).collect()
    }

    #[test]
    fn red_light_complementary() {
        let theme = compose("#FF0000", Mode::Light, HarmonyStrategy::Complementary);
        assert_eq!(
            token_map(&theme),
            expected(&[
                ("swiper_theme_color", "#00FFFF"),
                ("primary_color", "#FF0000"),
                ("secondary_color", "#990000"),
                ("accent_color", "#00FFFF"),
                ("background_color", "#F8F7F7"),
                ("text_primary_color", "#450808"),
                ("background_opacity", "rgba(255,0,0,0.14)"),
                ("background_opacity_hover", "rgba(255,0,0,0.22)"),
                ("header_color", "#DBD6D6"),
                ("deposit_color", "#00000088"),
                ("gradient_color", "rgba(255,0,0,0.25)"),
                ("gradient_color_to", "rgba(153,0,0,0.18)"),
                ("tw_shadow", "rgba(255,0,0,0.28)"),
                ("text_top_color", "#FFCCCC"),
                ("background_profile", "#FFFFFF"),
                ("text_btn_primary", "#FFF2F2"),
                ("color_button1", "#E60000"),
                ("color_button2", "#C20000"),
                ("color_button3", "#990000"),
                ("color_button4", "#FF2929"),
            ])
        );
    }

    #[test]
    fn blue_dark_triadic() {
        let theme = compose("#3366CC", Mode::Dark, HarmonyStrategy::Triadic);
        assert_eq!(theme.swiper_theme_color, hex("#66CC33"));
        assert_eq!(theme.accent_color, hex("#66CC33"));
        assert_eq!(theme.secondary_color, hex("#CC3366"));
        assert_eq!(theme.background_color, hex("#0B0D16"));
        assert_eq!(theme.text_primary_color, hex("#E3EBF7"));
        assert_eq!(theme.header_color, hex("#010102"));
        assert_eq!(theme.deposit_color.to_string(), "#FFFFFF66");
        assert_eq!(theme.text_top_color, hex("#85A3E0"));
        assert_eq!(theme.background_profile, hex("#010102"));
        assert_eq!(theme.text_btn_primary, hex("#E3EBF7"));
        assert_eq!(theme.buttons(), ["#3366CC", "#2B56AB", "#23458B", "#5C85D6"].map(hex));
        assert_eq!(theme.gradient_color_to.to_string(), "rgba(204,51,102,0.18)");
    }

    #[test]
    fn blue_light_monochromatic() {
        let theme = compose("#3366CC", Mode::Light, HarmonyStrategy::Monochromatic);
        assert_eq!(theme.accent_color, hex("#85A3E0"));
        assert_eq!(theme.swiper_theme_color, hex("#85A3E0"));
        assert_eq!(theme.secondary_color, hex("#2952A3"));
        assert_eq!(theme.background_color, hex("#F7F7F8"));
        assert_eq!(theme.text_primary_color, hex("#142039"));
        assert_eq!(theme.header_color, hex("#D6D6DB"));
        assert_eq!(theme.text_top_color, hex("#D6E0F5"));
        assert_eq!(theme.background_profile, HexColor::WHITE);
        assert_eq!(theme.text_btn_primary, hex("#F5F7FC"));
        assert_eq!(theme.buttons(), ["#2E5CB8", "#274E9B", "#1F3D7A", "#547ED4"].map(hex));
        assert_eq!(theme.gradient_color_to.to_string(), "rgba(41,82,163,0.18)");
    }

    #[test]
    fn red_dark_analogous_swaps_primary_and_accent_roles() {
        let theme = compose("#FF0000", Mode::Dark, HarmonyStrategy::Analogous);
        assert_eq!(theme.primary_color, hex("#FF8000"));
        assert_eq!(theme.accent_color, hex("#FF0000"));
        assert_eq!(theme.background_color, hex("#15080B"));
        assert_eq!(theme.text_primary_color, hex("#F8EEE3"));
        assert_eq!(theme.text_btn_primary, hex("#3A1F03"));
        assert_eq!(theme.buttons(), ["#FF8000", "#D66C00", "#AD5700", "#FF9933"].map(hex));
    }

    #[test]
    fn black_seed_dark_saturates_at_black() {
        let theme = compose("#000000", Mode::Dark, HarmonyStrategy::Monochromatic);
        assert_eq!(theme.accent_color, hex("#B3B3B3"));
        assert_eq!(theme.secondary_color, hex("#666666"));
        assert_eq!(theme.background_color, hex("#08080B"));
        assert_eq!(theme.text_primary_color, hex("#DEE1E3"));
        assert_eq!(theme.header_color, HexColor::BLACK);
        assert_eq!(theme.text_top_color, hex("#333333"));
        assert_eq!(theme.background_profile, HexColor::BLACK);
        assert_eq!(theme.buttons(), ["#000000", "#000000", "#000000", "#1A1A1A"].map(hex));
    }

    #[test]
    fn white_seed_light_gets_tinted_text() {
        let theme = compose("#FFFFFF", Mode::Light, HarmonyStrategy::Monochromatic);
        assert_eq!(theme.background_color, hex("#F7F7F7"));
        assert_eq!(theme.text_primary_color, hex("#2E1F1F"));
        assert_eq!(theme.header_color, hex("#D8D8D8"));
        assert_eq!(theme.text_top_color, HexColor::WHITE);
        assert_eq!(theme.buttons(), ["#F2F2F2", "#E0E0E0", "#CCCCCC", "#FFFFFF"].map(hex));
    }

    #[test]
    fn deposit_depends_only_on_mode() {
        for seed in ["#000000", "#3366CC", "#FF0000", "#FFFFFF"] {
            let light = compose(seed, Mode::Light, HarmonyStrategy::Triadic);
            let dark = compose(seed, Mode::Dark, HarmonyStrategy::Triadic);
            assert_eq!(light.deposit_color, DEPOSIT_LIGHT);
            assert_eq!(dark.deposit_color, DEPOSIT_DARK);
        }
    }

    #[test]
    fn compose_is_deterministic() {
        let a = compose_theme(hex("#3366CC"), Mode::Dark, HarmonyStrategy::Triadic);
        let b = compose_theme(hex("#3366CC"), Mode::Dark, HarmonyStrategy::Triadic);
        assert_eq!(a, b);
        assert!(a.diff(&b).is_empty());
    }

    #[test]
    fn random_strategy_follows_the_source() {
        let mut rng = Sequence::new([0.5, 0.5, 0.5, 0.6]);
        let theme = compose_theme_with(hex("#000"), Mode::Light, HarmonyStrategy::Random, &mut rng);
        assert_eq!(theme.primary_color, hex("#47D1D1"));
        assert_eq!(theme.secondary_color, hex("#D147D1"));
        assert_eq!(theme.accent_color, hex("#D1D147"));
    }

    #[test]
    fn light_background_saturation_is_capped() {
        let bg = background_for(hex("#FF0000"), Mode::Light);
        assert!(bg.to_hsl().s <= 8.5, "{bg}");
        assert_eq!(bg, hex("#F8F7F7"));
    }
}
