//! Legible text colors for a given background.
//!
//! Light vs. dark text is decided by YIQ perceived brightness against a
//! fixed threshold. [`contrast_text`] returns neutral inks;
//! [`harmonious_text`] tints the text toward the theme's primary color.

use matiz_color::{HexColor, Hsl, Rgb};

use crate::mode::Mode;

/// Dark ink for light-mode surfaces.
pub const LIGHT_MODE_DARK_INK: HexColor = HexColor::new(0x2D, 0x37, 0x48);

/// Dark ink for dark-mode surfaces.
pub const DARK_MODE_DARK_INK: HexColor = HexColor::new(0x1A, 0x20, 0x2C);

/// Light ink for light-mode surfaces.
pub const LIGHT_MODE_LIGHT_INK: HexColor = HexColor::new(0xF7, 0xFA, 0xFC);

/// Light ink for dark-mode surfaces. Currently the same value as
/// [`LIGHT_MODE_LIGHT_INK`].
pub const DARK_MODE_LIGHT_INK: HexColor = HexColor::new(0xF7, 0xFA, 0xFC);

/// Backgrounds at or above this YIQ brightness get dark text.
pub const LUMINANCE_THRESHOLD: f64 = 128.0;

/// YIQ perceived brightness, `0.0..=255.0`.
///
/// Computed in integers first so the threshold comparison is exact.
#[must_use]
pub fn luminance(color: HexColor) -> f64 {
    let Rgb { r, g, b } = color.rgb();
    let weighted = u32::from(r) * 299 + u32::from(g) * 587 + u32::from(b) * 114;
    f64::from(weighted) / 1000.0
}

#[inline]
#[must_use]
pub fn needs_light_text(background: HexColor) -> bool {
    luminance(background) < LUMINANCE_THRESHOLD
}

/// A neutral text color that reads on `background`.
#[must_use]
pub fn contrast_text(background: HexColor, mode: Mode) -> HexColor {
    match (mode, needs_light_text(background)) {
        (Mode::Light, true) => LIGHT_MODE_LIGHT_INK,
        (Mode::Light, false) => LIGHT_MODE_DARK_INK,
        (Mode::Dark, true) => DARK_MODE_LIGHT_INK,
        (Mode::Dark, false) => DARK_MODE_DARK_INK,
    }
}

/// A text color that reads on `background` and carries a hint of `primary`.
///
/// Light text is a near-white mixed slightly toward the primary. Dark text
/// keeps the primary's hue at a fixed low lightness, with a saturation
/// floor so even an achromatic primary yields a tinted ink.
#[must_use]
pub fn harmonious_text(background: HexColor, primary: HexColor, mode: Mode) -> HexColor {
    if needs_light_text(background) {
        return match mode {
            Mode::Light => HexColor::WHITE.mix(primary, 0.05),
            Mode::Dark => DARK_MODE_LIGHT_INK.mix(primary, 0.1),
        };
    }

    let Hsl { h, s, .. } = primary.to_hsl();
    let (saturation, lightness) = match mode {
        Mode::Light => ((s * 0.8).max(20.0), 15.0),
        Mode::Dark => ((s * 0.9).max(25.0), 12.0),
    };
    HexColor::from_hsl(Hsl::new(h, saturation, lightness))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn hex(s: &str) -> HexColor {
        HexColor::parse_lossy(s)
    }

    #[test]
    fn luminance_extremes() {
        assert_eq!(luminance(HexColor::BLACK), 0.0);
        assert_eq!(luminance(HexColor::WHITE), 255.0);
    }

    #[test]
    fn threshold_is_inclusive_for_dark_text() {
        // #808080 → exactly 128.
        assert_eq!(luminance(hex("#808080")), 128.0);
        assert!(!needs_light_text(hex("#808080")));
        assert!(needs_light_text(hex("#7F7F7F")));
    }

    #[test]
    fn contrast_text_inks() {
        assert_eq!(contrast_text(HexColor::BLACK, Mode::Dark), hex("#F7FAFC"));
        assert_eq!(contrast_text(HexColor::BLACK, Mode::Light), hex("#F7FAFC"));
        assert_eq!(contrast_text(HexColor::WHITE, Mode::Dark), hex("#1A202C"));
        assert_eq!(contrast_text(HexColor::WHITE, Mode::Light), hex("#2D3748"));
        assert_eq!(contrast_text(hex("#808080"), Mode::Light), hex("#2D3748"));
    }

    #[test]
    fn harmonious_light_text() {
        let primary = hex("#3366CC");
        assert_eq!(harmonious_text(HexColor::BLACK, primary, Mode::Light), hex("#F5F7FC"));
        assert_eq!(harmonious_text(HexColor::BLACK, primary, Mode::Dark), hex("#E3EBF7"));
    }

    #[test]
    fn harmonious_dark_text() {
        let primary = hex("#3366CC");
        assert_eq!(harmonious_text(HexColor::WHITE, primary, Mode::Light), hex("#142039"));
        assert_eq!(harmonious_text(HexColor::WHITE, primary, Mode::Dark), hex("#0E192F"));
    }

    #[test]
    fn achromatic_primary_still_gets_saturation_floor() {
        assert_eq!(
            harmonious_text(HexColor::WHITE, hex("#808080"), Mode::Light),
            hex("#2E1F1F")
        );
    }

    proptest! {
        #[test]
        fn light_text_is_bright_and_dark_text_is_dark(
            bg in any::<(u8, u8, u8)>(),
            primary in any::<(u8, u8, u8)>(),
            light in any::<bool>(),
        ) {
            let bg = HexColor::new(bg.0, bg.1, bg.2);
            let primary = HexColor::new(primary.0, primary.1, primary.2);
            let mode = if light { Mode::Light } else { Mode::Dark };
            let text = harmonious_text(bg, primary, mode);
            if needs_light_text(bg) {
                prop_assert!(luminance(text) >= 200.0, "{text} on {bg}");
            } else {
                prop_assert!(luminance(text) < 80.0, "{text} on {bg}");
            }
        }
    }
}
