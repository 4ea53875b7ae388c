// SPDX-License-Identifier: MIT
//
// Derived color operators — everything the theme engine composes.
//
// Lightness and hue operate in HSL and re-encode through rounded channels;
// mixing is plain per-channel linear interpolation in 8-bit sRGB.

use crate::color::{HexColor, Hsl, Rgba, rgb_to_hex};

impl HexColor {
    // ─── HSL operators ───────────────────────────────────────────────────

    /// Add `amount` to HSL lightness (clamped to 0–100).
    ///
    /// Negative amounts darken, positive amounts lighten.
    #[must_use]
    pub fn adjust_lightness(self, amount: f64) -> Self {
        let hsl = self.to_hsl();
        let l = (hsl.l + amount).clamp(0.0, 100.0);
        Self::from_hsl(Hsl { l, ..hsl })
    }

    /// Rotate the hue by `degrees` around the color wheel.
    ///
    /// The resulting hue is always in `[0, 360)`, whatever the sign or
    /// magnitude of `degrees`.
    #[must_use]
    pub fn rotate_hue(self, degrees: f64) -> Self {
        let hsl = self.to_hsl();
        let mut h = (hsl.h + degrees + 360.0) % 360.0;
        if h < 0.0 {
            h += 360.0;
        }
        Self::from_hsl(Hsl { h, ..hsl })
    }

    // ─── RGB operators ───────────────────────────────────────────────────

    /// Linear per-channel interpolation toward `other`.
    ///
    /// `weight` is clamped to 0–1: `0.0` returns `self`, `1.0` returns
    /// `other`.
    #[must_use]
    pub fn mix(self, other: Self, weight: f64) -> Self {
        let a = self.rgb();
        let b = other.rgb();
        let w = weight.clamp(0.0, 1.0);
        let lerp = |x: u8, y: u8| f64::from(x) * (1.0 - w) + f64::from(y) * w;
        rgb_to_hex(lerp(a.r, b.r), lerp(a.g, b.g), lerp(a.b, b.b))
    }

    /// This color as an `rgba()` token with the given alpha.
    ///
    /// The alpha is passed through as-is; keeping it in range is the
    /// caller's job.
    #[must_use]
    pub const fn to_rgba(self, alpha: f64) -> Rgba {
        Rgba::new(self.rgb(), alpha)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
