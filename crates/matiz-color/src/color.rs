// SPDX-License-Identifier: MIT
//
// matiz color values — hex, RGB, and HSL with bidirectional conversion.
//
// Single-character variable names (r, g, b, h, s, l, p, q, t, d) are the
// standard mathematical convention in color science.
#![allow(clippy::many_single_char_names)]
//
// Conversion pipeline:
//
//   "#RGB" / "#RRGGBB"  →  hex_to_rgb  →  Rgb  →  rgb_to_hsl  →  Hsl
//   Hsl  →  hsl_to_rgb  →  Rgb  →  HexColor ("#RRGGBB", uppercase)
//
// Hex parsing is lossy on purpose: a malformed two-digit segment becomes a
// zero channel. Strict parsing lives in the `FromStr` impls and is only
// used where external text enters the system.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::input::is_valid_hex;

// ─── Errors ──────────────────────────────────────────────────────────────────

/// Failure to parse a color string strictly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// Not `#` followed by exactly 3 or 6 hex digits.
    #[error("invalid hex color '{0}' (expected #RGB or #RRGGBB)")]
    Hex(String),

    /// Not of the form `rgba(r,g,b,alpha)`.
    #[error("invalid rgba color '{0}' (expected rgba(r,g,b,alpha))")]
    Rgba(String),

    /// Not `#` followed by exactly 8 hex digits.
    #[error("invalid hex color with alpha '{0}' (expected #RRGGBBAA)")]
    Hexa(String),
}

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An 8-bit-per-channel sRGB triple.
///
/// Channels are `u8`, so every `Rgb` is already rounded and clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

// ─── Hsl ─────────────────────────────────────────────────────────────────────

/// Hue/saturation/lightness.
///
/// - `h`: hue in degrees, `[0, 360)`
/// - `s`: saturation in percent, `[0, 100]`
/// - `l`: lightness in percent, `[0, 100]`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    #[inline]
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }
}

// ─── HexColor ────────────────────────────────────────────────────────────────

/// A color in canonical `#RRGGBB` form.
///
/// Stored as its channels; rendering through [`Display`](fmt::Display)
/// always yields six uppercase hex digits with a leading `#`, so two equal
/// `HexColor`s always render identically.
///
/// ```
/// use matiz_color::HexColor;
///
/// let red = HexColor::parse_lossy("#f00");
/// assert_eq!(red.to_string(), "#FF0000");
///
/// let strict: HexColor = "#3366cc".parse().unwrap();
/// assert_eq!(strict.to_string(), "#3366CC");
/// assert!("3366cc".parse::<HexColor>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HexColor(Rgb);

impl HexColor {
    /// Pure black, `#000000`.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Pure white, `#FFFFFF`.
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(Rgb::new(r, g, b))
    }

    /// Parse any string the way [`hex_to_rgb`] does. Never fails.
    #[must_use]
    pub fn parse_lossy(hex: &str) -> Self {
        Self(hex_to_rgb(hex))
    }

    /// The color's channels.
    #[inline]
    #[must_use]
    pub const fn rgb(self) -> Rgb {
        self.0
    }

    /// The color in HSL.
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self.0)
    }

    /// Build from HSL, rounding each channel.
    #[must_use]
    pub fn from_hsl(hsl: Hsl) -> Self {
        Self(hsl_to_rgb(hsl))
    }
}

impl From<Rgb> for HexColor {
    fn from(rgb: Rgb) -> Self {
        Self(rgb)
    }
}

impl From<HexColor> for Rgb {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rgb { r, g, b } = self.0;
        write!(f, "#{r:02X}{g:02X}{b:02X}")
    }
}

impl FromStr for HexColor {
    type Err = ParseColorError;

    /// Accepts `#RGB` or `#RRGGBB`, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if is_valid_hex(s) {
            Ok(Self::parse_lossy(s))
        } else {
            Err(ParseColorError::Hex(s.to_string()))
        }
    }
}

// ─── Rgba ────────────────────────────────────────────────────────────────────

/// A translucent color token rendered as `rgba(r,g,b,alpha)`.
///
/// The alpha is carried verbatim, without clamping, and rendered with the
/// shortest decimal that round-trips (`0.25`, `0.18`, `1`).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: f64,
}

impl Rgba {
    #[inline]
    #[must_use]
    pub const fn new(rgb: Rgb, alpha: f64) -> Self {
        Self { rgb, alpha }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rgb { r, g, b } = self.rgb;
        write!(f, "rgba({r},{g},{b},{})", self.alpha)
    }
}

impl FromStr for Rgba {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseColorError::Rgba(s.to_string());

        let inner = s
            .trim()
            .strip_prefix("rgba(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(err)?;

        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        let [r, g, b, alpha] = parts.as_slice() else {
            return Err(err());
        };

        let channel = |v: &str| v.parse::<u8>().map_err(|_| err());
        let alpha = alpha.parse::<f64>().map_err(|_| err())?;

        Ok(Self::new(Rgb::new(channel(r)?, channel(g)?, channel(b)?), alpha))
    }
}

// ─── HexaColor ───────────────────────────────────────────────────────────────

/// A color with an 8-bit alpha channel in `#RRGGBBAA` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HexaColor {
    pub rgb: Rgb,
    pub alpha: u8,
}

impl HexaColor {
    #[inline]
    #[must_use]
    pub const fn new(rgb: Rgb, alpha: u8) -> Self {
        Self { rgb, alpha }
    }
}

impl fmt::Display for HexaColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rgb { r, g, b } = self.rgb;
        write!(f, "#{r:02X}{g:02X}{b:02X}{:02X}", self.alpha)
    }
}

impl FromStr for HexaColor {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseColorError::Hexa(s.to_string());
        let digits = s.strip_prefix('#').ok_or_else(err)?.as_bytes();
        if digits.len() != 8 {
            return Err(err());
        }
        let byte = |i: usize| parse_hex_byte(&digits[i..i + 2]).ok_or_else(err);
        Ok(Self::new(Rgb::new(byte(0)?, byte(2)?, byte(4)?), byte(6)?))
    }
}

// ─── Serde (string forms) ────────────────────────────────────────────────────

macro_rules! string_serde {
    ($ty:ty) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

string_serde!(HexColor);
string_serde!(Rgba);
string_serde!(HexaColor);

// ─── Conversions ─────────────────────────────────────────────────────────────

/// Parse a hex color string into channels. Total: never fails.
///
/// - A leading `#` is optional.
/// - Exactly three digits are expanded by doubling (`F0A` → `FF00AA`).
/// - Anything else is right-padded with `0` to six digits, then truncated.
/// - A two-digit segment that isn't valid hex becomes `0`.
#[must_use]
pub fn hex_to_rgb(hex: &str) -> Rgb {
    let digits = hex.strip_prefix('#').unwrap_or(hex).as_bytes();

    let mut full = [b'0'; 6];
    if digits.len() == 3 {
        for (i, &d) in digits.iter().enumerate() {
            full[i * 2] = d;
            full[i * 2 + 1] = d;
        }
    } else {
        for (slot, &d) in full.iter_mut().zip(digits) {
            *slot = d;
        }
    }

    let segment = |i: usize| parse_hex_byte(&full[i..i + 2]).unwrap_or(0);
    Rgb::new(segment(0), segment(2), segment(4))
}

/// Encode channels as canonical `#RRGGBB`.
///
/// Each channel is rounded to the nearest integer, then clamped to
/// `[0, 255]`, independently.
#[must_use]
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> HexColor {
    HexColor::new(to_channel(r), to_channel(g), to_channel(b))
}

/// Convert channels to HSL.
///
/// Achromatic input (`r == g == b`) yields `h = 0` and `s = 0`.
#[must_use]
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    // Channel comparisons on the integers: division by 255 preserves both
    // order and equality, and keeps the float comparisons out of the way.
    if rgb.r == rgb.g && rgb.g == rgb.b {
        return Hsl::new(0.0, 0.0, l * 100.0);
    }

    let d = max - min;
    let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };

    let mut h = if rgb.r >= rgb.g && rgb.r >= rgb.b {
        (g - b) / d + if rgb.g < rgb.b { 6.0 } else { 0.0 }
    } else if rgb.g >= rgb.b {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    h /= 6.0;

    Hsl::new(h * 360.0, s * 100.0, l * 100.0)
}

/// Convert HSL to channels, rounding each to the nearest integer.
///
/// Zero saturation short-circuits to a pure gray of `round(l/100 * 255)`.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = hsl.h / 360.0;
    let s = hsl.s / 100.0;
    let l = hsl.l / 100.0;

    if s == 0.0 {
        let v = to_channel(l * 255.0);
        return Rgb::new(v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Rgb::new(
        to_channel(hue_to_channel(p, q, h + 1.0 / 3.0) * 255.0),
        to_channel(hue_to_channel(p, q, h) * 255.0),
        to_channel(hue_to_channel(p, q, h - 1.0 / 3.0) * 255.0),
    )
}

/// The piecewise "hue to rgb" helper of the standard HSL model.
#[inline]
fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

// ─── Hex digits ──────────────────────────────────────────────────────────────

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

/// Round half away from zero, then clamp to a channel. NaN maps to 0.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_channel(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.round().clamp(0.0, 255.0) as u8
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
