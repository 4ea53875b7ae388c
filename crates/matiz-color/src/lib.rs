// SPDX-License-Identifier: MIT
//
// matiz-color — color primitives for the matiz theme engine.
//
// Three representations of one 8-bit sRGB color and the conversions
// between them:
//
//   hex string  ↔  Rgb (u8 triple)  ↔  Hsl (degrees + percentages)
//
// On top of those sit the derived operators the theme engine is built
// from: lightness adjustment, hue rotation, linear RGB mixing, and
// `rgba()` formatting.
//
// Every function here is total. Malformed hex degrades to zeroed channels
// instead of failing, and every intermediate is clamped back into its
// domain before being re-encoded. Only the strict `FromStr` parsers used
// at input boundaries can fail.
//
// Themes built from these operators are matched against stored catalogs
// by exact string equality, so the floating-point evaluation order of each
// formula is fixed. No fused multiply-add, no algebraic rearrangement.
#![allow(clippy::suboptimal_flops)]

pub mod color;
pub mod input;
pub mod ops;

pub use color::{
    HexColor, HexaColor, Hsl, ParseColorError, Rgb, Rgba, hex_to_rgb, hsl_to_rgb, rgb_to_hex,
    rgb_to_hsl,
};
pub use input::{is_valid_hex, sanitize_hex_input};
