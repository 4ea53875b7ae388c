//! # matiz-theme — Seed-Color Theme Engine
//!
//! Turns one seed color plus a light/dark [`Mode`] into a complete,
//! internally consistent UI theme: twenty named color tokens. One parameter
//! shift (seed, mode, harmony strategy) produces an entirely new theme with
//! legible text and a coherent button ramp.
//!
//! # Architecture
//!
//! ```text
//! seed + HarmonyStrategy (+ RandomSource for `random`)
//!     │
//!     ▼
//! harmony.rs:  color-wheel rule → HarmonyTriple { primary, secondary, accent }
//!     │
//!     ▼
//! compose.rs:  background, header, overlays, button ramp (per-mode offsets)
//!     │        └─ contrast.rs: YIQ luminance → legible, primary-tinted text
//!     ▼
//! record.rs:   ThemeRecord — 20 ordered tokens, serialized as strings
//!     │
//!     ▼
//! catalog.rs:  exact text matching of StoredRecords against a catalog
//! ```
//!
//! # Reproducibility
//!
//! Everything except the `random` strategy and [`surprise()`] is a pure
//! function of its inputs, down to the last bit: stored themes are
//! recognized by comparing every token for equality. The random paths draw
//! from an injected [`RandomSource`], so fixing the source fixes the output.
//!
//! ```
//! use matiz_color::HexColor;
//! use matiz_theme::{HarmonyStrategy, Mode, compose_theme};
//!
//! let seed = HexColor::new(0xFF, 0x00, 0x00);
//! let theme = compose_theme(seed, Mode::Light, HarmonyStrategy::Complementary);
//! assert_eq!(theme.primary_color.to_string(), "#FF0000");
//! assert_eq!(theme.accent_color.to_string(), "#00FFFF");
//! assert_eq!(theme.secondary_color.to_string(), "#990000");
//! ```

// Color math reads best with the conventional single-letter names.
#![allow(clippy::many_single_char_names)]
// Small integer-to-float casts (pool lengths) are exact.
#![allow(clippy::cast_precision_loss)]
// Derivations must evaluate in a fixed order; fused multiply-add would
// change the last bit and break catalog matching.
#![allow(clippy::suboptimal_flops)]

pub mod catalog;
pub mod compose;
pub mod contrast;
pub mod error;
pub mod harmony;
pub mod mode;
pub mod random;
pub mod record;
pub mod surprise;

pub use catalog::{Catalog, PredefinedTheme};
pub use compose::{compose_theme, compose_theme_with};
pub use contrast::{contrast_text, harmonious_text, luminance, needs_light_text};
pub use error::{CatalogError, ParseModeError, ParseStrategyError};
pub use harmony::{
    HarmonyStrategy, HarmonyTriple, MonochromaticRamp, Tetrad, generate_harmony,
    generate_harmony_with,
};
pub use mode::Mode;
pub use random::{RandomSource, Sequence, Xorshift32};
pub use record::{StoredRecord, ThemeRecord, Token, TokenValue, detect_mode};
pub use surprise::{SurpriseDraw, surprise};
