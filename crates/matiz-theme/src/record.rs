//! Theme records: the composed artifact and its stored text form.
//!
//! [`ThemeRecord`] is what composition produces. Opaque tokens are
//! [`HexColor`]s, translucent overlays are [`Rgba`]s, and the deposit token
//! is a [`HexaColor`]. Each serializes to the string form the UI consumes.
//!
//! [`StoredRecord`] is the same twenty keys as they sit in a catalog or a
//! saved profile: whatever text was written, kept verbatim. Catalog
//! matching compares stored text exactly, so `#ff0000` and `#FF0000` are
//! different tokens.

use std::fmt;

use matiz_color::{HexColor, HexaColor, Rgba};
use serde::{Deserialize, Serialize};

use crate::mode::Mode;

// ─── Token ──────────────────────────────────────────────────────────────────

/// One stored token, exactly as written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(String);

/// What a stored token's text parses as.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenValue {
    Hex(HexColor),
    Hexa(HexaColor),
    Rgba(Rgba),
    /// Text none of the color forms accept.
    Raw,
}

impl Token {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Classify the text. Never fails; unrecognized text is [`TokenValue::Raw`].
    #[must_use]
    pub fn value(&self) -> TokenValue {
        if let Ok(hex) = self.0.parse() {
            TokenValue::Hex(hex)
        } else if let Ok(hexa) = self.0.parse() {
            TokenValue::Hexa(hexa)
        } else if let Ok(rgba) = self.0.parse() {
            TokenValue::Rgba(rgba)
        } else {
            TokenValue::Raw
        }
    }
}

impl From<String> for Token {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for Token {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ─── Records ────────────────────────────────────────────────────────────────

// One field list drives both record shapes, the key table, and the
// ordered token views, so they can't drift apart.
macro_rules! theme_records {
    ($($field:ident: $ty:ty,)*) => {
        /// A complete composed theme: every color token the UI renders with.
        #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
        pub struct ThemeRecord {
            $(pub $field: $ty,)*
        }

        /// A theme record as stored text, one verbatim [`Token`] per key.
        ///
        /// All twenty keys are required; their values may be any string.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct StoredRecord {
            $(pub $field: Token,)*
        }

        /// Token names, in record order.
        pub const TOKEN_KEYS: [&str; 20] = [$(stringify!($field)),*];

        impl ThemeRecord {
            /// `(key, rendered value)` pairs in record order.
            #[must_use]
            pub fn tokens(&self) -> [(&'static str, String); 20] {
                [$((stringify!($field), self.$field.to_string())),*]
            }

            /// The rendered text of every token, as it would be stored.
            #[must_use]
            pub fn to_stored(&self) -> StoredRecord {
                StoredRecord {
                    $($field: Token::from(self.$field.to_string()),)*
                }
            }
        }

        impl StoredRecord {
            /// `(key, stored text)` pairs in record order.
            #[must_use]
            pub fn tokens(&self) -> [(&'static str, &str); 20] {
                [$((stringify!($field), self.$field.as_str())),*]
            }
        }
    };
}

theme_records! {
    swiper_theme_color: HexColor,
    primary_color: HexColor,
    secondary_color: HexColor,
    accent_color: HexColor,
    background_color: HexColor,
    text_primary_color: HexColor,
    background_opacity: Rgba,
    background_opacity_hover: Rgba,
    header_color: HexColor,
    deposit_color: HexaColor,
    gradient_color: Rgba,
    gradient_color_to: Rgba,
    tw_shadow: Rgba,
    text_top_color: HexColor,
    background_profile: HexColor,
    text_btn_primary: HexColor,
    color_button1: HexColor,
    color_button2: HexColor,
    color_button3: HexColor,
    color_button4: HexColor,
}

impl ThemeRecord {
    /// Keys whose rendered values differ between `self` and `other`.
    #[must_use]
    pub fn diff(&self, other: &Self) -> Vec<&'static str> {
        self.tokens()
            .into_iter()
            .zip(other.tokens())
            .filter(|((_, a), (_, b))| a != b)
            .map(|((key, _), _)| key)
            .collect()
    }

    /// The four button shades, in order.
    #[must_use]
    pub const fn buttons(&self) -> [HexColor; 4] {
        [self.color_button1, self.color_button2, self.color_button3, self.color_button4]
    }
}

impl StoredRecord {
    /// Keys whose stored text differs between `self` and `other`.
    ///
    /// Plain string comparison: no parsing, no case folding.
    #[must_use]
    pub fn diff(&self, other: &Self) -> Vec<&'static str> {
        self.tokens()
            .into_iter()
            .zip(other.tokens())
            .filter(|((_, a), (_, b))| a != b)
            .map(|((key, _), _)| key)
            .collect()
    }

    /// The mode this record was composed for, if its background is a hex
    /// color.
    #[must_use]
    pub fn detect_mode(&self) -> Option<Mode> {
        match self.background_color.value() {
            TokenValue::Hex(background) => Some(mode_for_background(background)),
            _ => None,
        }
    }
}

/// The mode a composed record was made for: light iff its background's
/// HSL lightness is above 50.
#[must_use]
pub fn detect_mode(record: &ThemeRecord) -> Mode {
    mode_for_background(record.background_color)
}

fn mode_for_background(background: HexColor) -> Mode {
    if background.to_hsl().l > 50.0 {
        Mode::Light
    } else {
        Mode::Dark
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
