//! Light/dark rendering mode.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseModeError;

/// The rendering context a theme is derived for. Every derivation formula
/// has one constant per mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Dark,
    Light,
}

impl Mode {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Parse a mode from its name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase();
        Self::all().iter().find(|m| m.name() == lower).copied()
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Dark, Self::Light]
    }

    #[inline]
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseModeError(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_dark() {
        assert_eq!(Mode::default(), Mode::Dark);
        assert!(Mode::default().is_dark());
    }

    #[test]
    fn names_round_trip() {
        for &mode in Mode::all() {
            assert_eq!(Mode::from_name(mode.name()), Some(mode));
            assert_eq!(mode.to_string().parse::<Mode>(), Ok(mode));
        }
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!("LIGHT".parse::<Mode>(), Ok(Mode::Light));
        assert_eq!(" Dark ".parse::<Mode>(), Ok(Mode::Dark));
    }

    #[test]
    fn unknown_mode_is_an_error() {
        assert_eq!("dim".parse::<Mode>(), Err(ParseModeError("dim".to_string())));
    }
}
