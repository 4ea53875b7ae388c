//! Predefined-theme catalogs and exact matching against them.
//!
//! The catalog is supplied by the caller, usually as JSON. Entries are kept
//! as [`StoredRecord`]s, so every token's text survives as written and
//! matching is exact string equality on all twenty of them. That is why
//! composition must be bit-for-bit reproducible.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::CatalogError;
use crate::record::StoredRecord;

/// A named theme from a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredefinedTheme {
    pub name: String,
    pub colors: StoredRecord,
}

/// An ordered list of predefined themes with unique names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    themes: Vec<PredefinedTheme>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate names.
    pub fn new(themes: Vec<PredefinedTheme>) -> Result<Self, CatalogError> {
        for (i, theme) in themes.iter().enumerate() {
            if themes[..i].iter().any(|t| t.name == theme.name) {
                warn!(name = %theme.name, "duplicate catalog entry");
                return Err(CatalogError::DuplicateName(theme.name.clone()));
            }
        }
        Ok(Self { themes })
    }

    /// Parse a catalog from a JSON array of `{ "name", "colors" }` objects.
    ///
    /// Token values are not interpreted; any string is accepted.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let themes: Vec<PredefinedTheme> = serde_json::from_str(json)?;
        debug!(count = themes.len(), "parsed catalog");
        Self::new(themes)
    }

    pub fn to_json(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(&self.themes)?)
    }

    #[must_use]
    pub fn themes(&self) -> &[PredefinedTheme] {
        &self.themes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Look up a theme by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PredefinedTheme> {
        self.themes.iter().find(|t| t.name == name)
    }

    /// The first theme whose tokens equal `record`'s, text for text.
    #[must_use]
    pub fn find_match(&self, record: &StoredRecord) -> Option<&PredefinedTheme> {
        self.themes.iter().find(|t| t.colors.diff(record).is_empty())
    }

    /// The theme with the fewest differing tokens, and those tokens.
    ///
    /// Ties go to the earlier entry. `None` only for an empty catalog.
    #[must_use]
    pub fn nearest(&self, record: &StoredRecord) -> Option<(&PredefinedTheme, Vec<&'static str>)> {
        self.themes
            .iter()
            .map(|t| (t, t.colors.diff(record)))
            .min_by_key(|(_, diff)| diff.len())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::compose_theme;
    use crate::harmony::HarmonyStrategy;
    use crate::mode::Mode;
    use crate::record::{ThemeRecord, Token};
    use matiz_color::HexColor;
    use pretty_assertions::assert_eq;

    fn hex(s: &str) -> HexColor {
        HexColor::parse_lossy(s)
    }

    fn entry(name: &str, seed: &str, mode: Mode, strategy: HarmonyStrategy) -> PredefinedTheme {
        PredefinedTheme {
            name: name.to_string(),
            colors: compose_theme(hex(seed), mode, strategy).to_stored(),
        }
    }

    fn ember_live() -> ThemeRecord {
        compose_theme(hex("#FF0000"), Mode::Light, HarmonyStrategy::Complementary)
    }

    fn sample() -> Catalog {
        Catalog::new(vec![
            entry("ocean", "#3366CC", Mode::Dark, HarmonyStrategy::Triadic),
            entry("ember", "#FF0000", Mode::Light, HarmonyStrategy::Complementary),
            entry("slate", "#3366CC", Mode::Light, HarmonyStrategy::Monochromatic),
        ])
        .unwrap()
    }

    #[test]
    fn find_match_recognizes_recomposed_theme() {
        let catalog = sample();
        let live = ember_live().to_stored();
        assert_eq!(catalog.find_match(&live).map(|t| t.name.as_str()), Some("ember"));
    }

    #[test]
    fn any_changed_token_breaks_the_match() {
        let catalog = sample();
        let mut live = ember_live();
        live.tw_shadow.alpha = 0.3;
        let live = live.to_stored();
        assert!(catalog.find_match(&live).is_none());

        let (nearest, diff) = catalog.nearest(&live).unwrap();
        assert_eq!(nearest.name, "ember");
        assert_eq!(diff, vec!["tw_shadow"]);
    }

    #[test]
    fn nearest_on_empty_catalog_is_none() {
        let live = ember_live().to_stored();
        assert!(Catalog::default().nearest(&live).is_none());
        assert!(Catalog::default().find_match(&live).is_none());
    }

    #[test]
    fn get_by_name() {
        let catalog = sample();
        assert_eq!(catalog.len(), 3);
        assert!(catalog.get("slate").is_some());
        assert!(catalog.get("Slate").is_none());
    }

    #[test]
    fn duplicate_names_rejected() {
        let err = Catalog::new(vec![
            entry("ocean", "#3366CC", Mode::Dark, HarmonyStrategy::Triadic),
            entry("ocean", "#FF0000", Mode::Dark, HarmonyStrategy::Triadic),
        ])
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateName(name) if name == "ocean"));
    }

    #[test]
    fn json_round_trip() {
        let catalog = sample();
        let json = catalog.to_json().unwrap();
        assert_eq!(Catalog::from_json(&json).unwrap(), catalog);
    }

    #[test]
    fn case_differences_do_not_match() {
        let catalog = sample();
        let mut live = ember_live().to_stored();
        live.primary_color = Token::from("#ff0000");
        assert!(catalog.find_match(&live).is_none());
        let (nearest, diff) = catalog.nearest(&live).unwrap();
        assert_eq!(nearest.name, "ember");
        assert_eq!(diff, vec!["primary_color"]);

        let json = catalog.to_json().unwrap().replace("#FF0000", "#ff0000");
        let lowered = Catalog::from_json(&json).unwrap();
        assert!(lowered.find_match(&ember_live().to_stored()).is_none());
    }

    #[test]
    fn unusual_token_text_still_loads() {
        let mut value = serde_json::to_value(sample().themes()).unwrap();
        value[0]["colors"]["deposit_color"] = "rgba(255,255,255,0.4)".into();
        let catalog = Catalog::from_json(&value.to_string()).unwrap();

        assert_eq!(catalog.len(), 3);
        assert_eq!(
            catalog.get("ocean").unwrap().colors.deposit_color.as_str(),
            "rgba(255,255,255,0.4)"
        );
        let live = ember_live().to_stored();
        assert_eq!(catalog.find_match(&live).map(|t| t.name.as_str()), Some("ember"));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(Catalog::from_json("{"), Err(CatalogError::Json(_))));
        assert!(matches!(
            Catalog::from_json(r#"[{"name":"x","colors":{}}]"#),
            Err(CatalogError::Json(_))
        ));
    }
}
