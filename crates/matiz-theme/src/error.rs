//! Error types for parsing engine inputs from text.
//!
//! The engine operations themselves are total. These only arise where names
//! or catalogs arrive as external text.

use thiserror::Error;

/// A mode name that is neither `dark` nor `light`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mode '{0}' (expected 'dark' or 'light')")]
pub struct ParseModeError(pub String);

/// A harmony strategy name that matches none of the seven strategies.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "unknown harmony strategy '{0}' (expected one of: monochromatic, analogous, \
     complementary, splitComplementary, triadic, tetradic, random)"
)]
pub struct ParseStrategyError(pub String);

/// Failure to load a predefined-theme catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate theme name '{0}' in catalog")]
    DuplicateName(String),
}
