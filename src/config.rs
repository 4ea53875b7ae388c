// SPDX-License-Identifier: MIT
//
// Optional TOML defaults for the command line.
//
// Lookup order: `--config`, then `$MATIZ_CONFIG`, then
// `<config_dir>/matiz/config.toml`. A `--config` path must exist; the other
// two locations fall back to defaults when missing. A malformed file is
// always an error. Flags always override file values.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use matiz_theme::{HarmonyStrategy, Mode};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "MATIZ_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub mode: Mode,
    pub strategy: HarmonyStrategy,
    /// JSON catalog for `matiz match`. Relative paths resolve against the
    /// config file's directory.
    pub catalog: Option<PathBuf>,
    /// Fixes the random stream for the `random` strategy and `surprise`.
    pub rng_seed: Option<u32>,
}

/// The implicit config location: a non-empty `$MATIZ_CONFIG`, else the
/// platform config directory.
pub fn fallback_path(env_value: Option<OsString>) -> Option<PathBuf> {
    env_value
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs_next::config_dir().map(|dir| dir.join("matiz").join("config.toml")))
}

/// Load the config from `--config` if given, else from the fallback
/// location.
pub fn load(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return load_required(path);
    }
    match fallback_path(std::env::var_os(CONFIG_ENV)) {
        Some(path) => load_from(&path),
        None => Ok(Config::default()),
    }
}

/// Load a config the user named explicitly. It has to exist.
pub fn load_required(path: &Path) -> Result<Config> {
    if !path.exists() {
        bail!("config file {} does not exist", path.display());
    }
    load_from(path)
}

/// Load the config at `path`, returning defaults if the file doesn't exist.
pub fn load_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let mut config: Config = toml::from_str(&contents)
        .with_context(|| format!("invalid config {}", path.display()))?;

    if let (Some(catalog), Some(parent)) = (&config.catalog, path.parent()) {
        if catalog.is_relative() {
            config.catalog = Some(parent.join(catalog));
        }
    }

    debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}

// ─── Tests ──────────────────────────────────────────────────────────────────
