// SPDX-License-Identifier: MIT
//
// matiz — derive complete UI color themes from a single seed color.
//
// This is the command-line front end over the two library crates:
//
//   matiz-color → hex/RGB/HSL conversions, lightness, hue, mixing
//   matiz-theme → harmony strategies, contrast text, theme composition
//
// Every subcommand resolves its settings the same way:
//
//   flags  →  config file (--config / $MATIZ_CONFIG / <config_dir>)  →  defaults
//
// Results go to stdout (JSON unless asked otherwise); diagnostics go to
// stderr through tracing, filtered by MATIZ_LOG or RUST_LOG.

mod config;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use matiz_color::{HexColor, is_valid_hex, sanitize_hex_input};
use matiz_theme::{
    Catalog, HarmonyStrategy, Mode, StoredRecord, ThemeRecord, Xorshift32, compose_theme_with, contrast_text,
    generate_harmony_with, harmonious_text, surprise,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Environment variable checked before `RUST_LOG`.
const LOG_ENV: &str = "MATIZ_LOG";

// ─── Command line ───────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(name = "matiz", version, about = "Derive complete UI color themes from a seed color")]
struct Cli {
    /// Config file (defaults to $MATIZ_CONFIG, then <config_dir>/matiz/config.toml).
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed for the random strategy and `surprise`, for reproducible output.
    #[arg(long, global = true, value_name = "U32")]
    rng_seed: Option<u32>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compose the full theme record for a seed color.
    Compose {
        /// Seed color, e.g. `#3366CC` or `f00`.
        seed: String,
        #[arg(long)]
        mode: Option<Mode>,
        #[arg(long)]
        strategy: Option<HarmonyStrategy>,
        #[arg(long, value_enum, default_value_t)]
        format: Format,
    },
    /// Print the primary/secondary/accent triple for a seed color.
    Harmony {
        seed: String,
        #[arg(long)]
        strategy: Option<HarmonyStrategy>,
    },
    /// Pick a legible text color for a background.
    Contrast {
        background: String,
        /// Tint the text toward this primary color.
        #[arg(long, value_name = "HEX")]
        primary: Option<String>,
        #[arg(long)]
        mode: Option<Mode>,
    },
    /// Check whether a stored theme record matches a catalog entry.
    Match {
        /// Theme record as JSON.
        file: PathBuf,
        /// Catalog as a JSON array of `{ name, colors }`.
        #[arg(long, value_name = "PATH")]
        catalog: Option<PathBuf>,
    },
    /// Draw a random seed, mode, and strategy and compose the theme.
    Surprise,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
enum Format {
    #[default]
    Json,
    Tokens,
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match run(cli, &mut io::stdout().lock()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("matiz: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Execute one command. `Ok(false)` means it ran but found nothing to
/// report as success (an unmatched theme).
fn run(cli: Cli, out: &mut impl Write) -> Result<bool> {
    let config = config::load(cli.config.as_deref())?;
    let mut rng = rng_for(cli.rng_seed.or(config.rng_seed));
    debug!(command = ?cli.command, "running");

    match cli.command {
        Command::Compose { seed, mode, strategy, format } => {
            let seed = parse_seed(&seed)?;
            let mode = mode.unwrap_or(config.mode);
            let strategy = strategy.unwrap_or(config.strategy);
            let record = compose_theme_with(seed, mode, strategy, &mut rng);
            match format {
                Format::Json => write_json(out, &record)?,
                Format::Tokens => write_tokens(out, &record)?,
            }
        }
        Command::Harmony { seed, strategy } => {
            let seed = parse_seed(&seed)?;
            let strategy = strategy.unwrap_or(config.strategy);
            write_json(out, &generate_harmony_with(seed, strategy, &mut rng))?;
        }
        Command::Contrast { background, primary, mode } => {
            let background = parse_seed(&background)?;
            let mode = mode.unwrap_or(config.mode);
            let text = match primary {
                Some(primary) => harmonious_text(background, parse_seed(&primary)?, mode),
                None => contrast_text(background, mode),
            };
            writeln!(out, "{text}")?;
        }
        Command::Match { file, catalog } => {
            let record = read_record(&file)?;
            let catalog = read_catalog(catalog.as_deref(), &config)?;
            return write_match(out, &catalog, &record);
        }
        Command::Surprise => {
            let draw = surprise(&mut rng);
            info!(seed = %draw.seed, mode = %draw.mode, strategy = %draw.strategy, "surprise");
            let report = serde_json::json!({ "draw": draw, "theme": draw.compose() });
            write_json(out, &report)?;
        }
    }
    Ok(true)
}

// ─── Helpers ────────────────────────────────────────────────────────────────

fn rng_for(seed: Option<u32>) -> Xorshift32 {
    seed.map_or_else(Xorshift32::from_clock, Xorshift32::new)
}

/// Accept loosely typed input (`f00`, `##3366cc`) as long as it cleans up
/// to a valid `#RGB` or `#RRGGBB`.
fn parse_seed(raw: &str) -> Result<HexColor> {
    let cleaned = sanitize_hex_input(raw);
    if !is_valid_hex(&cleaned) {
        bail!("'{raw}' is not a hex color (expected #RGB or #RRGGBB)");
    }
    cleaned
        .parse()
        .with_context(|| format!("'{raw}' is not a hex color"))
}

fn read_record(path: &Path) -> Result<StoredRecord> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read theme {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("invalid theme record {}", path.display()))
}

fn read_catalog(flag: Option<&Path>, config: &Config) -> Result<Catalog> {
    let Some(path) = flag.or(config.catalog.as_deref()) else {
        bail!("no catalog given (pass --catalog or set `catalog` in the config file)");
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog {}", path.display()))?;
    Catalog::from_json(&json).with_context(|| format!("invalid catalog {}", path.display()))
}

fn write_json(out: &mut impl Write, value: &impl serde::Serialize) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn write_tokens(out: &mut impl Write, record: &ThemeRecord) -> Result<()> {
    for (key, value) in record.tokens() {
        writeln!(out, "{key} {value}")?;
    }
    Ok(())
}

/// Print the matching entry's name, or the nearest entry and the keys that
/// keep it from matching. Returns whether a match was found.
fn write_match(out: &mut impl Write, catalog: &Catalog, record: &StoredRecord) -> Result<bool> {
    if let Some(theme) = catalog.find_match(record) {
        writeln!(out, "{}", theme.name)?;
        return Ok(true);
    }
    match catalog.nearest(record) {
        Some((theme, keys)) => {
            writeln!(out, "no match; nearest is '{}' ({} keys differ)", theme.name, keys.len())?;
            for key in keys {
                writeln!(out, "  {key}")?;
            }
        }
        None => writeln!(out, "no match; catalog is empty")?,
    }
    Ok(false)
}

// ─── Tests ──────────────────────────────────────────────────────────────────
