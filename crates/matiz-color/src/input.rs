// SPDX-License-Identifier: MIT
//
// Hex input validation and keystroke-level cleanup.
//
// The engine itself never rejects a color. These helpers sit at the edge
// where operators type colors: `is_valid_hex` is the acceptance predicate,
// `sanitize_hex_input` turns a raw text-field value into the closest
// `#`-prefixed candidate so the predicate can be re-checked.

use std::sync::LazyLock;

use regex::Regex;

static VALID_HEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("valid hex regex")
});

static NOT_HEX_OR_HASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^#0-9A-F]").expect("valid filter regex"));

static HASH_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#+").expect("valid hash regex"));

/// Whether `value` is `#` followed by exactly 3 or 6 hex digits.
#[must_use]
pub fn is_valid_hex(value: &str) -> bool {
    VALID_HEX.is_match(value)
}

/// Clean up raw text-field input into a `#`-prefixed hex candidate.
///
/// Uppercases, drops everything except `#` and hex digits, collapses runs
/// of `#`, forces a single leading `#`, and truncates to 7 characters. The
/// result is not guaranteed to be valid: `"12"` becomes `"#12"`.
#[must_use]
pub fn sanitize_hex_input(raw: &str) -> String {
    let upper = raw.to_uppercase();
    let filtered = NOT_HEX_OR_HASH.replace_all(&upper, "");
    let collapsed = HASH_RUN.replace_all(&filtered, "#");

    let mut value = if collapsed.starts_with('#') {
        collapsed.into_owned()
    } else {
        format!("#{}", collapsed.replace('#', ""))
    };

    // Only ASCII survives the filter, so byte truncation is safe.
    value.truncate(7);
    value
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
