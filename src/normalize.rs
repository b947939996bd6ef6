//! Text normalization for product description strings.
//!
//! The same pipeline runs on catalog authoring input (override keys) and on
//! runtime input, so normalization must be idempotent: applying it twice
//! yields the same string as applying it once.

use deunicode::deunicode;
use regex::Regex;
use std::sync::LazyLock;

/// Markdown emphasis and inline-code markers left over from post extraction.
static RE_MARKUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[*_`~\[\]]").expect("Invalid regex"));

/// Runs of whitespace (including tabs/newlines from quoted posts).
static RE_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid regex"));

/// Leading field-tag markers that sometimes survive extraction,
/// e.g. "$RAZOR" sample tags or stray "razor:" labels. Markers can stack
/// ("blade: razor: feather"), so the whole run is stripped in one pass.
static RE_TAG_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\$[a-z_]+\s+|(?:razor|blade|brush|soap|lather)\s*:\s*)+")
        .expect("Invalid regex")
});

/// Normalize raw product text for matching and override lookup.
///
/// Pipeline:
/// 1. Transliterate non-Latin characters via deunicode
/// 2. Strip markdown markup characters
/// 3. Lowercase
/// 4. Strip leading field-tag markers
/// 5. Collapse whitespace and trim
pub fn normalize(raw: &str) -> String {
    let latin = deunicode(raw);
    let unmarked = RE_MARKUP.replace_all(&latin, " ");
    let lower = unmarked.to_lowercase();
    let untagged = RE_TAG_PREFIX.replace(lower.trim_start(), "");
    RE_WHITESPACE.replace_all(&untagged, " ").trim().to_string()
}
