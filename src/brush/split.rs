//! Split engine: strategy-ranked heuristics deciding whether a brush string
//! names one maker (complete brush) or two (handle + knot).
//!
//! Strategies are an ordered list of pure functions evaluated in fixed
//! precedence order: delimiter > fiber-hint > brand-context > no-split
//! fallback. The first applicable strategy wins; precedence is the
//! tie-break when multiple paths would produce a match, so the engine
//! always returns a definite (possibly low-confidence) decision.

use std::collections::BTreeSet;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::catalog::{Catalog, Catalogs};
use crate::matcher::types::{ConfidenceTier, SplitStrategy};
use crate::types::Fiber;

/// The `<knot> in <handle> handle` form, e.g.
/// "declaration b2 in mozingo handle".
static RE_IN_HANDLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<knot>.+?)\s+in\s+(?:an?\s+)?(?P<handle>.+?)\s+handle$")
        .expect("Invalid regex")
});

/// Directional separators, tried in order. The slash only splits when it is
/// not part of a numeric run like "28/52".
static DELIMITERS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    vec![
        (Regex::new(r"\s+w/\s+").expect("Invalid regex"), "w/"),
        (Regex::new(r"\s+with\s+").expect("Invalid regex"), "with"),
        (Regex::new(r"\s+\+\s+").expect("Invalid regex"), "+"),
        (
            Regex::new(r"[^\d\s]\s*(/)\s*[^\d\s]").expect("Invalid regex"),
            "/",
        ),
    ]
});

/// Knot fiber vocabulary. Specific marketing names map onto base fibers.
static RE_FIBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(silvertip|[23][\s-]?band|badger|boar|bristle|synthetic|synth|timberwolf|tuxedo|cashmere|quartermoon|gelousy|mother\s?lode|horse(?:hair)?)\b",
    )
    .expect("Invalid regex")
});

/// Knot diameter, e.g. "26mm", "27.5 mm".
static RE_KNOT_MM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\d{2}(?:\.\d)?)\s*mm\b").expect("Invalid regex")
});

/// A proposed decomposition (or the decision not to decompose). Transient:
/// produced by a strategy, consumed by the brush matcher, not persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitCandidate {
    pub handle_text: Option<String>,
    pub knot_text: Option<String>,
    pub strategy: SplitStrategy,
    pub tier: ConfidenceTier,
    pub rationale: String,
}

impl SplitCandidate {
    pub fn is_split(&self) -> bool {
        self.handle_text.is_some() && self.knot_text.is_some()
    }

    fn split(
        handle: &str,
        knot: &str,
        strategy: SplitStrategy,
        tier: ConfidenceTier,
        rationale: String,
    ) -> Self {
        Self {
            handle_text: Some(handle.to_string()),
            knot_text: Some(knot.to_string()),
            strategy,
            tier,
            rationale,
        }
    }

    fn whole(strategy: SplitStrategy, tier: ConfidenceTier, rationale: String) -> Self {
        Self {
            handle_text: None,
            knot_text: None,
            strategy,
            tier,
            rationale,
        }
    }
}

/// One split heuristic: normalized text in, candidate out (or not
/// applicable).
pub type Strategy = fn(&str, &Catalogs) -> Option<SplitCandidate>;

/// Fixed precedence order. The final fallback always yields a candidate,
/// so evaluation terminates with a definite decision.
pub const STRATEGIES: &[Strategy] = &[
    delimiter_strategy,
    fiber_hint_strategy,
    brand_context_strategy,
    no_split_fallback,
];

/// Explicit separators split the string into two segments; catalog affinity
/// plus fiber cues decide which segment is the handle.
pub fn delimiter_strategy(text: &str, catalogs: &Catalogs) -> Option<SplitCandidate> {
    if let Some(caps) = RE_IN_HANDLE.captures(text) {
        let knot = caps.name("knot").map(|m| m.as_str().trim())?;
        let handle = caps.name("handle").map(|m| m.as_str().trim())?;
        if !knot.is_empty() && !handle.is_empty() {
            return Some(SplitCandidate::split(
                handle,
                knot,
                SplitStrategy::Delimiter,
                ConfidenceTier::High,
                "'in ... handle' form".to_string(),
            ));
        }
    }

    for (re, token) in DELIMITERS.iter() {
        let Some(caps) = re.captures(text) else {
            continue;
        };
        // The slash pattern captures the delimiter in group 1; the others
        // match it wholesale.
        let m = caps.get(1).or_else(|| caps.get(0))?;
        let left = text[..m.start()].trim();
        let right = text[m.end()..].trim();
        if left.is_empty() || right.is_empty() {
            continue;
        }
        let (handle, knot) = assign_sides(left, right, catalogs);
        return Some(SplitCandidate::split(
            handle,
            knot,
            SplitStrategy::Delimiter,
            ConfidenceTier::High,
            format!("separator '{}'", token),
        ));
    }
    None
}

/// A fiber token anchors the knot segment; whatever precedes it is the
/// handle. A size token directly before the segment is pulled into it.
pub fn fiber_hint_strategy(text: &str, _catalogs: &Catalogs) -> Option<SplitCandidate> {
    let fiber = RE_FIBER.find(text)?;

    let mut knot_start = fiber.start();
    if let Some(size) = RE_KNOT_MM.find(text) {
        if size.start() < knot_start {
            knot_start = size.start();
        }
    }

    let handle = text[..knot_start].trim();
    let knot = text[knot_start..].trim();
    if handle.is_empty() || knot.is_empty() {
        return None;
    }
    Some(SplitCandidate::split(
        handle,
        knot,
        SplitStrategy::FiberHint,
        ConfidenceTier::High,
        format!("fiber token '{}'", fiber.as_str()),
    ))
}

/// Exactly one recognized brand: treat the whole string as one maker's
/// complete brush, unless the brand only exists in the handle (or knot)
/// catalog, in which case split at the brand-name boundary.
pub fn brand_context_strategy(text: &str, catalogs: &Catalogs) -> Option<SplitCandidate> {
    let mut brands: BTreeSet<&str> = BTreeSet::new();
    for catalog in [&catalogs.brush, &catalogs.handle, &catalogs.knot] {
        brands.extend(catalog.brands_in(text));
    }
    // Brand names that contain another recognized brand ("declaration" vs
    // "declaration grooming") count once.
    let all: Vec<&str> = brands.iter().copied().collect();
    let brands: Vec<&str> = all
        .iter()
        .copied()
        .filter(|b| !all.iter().any(|other| other != b && other.contains(*b)))
        .collect();
    if brands.len() != 1 {
        return None;
    }
    let brand = brands[0];

    let in_brush = catalogs.brush.has_brand(brand);
    let in_handle = catalogs.handle.has_brand(brand);
    let in_knot = catalogs.knot.has_brand(brand);

    if in_handle && !in_brush && !in_knot {
        if let Some((brand_part, rest)) = split_at_brand(text, brand) {
            return Some(SplitCandidate::split(
                &brand_part,
                &rest,
                SplitStrategy::BrandContext,
                ConfidenceTier::Medium,
                format!("handle-only maker '{}'", brand),
            ));
        }
        return None;
    }
    if in_knot && !in_brush && !in_handle {
        if let Some((brand_part, rest)) = split_at_brand(text, brand) {
            return Some(SplitCandidate::split(
                &rest,
                &brand_part,
                SplitStrategy::BrandContext,
                ConfidenceTier::Medium,
                format!("knot-only maker '{}'", brand),
            ));
        }
        return None;
    }

    Some(SplitCandidate::whole(
        SplitStrategy::BrandContext,
        ConfidenceTier::Medium,
        format!("single known brand '{}'", brand),
    ))
}

/// Terminal fallback: whole-string complete-brush candidate.
pub fn no_split_fallback(_text: &str, _catalogs: &Catalogs) -> Option<SplitCandidate> {
    Some(SplitCandidate::whole(
        SplitStrategy::NoSplitFallback,
        ConfidenceTier::Low,
        "whole-string complete-brush candidate".to_string(),
    ))
}

/// Decide which segment is the handle. Each assignment is scored by catalog
/// affinity of both sides; a fiber token marks its side as the knot. Ties
/// keep the conventional "handle w/ knot" orientation.
fn assign_sides<'a>(left: &'a str, right: &'a str, catalogs: &Catalogs) -> (&'a str, &'a str) {
    let left_as_handle =
        side_affinity(left, &catalogs.handle) + knot_affinity(right, &catalogs.knot);
    let right_as_handle =
        side_affinity(right, &catalogs.handle) + knot_affinity(left, &catalogs.knot);
    if right_as_handle > left_as_handle {
        (right, left)
    } else {
        (left, right)
    }
}

/// Affinity of a segment for one side's catalog: 1.0 for a live pattern
/// hit, otherwise the best brand-name similarity.
fn side_affinity(segment: &str, catalog: &Catalog) -> f64 {
    if catalog.find_first_match(segment).is_some() {
        return 1.0;
    }
    catalog
        .brands()
        .map(|brand| strsim::normalized_levenshtein(brand, segment))
        .fold(0.0, f64::max)
        * 0.5
}

fn knot_affinity(segment: &str, knot_catalog: &Catalog) -> f64 {
    let mut affinity = side_affinity(segment, knot_catalog);
    if RE_FIBER.is_match(segment) {
        affinity += 0.5;
    }
    if RE_KNOT_MM.is_match(segment) {
        affinity += 0.25;
    }
    affinity
}

/// Split the string at the brand-name boundary: the brand portion on one
/// side, everything else (joined, trimmed) on the other. `None` when the
/// remainder is empty.
fn split_at_brand(text: &str, brand: &str) -> Option<(String, String)> {
    let start = text.find(brand)?;
    let end = start + brand.len();
    let rest = format!("{} {}", text[..start].trim(), text[end..].trim())
        .trim()
        .to_string();
    if rest.is_empty() {
        return None;
    }
    Some((brand.to_string(), rest))
}

/// Map a fiber token in free text onto a base fiber type.
pub fn parse_fiber(text: &str) -> Option<Fiber> {
    let token = RE_FIBER.find(text)?.as_str();
    match token {
        "boar" | "bristle" => Some(Fiber::Boar),
        "synthetic" | "synth" | "timberwolf" | "tuxedo" | "cashmere" | "quartermoon"
        | "gelousy" => Some(Fiber::Synthetic),
        "mother lode" | "motherlode" => Some(Fiber::Synthetic),
        t if t.starts_with("horse") => Some(Fiber::Horse),
        // silvertip / 2-band / 3-band / badger
        _ => Fiber::from_str(token).ok().or(Some(Fiber::Badger)),
    }
}

/// Extract a knot diameter in millimeters from free text.
pub fn parse_knot_mm(text: &str) -> Option<f32> {
    RE_KNOT_MM
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

#[cfg(test)]
#[path = "tests/split_tests.rs"]
mod tests;
