//! Brush matcher: composes the override table, the split engine, and the
//! handle/knot sub-catalogs.
//!
//! A brush result is one of exactly two shapes (plus no-match): a single
//! complete entity with top-level brand/model, or independent handle/knot
//! sub-results with no top-level entity. Callers rely on those being
//! mutually exclusive.

pub mod split;

use crate::catalog::Catalogs;
use crate::matcher::cache::{PatternCache, PatternScope};
use crate::matcher::category::{override_result, regex_lookup};
use crate::matcher::types::{
    ConfidenceTier, MatchResult, MatchType, SplitProvenance, SplitStrategy, SubMatch,
};
use crate::normalize;
use crate::overrides::{OverrideOutcome, Section};
use crate::types::{Category, SubRole};

use split::{SplitCandidate, STRATEGIES};

/// Match brush text. `use_overrides = false` is the validator's bypass.
pub fn match_brush(
    catalogs: &Catalogs,
    cache: &mut PatternCache,
    raw: &str,
    use_overrides: bool,
) -> MatchResult {
    let normalized = normalize::normalize(raw);
    if normalized.is_empty() {
        return MatchResult::no_match(Category::Brush, raw, &normalized);
    }

    if use_overrides {
        if let Some(stored) = catalogs.overrides.lookup(Section::Brush, &normalized) {
            return override_result(Category::Brush, raw, &normalized, &stored.outcome);
        }
    }

    // Curated "do not split": skip all strategies, whole-string or nothing.
    if catalogs.overrides.is_no_split(&normalized) {
        return whole_brush(catalogs, cache, raw, &normalized, None);
    }

    for strategy in STRATEGIES {
        let Some(candidate) = strategy(&normalized, catalogs) else {
            continue;
        };

        if candidate.is_split() {
            if let Some(result) =
                split_result(catalogs, cache, raw, &normalized, &candidate, use_overrides)
            {
                return result;
            }
            // Neither side matched anything; the proposed split carries no
            // evidence, so let a later strategy decide.
            continue;
        }

        let provenance = SplitProvenance {
            strategy: candidate.strategy,
            tier: candidate.tier,
            rationale: candidate.rationale.clone(),
        };
        let result = whole_brush(catalogs, cache, raw, &normalized, Some(provenance));
        if result.is_match() || candidate.strategy == SplitStrategy::NoSplitFallback {
            return result;
        }
    }

    // STRATEGIES ends with a terminal fallback; this is unreachable in
    // practice but keeps the signature total.
    MatchResult::no_match(Category::Brush, raw, &normalized)
}

/// Whole-string complete-brush evaluation against the brush catalog.
fn whole_brush(
    catalogs: &Catalogs,
    cache: &mut PatternCache,
    raw: &str,
    normalized: &str,
    provenance: Option<SplitProvenance>,
) -> MatchResult {
    let scope = PatternScope::Category(Category::Brush);
    match regex_lookup(&catalogs.brush, cache, scope, normalized) {
        Some(hit) => MatchResult {
            original: raw.to_string(),
            normalized: normalized.to_string(),
            category: Category::Brush,
            match_type: MatchType::Regex,
            entity: Some(hit.entity),
            pattern: Some(hit.pattern),
            confidence: hit.confidence,
            handle: None,
            knot: None,
            split: provenance,
        },
        None => MatchResult::no_match(Category::Brush, raw, normalized),
    }
}

/// Build a decomposed result from a split candidate. Returns `None` when
/// neither side matches, so the caller can fall through to the next
/// strategy.
fn split_result(
    catalogs: &Catalogs,
    cache: &mut PatternCache,
    raw: &str,
    normalized: &str,
    candidate: &SplitCandidate,
    use_overrides: bool,
) -> Option<MatchResult> {
    let handle_text = candidate.handle_text.as_deref()?;
    let knot_text = candidate.knot_text.as_deref()?;

    let handle = match_side(catalogs, cache, SubRole::Handle, handle_text, use_overrides);
    let knot = match_side(catalogs, cache, SubRole::Knot, knot_text, use_overrides);
    if handle.match_type == MatchType::None && knot.match_type == MatchType::None {
        return None;
    }

    let matched: Vec<&SubMatch> = [&handle, &knot]
        .into_iter()
        .filter(|s| s.match_type != MatchType::None)
        .collect();
    let confidence =
        matched.iter().map(|s| s.confidence).sum::<f32>() / (matched.len() as f32);
    let match_type = if matched.iter().all(|s| s.match_type == MatchType::Override) {
        MatchType::Override
    } else {
        MatchType::Regex
    };

    Some(MatchResult {
        original: raw.to_string(),
        normalized: normalized.to_string(),
        category: Category::Brush,
        match_type,
        entity: None,
        pattern: None,
        confidence,
        handle: Some(handle),
        knot: Some(knot),
        split: Some(SplitProvenance {
            strategy: candidate.strategy,
            tier: candidate.tier,
            rationale: candidate.rationale.clone(),
        }),
    })
}

/// Match one side of a split: sub-role override table first, then the
/// handle/knot catalog. Knot entities missing fiber or size metadata are
/// enriched from the segment text.
fn match_side(
    catalogs: &Catalogs,
    cache: &mut PatternCache,
    role: SubRole,
    text: &str,
    use_overrides: bool,
) -> SubMatch {
    let normalized = normalize::normalize(text);
    if normalized.is_empty() {
        return SubMatch::none(role, text);
    }

    if use_overrides {
        let section = Section::for_lookup(Category::Brush, Some(role));
        if let Some(stored) = catalogs.overrides.lookup(section, &normalized) {
            if let OverrideOutcome::Entity(entity) = &stored.outcome {
                let mut sub = SubMatch {
                    role,
                    text: text.to_string(),
                    match_type: MatchType::Override,
                    entity: Some(crate::matcher::types::MatchedEntity::from_override(entity)),
                    pattern: None,
                    confidence: 1.0,
                };
                enrich_knot(role, &normalized, &mut sub);
                return sub;
            }
        }
    }

    let hit = regex_lookup(
        catalogs.sub_catalog(role),
        cache,
        PatternScope::Sub(role),
        &normalized,
    );
    match hit {
        Some(hit) => {
            let mut sub = SubMatch {
                role,
                text: text.to_string(),
                match_type: MatchType::Regex,
                entity: Some(hit.entity),
                pattern: Some(hit.pattern),
                confidence: hit.confidence,
            };
            enrich_knot(role, &normalized, &mut sub);
            sub
        }
        None => SubMatch::none(role, text),
    }
}

/// Fill fiber and knot size from the segment text when the catalog entry
/// does not record them.
fn enrich_knot(role: SubRole, normalized: &str, sub: &mut SubMatch) {
    if role != SubRole::Knot {
        return;
    }
    if let Some(entity) = sub.entity.as_mut() {
        if entity.fiber.is_none() {
            entity.fiber = split::parse_fiber(normalized);
        }
        if entity.knot_mm.is_none() {
            entity.knot_mm = split::parse_knot_mm(normalized);
        }
    }
}

/// Tier shorthand used by reporting collaborators: overrides are as good
/// as curation gets.
pub fn result_tier(result: &MatchResult) -> ConfidenceTier {
    match (&result.match_type, &result.split) {
        (MatchType::Override, _) => ConfidenceTier::High,
        (_, Some(p)) => p.tier,
        _ => ConfidenceTier::Low,
    }
}

#[cfg(test)]
#[path = "tests/brush_tests.rs"]
mod tests;
