//! Generic category matcher: override lookup first, then ordered regex
//! evaluation against the category catalog, first pattern wins.
//!
//! One implementation serves razor, blade, and soap; the brush matcher
//! composes this with the split engine instead of duplicating it.

use crate::catalog::{Catalog, Catalogs};
use crate::matcher::cache::{PatternCache, PatternScope, RegexHit};
use crate::matcher::types::{MatchResult, MatchType, MatchedEntity, SubMatch};
use crate::normalize;
use crate::overrides::{OverrideOutcome, Section};
use crate::types::{Category, SubRole};

/// Match normalized text for a non-brush category (brush callers go through
/// the brush matcher, which layers the split engine on top of this).
///
/// `use_overrides = false` is the validator's bypass: evaluation runs the
/// live pattern set even when a curated entry exists.
pub fn match_category(
    catalogs: &Catalogs,
    cache: &mut PatternCache,
    category: Category,
    raw: &str,
    use_overrides: bool,
) -> MatchResult {
    let normalized = normalize::normalize(raw);
    if normalized.is_empty() {
        return MatchResult::no_match(category, raw, &normalized);
    }

    if use_overrides {
        let section = Section::for_lookup(category, None);
        if let Some(stored) = catalogs.overrides.lookup(section, &normalized) {
            return override_result(category, raw, &normalized, &stored.outcome);
        }
    }

    let scope = PatternScope::Category(category);
    let hit = regex_lookup(catalogs.catalog(category), cache, scope, &normalized);
    match hit {
        Some(hit) => MatchResult {
            original: raw.to_string(),
            normalized,
            category,
            match_type: MatchType::Regex,
            entity: Some(hit.entity),
            pattern: Some(hit.pattern),
            confidence: hit.confidence,
            handle: None,
            knot: None,
            split: None,
        },
        None => MatchResult::no_match(category, raw, &normalized),
    }
}

/// Build the result for an override hit: match type `override`,
/// confidence 1.0, no pattern provenance.
pub(crate) fn override_result(
    category: Category,
    raw: &str,
    normalized: &str,
    outcome: &OverrideOutcome,
) -> MatchResult {
    let mut result = MatchResult::no_match(category, raw, normalized);
    result.match_type = MatchType::Override;
    result.confidence = 1.0;
    match outcome {
        OverrideOutcome::Entity(entity) => {
            result.entity = Some(MatchedEntity::from_override(entity));
        }
        OverrideOutcome::BrushSplit { handle, knot } => {
            result.handle = Some(SubMatch {
                role: SubRole::Handle,
                text: normalized.to_string(),
                match_type: MatchType::Override,
                entity: Some(MatchedEntity::from_override(handle)),
                pattern: None,
                confidence: 1.0,
            });
            result.knot = Some(SubMatch {
                role: SubRole::Knot,
                text: normalized.to_string(),
                match_type: MatchType::Override,
                entity: Some(MatchedEntity::from_override(knot)),
                pattern: None,
                confidence: 1.0,
            });
        }
    }
    result
}

/// Ordered regex scan against one catalog, memoized per
/// `(scope, normalized text)`.
pub(crate) fn regex_lookup(
    catalog: &Catalog,
    cache: &mut PatternCache,
    scope: PatternScope,
    normalized: &str,
) -> Option<RegexHit> {
    cache.get_or_compute(scope, normalized, || {
        catalog
            .find_first_match(normalized)
            .map(|(entry_index, pattern)| RegexHit {
                entity: MatchedEntity::from_entry(&catalog.entries[entry_index]),
                pattern: pattern.source.clone(),
                confidence: pattern.confidence,
            })
    })
}

#[cfg(test)]
#[path = "tests/category_tests.rs"]
mod tests;
