use super::*;
use crate::test_utils;

#[test]
fn test_knot_in_handle_scenario() {
    let catalogs = test_utils::test_catalogs();
    let mut cache = PatternCache::new();
    let result = match_brush(&catalogs, &mut cache, "Declaration B2 in Mozingo handle", true);

    assert_eq!(result.match_type, MatchType::Regex);
    assert!(result.is_split());
    assert!(result.entity.is_none());

    let handle = result.handle.as_ref().unwrap();
    let handle_entity = handle.entity.as_ref().unwrap();
    assert_eq!(handle_entity.brand, "Mozingo");
    assert_eq!(handle_entity.model, "Jefferson");

    let knot = result.knot.as_ref().unwrap();
    let knot_entity = knot.entity.as_ref().unwrap();
    assert_eq!(knot_entity.brand, "Declaration Grooming");
    assert_eq!(knot_entity.model, "B2");
    assert_eq!(knot_entity.knot_mm, Some(28.0));

    let split = result.split.as_ref().unwrap();
    assert_eq!(split.strategy, SplitStrategy::Delimiter);
    assert_eq!(split.tier, ConfidenceTier::High);
}

#[test]
fn test_complete_brush_keeps_top_level_entity() {
    let catalogs = test_utils::test_catalogs();
    let mut cache = PatternCache::new();
    let result = match_brush(&catalogs, &mut cache, "Simpson Chubby 2", true);

    assert_eq!(result.match_type, MatchType::Regex);
    assert!(!result.is_split());
    assert!(result.handle.is_none());
    assert!(result.knot.is_none());
    let entity = result.entity.unwrap();
    assert_eq!(entity.brand, "Simpson");
    assert_eq!(entity.model, "Chubby 2");
    // Whole-string decision came from the brand-context strategy.
    let split = result.split.unwrap();
    assert_eq!(split.strategy, SplitStrategy::BrandContext);
}

#[test]
fn test_curated_no_split_skips_the_strategies() {
    let catalogs = test_utils::test_catalogs();
    let mut cache = PatternCache::new();
    let result = match_brush(&catalogs, &mut cache, "Simpson Chubby 2 in Black", true);

    assert!(!result.is_split());
    assert_eq!(result.entity.unwrap().model, "Chubby 2");
    // No strategy ran, so there is no split provenance.
    assert!(result.split.is_none());
}

#[test]
fn test_brush_override_complete() {
    let catalogs = test_utils::test_catalogs();
    let mut cache = PatternCache::new();
    let result = match_brush(&catalogs, &mut cache, "Bristle Brushworks B9B", true);

    assert_eq!(result.match_type, MatchType::Override);
    assert_eq!(result.confidence, 1.0);
    assert!(!result.is_split());
    assert_eq!(result.entity.unwrap().model, "B9B");
}

#[test]
fn test_brush_override_curated_split() {
    let catalogs = test_utils::test_catalogs();
    let mut cache = PatternCache::new();
    let result = match_brush(&catalogs, &mut cache, "Declaration B2 Mozingo", true);

    assert_eq!(result.match_type, MatchType::Override);
    assert!(result.is_split());
    assert!(result.entity.is_none());
    let handle = result.handle.as_ref().unwrap();
    assert_eq!(handle.match_type, MatchType::Override);
    assert_eq!(handle.entity.as_ref().unwrap().brand, "Mozingo");
    let knot = result.knot.as_ref().unwrap();
    assert_eq!(knot.entity.as_ref().unwrap().model, "B2");
}

#[test]
fn test_override_bypass_still_matches_patterns() {
    let catalogs = test_utils::test_catalogs();
    let mut cache = PatternCache::new();
    let result = match_brush(&catalogs, &mut cache, "bristle brushworks b9b", false);

    // Without the curated shortcut the live pattern set still resolves it,
    // as a whole brush via the brush catalog.
    assert_eq!(result.match_type, MatchType::Regex);
    assert_eq!(result.pattern.as_deref(), Some("b9b"));
    assert_eq!(result.entity.unwrap().brand, "Declaration Grooming");
}

#[test]
fn test_no_match_carries_neither_shape() {
    let catalogs = test_utils::test_catalogs();
    let mut cache = PatternCache::new();
    let result = match_brush(&catalogs, &mut cache, "mystery object", true);

    assert_eq!(result.match_type, MatchType::None);
    assert!(result.entity.is_none());
    assert!(result.handle.is_none());
    assert!(result.knot.is_none());
}

#[test]
fn test_split_with_one_unmatched_side() {
    let catalogs = test_utils::test_catalogs();
    let mut cache = PatternCache::new();
    let result = match_brush(&catalogs, &mut cache, "mozingo jefferson w/ mystery knot", true);

    assert!(result.is_split());
    let handle = result.handle.as_ref().unwrap();
    assert_eq!(handle.entity.as_ref().unwrap().brand, "Mozingo");
    let knot = result.knot.as_ref().unwrap();
    assert_eq!(knot.match_type, MatchType::None);
    assert!(knot.entity.is_none());
}

#[test]
fn test_knot_side_enriched_from_text() {
    let catalogs = test_utils::test_catalogs();
    let mut cache = PatternCache::new();
    let result = match_brush(&catalogs, &mut cache, "Summit w/ 26mm G5C", true);

    let knot = result.knot.as_ref().unwrap();
    let entity = knot.entity.as_ref().unwrap();
    assert_eq!(entity.brand, "AP Shave Co");
    // The catalog entry has no size; the segment text supplies it.
    assert_eq!(entity.knot_mm, Some(26.0));
    assert_eq!(entity.fiber, Some(crate::types::Fiber::Synthetic));
}

#[test]
fn test_result_tier() {
    let catalogs = test_utils::test_catalogs();
    let mut cache = PatternCache::new();

    let curated = match_brush(&catalogs, &mut cache, "bristle brushworks b9b", true);
    assert_eq!(result_tier(&curated), ConfidenceTier::High);

    let split = match_brush(&catalogs, &mut cache, "declaration b2 in mozingo handle", true);
    assert_eq!(result_tier(&split), ConfidenceTier::High);

    let whole = match_brush(&catalogs, &mut cache, "simpson chubby 2", true);
    assert_eq!(result_tier(&whole), ConfidenceTier::Medium);

    // Fallback-only resolution is the weakest signal.
    let fallback = match_brush(&catalogs, &mut cache, "b9b", true);
    assert_eq!(result_tier(&fallback), ConfidenceTier::Low);
}
