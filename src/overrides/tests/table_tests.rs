use super::*;
use crate::test_utils;

fn parse_with(yaml: &str, policy: DuplicatePolicy) -> CatalogResult<OverrideTable> {
    let catalogs = test_utils::test_catalogs_no_overrides();
    let sections = catalogs.section_catalogs();
    OverrideTable::parse(yaml, "<test>", &sections, policy)
}

#[test]
fn test_lookup_hit_and_miss() {
    let table = parse_with(test_utils::OVERRIDES_YAML, DuplicatePolicy::default()).unwrap();
    let stored = table.lookup(Section::Razor, "gillette tech fat handle").unwrap();
    match &stored.outcome {
        OverrideOutcome::Entity(e) => {
            assert_eq!(e.brand, "Gillette");
            assert_eq!(e.model, "Tech");
            // Format resolved from the razor catalog.
            assert_eq!(e.format, Some(Format::De));
        }
        other => panic!("expected entity outcome, got {:?}", other),
    }
    assert!(table.lookup(Section::Razor, "unknown text").is_none());
    // Same text, wrong section: miss.
    assert!(table.lookup(Section::Blade, "gillette tech fat handle").is_none());
}

#[test]
fn test_section_for_lookup() {
    assert_eq!(Section::for_lookup(Category::Razor, None), Section::Razor);
    assert_eq!(Section::for_lookup(Category::Brush, None), Section::Brush);
    assert_eq!(
        Section::for_lookup(Category::Brush, Some(SubRole::Handle)),
        Section::Handle
    );
    assert_eq!(
        Section::for_lookup(Category::Brush, Some(SubRole::Knot)),
        Section::Knot
    );
}

#[test]
fn test_sub_role_sections_share_surface_text() {
    let yaml = r#"
handle:
  Dogwood Handcrafts:
    Handle:
      - "dogwood"
knot:
  Declaration Grooming:
    B9B:
      - "dogwood"
"#;
    let table = parse_with(yaml, DuplicatePolicy::default()).unwrap();
    let handle = table.lookup(Section::Handle, "dogwood").unwrap();
    let knot = table.lookup(Section::Knot, "dogwood").unwrap();
    match (&handle.outcome, &knot.outcome) {
        (OverrideOutcome::Entity(h), OverrideOutcome::Entity(k)) => {
            assert_eq!(h.brand, "Dogwood Handcrafts");
            assert_eq!(k.brand, "Declaration Grooming");
        }
        other => panic!("expected entity outcomes, got {:?}", other),
    }
}

#[test]
fn test_brush_split_block() {
    let table = parse_with(test_utils::OVERRIDES_YAML, DuplicatePolicy::default()).unwrap();
    let stored = table.lookup(Section::Brush, "declaration b2 mozingo").unwrap();
    match &stored.outcome {
        OverrideOutcome::BrushSplit { handle, knot } => {
            assert_eq!(handle.brand, "Mozingo");
            assert_eq!(knot.brand, "Declaration Grooming");
            assert_eq!(knot.model, "B2");
            // Knot metadata resolved from the knot catalog.
            assert_eq!(knot.knot_mm, Some(28.0));
        }
        other => panic!("expected split outcome, got {:?}", other),
    }
}

#[test]
fn test_no_split_list() {
    let table = parse_with(test_utils::OVERRIDES_YAML, DuplicatePolicy::default()).unwrap();
    assert!(table.is_no_split("simpson chubby 2 in black"));
    assert!(!table.is_no_split("simpson chubby 2"));
}

#[test]
fn test_override_keys_are_normalized_on_load() {
    let yaml = r#"
razor:
  Gillette:
    Tech:
      - "  **Gillette** Tech Fat Handle "
"#;
    let table = parse_with(yaml, DuplicatePolicy::default()).unwrap();
    assert!(table.lookup(Section::Razor, "gillette tech fat handle").is_some());
}

#[test]
fn test_duplicate_same_format_rejected() {
    let yaml = r#"
razor:
  Gillette:
    Tech:
      - "gillette"
    Super Speed:
      - "gillette"
"#;
    // Both entries resolve to DE; the default policy refuses.
    let err = parse_with(yaml, DuplicatePolicy::default()).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateOverride { .. }), "{:?}", err);
}

#[test]
fn test_duplicate_differing_format_accepted() {
    let yaml = r#"
blade:
  Personna:
    GEM PTFE:
      - "personna"
    Lab Blue:
      - "personna"
"#;
    // GEM vs DE: legitimate same-text entries.
    let table = parse_with(yaml, DuplicatePolicy::default()).unwrap();
    assert_eq!(table.lookup_all(Section::Blade, "personna").len(), 2);
    // Lookup returns the first declared entry.
    match &table.lookup(Section::Blade, "personna").unwrap().outcome {
        OverrideOutcome::Entity(e) => assert_eq!(e.model, "GEM PTFE"),
        other => panic!("expected entity, got {:?}", other),
    }
}

#[test]
fn test_duplicate_policy_reject_all() {
    let yaml = r#"
blade:
  Personna:
    GEM PTFE:
      - "personna"
    Lab Blue:
      - "personna"
"#;
    let err = parse_with(yaml, DuplicatePolicy::RejectAll).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateOverride { .. }), "{:?}", err);
}

#[test]
fn test_duplicate_policy_allow_all() {
    let yaml = r#"
razor:
  Gillette:
    Tech:
      - "gillette"
    Super Speed:
      - "gillette"
"#;
    let table = parse_with(yaml, DuplicatePolicy::AllowAll).unwrap();
    assert_eq!(table.lookup_all(Section::Razor, "gillette").len(), 2);
}

#[test]
fn test_unknown_section_ignored() {
    let yaml = r#"
toothbrush:
  Oral:
    B:
      - "oral b"
razor:
  Gillette:
    Tech:
      - "gillette tech"
"#;
    let table = parse_with(yaml, DuplicatePolicy::default()).unwrap();
    assert_eq!(table.section_len(Section::Razor), 1);
}

#[test]
fn test_iter_section_is_sorted() {
    let yaml = r#"
razor:
  Gillette:
    Tech:
      - "zeta"
      - "alpha"
"#;
    let table = parse_with(yaml, DuplicatePolicy::default()).unwrap();
    let keys: Vec<&String> = table.iter_section(Section::Razor).map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["alpha", "zeta"]);
}
