use crate::test_utils;

use super::*;

#[test]
fn test_catalog_accessors() {
    let catalogs = test_utils::test_catalogs();
    assert_eq!(catalogs.catalog(Category::Razor).label, "razor");
    assert_eq!(catalogs.catalog(Category::Soap).label, "soap");
    assert_eq!(catalogs.sub_catalog(SubRole::Handle).label, "handle");
    assert_eq!(catalogs.sub_catalog(SubRole::Knot).label, "knot");
}

#[test]
fn test_override_count() {
    let catalogs = test_utils::test_catalogs();
    // 1 razor + 1 blade + 2 brush (one plain, one split) + 1 soap
    // + 1 handle + 1 knot = 7; no_split strings are not override entries.
    assert_eq!(catalogs.override_count(), 7);
}

#[test]
fn test_load_dir_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("razors.yaml"), test_utils::RAZORS_YAML).unwrap();
    std::fs::write(dir.path().join("blades.yaml"), test_utils::BLADES_YAML).unwrap();
    std::fs::write(dir.path().join("brushes.yaml"), test_utils::BRUSHES_YAML).unwrap();
    std::fs::write(dir.path().join("soaps.yaml"), test_utils::SOAPS_YAML).unwrap();
    std::fs::write(dir.path().join("handles.yaml"), test_utils::HANDLES_YAML).unwrap();
    std::fs::write(dir.path().join("knots.yaml"), test_utils::KNOTS_YAML).unwrap();
    std::fs::write(
        dir.path().join("correct_matches.yaml"),
        test_utils::OVERRIDES_YAML,
    )
    .unwrap();

    let catalogs = Catalogs::load_dir(dir.path(), DuplicatePolicy::default()).unwrap();
    assert!(!catalogs.razor.entries.is_empty());
    assert_eq!(catalogs.override_count(), 7);
}

#[test]
fn test_load_dir_missing_catalog_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    // Only one of the required files present: the load must abort, no
    // partial-catalog operation.
    std::fs::write(dir.path().join("razors.yaml"), test_utils::RAZORS_YAML).unwrap();
    assert!(Catalogs::load_dir(dir.path(), DuplicatePolicy::default()).is_err());
}
