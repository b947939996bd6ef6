//! Shared test fixtures: a small but realistic catalog set plus curated
//! overrides. Every override in the fixture validates cleanly against the
//! fixture catalogs, so validator tests can assert a zero-issue baseline.

use crate::catalog::{parse_catalog, Catalog, Catalogs};
use crate::overrides::DuplicatePolicy;

/// Opt-in log capture for tests (`RUST_LOG=debug cargo test -- --nocapture`).
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub const RAZORS_YAML: &str = r#"
Gillette:
  Tech:
    format: DE
    patterns:
      - gillette.*tech
  Super Speed:
    format: DE
    patterns:
      - gillette.*super\s*speed
Tatara:
  Masamune:
    format: DE
    patterns:
      - masamune
  Masamune Nodachi:
    format: DE
    patterns:
      - masamune.*nodachi
Blackland:
  Vector:
    format: AC
    patterns:
      - blackland.*vector
GEM:
  Micromatic:
    format: GEM
    patterns:
      - gem.*micromatic
Weck:
  Sextoblade:
    format: Shavette
    patterns:
      - weck.*sextoblade
"#;

pub const BLADES_YAML: &str = r#"
Feather:
  DE:
    format: DE
    patterns:
      - ^feather$
      - feather.*hi.?stainless
  Pro:
    format: AC
    patterns:
      - feather.*pro
Personna:
  GEM PTFE:
    format: GEM
    patterns:
      - (personna|gem).*ptfe
  Lab Blue:
    format: DE
    patterns:
      - personna.*(lab|blue)
"#;

pub const BRUSHES_YAML: &str = r#"
Semogue:
  "610":
    fiber: Boar
    knot_mm: 21
    patterns:
      - semogue.*610
Simpson:
  Chubby 2:
    fiber: Badger
    knot_mm: 27
    patterns:
      - simpson.*chubby\s*2
Declaration Grooming:
  B9B:
    fiber: Badger
    knot_mm: 28
    patterns:
      - b9b
AP Shave Co:
  G5C:
    fiber: Synthetic
    patterns:
      - ap\s*shave.*g5c
"#;

pub const SOAPS_YAML: &str = r#"
Barrister and Mann:
  Seville:
    patterns:
      - b\s*(&|and)\s*m.*seville
      - barrister.*seville
Stirling:
  Executive Man:
    patterns:
      - stirling.*executive
"#;

pub const HANDLES_YAML: &str = r#"
Mozingo:
  Jefferson:
    patterns:
      - mozingo
Dogwood Handcrafts:
  Handle:
    patterns:
      - dogwood
Summit:
  Handle:
    patterns:
      - summit
"#;

pub const KNOTS_YAML: &str = r#"
Declaration Grooming:
  B2:
    fiber: Badger
    knot_mm: 28
    patterns:
      - declaration.*b2
  B9B:
    fiber: Badger
    knot_mm: 28
    patterns:
      - declaration.*b9b
      - \bb9b\b
Maggard:
  SHD:
    fiber: Badger
    patterns:
      - maggard.*shd
AP Shave Co:
  G5C:
    fiber: Synthetic
    patterns:
      - g5c
"#;

pub const OVERRIDES_YAML: &str = r#"
razor:
  Gillette:
    Tech:
      - "gillette tech fat handle"
blade:
  Personna:
    GEM PTFE:
      - "personna ptfe"
brush:
  Declaration Grooming:
    B9B:
      - "bristle brushworks b9b"
    B2:
      strings:
        - "declaration b2 mozingo"
      handle:
        brand: Mozingo
        model: Jefferson
      knot:
        brand: Declaration Grooming
        model: B2
soap:
  Barrister and Mann:
    Seville:
      - "b&m seville"
handle:
  Dogwood Handcrafts:
    Handle:
      - "dogwood handcrafts"
knot:
  Declaration Grooming:
    B9B:
      - "b9b"
no_split:
  - "simpson chubby 2 in black"
"#;

pub fn test_catalog(yaml: &str, label: &str) -> Catalog {
    parse_catalog(yaml, label, "<test>").expect("fixture catalog must parse")
}

/// Full fixture: all six catalogs plus the override table.
pub fn test_catalogs() -> Catalogs {
    Catalogs::new(
        test_catalog(RAZORS_YAML, "razor"),
        test_catalog(BLADES_YAML, "blade"),
        test_catalog(BRUSHES_YAML, "brush"),
        test_catalog(SOAPS_YAML, "soap"),
        test_catalog(HANDLES_YAML, "handle"),
        test_catalog(KNOTS_YAML, "knot"),
        OVERRIDES_YAML,
        DuplicatePolicy::default(),
    )
    .expect("fixture catalogs must assemble")
}

/// Fixture without any overrides, for pure pattern-path tests.
pub fn test_catalogs_no_overrides() -> Catalogs {
    Catalogs::new(
        test_catalog(RAZORS_YAML, "razor"),
        test_catalog(BLADES_YAML, "blade"),
        test_catalog(BRUSHES_YAML, "brush"),
        test_catalog(SOAPS_YAML, "soap"),
        test_catalog(HANDLES_YAML, "handle"),
        test_catalog(KNOTS_YAML, "knot"),
        "{}",
        DuplicatePolicy::default(),
    )
    .expect("fixture catalogs must assemble")
}
