//! shavematch — classifies free-text wet-shaving product descriptions
//! (razor, blade, brush, soap strings) against curated brand/model
//! catalogs, producing structured matches with provenance and confidence.
//!
//! Pipeline: raw text → override table lookup → (miss) → ordered regex
//! catalog matching (brushes additionally run the handle/knot split
//! engine) → structured `MatchResult` → optional format compatibility
//! check across matched razor/blade pairs. A batch validator re-checks
//! every override entry against the live pattern set to surface drift.
//!
//! Catalogs load once, eagerly, then are shared read-only; the pattern
//! cache is the only per-run mutable state.

pub mod brush;
pub mod catalog;
pub mod compat;
pub mod matcher;
pub mod normalize;
pub mod overrides;
pub mod types;
pub mod validator;
#[cfg(test)]
pub mod test_utils;

pub use catalog::{Catalog, Catalogs};
pub use compat::{check_compatibility, check_formats, CompatIssue, Severity};
pub use matcher::{
    ConfidenceTier, MatchResult, MatchType, MatchedEntity, Matcher, SplitProvenance,
    SplitStrategy, SubMatch,
};
pub use overrides::{DuplicatePolicy, OverrideTable, Section};
pub use types::errors::{CatalogError, CatalogResult};
pub use types::{Category, Fiber, Format, SubRole};
pub use validator::{validate, validate_with_progress, IssueKind, ValidationIssue};
