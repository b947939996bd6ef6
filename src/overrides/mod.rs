//! Curated override table ("correct matches"): exact normalized-text →
//! known-correct result entries that bypass pattern evaluation.

pub mod table;

pub use table::{
    DuplicatePolicy, OverrideEntity, OverrideOutcome, OverrideTable, Section, SectionCatalogs,
    StoredOverride,
};
