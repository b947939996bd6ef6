//! Catalog entry types: a brand/model with its ordered, compiled patterns
//! and optional physical metadata.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::types::errors::{CatalogError, CatalogResult};
use crate::types::{Fiber, Format};

/// A single regex pattern with its compiled form and derived confidence.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    /// Pattern text as declared in the catalog file.
    pub source: String,
    /// Case-insensitive compiled regex.
    pub regex: Regex,
    /// Specificity-derived confidence, strictly inside (0, 1).
    pub confidence: f32,
}

impl CompiledPattern {
    pub fn compile(brand: &str, model: &str, source: &str) -> CatalogResult<Self> {
        let regex = Regex::new(&format!("(?i){}", source)).map_err(|e| {
            CatalogError::InvalidPattern {
                brand: brand.to_string(),
                model: model.to_string(),
                pattern: source.to_string(),
                message: e.to_string(),
            }
        })?;
        Ok(Self {
            source: source.to_string(),
            regex,
            confidence: pattern_confidence(source),
        })
    }
}

/// Confidence for a regex hit, from pattern specificity.
///
/// Fully anchored patterns pin the whole string and score highest; longer
/// patterns carry more literal context than short ones. Bounded to (0, 1)
/// so regex hits never tie with override hits (1.0) or no-match (0.0).
pub fn pattern_confidence(source: &str) -> f32 {
    let anchored_start = source.starts_with('^');
    let anchored_end = source.ends_with('$');
    let base = match (anchored_start, anchored_end) {
        (true, true) => 0.85,
        (true, false) | (false, true) => 0.75,
        (false, false) => 0.6,
    };
    let length_bonus = (source.len().min(40) as f32) / 400.0;
    (base + length_bonus).min(0.95)
}

/// One brand/model entry in a category catalog.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub brand: String,
    pub model: String,
    pub format: Option<Format>,
    pub fiber: Option<Fiber>,
    /// Knot diameter in millimeters, where the catalog records one.
    pub knot_mm: Option<f32>,
    /// Free-form curator metadata passed through untouched.
    pub metadata: Option<serde_json::Value>,
    /// Patterns in declared order; earlier patterns win on overlap.
    pub patterns: Vec<CompiledPattern>,
}

impl CatalogEntry {
    /// First pattern (in declared order) matching the normalized text.
    pub fn first_match(&self, normalized: &str) -> Option<&CompiledPattern> {
        self.patterns.iter().find(|p| p.regex.is_match(normalized))
    }
}

/// Deserialized model-level detail block from a catalog file.
/// Models may also be declared as a bare pattern list; the loader folds
/// both shapes into this.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawModelDetail {
    #[serde(default)]
    pub patterns: Vec<String>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub fiber: Option<String>,
    #[serde(default)]
    pub knot_mm: Option<f32>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

#[cfg(test)]
#[path = "tests/entry_tests.rs"]
mod tests;
