//! Result types for the matching pipeline: MatchType, MatchedEntity,
//! SubMatch, SplitProvenance, MatchResult.

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogEntry;
use crate::overrides::OverrideEntity;
use crate::types::{Category, Fiber, Format, SubRole};

/// How a result was produced. `None` is a first-class outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchType {
    /// Exact hit in the curated override table.
    Override,
    /// Ordered regex evaluation against the catalog.
    Regex,
    /// Nothing matched.
    None,
}

impl std::fmt::Display for MatchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchType::Override => write!(f, "override"),
            MatchType::Regex => write!(f, "regex"),
            MatchType::None => write!(f, "none"),
        }
    }
}

/// The structured entity a piece of text resolved to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedEntity {
    pub brand: String,
    pub model: String,
    pub format: Option<Format>,
    /// Post-matching refinement of an ambiguous format (e.g. `Shavette`
    /// narrowed to `Shavette (AC)`). Preferred over `format` by the
    /// compatibility checker.
    #[serde(default)]
    pub enriched_format: Option<Format>,
    #[serde(default)]
    pub fiber: Option<Fiber>,
    #[serde(default)]
    pub knot_mm: Option<f32>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

impl MatchedEntity {
    pub fn from_entry(entry: &CatalogEntry) -> Self {
        Self {
            brand: entry.brand.clone(),
            model: entry.model.clone(),
            format: entry.format,
            enriched_format: None,
            fiber: entry.fiber,
            knot_mm: entry.knot_mm,
            metadata: entry.metadata.clone(),
        }
    }

    pub fn from_override(entity: &OverrideEntity) -> Self {
        Self {
            brand: entity.brand.clone(),
            model: entity.model.clone(),
            format: entity.format,
            enriched_format: None,
            fiber: entity.fiber,
            knot_mm: entity.knot_mm,
            metadata: None,
        }
    }

    /// Format to use for cross-field checks: enrichment narrows ambiguous
    /// formats, so it wins when present.
    pub fn effective_format(&self) -> Option<Format> {
        self.enriched_format.or(self.format)
    }
}

/// Independent match result for one side of a decomposed brush.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubMatch {
    pub role: SubRole,
    /// Segment of the original text this side was matched from.
    pub text: String,
    pub match_type: MatchType,
    pub entity: Option<MatchedEntity>,
    pub pattern: Option<String>,
    pub confidence: f32,
}

impl SubMatch {
    pub fn none(role: SubRole, text: &str) -> Self {
        Self {
            role,
            text: text.to_string(),
            match_type: MatchType::None,
            entity: None,
            pattern: None,
            confidence: 0.0,
        }
    }
}

/// Which split heuristic produced a brush decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SplitStrategy {
    Delimiter,
    FiberHint,
    BrandContext,
    NoSplitFallback,
}

impl std::fmt::Display for SplitStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SplitStrategy::Delimiter => write!(f, "delimiter"),
            SplitStrategy::FiberHint => write!(f, "fiber_hint"),
            SplitStrategy::BrandContext => write!(f, "brand_context"),
            SplitStrategy::NoSplitFallback => write!(f, "no_split_fallback"),
        }
    }
}

/// Confidence tier of a split decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ConfidenceTier {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfidenceTier::High => write!(f, "high"),
            ConfidenceTier::Medium => write!(f, "medium"),
            ConfidenceTier::Low => write!(f, "low"),
        }
    }
}

/// Provenance of a brush split decision, kept on the result for reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitProvenance {
    pub strategy: SplitStrategy,
    pub tier: ConfidenceTier,
    pub rationale: String,
}

/// A classified piece of product text.
///
/// Brush invariant: either `entity` is present (single complete brush) or
/// `handle` + `knot` are present (decomposed brush) — never both. No-match
/// results carry neither.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub original: String,
    pub normalized: String,
    pub category: Category,
    pub match_type: MatchType,
    pub entity: Option<MatchedEntity>,
    /// Regex pattern that produced the hit (provenance); absent for
    /// override hits and no-match.
    pub pattern: Option<String>,
    /// Override → 1.0, regex → (0,1) from pattern specificity, none → 0.0.
    pub confidence: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle: Option<SubMatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub knot: Option<SubMatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub split: Option<SplitProvenance>,
}

impl MatchResult {
    pub fn no_match(category: Category, original: &str, normalized: &str) -> Self {
        Self {
            original: original.to_string(),
            normalized: normalized.to_string(),
            category,
            match_type: MatchType::None,
            entity: None,
            pattern: None,
            confidence: 0.0,
            handle: None,
            knot: None,
            split: None,
        }
    }

    pub fn is_match(&self) -> bool {
        self.match_type != MatchType::None
    }

    /// Whether this is a decomposed brush result.
    pub fn is_split(&self) -> bool {
        self.handle.is_some() && self.knot.is_some()
    }
}
