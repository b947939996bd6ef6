//! In-memory cache for regex-evaluation outcomes keyed by
//! `(scope, normalized text)`.
//!
//! Avoids re-running a category's full ordered pattern set when the same
//! normalized input repeats within a run. The catalog is immutable for the
//! life of a run, so entries are never invalidated mid-run; the validator
//! clears the whole cache between field-scoped passes instead.

use std::collections::HashMap;

use crate::matcher::types::MatchedEntity;
use crate::types::{Category, SubRole};

/// Which pattern set an evaluation ran against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternScope {
    Category(Category),
    Sub(SubRole),
}

/// Outcome of one ordered regex scan: the winning entity plus provenance,
/// or nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct RegexHit {
    pub entity: MatchedEntity,
    pub pattern: String,
    pub confidence: f32,
}

#[derive(Debug, Default)]
pub struct PatternCache {
    store: HashMap<(PatternScope, String), Option<RegexHit>>,
}

impl PatternCache {
    pub fn new() -> Self {
        Self {
            store: HashMap::new(),
        }
    }

    /// Get the cached outcome or compute + cache it.
    pub fn get_or_compute(
        &mut self,
        scope: PatternScope,
        normalized: &str,
        compute: impl FnOnce() -> Option<RegexHit>,
    ) -> Option<RegexHit> {
        self.store
            .entry((scope, normalized.to_string()))
            .or_insert_with(compute)
            .clone()
    }

    /// Drop all cached outcomes. Called between independent validation
    /// passes so one field's results never leak into the next.
    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Number of cached entries (for diagnostics).
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
#[path = "tests/cache_tests.rs"]
mod tests;
