//! Matcher facade: the public entry points collaborators call.
//!
//! Holds a reference to the immutable catalogs plus the per-run pattern
//! cache. Single-threaded by design: per-call work is sub-millisecond and
//! coordination overhead dominates at this granularity, so batches run
//! sequentially over the shared cache.

pub mod cache;
pub mod category;
pub mod types;

pub use cache::{PatternCache, PatternScope, RegexHit};
pub use types::{
    ConfidenceTier, MatchResult, MatchType, MatchedEntity, SplitProvenance, SplitStrategy,
    SubMatch,
};

use crate::brush;
use crate::catalog::Catalogs;
use crate::types::Category;

/// Classifies product text against the loaded catalogs.
pub struct Matcher<'a> {
    catalogs: &'a Catalogs,
    cache: PatternCache,
}

impl<'a> Matcher<'a> {
    pub fn new(catalogs: &'a Catalogs) -> Self {
        Self {
            catalogs,
            cache: PatternCache::new(),
        }
    }

    /// Classify one piece of text. Never fails: unmatched input comes back
    /// with match type `none`.
    pub fn match_one(&mut self, category: Category, text: &str) -> MatchResult {
        self.match_one_opts(category, text, true)
    }

    /// Classify a batch sequentially over the shared cache.
    pub fn match_batch<S: AsRef<str>>(
        &mut self,
        category: Category,
        texts: &[S],
    ) -> Vec<MatchResult> {
        texts
            .iter()
            .map(|t| self.match_one(category, t.as_ref()))
            .collect()
    }

    /// The one legitimate mutation point: drop memoized pattern outcomes
    /// (used between independent validation passes).
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn catalogs(&self) -> &'a Catalogs {
        self.catalogs
    }

    /// Cache size, for diagnostics.
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Mutable cache access for validator-side lookups that bypass the
    /// split engine.
    pub(crate) fn with_cache<T>(&mut self, f: impl FnOnce(&mut PatternCache) -> T) -> T {
        f(&mut self.cache)
    }

    /// Internal variant with the override shortcut switchable; the
    /// validator disables it to exercise the live pattern set.
    pub(crate) fn match_one_opts(
        &mut self,
        category: Category,
        text: &str,
        use_overrides: bool,
    ) -> MatchResult {
        match category {
            Category::Brush => {
                brush::match_brush(self.catalogs, &mut self.cache, text, use_overrides)
            }
            _ => category::match_category(
                self.catalogs,
                &mut self.cache,
                category,
                text,
                use_overrides,
            ),
        }
    }
}

#[cfg(test)]
#[path = "tests/matcher_tests.rs"]
mod tests;
