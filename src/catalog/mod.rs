//! Catalog store: loaded brand→model→pattern structures per product
//! category, immutable for the duration of a matching run.

pub mod entry;
pub mod loader;
pub mod store;

pub use entry::{CatalogEntry, CompiledPattern};
pub use loader::{load_catalog, parse_catalog};
pub use store::Catalogs;

use std::collections::BTreeSet;

use crate::normalize;

/// One category's ordered entries plus derived lookup structures.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub label: String,
    /// Entries in catalog-declared order. Order is load-bearing: earlier
    /// entries win when two patterns match the same input.
    pub entries: Vec<CatalogEntry>,
    /// Normalized brand names, deterministic order.
    brands: BTreeSet<String>,
}

impl Catalog {
    pub fn new(label: &str, entries: Vec<CatalogEntry>) -> Self {
        let brands = entries
            .iter()
            .map(|e| normalize::normalize(&e.brand))
            .filter(|b| !b.is_empty())
            .collect();
        Self {
            label: label.to_string(),
            entries,
            brands,
        }
    }

    /// First (entry, pattern) pair matching the normalized text, scanning
    /// entries and their patterns in declared order.
    pub fn find_first_match(&self, normalized: &str) -> Option<(usize, &CompiledPattern)> {
        self.entries
            .iter()
            .enumerate()
            .find_map(|(i, entry)| entry.first_match(normalized).map(|p| (i, p)))
    }

    /// Normalized brand names present in the input text, deterministic order.
    pub fn brands_in(&self, normalized: &str) -> Vec<&str> {
        self.brands
            .iter()
            .filter(|brand| normalized.contains(brand.as_str()))
            .map(|s| s.as_str())
            .collect()
    }

    pub fn has_brand(&self, normalized_brand: &str) -> bool {
        self.brands.contains(normalized_brand)
    }

    /// All normalized brand names, deterministic order.
    pub fn brands(&self) -> impl Iterator<Item = &str> {
        self.brands.iter().map(|s| s.as_str())
    }

    /// Look up an entry by exact brand/model (case-insensitive).
    /// Used when resolving override entries to their catalog metadata.
    pub fn entry_for(&self, brand: &str, model: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| {
            e.brand.eq_ignore_ascii_case(brand) && e.model.eq_ignore_ascii_case(model)
        })
    }
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod catalog_tests;
