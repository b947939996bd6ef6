//! Override table with an O(1) reverse index from normalized text to
//! structured result, partitioned by section (category or brush sub-role).
//!
//! The override file is a single YAML document with top-level sections
//! `razor`, `blade`, `brush`, `soap`, `handle`, `knot`, and `no_split`.
//! Each section maps brand → model → list of original strings; brush model
//! values may instead be a detail block carrying curated `handle:`/`knot:`
//! sub-results for strings that must resolve as a split.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use serde_yaml::Value;

use crate::catalog::Catalog;
use crate::normalize;
use crate::types::errors::{CatalogError, CatalogResult};
use crate::types::{Category, Fiber, Format, SubRole};

/// Override file section. Brush sub-roles get their own sections so the
/// same surface text can map to different results per side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    Razor,
    Blade,
    Brush,
    Soap,
    Handle,
    Knot,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Razor,
        Section::Blade,
        Section::Brush,
        Section::Soap,
        Section::Handle,
        Section::Knot,
    ];

    /// Section consulted for a category lookup, disambiguated by sub-role
    /// for brushes.
    pub fn for_lookup(category: Category, sub_role: Option<SubRole>) -> Section {
        match (category, sub_role) {
            (Category::Brush, Some(SubRole::Handle)) => Section::Handle,
            (Category::Brush, Some(SubRole::Knot)) => Section::Knot,
            (Category::Razor, _) => Section::Razor,
            (Category::Blade, _) => Section::Blade,
            (Category::Brush, None) => Section::Brush,
            (Category::Soap, _) => Section::Soap,
        }
    }

    fn from_key(key: &str) -> Option<Section> {
        match key {
            "razor" => Some(Section::Razor),
            "blade" => Some(Section::Blade),
            "brush" => Some(Section::Brush),
            "soap" => Some(Section::Soap),
            "handle" => Some(Section::Handle),
            "knot" => Some(Section::Knot),
            _ => None,
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Section::Razor => "razor",
            Section::Blade => "blade",
            Section::Brush => "brush",
            Section::Soap => "soap",
            Section::Handle => "handle",
            Section::Knot => "knot",
        };
        write!(f, "{}", s)
    }
}

/// How to treat two override entries sharing the same normalized text.
/// The same-format rule was arrived at empirically upstream, so it stays
/// a policy rather than a hard-coded law.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Reject duplicates whose resolved formats are equal; entries that
    /// differ only in format (e.g. a DE and a GEM blade sharing one
    /// surface string) are legitimate.
    #[default]
    RejectSameFormat,
    /// Reject any repeated normalized text within a section.
    RejectAll,
    /// Accept everything; first declared entry wins on lookup.
    AllowAll,
}

/// The structured result an override entry resolves to.
#[derive(Debug, Clone, PartialEq)]
pub struct OverrideEntity {
    pub brand: String,
    pub model: String,
    pub format: Option<Format>,
    pub fiber: Option<Fiber>,
    pub knot_mm: Option<f32>,
}

/// Outcome of an override hit: a complete entity, or (brush only) a curated
/// handle/knot split.
#[derive(Debug, Clone, PartialEq)]
pub enum OverrideOutcome {
    Entity(OverrideEntity),
    BrushSplit {
        handle: OverrideEntity,
        knot: OverrideEntity,
    },
}

/// One stored override entry, ready for O(1) lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredOverride {
    pub outcome: OverrideOutcome,
}

impl StoredOverride {
    fn format(&self) -> Option<Format> {
        match &self.outcome {
            OverrideOutcome::Entity(e) => e.format,
            OverrideOutcome::BrushSplit { .. } => None,
        }
    }
}

/// Read-only references to the loaded catalogs, used to resolve override
/// brand/model pairs to their catalog metadata (format, fiber, knot size).
#[derive(Debug, Clone, Copy)]
pub struct SectionCatalogs<'a> {
    pub razor: &'a Catalog,
    pub blade: &'a Catalog,
    pub brush: &'a Catalog,
    pub soap: &'a Catalog,
    pub handle: &'a Catalog,
    pub knot: &'a Catalog,
}

impl<'a> SectionCatalogs<'a> {
    fn catalog(&self, section: Section) -> &'a Catalog {
        match section {
            Section::Razor => self.razor,
            Section::Blade => self.blade,
            Section::Brush => self.brush,
            Section::Soap => self.soap,
            Section::Handle => self.handle,
            Section::Knot => self.knot,
        }
    }
}

/// Reverse index from normalized original text to curated results.
/// Read-only after load.
#[derive(Debug, Clone, Default)]
pub struct OverrideTable {
    sections: BTreeMap<Section, BTreeMap<String, Vec<StoredOverride>>>,
    /// Strings the curator asserts must never be decomposed into
    /// handle + knot.
    no_split: BTreeSet<String>,
}

#[derive(Debug, Deserialize)]
struct RawSideRef {
    brand: String,
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    fiber: Option<String>,
    #[serde(default)]
    knot_mm: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct RawSplitDetail {
    #[serde(default)]
    strings: Vec<String>,
    handle: RawSideRef,
    knot: RawSideRef,
}

impl OverrideTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load the override file from disk.
    pub fn load(
        path: &Path,
        catalogs: &SectionCatalogs<'_>,
        policy: DuplicatePolicy,
    ) -> CatalogResult<Self> {
        log::info!("Loading overrides from: {}", path.display());
        let contents = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::parse(&contents, &path.display().to_string(), catalogs, policy)
    }

    /// Parse override YAML and build the reverse index.
    pub fn parse(
        yaml: &str,
        origin: &str,
        catalogs: &SectionCatalogs<'_>,
        policy: DuplicatePolicy,
    ) -> CatalogResult<Self> {
        let root: Value = serde_yaml::from_str(yaml).map_err(|e| CatalogError::Parse {
            path: origin.to_string(),
            message: e.to_string(),
        })?;
        let Value::Mapping(top) = root else {
            return Err(CatalogError::Schema {
                path: origin.to_string(),
                message: "override file root must be a section mapping".to_string(),
            });
        };

        let mut table = OverrideTable::empty();
        for (section_key, section_value) in &top {
            let key = match section_key {
                Value::String(s) => s.as_str(),
                _ => {
                    return Err(CatalogError::Schema {
                        path: origin.to_string(),
                        message: "section keys must be strings".to_string(),
                    })
                }
            };

            if key == "no_split" {
                table.parse_no_split(section_value, origin)?;
                continue;
            }

            let Some(section) = Section::from_key(key) else {
                log::warn!("Ignoring unknown override section '{}'", key);
                continue;
            };
            table.parse_section(section, section_value, origin, catalogs, policy)?;
        }

        let total: usize = table
            .sections
            .values()
            .map(|m| m.values().map(Vec::len).sum::<usize>())
            .sum();
        log::info!(
            "Overrides loaded: {} entries, {} no-split strings",
            total,
            table.no_split.len()
        );
        Ok(table)
    }

    fn parse_no_split(&mut self, value: &Value, origin: &str) -> CatalogResult<()> {
        let strings: Vec<String> =
            serde_yaml::from_value(value.clone()).map_err(|e| CatalogError::Schema {
                path: origin.to_string(),
                message: format!("no_split must be a list of strings: {}", e),
            })?;
        for s in strings {
            self.no_split.insert(normalize::normalize(&s));
        }
        Ok(())
    }

    fn parse_section(
        &mut self,
        section: Section,
        value: &Value,
        origin: &str,
        catalogs: &SectionCatalogs<'_>,
        policy: DuplicatePolicy,
    ) -> CatalogResult<()> {
        let Value::Mapping(brands) = value else {
            return Err(CatalogError::Schema {
                path: origin.to_string(),
                message: format!("section '{}' must map brand → model", section),
            });
        };

        for (brand_key, models_value) in brands {
            let Value::String(brand) = brand_key else {
                return Err(CatalogError::Schema {
                    path: origin.to_string(),
                    message: format!("section '{}': brand keys must be strings", section),
                });
            };
            let Value::Mapping(models) = models_value else {
                return Err(CatalogError::Schema {
                    path: origin.to_string(),
                    message: format!("section '{}': brand '{}' must map to models", section, brand),
                });
            };

            for (model_key, entry_value) in models {
                let Value::String(model) = model_key else {
                    return Err(CatalogError::Schema {
                        path: origin.to_string(),
                        message: format!("section '{}': model keys must be strings", section),
                    });
                };

                match entry_value {
                    Value::Sequence(_) => {
                        let strings: Vec<String> = serde_yaml::from_value(entry_value.clone())
                            .map_err(|e| CatalogError::Schema {
                                path: origin.to_string(),
                                message: format!("{} {} {}: {}", section, brand, model, e),
                            })?;
                        let entity = resolve_entity(catalogs.catalog(section), brand, model);
                        for text in strings {
                            self.insert(
                                section,
                                &text,
                                StoredOverride {
                                    outcome: OverrideOutcome::Entity(entity.clone()),
                                },
                                policy,
                            )?;
                        }
                    }
                    Value::Mapping(_) if section == Section::Brush => {
                        let detail: RawSplitDetail = serde_yaml::from_value(entry_value.clone())
                            .map_err(|e| CatalogError::Schema {
                                path: origin.to_string(),
                                message: format!("brush {} {}: bad split block: {}", brand, model, e),
                            })?;
                        let stored = StoredOverride {
                            outcome: OverrideOutcome::BrushSplit {
                                handle: resolve_side(catalogs.handle, &detail.handle)?,
                                knot: resolve_side(catalogs.knot, &detail.knot)?,
                            },
                        };
                        for text in &detail.strings {
                            self.insert(section, text, stored.clone(), policy)?;
                        }
                    }
                    _ => {
                        return Err(CatalogError::Schema {
                            path: origin.to_string(),
                            message: format!(
                                "{} {} {}: expected string list{}",
                                section,
                                brand,
                                model,
                                if section == Section::Brush {
                                    " or split block"
                                } else {
                                    ""
                                }
                            ),
                        })
                    }
                }
            }
        }
        Ok(())
    }

    fn insert(
        &mut self,
        section: Section,
        text: &str,
        stored: StoredOverride,
        policy: DuplicatePolicy,
    ) -> CatalogResult<()> {
        let normalized = normalize::normalize(text);
        if normalized.is_empty() {
            log::warn!("Skipping empty override string in section {}", section);
            return Ok(());
        }

        let bucket = self
            .sections
            .entry(section)
            .or_default()
            .entry(normalized.clone())
            .or_default();

        if !bucket.is_empty() {
            let clash = match policy {
                DuplicatePolicy::AllowAll => false,
                DuplicatePolicy::RejectAll => true,
                DuplicatePolicy::RejectSameFormat => {
                    bucket.iter().any(|b| b.format() == stored.format())
                }
            };
            if clash {
                return Err(CatalogError::DuplicateOverride {
                    section: section.to_string(),
                    text: normalized,
                    first: describe(&bucket[0]),
                    second: describe(&stored),
                });
            }
        }

        bucket.push(stored);
        Ok(())
    }

    /// O(1) lookup of the first declared override for this text.
    /// Returns `None` on miss, never an error.
    pub fn lookup(&self, section: Section, normalized: &str) -> Option<&StoredOverride> {
        self.lookup_all(section, normalized).first()
    }

    /// All overrides for this text (more than one only when formats differ
    /// under the default policy).
    pub fn lookup_all(&self, section: Section, normalized: &str) -> &[StoredOverride] {
        self.sections
            .get(&section)
            .and_then(|m| m.get(normalized))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Curator asserts this string must never be decomposed.
    pub fn is_no_split(&self, normalized: &str) -> bool {
        self.no_split.contains(normalized)
    }

    /// Iterate a section's entries in sorted (deterministic) order.
    pub fn iter_section(
        &self,
        section: Section,
    ) -> impl Iterator<Item = (&String, &Vec<StoredOverride>)> {
        self.sections.get(&section).into_iter().flat_map(|m| m.iter())
    }

    pub fn section_len(&self, section: Section) -> usize {
        self.sections
            .get(&section)
            .map(|m| m.values().map(Vec::len).sum())
            .unwrap_or(0)
    }
}

/// Resolve an override's brand/model against the section catalog so the
/// stored result carries the catalog's format and knot metadata. Unknown
/// pairs are kept as written; the validator reports them as drift.
fn resolve_entity(catalog: &Catalog, brand: &str, model: &str) -> OverrideEntity {
    match catalog.entry_for(brand, model) {
        Some(entry) => OverrideEntity {
            brand: entry.brand.clone(),
            model: entry.model.clone(),
            format: entry.format,
            fiber: entry.fiber,
            knot_mm: entry.knot_mm,
        },
        None => {
            log::warn!(
                "Override references {} {} not present in {} catalog",
                brand,
                model,
                catalog.label
            );
            OverrideEntity {
                brand: brand.to_string(),
                model: model.to_string(),
                format: None,
                fiber: None,
                knot_mm: None,
            }
        }
    }
}

fn resolve_side(catalog: &Catalog, side: &RawSideRef) -> CatalogResult<OverrideEntity> {
    let model = side.model.clone().unwrap_or_default();
    let mut entity = resolve_entity(catalog, &side.brand, &model);
    // Explicit fields in the split block win over catalog metadata.
    if let Some(fiber) = side.fiber.as_deref() {
        entity.fiber = Some(Fiber::from_str(fiber)?);
    }
    if side.knot_mm.is_some() {
        entity.knot_mm = side.knot_mm;
    }
    Ok(entity)
}

fn describe(stored: &StoredOverride) -> String {
    match &stored.outcome {
        OverrideOutcome::Entity(e) => format!("{} {}", e.brand, e.model),
        OverrideOutcome::BrushSplit { handle, knot } => {
            format!("split {} / {} {}", handle.brand, knot.brand, knot.model)
        }
    }
}

#[cfg(test)]
#[path = "tests/table_tests.rs"]
mod tests;
