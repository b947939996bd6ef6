//! Catalog file loading.
//!
//! Catalog files are human-edited YAML, one per category, mapping
//! brand → model → pattern list (or a detail block with patterns plus
//! metadata). Declared order is significant: earlier entries take priority
//! on ambiguous overlap, so parsing walks the YAML mapping in file order
//! rather than deserializing into a sorted map.

use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use serde_yaml::Value;

use crate::catalog::entry::{CatalogEntry, CompiledPattern, RawModelDetail};
use crate::types::errors::{CatalogError, CatalogResult};
use crate::types::{Fiber, Format};

use super::Catalog;

/// Load one category catalog from a YAML file.
pub fn load_catalog(path: &Path, label: &str) -> CatalogResult<Catalog> {
    log::info!("Loading {} catalog from: {}", label, path.display());
    let contents = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_catalog(&contents, label, &path.display().to_string())
}

/// Parse catalog YAML, preserving brand/model declaration order.
pub fn parse_catalog(yaml: &str, label: &str, origin: &str) -> CatalogResult<Catalog> {
    let root: Value = serde_yaml::from_str(yaml).map_err(|e| CatalogError::Parse {
        path: origin.to_string(),
        message: e.to_string(),
    })?;

    let Value::Mapping(brands) = root else {
        return Err(CatalogError::Schema {
            path: origin.to_string(),
            message: format!("{} catalog root must be a brand mapping", label),
        });
    };

    let mut entries = Vec::new();
    for (brand_key, models_value) in &brands {
        let brand = string_key(brand_key, origin, "brand")?;
        let Value::Mapping(models) = models_value else {
            return Err(CatalogError::Schema {
                path: origin.to_string(),
                message: format!("brand '{}' must map to a model mapping", brand),
            });
        };
        for (model_key, detail_value) in models {
            let model = string_key(model_key, origin, "model")?;
            let entry = build_entry(&brand, &model, detail_value, origin)?;
            entries.push(entry);
        }
    }

    check_duplicate_patterns(&entries, label)?;
    log::debug!("{} catalog: {} entries", label, entries.len());
    Ok(Catalog::new(label, entries))
}

fn string_key(key: &Value, origin: &str, what: &str) -> CatalogResult<String> {
    match key {
        Value::String(s) => Ok(s.clone()),
        other => Err(CatalogError::Schema {
            path: origin.to_string(),
            message: format!("{} key must be a string, got {:?}", what, other),
        }),
    }
}

/// A model maps either to a bare pattern list or to a detail block.
fn build_entry(
    brand: &str,
    model: &str,
    detail_value: &Value,
    origin: &str,
) -> CatalogResult<CatalogEntry> {
    let detail: RawModelDetail = match detail_value {
        Value::Sequence(_) => RawModelDetail {
            patterns: serde_yaml::from_value(detail_value.clone()).map_err(|e| {
                CatalogError::Schema {
                    path: origin.to_string(),
                    message: format!("{} {}: bad pattern list: {}", brand, model, e),
                }
            })?,
            ..Default::default()
        },
        Value::Mapping(_) => {
            serde_yaml::from_value(detail_value.clone()).map_err(|e| CatalogError::Schema {
                path: origin.to_string(),
                message: format!("{} {}: bad detail block: {}", brand, model, e),
            })?
        }
        _ => {
            return Err(CatalogError::Schema {
                path: origin.to_string(),
                message: format!(
                    "{} {}: expected pattern list or detail block",
                    brand, model
                ),
            })
        }
    };

    if detail.patterns.is_empty() {
        log::warn!("{} {}: no patterns declared", brand, model);
    }

    let format = detail
        .format
        .as_deref()
        .map(Format::from_str)
        .transpose()?;
    let fiber = detail.fiber.as_deref().map(Fiber::from_str).transpose()?;

    let patterns = detail
        .patterns
        .iter()
        .map(|p| CompiledPattern::compile(brand, model, p))
        .collect::<CatalogResult<Vec<_>>>()?;

    Ok(CatalogEntry {
        brand: brand.to_string(),
        model: model.to_string(),
        format,
        fiber,
        knot_mm: detail.knot_mm,
        metadata: detail.metadata,
        patterns,
    })
}

/// Within one category, no two entries may declare the same pattern string
/// under the same format. Curators fix this at the source; the loader
/// refuses to operate on an ambiguous catalog.
fn check_duplicate_patterns(entries: &[CatalogEntry], label: &str) -> CatalogResult<()> {
    let mut seen: HashMap<(String, Option<Format>), String> = HashMap::new();
    for entry in entries {
        let owner = format!("{} {}", entry.brand, entry.model);
        for pattern in &entry.patterns {
            let key = (pattern.source.clone(), entry.format);
            if let Some(first) = seen.get(&key) {
                if first != &owner {
                    return Err(CatalogError::DuplicatePattern {
                        category: label.to_string(),
                        pattern: pattern.source.clone(),
                        first: first.clone(),
                        second: owner.clone(),
                    });
                }
            } else {
                seen.insert(key, owner.clone());
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/loader_tests.rs"]
mod tests;
