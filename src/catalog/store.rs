//! The immutable `Catalogs` aggregate: all six category catalogs plus the
//! override table, loaded once before matching begins and shared read-only
//! afterwards.

use std::path::Path;

use crate::overrides::{DuplicatePolicy, OverrideTable, Section, SectionCatalogs};
use crate::types::errors::CatalogResult;
use crate::types::{Category, SubRole};

use super::{loader, Catalog};

/// Everything the matchers read: razor/blade/brush/soap catalogs, the
/// handle/knot sub-catalogs, and the override table. Construct once,
/// pass by reference into matcher constructors.
#[derive(Debug, Clone)]
pub struct Catalogs {
    pub razor: Catalog,
    pub blade: Catalog,
    pub brush: Catalog,
    pub soap: Catalog,
    pub handle: Catalog,
    pub knot: Catalog,
    pub overrides: OverrideTable,
}

impl Catalogs {
    /// Assemble from already-loaded catalogs and override YAML text.
    pub fn new(
        razor: Catalog,
        blade: Catalog,
        brush: Catalog,
        soap: Catalog,
        handle: Catalog,
        knot: Catalog,
        override_yaml: &str,
        policy: DuplicatePolicy,
    ) -> CatalogResult<Self> {
        let overrides = OverrideTable::parse(
            override_yaml,
            "<overrides>",
            &SectionCatalogs {
                razor: &razor,
                blade: &blade,
                brush: &brush,
                soap: &soap,
                handle: &handle,
                knot: &knot,
            },
            policy,
        )?;
        Ok(Self {
            razor,
            blade,
            brush,
            soap,
            handle,
            knot,
            overrides,
        })
    }

    /// Load all catalog files plus `correct_matches.yaml` from a directory.
    /// Any missing or malformed file aborts the load; there is no
    /// partial-catalog operation.
    pub fn load_dir(dir: &Path, policy: DuplicatePolicy) -> CatalogResult<Self> {
        let razor = loader::load_catalog(&dir.join("razors.yaml"), "razor")?;
        let blade = loader::load_catalog(&dir.join("blades.yaml"), "blade")?;
        let brush = loader::load_catalog(&dir.join("brushes.yaml"), "brush")?;
        let soap = loader::load_catalog(&dir.join("soaps.yaml"), "soap")?;
        let handle = loader::load_catalog(&dir.join("handles.yaml"), "handle")?;
        let knot = loader::load_catalog(&dir.join("knots.yaml"), "knot")?;

        let overrides_path = dir.join("correct_matches.yaml");
        let overrides = OverrideTable::load(
            &overrides_path,
            &SectionCatalogs {
                razor: &razor,
                blade: &blade,
                brush: &brush,
                soap: &soap,
                handle: &handle,
                knot: &knot,
            },
            policy,
        )?;

        Ok(Self {
            razor,
            blade,
            brush,
            soap,
            handle,
            knot,
            overrides,
        })
    }

    /// The primary catalog for a category.
    pub fn catalog(&self, category: Category) -> &Catalog {
        match category {
            Category::Razor => &self.razor,
            Category::Blade => &self.blade,
            Category::Brush => &self.brush,
            Category::Soap => &self.soap,
        }
    }

    /// The brush sub-catalog for a split side.
    pub fn sub_catalog(&self, role: SubRole) -> &Catalog {
        match role {
            SubRole::Handle => &self.handle,
            SubRole::Knot => &self.knot,
        }
    }

    /// Section-scoped view used when re-resolving override metadata.
    pub fn section_catalogs(&self) -> SectionCatalogs<'_> {
        SectionCatalogs {
            razor: &self.razor,
            blade: &self.blade,
            brush: &self.brush,
            soap: &self.soap,
            handle: &self.handle,
            knot: &self.knot,
        }
    }

    /// Total override entries, for load-time diagnostics.
    pub fn override_count(&self) -> usize {
        Section::ALL
            .iter()
            .map(|s| self.overrides.section_len(*s))
            .sum()
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
