//! Shared domain enums for the matcher: product categories, brush sub-roles,
//! physical formats, and knot fiber types.

pub mod errors;

use serde::{Deserialize, Serialize};

/// Product category a piece of input text is classified against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Razor,
    Blade,
    Brush,
    Soap,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Razor => write!(f, "razor"),
            Category::Blade => write!(f, "blade"),
            Category::Brush => write!(f, "brush"),
            Category::Soap => write!(f, "soap"),
        }
    }
}

/// Brush component role. Handle and knot overrides/catalogs are partitioned
/// by this so the same surface text can resolve differently per side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SubRole {
    Handle,
    Knot,
}

impl std::fmt::Display for SubRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubRole::Handle => write!(f, "handle"),
            SubRole::Knot => write!(f, "knot"),
        }
    }
}

/// Physical interface class of a razor or blade. Used by the compatibility
/// checker; shavette variants are narrowed post-match by enrichment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Format {
    De,
    HalfDe,
    Ac,
    Gem,
    Injector,
    Cartridge,
    Straight,
    Shavette,
    ShavetteAc,
    ShavetteDe,
    ShavetteHalfDe,
    ShavetteInjector,
    HairShaper,
    Fhs,
    Other,
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Format::De => "DE",
            Format::HalfDe => "Half DE",
            Format::Ac => "AC",
            Format::Gem => "GEM",
            Format::Injector => "Injector",
            Format::Cartridge => "Cartridge",
            Format::Straight => "Straight",
            Format::Shavette => "Shavette",
            Format::ShavetteAc => "Shavette (AC)",
            Format::ShavetteDe => "Shavette (DE)",
            Format::ShavetteHalfDe => "Shavette (Half DE)",
            Format::ShavetteInjector => "Shavette (Injector)",
            Format::HairShaper => "Hair Shaper",
            Format::Fhs => "FHS",
            Format::Other => "Other",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for Format {
    type Err = errors::CatalogError;

    /// Parse the format strings catalog curators actually write.
    /// Tolerant of case and of `half-de`/`shavette (ac)` style variants.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let s = raw.trim().to_lowercase();
        let format = match s.as_str() {
            "de" | "double edge" => Format::De,
            "half de" | "half-de" | "1/2 de" => Format::HalfDe,
            "ac" | "artist club" => Format::Ac,
            "gem" | "sse" | "mmoc" => Format::Gem,
            "injector" => Format::Injector,
            "cartridge" | "cart" => Format::Cartridge,
            "straight" => Format::Straight,
            "shavette" => Format::Shavette,
            "shavette (ac)" => Format::ShavetteAc,
            "shavette (de)" => Format::ShavetteDe,
            "shavette (half de)" => Format::ShavetteHalfDe,
            "shavette (injector)" => Format::ShavetteInjector,
            "hair shaper" => Format::HairShaper,
            "fhs" => Format::Fhs,
            "other" => Format::Other,
            _ => return Err(errors::CatalogError::UnknownFormat(raw.to_string())),
        };
        Ok(format)
    }
}

/// Knot fiber type recorded in brush/knot catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Fiber {
    Badger,
    Boar,
    Synthetic,
    Horse,
    Mixed,
}

impl std::fmt::Display for Fiber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Fiber::Badger => "Badger",
            Fiber::Boar => "Boar",
            Fiber::Synthetic => "Synthetic",
            Fiber::Horse => "Horse",
            Fiber::Mixed => "Mixed",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for Fiber {
    type Err = errors::CatalogError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let fiber = match raw.trim().to_lowercase().as_str() {
            "badger" => Fiber::Badger,
            "boar" => Fiber::Boar,
            "synthetic" | "synth" => Fiber::Synthetic,
            "horse" | "horsehair" => Fiber::Horse,
            "mixed" => Fiber::Mixed,
            _ => return Err(errors::CatalogError::UnknownFiber(raw.to_string())),
        };
        Ok(fiber)
    }
}
