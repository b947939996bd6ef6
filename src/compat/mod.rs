//! Format compatibility checker: flags matched razor/blade pairs that are
//! physically impossible (or suspicious) given their interface formats.
//!
//! Pure function over a static table, no state. Uses the enriched format
//! when present: enrichment narrows ambiguous formats (e.g. `Shavette` →
//! `Shavette (AC)`) to something blade-compatible.

use serde::{Deserialize, Serialize};

use crate::matcher::types::MatchResult;
use crate::types::Format;

/// How bad a format pairing is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    /// Unusual but physically workable (e.g. a snapped DE blade in a
    /// half-DE razor).
    Warning,
    /// Physically impossible combination.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A flagged razor/blade pairing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatIssue {
    pub severity: Severity,
    pub razor_format: Format,
    pub blade_format: Format,
    pub message: String,
}

/// Cross-validate a matched razor/blade pair. `None` when compatible or
/// when either side lacks a usable format.
pub fn check_compatibility(razor: &MatchResult, blade: &MatchResult) -> Option<CompatIssue> {
    let razor_format = razor.entity.as_ref()?.effective_format()?;
    let blade_format = blade.entity.as_ref()?.effective_format()?;
    check_formats(razor_format, blade_format)
}

/// The static compatibility table.
pub fn check_formats(razor: Format, blade: Format) -> Option<CompatIssue> {
    // Unknown interfaces can't be judged.
    if razor == Format::Other || blade == Format::Other {
        return None;
    }

    let verdict: Option<(Severity, &str)> = match razor {
        Format::De => match blade {
            Format::De => None,
            _ => Some((Severity::Error, "DE razors take DE blades")),
        },
        Format::HalfDe => match blade {
            Format::HalfDe => None,
            // A snapped DE blade is the usual way to feed a half-DE razor.
            Format::De => Some((Severity::Warning, "DE blade in a half-DE razor (snapped?)")),
            _ => Some((Severity::Error, "half-DE razors take half-DE blades")),
        },
        Format::Ac => match blade {
            Format::Ac => None,
            _ => Some((Severity::Error, "AC razors take AC blades")),
        },
        Format::Gem => match blade {
            Format::Gem => None,
            _ => Some((Severity::Error, "GEM razors take GEM blades")),
        },
        Format::Injector => match blade {
            Format::Injector => None,
            _ => Some((Severity::Error, "injector razors take injector blades")),
        },
        Format::Cartridge => Some((
            Severity::Warning,
            "cartridge razors do not take separate blades",
        )),
        Format::Straight => Some((
            Severity::Warning,
            "straight razors do not take separate blades",
        )),
        // Unenriched shavette: the blade channel is ambiguous, flag softly.
        Format::Shavette => Some((
            Severity::Warning,
            "shavette format not narrowed; blade compatibility unverified",
        )),
        Format::ShavetteAc => match blade {
            Format::Ac => None,
            _ => Some((Severity::Error, "AC shavettes take AC blades")),
        },
        Format::ShavetteDe => match blade {
            Format::De | Format::HalfDe => None,
            _ => Some((Severity::Error, "DE shavettes take DE or half-DE blades")),
        },
        Format::ShavetteHalfDe => match blade {
            Format::HalfDe => None,
            Format::De => Some((Severity::Warning, "DE blade in a half-DE shavette (snapped?)")),
            _ => Some((Severity::Error, "half-DE shavettes take half-DE blades")),
        },
        Format::ShavetteInjector => match blade {
            Format::Injector => None,
            _ => Some((Severity::Error, "injector shavettes take injector blades")),
        },
        Format::HairShaper => match blade {
            Format::HairShaper | Format::Fhs => None,
            _ => Some((Severity::Error, "hair shapers take hair shaper blades")),
        },
        Format::Fhs => match blade {
            Format::Fhs | Format::HairShaper => None,
            _ => Some((Severity::Error, "FHS razors take FHS blades")),
        },
        Format::Other => None,
    };

    verdict.map(|(severity, message)| CompatIssue {
        severity,
        razor_format: razor,
        blade_format: blade,
        message: message.to_string(),
    })
}

#[cfg(test)]
#[path = "tests/compat_tests.rs"]
mod tests;
