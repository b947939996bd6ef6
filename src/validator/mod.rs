//! Override validator: re-checks every curated override entry against the
//! live pattern set (override shortcut disabled) to surface entries whose
//! underlying catalog patterns have drifted.
//!
//! Pure batch operation: deterministic over fixed process state, issues are
//! reported as data rather than raised per-entry. The pattern cache is
//! cleared between section passes so one field's results never leak into
//! the next.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalogs;
use crate::matcher::category::regex_lookup;
use crate::matcher::types::{MatchedEntity, SubMatch};
use crate::matcher::{Matcher, PatternScope};
use crate::overrides::{OverrideEntity, OverrideOutcome, Section, StoredOverride};
use crate::types::{Category, SubRole};

/// Why an override entry no longer agrees with the live catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssueKind {
    /// No live pattern matches the entry's text anymore (pattern removed
    /// or changed).
    NoMatch,
    /// A pattern matches but resolves to a different brand/model/format
    /// (pattern reassigned).
    PatternMismatch,
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IssueKind::NoMatch => write!(f, "no_match"),
            IssueKind::PatternMismatch => write!(f, "pattern_mismatch"),
        }
    }
}

/// One drifted override entry. Consumed by reporting only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub section: String,
    pub text: String,
    pub kind: IssueKind,
    pub expected: String,
    pub actual: Option<String>,
}

/// Validate every override entry (optionally one section).
pub fn validate(catalogs: &Catalogs, section: Option<Section>) -> Vec<ValidationIssue> {
    validate_with_progress(catalogs, section, |_, _| {})
}

/// Validate with best-effort progress reporting: the callback receives
/// (entries done, total entries) after each entry. No mid-run cancellation.
pub fn validate_with_progress(
    catalogs: &Catalogs,
    section: Option<Section>,
    mut progress: impl FnMut(usize, usize),
) -> Vec<ValidationIssue> {
    let sections: Vec<Section> = match section {
        Some(s) => vec![s],
        None => Section::ALL.to_vec(),
    };
    let total: usize = sections
        .iter()
        .map(|s| catalogs.overrides.section_len(*s))
        .sum();

    let mut matcher = Matcher::new(catalogs);
    let mut issues = Vec::new();
    let mut done = 0;

    for sec in sections {
        // Field-scoped isolation: a razor pass must not feed cached
        // outcomes into a subsequent brush pass.
        matcher.clear_cache();
        log::info!(
            "Validating {} overrides in section '{}'",
            catalogs.overrides.section_len(sec),
            sec
        );

        for (text, entries) in catalogs.overrides.iter_section(sec) {
            for stored in entries {
                if let Some(issue) = validate_entry(catalogs, &mut matcher, sec, text, stored) {
                    issues.push(issue);
                }
                done += 1;
                progress(done, total);
            }
        }
    }

    log::info!("Validation finished: {} issue(s)", issues.len());
    issues
}

fn validate_entry(
    catalogs: &Catalogs,
    matcher: &mut Matcher<'_>,
    section: Section,
    text: &str,
    stored: &StoredOverride,
) -> Option<ValidationIssue> {
    let issue = match section {
        Section::Razor | Section::Blade | Section::Soap | Section::Brush => {
            let category = match section {
                Section::Razor => Category::Razor,
                Section::Blade => Category::Blade,
                Section::Soap => Category::Soap,
                _ => Category::Brush,
            };
            let live = matcher.match_one_opts(category, text, false);
            compare_outcome(
                section,
                text,
                stored,
                live.entity.as_ref(),
                live.handle.as_ref(),
                live.knot.as_ref(),
            )
        }
        Section::Handle | Section::Knot => {
            let role = if section == Section::Handle {
                SubRole::Handle
            } else {
                SubRole::Knot
            };
            // Sub-role entries are plain entities matched directly against
            // their sub-catalog, without the split engine in the way.
            let live = matcher_sub_lookup(catalogs, matcher, role, text);
            compare_outcome(section, text, stored, live.as_ref(), None, None)
        }
    };

    // Same surface text may legitimately map to two entries differing only
    // in format (e.g. a DE and a GEM blade). The plain scan returns the
    // first declared entry, so an entry recording the other format gets a
    // second, format-scoped pass before being reported as drift.
    if issue.is_some() {
        if let OverrideOutcome::Entity(expected) = &stored.outcome {
            if expected.format.is_some()
                && format_scoped_agrees(section_catalog(catalogs, section), text, expected)
            {
                return None;
            }
        }
    }
    issue
}

fn section_catalog<'a>(catalogs: &'a Catalogs, section: Section) -> &'a crate::catalog::Catalog {
    match section {
        Section::Razor => &catalogs.razor,
        Section::Blade => &catalogs.blade,
        Section::Brush => &catalogs.brush,
        Section::Soap => &catalogs.soap,
        Section::Handle => &catalogs.handle,
        Section::Knot => &catalogs.knot,
    }
}

/// Declared-order scan restricted to entries of the expected format.
fn format_scoped_agrees(
    catalog: &crate::catalog::Catalog,
    normalized: &str,
    expected: &OverrideEntity,
) -> bool {
    catalog
        .entries
        .iter()
        .filter(|e| e.format == expected.format)
        .find_map(|e| e.first_match(normalized).map(|_| e))
        .is_some_and(|e| {
            expected.brand.eq_ignore_ascii_case(&e.brand)
                && expected.model.eq_ignore_ascii_case(&e.model)
        })
}

fn matcher_sub_lookup(
    catalogs: &Catalogs,
    matcher: &mut Matcher<'_>,
    role: SubRole,
    normalized: &str,
) -> Option<MatchedEntity> {
    matcher
        .with_cache(|cache| {
            regex_lookup(
                catalogs.sub_catalog(role),
                cache,
                PatternScope::Sub(role),
                normalized,
            )
        })
        .map(|hit| hit.entity)
}

fn compare_outcome(
    section: Section,
    text: &str,
    stored: &StoredOverride,
    live_entity: Option<&MatchedEntity>,
    live_handle: Option<&SubMatch>,
    live_knot: Option<&SubMatch>,
) -> Option<ValidationIssue> {
    match &stored.outcome {
        OverrideOutcome::Entity(expected) => match live_entity {
            None if live_handle.is_none() => Some(issue(
                section,
                text,
                IssueKind::NoMatch,
                describe_entity(expected),
                None,
            )),
            None => Some(issue(
                section,
                text,
                IssueKind::PatternMismatch,
                describe_entity(expected),
                Some(describe_split(live_handle, live_knot)),
            )),
            Some(actual) if entity_agrees(expected, actual) => None,
            Some(actual) => Some(issue(
                section,
                text,
                IssueKind::PatternMismatch,
                describe_entity(expected),
                Some(describe_matched(actual)),
            )),
        },
        OverrideOutcome::BrushSplit { handle, knot } => {
            let expected_desc = format!(
                "handle {} / knot {}",
                describe_entity(handle),
                describe_entity(knot)
            );
            match (live_handle, live_knot) {
                (Some(lh), Some(lk)) => {
                    let handle_ok = lh
                        .entity
                        .as_ref()
                        .is_some_and(|e| entity_agrees(handle, e));
                    let knot_ok = lk.entity.as_ref().is_some_and(|e| entity_agrees(knot, e));
                    if handle_ok && knot_ok {
                        None
                    } else {
                        Some(issue(
                            section,
                            text,
                            IssueKind::PatternMismatch,
                            expected_desc,
                            Some(describe_split(live_handle, live_knot)),
                        ))
                    }
                }
                _ => match live_entity {
                    Some(actual) => Some(issue(
                        section,
                        text,
                        IssueKind::PatternMismatch,
                        expected_desc,
                        Some(describe_matched(actual)),
                    )),
                    None => Some(issue(
                        section,
                        text,
                        IssueKind::NoMatch,
                        expected_desc,
                        None,
                    )),
                },
            }
        }
    }
}

/// Brand/model/format agreement. Case-insensitive on names since override
/// entries not resolvable against the catalog keep curator spelling.
fn entity_agrees(expected: &OverrideEntity, actual: &MatchedEntity) -> bool {
    expected.brand.eq_ignore_ascii_case(&actual.brand)
        && expected.model.eq_ignore_ascii_case(&actual.model)
        && (expected.format.is_none() || expected.format == actual.format)
}

fn issue(
    section: Section,
    text: &str,
    kind: IssueKind,
    expected: String,
    actual: Option<String>,
) -> ValidationIssue {
    ValidationIssue {
        section: section.to_string(),
        text: text.to_string(),
        kind,
        expected,
        actual,
    }
}

fn describe_entity(e: &OverrideEntity) -> String {
    match e.format {
        Some(f) => format!("{} {} ({})", e.brand, e.model, f),
        None => format!("{} {}", e.brand, e.model),
    }
}

fn describe_matched(e: &MatchedEntity) -> String {
    match e.format {
        Some(f) => format!("{} {} ({})", e.brand, e.model, f),
        None => format!("{} {}", e.brand, e.model),
    }
}

fn describe_split(handle: Option<&SubMatch>, knot: Option<&SubMatch>) -> String {
    let side = |s: Option<&SubMatch>| {
        s.and_then(|s| s.entity.as_ref())
            .map(describe_matched)
            .unwrap_or_else(|| "no match".to_string())
    };
    format!("handle {} / knot {}", side(handle), side(knot))
}

#[cfg(test)]
#[path = "tests/validator_tests.rs"]
mod tests;
