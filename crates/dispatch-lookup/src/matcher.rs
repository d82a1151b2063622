//! Name matching of a free-text hint against a candidate list.
//!
//! Exact matches (case and whitespace insensitive, on name or id) win. Failing
//! that, a candidate whose name contains the hint counts, as does one whose
//! whole name appears in the hint as complete words of at least
//! [`MIN_CONTAINED_NAME`] characters. More than one candidate at the winning
//! tier is ambiguous.

use crate::NamedRef;
use dispatch_core::text::collapse_whitespace;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Resolution {
    Resolved(NamedRef),
    Ambiguous { candidates: Vec<NamedRef> },
    Unresolved,
}

impl Resolution {
    pub fn resolved(&self) -> Option<&NamedRef> {
        match self {
            Resolution::Resolved(r) => Some(r),
            _ => None,
        }
    }
}

/// Shortest candidate name that may match by appearing inside a longer hint.
pub const MIN_CONTAINED_NAME: usize = 3;

pub fn match_name(hint: &str, candidates: &[NamedRef]) -> Resolution {
    let hint = normalize(hint);
    if hint.is_empty() {
        return Resolution::Unresolved;
    }

    let exact: Vec<&NamedRef> = candidates
        .iter()
        .filter(|c| normalize(&c.name) == hint || normalize(&c.id) == hint)
        .collect();
    if !exact.is_empty() {
        return pick(exact);
    }

    let partial: Vec<&NamedRef> = candidates
        .iter()
        .filter(|c| {
            let name = normalize(&c.name);
            !name.is_empty() && (name.contains(&hint) || name_within_hint(&hint, &name))
        })
        .collect();
    pick(partial)
}

fn pick(matches: Vec<&NamedRef>) -> Resolution {
    match matches.as_slice() {
        [] => Resolution::Unresolved,
        [only] => Resolution::Resolved((*only).clone()),
        many => Resolution::Ambiguous {
            candidates: many.iter().map(|c| (*c).clone()).collect(),
        },
    }
}

fn name_within_hint(hint: &str, name: &str) -> bool {
    if name.chars().count() < MIN_CONTAINED_NAME {
        return false;
    }
    let hint: Vec<&str> = hint.split_whitespace().collect();
    let name: Vec<&str> = name.split_whitespace().collect();
    !name.is_empty() && hint.windows(name.len()).any(|w| w == name.as_slice())
}

fn normalize(s: &str) -> String {
    collapse_whitespace(s).to_lowercase()
}
