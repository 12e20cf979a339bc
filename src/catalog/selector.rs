//! Deterministic institution and department selection.
//!
//! The hash is the sum of the key's UTF-16 code units. ASCII keys hash the
//! same under UTF-8 or UTF-16; for other scripts UTF-16 is the canonical
//! width and must not change, or existing selections would move.

use serde::Serialize;
use utoipa::ToSchema;

use super::{Catalog, InstitutionRecord};

/// Key substituted for an empty input so that selection stays total.
pub const FALLBACK_KEY: &str = "default";

/// Company name the input form ships with; never treated as a preference.
const PLACEHOLDER_COMPANY: &str = "Your Company Name";

/// Which tier of the selection policy decided the institution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum MatchedBy {
    PreferredName,
    Hash,
}

/// Result of resolving a key (and optional preferred name) against a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub institution: InstitutionRecord,
    pub department: String,
    pub hash: u64,
    pub matched_by: MatchedBy,
}

fn effective_key(key: &str) -> &str {
    if key.is_empty() {
        FALLBACK_KEY
    } else {
        key
    }
}

/// Sum of UTF-16 code units of `key` (or of [`FALLBACK_KEY`] when empty).
pub fn name_hash(key: &str) -> u64 {
    effective_key(key).encode_utf16().map(u64::from).sum()
}

pub fn select_institution<'a>(catalog: &'a Catalog, key: &str) -> &'a InstitutionRecord {
    let index = name_hash(key) % catalog.len() as u64;
    &catalog.all()[index as usize]
}

/// Department for `key` within `institution`, using the same hash as
/// [`select_institution`].
pub fn select_department<'a>(key: &str, institution: &'a InstitutionRecord) -> &'a str {
    // Catalog construction guarantees departments is non-empty.
    let index = name_hash(key) % institution.departments.len() as u64;
    &institution.departments[index as usize]
}

fn matches_preferred(preferred: &str, institution: &InstitutionRecord) -> bool {
    let name = institution.name.to_lowercase();
    let short = institution.short_name.to_lowercase();
    preferred.contains(&name)
        || name.contains(preferred)
        || preferred.contains(&short)
        || short.contains(preferred)
}

/// Explicit-match-first selection.
///
/// A usable `preferred` name that partially matches an entry's full or
/// short name (case-insensitive, substring in either direction) wins; the
/// first such entry in catalog order is taken. Otherwise the hash of `key`
/// decides. The department always comes from the hash of `key`.
pub fn resolve_institution(catalog: &Catalog, preferred: Option<&str>, key: &str) -> Selection {
    let hash = name_hash(key);

    let preferred = preferred
        .map(str::trim)
        .filter(|p| !p.is_empty() && *p != PLACEHOLDER_COMPANY)
        .map(str::to_lowercase);

    let matched = preferred
        .as_deref()
        .and_then(|p| catalog.all().iter().find(|u| matches_preferred(p, u)));

    let (institution, matched_by) = match matched {
        Some(found) => (found, MatchedBy::PreferredName),
        None => (select_institution(catalog, key), MatchedBy::Hash),
    };

    log::debug!(
        "Resolved institution '{}' by {:?} (hash {})",
        institution.short_name,
        matched_by,
        hash
    );

    Selection {
        institution: institution.clone(),
        department: select_department(key, institution).to_string(),
        hash,
        matched_by,
    }
}
