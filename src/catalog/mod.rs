//! Institution catalog used for deterministic credential selection.
//!
//! The catalog is a fixed, ordered list embedded at build time. Its order
//! defines the index space of the selector, so entries are never re-sorted.
//! All institutions are fictional and use the reserved `.example` domain.

mod data;
pub mod handlers;
pub mod selector;

#[cfg(test)]
mod tests;

use lazy_static::lazy_static;
use rand::Rng;
use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;
use utoipa::ToSchema;

pub use selector::{
    name_hash, resolve_institution, select_department, select_institution, MatchedBy, Selection,
    FALLBACK_KEY,
};

/// Errors raised while building or querying the catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("institution catalog must contain at least one entry")]
    EmptyCatalog,
    #[error("duplicate institution name in catalog: {0}")]
    DuplicateInstitution(String),
    #[error("institution '{0}' has no departments")]
    EmptyDepartments(String),
    #[error("no institution named '{0}'")]
    NotFound(String),
}

/// One immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InstitutionRecord {
    pub name: String,
    pub short_name: String,
    pub domain: String,
    /// Opaque asset reference, passed through to the renderer untouched.
    pub logo_ref: String,
    /// Brand color as `#RRGGBB`.
    pub color: String,
    pub address: String,
    pub departments: Vec<String>,
}

impl InstitutionRecord {
    pub fn new(
        name: &str,
        short_name: &str,
        domain: &str,
        logo_ref: &str,
        color: &str,
        address: &str,
        departments: &[&str],
    ) -> Self {
        Self {
            name: name.to_string(),
            short_name: short_name.to_string(),
            domain: domain.to_string(),
            logo_ref: logo_ref.to_string(),
            color: color.to_string(),
            address: address.to_string(),
            departments: departments.iter().map(|d| d.to_string()).collect(),
        }
    }
}

/// Validated, ordered, read-only list of institutions.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<InstitutionRecord>,
}

lazy_static! {
    static ref EMBEDDED: Catalog = Catalog::new(data::institutions())
        .unwrap_or_else(|e| panic!("embedded institution catalog is invalid: {e}"));
}

impl Catalog {
    /// Build a catalog, rejecting empty lists, duplicate names and entries
    /// without departments.
    pub fn new(entries: Vec<InstitutionRecord>) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }

        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.name.as_str()) {
                return Err(CatalogError::DuplicateInstitution(entry.name.clone()));
            }
            if entry.departments.is_empty() {
                return Err(CatalogError::EmptyDepartments(entry.name.clone()));
            }
        }

        log::debug!("Institution catalog built with {} entries", entries.len());
        Ok(Self { entries })
    }

    /// The catalog compiled into the binary. Built once on first use.
    pub fn embedded() -> &'static Catalog {
        &EMBEDDED
    }

    pub fn all(&self) -> &[InstitutionRecord] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Case-insensitive exact lookup on either the full or the short name.
    pub fn by_name(&self, name: &str) -> Result<&InstitutionRecord, CatalogError> {
        let wanted = name.trim();
        self.entries
            .iter()
            .find(|u| u.name.eq_ignore_ascii_case(wanted) || u.short_name.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CatalogError::NotFound(name.to_string()))
    }

    /// Index lookup. Out-of-range indices wrap around the catalog length.
    pub fn by_index(&self, index: usize) -> &InstitutionRecord {
        &self.entries[index % self.entries.len()]
    }

    /// Non-deterministic pick. Never use this where output must be reproducible.
    pub fn random(&self) -> &InstitutionRecord {
        let index = rand::thread_rng().gen_range(0..self.entries.len());
        &self.entries[index]
    }
}
