//! Static lexical resources: the brand list and the shortener set.
//!
//! Both are loaded once at startup, lowercased, and never mutated, so they
//! are safe to share across parallel extractions.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::config::SHORTENING_SERVICES;
use crate::error_handling::InitializationError;

#[derive(Debug, Deserialize)]
struct BrandRecord {
    brand: String,
}

/// An immutable set of lowercase known-brand strings.
///
/// Brands name impersonation targets (e.g. `paypal`), not expected domains;
/// the lexical rules look for them inside subdomains and paths, where their
/// presence signals impersonation.
#[derive(Debug, Clone, Default)]
pub struct BrandList {
    set: HashSet<String>,
}

impl BrandList {
    /// Loads the brand list from a CSV file with a `brand` header column,
    /// one brand per record. Every entry is lowercased on load.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::BrandListError` if the file cannot be
    /// read or a record fails to parse.
    pub fn from_csv_path(path: &Path) -> Result<Self, InitializationError> {
        let mut reader = csv::Reader::from_path(path).map_err(|e| {
            InitializationError::BrandListError(format!(
                "Failed to open brand file {}: {}",
                path.display(),
                e
            ))
        })?;

        let mut set = HashSet::new();
        for record in reader.deserialize::<BrandRecord>() {
            let record = record.map_err(|e| {
                InitializationError::BrandListError(format!(
                    "Failed to parse brand record in {}: {}",
                    path.display(),
                    e
                ))
            })?;
            let brand = record.brand.trim().to_lowercase();
            if !brand.is_empty() {
                set.insert(brand);
            }
        }

        log::info!("Loaded {} brands from {}", set.len(), path.display());
        Ok(Self { set })
    }

    /// Builds a brand list from an iterator of names (test fixtures).
    pub fn from_brands<I, S>(brands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set = brands
            .into_iter()
            .map(|b| b.as_ref().trim().to_lowercase())
            .filter(|b| !b.is_empty())
            .collect();
        Self { set }
    }

    /// Whether `label` exactly equals a known brand. The label is lowercased
    /// before comparison.
    pub fn contains(&self, label: &str) -> bool {
        self.set.contains(&label.to_lowercase())
    }

    /// Whether any known brand appears as a substring of `text`.
    ///
    /// The text is lowercased before matching: the brand list is lowercase
    /// and a mixed-case subdomain or path must not evade the check.
    pub fn any_substring_of(&self, text: &str) -> bool {
        let lowered = text.to_lowercase();
        self.set.iter().any(|brand| lowered.contains(brand.as_str()))
    }

    /// Number of loaded brands.
    pub fn len(&self) -> usize {
        self.set.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}

/// The fixed set of known URL-shortening service domains.
///
/// Matched against the registrable domain of the input URL.
#[derive(Debug, Clone)]
pub struct ShortenerSet {
    set: HashSet<String>,
}

impl Default for ShortenerSet {
    fn default() -> Self {
        Self::from_domains(SHORTENING_SERVICES.iter().copied())
    }
}

impl ShortenerSet {
    /// Builds a shortener set from an iterator of registrable domains.
    pub fn from_domains<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set = domains
            .into_iter()
            .map(|d| d.as_ref().to_lowercase())
            .collect();
        Self { set }
    }

    /// Whether the registrable domain is a known shortening service.
    pub fn contains(&self, registrable_domain: &str) -> bool {
        self.set.contains(&registrable_domain.to_lowercase())
    }
}
