//! Feature record assembly.
//!
//! [`FeatureExtractor`] is the externally callable entry point: it
//! orchestrates decomposition, the lexical rule table, the two network
//! lookups, and the word statistics into one flat, ordered
//! [`FeatureRecord`] per URL. Lookup failures degrade to sentinel values
//! inside their components, so the output always carries the complete,
//! fixed schema regardless of network conditions.

mod lexical;
mod record;
mod words;

use std::sync::Arc;
use std::time::Duration;

use tldextract::TldExtractor;

use crate::brands::{BrandList, ShortenerSet};
use crate::config::Config;
use crate::error_handling::{FeatureError, InitializationError};
use crate::favicon;
use crate::initialization::{init_client, init_extractor};
use crate::url_parts::decompose;
use crate::whois::RegistrationClient;

use lexical::{LexicalContext, LEXICAL_FEATURES};
use words::word_stats;

pub use record::{FeatureRecord, FeatureValue};
pub use words::WordStats;

/// The canonical feature schema, in output order.
///
/// The first entry is the URL identifier; everything after it is numeric.
/// Classifiers are trained against this exact column order — any change here
/// is a breaking change for every persisted model.
pub const FEATURE_NAMES: &[&str] = &[
    "url",
    "length_of_url",
    "length_of_hostname",
    "ip_address",
    "num_dots",
    "num_hyphens",
    "num_at_symbols",
    "num_question_marks",
    "num_ampersands",
    "num_or_keywords",
    "num_equals",
    "num_underscores",
    "num_tildes",
    "num_percent_signs",
    "num_slashes",
    "num_asterisks",
    "num_colons",
    "num_commas",
    "num_semicolons",
    "num_dollar_signs",
    "num_spaces",
    "num_www",
    "num_dot_com",
    "num_double_slashes",
    "http_in_path",
    "https_token",
    "digit_ratio_url",
    "digit_ratio_hostname",
    "punycode",
    "nonstandard_port",
    "tld_in_path",
    "tld_in_subdomain",
    "abnormal_subdomain",
    "num_subdomains",
    "prefix_suffix",
    "domain_in_brand",
    "brand_in_subdomain",
    "brand_in_path",
    "whois_registered",
    "domain_age_days",
    "registration_length_days",
    "external_favicon",
    "shortening_service",
    "shortest_word_host",
    "longest_word_host",
    "average_word_host",
    "shortest_word_path",
    "longest_word_path",
    "average_word_path",
];

/// Derives ordered feature records from URLs.
///
/// Owns the shared read-only state: the HTTP client, the public-suffix
/// extractor, the brand list, and the shortener set. All of it is immutable
/// after construction, so one extractor can serve parallel extractions.
pub struct FeatureExtractor {
    client: Arc<reqwest::Client>,
    extractor: Arc<TldExtractor>,
    brands: BrandList,
    shorteners: ShortenerSet,
    registration: RegistrationClient,
    page_timeout: Duration,
}

impl FeatureExtractor {
    /// Builds an extractor from configuration, loading the brand list from
    /// `config.brand_file`.
    ///
    /// # Errors
    ///
    /// Returns an `InitializationError` if the HTTP client cannot be built
    /// or the brand list cannot be loaded.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        let client = init_client(config)?;
        let brands = BrandList::from_csv_path(&config.brand_file)?;
        Ok(Self::new(client, brands, ShortenerSet::default(), config))
    }

    /// Builds an extractor from preconstructed resources (test fixtures use
    /// this to inject a fixture brand list and a mock WHOIS endpoint).
    pub fn new(
        client: Arc<reqwest::Client>,
        brands: BrandList,
        shorteners: ShortenerSet,
        config: &Config,
    ) -> Self {
        let registration = RegistrationClient::new(Arc::clone(&client), config);
        Self {
            client,
            extractor: init_extractor(),
            brands,
            shorteners,
            registration,
            page_timeout: Duration::from_secs(config.timeout_seconds),
        }
    }

    /// Extracts the full ordered feature record for one URL.
    ///
    /// The registration lookup and the favicon check are independent, so
    /// they are awaited concurrently. Each degrades to its sentinel on
    /// failure; this method only errors on an empty input URL, which is a
    /// caller programming error.
    pub async fn extract(&self, url: &str) -> Result<FeatureRecord, FeatureError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(FeatureError::EmptyUrl);
        }

        let parts = decompose(&self.extractor, url);

        let mut record = FeatureRecord::with_capacity(FEATURE_NAMES.len());
        record.push("url", FeatureValue::Text(url.to_string()));

        let ctx = LexicalContext {
            parts: &parts,
            brands: &self.brands,
        };
        for (name, rule) in LEXICAL_FEATURES {
            record.push(*name, rule(&ctx));
        }

        let (registration, favicon_check) = tokio::join!(
            self.registration.lookup(parts.registrable_domain.as_deref()),
            favicon::check_favicon(&self.client, url, self.page_timeout),
        );

        record.push("whois_registered", FeatureValue::Int(registration.found as i64));
        record.push("domain_age_days", FeatureValue::Int(registration.age_days));
        record.push(
            "registration_length_days",
            FeatureValue::Int(registration.registration_length_days),
        );
        record.push("external_favicon", FeatureValue::Int(favicon_check.as_feature()));

        let is_shortener = parts
            .registrable_domain
            .as_deref()
            .map(|domain| self.shorteners.contains(domain))
            .unwrap_or(false);
        record.push("shortening_service", FeatureValue::Int(is_shortener as i64));

        let host_stats = word_stats(&parts.domain_label);
        let path_stats = word_stats(&parts.path);
        record.push("shortest_word_host", FeatureValue::Int(host_stats.shortest));
        record.push("longest_word_host", FeatureValue::Int(host_stats.longest));
        record.push("average_word_host", FeatureValue::Float(host_stats.average));
        record.push("shortest_word_path", FeatureValue::Int(path_stats.shortest));
        record.push("longest_word_path", FeatureValue::Int(path_stats.longest));
        record.push("average_word_path", FeatureValue::Float(path_stats.average));

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_has_no_duplicate_names() {
        let mut seen = std::collections::HashSet::new();
        for name in FEATURE_NAMES {
            assert!(seen.insert(name), "duplicate feature name: {name}");
        }
    }

    #[test]
    fn test_lexical_table_matches_schema_slice() {
        // The lexical block sits between the identifier and the lookup
        // features; the table and the schema constant must agree
        let table_names: Vec<_> = LEXICAL_FEATURES.iter().map(|(name, _)| *name).collect();
        let schema_slice = &FEATURE_NAMES[1..1 + table_names.len()];
        assert_eq!(table_names.as_slice(), schema_slice);
    }
}
