//! Domain registration lookup.
//!
//! Scrapes a WHOIS web front end for the registrable domain's registration
//! and expiration dates, and derives the domain-age and registration-length
//! features from them. This is the only component with bounded retries:
//! transient network or parse failures back off and try again, and an
//! exhausted lookup degrades to the not-found sentinel instead of failing
//! the pipeline.

mod parse;
mod types;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use tokio_retry::strategy::ExponentialBackoff;
use tokio_retry::Retry;

use crate::config::{Config, RETRY_FACTOR, RETRY_MAX_DELAY_SECS};

pub use types::RegistrationInfo;

/// Client for the WHOIS web front end.
///
/// The base URL, attempt budget, and backoff delay are injected from
/// configuration so tests can point the client at a local mock server.
#[derive(Debug, Clone)]
pub struct RegistrationClient {
    client: Arc<reqwest::Client>,
    base_url: String,
    max_attempts: usize,
    retry_delay_ms: u64,
    fetch_timeout: Duration,
}

impl RegistrationClient {
    /// Creates a registration client from configuration.
    pub fn new(client: Arc<reqwest::Client>, config: &Config) -> Self {
        Self {
            client,
            base_url: config.whois_base_url.trim_end_matches('/').to_string(),
            max_attempts: config.whois_max_attempts.max(1),
            retry_delay_ms: config.whois_retry_delay_ms,
            fetch_timeout: Duration::from_secs(config.whois_timeout_seconds),
        }
    }

    /// Looks up registration data for a registrable domain.
    ///
    /// `None` (or an empty domain) means the registrable domain could not be
    /// determined — bare IP hosts, suffix-less names — and yields the
    /// not-found sentinel immediately, with zero network calls.
    ///
    /// Otherwise performs up to `max_attempts` fetch-and-parse attempts with
    /// exponential backoff between them. Exhaustion degrades to the sentinel;
    /// this method never fails.
    pub async fn lookup(&self, registrable_domain: Option<&str>) -> RegistrationInfo {
        let domain = match registrable_domain {
            Some(d) if !d.is_empty() => d,
            _ => {
                log::debug!("No registrable domain; skipping WHOIS lookup");
                return RegistrationInfo::not_found();
            }
        };

        let lookup_url = format!("{}/{}", self.base_url, domain);
        let strategy = ExponentialBackoff::from_millis(self.retry_delay_ms)
            .factor(RETRY_FACTOR)
            .max_delay(Duration::from_secs(RETRY_MAX_DELAY_SECS))
            .take(self.max_attempts - 1);

        match Retry::spawn(strategy, || self.fetch_once(&lookup_url, domain)).await {
            Ok(info) => info,
            Err(e) => {
                log::warn!(
                    "WHOIS lookup failed for {} after {} attempts: {:#}",
                    domain,
                    self.max_attempts,
                    e
                );
                RegistrationInfo::not_found()
            }
        }
    }

    /// One fetch-and-parse attempt.
    async fn fetch_once(&self, lookup_url: &str, domain: &str) -> Result<RegistrationInfo> {
        let response = tokio::time::timeout(self.fetch_timeout, self.client.get(lookup_url).send())
            .await
            .map_err(|_| anyhow!("WHOIS fetch timed out for {}", domain))?
            .with_context(|| format!("WHOIS fetch failed for {}", domain))?
            .error_for_status()
            .with_context(|| format!("WHOIS page returned error status for {}", domain))?;

        let body = response
            .text()
            .await
            .with_context(|| format!("Failed to read WHOIS page body for {}", domain))?;

        let dates = parse::parse_registration_dates(&body)?;
        log::debug!(
            "WHOIS dates for {}: registered={:?} expires={:?}",
            domain,
            dates.registered_on,
            dates.expires_on
        );

        let registered_on = dates.registered_on.as_deref().and_then(parse::parse_date_string);
        let expires_on = dates.expires_on.as_deref().and_then(parse::parse_date_string);

        Ok(RegistrationInfo::from_dates(
            registered_on,
            expires_on,
            Utc::now(),
        ))
    }
}
