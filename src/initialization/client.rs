//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::Config;

/// Initializes the shared HTTP client.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from configuration (realistic browser string)
/// - Global timeout from configuration
/// - Redirect following enabled (reqwest default, up to 10 hops)
///
/// The same client serves both outbound calls (WHOIS page and favicon page);
/// the WHOIS path wraps requests in its own longer per-attempt timeout.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.whois_timeout_seconds.max(config.timeout_seconds)))
        .connect_timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}
