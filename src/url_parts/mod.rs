//! URL decomposition.
//!
//! This module splits a raw URL string into the parts the feature rules read:
//! scheme, host, port, path, query, and the Public-Suffix-List-aware
//! registration parts (subdomain, domain label, suffix).
//!
//! Decomposition is total: malformed or scheme-less input never fails, the
//! unparseable components simply come back as empty strings.

use std::sync::LazyLock;

use regex::Regex;
use tldextract::TldExtractor;

/// Dotted-quad match anchored at the start of the host.
static IPV4_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+\.\d+\.\d+\.\d+").expect("hard-coded IPv4 pattern is valid")
});

/// A URL decomposed into the components the feature rules consume.
///
/// Derived once per URL and read-only afterward. Components that could not
/// be parsed are empty strings; `registrable_domain` is `None` when the host
/// has no registrable domain (IP literals, suffix-less names, unparseable
/// input).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParts {
    /// The literal input string, untouched.
    pub raw: String,
    /// URL scheme (`http`, `https`), or empty if unparseable.
    pub scheme: String,
    /// Host component without port or userinfo, or empty.
    pub host: String,
    /// Explicit non-default port, if any. `url::Url` reports `None` for the
    /// scheme's default port, which is exactly the indicator the feature
    /// table needs.
    pub port: Option<u16>,
    /// Path component, or empty if unparseable.
    pub path: String,
    /// Query string without the leading `?`, or empty.
    pub query: String,
    /// Subdomain labels left of the registrable domain (e.g. `mail.eu`), or
    /// empty.
    pub subdomain: String,
    /// The registrable domain's own label (e.g. `example` in
    /// `www.example.co.uk`). For IP-literal hosts this carries the literal
    /// itself so host word-statistics see the dotted quad.
    pub domain_label: String,
    /// Public suffix (e.g. `com`, `co.uk`), or empty.
    pub suffix: String,
    /// `domain_label.suffix` when both parts are present, otherwise `None`.
    pub registrable_domain: Option<String>,
}

impl UrlParts {
    /// Whether the host is an IPv4 dotted-quad literal.
    pub fn host_is_ip(&self) -> bool {
        IPV4_RE.is_match(&self.host)
    }
}

/// Decomposes a URL into [`UrlParts`].
///
/// Uses the `url` crate for the syntactic components and `tldextract` for the
/// Public-Suffix-List-aware registration parts, so multi-part suffixes
/// (`example.co.uk`) split correctly. Never fails: components that cannot be
/// parsed are returned as empty strings. No side effects.
pub fn decompose(extractor: &TldExtractor, url: &str) -> UrlParts {
    let (scheme, host, port, path, query) = match url::Url::parse(url) {
        Ok(parsed) => (
            parsed.scheme().to_string(),
            parsed.host_str().unwrap_or_default().to_string(),
            parsed.port(),
            parsed.path().to_string(),
            parsed.query().unwrap_or_default().to_string(),
        ),
        Err(e) => {
            log::debug!("URL '{}' did not parse: {}", url, e);
            (String::new(), String::new(), None, String::new(), String::new())
        }
    };

    // IP literals have no registration parts; carry the literal as the
    // domain label so host word-statistics still see it.
    if !host.is_empty()
        && (host.parse::<std::net::Ipv4Addr>().is_ok() || host.starts_with('['))
    {
        return UrlParts {
            raw: url.to_string(),
            scheme,
            host: host.clone(),
            port,
            path,
            query,
            subdomain: String::new(),
            domain_label: host,
            suffix: String::new(),
            registrable_domain: None,
        };
    }

    let (subdomain, domain_label, suffix) = match extractor.extract(url) {
        Ok(parts) => (
            parts.subdomain.unwrap_or_default(),
            parts.domain.unwrap_or_default(),
            parts.suffix.unwrap_or_default(),
        ),
        Err(e) => {
            log::debug!("TLD extraction failed for '{}': {}", url, e);
            (String::new(), String::new(), String::new())
        }
    };

    // Registrable only when both the label and a public suffix are present
    let registrable_domain = if !domain_label.is_empty() && !suffix.is_empty() {
        Some(format!("{}.{}", domain_label, suffix))
    } else {
        None
    };

    UrlParts {
        raw: url.to_string(),
        scheme,
        host,
        port,
        path,
        query,
        subdomain,
        domain_label,
        suffix,
        registrable_domain,
    }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
