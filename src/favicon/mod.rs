//! Favicon origin checking.
//!
//! Fetches the page, locates its icon link element, resolves the href to an
//! absolute URL, and compares the icon's host against the page's host. An
//! off-domain favicon is a classic phishing-kit artifact (assets loaded from
//! the impersonated site).
//!
//! The check is single-shot and fail-closed: any fetch, parse, or
//! missing-element condition reports a non-external outcome rather than an
//! error. The outcome enum still records *which* non-external case occurred,
//! so "no icon declared" stays distinguishable from "check failed".

use std::sync::LazyLock;
use std::time::Duration;

use scraper::{Html, Selector};

/// Matches `rel="icon"` and `rel="shortcut icon"` link elements.
static ICON_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"link[rel~="icon"]"#).expect("hard-coded selector is valid")
});

/// Outcome of a favicon origin check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FaviconCheck {
    /// The page declares an icon hosted on a different host.
    External,
    /// The page declares an icon on its own host.
    SameOrigin,
    /// The page was fetched but declares no icon link element.
    NoIcon,
    /// The check itself failed (unreachable page, unparseable URL).
    Unavailable,
}

impl FaviconCheck {
    /// The 0/1 indicator the feature record carries: absence of evidence is
    /// treated as absence of the signal.
    pub fn as_feature(&self) -> i64 {
        match self {
            FaviconCheck::External => 1,
            _ => 0,
        }
    }

    /// Whether the icon is confirmed off-domain.
    pub fn is_external(&self) -> bool {
        matches!(self, FaviconCheck::External)
    }
}

/// Checks whether the page at `page_url` declares an off-domain favicon.
pub async fn check_favicon(
    client: &reqwest::Client,
    page_url: &str,
    fetch_timeout: Duration,
) -> FaviconCheck {
    let page_host = match url::Url::parse(page_url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
    {
        Some(host) => host,
        None => {
            log::debug!("Favicon check skipped; no host in {}", page_url);
            return FaviconCheck::Unavailable;
        }
    };

    let response = match tokio::time::timeout(fetch_timeout, client.get(page_url).send()).await {
        Ok(Ok(resp)) => resp,
        Ok(Err(e)) => {
            log::debug!("Page fetch failed for {}: {}", page_url, e);
            return FaviconCheck::Unavailable;
        }
        Err(_) => {
            log::debug!("Page fetch timed out for {}", page_url);
            return FaviconCheck::Unavailable;
        }
    };

    if !response.status().is_success() {
        log::debug!("Page fetch returned {} for {}", response.status(), page_url);
        return FaviconCheck::Unavailable;
    }

    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            log::debug!("Failed to read page body for {}: {}", page_url, e);
            return FaviconCheck::Unavailable;
        }
    };

    let href = {
        let document = Html::parse_document(&body);
        document
            .select(&ICON_SELECTOR)
            .filter_map(|el| el.value().attr("href"))
            .next()
            .map(str::to_string)
    };

    let href = match href {
        Some(href) => href,
        None => return FaviconCheck::NoIcon,
    };

    let icon_url = match resolve_icon_url(&href, page_url) {
        Some(resolved) => resolved,
        None => {
            log::debug!("Could not resolve favicon href '{}' for {}", href, page_url);
            return FaviconCheck::Unavailable;
        }
    };

    match url::Url::parse(&icon_url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
    {
        Some(icon_host) if icon_host != page_host => FaviconCheck::External,
        Some(_) => FaviconCheck::SameOrigin,
        None => FaviconCheck::Unavailable,
    }
}

/// Resolves a potentially-relative favicon href against the page URL.
fn resolve_icon_url(href: &str, page_url: &str) -> Option<String> {
    if href.starts_with("http://") || href.starts_with("https://") {
        return Some(href.to_string());
    }

    // Protocol-relative URL
    if let Some(rest) = href.strip_prefix("//") {
        return Some(format!("https://{rest}"));
    }

    // Relative path - resolve against the page's own scheme and host
    url::Url::parse(page_url)
        .ok()
        .and_then(|base| base.join(href).ok())
        .map(|u| u.to_string())
}
