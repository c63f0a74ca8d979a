//! Configuration constants.
//!
//! This module defines all configuration constants used throughout the
//! application, including timeouts, retry policy, and static resource
//! defaults.

/// Default User-Agent string for HTTP requests.
///
/// Both outbound calls (WHOIS page, favicon page) send a realistic browser
/// User-Agent so automated-client blocking does not silently degrade the
/// registration features. Users can override this via the `--user-agent`
/// CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

// Network operation timeouts
/// Page fetch timeout in seconds (favicon origin check)
pub const PAGE_FETCH_TIMEOUT_SECS: u64 = 5;
/// WHOIS page fetch timeout in seconds, applied per attempt
pub const WHOIS_FETCH_TIMEOUT_SECS: u64 = 10;

// Retry strategy (registration lookup only; the favicon check is single-shot)
/// Initial delay in milliseconds before first retry
pub const RETRY_INITIAL_DELAY_MS: u64 = 500;
/// Factor by which retry delay is multiplied on each attempt
pub const RETRY_FACTOR: u64 = 2;
/// Maximum delay between retries in seconds
pub const RETRY_MAX_DELAY_SECS: u64 = 15;
/// Maximum number of WHOIS lookup attempts (including the initial attempt)
pub const WHOIS_MAX_ATTEMPTS: usize = 3;

/// Default WHOIS web front end, queried as `{base}/{registrable_domain}`
pub const WHOIS_BASE_URL: &str = "https://www.whois.com/whois";

/// Default brand list path (CSV with a `brand` header column)
pub const BRAND_FILE: &str = "data/brands.csv";

/// Known URL-shortening service domains.
///
/// Compared against the registrable domain of the input URL. Fixed set,
/// loaded once at startup and never mutated.
pub const SHORTENING_SERVICES: &[&str] = &[
    "bit.ly",
    "goo.gl",
    "t.co",
    "tinyurl.com",
    "is.gd",
    "buff.ly",
    "ow.ly",
    "rebrand.ly",
    "bl.ink",
    "shorte.st",
];

/// Maximum URL length (2048 characters) accepted by the CLI batch loop.
/// Matches common browser and server limits.
pub const MAX_URL_LENGTH: usize = 2048;
