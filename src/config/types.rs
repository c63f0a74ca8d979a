//! Configuration types.
//!
//! This module defines enums and structs used for command-line argument
//! parsing and library configuration.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::config::constants::{
    BRAND_FILE, DEFAULT_USER_AGENT, PAGE_FETCH_TIMEOUT_SECS, RETRY_INITIAL_DELAY_MS,
    WHOIS_BASE_URL, WHOIS_FETCH_TIMEOUT_SECS, WHOIS_MAX_ATTEMPTS,
};

/// Logging level for the application.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without any CLI dependencies.
///
/// # Examples
///
/// ```no_run
/// use phish_detect::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     brand_file: PathBuf::from("data/brands.csv"),
///     whois_max_attempts: 5,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Brand list CSV path (one brand per record, `brand` header column)
    pub brand_file: PathBuf,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Page fetch timeout in seconds (favicon origin check)
    pub timeout_seconds: u64,

    /// WHOIS fetch timeout in seconds, applied per attempt
    pub whois_timeout_seconds: u64,

    /// WHOIS web front end, queried as `{base}/{registrable_domain}`
    pub whois_base_url: String,

    /// Maximum WHOIS lookup attempts, including the initial attempt
    pub whois_max_attempts: usize,

    /// Initial retry backoff delay in milliseconds (doubles per attempt)
    pub whois_retry_delay_ms: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            brand_file: PathBuf::from(BRAND_FILE),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            timeout_seconds: PAGE_FETCH_TIMEOUT_SECS,
            whois_timeout_seconds: WHOIS_FETCH_TIMEOUT_SECS,
            whois_base_url: WHOIS_BASE_URL.to_string(),
            whois_max_attempts: WHOIS_MAX_ATTEMPTS,
            whois_retry_delay_ms: RETRY_INITIAL_DELAY_MS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.whois_max_attempts, 3);
        assert_eq!(config.timeout_seconds, 5);
        assert_eq!(config.whois_timeout_seconds, 10);
        assert_eq!(config.whois_base_url, "https://www.whois.com/whois");
        assert_eq!(config.brand_file, PathBuf::from("data/brands.csv"));
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
    }
}
