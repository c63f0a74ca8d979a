//! Error type definitions.
//!
//! Component-level lookup failures are absorbed into sentinel feature values
//! and never surface here; these types cover the two conditions that do
//! propagate: startup failures and caller contract violations.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// Error loading the brand list.
    #[error("Brand list error: {0}")]
    BrandListError(String),
}

/// Caller contract violations in the feature extraction API.
///
/// Network and parsing conditions degrade to sentinel feature values; only a
/// programming error on the caller's side (an empty URL) is reported here.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FeatureError {
    /// The input URL was empty or all whitespace.
    #[error("URL must not be empty")]
    EmptyUrl,
}
