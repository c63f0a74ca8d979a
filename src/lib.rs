//! phish_detect library: URL feature extraction for phishing classification
//!
//! This library derives a fixed-width, ordered feature record from a URL's
//! lexical, structural, and registration-metadata properties. The record is
//! the input contract for downstream phishing classifiers: the set and order
//! of feature names is identical for every URL processed.
//!
//! # Example
//!
//! ```no_run
//! use phish_detect::{Config, FeatureExtractor};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let extractor = FeatureExtractor::from_config(&config)?;
//!
//! let record = extractor.extract("http://paypal-secure.example.com/login").await?;
//! println!("{} features", record.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! The two registration/favicon lookups are async; call `extract` from within
//! a Tokio runtime. The lexical portion of the record is fully deterministic
//! and never touches the network.

#![warn(missing_docs)]

pub mod brands;
pub mod config;
mod error_handling;
pub mod favicon;
pub mod features;
pub mod initialization;
pub mod url_parts;
pub mod whois;

// Re-export public API
pub use brands::{BrandList, ShortenerSet};
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{FeatureError, InitializationError};
pub use favicon::FaviconCheck;
pub use features::{FeatureExtractor, FeatureRecord, FeatureValue, FEATURE_NAMES};
pub use url_parts::{decompose, UrlParts};
pub use whois::RegistrationInfo;
