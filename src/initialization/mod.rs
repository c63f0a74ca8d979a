//! Application initialization and resource setup.
//!
//! This module provides functions to initialize all shared resources:
//! - HTTP client (with User-Agent and timeouts)
//! - Public-suffix-aware TLD extractor
//! - Logger
//!
//! All initialization functions return proper error types for error handling.

mod client;
mod logger;

use std::sync::Arc;

use tldextract::{TldExtractor, TldOption};

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;

/// Initializes the Public Suffix List extractor.
///
/// Creates a new `TldExtractor` for splitting hostnames into subdomain,
/// registrable-domain, and suffix parts. Multi-part suffixes (e.g. `co.uk`)
/// are handled correctly; a naive last-dot split is not.
///
/// # Returns
///
/// An `Arc<TldExtractor>` that can be shared across tasks for decomposition.
pub fn init_extractor() -> Arc<TldExtractor> {
    Arc::new(TldExtractor::new(TldOption::default()))
}
