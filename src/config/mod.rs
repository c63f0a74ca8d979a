//! Configuration types and constants.
//!
//! This module defines the library configuration struct, logging enums, and
//! all operational constants (timeouts, retry policy, resource defaults).

mod constants;
mod types;

pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
