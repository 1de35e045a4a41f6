//! Common error handling utilities for HealHub
//!
//! Process-level error type shared by the HealHub binaries, plus the stable
//! error codes carried in API error bodies so that clients can branch on a
//! code instead of parsing messages.
//!
//! # Example
//!
//! ```rust
//! use error_common::{HealHubError, Result};
//!
//! fn parse_port(raw: &str) -> Result<u16> {
//!     raw.parse()
//!         .map_err(|_| HealHubError::ConfigError(format!("invalid port: {raw}")))
//! }
//!
//! assert!(parse_port("8080").is_ok());
//! assert!(parse_port("eighty").is_err());
//! ```

pub mod codes;
pub mod types;

pub use types::*;
