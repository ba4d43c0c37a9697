//! Configuration utilities.

/// Environment-based configuration.
pub mod config;
