//! API request handlers.

/// Health check handler.
pub mod health;
/// Research endpoint handler.
pub mod research;
