//! # Nexora - Multi-Source Research Engine
//!
//! Given a free-text topic, Nexora queries five heterogeneous information
//! providers concurrently - encyclopedia (Wikipedia), news (NewsAPI),
//! general web search (SerpAPI / Google Custom Search), community
//! discussion (Reddit), and quick facts (DuckDuckGo) - tolerates partial
//! failure, and synthesizes whatever arrived into a single report with
//! grouped citations and a derived insight narrative.
//!
//! ## Overview
//!
//! Nexora can be used in two ways:
//!
//! 1. **As a standalone server/CLI** - Run the `nexora-server` binary
//! 2. **As a library** - Import the research pipeline into your own project
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust,ignore
//! use nexora::{Config, ResearchEngine};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let engine = ResearchEngine::from_config(&config)?;
//!
//!     let report = engine.perform_research("quantum computing").await?;
//!     println!("{}", report.summary);
//!     println!("{}", report.insight);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Guarantees
//!
//! - One slow or failing provider never delays or corrupts the others:
//!   every adapter call is bounded by a timeout and joined with
//!   all-settled semantics.
//! - Report sections and citations always follow the fixed category order
//!   (encyclopedia, news, web, discussion, knowledge), regardless of the
//!   order in which providers completed.
//! - The caller always receives either a validation error (blank topic)
//!   or a fully-formed report; an all-providers-failed pass produces the
//!   deterministic fallback report, not an error.
//!
//! ## Modules
//!
//! - [`providers`] - Per-provider adapters normalizing external payloads
//! - [`research`] - Fan-out aggregation and report synthesis
//! - [`api`] - REST API handlers and routes
//! - [`cli`] - Command-line interface
//! - [`types`] - Common types and error handling
//! - [`utils`] - Configuration

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

/// HTTP API handlers and routes.
pub mod api;
/// Command-line interface and terminal output.
pub mod cli;
/// Provider adapters (Wikipedia, NewsAPI, web search, Reddit, DuckDuckGo).
pub mod providers;
/// Fan-out aggregation and report synthesis.
pub mod research;
/// Core types (results, bundles, reports, errors).
pub mod types;
/// Configuration utilities.
pub mod utils;

// Re-export commonly used types
pub use providers::ProviderAdapter;
pub use research::ResearchEngine;
pub use types::{
    AppError, Citation, Report, Result, SourceBundle, SourceCategory, SourceResult,
};
pub use utils::config::Config;

use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Runtime configuration
    pub config: Arc<Config>,
    /// Research pipeline entry point
    pub engine: Arc<ResearchEngine>,
}
