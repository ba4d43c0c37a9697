//! Multi-source research pipeline.
//!
//! The pipeline turns a free-text topic into a synthesized [`Report`]:
//!
//! 1. **Validation** - blank topics are rejected before any provider call
//! 2. **Fan-out** - [`aggregator::Aggregator`] queries every configured
//!    provider concurrently, tolerating partial failure
//! 3. **Synthesis** - [`synthesizer::synthesize`] groups whatever arrived
//!    into summary sections and citations in a fixed category order
//! 4. **Insight** - [`insight::generate`] derives a short analysis from
//!    which categories contributed
//!
//! # Usage
//!
//! ```ignore
//! use nexora::research::ResearchEngine;
//! use nexora::utils::config::Config;
//!
//! let engine = ResearchEngine::from_config(&Config::from_env()?)?;
//! let report = engine.perform_research("quantum computing").await?;
//!
//! println!("{}", report.summary);
//! for citation in &report.citations {
//!     println!("- {}", citation.title);
//! }
//! ```

/// Concurrent provider fan-out with failure isolation.
pub mod aggregator;
/// Rule-based insight narrative generation.
pub mod insight;
/// Bundle-to-report synthesis.
pub mod synthesizer;

use crate::providers::{
    DuckDuckGoProvider, NewsProvider, ProviderAdapter, RedditProvider, WebSearchProvider,
    WikipediaProvider,
};
use crate::types::{AppError, Report, Result};
use crate::utils::config::Config;
use aggregator::Aggregator;
use std::sync::Arc;
use std::time::Duration;

/// Entry point for one research pass: validate, aggregate, synthesize.
pub struct ResearchEngine {
    aggregator: Aggregator,
}

impl ResearchEngine {
    /// Build the engine and its five provider adapters from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let timeout = Duration::from_secs(config.research.provider_timeout_secs);

        let client = reqwest::Client::builder()
            .user_agent(concat!("nexora/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Config(format!("failed to build HTTP client: {e}")))?;

        let providers = &config.providers;
        let adapters: Vec<Arc<dyn ProviderAdapter>> = vec![
            Arc::new(WikipediaProvider::new(
                client.clone(),
                providers.wikipedia_url.clone(),
            )),
            Arc::new(NewsProvider::new(
                client.clone(),
                providers.news_url.clone(),
                providers.news_api_key.clone(),
            )),
            Arc::new(WebSearchProvider::new(
                client.clone(),
                providers.serp_url.clone(),
                providers.google_url.clone(),
                providers.serp_api_key.clone(),
                providers.google_api_key.clone(),
                providers.google_search_engine_id.clone(),
            )),
            Arc::new(RedditProvider::new(
                client.clone(),
                providers.reddit_url.clone(),
            )),
            Arc::new(DuckDuckGoProvider::new(
                client,
                providers.duckduckgo_url.clone(),
            )),
        ];

        Ok(Self {
            aggregator: Aggregator::new(adapters, timeout)?,
        })
    }

    /// Execute one research pass on a topic.
    ///
    /// Blank topics are rejected before any provider work begins. The
    /// caller otherwise always receives a fully-formed report, possibly
    /// the fallback "limited results" one.
    pub async fn perform_research(&self, topic: &str) -> Result<Report> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(AppError::InvalidInput(
                "Please enter a research topic".to_string(),
            ));
        }

        tracing::info!(topic, "starting research");
        let bundle = self.aggregator.aggregate(topic).await;
        let report = synthesizer::synthesize(&bundle, topic);
        tracing::info!(
            topic,
            sources = report.source_count,
            citations = report.citations.len(),
            "research complete"
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn blank_topic_is_rejected_before_aggregation() {
        let engine = ResearchEngine::from_config(&Config::default()).unwrap();

        for topic in ["", "   ", "\t\n"] {
            let err = engine.perform_research(topic).await.unwrap_err();
            assert!(matches!(err, AppError::InvalidInput(_)));
        }
    }
}
