//! Provider adapters.
//!
//! Each adapter translates one external information source into the common
//! [`SourceResult`](crate::types::SourceResult) shape. Adapters are strict
//! parsers: every optional provider field is handled explicitly, and items
//! without a usable title contribute nothing rather than a placeholder
//! record.
//!
//! Adapters report errors through [`Result`](crate::types::Result); the
//! [aggregator](crate::research::aggregator) is the isolation boundary that
//! converts any failure or timeout into an absent bundle slot.

/// DuckDuckGo instant-answer adapter (quick facts).
pub mod duckduckgo;
/// NewsAPI adapter (news articles).
pub mod newsapi;
/// Reddit search adapter (community discussions).
pub mod reddit;
/// SerpAPI / Google Custom Search adapter (general web results).
pub mod websearch;
/// Wikipedia REST summary adapter (encyclopedia).
pub mod wikipedia;

pub use duckduckgo::DuckDuckGoProvider;
pub use newsapi::NewsProvider;
pub use reddit::RedditProvider;
pub use websearch::WebSearchProvider;
pub use wikipedia::WikipediaProvider;

use crate::types::{Result, SourceCategory, SourceResult};
use async_trait::async_trait;

/// Maximum items a multi-result provider contributes to a bundle.
pub const MAX_ITEMS: usize = 3;

/// One provider adapter in the research fan-out.
#[async_trait]
pub trait ProviderAdapter: Send + Sync {
    /// Short provider name for logging.
    fn name(&self) -> &'static str;

    /// The bundle slot this adapter fills.
    fn category(&self) -> SourceCategory;

    /// Whether the adapter has the credentials it needs. Unconfigured
    /// adapters are skipped without attempting a call.
    fn is_configured(&self) -> bool {
        true
    }

    /// Query the provider for `topic` and normalize the response.
    ///
    /// Returns an empty vec when the provider has nothing usable for the
    /// topic. Transport errors, bad statuses, and malformed payloads
    /// surface as `Err` and are absorbed by the aggregator.
    async fn fetch(&self, topic: &str) -> Result<Vec<SourceResult>>;
}

/// Truncate a free-text body to a bounded preview, appending `...` when
/// anything was cut. Operates on character boundaries.
pub(crate) fn truncate_preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut preview: String = text.chars().take(max_chars).collect();
    preview.push_str("...");
    preview
}
