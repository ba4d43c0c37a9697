//! Wikipedia REST summary adapter.
//!
//! Queries the `page/summary` endpoint of the Wikipedia REST API. A topic
//! maps to at most one encyclopedia entry; pages without an extract are
//! treated as absent.

use crate::providers::ProviderAdapter;
use crate::types::{AppError, Result, SourceCategory, SourceResult};
use async_trait::async_trait;
use serde::Deserialize;

/// Encyclopedia adapter backed by the Wikipedia REST API.
pub struct WikipediaProvider {
    client: reqwest::Client,
    base_url: String,
}

impl WikipediaProvider {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// Wikipedia page titles use underscores where the topic has spaces.
    fn page_title(topic: &str) -> String {
        topic.split_whitespace().collect::<Vec<_>>().join("_")
    }

    fn normalize(payload: WikiSummary) -> Vec<SourceResult> {
        let title = match payload.title {
            Some(t) if !t.trim().is_empty() => t,
            _ => return Vec::new(),
        };
        let extract = match payload.extract {
            Some(e) if !e.trim().is_empty() => e,
            _ => return Vec::new(),
        };

        let url = payload
            .content_urls
            .and_then(|c| c.desktop)
            .and_then(|d| d.page);

        vec![SourceResult {
            title,
            summary: extract,
            url,
            category: SourceCategory::Encyclopedia,
            source_label: "Wikipedia".to_string(),
            published_at: None,
            score: None,
        }]
    }
}

#[async_trait]
impl ProviderAdapter for WikipediaProvider {
    fn name(&self) -> &'static str {
        "wikipedia"
    }

    fn category(&self) -> SourceCategory {
        SourceCategory::Encyclopedia
    }

    async fn fetch(&self, topic: &str) -> Result<Vec<SourceResult>> {
        let url = format!(
            "{}/api/rest_v1/page/summary/{}",
            self.base_url,
            urlencoding::encode(&Self::page_title(topic))
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Provider(format!("Wikipedia request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::Provider(format!(
                "Wikipedia returned status {}",
                response.status()
            )));
        }

        let payload: WikiSummary = response
            .json()
            .await
            .map_err(|e| AppError::Provider(format!("Wikipedia payload malformed: {e}")))?;

        Ok(Self::normalize(payload))
    }
}

#[derive(Debug, Deserialize)]
struct WikiSummary {
    title: Option<String>,
    extract: Option<String>,
    content_urls: Option<ContentUrls>,
}

#[derive(Debug, Deserialize)]
struct ContentUrls {
    desktop: Option<DesktopUrls>,
}

#[derive(Debug, Deserialize)]
struct DesktopUrls {
    page: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> WikiSummary {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn page_title_replaces_whitespace_runs() {
        assert_eq!(
            WikipediaProvider::page_title("quantum   computing"),
            "quantum_computing"
        );
        assert_eq!(WikipediaProvider::page_title("rust"), "rust");
    }

    #[test]
    fn normalize_maps_full_summary() {
        let payload = parse(json!({
            "title": "Quantum computing",
            "extract": "A quantum computer exploits quantum mechanics.",
            "content_urls": {
                "desktop": { "page": "https://en.wikipedia.org/wiki/Quantum_computing" }
            }
        }));

        let results = WikipediaProvider::normalize(payload);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Quantum computing");
        assert_eq!(results[0].category, SourceCategory::Encyclopedia);
        assert_eq!(results[0].source_label, "Wikipedia");
        assert_eq!(
            results[0].url.as_deref(),
            Some("https://en.wikipedia.org/wiki/Quantum_computing")
        );
    }

    #[test]
    fn normalize_drops_pages_without_extract() {
        let payload = parse(json!({ "title": "Some page" }));
        assert!(WikipediaProvider::normalize(payload).is_empty());
    }

    #[test]
    fn normalize_drops_pages_without_title() {
        let payload = parse(json!({ "extract": "Body without a title." }));
        assert!(WikipediaProvider::normalize(payload).is_empty());
    }

    #[test]
    fn normalize_tolerates_missing_urls() {
        let payload = parse(json!({
            "title": "Offline page",
            "extract": "Has no content_urls block."
        }));

        let results = WikipediaProvider::normalize(payload);
        assert_eq!(results.len(), 1);
        assert!(results[0].url.is_none());
    }
}
