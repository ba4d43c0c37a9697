//! NewsAPI adapter.
//!
//! Queries the NewsAPI `everything` endpoint sorted by relevancy and keeps
//! the top articles. Requires an API key; without one the adapter reports
//! itself unconfigured and is skipped by the aggregator.

use crate::providers::{truncate_preview, ProviderAdapter, MAX_ITEMS};
use crate::types::{AppError, Result, SourceCategory, SourceResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Article bodies are cut to this many characters before use as a summary.
const CONTENT_PREVIEW_CHARS: usize = 200;

/// News adapter backed by NewsAPI.
pub struct NewsProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl NewsProvider {
    pub fn new(client: reqwest::Client, base_url: String, api_key: Option<String>) -> Self {
        Self {
            client,
            base_url,
            api_key,
        }
    }

    fn normalize(payload: NewsEnvelope) -> Vec<SourceResult> {
        payload
            .articles
            .into_iter()
            .take(MAX_ITEMS)
            .filter_map(|article| {
                let title = article.title.filter(|t| !t.trim().is_empty())?;

                let summary = match article.description.filter(|d| !d.trim().is_empty()) {
                    Some(description) => description,
                    None => article
                        .content
                        .map(|c| truncate_preview(&c, CONTENT_PREVIEW_CHARS))
                        .unwrap_or_default(),
                };

                let source_label = article
                    .source
                    .and_then(|s| s.name)
                    .filter(|n| !n.trim().is_empty())
                    .unwrap_or_else(|| "NewsAPI".to_string());

                Some(SourceResult {
                    title,
                    summary,
                    url: article.url,
                    category: SourceCategory::News,
                    source_label,
                    published_at: article.published_at,
                    score: None,
                })
            })
            .collect()
    }
}

#[async_trait]
impl ProviderAdapter for NewsProvider {
    fn name(&self) -> &'static str {
        "newsapi"
    }

    fn category(&self) -> SourceCategory {
        SourceCategory::News
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn fetch(&self, topic: &str) -> Result<Vec<SourceResult>> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AppError::Provider("NewsAPI key not configured".to_string()))?;

        let url = format!(
            "{}/v2/everything?q={}&sortBy=relevancy&pageSize=5&apiKey={}",
            self.base_url,
            urlencoding::encode(topic),
            api_key
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Provider(format!("NewsAPI request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::Provider(format!(
                "NewsAPI returned status {}",
                response.status()
            )));
        }

        let payload: NewsEnvelope = response
            .json()
            .await
            .map_err(|e| AppError::Provider(format!("NewsAPI payload malformed: {e}")))?;

        Ok(Self::normalize(payload))
    }
}

#[derive(Debug, Deserialize)]
struct NewsEnvelope {
    #[serde(default)]
    articles: Vec<NewsArticle>,
}

#[derive(Debug, Deserialize)]
struct NewsArticle {
    title: Option<String>,
    description: Option<String>,
    content: Option<String>,
    url: Option<String>,
    source: Option<NewsOutlet>,
    #[serde(rename = "publishedAt")]
    published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
struct NewsOutlet {
    name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> NewsEnvelope {
        serde_json::from_value(value).unwrap()
    }

    fn article(title: &str) -> serde_json::Value {
        json!({
            "title": title,
            "description": "desc",
            "url": "https://news.example/a",
            "source": { "name": "Example Times" },
            "publishedAt": "2024-03-01T12:00:00Z"
        })
    }

    #[test]
    fn normalize_caps_articles_at_three() {
        let payload = parse(json!({
            "articles": [article("a"), article("b"), article("c"), article("d"), article("e")]
        }));

        let results = NewsProvider::normalize(payload);
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| r.category == SourceCategory::News));
        assert_eq!(results[0].source_label, "Example Times");
        assert!(results[0].published_at.is_some());
    }

    #[test]
    fn normalize_prefers_description_over_content() {
        let payload = parse(json!({
            "articles": [{
                "title": "t",
                "description": "short description",
                "content": "very long content body"
            }]
        }));

        assert_eq!(NewsProvider::normalize(payload)[0].summary, "short description");
    }

    #[test]
    fn normalize_truncates_content_fallback() {
        let payload = parse(json!({
            "articles": [{
                "title": "t",
                "content": "x".repeat(1000)
            }]
        }));

        let results = NewsProvider::normalize(payload);
        assert_eq!(results[0].summary.chars().count(), 203);
        assert!(results[0].summary.ends_with("..."));
    }

    #[test]
    fn normalize_drops_titleless_articles() {
        let payload = parse(json!({
            "articles": [
                { "description": "no title here" },
                { "title": "  ", "description": "blank title" },
                article("kept")
            ]
        }));

        let results = NewsProvider::normalize(payload);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "kept");
    }

    #[test]
    fn unconfigured_adapter_reports_itself() {
        let provider = NewsProvider::new(
            reqwest::Client::new(),
            "https://newsapi.org".to_string(),
            None,
        );
        assert!(!provider.is_configured());

        let configured = NewsProvider::new(
            reqwest::Client::new(),
            "https://newsapi.org".to_string(),
            Some("key".to_string()),
        );
        assert!(configured.is_configured());
    }
}
