//! DuckDuckGo instant-answer adapter.
//!
//! Queries the DuckDuckGo zero-click API. A topic yields at most one
//! quick-facts entry; responses without abstract text are treated as
//! absent.

use crate::providers::ProviderAdapter;
use crate::types::{AppError, Result, SourceCategory, SourceResult};
use async_trait::async_trait;
use serde::Deserialize;

/// Quick-facts adapter backed by the DuckDuckGo instant-answer API.
pub struct DuckDuckGoProvider {
    client: reqwest::Client,
    base_url: String,
}

impl DuckDuckGoProvider {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    fn normalize(payload: InstantAnswer, topic: &str) -> Vec<SourceResult> {
        if payload.abstract_text.trim().is_empty() {
            return Vec::new();
        }

        let title = if payload.heading.trim().is_empty() {
            topic.to_string()
        } else {
            payload.heading
        };

        let url = if payload.abstract_url.trim().is_empty() {
            None
        } else {
            Some(payload.abstract_url)
        };

        vec![SourceResult {
            title,
            summary: payload.abstract_text,
            url,
            category: SourceCategory::Knowledge,
            source_label: "DuckDuckGo".to_string(),
            published_at: None,
            score: None,
        }]
    }
}

#[async_trait]
impl ProviderAdapter for DuckDuckGoProvider {
    fn name(&self) -> &'static str {
        "duckduckgo"
    }

    fn category(&self) -> SourceCategory {
        SourceCategory::Knowledge
    }

    async fn fetch(&self, topic: &str) -> Result<Vec<SourceResult>> {
        let url = format!(
            "{}/?q={}&format=json&no_html=1&skip_disambig=1",
            self.base_url,
            urlencoding::encode(topic)
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Provider(format!("DuckDuckGo request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::Provider(format!(
                "DuckDuckGo returned status {}",
                response.status()
            )));
        }

        let payload: InstantAnswer = response
            .json()
            .await
            .map_err(|e| AppError::Provider(format!("DuckDuckGo payload malformed: {e}")))?;

        Ok(Self::normalize(payload, topic))
    }
}

#[derive(Debug, Deserialize)]
struct InstantAnswer {
    #[serde(rename = "Heading", default)]
    heading: String,
    #[serde(rename = "AbstractText", default)]
    abstract_text: String,
    #[serde(rename = "AbstractURL", default)]
    abstract_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> InstantAnswer {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn normalize_maps_instant_answer() {
        let payload = parse(json!({
            "Heading": "Rust (programming language)",
            "AbstractText": "Rust is a systems programming language.",
            "AbstractURL": "https://en.wikipedia.org/wiki/Rust"
        }));

        let results = DuckDuckGoProvider::normalize(payload, "rust");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Rust (programming language)");
        assert_eq!(results[0].category, SourceCategory::Knowledge);
        assert_eq!(results[0].source_label, "DuckDuckGo");
    }

    #[test]
    fn normalize_falls_back_to_topic_for_missing_heading() {
        let payload = parse(json!({
            "AbstractText": "An answer without a heading.",
            "AbstractURL": ""
        }));

        let results = DuckDuckGoProvider::normalize(payload, "obscure topic");
        assert_eq!(results[0].title, "obscure topic");
        assert!(results[0].url.is_none());
    }

    #[test]
    fn normalize_drops_empty_abstracts() {
        let payload = parse(json!({ "Heading": "Disambiguation", "AbstractText": "" }));
        assert!(DuckDuckGoProvider::normalize(payload, "topic").is_empty());
    }
}
