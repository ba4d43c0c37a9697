//! Web search adapter.
//!
//! Primary backend is SerpAPI's Google engine; when only a Google Custom
//! Search credential pair is configured the adapter falls back to that
//! API. With neither credential the adapter is skipped.

use crate::providers::{ProviderAdapter, MAX_ITEMS};
use crate::types::{AppError, Result, SourceCategory, SourceResult};
use async_trait::async_trait;
use serde::Deserialize;

/// General web search adapter (SerpAPI, with Google Custom Search fallback).
pub struct WebSearchProvider {
    client: reqwest::Client,
    serp_base_url: String,
    google_base_url: String,
    serp_api_key: Option<String>,
    google_api_key: Option<String>,
    search_engine_id: Option<String>,
}

impl WebSearchProvider {
    pub fn new(
        client: reqwest::Client,
        serp_base_url: String,
        google_base_url: String,
        serp_api_key: Option<String>,
        google_api_key: Option<String>,
        search_engine_id: Option<String>,
    ) -> Self {
        Self {
            client,
            serp_base_url,
            google_base_url,
            serp_api_key,
            google_api_key,
            search_engine_id,
        }
    }

    fn google_credentials(&self) -> Option<(&str, &str)> {
        match (&self.google_api_key, &self.search_engine_id) {
            (Some(key), Some(cx)) => Some((key, cx)),
            _ => None,
        }
    }

    fn normalize_serp(payload: SerpResponse) -> Vec<SourceResult> {
        payload
            .organic_results
            .into_iter()
            .take(MAX_ITEMS)
            .filter_map(|result| {
                let title = result.title.filter(|t| !t.trim().is_empty())?;
                Some(SourceResult {
                    title,
                    summary: result.snippet.unwrap_or_default(),
                    url: result.link,
                    category: SourceCategory::Web,
                    source_label: "Google Search".to_string(),
                    published_at: None,
                    score: None,
                })
            })
            .collect()
    }

    fn normalize_custom_search(payload: CustomSearchResponse) -> Vec<SourceResult> {
        payload
            .items
            .into_iter()
            .take(MAX_ITEMS)
            .filter_map(|item| {
                let title = item.title.filter(|t| !t.trim().is_empty())?;
                Some(SourceResult {
                    title,
                    summary: item.snippet.unwrap_or_default(),
                    url: item.link,
                    category: SourceCategory::Web,
                    source_label: "Google".to_string(),
                    published_at: None,
                    score: None,
                })
            })
            .collect()
    }

    async fn fetch_serp(&self, topic: &str, api_key: &str) -> Result<Vec<SourceResult>> {
        let url = format!(
            "{}/search.json?engine=google&q={}&api_key={}&num=5",
            self.serp_base_url,
            urlencoding::encode(topic),
            api_key
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Provider(format!("SerpAPI request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::Provider(format!(
                "SerpAPI returned status {}",
                response.status()
            )));
        }

        let payload: SerpResponse = response
            .json()
            .await
            .map_err(|e| AppError::Provider(format!("SerpAPI payload malformed: {e}")))?;

        Ok(Self::normalize_serp(payload))
    }

    async fn fetch_custom_search(
        &self,
        topic: &str,
        api_key: &str,
        engine_id: &str,
    ) -> Result<Vec<SourceResult>> {
        let url = format!(
            "{}/customsearch/v1?key={}&cx={}&q={}&num=5",
            self.google_base_url,
            api_key,
            engine_id,
            urlencoding::encode(topic)
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Provider(format!("Google Custom Search request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::Provider(format!(
                "Google Custom Search returned status {}",
                response.status()
            )));
        }

        let payload: CustomSearchResponse = response
            .json()
            .await
            .map_err(|e| AppError::Provider(format!("Google Custom Search payload malformed: {e}")))?;

        Ok(Self::normalize_custom_search(payload))
    }
}

#[async_trait]
impl ProviderAdapter for WebSearchProvider {
    fn name(&self) -> &'static str {
        "websearch"
    }

    fn category(&self) -> SourceCategory {
        SourceCategory::Web
    }

    fn is_configured(&self) -> bool {
        self.serp_api_key.is_some() || self.google_credentials().is_some()
    }

    async fn fetch(&self, topic: &str) -> Result<Vec<SourceResult>> {
        if let Some(api_key) = self.serp_api_key.clone() {
            return self.fetch_serp(topic, &api_key).await;
        }

        if let Some((api_key, engine_id)) = self.google_credentials() {
            let (api_key, engine_id) = (api_key.to_string(), engine_id.to_string());
            return self.fetch_custom_search(topic, &api_key, &engine_id).await;
        }

        Err(AppError::Provider(
            "web search credentials not configured".to_string(),
        ))
    }
}

#[derive(Debug, Deserialize)]
struct SerpResponse {
    #[serde(default)]
    organic_results: Vec<OrganicResult>,
}

#[derive(Debug, Deserialize)]
struct OrganicResult {
    title: Option<String>,
    snippet: Option<String>,
    link: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CustomSearchResponse {
    #[serde(default)]
    items: Vec<CustomSearchItem>,
}

#[derive(Debug, Deserialize)]
struct CustomSearchItem {
    title: Option<String>,
    snippet: Option<String>,
    link: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn provider(serp: Option<&str>, google: Option<&str>, cx: Option<&str>) -> WebSearchProvider {
        WebSearchProvider::new(
            reqwest::Client::new(),
            "https://serpapi.com".to_string(),
            "https://www.googleapis.com".to_string(),
            serp.map(String::from),
            google.map(String::from),
            cx.map(String::from),
        )
    }

    #[test]
    fn configured_with_serp_key_alone() {
        assert!(provider(Some("serp"), None, None).is_configured());
    }

    #[test]
    fn configured_with_full_google_pair_only() {
        assert!(provider(None, Some("g"), Some("cx")).is_configured());
        assert!(!provider(None, Some("g"), None).is_configured());
        assert!(!provider(None, None, Some("cx")).is_configured());
        assert!(!provider(None, None, None).is_configured());
    }

    #[test]
    fn normalize_serp_caps_and_labels_results() {
        let payload: SerpResponse = serde_json::from_value(json!({
            "organic_results": [
                { "title": "a", "snippet": "sa", "link": "https://a" },
                { "title": "b", "snippet": "sb", "link": "https://b" },
                { "title": "c", "snippet": "sc", "link": "https://c" },
                { "title": "d", "snippet": "sd", "link": "https://d" }
            ]
        }))
        .unwrap();

        let results = WebSearchProvider::normalize_serp(payload);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].source_label, "Google Search");
        assert_eq!(results[0].category, SourceCategory::Web);
    }

    #[test]
    fn normalize_custom_search_drops_titleless_items() {
        let payload: CustomSearchResponse = serde_json::from_value(json!({
            "items": [
                { "snippet": "no title", "link": "https://x" },
                { "title": "kept", "snippet": "s", "link": "https://y" }
            ]
        }))
        .unwrap();

        let results = WebSearchProvider::normalize_custom_search(payload);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "kept");
        assert_eq!(results[0].source_label, "Google");
    }

    #[test]
    fn normalize_serp_handles_missing_results_field() {
        let payload: SerpResponse = serde_json::from_value(json!({})).unwrap();
        assert!(WebSearchProvider::normalize_serp(payload).is_empty());
    }
}
