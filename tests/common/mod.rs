//! Shared fixtures for integration tests: one wiremock server per
//! provider, and payload builders shaped like the real APIs.

#![allow(dead_code)]

use nexora::utils::config::Config;
use serde_json::json;
use wiremock::MockServer;

/// One mock server per provider endpoint, so path collisions between
/// providers (e.g. Reddit and SerpAPI both serve `/search.json`) cannot
/// occur.
pub struct MockProviders {
    pub wikipedia: MockServer,
    pub news: MockServer,
    pub serp: MockServer,
    pub reddit: MockServer,
    pub duckduckgo: MockServer,
}

impl MockProviders {
    pub async fn start() -> Self {
        Self {
            wikipedia: MockServer::start().await,
            news: MockServer::start().await,
            serp: MockServer::start().await,
            reddit: MockServer::start().await,
            duckduckgo: MockServer::start().await,
        }
    }

    /// Config with every adapter pointed at its mock server and all
    /// credentials present, so all five providers participate.
    pub fn config(&self) -> Config {
        let mut config = Config::default();
        config.providers.wikipedia_url = self.wikipedia.uri();
        config.providers.news_url = self.news.uri();
        config.providers.serp_url = self.serp.uri();
        config.providers.reddit_url = self.reddit.uri();
        config.providers.duckduckgo_url = self.duckduckgo.uri();
        config.providers.news_api_key = Some("test-news-key".to_string());
        config.providers.serp_api_key = Some("test-serp-key".to_string());
        config.research.provider_timeout_secs = 2;
        config
    }
}

/// Wikipedia REST `page/summary` payload.
pub fn wikipedia_payload(title: &str, extract: &str) -> serde_json::Value {
    json!({
        "title": title,
        "extract": extract,
        "content_urls": {
            "desktop": {
                "page": format!("https://en.wikipedia.org/wiki/{}", title.replace(' ', "_"))
            }
        }
    })
}

/// NewsAPI `everything` payload with `n` articles.
pub fn news_payload(n: usize) -> serde_json::Value {
    let articles: Vec<serde_json::Value> = (0..n)
        .map(|i| {
            json!({
                "title": format!("Article {i}"),
                "description": format!("Description {i}"),
                "url": format!("https://news.example/{i}"),
                "source": { "name": "Example Times" },
                "publishedAt": "2024-03-01T12:00:00Z"
            })
        })
        .collect();
    json!({ "status": "ok", "articles": articles })
}

/// SerpAPI organic-results payload with `n` results.
pub fn serp_payload(n: usize) -> serde_json::Value {
    let results: Vec<serde_json::Value> = (0..n)
        .map(|i| {
            json!({
                "title": format!("Web result {i}"),
                "snippet": format!("Snippet {i}"),
                "link": format!("https://web.example/{i}")
            })
        })
        .collect();
    json!({ "organic_results": results })
}

/// Reddit search listing payload with the given post bodies.
pub fn reddit_payload(posts: &[(&str, &str)]) -> serde_json::Value {
    let children: Vec<serde_json::Value> = posts
        .iter()
        .enumerate()
        .map(|(i, (title, selftext))| {
            json!({
                "data": {
                    "title": title,
                    "selftext": selftext,
                    "permalink": format!("/r/test/comments/{i}/post/"),
                    "subreddit": "test",
                    "score": 10 * (i as i64 + 1)
                }
            })
        })
        .collect();
    json!({ "data": { "children": children } })
}

/// DuckDuckGo instant-answer payload.
pub fn duckduckgo_payload(heading: &str, abstract_text: &str) -> serde_json::Value {
    json!({
        "Heading": heading,
        "AbstractText": abstract_text,
        "AbstractURL": "https://duckduckgo.example/answer"
    })
}
