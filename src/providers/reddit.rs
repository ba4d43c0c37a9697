//! Reddit search adapter.
//!
//! Queries the public Reddit search listing and keeps the top posts as
//! community-discussion items. Self-text bodies are cut to a bounded
//! preview; link posts without a body get a fixed placeholder summary.

use crate::providers::{truncate_preview, ProviderAdapter, MAX_ITEMS};
use crate::types::{AppError, Result, SourceCategory, SourceResult};
use async_trait::async_trait;
use serde::Deserialize;

/// Post bodies are cut to this many characters before use as a summary.
const SELFTEXT_PREVIEW_CHARS: usize = 300;

/// Summary used for link posts that carry no self-text.
const LINK_POST_SUMMARY: &str = "Community discussion thread";

/// Community-discussion adapter backed by the Reddit search API.
pub struct RedditProvider {
    client: reqwest::Client,
    base_url: String,
}

impl RedditProvider {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    fn normalize(payload: RedditListing) -> Vec<SourceResult> {
        payload
            .data
            .map(|d| d.children)
            .unwrap_or_default()
            .into_iter()
            .take(MAX_ITEMS)
            .filter_map(|child| {
                let post = child.data;
                let title = post.title.filter(|t| !t.trim().is_empty())?;

                let summary = match post.selftext.filter(|s| !s.trim().is_empty()) {
                    Some(body) => truncate_preview(&body, SELFTEXT_PREVIEW_CHARS),
                    None => LINK_POST_SUMMARY.to_string(),
                };

                let source_label = match &post.subreddit {
                    Some(subreddit) if !subreddit.trim().is_empty() => {
                        format!("Reddit - r/{subreddit}")
                    }
                    _ => "Reddit".to_string(),
                };

                Some(SourceResult {
                    title,
                    summary,
                    url: post
                        .permalink
                        .map(|permalink| format!("https://reddit.com{permalink}")),
                    category: SourceCategory::Discussion,
                    source_label,
                    published_at: None,
                    score: post.score,
                })
            })
            .collect()
    }
}

#[async_trait]
impl ProviderAdapter for RedditProvider {
    fn name(&self) -> &'static str {
        "reddit"
    }

    fn category(&self) -> SourceCategory {
        SourceCategory::Discussion
    }

    async fn fetch(&self, topic: &str) -> Result<Vec<SourceResult>> {
        let url = format!(
            "{}/search.json?q={}&limit=5&sort=relevance",
            self.base_url,
            urlencoding::encode(topic)
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Provider(format!("Reddit request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::Provider(format!(
                "Reddit returned status {}",
                response.status()
            )));
        }

        let payload: RedditListing = response
            .json()
            .await
            .map_err(|e| AppError::Provider(format!("Reddit payload malformed: {e}")))?;

        Ok(Self::normalize(payload))
    }
}

#[derive(Debug, Deserialize)]
struct RedditListing {
    data: Option<ListingData>,
}

#[derive(Debug, Deserialize)]
struct ListingData {
    #[serde(default)]
    children: Vec<ListingChild>,
}

#[derive(Debug, Deserialize)]
struct ListingChild {
    data: RedditPost,
}

#[derive(Debug, Deserialize)]
struct RedditPost {
    title: Option<String>,
    selftext: Option<String>,
    permalink: Option<String>,
    subreddit: Option<String>,
    score: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> RedditListing {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn normalize_maps_posts_with_permalink_and_score() {
        let payload = parse(json!({
            "data": {
                "children": [{
                    "data": {
                        "title": "Interesting thread",
                        "selftext": "Some discussion body",
                        "permalink": "/r/rust/comments/abc/interesting_thread/",
                        "subreddit": "rust",
                        "score": 128
                    }
                }]
            }
        }));

        let results = RedditProvider::normalize(payload);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].category, SourceCategory::Discussion);
        assert_eq!(results[0].source_label, "Reddit - r/rust");
        assert_eq!(results[0].score, Some(128));
        assert_eq!(
            results[0].url.as_deref(),
            Some("https://reddit.com/r/rust/comments/abc/interesting_thread/")
        );
    }

    #[test]
    fn normalize_truncates_long_selftext() {
        let payload = parse(json!({
            "data": {
                "children": [{
                    "data": {
                        "title": "Long post",
                        "selftext": "y".repeat(1000),
                        "subreddit": "askscience",
                        "score": 5
                    }
                }]
            }
        }));

        let results = RedditProvider::normalize(payload);
        assert_eq!(results[0].summary.chars().count(), 303);
        assert!(results[0].summary.ends_with("..."));
    }

    #[test]
    fn normalize_uses_placeholder_for_link_posts() {
        let payload = parse(json!({
            "data": {
                "children": [{
                    "data": { "title": "Link post", "selftext": "", "subreddit": "news" }
                }]
            }
        }));

        let results = RedditProvider::normalize(payload);
        assert_eq!(results[0].summary, "Community discussion thread");
    }

    #[test]
    fn normalize_caps_posts_at_three_and_drops_titleless() {
        let post = |title: &str| {
            json!({ "data": { "title": title, "selftext": "b", "subreddit": "x", "score": 1 } })
        };
        let payload = parse(json!({
            "data": {
                "children": [
                    post("a"),
                    { "data": { "selftext": "no title" } },
                    post("b"),
                    post("c"),
                    post("d")
                ]
            }
        }));

        // The cap applies to provider-returned order, before title filtering.
        let results = RedditProvider::normalize(payload);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].title, "a");
        assert_eq!(results[1].title, "b");
    }

    #[test]
    fn normalize_handles_empty_listing() {
        assert!(RedditProvider::normalize(parse(json!({}))).is_empty());
        assert!(RedditProvider::normalize(parse(json!({ "data": {} }))).is_empty());
    }
}
