use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub providers: ProvidersConfig,
    pub research: ResearchConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Provider credentials and endpoints. Base URLs default to the real
/// services and are overridable, which also lets tests point adapters at
/// a local mock server.
#[derive(Debug, Clone, Deserialize)]
pub struct ProvidersConfig {
    pub news_api_key: Option<String>,
    pub serp_api_key: Option<String>,
    pub google_api_key: Option<String>,
    pub google_search_engine_id: Option<String>,
    pub wikipedia_url: String,
    pub news_url: String,
    pub serp_url: String,
    pub google_url: String,
    pub reddit_url: String,
    pub duckduckgo_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResearchConfig {
    /// Upper bound on each provider call, in seconds. One unresponsive
    /// provider can never delay the aggregate past this bound.
    pub provider_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            news_api_key: None,
            serp_api_key: None,
            google_api_key: None,
            google_search_engine_id: None,
            wikipedia_url: "https://en.wikipedia.org".to_string(),
            news_url: "https://newsapi.org".to_string(),
            serp_url: "https://serpapi.com".to_string(),
            google_url: "https://www.googleapis.com".to_string(),
            reddit_url: "https://www.reddit.com".to_string(),
            duckduckgo_url: "https://api.duckduckgo.com".to_string(),
        }
    }
}

impl Default for ResearchConfig {
    fn default() -> Self {
        Self {
            provider_timeout_secs: 10,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            providers: ProvidersConfig::default(),
            research: ResearchConfig::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let defaults = ProvidersConfig::default();

        Ok(Config {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "3000".to_string())
                    .parse()?,
            },
            providers: ProvidersConfig {
                news_api_key: env::var("NEWS_API_KEY").ok(),
                serp_api_key: env::var("SERP_API_KEY").ok(),
                google_api_key: env::var("GOOGLE_API_KEY").ok(),
                google_search_engine_id: env::var("GOOGLE_SEARCH_ENGINE_ID").ok(),
                wikipedia_url: env::var("WIKIPEDIA_URL").unwrap_or(defaults.wikipedia_url),
                news_url: env::var("NEWSAPI_URL").unwrap_or(defaults.news_url),
                serp_url: env::var("SERPAPI_URL").unwrap_or(defaults.serp_url),
                google_url: env::var("GOOGLE_API_URL").unwrap_or(defaults.google_url),
                reddit_url: env::var("REDDIT_URL").unwrap_or(defaults.reddit_url),
                duckduckgo_url: env::var("DUCKDUCKGO_URL").unwrap_or(defaults.duckduckgo_url),
            },
            research: ResearchConfig {
                provider_timeout_secs: env::var("PROVIDER_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()?,
            },
        })
    }
}
