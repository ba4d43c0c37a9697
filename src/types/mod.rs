//! Core types (results, bundles, reports, errors).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ============= Source Types =============

/// Category of an information source.
///
/// The category is the sole grouping key for report sections and citation
/// groups. `Manual` is reserved for the synthetic fallback citations and
/// never appears as a bundle slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SourceCategory {
    Encyclopedia,
    News,
    Web,
    Discussion,
    Knowledge,
    Manual,
}

impl SourceCategory {
    /// The fixed category order used for report sections and citations,
    /// independent of provider completion order.
    pub const ORDERED: [SourceCategory; 5] = [
        SourceCategory::Encyclopedia,
        SourceCategory::News,
        SourceCategory::Web,
        SourceCategory::Discussion,
        SourceCategory::Knowledge,
    ];

    /// Section heading used in the synthesized summary.
    pub fn section_heading(&self) -> &'static str {
        match self {
            SourceCategory::Encyclopedia => "Encyclopedia Knowledge",
            SourceCategory::News => "Latest News Coverage",
            SourceCategory::Web => "Web Search Results",
            SourceCategory::Discussion => "Community Insights",
            SourceCategory::Knowledge => "Quick Facts",
            SourceCategory::Manual => "Suggested Searches",
        }
    }

    /// Human-readable group label for citation lists.
    pub fn group_label(&self) -> &'static str {
        match self {
            SourceCategory::Encyclopedia => "Encyclopedia Sources",
            SourceCategory::News => "News Articles",
            SourceCategory::Web => "Web Results",
            SourceCategory::Discussion => "Community Discussions",
            SourceCategory::Knowledge => "Knowledge Base",
            SourceCategory::Manual => "Suggested Searches",
        }
    }
}

/// One normalized item from one provider.
///
/// Invariant: `title` is never empty. Provider items without a usable
/// title are dropped during normalization, not defaulted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SourceResult {
    pub title: String,
    /// May be empty when the provider omits a body.
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub category: SourceCategory,
    /// Human-readable provider, outlet, or subreddit name.
    pub source_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    /// Community vote count, where the provider reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<i64>,
}

/// The complete set of per-provider outcomes for one research request.
///
/// One slot per configured provider, in the fixed category order. An empty
/// slot means the provider failed, timed out, or returned nothing. The
/// aggregator writes each slot exactly once; adapters never touch a shared
/// bundle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceBundle {
    encyclopedia: Vec<SourceResult>,
    news: Vec<SourceResult>,
    web: Vec<SourceResult>,
    discussion: Vec<SourceResult>,
    knowledge: Vec<SourceResult>,
}

impl SourceBundle {
    /// Create an empty bundle with every slot absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Write the slot for `category`. `Manual` is synthesized downstream
    /// and has no slot; writes to it are ignored.
    pub fn insert(&mut self, category: SourceCategory, items: Vec<SourceResult>) {
        match category {
            SourceCategory::Encyclopedia => self.encyclopedia = items,
            SourceCategory::News => self.news = items,
            SourceCategory::Web => self.web = items,
            SourceCategory::Discussion => self.discussion = items,
            SourceCategory::Knowledge => self.knowledge = items,
            SourceCategory::Manual => {}
        }
    }

    /// Items for one category.
    pub fn get(&self, category: SourceCategory) -> &[SourceResult] {
        match category {
            SourceCategory::Encyclopedia => &self.encyclopedia,
            SourceCategory::News => &self.news,
            SourceCategory::Web => &self.web,
            SourceCategory::Discussion => &self.discussion,
            SourceCategory::Knowledge => &self.knowledge,
            SourceCategory::Manual => &[],
        }
    }

    /// Whether a category contributed at least one item.
    pub fn contributes(&self, category: SourceCategory) -> bool {
        !self.get(category).is_empty()
    }

    /// Iterate slots in the fixed category order, regardless of the order
    /// in which providers completed.
    pub fn iter(&self) -> impl Iterator<Item = (SourceCategory, &[SourceResult])> {
        SourceCategory::ORDERED
            .into_iter()
            .map(|category| (category, self.get(category)))
    }

    /// Number of categories with at least one item.
    pub fn contributing_sources(&self) -> usize {
        self.iter().filter(|(_, items)| !items.is_empty()).count()
    }

    /// True when every provider slot is absent.
    pub fn is_empty(&self) -> bool {
        self.contributing_sources() == 0
    }
}

// ============= Report Types =============

/// A single citation entry in a synthesized report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Citation {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub category: SourceCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_label: Option<String>,
}

/// Output of synthesis: grouped summary, flat ordered citations, and a
/// derived insight narrative.
///
/// The summary is plain narrative text with per-category headings; markup
/// rendering is the presenter's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Report {
    pub summary: String,
    pub citations: Vec<Citation>,
    pub insight: String,
    /// Number of provider categories that contributed at least one item.
    pub source_count: usize,
}

// ============= API Request/Response Types =============

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ResearchRequest {
    /// Topic to research. Defaults to empty when omitted so a missing
    /// field surfaces as the same validation error as a blank one.
    #[serde(default)]
    pub topic: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ResearchResponse {
    pub summary: String,
    pub citations: Vec<Citation>,
    pub insight: String,
    pub source_count: usize,
    pub duration_ms: u64,
}

// ============= Error Types =============

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::InvalidInput(msg) => (axum::http::StatusCode::BAD_REQUEST, msg),
            AppError::Provider(msg) => (axum::http::StatusCode::BAD_GATEWAY, msg),
            AppError::Config(msg) => (axum::http::StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::Internal(msg) => (axum::http::StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = serde_json::json!({
            "error": message
        });

        (status, axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
