use crate::{
    types::{ResearchRequest, ResearchResponse, Result},
    AppState,
};
use axum::{extract::State, Json};
use std::time::Instant;

/// Run one multi-source research pass on a topic
#[utoipa::path(
    post,
    path = "/api/research",
    request_body = ResearchRequest,
    responses(
        (status = 200, description = "Research completed", body = ResearchResponse),
        (status = 400, description = "Missing or blank topic")
    ),
    tag = "research"
)]
pub async fn research(
    State(state): State<AppState>,
    Json(payload): Json<ResearchRequest>,
) -> Result<Json<ResearchResponse>> {
    let start = Instant::now();

    let report = state.engine.perform_research(&payload.topic).await?;

    let duration = start.elapsed();

    Ok(Json(ResearchResponse {
        summary: report.summary,
        citations: report.citations,
        insight: report.insight,
        source_count: report.source_count,
        duration_ms: duration.as_millis() as u64,
    }))
}
