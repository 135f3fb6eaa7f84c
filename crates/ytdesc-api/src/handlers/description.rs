//! Description and link extraction handlers.

use axum::extract::State;
use axum::Json;
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};
use tracing::info;
use ytdesc_models::{extract_video_id, format_links_text, LinkRecord};
use ytdesc_youtube::fetch_description;

use crate::error::{ApiError, ApiResult};
use crate::metrics;
use crate::state::AppState;

/// Request body shared by both endpoints.
#[derive(Debug, Deserialize)]
pub struct DescriptionRequest {
    pub url: String,
}

#[derive(Serialize)]
pub struct DescriptionResponse {
    pub description: String,
}

#[derive(Serialize)]
pub struct CompaniesLinksResponse {
    pub description: String,
    pub companies_links: Vec<LinkRecord>,
    /// One `Company: X, Link: Y` line per record
    pub text: String,
}

/// Resolve a video URL to its description.
async fn load_description(state: &AppState, url: &str) -> ApiResult<String> {
    let video_id = extract_video_id(url)?;
    info!(video_id = %video_id, "Fetching video description");
    Ok(fetch_description(state.metadata.as_ref(), &video_id).await?)
}

/// Get the description of a YouTube video.
pub async fn get_description(
    State(state): State<AppState>,
    WithRejection(Json(request), _): WithRejection<Json<DescriptionRequest>, ApiError>,
) -> ApiResult<Json<DescriptionResponse>> {
    let description = load_description(&state, &request.url).await?;
    Ok(Json(DescriptionResponse { description }))
}

/// Get the description of a YouTube video along with the links it contains.
pub async fn extract_companies_links_txt(
    State(state): State<AppState>,
    WithRejection(Json(request), _): WithRejection<Json<DescriptionRequest>, ApiError>,
) -> ApiResult<Json<CompaniesLinksResponse>> {
    let description = load_description(&state, &request.url).await?;

    let companies_links = state.link_extractor.extract(&description);
    metrics::record_links_extracted(companies_links.len());
    let text = format_links_text(&companies_links);

    Ok(Json(CompaniesLinksResponse {
        description,
        companies_links,
        text,
    }))
}
