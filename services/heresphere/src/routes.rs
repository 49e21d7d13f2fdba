//! HereSphere service routes

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderName, HeaderValue},
    response::IntoResponse,
    routing::get,
};
use serde_json::json;

use crate::{error::ApiResult, state::AppState, video_data::build_video_data};

/// Protocol version HereSphere expects on every JSON response
const HERESPHERE_JSON_VERSION: (&str, &str) = ("heresphere-json-version", "1");

/// Create the router for the HereSphere service
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/heresphere/:video_id", get(video_data).post(video_data))
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "heresphere"
    }))
}

/// Video data for a single scene
pub async fn video_data(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let data = build_video_data(&state.stash_client, state.api_key.as_deref(), &video_id).await?;

    let (name, value) = HERESPHERE_JSON_VERSION;
    let header = (
        HeaderName::from_static(name),
        HeaderValue::from_static(value),
    );

    Ok(([header], Json(data)))
}
