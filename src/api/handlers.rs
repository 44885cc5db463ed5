use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Extension, Json,
};
use serde_json::{json, Value};

use crate::{
    error::AppResult,
    middleware::RequestId,
    models::{Recommendation, RecommendationRequest},
};

use super::AppState;

/// Service banner
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "LeetGuide NLP Service is running!" }))
}

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Handler for recommendations endpoint
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<RecommendationRequest>, JsonRejection>,
) -> AppResult<Json<Vec<Recommendation>>> {
    let Json(request) = payload?;

    tracing::info!(
        request_id = %request_id,
        username = %request.username,
        topic = request.topic_filter().unwrap_or("Any"),
        difficulty = request.difficulty_filter().unwrap_or("Any"),
        ai_enabled = state.engine.is_ai_enabled(),
        "Processing recommendation request"
    );

    let recommendations = state.engine.dispatch(&request).await?;

    tracing::info!(
        request_id = %request_id,
        count = recommendations.len(),
        "Recommendations completed"
    );

    Ok(Json(recommendations))
}
