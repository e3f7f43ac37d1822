use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::engine::Recommendation;
use crate::error::{AppError, AppResult};

use super::AppState;

// Request types

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    pub user_id: u32,
    /// Signed so that a zero or negative count reaches validation instead of
    /// being rejected by deserialization.
    #[serde(default = "default_n_recommendations")]
    pub n_recommendations: i64,
}

fn default_n_recommendations() -> i64 {
    5
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Handler for the recommendations endpoint
///
/// The engine reports both "unknown user" and "no computable recommendations"
/// as an empty list; this layer collapses both into a 404.
pub async fn recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendationRequest>,
) -> AppResult<Json<Vec<Recommendation>>> {
    if request.n_recommendations < 1 {
        return Err(AppError::InvalidInput(
            "n_recommendations must be at least 1".to_string(),
        ));
    }

    let recommendations = state
        .engine
        .recommend(request.user_id, request.n_recommendations as usize);

    tracing::info!(
        user_id = request.user_id,
        requested = request.n_recommendations,
        returned = recommendations.len(),
        "Recommendation request served"
    );

    if recommendations.is_empty() {
        return Err(AppError::NotFound(format!(
            "no recommendations for user {}: unknown user or insufficient data",
            request.user_id
        )));
    }

    Ok(Json(recommendations))
}
