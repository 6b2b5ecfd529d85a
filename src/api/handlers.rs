use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{
    error::AppResult,
    middleware::request_id::RequestId,
    models::{CatalogEntry, MovieDetail, SimilarMovie},
};

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    pub title: String,
}

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub count: usize,
    pub movies: Vec<CatalogEntry>,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Every catalog movie, in dropdown order
pub async fn list_movies(State(state): State<AppState>) -> Json<CatalogResponse> {
    let catalog = state.recommender.catalog();
    Json(CatalogResponse {
        count: catalog.len(),
        movies: catalog.entries().to_vec(),
    })
}

/// Most similar catalog entries with their scores, no metadata lookups
pub async fn similar_movies(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> AppResult<Json<Vec<SimilarMovie>>> {
    let similar = state.recommender.similar(&title)?;
    Ok(Json(similar))
}

/// Full recommendation: selection plus metadata for every pick
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<RecommendationRequest>,
) -> AppResult<Json<Vec<MovieDetail>>> {
    tracing::info!(
        request_id = %request_id,
        title = %request.title,
        "Processing recommendation request"
    );

    let details = state.recommender.recommend(&request.title).await?;
    Ok(Json(details))
}
