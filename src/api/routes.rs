use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::request_id::{make_span_with_request_id, request_id_middleware};

use super::{handlers, pages, AppState};

/// Creates the application router: the HTML page plus the JSON API
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/recommend", post(pages::recommend))
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", api_routes())
        .fallback(pages::not_found)
        .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}

/// API routes under /api/v1
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/movies", get(handlers::list_movies))
        .route("/movies/:title/similar", get(handlers::similar_movies))
        .route("/recommendations", post(handlers::recommend))
        .layer(CorsLayer::permissive())
}
