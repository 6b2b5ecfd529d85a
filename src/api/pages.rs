use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Extension, Form,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::{
    error::SESSION_EXPIRED_MESSAGE,
    middleware::request_id::RequestId,
    models::MovieDetail,
};

use super::render::{render_page, PageView};
use super::session::Session;
use super::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// Changes the dropdown selection without recommending
    pub movie: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RecommendForm {
    pub movie: String,
}

fn page(
    state: &AppState,
    selected: Option<&str>,
    recommendations: Option<&[MovieDetail]>,
    message: Option<&str>,
) -> Html<String> {
    let view = PageView {
        titles: state.recommender.catalog().titles().collect(),
        selected,
        recommendations,
        message,
    };
    Html(render_page(&view))
}

/// GET / — shows the dropdown and, if one exists, the last computed list
///
/// Never computes recommendations or calls the metadata API.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
    jar: CookieJar,
) -> Response {
    let (session_id, mut session, jar) = state.sessions.resolve(jar).await;

    // Only catalog titles can be selected
    let movie = query
        .movie
        .filter(|title| state.recommender.catalog().position(title).is_some());

    if let Some(movie) = movie {
        session = state
            .sessions
            .update(session_id, |s| s.selected_title = Some(movie))
            .await;
    }

    tracing::debug!(
        session_id = %session_id,
        has_recommendations = session.has_recommendations(),
        connection = session.connection,
        "Rendering page"
    );

    let Session {
        selected_title,
        recommendations,
        ..
    } = session;

    let html = page(
        &state,
        selected_title.as_deref(),
        recommendations.as_deref(),
        None,
    );
    (jar, html).into_response()
}

/// POST /recommend — computes a fresh list for the chosen movie
///
/// A metadata failure shows only the expiry message; the previously stored
/// list is kept for later page loads.
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    jar: CookieJar,
    Form(form): Form<RecommendForm>,
) -> Response {
    let (session_id, _, jar) = state.sessions.resolve(jar).await;
    let movie = form.movie;

    tracing::info!(
        request_id = %request_id,
        session_id = %session_id,
        title = %movie,
        "Recommend clicked"
    );

    state
        .sessions
        .update(session_id, |s| s.selected_title = Some(movie.clone()))
        .await;

    match state.recommender.recommend(&movie).await {
        Ok(details) => {
            let html = page(&state, Some(&movie), Some(details.as_slice()), None);
            state
                .sessions
                .update(session_id, |s| {
                    s.recommendations = Some(details);
                    s.connection = true;
                })
                .await;
            (jar, html).into_response()
        }
        Err(e) if e.is_fetch_failure() => {
            tracing::error!(
                request_id = %request_id,
                session_id = %session_id,
                error = %e,
                "Recommendation aborted"
            );
            state
                .sessions
                .update(session_id, |s| s.connection = false)
                .await;
            let html = page(&state, Some(&movie), None, Some(SESSION_EXPIRED_MESSAGE));
            (jar, html).into_response()
        }
        Err(e) => {
            tracing::warn!(request_id = %request_id, error = %e, "Recommendation rejected");
            let status = e.status_code();
            let message = e.user_message();
            let html = page(&state, Some(&movie), None, Some(&message));
            (status, jar, html).into_response()
        }
    }
}

/// Fallback for unknown paths
pub async fn not_found() -> (StatusCode, Html<&'static str>) {
    (StatusCode::NOT_FOUND, Html("<h1>Not Found</h1>"))
}
