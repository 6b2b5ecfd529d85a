use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Message shown whenever a detail fetch aborts a recommendation
pub const SESSION_EXPIRED_MESSAGE: &str = "Session Expire -- Please Try Another Time";

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(reqwest::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("External API error: {0}")]
    ExternalApi(String),

    #[error("Artifact error: {0}")]
    Artifact(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Request URLs carry the TMDB `api_key` query parameter, so they are
/// stripped before the error can reach a log line or response.
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::HttpClient(err.without_url())
    }
}

impl AppError {
    /// True for failures of the remote metadata API, which abort a recommendation
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, AppError::HttpClient(_) | AppError::ExternalApi(_))
    }

    /// Text safe to show to an end user
    pub fn user_message(&self) -> String {
        match self {
            AppError::HttpClient(_) | AppError::ExternalApi(_) => {
                SESSION_EXPIRED_MESSAGE.to_string()
            }
            AppError::NotFound(msg) | AppError::InvalidInput(msg) => msg.clone(),
            AppError::Artifact(_) | AppError::Internal(_) => self.to_string(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::HttpClient(_) | AppError::ExternalApi(_) => StatusCode::BAD_GATEWAY,
            AppError::Artifact(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.is_fetch_failure() {
            tracing::error!(error = %self, "Recommendation aborted by detail fetch failure");
        }

        let body = Json(json!({
            "error": self.user_message()
        }));

        (self.status_code(), body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
