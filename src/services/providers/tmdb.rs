/// TMDB (The Movie Database) v3 API provider
///
/// API Flow, per recommended movie:
/// 1. Details: /3/movie/{id} → title, poster path, overview, homepage, runtime
/// 2. Credits: /3/movie/{id}/credits → cast and crew
///
/// Both requests authenticate with the static `api_key` query parameter.
use crate::{
    error::{AppError, AppResult},
    models::{MovieId, TmdbCredits, TmdbMovie},
    services::providers::MetadataProvider,
};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;

const LANGUAGE: &str = "en-US";

#[derive(Clone)]
pub struct TmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl TmdbProvider {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    fn movie_url(&self, movie_id: MovieId) -> String {
        format!("{}/3/movie/{}", self.api_url, movie_id)
    }

    fn credits_url(&self, movie_id: MovieId) -> String {
        format!("{}/3/movie/{}/credits", self.api_url, movie_id)
    }

    /// Issues one authenticated GET and decodes the JSON body
    async fn get_json<T: DeserializeOwned>(&self, url: &str, movie_id: MovieId) -> AppResult<T> {
        let response = self
            .http_client
            .get(url)
            .query(&[("api_key", self.api_key.as_str()), ("language", LANGUAGE)])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                movie_id = movie_id,
                status = %status,
                body = %body,
                "TMDB request failed"
            );
            return Err(AppError::ExternalApi(format!(
                "TMDB API returned status {}: {}",
                status, body
            )));
        }

        let response_text = response.text().await?;
        tracing::debug!(movie_id = movie_id, response = %response_text, "Raw TMDB API response");

        serde_json::from_str(&response_text).map_err(|e| {
            tracing::error!(
                movie_id = movie_id,
                error = %e,
                "Failed to deserialize TMDB response"
            );
            AppError::ExternalApi(format!("Failed to parse TMDB response: {}", e))
        })
    }
}

#[async_trait::async_trait]
impl MetadataProvider for TmdbProvider {
    async fn fetch_movie(&self, movie_id: MovieId) -> AppResult<TmdbMovie> {
        let movie: TmdbMovie = self.get_json(&self.movie_url(movie_id), movie_id).await?;
        tracing::debug!(movie_id = movie_id, title = %movie.title, "Movie details fetched");
        Ok(movie)
    }

    async fn fetch_credits(&self, movie_id: MovieId) -> AppResult<TmdbCredits> {
        let credits: TmdbCredits = self.get_json(&self.credits_url(movie_id), movie_id).await?;
        tracing::debug!(
            movie_id = movie_id,
            cast = credits.cast.len(),
            crew = credits.crew.len(),
            "Movie credits fetched"
        );
        Ok(credits)
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}
