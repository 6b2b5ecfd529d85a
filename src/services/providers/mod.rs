/// Movie metadata provider abstraction
///
/// The recommendation flow only needs two lookups per movie: the movie record
/// itself and its cast/crew credits. Keeping them behind a trait lets the
/// HTTP client be swapped for a mock in tests.
use crate::{
    error::AppResult,
    models::{MovieId, TmdbCredits, TmdbMovie},
};

pub mod tmdb;

pub use tmdb::TmdbProvider;

/// Trait for movie metadata providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Fetch the movie record (title, poster path, overview, runtime...)
    async fn fetch_movie(&self, movie_id: MovieId) -> AppResult<TmdbMovie>;

    /// Fetch cast and crew credits
    async fn fetch_credits(&self, movie_id: MovieId) -> AppResult<TmdbCredits>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
