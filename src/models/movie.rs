use serde::{Deserialize, Serialize};

/// TMDB movie identifier as stored in the catalog
pub type MovieId = u64;

/// One row of the movie catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogEntry {
    pub movie_id: MovieId,
    pub title: String,
}

impl CatalogEntry {
    pub fn new(movie_id: MovieId, title: impl Into<String>) -> Self {
        Self {
            movie_id,
            title: title.into(),
        }
    }
}

/// A catalog entry selected as similar to a query movie
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SimilarMovie {
    pub movie_id: MovieId,
    pub title: String,
    pub score: f32,
}

/// Enriched metadata for a recommended movie
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieDetail {
    /// Full poster URL, absent when the API has no poster for the movie
    pub poster: Option<String>,
    pub title: String,
    pub overview: Option<String>,
    pub homepage: Option<String>,
    /// Up to three leading cast members, billing order
    pub actors: Vec<String>,
    /// Every crew member credited as "Director", credit order
    pub directors: Vec<String>,
    /// Runtime in minutes
    pub runtime: Option<u32>,
}
