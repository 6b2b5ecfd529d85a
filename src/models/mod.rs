pub mod movie;
pub mod tmdb;

pub use movie::{CatalogEntry, MovieDetail, MovieId, SimilarMovie};
pub use tmdb::{TmdbCastMember, TmdbCredits, TmdbCrewMember, TmdbMovie};
