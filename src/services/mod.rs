pub mod details;
pub mod providers;
pub mod recommendations;

pub use providers::{MetadataProvider, TmdbProvider};
pub use recommendations::{select_similar, Recommender};
