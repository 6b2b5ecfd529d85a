use crate::{
    error::AppResult,
    models::{MovieDetail, MovieId, SimilarMovie},
    services::providers::MetadataProvider,
};

/// Fetches and reshapes the metadata of one movie
///
/// The details and credits requests run one after the other; either failing
/// fails the whole lookup.
pub async fn fetch_movie_detail(
    provider: &dyn MetadataProvider,
    movie_id: MovieId,
    image_base_url: &str,
) -> AppResult<MovieDetail> {
    let movie = provider.fetch_movie(movie_id).await?;
    let credits = provider.fetch_credits(movie_id).await?;

    Ok(MovieDetail::from_tmdb(movie, &credits, image_base_url))
}

/// Enriches every selected movie, in order, stopping at the first failure
///
/// Never returns a partial list.
pub async fn fetch_details(
    provider: &dyn MetadataProvider,
    movies: &[SimilarMovie],
    image_base_url: &str,
) -> AppResult<Vec<MovieDetail>> {
    let mut details = Vec::with_capacity(movies.len());

    for movie in movies {
        let detail = fetch_movie_detail(provider, movie.movie_id, image_base_url)
            .await
            .map_err(|e| {
                tracing::warn!(
                    movie_id = movie.movie_id,
                    title = %movie.title,
                    fetched = details.len(),
                    error = %e,
                    "Detail fetch failed, aborting recommendation"
                );
                e
            })?;
        details.push(detail);
    }

    Ok(details)
}
