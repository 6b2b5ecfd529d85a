use std::sync::Arc;

use crate::{
    data::{Catalog, SimilarityMatrix},
    error::{AppError, AppResult},
    models::{MovieDetail, SimilarMovie},
    services::{details, providers::MetadataProvider},
};

/// Default number of recommendations per query
pub const DEFAULT_RECOMMENDATION_COUNT: usize = 5;

/// Ranking key for a score; NaN sorts below every real score
fn rank_key(score: f32) -> f32 {
    if score.is_nan() {
        f32::NEG_INFINITY
    } else {
        score
    }
}

/// Selects the `count` catalog entries most similar to `title`
///
/// The similarity row of the first catalog entry titled `title` is sorted
/// descending with a stable sort, so equal scores keep catalog order. The
/// query movie itself is always excluded.
pub fn select_similar(
    catalog: &Catalog,
    matrix: &SimilarityMatrix,
    title: &str,
    count: usize,
) -> AppResult<Vec<SimilarMovie>> {
    if title.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "Movie title cannot be empty".to_string(),
        ));
    }

    let query_row = catalog
        .position(title)
        .ok_or_else(|| AppError::NotFound(format!("Movie '{}' is not in the catalog", title)))?;

    let scores = matrix.row(query_row).ok_or_else(|| {
        AppError::Internal(format!(
            "No similarity row {} for '{}' (matrix dimension {})",
            query_row,
            title,
            matrix.dim()
        ))
    })?;

    let mut ranked: Vec<(usize, f32)> = scores.iter().copied().enumerate().collect();
    ranked.sort_by(|a, b| rank_key(b.1).total_cmp(&rank_key(a.1)));

    ranked
        .into_iter()
        .filter(|(row, _)| *row != query_row)
        .take(count)
        .map(|(row, score)| {
            catalog
                .get(row)
                .map(|entry| SimilarMovie {
                    movie_id: entry.movie_id,
                    title: entry.title.clone(),
                    score,
                })
                .ok_or_else(|| {
                    AppError::Internal(format!("Similarity column {} has no catalog entry", row))
                })
        })
        .collect()
}

/// Nearest-neighbour recommender over the precomputed artifacts
///
/// Combines the selector with the metadata provider: pick the most similar
/// titles, then enrich each one.
#[derive(Clone)]
pub struct Recommender {
    catalog: Arc<Catalog>,
    matrix: Arc<SimilarityMatrix>,
    provider: Arc<dyn MetadataProvider>,
    image_base_url: String,
    count: usize,
}

impl Recommender {
    pub fn new(
        catalog: Arc<Catalog>,
        matrix: Arc<SimilarityMatrix>,
        provider: Arc<dyn MetadataProvider>,
        image_base_url: String,
    ) -> Self {
        Self {
            catalog,
            matrix,
            provider,
            image_base_url,
            count: DEFAULT_RECOMMENDATION_COUNT,
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Similar catalog entries without any network calls
    pub fn similar(&self, title: &str) -> AppResult<Vec<SimilarMovie>> {
        select_similar(&self.catalog, &self.matrix, title, self.count)
    }

    /// Similar movies enriched with metadata; fails as a whole on any fetch error
    pub async fn recommend(&self, title: &str) -> AppResult<Vec<MovieDetail>> {
        let similar = self.similar(title)?;

        tracing::info!(
            title = %title,
            selected = similar.len(),
            "Selected similar movies, fetching details"
        );

        let details =
            details::fetch_details(self.provider.as_ref(), &similar, &self.image_base_url).await?;

        tracing::info!(title = %title, recommendations = details.len(), "Recommendation completed");

        Ok(details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CatalogEntry, TmdbCredits, TmdbMovie};
    use crate::services::providers::MockMetadataProvider;

    /// Eight movies; row 0 ("Query") is the usual query
    fn fixture() -> (Catalog, SimilarityMatrix) {
        let catalog = Catalog::new(
            (0..8)
                .map(|i| {
                    let title = if i == 0 {
                        "Query".to_string()
                    } else {
                        format!("Movie {}", i)
                    };
                    CatalogEntry::new(100 + i as u64, title)
                })
                .collect(),
        );

        let mut rows = vec![vec![0.0f32; 8]; 8];
        for (i, row) in rows.iter_mut().enumerate() {
            row[i] = 1.0;
        }
        rows[0] = vec![1.0, 0.1, 0.9, 0.3, 0.7, 0.5, 0.2, 0.8];

        (catalog, SimilarityMatrix::from_rows(rows).unwrap())
    }

    fn ids(movies: &[SimilarMovie]) -> Vec<u64> {
        movies.iter().map(|m| m.movie_id).collect()
    }

    #[test]
    fn test_returns_five_by_descending_similarity() {
        let (catalog, matrix) = fixture();
        let similar = select_similar(&catalog, &matrix, "Query", 5).unwrap();

        assert_eq!(similar.len(), 5);
        assert_eq!(ids(&similar), vec![102, 107, 104, 105, 103]);
        assert!(!ids(&similar).contains(&100));
        assert!(similar.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_ties_are_stable_in_catalog_order() {
        let (catalog, _) = fixture();
        let mut rows = vec![vec![0.0f32; 8]; 8];
        rows[0] = vec![1.0, 0.4, 0.6, 0.6, 0.4, 0.6, 0.1, 0.0];
        let matrix = SimilarityMatrix::from_rows(rows).unwrap();

        let first = select_similar(&catalog, &matrix, "Query", 5).unwrap();
        let second = select_similar(&catalog, &matrix, "Query", 5).unwrap();

        assert_eq!(ids(&first), vec![102, 103, 105, 101, 104]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_self_excluded_even_when_tied_with_neighbour() {
        let (catalog, _) = fixture();
        let mut rows = vec![vec![0.0f32; 8]; 8];
        rows[3] = vec![1.0, 0.2, 0.3, 1.0, 0.0, 0.0, 0.0, 0.0];
        let matrix = SimilarityMatrix::from_rows(rows).unwrap();

        let similar = select_similar(&catalog, &matrix, "Movie 3", 5).unwrap();
        assert_eq!(ids(&similar)[0], 100);
        assert!(!ids(&similar).contains(&103));
    }

    #[test]
    fn test_nan_scores_rank_last() {
        let (catalog, _) = fixture();
        let mut rows = vec![vec![0.0f32; 8]; 8];
        rows[0] = vec![1.0, f32::NAN, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7];
        let matrix = SimilarityMatrix::from_rows(rows).unwrap();

        let similar = select_similar(&catalog, &matrix, "Query", 7).unwrap();
        assert_eq!(similar.last().map(|m| m.movie_id), Some(101));
    }

    #[test]
    fn test_small_catalog_returns_everyone_else() {
        let catalog = Catalog::new(vec![
            CatalogEntry::new(1, "A"),
            CatalogEntry::new(2, "B"),
            CatalogEntry::new(3, "C"),
        ]);
        let matrix = SimilarityMatrix::from_rows(vec![
            vec![1.0, 0.2, 0.8],
            vec![0.2, 1.0, 0.5],
            vec![0.8, 0.5, 1.0],
        ])
        .unwrap();

        let similar = select_similar(&catalog, &matrix, "A", 5).unwrap();
        assert_eq!(ids(&similar), vec![3, 2]);
    }

    #[test]
    fn test_unknown_title_is_not_found() {
        let (catalog, matrix) = fixture();
        let result = select_similar(&catalog, &matrix, "Nope", 5);
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_empty_title_is_invalid() {
        let (catalog, matrix) = fixture();
        let result = select_similar(&catalog, &matrix, "  ", 5);
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_recommend_enriches_in_similarity_order() {
        let (catalog, matrix) = fixture();
        let mut provider = MockMetadataProvider::new();
        provider.expect_fetch_movie().times(5).returning(|id| {
            Ok(TmdbMovie {
                title: format!("Title {}", id),
                poster_path: None,
                overview: None,
                homepage: None,
                runtime: Some(90),
            })
        });
        provider.expect_fetch_credits().times(5).returning(|_| {
            Ok(TmdbCredits {
                cast: vec![],
                crew: vec![],
            })
        });

        let recommender = Recommender::new(
            Arc::new(catalog),
            Arc::new(matrix),
            Arc::new(provider),
            "https://img.local".to_string(),
        );

        let details = recommender.recommend("Query").await.unwrap();
        let titles: Vec<&str> = details.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Title 102", "Title 107", "Title 104", "Title 105", "Title 103"]
        );
    }

    #[tokio::test]
    async fn test_recommend_unknown_title_makes_no_calls() {
        let (catalog, matrix) = fixture();
        let mut provider = MockMetadataProvider::new();
        provider.expect_fetch_movie().times(0);
        provider.expect_fetch_credits().times(0);

        let recommender = Recommender::new(
            Arc::new(catalog),
            Arc::new(matrix),
            Arc::new(provider),
            "https://img.local".to_string(),
        )
        .with_count(3);

        let result = recommender.recommend("Missing").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
