pub mod catalog;
pub mod similarity;

pub use catalog::Catalog;
pub use similarity::SimilarityMatrix;

use crate::error::AppResult;

/// Loads the catalog and its similarity matrix, checking they line up
pub fn load_artifacts(
    catalog_path: &str,
    similarity_path: &str,
) -> AppResult<(Catalog, SimilarityMatrix)> {
    let catalog = Catalog::load(catalog_path)?;
    let matrix = SimilarityMatrix::load(similarity_path, catalog.len())?;

    tracing::info!(
        movies = catalog.len(),
        catalog_path = %catalog_path,
        similarity_path = %similarity_path,
        "Loaded recommendation artifacts"
    );

    Ok((catalog, matrix))
}
