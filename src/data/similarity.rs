use std::path::Path;

use crate::error::{AppError, AppResult};

const F32_BYTES: usize = std::mem::size_of::<f32>();

/// Square similarity matrix stored row-major
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    dim: usize,
    scores: Vec<f32>,
}

impl SimilarityMatrix {
    /// Builds a matrix from nested rows, rejecting anything that is not square
    pub fn from_rows(rows: Vec<Vec<f32>>) -> AppResult<Self> {
        let dim = rows.len();
        let mut scores = Vec::with_capacity(dim * dim);

        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != dim {
                return Err(AppError::Artifact(format!(
                    "Similarity row {} has {} columns, expected {}",
                    i,
                    row.len(),
                    dim
                )));
            }
            scores.extend(row);
        }

        Ok(Self { dim, scores })
    }

    /// Decodes `dim * dim` little-endian f32 values
    pub fn from_le_bytes(bytes: &[u8], dim: usize) -> AppResult<Self> {
        let expected = dim * dim * F32_BYTES;
        if bytes.len() != expected {
            return Err(AppError::Artifact(format!(
                "Similarity matrix has {} bytes, expected {} for {}x{} f32",
                bytes.len(),
                expected,
                dim,
                dim
            )));
        }

        let scores = bytes
            .chunks_exact(F32_BYTES)
            .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect();

        Ok(Self { dim, scores })
    }

    /// Loads a matrix whose dimension must equal `dim`
    ///
    /// Files ending in `.json` hold nested arrays, anything else is raw
    /// row-major little-endian f32.
    pub fn load(path: impl AsRef<Path>, dim: usize) -> AppResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            AppError::Artifact(format!(
                "Failed to read similarity matrix {}: {}",
                path.display(),
                e
            ))
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let matrix = if is_json {
            let rows: Vec<Vec<f32>> = serde_json::from_slice(&bytes).map_err(|e| {
                AppError::Artifact(format!(
                    "Failed to parse similarity matrix {}: {}",
                    path.display(),
                    e
                ))
            })?;
            Self::from_rows(rows)?
        } else {
            Self::from_le_bytes(&bytes, dim)?
        };

        if matrix.dim != dim {
            return Err(AppError::Artifact(format!(
                "Similarity matrix is {}x{} but the catalog has {} movies",
                matrix.dim, matrix.dim, dim
            )));
        }

        Ok(matrix)
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Scores of `row` against every catalog row
    pub fn row(&self, row: usize) -> Option<&[f32]> {
        if row >= self.dim {
            return None;
        }
        let start = row * self.dim;
        Some(&self.scores[start..start + self.dim])
    }
}
