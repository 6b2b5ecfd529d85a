use std::collections::HashMap;
use std::path::Path;

use crate::{
    error::{AppError, AppResult},
    models::CatalogEntry,
};

/// In-memory movie catalog, row order matches the similarity matrix
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    /// Title → first row holding that title
    index: HashMap<String, usize>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        let mut index = HashMap::with_capacity(entries.len());
        for (row, entry) in entries.iter().enumerate() {
            index.entry(entry.title.clone()).or_insert(row);
        }

        Self { entries, index }
    }

    /// Loads a JSON array of `{movie_id, title}` objects
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AppError::Artifact(format!("Failed to read catalog {}: {}", path.display(), e))
        })?;

        let entries: Vec<CatalogEntry> = serde_json::from_str(&raw).map_err(|e| {
            AppError::Artifact(format!("Failed to parse catalog {}: {}", path.display(), e))
        })?;

        if entries.is_empty() {
            return Err(AppError::Artifact(format!(
                "Catalog {} contains no movies",
                path.display()
            )));
        }

        let catalog = Self::new(entries);

        if catalog.index.len() != catalog.len() {
            tracing::warn!(
                rows = catalog.len(),
                distinct_titles = catalog.index.len(),
                "Catalog has duplicate titles, lookups use the first occurrence"
            );
        }

        Ok(catalog)
    }

    /// Row of the first entry with exactly this title
    pub fn position(&self, title: &str) -> Option<usize> {
        self.index.get(title).copied()
    }

    pub fn get(&self, row: usize) -> Option<&CatalogEntry> {
        self.entries.get(row)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.title.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
