use crate::core::catalog::parse_catalog;
use crate::core::{Catalog, CatalogSource};
use crate::utils::error::Result;
use std::fs::File;
use std::path::PathBuf;

/// Catalog read from a CSV file on disk.
#[derive(Debug, Clone)]
pub struct CsvCatalogFile {
    path: PathBuf,
    currency_symbol: String,
}

impl CsvCatalogFile {
    pub fn new(path: impl Into<PathBuf>, currency_symbol: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            currency_symbol: currency_symbol.into(),
        }
    }
}

impl CatalogSource for CsvCatalogFile {
    fn load(&self) -> Result<Catalog> {
        tracing::debug!("Reading catalog from {}", self.path.display());

        // file is closed when `parse_catalog` drops the reader
        let file = File::open(&self.path)?;
        let catalog = parse_catalog(file, &self.currency_symbol)?;

        tracing::info!(
            "Loaded {} cookie(s) from {}",
            catalog.len(),
            self.path.display()
        );
        Ok(catalog)
    }
}
