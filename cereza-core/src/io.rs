use crate::error::CatalogError;
use crate::ingest::products_from_value;
use crate::models::Product;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Supplier of the full, unpaginated product collection.
pub trait ProductSource {
    fn fetch_all_products(&self) -> Result<Vec<Product>, CatalogError>;
}

/// A catalog exported to a JSON file.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    path: PathBuf,
}

impl JsonCatalog {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProductSource for JsonCatalog {
    fn fetch_all_products(&self) -> Result<Vec<Product>, CatalogError> {
        load_catalog(&self.path)
    }
}

/// In-memory source, handy for hosts that already hold the documents.
impl ProductSource for Vec<Product> {
    fn fetch_all_products(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.clone())
    }
}

/// Read a catalog file as raw JSON, without normalizing it.
pub fn load_catalog_value<P: AsRef<Path>>(path: P) -> Result<Value, CatalogError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&contents)?)
}

/// Load and normalize a catalog file
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<Product>, CatalogError> {
    let path = path.as_ref();
    let products = products_from_value(load_catalog_value(path)?)?;
    info!(path = %path.display(), count = products.len(), "loaded catalog");
    Ok(products)
}
