use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unexpected catalog shape: {0}")]
    UnexpectedShape(String),

    #[error("product not found: {0}")]
    ProductNotFound(String),

    #[error("catalog failed schema validation:\n{}", .0.join("\n"))]
    Schema(Vec<String>),
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown sort option \"{0}\"")]
pub struct ParseSortError(pub String);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown facet field \"{0}\"")]
pub struct ParseFacetFieldError(pub String);
