use cereza_core::CatalogError;
use std::path::Path;

/// Map catalog loading errors to user-friendly messages
/// Returns (title, message, details)
pub fn map_catalog_load_error(error: &CatalogError, path: &Path) -> (String, String, String) {
    match error {
        CatalogError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound => (
            "File Not Found".to_string(),
            "The catalog file could not be found.".to_string(),
            format!(
                "Path: {}\n\nSet CEREZA_CATALOG or pass --catalog with an exported product file.",
                path.display()
            ),
        ),
        CatalogError::Io { source, .. }
            if source.kind() == std::io::ErrorKind::PermissionDenied =>
        {
            (
                "Permission Denied".to_string(),
                "Permission denied.".to_string(),
                format!("You don't have permission to read this file:\n{}", path.display()),
            )
        }
        CatalogError::Json(e) => (
            "Invalid Catalog".to_string(),
            "The catalog file is not valid JSON.".to_string(),
            e.to_string(),
        ),
        CatalogError::UnexpectedShape(reason) => (
            "Invalid Catalog".to_string(),
            "The catalog file does not contain a product list.".to_string(),
            reason.clone(),
        ),
        CatalogError::Schema(errors) => (
            "Validation Error".to_string(),
            "The catalog file does not match its schema.".to_string(),
            errors.join("\n"),
        ),
        other => (
            "Error Loading Catalog".to_string(),
            "Failed to load the product catalog.".to_string(),
            other.to_string(),
        ),
    }
}

/// Map a failed product lookup to a user-friendly message
pub fn map_lookup_error(error: &CatalogError) -> (String, String, String) {
    match error {
        CatalogError::ProductNotFound(id) => (
            "Product Not Found".to_string(),
            format!("No product has id '{}'.", id),
            "Run `cereza list` to see product ids.".to_string(),
        ),
        other => (
            "Lookup Failed".to_string(),
            "The product lookup failed.".to_string(),
            other.to_string(),
        ),
    }
}
