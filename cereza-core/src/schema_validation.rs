use crate::error::CatalogError;
use crate::io::load_catalog_value;
use serde_json::Value;
use std::path::Path;

/// Validate a raw catalog document against a JSON schema.
///
/// Every violation is reported, in document order, as
/// `"<message> at <pointer>"`. Violations inside a product record also name
/// the product's position in the export.
pub fn validate_against_schema(schema: &Value, data: &Value) -> Result<(), Vec<String>> {
    let validator = jsonschema::validator_for(schema)
        .map_err(|e| vec![format!("Schema compilation error: {}", e)])?;

    let errors: Vec<String> = validator
        .iter_errors(data)
        .map(|error| {
            let pointer = error.instance_path.to_string();
            format!("{} at {}", error, describe_location(&pointer))
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// `""` is the document root; `/data/3/price` is product #3.
fn describe_location(pointer: &str) -> String {
    if pointer.is_empty() {
        return "root".to_string();
    }

    let product_index = pointer
        .split('/')
        .skip(1)
        .find_map(|segment| segment.parse::<usize>().ok());

    match product_index {
        Some(index) => format!("{} (product #{})", pointer, index),
        None => pointer.to_string(),
    }
}

/// Check a raw catalog file against a schema file before ingestion.
pub fn validate_catalog_file<S, D>(schema_path: S, data_path: D) -> Result<(), CatalogError>
where
    S: AsRef<Path>,
    D: AsRef<Path>,
{
    let schema = load_catalog_value(schema_path)?;
    let data = load_catalog_value(data_path)?;
    validate_against_schema(&schema, &data).map_err(CatalogError::Schema)
}
