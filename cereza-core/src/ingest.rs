//! Ingestion adapter from upstream product documents to [`Product`].
//!
//! Upstream records drift in shape: `title` or `name`, `id` or `itemID`,
//! prices stored as numbers or as form strings, brands and categories as
//! plain labels or `{ name }` objects, timestamps as ISO strings or
//! `{ seconds, nanoseconds }` maps. All of that is resolved here, once, so the
//! filter engine only ever sees the canonical shape.

use crate::error::CatalogError;
use crate::models::{Product, ProductStatus, Review};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::{Map, Value};
use tracing::warn;

/// Normalize every record of a catalog document.
///
/// Accepts a bare array, `{"data": [...]}`, `{"data": {"data": [...]}}` or
/// `{"products": [...]}`. Records that are not JSON objects are skipped.
///
/// # Errors
///
/// Returns [`CatalogError::UnexpectedShape`] when no product array can be
/// located in the document.
pub fn products_from_value(document: Value) -> Result<Vec<Product>, CatalogError> {
    let records = match document {
        Value::Array(records) => records,
        Value::Object(mut root) => {
            let inner = root
                .remove("products")
                .or_else(|| root.remove("data"))
                .ok_or_else(|| {
                    CatalogError::UnexpectedShape(
                        "expected a top-level array or a \"data\"/\"products\" key".to_string(),
                    )
                })?;
            return products_from_value(inner);
        }
        other => {
            return Err(CatalogError::UnexpectedShape(format!(
                "expected an array of products, found {}",
                json_kind(&other)
            )))
        }
    };

    let total = records.len();
    let products: Vec<Product> = records
        .iter()
        .enumerate()
        .filter_map(|(idx, record)| {
            let product = normalize_product(record);
            if product.is_none() {
                warn!(index = idx, kind = json_kind(record), "skipping non-object catalog record");
            }
            product
        })
        .collect();

    tracing::debug!(total, kept = products.len(), "normalized catalog records");
    Ok(products)
}

/// Map one upstream record into the canonical product shape.
/// Returns `None` only when the record is not a JSON object.
pub fn normalize_product(record: &Value) -> Option<Product> {
    let obj = record.as_object()?;

    Some(Product {
        id: first_text(obj, &["id", "itemID", "_id"]).unwrap_or_default(),
        title: first_text(obj, &["title", "name"]).unwrap_or_default(),
        price: obj.get("price").and_then(number),
        discount: obj.get("discount").and_then(number),
        status: first_text(obj, &["status"]).map(|s| ProductStatus::from_label(&s)),
        product_type: first_text(obj, &["productType"]),
        parent: obj.get("parent").and_then(label),
        children: obj.get("children").and_then(label),
        category: obj.get("category").and_then(label),
        brand: obj.get("brand").and_then(label),
        featured: obj.get("featured").is_some_and(flag),
        created_at: obj.get("createdAt").and_then(timestamp),
        reviews: obj.get("reviews").map(reviews).unwrap_or_default(),
        sell_count: obj.get("sellCount").and_then(count).unwrap_or_default(),
        offer_ends_at: obj
            .get("offerDate")
            .and_then(|offer| offer.get("endDate"))
            .and_then(timestamp),
        tags: obj.get("tags").map(tags).unwrap_or_default(),
    })
}

fn first_text(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| obj.get(*key).and_then(text))
}

/// Strings and numbers become text; blanks count as absent.
fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// A label is a string, an object exposing `name`, or a list of labels
/// joined with ", ".
fn label(value: &Value) -> Option<String> {
    match value {
        Value::Object(obj) => obj.get("name").and_then(text),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(label).collect();
            (!parts.is_empty()).then(|| parts.join(", "))
        }
        other => text(other),
    }
}

fn number(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|n| n.is_finite())
}

fn count(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn flag(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => s.eq_ignore_ascii_case("true"),
        _ => false,
    }
}

fn reviews(value: &Value) -> Vec<Review> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|review| review.get("rating").and_then(number))
                .map(|rating| Review { rating })
                .collect()
        })
        .unwrap_or_default()
}

fn tags(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().filter_map(text).collect(),
        Value::String(s) => s
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

/// Parse the timestamp encodings seen upstream:
/// - RFC 3339 strings, naive `YYYY-MM-DDTHH:MM:SS` (taken as UTC), bare dates
/// - epoch milliseconds
/// - `{ seconds, nanoseconds }` with or without leading underscores
pub fn timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => parse_timestamp_str(s.trim()),
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .and_then(DateTime::from_timestamp_millis),
        Value::Object(obj) => {
            let seconds = obj.get("seconds").or_else(|| obj.get("_seconds"))?.as_i64()?;
            let nanos = obj
                .get("nanoseconds")
                .or_else(|| obj.get("_nanoseconds"))
                .and_then(Value::as_u64)
                .and_then(|n| u32::try_from(n).ok())
                .unwrap_or(0);
            DateTime::from_timestamp(seconds, nanos)
        }
        _ => None,
    }
}

fn parse_timestamp_str(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
