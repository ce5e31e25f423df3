//! Secondary storefront selections: the home page rails, the product-detail
//! lookups and the price slider ceiling. Each one is a pure read over the
//! resident catalog.

use crate::error::CatalogError;
use crate::models::Product;
use crate::sorting::compare_missing_last;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Default size of a home page rail.
pub const SHOWCASE_LIMIT: usize = 8;

/// Default size of the related-products strip.
pub const RELATED_LIMIT: usize = 4;

/// Highest known price, `0.0` for an empty or unpriced catalog.
pub fn price_ceiling(products: &[Product]) -> f64 {
    products
        .iter()
        .filter_map(|p| p.price)
        .fold(0.0, f64::max)
}

/// Products with the largest discounts first.
pub fn most_discounted(products: &[Product], limit: usize) -> Vec<&Product> {
    let mut items: Vec<&Product> = products.iter().collect();
    items.sort_by(|a, b| compare_missing_last(a.discount, b.discount, |x, y| y.total_cmp(&x)));
    items.truncate(limit);
    items
}

/// A product with its mean review rating.
#[derive(Debug, Clone, Serialize)]
pub struct RatedProduct<'a> {
    pub product: &'a Product,
    pub rating: f64,
}

/// Best average rating first. Products without reviews are left out.
pub fn top_rated(products: &[Product], limit: usize) -> Vec<RatedProduct<'_>> {
    let mut rated: Vec<RatedProduct<'_>> = products
        .iter()
        .filter_map(|product| {
            product
                .average_rating()
                .map(|rating| RatedProduct { product, rating })
        })
        .collect();
    rated.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    rated.truncate(limit);
    rated
}

/// Which slice of a product type a rail shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShowcaseMode {
    #[default]
    All,
    /// Newest first.
    NewArrivals,
    Featured,
    /// Highest `sell_count` first.
    TopSellers,
    /// Most reviews first.
    Popular,
}

/// Products whose raw `product_type` equals `product_type` exactly.
///
/// Every mode except [`ShowcaseMode::All`] is capped at `limit`. Ties keep
/// catalog order.
pub fn products_of_type<'a>(
    products: &'a [Product],
    product_type: &str,
    mode: ShowcaseMode,
    limit: usize,
) -> Vec<&'a Product> {
    let mut items: Vec<&Product> = products
        .iter()
        .filter(|p| p.product_type.as_deref() == Some(product_type))
        .collect();

    match mode {
        ShowcaseMode::All => return items,
        ShowcaseMode::Featured => items.retain(|p| p.featured),
        ShowcaseMode::NewArrivals => {
            items.sort_by(|a, b| {
                compare_missing_last(a.created_at, b.created_at, |x, y| y.cmp(&x))
            });
        }
        ShowcaseMode::TopSellers => items.sort_by(|a, b| b.sell_count.cmp(&a.sell_count)),
        ShowcaseMode::Popular => items.sort_by(|a, b| b.reviews.len().cmp(&a.reviews.len())),
    }

    items.truncate(limit);
    items
}

/// Products whose offer is still running at `now`, optionally of one type.
pub fn offer_products<'a>(
    products: &'a [Product],
    now: DateTime<Utc>,
    product_type: Option<&str>,
) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| p.offer_ends_at.is_some_and(|end| end > now))
        .filter(|p| product_type.is_none_or(|t| p.product_type.as_deref() == Some(t)))
        .collect()
}

/// Look up a product by id.
///
/// # Errors
///
/// Returns [`CatalogError::ProductNotFound`] when no product has that id.
pub fn find_product<'a>(products: &'a [Product], id: &str) -> Result<&'a Product, CatalogError> {
    products
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| CatalogError::ProductNotFound(id.to_string()))
}

/// Other products in the same category as `id`, in catalog order.
///
/// # Errors
///
/// Returns [`CatalogError::ProductNotFound`] when `id` is unknown.
pub fn related_products<'a>(
    products: &'a [Product],
    id: &str,
    limit: usize,
) -> Result<Vec<&'a Product>, CatalogError> {
    let target = find_product(products, id)?;
    let Some(category) = target.category.as_deref() else {
        return Ok(Vec::new());
    };

    Ok(products
        .iter()
        .filter(|p| p.id != target.id && p.category.as_deref() == Some(category))
        .take(limit)
        .collect())
}
