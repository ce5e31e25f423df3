use crate::error::ParseSortError;
use crate::models::{FacetField, FilterCriteria, PriceRange, Product, SortDirective};
use crate::slug::{slug_matches, slugify};
use crate::sorting::sort_products;
use std::str::FromStr;
use tracing::debug;

/// Run the shop pipeline: sort a copy of `products`, then narrow it through
/// the price, status, category, sub-category, type and brand filters.
///
/// The input is never mutated. Criteria are conjunctive.
pub fn apply_filters_and_sort(
    products: &[Product],
    criteria: &FilterCriteria,
    sort: SortDirective,
) -> Vec<Product> {
    let mut items = products.to_vec();
    sort_products(&mut items, sort);
    debug!(sort = sort.as_str(), candidates = items.len(), "sorted catalog copy");

    items.retain(|product| matches_criteria(product, criteria));
    debug!(matched = items.len(), "applied filter criteria");

    items
}

/// Apply filters only, preserving input order.
pub fn apply_filters(products: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
    apply_filters_and_sort(products, criteria, SortDirective::None)
}

/// Check a single product against every active criterion.
pub fn matches_criteria(product: &Product, criteria: &FilterCriteria) -> bool {
    if let Some(range) = &criteria.price_range {
        match product.price {
            Some(price) if range.contains(price) => {}
            _ => return false,
        }
    }

    match active(&criteria.status) {
        Some("on-sale") if !product.is_on_sale() => return false,
        Some("in-stock") if !product.is_in_stock() => return false,
        _ => {}
    }

    let slug_checks = [
        (&criteria.category, product.parent.as_deref()),
        (&criteria.sub_category, product.children.as_deref()),
        (&criteria.product_type, product.product_type.as_deref()),
        (&criteria.brand, product.brand.as_deref()),
    ];

    slug_checks
        .into_iter()
        .all(|(criterion, label)| match active(criterion) {
            Some(slug) => slug_matches(label, slug),
            None => true,
        })
}

/// Check if any criterion is active
pub fn has_filters(criteria: &FilterCriteria) -> bool {
    criteria.price_range.is_some()
        || active(&criteria.status).is_some()
        || active(&criteria.category).is_some()
        || active(&criteria.sub_category).is_some()
        || active(&criteria.product_type).is_some()
        || active(&criteria.brand).is_some()
}

fn active(criterion: &Option<String>) -> Option<&str> {
    criterion.as_deref().filter(|value| !value.is_empty())
}

impl FilterCriteria {
    /// Build criteria from a router query string such as
    /// `productType=skincare&status=on-sale&minPrice=10&maxPrice=40`.
    ///
    /// Values are taken verbatim; they are expected to be slugs already.
    /// Unknown keys and unparsable prices are ignored. A price range needs
    /// both bounds.
    pub fn from_query(query: &str) -> Self {
        let mut criteria = Self::default();
        let mut min_price = None;
        let mut max_price = None;

        let query = query.strip_prefix('?').unwrap_or(query);
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = value.trim();
            let text = (!value.is_empty()).then(|| value.to_string());

            match key.trim() {
                "productType" => criteria.product_type = text,
                "status" => criteria.status = text,
                "category" => criteria.category = text,
                "subCategory" => criteria.sub_category = text,
                "brand" => criteria.brand = text,
                "minPrice" => min_price = value.parse::<f64>().ok().filter(|p| p.is_finite()),
                "maxPrice" => max_price = value.parse::<f64>().ok().filter(|p| p.is_finite()),
                _ => {}
            }
        }

        if let (Some(min), Some(max)) = (min_price, max_price) {
            criteria.price_range = Some(PriceRange::new(min, max));
        }

        criteria
    }

    /// Render active criteria back into query-string form.
    pub fn to_query(&self) -> String {
        let mut pairs = Vec::new();

        for field in [
            FacetField::ProductType,
            FacetField::Status,
            FacetField::Category,
            FacetField::SubCategory,
            FacetField::Brand,
        ] {
            if let Some(value) = active(self.slot(field)) {
                pairs.push(format!("{}={}", field.query_key(), value));
            }
        }

        if let Some(range) = &self.price_range {
            pairs.push(format!("minPrice={}", range.min));
            pairs.push(format!("maxPrice={}", range.max));
        }

        pairs.join("&")
    }

    /// Criterion value bound to a facet field.
    pub fn get(&self, field: FacetField) -> Option<&str> {
        active(self.slot(field))
    }

    /// Select the facet bucket for `label`, or clear it when the same slug is
    /// already selected. Returns whether the criterion is now set.
    pub fn toggle(&mut self, field: FacetField, label: &str) -> bool {
        let slug = slugify(Some(label));
        let slot = self.slot_mut(field);

        if slot.as_deref() == Some(slug.as_str()) || slug.is_empty() {
            *slot = None;
            false
        } else {
            *slot = Some(slug);
            true
        }
    }

    fn slot(&self, field: FacetField) -> &Option<String> {
        match field {
            FacetField::ProductType => &self.product_type,
            FacetField::Category => &self.category,
            FacetField::SubCategory => &self.sub_category,
            FacetField::Brand => &self.brand,
            FacetField::Status => &self.status,
        }
    }

    fn slot_mut(&mut self, field: FacetField) -> &mut Option<String> {
        match field {
            FacetField::ProductType => &mut self.product_type,
            FacetField::Category => &mut self.category,
            FacetField::SubCategory => &mut self.sub_category,
            FacetField::Brand => &mut self.brand,
            FacetField::Status => &mut self.status,
        }
    }
}

impl FromStr for SortDirective {
    type Err = ParseSortError;

    /// Accepts the shop dropdown labels as well as short kebab names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "none" | "default" => Ok(Self::None),
            "Low to High" | "price-asc" => Ok(Self::PriceLowToHigh),
            "High to Low" | "price-desc" => Ok(Self::PriceHighToLow),
            "New Added" | "newest" => Ok(Self::NewestFirst),
            "On Sale" | "on-sale" => Ok(Self::OnSaleFirst),
            other => Err(ParseSortError(other.to_string())),
        }
    }
}
