use crate::error::ParseFacetFieldError;
use crate::models::{FacetBucket, FacetField, Product};
use crate::slug::slugify;
use crate::sorting::locale_compare;
use std::collections::HashMap;
use std::str::FromStr;

impl FromStr for FacetField {
    type Err = ParseFacetFieldError;

    /// Accepts query keys (`productType`) and kebab names (`product-type`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "productType" | "product-type" | "type" => Ok(Self::ProductType),
            "category" | "parent" => Ok(Self::Category),
            "subCategory" | "sub-category" | "children" => Ok(Self::SubCategory),
            "brand" => Ok(Self::Brand),
            "status" => Ok(Self::Status),
            other => Err(ParseFacetFieldError(other.to_string())),
        }
    }
}

/// Count products per raw facet label.
///
/// Products without the field are skipped. Labels are compared as-is, so
/// "Serum" and "serum" form two buckets. Buckets come back sorted by label
/// with [`locale_compare`].
pub fn extract_facet_counts(products: &[Product], field: FacetField) -> Vec<FacetBucket> {
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for label in products.iter().filter_map(|p| p.facet_label(field)) {
        if label.is_empty() {
            continue;
        }
        *counts.entry(label).or_default() += 1;
    }

    let mut buckets: Vec<FacetBucket> = counts
        .into_iter()
        .map(|(label, count)| FacetBucket {
            label: label.to_string(),
            slug: slugify(Some(label)),
            count,
        })
        .collect();

    buckets.sort_by(|a, b| locale_compare(&a.label, &b.label));
    buckets
}

/// Count products per slug, so each bucket selects exactly the products it
/// counts. The displayed label is the first spelling seen in `products`.
pub fn extract_slug_facets(products: &[Product], field: FacetField) -> Vec<FacetBucket> {
    let mut buckets: Vec<FacetBucket> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for label in products.iter().filter_map(|p| p.facet_label(field)) {
        let slug = slugify(Some(label));
        if slug.is_empty() {
            continue;
        }

        match index.get(&slug) {
            Some(&pos) => buckets[pos].count += 1,
            None => {
                index.insert(slug.clone(), buckets.len());
                buckets.push(FacetBucket {
                    label: label.to_string(),
                    slug,
                    count: 1,
                });
            }
        }
    }

    buckets.sort_by(|a, b| locale_compare(&a.label, &b.label));
    buckets
}

/// Group products under each raw facet label, in bucket order.
/// Products lacking the field are collected under `None` at the end.
pub fn group_products_by_facet<'a>(
    products: &'a [Product],
    field: FacetField,
) -> Vec<(Option<String>, Vec<&'a Product>)> {
    let mut groups: HashMap<Option<&str>, Vec<&Product>> = HashMap::new();

    for product in products {
        let label = product.facet_label(field).filter(|l| !l.is_empty());
        groups.entry(label).or_default().push(product);
    }

    let unspecified = groups.remove(&None);
    let mut named: Vec<(Option<String>, Vec<&Product>)> = groups
        .into_iter()
        .map(|(label, items)| (label.map(str::to_string), items))
        .collect();
    named.sort_by(|(a, _), (b, _)| {
        locale_compare(a.as_deref().unwrap_or_default(), b.as_deref().unwrap_or_default())
    });

    if let Some(items) = unspecified {
        named.push((None, items));
    }
    named
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProductStatus;

    fn typed(product_type: Option<&str>) -> Product {
        Product {
            product_type: product_type.map(str::to_string),
            ..Product::default()
        }
    }

    fn as_pairs(buckets: &[FacetBucket]) -> Vec<(&str, usize)> {
        buckets.iter().map(|b| (b.label.as_str(), b.count)).collect()
    }

    #[test]
    fn test_counts_sorted_and_missing_skipped() {
        let products = vec![
            typed(Some("Skincare")),
            typed(Some("Skincare")),
            typed(None),
            typed(Some("Serum")),
        ];
        let buckets = extract_facet_counts(&products, FacetField::ProductType);
        assert_eq!(as_pairs(&buckets), vec![("Serum", 1), ("Skincare", 2)]);
        assert_eq!(buckets[1].slug, "skincare");
    }

    #[test]
    fn test_raw_labels_with_different_case_stay_apart() {
        let products = vec![typed(Some("Serum")), typed(Some("serum")), typed(Some("Serum"))];
        let buckets = extract_facet_counts(&products, FacetField::ProductType);
        assert_eq!(as_pairs(&buckets), vec![("serum", 1), ("Serum", 2)]);
        assert!(buckets.iter().all(|b| b.slug == "serum"));
    }

    #[test]
    fn test_slug_facets_merge_spellings() {
        let products = vec![
            typed(Some("Body Care")),
            typed(Some("body  care")),
            typed(Some("Crème hydratante")),
            typed(Some("")),
        ];
        let buckets = extract_slug_facets(&products, FacetField::ProductType);
        assert_eq!(as_pairs(&buckets), vec![("Body Care", 2), ("Crème hydratante", 1)]);
    }

    #[test]
    fn test_accented_labels_sort_with_their_base_letter() {
        let products = vec![
            typed(Some("Serum")),
            typed(Some("Crème hydratante")),
            typed(Some("BodyCare")),
        ];
        let labels: Vec<String> = extract_facet_counts(&products, FacetField::ProductType)
            .into_iter()
            .map(|b| b.label)
            .collect();
        assert_eq!(labels, vec!["BodyCare", "Crème hydratante", "Serum"]);
    }

    #[test]
    fn test_status_and_brand_fields() {
        let products = vec![
            Product {
                status: Some(ProductStatus::InStock),
                brand: Some("Glow Lab".to_string()),
                ..Product::default()
            },
            Product {
                status: Some(ProductStatus::Other("backorder".to_string())),
                ..Product::default()
            },
        ];
        let statuses = extract_facet_counts(&products, FacetField::Status);
        assert_eq!(as_pairs(&statuses), vec![("backorder", 1), ("in-stock", 1)]);
        let brands = extract_facet_counts(&products, FacetField::Brand);
        assert_eq!(as_pairs(&brands), vec![("Glow Lab", 1)]);
    }

    #[test]
    fn test_facet_field_from_str() {
        assert_eq!("productType".parse(), Ok(FacetField::ProductType));
        assert_eq!("sub-category".parse(), Ok(FacetField::SubCategory));
        assert!("colour".parse::<FacetField>().is_err());
    }

    #[test]
    fn test_empty_catalog_has_no_buckets() {
        assert!(extract_facet_counts(&[], FacetField::Category).is_empty());
        assert!(extract_slug_facets(&[], FacetField::Category).is_empty());
    }

    #[test]
    fn test_group_products_puts_unspecified_last() {
        let products = vec![
            typed(None),
            typed(Some("Serum")),
            typed(Some("Makeup")),
            typed(Some("Serum")),
        ];
        let groups = group_products_by_facet(&products, FacetField::ProductType);
        let shape: Vec<(Option<&str>, usize)> = groups
            .iter()
            .map(|(label, items)| (label.as_deref(), items.len()))
            .collect();
        assert_eq!(shape, vec![(Some("Makeup"), 1), (Some("Serum"), 2), (None, 1)]);
    }
}
