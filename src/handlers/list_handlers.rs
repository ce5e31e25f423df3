use anyhow::Result;
use cereza_core::{
    group_products_by_facet, has_filters, paginate, slugify, FacetField, FilterCriteria,
    PriceRange, Product, SortDirective,
};
use clap::Args;
use serde::Serialize;

use crate::state::AppState;
use crate::ui::{format_active_filters, format_facet_bucket, format_product_row};

/// Filters, sort and paging for `cereza list`
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Product type slug or label
    #[arg(long, value_name = "TYPE")]
    pub product_type: Option<String>,

    /// Stock status slug or label (e.g. in-stock)
    #[arg(long)]
    pub status: Option<String>,

    /// Parent category slug or label
    #[arg(long)]
    pub category: Option<String>,

    /// Sub-category slug or label
    #[arg(long)]
    pub sub_category: Option<String>,

    #[arg(long)]
    pub brand: Option<String>,

    /// Lower price bound; the other bound defaults to the catalog span
    #[arg(long, value_name = "N")]
    pub min_price: Option<f64>,

    #[arg(long, value_name = "N")]
    pub max_price: Option<f64>,

    /// Storefront query string, e.g. "productType=serum&minPrice=0&maxPrice=30".
    /// Individual flags override its values.
    #[arg(long, value_name = "QS")]
    pub query: Option<String>,

    /// none, price-asc, price-desc, newest or on-sale
    #[arg(short, long, default_value = "none")]
    pub sort: SortDirective,

    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Page size (defaults to CEREZA_PAGE_SIZE)
    #[arg(long, value_name = "N")]
    pub per_page: Option<usize>,

    /// Group the page by a facet field
    #[arg(short = 'G', long, value_name = "FIELD")]
    pub group_by: Option<FacetField>,

    /// Print the facet sidebar after the results
    #[arg(long)]
    pub facets: bool,

    /// Emit the page as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct ListReport<'a> {
    query: String,
    sort: &'static str,
    page: usize,
    per_page: usize,
    total: usize,
    total_pages: usize,
    products: &'a [Product],
}

/// Build the criteria for a listing: the query string first, flags on top.
pub fn build_criteria(args: &ListArgs, default_range: PriceRange) -> FilterCriteria {
    let mut criteria = args
        .query
        .as_deref()
        .map(FilterCriteria::from_query)
        .unwrap_or_default();

    for (field, value) in [
        (FacetField::ProductType, &args.product_type),
        (FacetField::Status, &args.status),
        (FacetField::Category, &args.category),
        (FacetField::SubCategory, &args.sub_category),
        (FacetField::Brand, &args.brand),
    ] {
        if let Some(label) = value {
            select(&mut criteria, field, label);
        }
    }

    if args.min_price.is_some() || args.max_price.is_some() {
        let current = criteria.price_range.unwrap_or(default_range);
        criteria.price_range = Some(PriceRange::new(
            args.min_price.unwrap_or(current.min),
            args.max_price.unwrap_or(current.max),
        ));
    }

    criteria
}

/// Set a facet criterion to the slug of `label`, leaving it set if it already is.
fn select(criteria: &mut FilterCriteria, field: FacetField, label: &str) {
    if criteria.get(field) != Some(slugify(Some(label)).as_str()) {
        criteria.toggle(field, label);
    }
}

/// Handle `cereza list`
pub fn handle_list(state: &mut AppState, args: &ListArgs) -> Result<()> {
    let criteria = build_criteria(args, state.default_price_range());
    state.set_criteria(criteria);
    state.set_sort(args.sort);
    if let Some(per_page) = args.per_page {
        state.per_page = per_page.max(1);
    }
    state.set_page(args.page);

    let visible = state.visible_products();
    let page = paginate(&visible, state.page, state.per_page);

    if args.json {
        let report = ListReport {
            query: state.criteria.to_query(),
            sort: state.sort.as_str(),
            page: page.page,
            per_page: page.per_page,
            total: page.total,
            total_pages: page.total_pages,
            products: page.items,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("# {}\n", state.get_catalog_name());

    if has_filters(&state.criteria) {
        println!("Filters: {}", format_active_filters(&state.criteria));
    }
    if state.sort != SortDirective::None {
        println!("Sorted by: {}", state.sort.display_name());
    }
    println!(
        "Showing {} of {} products (page {} of {})\n",
        page.items.len(),
        page.total,
        page.page,
        page.total_pages.max(1)
    );

    if page.items.is_empty() {
        println!("No products match the selected filters.");
    } else if let Some(field) = args.group_by {
        for (label, products) in group_products_by_facet(page.items, field) {
            println!(
                "## {}: {}",
                field.display_name(),
                label.as_deref().unwrap_or("Unspecified")
            );
            for product in products {
                println!("  {}", format_product_row(product));
            }
            println!();
        }
    } else {
        for product in page.items {
            println!("  {}", format_product_row(product));
        }
    }

    if page.has_next() {
        println!("\nMore results: --page {}", page.page + 1);
    }

    if args.facets {
        print_sidebar(state);
    }

    Ok(())
}

fn print_sidebar(state: &AppState) {
    for field in [
        FacetField::Category,
        FacetField::ProductType,
        FacetField::Brand,
        FacetField::Status,
    ] {
        let buckets = state.facets(field, false);
        if buckets.is_empty() {
            continue;
        }
        println!("\n{}", field.display_name());
        let selected = state.criteria.get(field);
        for bucket in &buckets {
            println!(
                "  {}",
                format_facet_bucket(bucket, selected == Some(bucket.slug.as_str()))
            );
        }
    }

    let range = state.default_price_range();
    println!("\nPrice: ${:.0} - ${:.0}", range.min, range.max);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range() -> PriceRange {
        PriceRange::new(0.0, 80.0)
    }

    #[test]
    fn flags_are_slugified() {
        let args = ListArgs {
            category: Some("Skin Care".to_string()),
            brand: Some("glow-lab".to_string()),
            ..ListArgs::default()
        };
        let criteria = build_criteria(&args, range());
        assert_eq!(criteria.category.as_deref(), Some("skin-care"));
        assert_eq!(criteria.brand.as_deref(), Some("glow-lab"));
        assert!(criteria.price_range.is_none());
    }

    #[test]
    fn flags_override_query() {
        let args = ListArgs {
            query: Some("productType=serum&brand=glow-lab".to_string()),
            product_type: Some("Toner".to_string()),
            ..ListArgs::default()
        };
        let criteria = build_criteria(&args, range());
        assert_eq!(criteria.product_type.as_deref(), Some("toner"));
        assert_eq!(criteria.brand.as_deref(), Some("glow-lab"));
    }

    #[test]
    fn repeated_flag_value_stays_selected() {
        let args = ListArgs {
            query: Some("brand=glow-lab".to_string()),
            brand: Some("Glow Lab".to_string()),
            ..ListArgs::default()
        };
        let criteria = build_criteria(&args, range());
        assert_eq!(criteria.brand.as_deref(), Some("glow-lab"));
    }

    #[test]
    fn single_price_bound_uses_catalog_span() {
        let args = ListArgs {
            max_price: Some(30.0),
            ..ListArgs::default()
        };
        let criteria = build_criteria(&args, range());
        assert_eq!(criteria.price_range, Some(PriceRange::new(0.0, 30.0)));

        let args = ListArgs {
            min_price: Some(25.0),
            ..ListArgs::default()
        };
        let criteria = build_criteria(&args, range());
        assert_eq!(criteria.price_range, Some(PriceRange::new(25.0, 80.0)));
    }
}
