use cereza_core::{FacetBucket, FacetField, FilterCriteria, Product};
use colored::Colorize;

/// Format a price as dollars, or "n/a" when unknown
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(p) => format!("${:.2}", p),
        None => "n/a".to_string(),
    }
}

/// One listing row: title, price (struck through sale price when
/// discounted), type and status.
pub fn format_product_row(product: &Product) -> String {
    let title = if product.title.is_empty() {
        format!("(untitled {})", product.id)
    } else {
        product.title.clone()
    };

    let price = if product.is_on_sale() {
        format!(
            "{} {} {}",
            format_price(product.sale_price()).green().bold(),
            format_price(product.price).strikethrough().dimmed(),
            format!("-{}%", product.discount.unwrap_or_default()).red()
        )
    } else {
        format_price(product.price).bold().to_string()
    };

    let mut details = Vec::new();
    if let Some(product_type) = &product.product_type {
        details.push(product_type.clone());
    }
    if let Some(brand) = &product.brand {
        details.push(brand.clone());
    }
    if let Some(status) = &product.status {
        details.push(status.to_string());
    }

    if details.is_empty() {
        format!("{}  {}", title.bold(), price)
    } else {
        format!("{}  {}  {}", title.bold(), price, details.join(" · ").dimmed())
    }
}

/// Sidebar line for a facet bucket, marked when its slug is selected
pub fn format_facet_bucket(bucket: &FacetBucket, selected: bool) -> String {
    let marker = if selected { "[x]" } else { "[ ]" };
    let line = format!("{} {} ({})", marker, bucket.label, bucket.count);
    if selected {
        line.cyan().bold().to_string()
    } else {
        line
    }
}

/// Format a rating as stars plus the numeric average
pub fn format_rating(rating: f64) -> String {
    let filled = rating.round().clamp(0.0, 5.0) as usize;
    format!("{}{} {:.1}", "★".repeat(filled), "☆".repeat(5 - filled), rating)
}

/// Describe the active criteria, one "Name: value" part per criterion
pub fn format_active_filters(criteria: &FilterCriteria) -> String {
    let mut parts = Vec::new();

    for field in [
        FacetField::Category,
        FacetField::SubCategory,
        FacetField::ProductType,
        FacetField::Brand,
        FacetField::Status,
    ] {
        if let Some(value) = criteria.get(field) {
            parts.push(format!("{}: {}", field.display_name(), value));
        }
    }

    if let Some(range) = &criteria.price_range {
        parts.push(format!(
            "Price: {} - {}",
            format_price(Some(range.min)),
            format_price(Some(range.max))
        ));
    }

    parts.join("; ")
}
