use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical product shape. Every upstream record shape is mapped into this
/// by [`crate::ingest::normalize_product`] before the engine sees it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub title: String,
    pub price: Option<f64>,
    pub discount: Option<f64>,
    pub status: Option<ProductStatus>,
    pub product_type: Option<String>,
    pub parent: Option<String>,
    /// Comma-joined when the upstream record carries a list.
    pub children: Option<String>,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub featured: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub reviews: Vec<Review>,
    pub sell_count: u64,
    pub offer_ends_at: Option<DateTime<Utc>>,
    pub tags: Vec<String>,
}

impl Product {
    /// A product is on sale when it carries a positive discount.
    pub fn is_on_sale(&self) -> bool {
        self.discount.is_some_and(|d| d > 0.0)
    }

    pub fn is_in_stock(&self) -> bool {
        matches!(self.status, Some(ProductStatus::InStock))
    }

    /// Price after discount, when both are known.
    pub fn sale_price(&self) -> Option<f64> {
        let price = self.price?;
        match self.discount {
            Some(d) if d > 0.0 => Some(price - price * d / 100.0),
            _ => Some(price),
        }
    }

    /// Mean review rating, `None` without reviews.
    pub fn average_rating(&self) -> Option<f64> {
        if self.reviews.is_empty() {
            return None;
        }
        let total: f64 = self.reviews.iter().map(|r| r.rating).sum();
        Some(total / self.reviews.len() as f64)
    }

    /// Raw label for a facet field, if the product carries one.
    pub fn facet_label(&self, field: FacetField) -> Option<&str> {
        match field {
            FacetField::ProductType => self.product_type.as_deref(),
            FacetField::Category => self.parent.as_deref(),
            FacetField::SubCategory => self.children.as_deref(),
            FacetField::Brand => self.brand.as_deref(),
            FacetField::Status => self.status.as_ref().map(ProductStatus::as_str),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub rating: f64,
}

/// Stock status. Unknown upstream values are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductStatus {
    InStock,
    OutOfStock,
    ComingSoon,
    Discontinued,
    Other(String),
}

impl ProductStatus {
    pub fn from_label(label: &str) -> Self {
        match label {
            "in-stock" => Self::InStock,
            "out-of-stock" => Self::OutOfStock,
            "coming-soon" => Self::ComingSoon,
            "discontinued" => Self::Discontinued,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::InStock => "in-stock",
            Self::OutOfStock => "out-of-stock",
            Self::ComingSoon => "coming-soon",
            Self::Discontinued => "discontinued",
            Self::Other(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive price bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// `[0, highest price]`, the default slider position of the shop page.
    pub fn spanning(products: &[Product]) -> Self {
        Self::new(0.0, crate::showcase::price_ceiling(products))
    }

    pub fn contains(&self, price: f64) -> bool {
        self.min <= price && price <= self.max
    }
}

/// Active filter state, rebuilt per render from the query string.
/// `None` or an empty string imposes no constraint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub price_range: Option<PriceRange>,
    pub status: Option<String>,
    pub category: Option<String>,
    pub sub_category: Option<String>,
    pub product_type: Option<String>,
    pub brand: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirective {
    #[default]
    None,
    PriceLowToHigh,
    PriceHighToLow,
    NewestFirst,
    /// Keeps only discounted products; does not reorder.
    OnSaleFirst,
}

impl SortDirective {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::PriceLowToHigh => "price-asc",
            Self::PriceHighToLow => "price-desc",
            Self::NewestFirst => "newest",
            Self::OnSaleFirst => "on-sale",
        }
    }

    /// Label shown in the shop's sort dropdown.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::None => "Default Sorting",
            Self::PriceLowToHigh => "Low to High",
            Self::PriceHighToLow => "High to Low",
            Self::NewestFirst => "New Added",
            Self::OnSaleFirst => "On Sale",
        }
    }
}

/// Product attribute a facet sidebar can be built over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FacetField {
    ProductType,
    /// The `parent` label.
    Category,
    /// The `children` label.
    SubCategory,
    Brand,
    Status,
}

impl FacetField {
    /// Query-string key the facet toggles.
    pub fn query_key(&self) -> &'static str {
        match self {
            Self::ProductType => "productType",
            Self::Category => "category",
            Self::SubCategory => "subCategory",
            Self::Brand => "brand",
            Self::Status => "status",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::ProductType => "Product Type",
            Self::Category => "Category",
            Self::SubCategory => "Sub-category",
            Self::Brand => "Brand",
            Self::Status => "Status",
        }
    }
}

/// One facet value with the number of products carrying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetBucket {
    pub label: String,
    pub slug: String,
    pub count: usize,
}
