// Public modules
pub mod error;
pub mod facets;
pub mod filtering;
pub mod ingest;
pub mod io;
pub mod models;
pub mod pagination;
pub mod schema_validation;
pub mod showcase;
pub mod slug;
pub mod sorting;
pub mod validation;

// Re-export commonly used types for convenience
pub use error::{CatalogError, ParseFacetFieldError, ParseSortError};
pub use facets::{extract_facet_counts, extract_slug_facets, group_products_by_facet};
pub use filtering::{apply_filters, apply_filters_and_sort, has_filters, matches_criteria};
pub use ingest::{normalize_product, products_from_value};
pub use io::{load_catalog, load_catalog_value, JsonCatalog, ProductSource};
pub use models::{
    FacetBucket, FacetField, FilterCriteria, PriceRange, Product, ProductStatus, Review,
    SortDirective,
};
pub use pagination::{paginate, Page};
pub use schema_validation::{validate_against_schema, validate_catalog_file};
pub use showcase::{
    find_product, most_discounted, offer_products, price_ceiling, products_of_type,
    related_products, top_rated, RatedProduct, ShowcaseMode, RELATED_LIMIT, SHOWCASE_LIMIT,
};
pub use slug::{slug_matches, slugify};
pub use sorting::{collation_key, locale_compare, sort_products};
pub use validation::validate_catalog;
