use cereza_core::*;
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::ShopConfig;

/// Shop browsing state: the resident catalog plus the current filter, sort
/// and page selection.
#[derive(Debug)]
pub struct AppState {
    /// Catalog snapshot. Reloading swaps the `Arc`, so a computation keeps
    /// the snapshot it started with.
    catalog: Arc<[Product]>,
    /// Path of the loaded catalog file
    pub current_file: Option<PathBuf>,
    pub criteria: FilterCriteria,
    pub sort: SortDirective,
    /// 1-based page of the visible results
    pub page: usize,
    pub per_page: usize,
}

impl AppState {
    pub fn new(config: &ShopConfig) -> Self {
        Self {
            catalog: Arc::from(Vec::new()),
            current_file: None,
            criteria: FilterCriteria::default(),
            sort: SortDirective::None,
            page: 1,
            per_page: config.page_size,
        }
    }

    /// Load a catalog file, replacing the current snapshot
    pub fn load_from_file(&mut self, path: PathBuf) -> Result<(), CatalogError> {
        let source = JsonCatalog::new(path.clone());
        self.load_from(&source)?;
        self.current_file = Some(path);
        Ok(())
    }

    pub fn load_from<S: ProductSource>(&mut self, source: &S) -> Result<(), CatalogError> {
        let products = source.fetch_all_products()?;
        self.catalog = Arc::from(products);
        self.page = 1;
        Ok(())
    }

    /// Cheap handle on the current catalog snapshot.
    pub fn snapshot(&self) -> Arc<[Product]> {
        Arc::clone(&self.catalog)
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.page = 1;
    }

    /// Toggle a facet bucket the way the sidebar does, back to page 1.
    pub fn toggle_facet(&mut self, field: FacetField, label: &str) -> bool {
        self.page = 1;
        self.criteria.toggle(field, label)
    }

    pub fn set_sort(&mut self, sort: SortDirective) {
        self.sort = sort;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Run the pipeline over the current snapshot.
    pub fn visible_products(&self) -> Vec<Product> {
        let catalog = self.snapshot();
        apply_filters_and_sort(&catalog, &self.criteria, self.sort)
    }

    /// Facet buckets for the sidebar, always over the unfiltered catalog.
    pub fn facets(&self, field: FacetField, raw_labels: bool) -> Vec<FacetBucket> {
        let catalog = self.snapshot();
        if raw_labels {
            extract_facet_counts(&catalog, field)
        } else {
            extract_slug_facets(&catalog, field)
        }
    }

    /// Default price slider bounds for the loaded catalog.
    pub fn default_price_range(&self) -> PriceRange {
        PriceRange::spanning(&self.catalog)
    }

    pub fn get_catalog_name(&self) -> String {
        self.current_file
            .as_ref()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .unwrap_or("in-memory catalog")
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ShopConfig {
        ShopConfig {
            catalog_path: PathBuf::from("data/catalog.json"),
            log_level: "warn".to_string(),
            page_size: 2,
            showcase_limit: 8,
        }
    }

    fn catalog() -> Vec<Product> {
        ["Skincare", "Serum", "Skincare"]
            .iter()
            .enumerate()
            .map(|(i, t)| Product {
                id: i.to_string(),
                price: Some(10.0 * (i + 1) as f64),
                product_type: Some(t.to_string()),
                ..Product::default()
            })
            .collect()
    }

    #[test]
    fn toggle_resets_page_and_filters() {
        let mut state = AppState::new(&config());
        state.load_from(&catalog()).unwrap();
        state.set_page(3);

        assert!(state.toggle_facet(FacetField::ProductType, "Skincare"));
        assert_eq!(state.page, 1);
        assert_eq!(state.visible_products().len(), 2);

        assert!(!state.toggle_facet(FacetField::ProductType, "Skincare"));
        assert_eq!(state.visible_products().len(), 3);
    }

    #[test]
    fn snapshot_survives_reload() {
        let mut state = AppState::new(&config());
        state.load_from(&catalog()).unwrap();
        let before = state.snapshot();

        state.load_from(&Vec::<Product>::new()).unwrap();
        assert_eq!(before.len(), 3);
        assert!(state.snapshot().is_empty());
        assert!(state.visible_products().is_empty());
    }

    #[test]
    fn default_price_range_spans_catalog() {
        let mut state = AppState::new(&config());
        state.load_from(&catalog()).unwrap();
        assert_eq!(state.default_price_range(), PriceRange::new(0.0, 30.0));
        assert_eq!(state.get_catalog_name(), "in-memory catalog");
    }

    #[test]
    fn facets_ignore_active_filters() {
        let mut state = AppState::new(&config());
        state.load_from(&catalog()).unwrap();
        state.set_criteria(FilterCriteria::from_query("productType=serum"));
        let buckets = state.facets(FacetField::ProductType, false);
        let counts: Vec<usize> = buckets.iter().map(|b| b.count).collect();
        assert_eq!(counts, vec![1, 2]);
    }
}
