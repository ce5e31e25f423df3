use crate::models::Product;
use std::collections::HashSet;

/// Lint a loaded catalog for data-quality problems.
/// Returns Ok(()) if clean, or Err(Vec<String>) listing every issue found.
///
/// The engine tolerates all of these; this report is for whoever maintains
/// the catalog.
pub fn validate_catalog(products: &[Product]) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    let mut seen_ids = HashSet::new();

    for (idx, product) in products.iter().enumerate() {
        let product_ref = format!("Product #{} ('{}')", idx + 1, product.title);

        if product.id.trim().is_empty() {
            errors.push(format!("{}: id cannot be empty", product_ref));
        } else if !seen_ids.insert(product.id.as_str()) {
            errors.push(format!("{}: duplicate id '{}'", product_ref, product.id));
        }

        if product.title.trim().is_empty() {
            errors.push(format!("{}: title cannot be empty", product_ref));
        }

        validate_pricing(product, &product_ref, &mut errors);

        match &product.status {
            Some(status) if !status.is_known() => errors.push(format!(
                "{}: unknown status '{}'",
                product_ref, status
            )),
            None => errors.push(format!("{}: missing status", product_ref)),
            _ => {}
        }

        if product.product_type.is_none() {
            errors.push(format!("{}: missing productType", product_ref));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

pub fn validate_pricing(product: &Product, product_ref: &str, errors: &mut Vec<String>) {
    match product.price {
        None => errors.push(format!("{}: missing or unparsable price", product_ref)),
        Some(price) if price < 0.0 => {
            errors.push(format!("{}: price cannot be negative ({})", product_ref, price))
        }
        _ => {}
    }

    if let Some(discount) = product.discount {
        if !(0.0..=100.0).contains(&discount) {
            errors.push(format!(
                "{}: discount {} is outside 0-100",
                product_ref, discount
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProductStatus;

    fn valid(id: &str) -> Product {
        Product {
            id: id.to_string(),
            title: "Hydra Serum".to_string(),
            price: Some(29.0),
            discount: Some(10.0),
            status: Some(ProductStatus::InStock),
            product_type: Some("Serum".to_string()),
            ..Product::default()
        }
    }

    #[test]
    fn test_clean_catalog_passes() {
        assert!(validate_catalog(&[valid("a"), valid("b")]).is_ok());
        assert!(validate_catalog(&[]).is_ok());
    }

    #[test]
    fn test_duplicate_and_empty_ids() {
        let errors = validate_catalog(&[valid("a"), valid("a"), valid("")]).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("duplicate id 'a'"));
        assert!(errors[1].contains("id cannot be empty"));
    }

    #[test]
    fn test_pricing_problems() {
        let products = vec![
            Product { price: None, ..valid("a") },
            Product { price: Some(-1.0), ..valid("b") },
            Product { discount: Some(150.0), ..valid("c") },
        ];
        let errors = validate_catalog(&products).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors[0].contains("missing or unparsable price"));
        assert!(errors[1].contains("negative"));
        assert!(errors[2].contains("outside 0-100"));
    }

    #[test]
    fn test_status_and_type_problems() {
        let products = vec![
            Product {
                status: Some(ProductStatus::Other("Show".to_string())),
                ..valid("a")
            },
            Product {
                status: None,
                product_type: None,
                ..valid("b")
            },
        ];
        let errors = validate_catalog(&products).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors[0].contains("unknown status 'Show'"));
        assert!(errors[1].contains("missing status"));
        assert!(errors[2].contains("missing productType"));
    }
}
