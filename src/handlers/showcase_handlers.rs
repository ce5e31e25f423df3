use anyhow::Result;
use cereza_core::{
    most_discounted, offer_products, products_of_type, related_products, top_rated, Product,
    ShowcaseMode, RELATED_LIMIT,
};
use chrono::Utc;
use clap::Subcommand;

use crate::errors::map_lookup_error;
use crate::state::AppState;
use crate::ui::{format_product_row, format_rating, set_status, show_error, StatusLevel};

/// Home page rails and product-detail strips
#[derive(Subcommand, Debug)]
pub enum ShowcaseCommand {
    /// Largest discounts first
    Discounted,
    /// Best average review rating first
    TopRated,
    /// Newest products of a type
    New {
        #[arg(value_name = "TYPE")]
        product_type: String,
    },
    /// Featured products of a type
    Featured {
        #[arg(value_name = "TYPE")]
        product_type: String,
    },
    /// Best sellers of a type
    TopSellers {
        #[arg(value_name = "TYPE")]
        product_type: String,
    },
    /// Most reviewed products of a type
    Popular {
        #[arg(value_name = "TYPE")]
        product_type: String,
    },
    /// Products whose offer has not ended yet
    Offers {
        #[arg(long = "type", value_name = "TYPE")]
        product_type: Option<String>,
    },
    /// Products in the same category as the given one
    Related {
        #[arg(value_name = "ID")]
        id: String,
    },
}

/// Handle `cereza showcase`. Returns false when the requested product is
/// unknown.
pub fn handle_showcase(
    state: &AppState,
    command: &ShowcaseCommand,
    limit: usize,
) -> Result<bool> {
    let catalog = state.snapshot();

    let (title, items) = match command {
        ShowcaseCommand::Discounted => ("Best Discounts", most_discounted(&catalog, limit)),
        ShowcaseCommand::TopRated => {
            print_top_rated(&catalog, limit);
            return Ok(true);
        }
        ShowcaseCommand::New { product_type } => (
            "New Arrivals",
            products_of_type(&catalog, product_type, ShowcaseMode::NewArrivals, limit),
        ),
        ShowcaseCommand::Featured { product_type } => (
            "Featured",
            products_of_type(&catalog, product_type, ShowcaseMode::Featured, limit),
        ),
        ShowcaseCommand::TopSellers { product_type } => (
            "Top Sellers",
            products_of_type(&catalog, product_type, ShowcaseMode::TopSellers, limit),
        ),
        ShowcaseCommand::Popular { product_type } => (
            "Popular",
            products_of_type(&catalog, product_type, ShowcaseMode::Popular, limit),
        ),
        ShowcaseCommand::Offers { product_type } => {
            let mut items = offer_products(&catalog, Utc::now(), product_type.as_deref());
            items.truncate(limit);
            ("Deals of the Day", items)
        }
        ShowcaseCommand::Related { id } => match related_products(&catalog, id, RELATED_LIMIT) {
            Ok(items) => ("Related Products", items),
            Err(e) => {
                let (title, message, details) = map_lookup_error(&e);
                show_error(&title, &message, &details);
                return Ok(false);
            }
        },
    };

    print_rail(title, &items);
    Ok(true)
}

fn print_top_rated(catalog: &[Product], limit: usize) {
    let rated = top_rated(catalog, limit);
    println!("## Top Rated\n");
    if rated.is_empty() {
        println!("  No reviewed products yet.");
    }
    for entry in rated {
        println!(
            "  {}  {}",
            format_rating(entry.rating),
            format_product_row(entry.product)
        );
    }
}

fn print_rail(title: &str, items: &[&Product]) {
    println!("## {}\n", title);
    if items.is_empty() {
        set_status("Nothing to show.", StatusLevel::Info);
        return;
    }
    for product in items {
        println!("  {}", format_product_row(product));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShopConfig;
    use std::path::PathBuf;

    fn state() -> AppState {
        let config = ShopConfig {
            catalog_path: PathBuf::from("data/catalog.json"),
            log_level: "warn".to_string(),
            page_size: 12,
            showcase_limit: 8,
        };
        let mut state = AppState::new(&config);
        let catalog: Vec<Product> = ["a", "b"]
            .iter()
            .map(|id| Product {
                id: id.to_string(),
                category: Some("PURE".to_string()),
                product_type: Some("skincare".to_string()),
                ..Product::default()
            })
            .collect();
        state.load_from(&catalog).unwrap();
        state
    }

    #[test]
    fn unknown_related_id_reports_failure() {
        let command = ShowcaseCommand::Related { id: "missing".to_string() };
        assert!(!handle_showcase(&state(), &command, 8).unwrap());
    }

    #[test]
    fn known_rails_succeed() {
        let related = ShowcaseCommand::Related { id: "a".to_string() };
        assert!(handle_showcase(&state(), &related, 8).unwrap());

        let popular = ShowcaseCommand::Popular { product_type: "skincare".to_string() };
        assert!(handle_showcase(&state(), &popular, 1).unwrap());
    }
}
