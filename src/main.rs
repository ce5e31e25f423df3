mod config;
mod errors;
mod handlers;
mod logging;
mod state;
mod ui;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use tracing::info;

use errors::map_catalog_load_error;
use handlers::{
    handle_check, handle_facets, handle_list, handle_showcase, CheckArgs, FacetArgs, ListArgs,
    ShowcaseCommand,
};
use state::AppState;
use ui::show_error;

/// Cereza storefront catalog browser
///
/// Examples:
///   # First page of everything
///   cereza list
///
///   # Serums under $30, cheapest first
///   cereza list --product-type serum --max-price 30 --sort price-asc
///
///   # Same thing as a storefront query string
///   cereza list --query "productType=serum&minPrice=0&maxPrice=30" --sort "Low to High"
///
///   # Brand sidebar with counts
///   cereza facets --field brand
///
///   # Home page rails
///   cereza showcase top-rated
///   cereza showcase new skincare
#[derive(Parser, Debug)]
#[command(name = "cereza")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Filtering Logic:\n  \
    - Each criterion matches the slug of the product's label,\n    \
      so \"Skin Care\" and skin-care are the same\n  \
    - Different criteria are combined with AND\n  \
    - A price range needs both bounds; a missing bound defaults to the catalog span\n  \
    - Products without a price never match a price range\n\n\
Sorting Options:\n  \
    - none, price-asc, price-desc, newest, on-sale\n  \
    - on-sale keeps only discounted products")]
struct Cli {
    /// Catalog JSON file (defaults to CEREZA_CATALOG or data/catalog.json)
    #[arg(short, long, global = true, value_name = "FILE")]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Filter, sort and page through products
    List(ListArgs),
    /// Facet buckets with product counts
    Facets(FacetArgs),
    /// Home page rails and related products
    #[command(subcommand)]
    Showcase(ShowcaseCommand),
    /// Report catalog data problems
    Check(CheckArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = config::load_shop_config()?;
    logging::init(&config.log_level);

    let path = cli.catalog.clone().unwrap_or_else(|| config.catalog_path.clone());
    let mut state = AppState::new(&config);

    if let Err(e) = state.load_from_file(path.clone()) {
        let (title, message, details) = map_catalog_load_error(&e, &path);
        show_error(&title, &message, &details);
        process::exit(1);
    }
    info!(catalog = %state.get_catalog_name(), "catalog ready");

    match &cli.command {
        Commands::List(args) => handle_list(&mut state, args)?,
        Commands::Facets(args) => handle_facets(&state, args)?,
        Commands::Showcase(command) => {
            if !handle_showcase(&state, command, config.showcase_limit)? {
                process::exit(1);
            }
        }
        Commands::Check(args) => {
            if !handle_check(&state, args)? {
                process::exit(1);
            }
        }
    }

    Ok(())
}
