use anyhow::Result;
use cereza_core::FacetField;
use clap::Args;

use crate::state::AppState;
use crate::ui::format_facet_bucket;

#[derive(Args, Debug)]
pub struct FacetArgs {
    /// Facet field: product-type, category, sub-category, brand or status.
    /// All fields when omitted.
    #[arg(short, long, value_name = "FIELD")]
    pub field: Option<FacetField>,

    /// Count raw labels as they appear instead of grouping by slug
    #[arg(long)]
    pub raw: bool,

    #[arg(long)]
    pub json: bool,
}

const ALL_FIELDS: [FacetField; 5] = [
    FacetField::Category,
    FacetField::SubCategory,
    FacetField::ProductType,
    FacetField::Brand,
    FacetField::Status,
];

/// Handle `cereza facets`
pub fn handle_facets(state: &AppState, args: &FacetArgs) -> Result<()> {
    let fields: Vec<FacetField> = match args.field {
        Some(field) => vec![field],
        None => ALL_FIELDS.to_vec(),
    };

    if args.json {
        let report: serde_json::Map<String, serde_json::Value> = fields
            .iter()
            .map(|field| {
                let buckets = state.facets(*field, args.raw);
                Ok((field.query_key().to_string(), serde_json::to_value(buckets)?))
            })
            .collect::<Result<_, serde_json::Error>>()?;
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for field in fields {
        let buckets = state.facets(field, args.raw);
        println!("## {}", field.display_name());
        if buckets.is_empty() {
            println!("  (none)");
        }
        for bucket in &buckets {
            println!("  {}  {}", format_facet_bucket(bucket, false), bucket.slug);
        }
        println!();
    }

    Ok(())
}
