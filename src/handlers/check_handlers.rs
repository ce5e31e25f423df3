use anyhow::Result;
use cereza_core::{validate_catalog, validate_catalog_file, CatalogError};
use clap::Args;
use std::path::PathBuf;

use crate::state::AppState;
use crate::ui::{set_status, show_error, StatusLevel};

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Also validate the raw catalog file against this JSON schema
    #[arg(long, value_name = "FILE")]
    pub schema: Option<PathBuf>,
}

/// Handle `cereza check`. Returns whether the catalog passed.
pub fn handle_check(state: &AppState, args: &CheckArgs) -> Result<bool> {
    let mut passed = true;

    if let (Some(schema), Some(data)) = (&args.schema, &state.current_file) {
        match validate_catalog_file(schema, data) {
            Ok(()) => set_status("Schema: ok", StatusLevel::Success),
            Err(CatalogError::Schema(errors)) => {
                passed = false;
                show_error(
                    "Schema validation failed",
                    format!("{} problem(s) in {}", errors.len(), data.display()),
                    numbered(&errors),
                );
            }
            Err(e) => return Err(e.into()),
        }
    }

    let catalog = state.snapshot();
    match validate_catalog(&catalog) {
        Ok(()) => set_status(
            format!("Catalog: {} products, no issues", catalog.len()),
            StatusLevel::Success,
        ),
        Err(issues) => {
            passed = false;
            set_status(
                format!("Catalog: {} issue(s) found", issues.len()),
                StatusLevel::Warning,
            );
            eprintln!("{}", numbered(&issues));
        }
    }

    Ok(passed)
}

fn numbered(lines: &[String]) -> String {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| format!("  {}. {}", i + 1, line))
        .collect::<Vec<_>>()
        .join("\n")
}
