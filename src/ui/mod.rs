pub mod formatting;

use colored::Colorize;

pub use formatting::{
    format_active_filters, format_facet_bucket, format_price, format_product_row, format_rating,
};

/// Semantic level of a status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Print a status line to stderr, colored by level
pub fn set_status(text: impl AsRef<str>, level: StatusLevel) {
    let text = text.as_ref();
    let line = match level {
        StatusLevel::Info => text.dimmed(),
        StatusLevel::Success => text.green(),
        StatusLevel::Warning => text.yellow(),
        StatusLevel::Error => text.red(),
    };
    eprintln!("{}", line);
}

/// Print an error block: bold title, message, then details
pub fn show_error(title: impl AsRef<str>, message: impl AsRef<str>, details: impl AsRef<str>) {
    eprintln!("{}", title.as_ref().red().bold());
    eprintln!("{}", message.as_ref());
    let details = details.as_ref();
    if !details.is_empty() {
        eprintln!();
        eprintln!("{}", details.dimmed());
    }
}
