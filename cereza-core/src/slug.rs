//! Canonical comparison keys for free-form catalog labels.
//!
//! URL filters carry slugs, never raw labels, so two labels that differ only
//! in capitalization, spacing or ampersands select the same products.

use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Lowercase the label, strip every `&`, and turn each whitespace run into a
/// single hyphen. Absent or empty input yields an empty string.
pub fn slugify(label: Option<&str>) -> String {
    let Some(label) = label.filter(|l| !l.is_empty()) else {
        return String::new();
    };

    let lowered = label.to_lowercase().replace('&', "");
    WHITESPACE_RUN.replace_all(&lowered, "-").into_owned()
}

/// True when `label` slugifies to `slug`. An empty slug never matches.
pub fn slug_matches(label: Option<&str>, slug: &str) -> bool {
    !slug.is_empty() && slugify(label) == slug
}
