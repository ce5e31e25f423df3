use crate::models::{Product, SortDirective};
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Apply a sort directive in place. All orderings are stable.
///
/// `OnSaleFirst` drops undiscounted products instead of reordering; the shop
/// has always treated that option as a filter.
pub fn sort_products(items: &mut Vec<Product>, sort: SortDirective) {
    match sort {
        SortDirective::None => {}
        SortDirective::PriceLowToHigh => {
            items.sort_by(|a, b| compare_missing_last(a.price, b.price, |x, y| x.total_cmp(&y)));
        }
        SortDirective::PriceHighToLow => {
            items.sort_by(|a, b| compare_missing_last(a.price, b.price, |x, y| y.total_cmp(&x)));
        }
        SortDirective::NewestFirst => {
            items.sort_by(|a, b| {
                compare_missing_last(a.created_at, b.created_at, |x, y| y.cmp(&x))
            });
        }
        SortDirective::OnSaleFirst => items.retain(Product::is_on_sale),
    }
}

/// Order two optional keys with `cmp`, putting `None` after every value.
pub fn compare_missing_last<T, F>(a: Option<T>, b: Option<T>, cmp: F) -> Ordering
where
    F: FnOnce(T, T) -> Ordering,
{
    match (a, b) {
        (Some(x), Some(y)) => cmp(x, y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Locale-aware label comparison, in three levels:
/// - base letters, ignoring accents and case
/// - accents, unaccented first
/// - case, lowercase first
///
/// Raw code points break any remaining tie so the order is total.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| case_flags(a).cmp(case_flags(b)))
        .then_with(|| a.cmp(b))
}

fn case_flags(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.chars().map(char::is_uppercase)
}

/// Primary collation key
/// - NFD decomposition with combining marks removed
/// - lowercase
/// - whitespace collapsed
pub fn collation_key(s: &str) -> String {
    let stripped: String = s.nfd().filter(|c| !is_combining_mark(*c)).collect();
    stripped
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn priced(id: &str, price: Option<f64>) -> Product {
        Product {
            id: id.to_string(),
            price,
            ..Product::default()
        }
    }

    fn ids(items: &[Product]) -> Vec<&str> {
        items.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_price_low_to_high_missing_last() {
        let mut items = vec![
            priced("a", Some(30.0)),
            priced("b", None),
            priced("c", Some(10.0)),
            priced("d", Some(20.0)),
        ];
        sort_products(&mut items, SortDirective::PriceLowToHigh);
        assert_eq!(ids(&items), vec!["c", "d", "a", "b"]);
    }

    #[test]
    fn test_price_high_to_low_missing_last() {
        let mut items = vec![
            priced("a", None),
            priced("b", Some(10.0)),
            priced("c", Some(30.0)),
        ];
        sort_products(&mut items, SortDirective::PriceHighToLow);
        assert_eq!(ids(&items), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_equal_prices_keep_input_order() {
        let mut items = vec![
            priced("first", Some(5.0)),
            priced("second", Some(5.0)),
            priced("third", Some(1.0)),
        ];
        sort_products(&mut items, SortDirective::PriceLowToHigh);
        assert_eq!(ids(&items), vec!["third", "first", "second"]);
    }

    #[test]
    fn test_newest_first_unknown_dates_last() {
        let dated = |id: &str, day: Option<u32>| Product {
            id: id.to_string(),
            created_at: day.map(|d| Utc.with_ymd_and_hms(2024, 3, d, 0, 0, 0).unwrap()),
            ..Product::default()
        };
        let mut items = vec![dated("old", Some(1)), dated("none", None), dated("new", Some(20))];
        sort_products(&mut items, SortDirective::NewestFirst);
        assert_eq!(ids(&items), vec!["new", "old", "none"]);
    }

    #[test]
    fn test_on_sale_filters_without_reordering() {
        let discounted = |id: &str, discount: f64| Product {
            id: id.to_string(),
            discount: Some(discount),
            ..Product::default()
        };
        let mut items = vec![
            discounted("a", 0.0),
            discounted("b", 10.0),
            discounted("c", 0.0),
            discounted("d", 5.0),
        ];
        sort_products(&mut items, SortDirective::OnSaleFirst);
        assert_eq!(ids(&items), vec!["b", "d"]);
    }

    #[test]
    fn test_none_is_identity() {
        let mut items = vec![priced("z", Some(3.0)), priced("a", Some(1.0))];
        sort_products(&mut items, SortDirective::None);
        assert_eq!(ids(&items), vec!["z", "a"]);
    }

    #[test]
    fn test_locale_compare_ignores_accents_and_case() {
        assert_eq!(locale_compare("crème", "Creme"), Ordering::Greater);
        assert_eq!(locale_compare("Crème", "Serum"), Ordering::Less);
        assert_eq!(locale_compare("body", "Crème"), Ordering::Less);
        assert_eq!(locale_compare("Serum", "Serum"), Ordering::Equal);
    }

    #[test]
    fn test_locale_compare_puts_lowercase_first() {
        assert_eq!(locale_compare("serum", "Serum"), Ordering::Less);
        assert_eq!(locale_compare("Body care", "Body Care"), Ordering::Less);
        assert_eq!(locale_compare("Creme", "crème"), Ordering::Less);
    }

    #[test]
    fn test_collation_key() {
        assert_eq!(collation_key("Crème  Hydratante"), "creme hydratante");
    }
}
