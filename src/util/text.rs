//! Text folding for loose user-facing matches.

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Canonical-decompose, drop combining marks, lowercase.
///
/// `"Guítarras"`, `"GUITARRAS"` and `"guitarras"` all fold to `"guitarras"`.
pub fn fold_for_match(input: &str) -> String {
    input
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Case-insensitive match of `needle` within `haystack`. Empty needle matches.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Price label for cards and order lines; `$` plus the shortest decimal form.
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(price) => format!("${price}"),
        None => "Precio a consultar".to_owned(),
    }
}
