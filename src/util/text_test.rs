use super::*;

#[test]
fn fold_strips_acute_accent_and_case() {
    assert_eq!(fold_for_match("Guítarras"), "guitarras");
}

#[test]
fn fold_handles_enye_and_uppercase() {
    assert_eq!(fold_for_match("BAÑO"), "bano");
}

#[test]
fn fold_leaves_plain_ascii_lowercased() {
    assert_eq!(fold_for_match("Teclados"), "teclados");
}

#[test]
fn folded_forms_compare_equal() {
    assert_eq!(fold_for_match("Percusión"), fold_for_match("percusion"));
}

#[test]
fn contains_ignore_case_matches_substring() {
    assert!(contains_ignore_case("Les Paul Standard", "paul"));
    assert!(!contains_ignore_case("Yamaha P45", "paul"));
}

#[test]
fn contains_ignore_case_empty_needle_matches_everything() {
    assert!(contains_ignore_case("anything", ""));
}

#[test]
fn format_price_drops_trailing_zero_fraction() {
    assert_eq!(format_price(Some(1500.0)), "$1500");
    assert_eq!(format_price(Some(1500.5)), "$1500.5");
}

#[test]
fn format_price_without_value_asks_to_consult() {
    assert_eq!(format_price(None), "Precio a consultar");
}
