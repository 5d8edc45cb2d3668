use super::*;

// =============================================================
// query_param
// =============================================================

#[test]
fn reads_param_with_or_without_question_mark() {
    assert_eq!(query_param("?category=Guitarras", "category").as_deref(), Some("Guitarras"));
    assert_eq!(query_param("page=2&category=Bajos", "category").as_deref(), Some("Bajos"));
}

#[test]
fn decodes_percent_and_plus() {
    assert_eq!(query_param("category=Percusi%C3%B3n", "category").as_deref(), Some("Percusión"));
    assert_eq!(query_param("category=Vientos+madera", "category").as_deref(), Some("Vientos madera"));
}

#[test]
fn missing_param_is_none() {
    assert_eq!(query_param("", "category"), None);
    assert_eq!(query_param("?page=1", "category"), None);
}

// =============================================================
// with_query_param
// =============================================================

#[test]
fn sets_param_on_empty_query() {
    assert_eq!(with_query_param("", "category", Some("Teclados")), "category=Teclados");
}

#[test]
fn replaces_existing_param_and_keeps_others() {
    assert_eq!(
        with_query_param("?page=2&category=Bajos", "category", Some("Guitarras")),
        "page=2&category=Guitarras"
    );
}

#[test]
fn encodes_new_value() {
    assert_eq!(
        with_query_param("", "category", Some("Percusión y más")),
        "category=Percusi%C3%B3n%20y%20m%C3%A1s"
    );
}

#[test]
fn removing_last_param_yields_empty_query() {
    assert_eq!(with_query_param("?category=Bajos", "category", None), "");
}

#[test]
fn href_omits_empty_query() {
    assert_eq!(href("/", ""), "/");
    assert_eq!(href("/", "category=Bajos"), "/?category=Bajos");
}
