use super::*;

// =============================================================
// Fixtures
// =============================================================

fn les_paul() -> Publication {
    serde_json::from_value(serde_json::json!({
        "ID_Publication": 1,
        "Title": "Les Paul",
        "State": "usado",
        "Category": { "ID_Category": 1, "CategoryName": "Guitarras" },
        "SubCategory": { "ID_SubCategory": 11, "NameSubCategory": "Eléctricas" },
        "City": { "ID_City": 40, "Name": "Rosario", "Province": { "ID_Province": 4, "Name": "Santa Fe" } }
    }))
    .unwrap()
}

fn yamaha_p45() -> Publication {
    serde_json::from_value(serde_json::json!({
        "ID_Publication": 2,
        "Title": "Yamaha P45",
        "State": "nuevo",
        "Category": { "ID_Category": 2, "CategoryName": "Teclados" },
        "SubCategory": { "ID_SubCategory": 21, "NameSubCategory": "Pianos digitales" },
        "City": { "ID_City": 10, "Name": "La Plata", "Province": { "ID_Province": 1, "Name": "Buenos Aires" } }
    }))
    .unwrap()
}

fn stratocaster() -> Publication {
    serde_json::from_value(serde_json::json!({
        "ID_Publication": 3,
        "Title": "Stratocaster",
        "State": "poco usado",
        "Category": { "ID_Category": 1, "CategoryName": "Guitarras" },
        "SubCategory": { "ID_SubCategory": 12, "NameSubCategory": "Acústicas" },
        "City": { "ID_City": 11, "Name": "Mar del Plata", "Province": { "ID_Province": 1, "Name": "Buenos Aires" } }
    }))
    .unwrap()
}

fn bare(id: i64) -> Publication {
    serde_json::from_value(serde_json::json!({ "ID_Publication": id, "Title": "Sin datos" })).unwrap()
}

fn catalog() -> Vec<Publication> {
    vec![les_paul(), yamaha_p45(), stratocaster(), bare(4)]
}

fn ids(list: &[&Publication]) -> Vec<i64> {
    list.iter().map(|p| p.id).collect()
}

fn term(title: &str) -> SearchState {
    let mut search = SearchState::default();
    search.set_title(title);
    search
}

fn option_ids(options: &[FacetOption]) -> Vec<i64> {
    options.iter().map(|o| o.id).collect()
}

// =============================================================
// Matching
// =============================================================

#[test]
fn empty_selection_returns_full_list() {
    let list = catalog();
    let out = filter_publications(&list, &FilterSelection::default(), &term(""));
    assert_eq!(ids(&out), [1, 2, 3, 4]);
}

#[test]
fn category_and_condition_select_les_paul_only() {
    let list = vec![les_paul(), yamaha_p45()];
    let mut selection = FilterSelection::default();
    selection.select_category(Some(1));
    selection.select_condition(Some(Condition::Usado));
    assert_eq!(ids(&filter_publications(&list, &selection, &term(""))), [1]);
}

#[test]
fn condition_nuevo_selects_yamaha_only() {
    let list = vec![les_paul(), yamaha_p45()];
    let mut selection = FilterSelection::default();
    selection.select_condition(Some(Condition::Nuevo));
    assert_eq!(ids(&filter_publications(&list, &selection, &term(""))), [2]);
}

#[test]
fn province_and_city_narrow_by_location() {
    let list = catalog();
    let mut selection = FilterSelection::default();
    selection.select_province(Some(1));
    assert_eq!(ids(&filter_publications(&list, &selection, &term(""))), [2, 3]);
    selection.select_city(Some(11));
    assert_eq!(ids(&filter_publications(&list, &selection, &term(""))), [3]);
}

#[test]
fn subcategory_narrows_within_category() {
    let list = catalog();
    let mut selection = FilterSelection::default();
    selection.select_category(Some(1));
    selection.select_sub_category(Some(12));
    assert_eq!(ids(&filter_publications(&list, &selection, &term(""))), [3]);
}

#[test]
fn search_term_is_anded_with_facets() {
    let list = catalog();
    let mut selection = FilterSelection::default();
    selection.select_category(Some(1));
    assert_eq!(ids(&filter_publications(&list, &selection, &term("STRAT"))), [3]);
    assert!(filter_publications(&list, &selection, &term("yamaha")).is_empty());
}

#[test]
fn publications_without_associations_fail_active_facets() {
    let list = vec![bare(9)];
    let mut selection = FilterSelection::default();
    selection.select_province(Some(1));
    assert!(filter_publications(&list, &selection, &term("")).is_empty());
}

#[test]
fn filtered_result_is_exact_subset_of_matches() {
    let list = catalog();
    let mut selection = FilterSelection::default();
    selection.select_category(Some(1));
    selection.select_province(Some(1));
    let out = filter_publications(&list, &selection, &term(""));
    let expected: Vec<i64> = list
        .iter()
        .filter(|p| p.category_key() == Some(1) && p.province_key() == Some(1))
        .map(|p| p.id)
        .collect();
    assert_eq!(ids(&out), expected);
}

// =============================================================
// Cascading selection
// =============================================================

#[test]
fn selecting_category_clears_subcategory() {
    let mut selection = FilterSelection::default();
    selection.select_category(Some(1));
    selection.select_sub_category(Some(11));
    selection.select_category(Some(2));
    assert_eq!(selection.sub_category(), None);
    selection.select_category(Some(2));
    assert_eq!(selection.category(), Some(2));
    assert_eq!(selection.sub_category(), None);
}

#[test]
fn reselecting_same_category_still_clears_subcategory() {
    let mut selection = FilterSelection::default();
    selection.select_category(Some(1));
    selection.select_sub_category(Some(11));
    selection.select_category(Some(1));
    assert_eq!(selection.sub_category(), None);
}

#[test]
fn selecting_province_clears_city() {
    let mut selection = FilterSelection::default();
    selection.select_province(Some(1));
    selection.select_city(Some(10));
    selection.select_province(Some(4));
    assert_eq!(selection.city(), None);
}

#[test]
fn children_require_a_parent() {
    let mut selection = FilterSelection::default();
    selection.select_sub_category(Some(11));
    selection.select_city(Some(10));
    assert!(selection.is_empty());
}

#[test]
fn reset_clears_everything() {
    let mut selection = FilterSelection::default();
    selection.select_category(Some(1));
    selection.select_province(Some(1));
    selection.select_condition(Some(Condition::Reparado));
    selection.reset();
    assert!(selection.is_empty());
}

// =============================================================
// Option derivation
// =============================================================

#[test]
fn options_are_distinct_in_first_seen_order() {
    let options = FacetOptions::derive(&catalog(), &FilterSelection::default());
    assert_eq!(option_ids(&options.categories), [1, 2]);
    assert_eq!(option_ids(&options.provinces), [4, 1]);
    assert_eq!(option_ids(&options.cities), [40, 10, 11]);
    assert!(options.sub_categories.is_empty());
}

#[test]
fn first_seen_name_wins_for_duplicate_ids() {
    let mut renamed = stratocaster();
    if let Some(category) = renamed.category.as_mut() {
        category.name = "Guitarras y bajos".to_owned();
    }
    let options = FacetOptions::derive(&[les_paul(), renamed], &FilterSelection::default());
    assert_eq!(options.categories, [FacetOption { id: 1, name: "Guitarras".to_owned() }]);
}

#[test]
fn cities_follow_selected_province() {
    let mut selection = FilterSelection::default();
    selection.select_province(Some(1));
    let options = FacetOptions::derive(&catalog(), &selection);
    assert_eq!(option_ids(&options.cities), [10, 11]);
    assert_eq!(option_ids(&options.provinces), [4, 1]);
}

#[test]
fn subcategories_follow_selected_category() {
    let mut selection = FilterSelection::default();
    selection.select_category(Some(1));
    let options = FacetOptions::derive(&catalog(), &selection);
    assert_eq!(option_ids(&options.sub_categories), [11, 12]);
}

#[test]
fn blank_names_are_skipped() {
    let mut unnamed = les_paul();
    if let Some(category) = unnamed.category.as_mut() {
        category.name = "  ".to_owned();
    }
    let options = FacetOptions::derive(&[unnamed], &FilterSelection::default());
    assert!(options.categories.is_empty());
}

// =============================================================
// URL parameter
// =============================================================

#[test]
fn category_param_matches_ignoring_case_and_accents() {
    let list = catalog();
    assert_eq!(resolve_category_param(&list, "Guitarras"), Some(1));
    assert_eq!(resolve_category_param(&list, "guitarras"), Some(1));
    assert_eq!(resolve_category_param(&list, "Guítarras"), Some(1));
    assert_eq!(resolve_category_param(&list, "TECLADOS"), Some(2));
}

#[test]
fn unknown_or_empty_category_param_selects_nothing() {
    let list = catalog();
    assert_eq!(resolve_category_param(&list, "Vientos"), None);
    assert_eq!(resolve_category_param(&list, ""), None);
    assert_eq!(resolve_category_param(&[], "Guitarras"), None);
}

#[test]
fn category_name_for_looks_up_display_name() {
    let options = FacetOptions::derive(&catalog(), &FilterSelection::default());
    assert_eq!(category_name_for(&options.categories, 2), Some("Teclados"));
    assert_eq!(category_name_for(&options.categories, 99), None);
}

#[test]
fn loading_with_a_category_param_selects_it() {
    let list = catalog();
    assert_eq!(category_from_query(&list, "?category=guitarras", None), Some(1));
    assert_eq!(category_from_query(&list, "?category=guitarras", Some(1)), None);
    assert_eq!(category_from_query(&list, "?category=Teclados", Some(1)), Some(2));
}

#[test]
fn unresolvable_param_leaves_url_and_selection_untouched() {
    let list = catalog();
    assert_eq!(category_from_query(&list, "?category=vientos", None), None);
    assert_eq!(category_from_query(&list, "?category=vientos", Some(2)), None);
    let options = FacetOptions::derive(&list, &FilterSelection::default());
    assert_eq!(query_for_category(&list, &options.categories, "?category=vientos", None), None);
}

#[test]
fn picking_a_category_writes_its_name_and_keeps_other_params() {
    let list = catalog();
    let options = FacetOptions::derive(&list, &FilterSelection::default());
    assert_eq!(
        query_for_category(&list, &options.categories, "?page=2", Some(1)).as_deref(),
        Some("page=2&category=Guitarras")
    );
    assert_eq!(
        query_for_category(&list, &options.categories, "?category=vientos", Some(2)).as_deref(),
        Some("category=Teclados")
    );
    assert_eq!(query_for_category(&list, &options.categories, "?category=guitarras", Some(1)), None);
}

#[test]
fn clearing_the_category_removes_the_param() {
    let list = catalog();
    let options = FacetOptions::derive(&list, &FilterSelection::default());
    assert_eq!(
        query_for_category(&list, &options.categories, "?category=Guitarras&page=2", None).as_deref(),
        Some("page=2")
    );
}

#[test]
fn dropping_the_param_keeps_the_selected_category() {
    // Navigating to the bare catalog (the navbar search does) must not clear it.
    let list = catalog();
    assert_eq!(category_from_query(&list, "", Some(1)), None);
    assert_eq!(category_from_query(&list, "?q=strat", Some(1)), None);

    // Mirroring the same selection again restores the parameter.
    let options = FacetOptions::derive(&list, &FilterSelection::default());
    assert_eq!(query_for_category(&list, &options.categories, "", Some(1)).as_deref(), Some("category=Guitarras"));
}

#[test]
fn selection_without_a_display_name_is_not_mirrored() {
    let list = catalog();
    assert_eq!(query_for_category(&list, &[], "", Some(1)), None);
}

// =============================================================
// Parsing
// =============================================================

#[test]
fn condition_round_trips_wire_values() {
    for condition in Condition::ALL {
        assert_eq!(Condition::parse(condition.as_str()), Some(condition));
    }
    assert_eq!(Condition::parse("poco usado"), Some(Condition::PocoUsado));
    assert_eq!(Condition::parse(""), None);
}

#[test]
fn facet_ids_parse_from_select_values() {
    assert_eq!(parse_facet_id("12"), Some(12));
    assert_eq!(parse_facet_id(""), None);
    assert_eq!(parse_facet_id("todas"), None);
}
