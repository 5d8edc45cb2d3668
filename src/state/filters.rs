//! Catalog facet filter: option derivation, cascading selection, matching.
//!
//! SYSTEM CONTEXT
//! ==============
//! The catalog page owns one [`FilterSelection`] per mount and feeds it, the
//! fetched publication list and the shared search term into
//! [`filter_publications`]. Option lists come from the same in-memory list via
//! [`FacetOptions::derive`], so a facet only offers values that can match.
//!
//! DESIGN
//! ======
//! Subcategory is meaningful only under a category and city only under a
//! province. The selection enforces that structurally: the child is cleared
//! whenever its parent changes and refuses to be set without a parent.

#[cfg(test)]
#[path = "filters_test.rs"]
mod filters_test;

use std::collections::HashSet;

use crate::config::CATEGORY_QUERY_PARAM;
use crate::net::types::Publication;
use crate::state::search::SearchState;
use crate::util::query::{query_param, with_query_param};
use crate::util::text::fold_for_match;

/// One entry in a facet `<select>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FacetOption {
    pub id: i64,
    pub name: String,
}

/// Instrument condition as stored in the publication's `State` column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Condition {
    Nuevo,
    Usado,
    PocoUsado,
    Reparado,
}

impl Condition {
    pub const ALL: [Self; 4] = [Self::Nuevo, Self::Usado, Self::PocoUsado, Self::Reparado];

    /// Wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Nuevo => "nuevo",
            Self::Usado => "usado",
            Self::PocoUsado => "poco usado",
            Self::Reparado => "reparado",
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Nuevo => "Nuevo",
            Self::Usado => "Usado",
            Self::PocoUsado => "Poco usado",
            Self::Reparado => "Reparado",
        }
    }

    /// Parse a wire value. Empty or unknown strings yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == raw)
    }
}

/// Parse a `<select>` value into a facet id. `""` means "all".
pub fn parse_facet_id(raw: &str) -> Option<i64> {
    match raw.trim().parse::<i64>() {
        Ok(id) => Some(id),
        Err(_) => None,
    }
}

/// The user's active facet choices. `None` everywhere is the wildcard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FilterSelection {
    category: Option<i64>,
    sub_category: Option<i64>,
    province: Option<i64>,
    city: Option<i64>,
    condition: Option<Condition>,
}

impl FilterSelection {
    pub fn category(&self) -> Option<i64> {
        self.category
    }

    pub fn sub_category(&self) -> Option<i64> {
        self.sub_category
    }

    pub fn province(&self) -> Option<i64> {
        self.province
    }

    pub fn city(&self) -> Option<i64> {
        self.city
    }

    pub fn condition(&self) -> Option<Condition> {
        self.condition
    }

    /// Select a category and drop any subcategory.
    pub fn select_category(&mut self, category: Option<i64>) {
        self.category = category;
        self.sub_category = None;
    }

    /// Ignored while no category is selected.
    pub fn select_sub_category(&mut self, sub_category: Option<i64>) {
        if self.category.is_some() {
            self.sub_category = sub_category;
        }
    }

    /// Select a province and drop any city.
    pub fn select_province(&mut self, province: Option<i64>) {
        self.province = province;
        self.city = None;
    }

    /// Ignored while no province is selected.
    pub fn select_city(&mut self, city: Option<i64>) {
        if self.province.is_some() {
            self.city = city;
        }
    }

    pub fn select_condition(&mut self, condition: Option<Condition>) {
        self.condition = condition;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// AND of every active facet predicate.
    pub fn matches(&self, publication: &Publication) -> bool {
        fn facet(selected: Option<i64>, actual: Option<i64>) -> bool {
            selected.is_none_or(|id| actual == Some(id))
        }

        facet(self.category, publication.category_key())
            && facet(self.sub_category, publication.sub_category_key())
            && facet(self.province, publication.province_key())
            && facet(self.city, publication.city_key())
            && self.condition.is_none_or(|c| publication.state == c.as_str())
    }
}

/// Facets plus the free-text title search, applied to the full list.
pub fn filter_publications<'a>(
    publications: &'a [Publication],
    selection: &FilterSelection,
    search: &SearchState,
) -> Vec<&'a Publication> {
    publications
        .iter()
        .filter(|p| selection.matches(p) && search.matches(p))
        .collect()
}

/// Distinct option lists derived from a publication list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FacetOptions {
    pub provinces: Vec<FacetOption>,
    pub cities: Vec<FacetOption>,
    pub categories: Vec<FacetOption>,
    pub sub_categories: Vec<FacetOption>,
}

impl FacetOptions {
    /// Build every option list for the current selection.
    ///
    /// Cities narrow to the selected province (all cities otherwise).
    /// Subcategories are empty until a category is selected.
    pub fn derive(publications: &[Publication], selection: &FilterSelection) -> Self {
        let provinces = distinct(publications.iter().map(|p| {
            let province = p.city.as_ref()?.province.as_ref()?;
            Some((province.id, province.name.as_str()))
        }));

        let cities = distinct(
            publications
                .iter()
                .filter(|p| selection.province.is_none_or(|id| p.province_key() == Some(id)))
                .map(|p| p.city.as_ref().map(|c| (c.id, c.name.as_str()))),
        );

        let categories = distinct(
            publications
                .iter()
                .map(|p| p.category.as_ref().map(|c| (c.id, c.name.as_str()))),
        );

        let sub_categories = match selection.category {
            Some(category) => distinct(
                publications
                    .iter()
                    .filter(|p| p.category_key() == Some(category))
                    .map(|p| p.sub_category.as_ref().map(|s| (s.id, s.name.as_str()))),
            ),
            None => Vec::new(),
        };

        Self { provinces, cities, categories, sub_categories }
    }
}

/// First-seen dedupe by id, skipping missing entries and blank names.
fn distinct<'a>(entries: impl Iterator<Item = Option<(i64, &'a str)>>) -> Vec<FacetOption> {
    let mut seen = HashSet::new();
    entries
        .flatten()
        .filter(|(_, name)| !name.trim().is_empty())
        .filter(|(id, _)| seen.insert(*id))
        .map(|(id, name)| FacetOption { id, name: name.to_owned() })
        .collect()
}

/// Category id whose name matches the `category` URL parameter, ignoring
/// case and diacritics.
pub fn resolve_category_param(publications: &[Publication], param: &str) -> Option<i64> {
    let wanted = fold_for_match(param.trim());
    if wanted.is_empty() {
        return None;
    }
    publications
        .iter()
        .filter_map(|p| p.category.as_ref())
        .find(|c| fold_for_match(&c.name) == wanted)
        .map(|c| c.id)
}

/// Display name used when mirroring a category selection into the URL.
pub fn category_name_for(options: &[FacetOption], category: i64) -> Option<&str> {
    options
        .iter()
        .find(|o| o.id == category)
        .map(|o| o.name.as_str())
}

/// Category id named by the `category` parameter of `search`, if it resolves.
pub fn category_in_query(publications: &[Publication], search: &str) -> Option<i64> {
    query_param(search, CATEGORY_QUERY_PARAM).and_then(|name| resolve_category_param(publications, &name))
}

/// Category to select after the URL changed, or `None` to keep the current one.
///
/// Only a resolvable parameter moves the selection. A missing or unknown
/// parameter never clears it; clearing goes through the selection side.
pub fn category_from_query(publications: &[Publication], search: &str, current: Option<i64>) -> Option<i64> {
    category_in_query(publications, search).filter(|&resolved| Some(resolved) != current)
}

/// Query string mirroring a category selection, or `None` when the URL
/// already agrees or the selected id has no display name yet.
///
/// Other parameters are kept. An unresolvable parameter stays untouched
/// while nothing is selected.
pub fn query_for_category(
    publications: &[Publication],
    categories: &[FacetOption],
    search: &str,
    selected: Option<i64>,
) -> Option<String> {
    if category_in_query(publications, search) == selected {
        return None;
    }
    let name = match selected {
        Some(id) => Some(category_name_for(categories, id)?),
        None => None,
    };
    Some(with_query_param(search, CATEGORY_QUERY_PARAM, name))
}
