//! Free-text search shared between the navbar and the catalog.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use crate::net::types::Publication;
use crate::util::text::contains_ignore_case;

/// Search term plus the navbar's collapsible search box.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchState {
    pub title: String,
    pub open: bool,
}

impl SearchState {
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn toggle_open(&mut self) {
        self.open = !self.open;
    }

    /// Close the box and forget the term.
    pub fn clear(&mut self) {
        self.title.clear();
        self.open = false;
    }

    /// Whether `publication`'s title contains the term. An empty term matches all.
    pub fn matches(&self, publication: &Publication) -> bool {
        contains_ignore_case(&publication.title, &self.title)
    }
}
