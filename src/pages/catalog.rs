//! Catalog page: facet sidebar plus the filtered publication grid.
//!
//! SYSTEM CONTEXT
//! ==============
//! The full list is fetched once per mount and filtered in memory. The
//! category facet is mirrored into `?category=<name>` so links such as
//! `/?category=guitarras` open pre-filtered; the other facets live only in
//! page state.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::filters_panel::FiltersPanel;
use crate::components::publication_card::PublicationCard;
use crate::net::api;
use crate::net::types::Publication;
use crate::state::filters::{
    FacetOptions, FilterSelection, category_from_query, filter_publications, query_for_category,
};
use crate::state::search::SearchState;
use crate::util::query::href;

#[component]
pub fn CatalogPage() -> impl IntoView {
    let search = expect_context::<RwSignal<SearchState>>();
    let location = use_location();
    let navigate = use_navigate();

    let publications = RwSignal::new(Vec::<Publication>::new());
    let loading = RwSignal::new(true);
    let selection = RwSignal::new(FilterSelection::default());

    leptos::task::spawn_local(async move {
        match api::fetch_publications().await {
            Ok(list) => publications.set(list),
            Err(e) => log::warn!("catalog fetch failed: {e}"),
        }
        loading.set(false);
    });

    let options = Memo::new(move |_| publications.with(|list| selection.with(|s| FacetOptions::derive(list, s))));

    // URL -> selection.
    Effect::new(move || {
        let search_str = location.search.get();
        let current = selection.with_untracked(FilterSelection::category);
        if let Some(next) = publications.with(|list| category_from_query(list, &search_str, current)) {
            selection.update(|s| s.select_category(Some(next)));
        }
    });

    // Selection -> URL.
    let category = Memo::new(move |_| selection.with(FilterSelection::category));
    Effect::new(move || {
        let selected = category.get();
        let search_str = location.search.get_untracked();
        let next = publications.with_untracked(|list| {
            options.with_untracked(|o| query_for_category(list, &o.categories, &search_str, selected))
        });
        if let Some(next) = next {
            navigate(&href(&location.pathname.get_untracked(), &next), NavigateOptions::default());
        }
    });

    let visible = move || {
        publications.with(|list| {
            selection.with(|s| {
                search.with(|term| filter_publications(list, s, term).into_iter().cloned().collect::<Vec<_>>())
            })
        })
    };

    view! {
        <div class="catalog-page">
            <FiltersPanel options=options selection=selection/>
            <section class="catalog-page__results">
                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <p class="catalog-page__status">"Cargando publicaciones..."</p> }
                >
                    <Show
                        when=move || !visible().is_empty()
                        fallback=|| view! { <p class="catalog-page__status">"No se encontraron publicaciones."</p> }
                    >
                        <div class="catalog-page__grid">
                            <For
                                each=visible
                                key=|p| p.id
                                children=|p| view! { <PublicationCard publication=p/> }
                            />
                        </div>
                    </Show>
                </Show>
            </section>
        </div>
    }
}
