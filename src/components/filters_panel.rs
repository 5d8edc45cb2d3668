//! Facet `<select>`s for the catalog sidebar.
//!
//! Every control writes the page's [`FilterSelection`] through its cascade
//! methods; the catalog page mirrors the category into the URL.

use leptos::prelude::*;

use crate::state::filters::{Condition, FacetOption, FacetOptions, FilterSelection, parse_facet_id};

fn option_views(options: Vec<FacetOption>) -> impl IntoView {
    options
        .into_iter()
        .map(|o| view! { <option value=o.id.to_string()>{o.name}</option> })
        .collect_view()
}

fn select_value(id: Option<i64>) -> String {
    id.map(|id| id.to_string()).unwrap_or_default()
}

#[component]
pub fn FiltersPanel(
    #[prop(into)] options: Signal<FacetOptions>,
    selection: RwSignal<FilterSelection>,
) -> impl IntoView {
    view! {
        <aside class="filters">
            <h2 class="filters__title">"Filtros"</h2>

            <section class="filters__group">
                <h3>"Por categorías:"</h3>
                <label>
                    "Categoría"
                    <select
                        prop:value=move || select_value(selection.with(FilterSelection::category))
                        on:change=move |ev| {
                            let id = parse_facet_id(&event_target_value(&ev));
                            selection.update(|s| s.select_category(id));
                        }
                    >
                        <option value="">"Todas"</option>
                        {move || option_views(options.with(|o| o.categories.clone()))}
                    </select>
                </label>
                <label>
                    "Subcategoría"
                    <select
                        prop:value=move || select_value(selection.with(FilterSelection::sub_category))
                        disabled=move || selection.with(|s| s.category().is_none())
                        on:change=move |ev| {
                            let id = parse_facet_id(&event_target_value(&ev));
                            selection.update(|s| s.select_sub_category(id));
                        }
                    >
                        <option value="">"Todas"</option>
                        {move || option_views(options.with(|o| o.sub_categories.clone()))}
                    </select>
                </label>
            </section>

            <section class="filters__group">
                <h3>"Por ubicación:"</h3>
                <label>
                    "Provincia"
                    <select
                        prop:value=move || select_value(selection.with(FilterSelection::province))
                        on:change=move |ev| {
                            let id = parse_facet_id(&event_target_value(&ev));
                            selection.update(|s| s.select_province(id));
                        }
                    >
                        <option value="">"Todas"</option>
                        {move || option_views(options.with(|o| o.provinces.clone()))}
                    </select>
                </label>
                <label>
                    "Ciudad"
                    <select
                        prop:value=move || select_value(selection.with(FilterSelection::city))
                        disabled=move || selection.with(|s| s.province().is_none())
                        on:change=move |ev| {
                            let id = parse_facet_id(&event_target_value(&ev));
                            selection.update(|s| s.select_city(id));
                        }
                    >
                        <option value="">"Todas"</option>
                        {move || option_views(options.with(|o| o.cities.clone()))}
                    </select>
                </label>
            </section>

            <section class="filters__group">
                <h3>"Por estado:"</h3>
                <select
                    prop:value=move || selection.with(|s| s.condition().map(Condition::as_str).unwrap_or_default())
                    on:change=move |ev| {
                        let condition = Condition::parse(&event_target_value(&ev));
                        selection.update(|s| s.select_condition(condition));
                    }
                >
                    <option value="">"Todos"</option>
                    {Condition::ALL
                        .into_iter()
                        .map(|c| view! { <option value=c.as_str()>{c.label()}</option> })
                        .collect_view()}
                </select>
            </section>

            <button
                class="btn btn--secondary"
                on:click=move |_| selection.update(FilterSelection::reset)
            >
                "Limpiar filtros"
            </button>
        </aside>
    }
}
