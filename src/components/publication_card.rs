//! Catalog card for a single publication.

#[cfg(test)]
#[path = "publication_card_test.rs"]
mod publication_card_test;

use leptos::prelude::*;

use crate::net::types::Publication;
use crate::util::text::format_price;

/// Location line: `"City, Province"`, whichever parts are known.
fn location_label(publication: &Publication) -> String {
    let city = publication.city.as_ref();
    let parts: Vec<&str> = [
        city.map(|c| c.name.as_str()),
        city.and_then(|c| c.province.as_ref()).map(|p| p.name.as_str()),
    ]
    .into_iter()
    .flatten()
    .filter(|part| !part.is_empty())
    .collect();
    parts.join(", ")
}

#[component]
pub fn PublicationCard(publication: Publication) -> impl IntoView {
    let location = location_label(&publication);
    let category = publication
        .category
        .as_ref()
        .map(|c| c.name.clone())
        .unwrap_or_default();
    let price = format_price(publication.price);
    let image = publication.image_url.clone().unwrap_or_default();
    let brand = publication.brand.clone().unwrap_or_default();

    view! {
        <article class="publication-card">
            <img class="publication-card__image" src=image alt=publication.title.clone()/>
            <div class="publication-card__body">
                <h3 class="publication-card__title">{publication.title}</h3>
                <p class="publication-card__price">{price}</p>
                <p class="publication-card__meta">{brand}</p>
                <p class="publication-card__meta">{category}</p>
                <p class="publication-card__meta">{location}</p>
                <span class="publication-card__state">{publication.state}</span>
            </div>
        </article>
    }
}
