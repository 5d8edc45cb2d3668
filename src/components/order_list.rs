//! Order list shared by "Mis pedidos" and the seller's sales view.

#[cfg(test)]
#[path = "order_list_test.rs"]
mod order_list_test;

use leptos::prelude::*;

use crate::net::types::{Order, OrderDetail};
use crate::util::text::format_price;

fn detail_line(detail: &OrderDetail) -> String {
    let price = detail.publication.as_ref().and_then(|p| p.price);
    format!("{} - {}", detail.title_or_placeholder(), format_price(price))
}

/// Shipping line for a sale: buyer, street, apartment, postal code.
fn shipping_line(detail: &OrderDetail) -> Option<String> {
    let parts: Vec<&str> = [&detail.nombre, &detail.calle, &detail.dpto, &detail.cp]
        .into_iter()
        .filter_map(|part| part.as_deref())
        .filter(|part| !part.is_empty())
        .collect();
    if parts.is_empty() { None } else { Some(parts.join(" · ")) }
}

#[component]
pub fn OrderList(
    #[prop(into)] orders: Signal<Vec<Order>>,
    empty_text: &'static str,
    #[prop(optional)] show_shipping: bool,
) -> impl IntoView {
    view! {
        <Show
            when=move || orders.with(|o| !o.is_empty())
            fallback=move || view! { <p class="order-list__empty">{empty_text}</p> }
        >
            <ul class="order-list">
                <For
                    each=move || orders.get()
                    key=|order| order.id
                    children=move |order| {
                        let date = order.distribution_date.clone().unwrap_or_else(|| "Sin fecha".to_owned());
                        view! {
                            <li class="order-list__item">
                                <p><strong>"Estado: "</strong>{order.state.clone()}</p>
                                <p><strong>"Fecha: "</strong>{date}</p>
                                <h4>"Productos:"</h4>
                                <ul class="order-list__details">
                                    {order
                                        .details
                                        .iter()
                                        .map(|detail| {
                                            let shipping = if show_shipping { shipping_line(detail) } else { None };
                                            view! {
                                                <li>
                                                    {detail_line(detail)}
                                                    {shipping.map(|s| view! { <span class="order-list__shipping">{s}</span> })}
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </li>
                        }
                    }
                />
            </ul>
        </Show>
    }
}
