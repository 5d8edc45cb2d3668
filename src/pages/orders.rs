//! "Mis pedidos": the signed-in buyer's orders.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::order_list::OrderList;
use crate::net::api;
use crate::net::types::Order;
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn OrdersPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_unauth_redirect(session, use_navigate());

    let orders = RwSignal::new(Vec::<Order>::new());
    let loading = RwSignal::new(true);

    let user_id = Memo::new(move |_| session.with(SessionState::user_id));
    Effect::new(move || {
        let Some(id) = user_id.get() else {
            return;
        };
        loading.set(true);
        leptos::task::spawn_local(async move {
            match api::fetch_buyer_orders(id).await {
                Ok(list) => orders.set(list),
                Err(e) => log::warn!("orders fetch failed for user {id}: {e}"),
            }
            loading.set(false);
        });
    });

    view! {
        <div class="orders-page">
            <h1>"Mis Pedidos"</h1>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p>"Cargando pedidos..."</p> }
            >
                <OrderList orders=orders empty_text="No tenés pedidos aún."/>
            </Show>
        </div>
    }
}
