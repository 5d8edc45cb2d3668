//! Top navigation bar: links, title search, notification tray, session button.
//!
//! SYSTEM CONTEXT
//! ==============
//! Typing in the search box writes the shared [`SearchState`] and jumps to
//! the catalog, which filters on it; on the catalog itself the URL is kept.
//! Logging out clears the term. The tray lists the poller's notifications;
//! removal waits for the server before the card disappears.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::notification_card::NotificationCard;
use crate::state::notifications::NotificationsState;
use crate::state::search::SearchState;
use crate::state::session::SessionState;
use crate::state::toasts::ToastState;
use crate::util::notifications::remove_notification;
use crate::util::storage::SharedStorage;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let search = expect_context::<RwSignal<SearchState>>();
    let notifications = expect_context::<RwSignal<NotificationsState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let storage = expect_context::<SharedStorage>();
    let location = use_location();
    let navigate = use_navigate();

    let tray_open = RwSignal::new(false);
    let is_authenticated = move || session.with(SessionState::is_authenticated);
    let is_seller = move || session.with(|s| s.seller_id().is_some());
    let is_admin = move || session.with(SessionState::is_admin);
    let user_name = move || {
        session.with(|s| {
            s.user()
                .and_then(|u| u.name.clone().or_else(|| u.email.clone()))
                .unwrap_or_default()
        })
    };

    let on_search = move |ev: leptos::ev::Event| {
        search.update(|s| s.set_title(event_target_value(&ev)));
        // Already on the catalog: stay put so `?category=` survives.
        if location.pathname.get_untracked() != "/" {
            navigate("/", NavigateOptions::default());
        }
    };

    // Guarded pages redirect on their own once the session is gone.
    let on_logout = move |_: leptos::ev::MouseEvent| {
        session.update(|s| s.logout(storage.as_ref()));
        search.update(SearchState::clear);
        tray_open.set(false);
    };

    let on_remove = Callback::new(move |id: i64| remove_notification(id, notifications, toasts));

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">"Tienda de Instrumentos"</a>
            <div class="navbar__links">
                <a href="/">"Catálogo"</a>
                <Show when=is_seller>
                    <a href="/vender">"Vender"</a>
                </Show>
                <Show when=is_authenticated>
                    <a href="/pedidos">"Mis pedidos"</a>
                </Show>
                <Show when=is_admin>
                    <a href="/panel-admin">"Panel admin"</a>
                </Show>
            </div>

            <button
                class="navbar__search-toggle"
                title="Buscar"
                aria-label="Buscar"
                on:click=move |_| search.update(SearchState::toggle_open)
            >
                "🔍"
            </button>
            <input
                class="navbar__search"
                class:navbar__search--open=move || search.with(|s| s.open)
                type="text"
                placeholder="Buscar..."
                prop:value=move || search.with(|s| s.title.clone())
                on:input=on_search
            />

            <Show
                when=is_authenticated
                fallback=|| view! { <a class="navbar__session" href="/login">"Ingresar"</a> }
            >
                <button
                    class="navbar__bell"
                    title="Notificaciones"
                    aria-label="Notificaciones"
                    on:click=move |_| tray_open.update(|open| *open = !*open)
                >
                    "🔔"
                    <Show when=move || { notifications.with(NotificationsState::count) > 0 }>
                        <span class="navbar__badge">{move || notifications.with(NotificationsState::count)}</span>
                    </Show>
                </button>
                <span class="navbar__user">{user_name}</span>
                <button class="navbar__session" on:click=on_logout.clone()>
                    "Salir"
                </button>
            </Show>
        </nav>

        <Show when=move || tray_open.get() && is_authenticated()>
            <div class="notification-tray">
                <Show
                    when=move || { notifications.with(NotificationsState::count) > 0 }
                    fallback=|| view! { <p class="notification-tray__empty">"No tienes notificaciones pendientes."</p> }
                >
                    <For
                        each=move || notifications.get().items
                        key=|n| n.id
                        children=move |n| view! { <NotificationCard notification=n on_remove=on_remove/> }
                    />
                </Show>
            </div>
        </Show>
    }
}
