//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::components::toasts::ToastHost;
use crate::pages::{
    admin::AdminPage,
    catalog::CatalogPage,
    login::LoginPage,
    orders::OrdersPage,
    password_reset::{PasswordResetConfirmPage, PasswordResetRequestPage},
    seller::SellerPage,
};
use crate::state::{
    notifications::NotificationsState, search::SearchState, session::SessionState, toasts::ToastState,
};
use crate::util::auth::install_session_watch;
use crate::util::notifications::install_notification_poller;
use crate::util::storage::{SharedStorage, default_storage};

/// Root application component.
///
/// Restores the session, provides all shared state contexts, starts the
/// session watch and notification poller, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let storage: SharedStorage = default_storage();
    let session = RwSignal::new(SessionState::restore(storage.as_ref()));
    let search = RwSignal::new(SearchState::default());
    let notifications = RwSignal::new(NotificationsState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(storage.clone());
    provide_context(session);
    provide_context(search);
    provide_context(notifications);
    provide_context(toasts);

    install_session_watch(session, storage, toasts);
    install_notification_poller(session, notifications);

    view! {
        <Stylesheet id="leptos" href="/pkg/tienda-instrumentos.css"/>
        <Title text="Tienda de Instrumentos"/>

        <Router>
            <Navbar/>
            <main class="page">
                <Routes fallback=|| "Página no encontrada.".into_view()>
                    <Route path=StaticSegment("") view=CatalogPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("forgot-password") view=PasswordResetRequestPage/>
                    <Route path=StaticSegment("reset-password") view=PasswordResetConfirmPage/>
                    <Route path=StaticSegment("vender") view=SellerPage/>
                    <Route path=StaticSegment("pedidos") view=OrdersPage/>
                    <Route path=StaticSegment("panel-admin") view=AdminPage/>
                </Routes>
            </main>
            <ToastHost/>
        </Router>
    }
}
