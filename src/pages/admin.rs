//! Admin dashboard: users, sellers and a paginated publication table.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every call carries the session token as a bearer credential. Deletes go
//! through [`ConfirmDialog`]; after the server confirms, the `reload` tick
//! refetches all three tables since deleting an account cascades to its
//! publications.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::config::ADMIN_PAGE_LIMIT;
use crate::error::ApiError;
use crate::net::api;
use crate::net::types::AccountRow;
use crate::state::admin::{AdminState, PendingDelete, RecordKind};
use crate::state::session::SessionState;
use crate::state::toasts::ToastState;
use crate::util::auth::install_admin_redirect;
use crate::util::text::format_price;
use crate::util::toast::{toast_error, toast_success};

async fn delete_record(token: &str, pending: PendingDelete) -> Result<(), ApiError> {
    match pending.kind {
        RecordKind::User => api::delete_admin_user(token, pending.id).await,
        RecordKind::Publication => api::delete_admin_publication(token, pending.id).await,
        RecordKind::Seller => api::delete_admin_seller(token, pending.id).await,
    }
}

#[component]
fn AccountTable(
    title: &'static str,
    kind: RecordKind,
    #[prop(into)] rows: Signal<Vec<AccountRow>>,
    admin: RwSignal<AdminState>,
) -> impl IntoView {
    view! {
        <section class="admin-page__section">
            <h2>{title}</h2>
            <table class="admin-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Nombre"</th>
                        <th>"Apellido"</th>
                        <th>"Email"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || rows.get()
                        key=|row| row.id
                        children=move |row| {
                            let id = row.id;
                            view! {
                                <tr>
                                    <td>{row.id}</td>
                                    <td>{row.first_name}</td>
                                    <td>{row.last_name}</td>
                                    <td>{row.email}</td>
                                    <td>
                                        <button
                                            class="btn btn--danger"
                                            on:click=move |_| admin.update(|s| s.request_delete(kind, id))
                                        >
                                            "Eliminar"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </section>
    }
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    install_admin_redirect(session, use_navigate());

    let admin = RwSignal::new(AdminState::default());
    let reload = RwSignal::new(0_u32);
    let token = Memo::new(move |_| {
        session.with(|s| if s.is_admin() { s.token().map(str::to_owned) } else { None })
    });
    let page = Memo::new(move |_| admin.with(AdminState::page));

    Effect::new(move || {
        reload.track();
        let Some(token) = token.get() else {
            return;
        };
        leptos::task::spawn_local(async move {
            let (users, sellers) = futures::join!(api::fetch_admin_users(&token), api::fetch_admin_sellers(&token));
            admin.update(|s| {
                s.apply_users(users);
                s.apply_sellers(sellers);
            });
        });
    });

    // A shrunken page count re-clamps `page`, which re-runs this effect.
    Effect::new(move || {
        reload.track();
        let Some(token) = token.get() else {
            return;
        };
        let current = page.get();
        leptos::task::spawn_local(async move {
            let result = api::fetch_admin_publications(&token, current, ADMIN_PAGE_LIMIT).await;
            admin.update(|s| {
                s.apply_page(result);
            });
        });
    });

    let on_cancel = Callback::new(move |()| admin.update(AdminState::cancel_delete));
    let on_confirm = Callback::new(move |()| {
        let mut pending = None;
        admin.update(|s| pending = s.confirm_delete());
        let (Some(pending), Some(token)) = (pending, token.get_untracked()) else {
            return;
        };
        leptos::task::spawn_local(async move {
            match delete_record(&token, pending).await {
                Ok(()) => {
                    log::info!("admin deleted {:?} {}", pending.kind, pending.id);
                    toast_success(toasts, pending.kind.success_message());
                    reload.update(|n| *n = n.wrapping_add(1));
                }
                Err(e) => {
                    log::warn!("admin delete of {:?} {} failed: {e}", pending.kind, pending.id);
                    toast_error(toasts, pending.kind.failure_message());
                }
            }
        });
    });

    let users = Signal::derive(move || admin.with(|s| s.users.clone()));
    let sellers = Signal::derive(move || admin.with(|s| s.sellers.clone()));

    view! {
        <div class="admin-page">
            <h1>"Panel de administración"</h1>

            <AccountTable title="Usuarios" kind=RecordKind::User rows=users admin=admin/>
            <AccountTable title="Vendedores" kind=RecordKind::Seller rows=sellers admin=admin/>

            <section class="admin-page__section">
                <h2>"Publicaciones"</h2>
                <table class="admin-table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Título"</th>
                            <th>"Precio"</th>
                            <th>"Estado"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || admin.with(|s| s.publications.clone())
                            key=|p| p.id
                            children=move |p| {
                                let id = p.id;
                                view! {
                                    <tr>
                                        <td>{p.id}</td>
                                        <td>{p.title}</td>
                                        <td>{format_price(p.price)}</td>
                                        <td>{p.state}</td>
                                        <td>
                                            <button
                                                class="btn btn--danger"
                                                on:click=move |_| admin.update(|s| s.request_delete(RecordKind::Publication, id))
                                            >
                                                "Eliminar"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
                <div class="admin-page__pager">
                    <button
                        class="btn"
                        disabled=move || !admin.with(AdminState::has_prev)
                        on:click=move |_| {
                            admin.update(|s| {
                                s.prev_page();
                            });
                        }
                    >
                        "Anterior"
                    </button>
                    <span>{move || admin.with(|s| format!("Página {} de {}", s.page(), s.total_pages()))}</span>
                    <button
                        class="btn"
                        disabled=move || !admin.with(AdminState::has_next)
                        on:click=move |_| {
                            admin.update(|s| {
                                s.next_page();
                            });
                        }
                    >
                        "Siguiente"
                    </button>
                </div>
            </section>

            <Show when=move || admin.with(|s| s.pending.is_some())>
                <ConfirmDialog
                    message=Signal::derive(move || {
                        admin.with(|s| s.pending.map(|p| p.message()).unwrap_or_default().to_owned())
                    })
                    on_confirm=on_confirm
                    on_cancel=on_cancel
                />
            </Show>
        </div>
    }
}
