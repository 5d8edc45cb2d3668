//! Forgotten-password flow: request an email, then set a new password with
//! the token the email links to (`/reset-password?token=...`).

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::net::api;
use crate::state::account::{validate_email, validate_new_password};
use crate::state::toasts::ToastState;
use crate::util::query::query_param;
use crate::util::toast::{toast_error, toast_success};

#[component]
pub fn PasswordResetRequestPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = match validate_email(&email.get()) {
            Ok(email) => email,
            Err(message) => {
                toast_error(toasts, message);
                return;
            }
        };
        busy.set(true);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::request_password_reset(&email_value).await {
                Ok(message) => {
                    toast_success(toasts, message);
                    navigate("/", NavigateOptions::default());
                }
                Err(e) => {
                    log::warn!("password reset request failed: {e}");
                    toast_error(toasts, e.to_string());
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Recuperar contraseña"</h1>
                <p class="login-card__subtitle">"Te enviaremos un enlace para restablecerla."</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="tu@email.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Enviar enlace"
                    </button>
                </form>
            </div>
        </div>
    }
}

#[component]
pub fn PasswordResetConfirmPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let location = use_location();
    let navigate = use_navigate();

    let token = Memo::new(move |_| location.search.with(|search| query_param(search, "token")).unwrap_or_default());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let token_value = token.get();
        if token_value.is_empty() {
            toast_error(toasts, "El enlace de recuperación no es válido.");
            return;
        }
        let confirm_value = confirm.get();
        let password_value = match validate_new_password(&password.get(), &confirm_value) {
            Ok(password) => password,
            Err(message) => {
                toast_error(toasts, message);
                return;
            }
        };
        busy.set(true);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::confirm_password_reset(&token_value, &password_value, &confirm_value).await {
                Ok(message) => {
                    toast_success(toasts, message);
                    navigate("/", NavigateOptions::default());
                }
                Err(e) => {
                    log::warn!("password reset failed: {e}");
                    toast_error(toasts, e.to_string());
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Nueva contraseña"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Nueva contraseña"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Repetir contraseña"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Guardar"
                    </button>
                </form>
            </div>
        </div>
    }
}
