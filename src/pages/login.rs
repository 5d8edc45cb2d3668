//! Email + password sign-in.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::error::ApiError;
use crate::net::api;
use crate::state::account::validate_login_input;
use crate::state::session::SessionState;
use crate::state::toasts::ToastState;
use crate::util::storage::SharedStorage;
use crate::util::toast::{toast_error, toast_success};

const BAD_CREDENTIALS: &str = "Email o contraseña incorrectos.";

fn failure_message(error: &ApiError) -> String {
    match error {
        ApiError::Status(400 | 401 | 404) => BAD_CREDENTIALS.to_owned(),
        other => other.to_string(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let storage = expect_context::<SharedStorage>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(input) => input,
            Err(message) => {
                toast_error(toasts, message);
                return;
            }
        };
        busy.set(true);

        let storage = storage.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::login(&email_value, &password_value).await {
                Ok(response) => {
                    log::info!("signed in user {}", response.user.id);
                    session.update(|s| s.login(storage.as_ref(), response.token, response.user));
                    toast_success(toasts, "¡Bienvenido!");
                    navigate("/", NavigateOptions::default());
                }
                Err(e) => {
                    log::warn!("login failed: {e}");
                    toast_error(toasts, failure_message(&e));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Ingresar"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="tu@email.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Contraseña"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Ingresando..." } else { "Ingresar" }}
                    </button>
                </form>
                <a class="login-card__link" href="/forgot-password">"¿Olvidaste tu contraseña?"</a>
            </div>
        </div>
    }
}
