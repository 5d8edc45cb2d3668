//! Corner stack of transient messages.

use leptos::prelude::*;

use crate::state::toasts::{ToastKind, ToastState};

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toasts" role="status" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class="toast"
                            class:toast--error=toast.kind == ToastKind::Error
                            class:toast--success=toast.kind == ToastKind::Success
                        >
                            <span class="toast__message">{toast.message}</span>
                            <button
                                class="toast__close"
                                title="Cerrar"
                                aria-label="Cerrar"
                                on:click=move |_| toasts.update(|state| state.dismiss(id))
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
