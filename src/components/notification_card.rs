//! One entry in the navbar notification tray.

use leptos::prelude::*;

use crate::net::types::Notification;

#[component]
pub fn NotificationCard(notification: Notification, on_remove: Callback<i64>) -> impl IntoView {
    let id = notification.id;

    view! {
        <div class="notification-card">
            <p class="notification-card__text">{notification.description}</p>
            <button
                class="notification-card__remove"
                title="Eliminar notificación"
                aria-label="Eliminar notificación"
                on:click=move |ev: leptos::ev::MouseEvent| {
                    ev.stop_propagation();
                    on_remove.run(id);
                }
            >
                "✕"
            </button>
        </div>
    }
}
