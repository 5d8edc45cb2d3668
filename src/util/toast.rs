//! Push toasts that dismiss themselves after `TOAST_LIFETIME`.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::config::TOAST_LIFETIME;
use crate::state::toasts::{ToastKind, ToastState};

fn push(toasts: RwSignal<ToastState>, kind: ToastKind, message: String) {
    let mut id = 0;
    toasts.update(|state| id = state.push(kind, message));
    dismiss_later(toasts, id);
}

#[cfg(feature = "csr")]
fn dismiss_later(toasts: RwSignal<ToastState>, id: u64) {
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(TOAST_LIFETIME).await;
        toasts.update(|state| state.dismiss(id));
    });
}

// Natively there is no timer; toasts stay until dismissed.
#[cfg(not(feature = "csr"))]
fn dismiss_later(_toasts: RwSignal<ToastState>, _id: u64) {}

pub fn toast_error(toasts: RwSignal<ToastState>, message: impl Into<String>) {
    push(toasts, ToastKind::Error, message.into());
}

pub fn toast_success(toasts: RwSignal<ToastState>, message: impl Into<String>) {
    push(toasts, ToastKind::Success, message.into());
}
