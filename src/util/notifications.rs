//! Notification polling for the signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Installed once by `App`. Fetches on identity change and then every
//! [`NOTIFICATION_POLL_INTERVAL`]; a new identity (or sign-out) cancels the
//! previous timer before anything else happens.

use leptos::prelude::*;

use crate::config::NOTIFICATION_POLL_INTERVAL;
use crate::net::api;
use crate::state::notifications::NotificationsState;
use crate::state::session::SessionState;
use crate::state::toasts::ToastState;
use crate::util::poll::{TimerSlot, spawn_interval};
use crate::util::toast::toast_error;

fn refresh(user_id: i64, notifications: RwSignal<NotificationsState>) {
    leptos::task::spawn_local(async move {
        let result = api::fetch_notifications(user_id).await;
        notifications.update(|state| state.apply_fetch(result));
    });
}

pub fn install_notification_poller(session: RwSignal<SessionState>, notifications: RwSignal<NotificationsState>) {
    let user_id = Memo::new(move |_| session.with(SessionState::user_id));
    let slot = TimerSlot::default();
    let effect_slot = slot.clone();
    Effect::new(move || match user_id.get() {
        Some(id) => {
            effect_slot.clear();
            refresh(id, notifications);
            effect_slot.replace(Some(spawn_interval(NOTIFICATION_POLL_INTERVAL, move || {
                refresh(id, notifications);
            })));
        }
        None => {
            effect_slot.clear();
            notifications.update(NotificationsState::clear);
        }
    });
    on_cleanup(move || slot.clear());
}

/// Ask the server to delete a notification; the tray only drops it once the
/// server confirms.
pub fn remove_notification(id: i64, notifications: RwSignal<NotificationsState>, toasts: RwSignal<ToastState>) {
    leptos::task::spawn_local(async move {
        let result = api::delete_notification(id).await;
        let mut outcome = Ok(());
        notifications.update(|state| outcome = state.apply_removal(id, result));
        if let Err(message) = outcome {
            toast_error(toasts, message);
        }
    });
}
