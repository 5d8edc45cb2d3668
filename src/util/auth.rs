//! Session guard wiring and route access helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` installs the session watch once. Route components that need an
//! identity install one of the redirects so every guarded page behaves the
//! same way.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::config::SESSION_CHECK_INTERVAL;
use crate::state::session::SessionState;
use crate::state::toasts::ToastState;
use crate::util::poll::{TimerSlot, spawn_interval};
use crate::util::storage::SharedStorage;
use crate::util::time::now_unix_secs;
use crate::util::toast::toast_error;

/// Pages that require a signed-in user bounce to `/login` once loading is done.
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    !state.loading && !state.is_authenticated()
}

/// Admin pages bounce everyone who is not an admin back home.
pub fn should_redirect_non_admin(state: &SessionState) -> bool {
    !state.loading && !state.is_admin()
}

/// Seller pages need a seller profile on the session user.
pub fn should_redirect_non_seller(state: &SessionState) -> bool {
    !state.loading && state.seller_id().is_none()
}

/// Validate the session now and whenever the token changes, then every
/// [`SESSION_CHECK_INTERVAL`] while a token is present.
///
/// Failures log out, clear storage and raise an error toast.
pub fn install_session_watch(session: RwSignal<SessionState>, storage: SharedStorage, toasts: RwSignal<ToastState>) {
    let run_check = move || {
        let mut outcome = Ok(());
        session.update(|state| outcome = state.check(storage.as_ref(), now_unix_secs()));
        if let Err(e) = outcome {
            toast_error(toasts, e.to_string());
        }
    };

    let token = Memo::new(move |_| session.with(|state| state.token().map(str::to_owned)));
    let slot = TimerSlot::default();
    let effect_slot = slot.clone();
    Effect::new(move || {
        let present = token.get().is_some();
        untrack(run_check.clone());
        if present && session.with_untracked(SessionState::is_authenticated) {
            effect_slot.replace(Some(spawn_interval(SESSION_CHECK_INTERVAL, run_check.clone())));
        } else {
            effect_slot.clear();
        }
    });
    on_cleanup(move || slot.clear());
}

fn install_redirect<P, F>(session: RwSignal<SessionState>, should_redirect: P, target: &'static str, navigate: F)
where
    P: Fn(&SessionState) -> bool + 'static,
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if session.with(&should_redirect) {
            navigate(target, NavigateOptions::default());
        }
    });
}

/// Redirect to `/login` whenever loading is done and nobody is signed in.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    install_redirect(session, should_redirect_unauth, "/login", navigate);
}

/// Redirect home whenever the signed-in user is not an admin.
pub fn install_admin_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    install_redirect(session, should_redirect_non_admin, "/", navigate);
}

/// Redirect home whenever the signed-in user has no seller profile.
pub fn install_seller_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    install_redirect(session, should_redirect_non_seller, "/", navigate);
}
