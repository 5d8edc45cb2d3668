//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the navbar, route guards, seller and admin pages, and the
//! notification poller. The token/user pair lives in one `Option<Session>`
//! so the two can never be half-set, and every transition writes through to
//! durable storage under the `token` and `user` keys.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::config::{TOKEN_STORAGE_KEY, USER_STORAGE_KEY};
use crate::error::SessionError;
use crate::net::types::SessionUser;
use crate::util::jwt;
use crate::util::storage::{self, DurableStorage};

/// An authenticated token together with its user.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: SessionUser,
}

/// Authentication state tracking the current session and loading status.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub session: Option<Session>,
    /// True until the first expiry check after start-up has run.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { session: None, loading: true }
    }
}

impl SessionState {
    /// Rebuild state from durable storage.
    ///
    /// A token without a readable user (or the reverse) is treated as no
    /// session and both keys are cleared.
    pub fn restore(storage: &dyn DurableStorage) -> Self {
        let token = storage.get_item(TOKEN_STORAGE_KEY).filter(|t| !t.is_empty());
        let user = storage::load_json::<SessionUser>(storage, USER_STORAGE_KEY);
        let session = match (token, user) {
            (Some(token), Some(user)) => Some(Session { token, user }),
            (None, None) => None,
            _ => {
                log::info!("discarding half-present stored session");
                clear_storage(storage);
                None
            }
        };
        Self { session, loading: true }
    }

    /// Start a session and persist it.
    pub fn login(&mut self, storage: &dyn DurableStorage, token: String, user: SessionUser) {
        storage.set_item(TOKEN_STORAGE_KEY, &token);
        storage::save_json(storage, USER_STORAGE_KEY, &user);
        log::info!("session started for user {}", user.id);
        self.session = Some(Session { token, user });
    }

    /// End the session and wipe it from storage.
    pub fn logout(&mut self, storage: &dyn DurableStorage) {
        if let Some(session) = self.session.take() {
            log::info!("session ended for user {}", session.user.id);
        }
        clear_storage(storage);
    }

    /// Validate the token's expiry at `now_secs`, logging out on failure.
    ///
    /// With no session this only clears storage.
    ///
    /// # Errors
    ///
    /// The reason the session was dropped, for the caller to show the user.
    pub fn check(&mut self, storage: &dyn DurableStorage, now_secs: f64) -> Result<(), SessionError> {
        self.loading = false;
        let Some(session) = self.session.as_ref() else {
            clear_storage(storage);
            return Ok(());
        };
        match jwt::check_expiry(&session.token, now_secs) {
            Ok(()) => Ok(()),
            Err(e) => {
                log::info!("session invalidated: {e:?}");
                self.logout(storage);
                Err(e)
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    pub fn user_id(&self) -> Option<i64> {
        self.user().map(|u| u.id)
    }

    pub fn seller_id(&self) -> Option<i64> {
        self.user()?.seller.as_ref().map(|s| s.id)
    }

    pub fn is_admin(&self) -> bool {
        self.user().is_some_and(|u| u.is_admin)
    }
}

fn clear_storage(storage: &dyn DurableStorage) {
    storage.remove_item(TOKEN_STORAGE_KEY);
    storage.remove_item(USER_STORAGE_KEY);
}
