//! Notification tray contents for the signed-in user.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use crate::error::ApiError;
use crate::net::types::{Ack, Notification};

const REMOVAL_FAILED: &str = "No se pudo eliminar la notificación.";

/// Notifications owned by the poller.
#[derive(Clone, Debug, PartialEq)]
pub struct NotificationsState {
    pub items: Vec<Notification>,
    /// True until the first fetch settles.
    pub loading: bool,
}

impl Default for NotificationsState {
    fn default() -> Self {
        Self { items: Vec::new(), loading: true }
    }
}

impl NotificationsState {
    /// Apply a fetch result. Failures keep the current list.
    pub fn apply_fetch(&mut self, result: Result<Vec<Notification>, ApiError>) {
        self.loading = false;
        match result {
            Ok(items) => self.items = items,
            Err(e) => log::warn!("notification fetch failed: {e}"),
        }
    }

    /// Forget everything, e.g. when the user signs out.
    pub fn clear(&mut self) {
        self.items.clear();
        self.loading = true;
    }

    /// Apply the server's answer to a delete of `id`.
    ///
    /// # Errors
    ///
    /// A user-facing warning when the server refused or the call failed; the
    /// list is left untouched in that case.
    pub fn apply_removal(&mut self, id: i64, result: Result<Ack, ApiError>) -> Result<(), String> {
        match result {
            Ok(Ack { success: true, .. }) => {
                self.items.retain(|n| n.id != id);
                Ok(())
            }
            Ok(Ack { message, .. }) => Err(message.unwrap_or_else(|| REMOVAL_FAILED.to_owned())),
            Err(e) => {
                log::warn!("notification {id} removal failed: {e}");
                Err(REMOVAL_FAILED.to_owned())
            }
        }
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }
}
