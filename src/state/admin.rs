//! Admin dashboard tables and the delete confirmation prompt.
//!
//! SYSTEM CONTEXT
//! ==============
//! `pages::admin` fetches the three tables with the session's bearer token
//! and routes results through this state. A delete always goes through
//! [`PendingDelete`]; after the server confirms, the page refetches the
//! affected table instead of splicing it locally.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use crate::error::ApiError;
use crate::net::types::{AccountRow, Publication, PublicationPage};

/// Which admin table a row belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordKind {
    User,
    Publication,
    Seller,
}

impl RecordKind {
    /// Question shown before deleting.
    pub fn confirm_message(self) -> &'static str {
        match self {
            Self::User => "¿Eliminar este usuario? Se eliminarán sus publicaciones.",
            Self::Publication => "¿Eliminar esta publicación?",
            Self::Seller => "¿Eliminar este vendedor? Se eliminarán sus publicaciones (no elimina su usuario).",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            Self::User => "¡Se eliminó el usuario con éxito!",
            Self::Publication => "¡Publicación eliminada con éxito!",
            Self::Seller => "¡Se eliminó el vendedor con éxito!",
        }
    }

    pub fn failure_message(self) -> &'static str {
        match self {
            Self::User => "¡Hubo un error al eliminar el usuario!",
            Self::Publication => "¡Error al eliminar la publicación!",
            Self::Seller => "¡Error al eliminar el vendedor!",
        }
    }
}

/// A delete awaiting the admin's confirmation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingDelete {
    pub kind: RecordKind,
    pub id: i64,
}

impl PendingDelete {
    pub fn message(&self) -> &'static str {
        self.kind.confirm_message()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AdminState {
    pub users: Vec<AccountRow>,
    pub sellers: Vec<AccountRow>,
    pub publications: Vec<Publication>,
    page: u32,
    total_pages: u32,
    pub pending: Option<PendingDelete>,
}

impl Default for AdminState {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            sellers: Vec::new(),
            publications: Vec::new(),
            page: 1,
            total_pages: 1,
            pending: None,
        }
    }
}

impl AdminState {
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Move to `page`, clamped to `[1, total_pages]`. Returns whether it changed.
    pub fn set_page(&mut self, page: u32) -> bool {
        let clamped = page.clamp(1, self.total_pages);
        let changed = clamped != self.page;
        self.page = clamped;
        changed
    }

    pub fn next_page(&mut self) -> bool {
        self.set_page(self.page.saturating_add(1))
    }

    pub fn prev_page(&mut self) -> bool {
        self.set_page(self.page.saturating_sub(1))
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn apply_users(&mut self, result: Result<Vec<AccountRow>, ApiError>) {
        match result {
            Ok(users) => self.users = users,
            Err(e) => log::warn!("admin user fetch failed: {e}"),
        }
    }

    pub fn apply_sellers(&mut self, result: Result<Vec<AccountRow>, ApiError>) {
        match result {
            Ok(sellers) => self.sellers = sellers,
            Err(e) => log::warn!("admin seller fetch failed: {e}"),
        }
    }

    /// Store a publication page. A failed fetch empties the table.
    ///
    /// The current page is re-clamped when the total shrinks, and the return
    /// value says whether that happened so the caller can fetch again.
    pub fn apply_page(&mut self, result: Result<PublicationPage, ApiError>) -> bool {
        match result {
            Ok(page) => {
                self.publications = page.rows;
                self.total_pages = page.total_pages.max(1);
            }
            Err(e) => {
                log::warn!("admin publication fetch failed: {e}");
                self.publications.clear();
            }
        }
        self.set_page(self.page)
    }

    pub fn request_delete(&mut self, kind: RecordKind, id: i64) {
        self.pending = Some(PendingDelete { kind, id });
    }

    pub fn cancel_delete(&mut self) {
        self.pending = None;
    }

    /// Confirm the prompt, handing the delete to the caller.
    pub fn confirm_delete(&mut self) -> Option<PendingDelete> {
        self.pending.take()
    }
}
