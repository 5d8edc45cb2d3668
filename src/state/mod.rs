//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Each model is a plain struct with no reactive types inside. `app` wraps
//! the shared ones in `RwSignal`s and provides them through context; pages
//! own the rest. Keeping them plain lets every rule here test natively.

pub mod account;
pub mod admin;
pub mod filters;
pub mod notifications;
pub mod publication_form;
pub mod search;
pub mod session;
pub mod toasts;
