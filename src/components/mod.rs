//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render marketplace chrome and cards while reading/writing
//! shared state from Leptos context providers.

pub mod confirm_dialog;
pub mod filters_panel;
pub mod navbar;
pub mod notification_card;
pub mod order_list;
pub mod publication_card;
pub mod toasts;
