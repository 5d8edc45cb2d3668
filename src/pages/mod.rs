//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped fetching and guards, and delegates rendering
//! details to `components`.

pub mod admin;
pub mod catalog;
pub mod login;
pub mod orders;
pub mod password_reset;
pub mod seller;
