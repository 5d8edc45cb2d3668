//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod auth;
pub mod jwt;
pub mod notifications;
#[cfg(feature = "csr")]
pub mod object_url;
pub mod poll;
pub mod query;
pub mod storage;
pub mod text;
pub mod time;
pub mod toast;
