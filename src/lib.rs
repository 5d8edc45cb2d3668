//! # tienda-instrumentos
//!
//! Leptos + WASM client for a musical-instrument marketplace: catalog with
//! facet filters, seller publications and sales, buyer orders, notifications
//! and an admin dashboard, all backed by a REST API.
//!
//! Pure state lives in `state`, HTTP in `net`, browser glue in `util`, and
//! views in `pages` and `components`. Without the `csr` feature the crate
//! builds natively and every network call resolves to
//! [`error::ApiError::Unavailable`].

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("logger init failed: {e}").into());
    }
    log::info!("starting client against {}", config::API_BASE_URL);
    leptos::mount::mount_to_body(app::App);
}
