//! Compile-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bundle is static, so configuration is baked in at build time. The only
//! environment-dependent value is the REST backend origin, read from
//! `MARKETPLACE_API_URL` when the crate is compiled.

use std::time::Duration;

/// REST backend origin, without trailing slash.
pub const API_BASE_URL: &str = match option_env!("MARKETPLACE_API_URL") {
    Some(url) => url,
    None => "http://localhost:3000",
};

/// Durable storage key holding the raw session token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Durable storage key holding the JSON-serialized session user.
pub const USER_STORAGE_KEY: &str = "user";

/// URL query parameter carrying the selected catalog category name.
pub const CATEGORY_QUERY_PARAM: &str = "category";

/// How often a mounted session re-validates its token expiry.
pub const SESSION_CHECK_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// How often the notification tray refetches for the signed-in user.
pub const NOTIFICATION_POLL_INTERVAL: Duration = Duration::from_millis(600_000);

/// Upper bound for uploaded publication images.
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

/// Rows per page in the admin publication table.
pub const ADMIN_PAGE_LIMIT: u32 = 5;

/// Lifetime of a toast before it dismisses itself.
pub const TOAST_LIFETIME: Duration = Duration::from_millis(4_000);

/// Build an absolute backend URL for `path` (which must start with `/`).
pub fn endpoint(path: &str) -> String {
    format!("{API_BASE_URL}{path}")
}
