//! Wall-clock access that works in both WASM and native builds.

/// Current Unix time in seconds (fractional).
pub fn now_unix_secs() -> f64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::now() / 1000.0
    }
    #[cfg(not(feature = "csr"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0.0, |elapsed| elapsed.as_secs_f64())
    }
}
