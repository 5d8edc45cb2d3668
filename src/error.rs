//! Error types shared by network, session, and form code.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here is allowed to escape a component as a panic. Background reads
//! log these errors and keep stale state; user-initiated mutations surface
//! their `Display` text through a toast.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a REST call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("request failed with status {0}")]
    Status(u16),
    /// The response body did not match the expected schema.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// The server answered `success: false` with a message.
    #[error("{0}")]
    Rejected(String),
    /// Called outside a browser build.
    #[error("not available outside the browser")]
    Unavailable,
}

/// Reason a stored session was invalidated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The token payload could not be decoded.
    #[error("Su sesión es inválida. Por favor, inicie sesión nuevamente.")]
    InvalidToken,
    /// The token's `exp` claim lies in the past.
    #[error("Su sesión ha expirado. Por favor, inicie sesión nuevamente.")]
    Expired,
}

/// Rejection of a selected image file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ImageError {
    #[error("El archivo seleccionado no es una imagen.")]
    NotAnImage,
    #[error("La imagen supera {max_mb} MB.")]
    TooLarge { max_mb: u64 },
}
