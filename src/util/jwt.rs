//! Client-side JWT payload inspection.
//!
//! The signature is never verified here; the backend does that on every
//! request. The client only reads `exp` to drop sessions the backend would
//! reject anyway.

#[cfg(test)]
#[path = "jwt_test.rs"]
mod jwt_test;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

use crate::error::SessionError;

#[derive(Debug, Deserialize)]
struct Claims {
    exp: Option<f64>,
}

/// Decode the `exp` claim (seconds since the Unix epoch) of a compact JWT.
///
/// Returns `Ok(None)` for a well-formed token without `exp`.
///
/// # Errors
///
/// [`SessionError::InvalidToken`] if the token has no payload segment, the
/// payload is not base64url, or it is not a JSON object.
pub fn decode_expiry(token: &str) -> Result<Option<f64>, SessionError> {
    let mut segments = token.split('.');
    let payload = match (segments.next(), segments.next()) {
        (Some(_header), Some(payload)) if !payload.is_empty() => payload,
        _ => return Err(SessionError::InvalidToken),
    };
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|_| SessionError::InvalidToken)?;
    let claims: Claims = serde_json::from_slice(&bytes).map_err(|_| SessionError::InvalidToken)?;
    Ok(claims.exp)
}

/// Validate `token` against the current time `now_secs`.
///
/// # Errors
///
/// [`SessionError::InvalidToken`] when undecodable, [`SessionError::Expired`]
/// when `exp` is strictly before `now_secs`.
pub fn check_expiry(token: &str, now_secs: f64) -> Result<(), SessionError> {
    match decode_expiry(token)? {
        Some(exp) if exp < now_secs => Err(SessionError::Expired),
        _ => Ok(()),
    }
}
