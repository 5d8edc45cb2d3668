use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use super::*;

fn token_with_payload(payload: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload);
    format!("{header}.{body}.signature")
}

// =============================================================
// decode_expiry
// =============================================================

#[test]
fn decode_expiry_reads_exp_claim() {
    let token = token_with_payload(r#"{"id":7,"exp":1700000000}"#);
    assert_eq!(decode_expiry(&token), Ok(Some(1_700_000_000.0)));
}

#[test]
fn decode_expiry_without_exp_is_none() {
    let token = token_with_payload(r#"{"id":7}"#);
    assert_eq!(decode_expiry(&token), Ok(None));
}

#[test]
fn decode_expiry_rejects_single_segment() {
    assert_eq!(decode_expiry("opaque-token"), Err(SessionError::InvalidToken));
}

#[test]
fn decode_expiry_rejects_non_base64_payload() {
    assert_eq!(decode_expiry("aaa.!!!.bbb"), Err(SessionError::InvalidToken));
}

#[test]
fn decode_expiry_rejects_non_json_payload() {
    let token = format!("h.{}.s", URL_SAFE_NO_PAD.encode("plain text"));
    assert_eq!(decode_expiry(&token), Err(SessionError::InvalidToken));
}

#[test]
fn decode_expiry_tolerates_padding() {
    let body = base64::engine::general_purpose::URL_SAFE.encode(r#"{"exp":10}"#);
    let token = format!("h.{body}.s");
    assert_eq!(decode_expiry(&token), Ok(Some(10.0)));
}

// =============================================================
// check_expiry
// =============================================================

#[test]
fn check_expiry_past_exp_is_expired() {
    let token = token_with_payload(r#"{"exp":100}"#);
    assert_eq!(check_expiry(&token, 101.0), Err(SessionError::Expired));
}

#[test]
fn check_expiry_future_exp_is_valid() {
    let token = token_with_payload(r#"{"exp":100}"#);
    assert_eq!(check_expiry(&token, 99.5), Ok(()));
}

#[test]
fn check_expiry_exact_exp_is_still_valid() {
    let token = token_with_payload(r#"{"exp":100}"#);
    assert_eq!(check_expiry(&token, 100.0), Ok(()));
}

#[test]
fn check_expiry_garbage_is_invalid() {
    assert_eq!(check_expiry("garbage", 0.0), Err(SessionError::InvalidToken));
}
