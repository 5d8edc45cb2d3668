use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use super::*;
use crate::net::types::SellerRef;
use crate::util::storage::MemoryStorage;

// =============================================================
// Helpers
// =============================================================

fn token_expiring_at(exp: u64) -> String {
    let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"id":1,"exp":{exp}}}"#));
    format!("eyJhbGciOiJIUzI1NiJ9.{payload}.sig")
}

fn make_user() -> SessionUser {
    SessionUser {
        id: 1,
        is_admin: false,
        seller: Some(SellerRef { id: 30 }),
        avatar_url: None,
        name: Some("Ana".to_owned()),
        email: None,
    }
}

fn logged_in(storage: &MemoryStorage, exp: u64) -> SessionState {
    let mut state = SessionState::default();
    state.login(storage, token_expiring_at(exp), make_user());
    state
}

// =============================================================
// Defaults and accessors
// =============================================================

#[test]
fn default_state_is_loading_without_session() {
    let state = SessionState::default();
    assert!(state.loading);
    assert!(!state.is_authenticated());
    assert!(state.user().is_none());
}

#[test]
fn accessors_read_through_session() {
    let storage = MemoryStorage::default();
    let state = logged_in(&storage, 2_000);
    assert!(state.is_authenticated());
    assert_eq!(state.user_id(), Some(1));
    assert_eq!(state.seller_id(), Some(30));
    assert!(!state.is_admin());
    assert!(state.token().is_some());
}

// =============================================================
// login / logout
// =============================================================

#[test]
fn login_persists_both_keys() {
    let storage = MemoryStorage::default();
    let state = logged_in(&storage, 2_000);
    assert_eq!(storage.get_item(TOKEN_STORAGE_KEY).as_deref(), state.token());
    let stored: SessionUser = storage::load_json(&storage, USER_STORAGE_KEY).unwrap();
    assert_eq!(stored, make_user());
}

#[test]
fn logout_clears_memory_and_storage_together() {
    let storage = MemoryStorage::default();
    let mut state = logged_in(&storage, 2_000);
    state.logout(&storage);
    assert!(state.session.is_none());
    assert_eq!(storage.get_item(TOKEN_STORAGE_KEY), None);
    assert_eq!(storage.get_item(USER_STORAGE_KEY), None);
}

// =============================================================
// restore
// =============================================================

#[test]
fn restore_rebuilds_persisted_session() {
    let storage = MemoryStorage::default();
    let original = logged_in(&storage, 2_000);
    let restored = SessionState::restore(&storage);
    assert_eq!(restored.session, original.session);
}

#[test]
fn restore_with_token_only_clears_both_keys() {
    let storage = MemoryStorage::default();
    storage.set_item(TOKEN_STORAGE_KEY, "abc");
    let restored = SessionState::restore(&storage);
    assert!(restored.session.is_none());
    assert_eq!(storage.get_item(TOKEN_STORAGE_KEY), None);
}

#[test]
fn restore_with_corrupt_user_clears_both_keys() {
    let storage = MemoryStorage::default();
    storage.set_item(TOKEN_STORAGE_KEY, "abc");
    storage.set_item(USER_STORAGE_KEY, "{oops");
    let restored = SessionState::restore(&storage);
    assert!(restored.session.is_none());
    assert_eq!(storage.get_item(USER_STORAGE_KEY), None);
}

#[test]
fn restore_from_empty_storage_has_no_session() {
    let storage = MemoryStorage::default();
    assert!(SessionState::restore(&storage).session.is_none());
}

// =============================================================
// check
// =============================================================

#[test]
fn check_with_past_expiry_logs_out_and_clears_storage() {
    let storage = MemoryStorage::default();
    let mut state = logged_in(&storage, 1_000);
    assert_eq!(state.check(&storage, 1_001.0), Err(SessionError::Expired));
    assert!(!state.is_authenticated());
    assert_eq!(storage.get_item(TOKEN_STORAGE_KEY), None);
    assert_eq!(storage.get_item(USER_STORAGE_KEY), None);
}

#[test]
fn check_with_future_expiry_keeps_session() {
    let storage = MemoryStorage::default();
    let mut state = logged_in(&storage, 1_000);
    assert_eq!(state.check(&storage, 999.0), Ok(()));
    assert!(state.is_authenticated());
    assert!(!state.loading);
}

#[test]
fn check_with_undecodable_token_is_invalid() {
    let storage = MemoryStorage::default();
    let mut state = SessionState::default();
    state.login(&storage, "not-a-jwt".to_owned(), make_user());
    assert_eq!(state.check(&storage, 0.0), Err(SessionError::InvalidToken));
    assert!(state.session.is_none());
}

#[test]
fn check_without_session_is_silent() {
    let storage = MemoryStorage::default();
    storage.set_item(USER_STORAGE_KEY, "{}");
    let mut state = SessionState { session: None, loading: true };
    assert_eq!(state.check(&storage, 0.0), Ok(()));
    assert!(!state.loading);
    assert_eq!(storage.get_item(USER_STORAGE_KEY), None);
}

#[test]
fn expiry_is_terminal_until_next_login() {
    let storage = MemoryStorage::default();
    let mut state = logged_in(&storage, 1_000);
    assert!(state.check(&storage, 5_000.0).is_err());
    assert_eq!(state.check(&storage, 5_000.0), Ok(()));
    assert!(!state.is_authenticated());

    state.login(&storage, token_expiring_at(9_000), make_user());
    assert_eq!(state.check(&storage, 5_000.0), Ok(()));
    assert!(state.is_authenticated());
}
