use std::cell::Cell;
use std::rc::Rc;

use futures::executor::block_on;

use super::*;
use crate::state::session::{MemoryStorage, TOKEN_KEY, USER_KEY, load_session, save_session};

fn saved_user() -> User {
    User {
        name: "Saved Name".to_owned(),
        email: Some("test@example.com".to_owned()),
    }
}

fn profile(name: &str) -> UserGetResponse {
    UserGetResponse {
        name: name.to_owned(),
        icon_url: None,
    }
}

// =============================================================
// AuthState shape
// =============================================================

#[test]
fn default_state_is_loading_and_unauthenticated() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn authenticated_requires_both_token_and_user() {
    let mut state = AuthState::authenticated("t1".to_owned(), saved_user());
    assert!(state.is_authenticated());
    state.user = None;
    assert!(!state.is_authenticated());
    state.user = Some(saved_user());
    state.token = None;
    assert!(!state.is_authenticated());
}

// =============================================================
// initialize
// =============================================================

#[test]
fn initialize_without_saved_session_skips_revalidation() {
    let storage = MemoryStorage::new();
    let called = Rc::new(Cell::new(false));
    let called_probe = called.clone();
    let state = block_on(initialize_with(
        move |_token| {
            called_probe.set(true);
            async { Ok(profile("whoever")) }
        },
        &storage,
    ));
    assert!(!called.get());
    assert!(!state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn initialize_with_valid_token_refreshes_name() {
    let storage = MemoryStorage::new();
    save_session(&storage, "t1", &saved_user());
    let state = block_on(initialize_with(
        |token| async move {
            assert_eq!(token, "t1");
            Ok(profile("Fresh Name"))
        },
        &storage,
    ));
    assert!(state.is_authenticated());
    assert_eq!(state.token.as_deref(), Some("t1"));
    let user = state.user.unwrap();
    assert_eq!(user.name, "Fresh Name");
    assert_eq!(user.email.as_deref(), Some("test@example.com"));
}

#[test]
fn initialize_with_rejected_token_clears_both_slots() {
    let storage = MemoryStorage::new();
    save_session(&storage, "t1", &saved_user());
    let state = block_on(initialize_with(
        |_token| async { Err("expired".to_owned()) },
        &storage,
    ));
    assert!(!state.loading);
    assert!(!state.is_authenticated());
    assert!(storage.get(TOKEN_KEY).is_none());
    assert!(storage.get(USER_KEY).is_none());
}

// =============================================================
// login
// =============================================================

#[test]
fn login_success_replaces_state_and_persists_both_slots() {
    let storage = MemoryStorage::new();
    let state = block_on(login_with(
        "test@example.com",
        "password123",
        |email, password| async move {
            assert_eq!(email, "test@example.com");
            assert_eq!(password, "password123");
            Ok("t1".to_owned())
        },
        |token| async move {
            assert_eq!(token, "t1");
            Ok(profile("Test User"))
        },
        &storage,
    ))
    .unwrap();

    assert!(state.is_authenticated());
    assert_eq!(state.user.as_ref().unwrap().name, "Test User");
    let (token, user) = load_session(&storage).unwrap();
    assert_eq!(token, "t1");
    assert_eq!(user.email.as_deref(), Some("test@example.com"));
}

#[test]
fn login_authenticate_failure_propagates_and_skips_profile_fetch() {
    let storage = MemoryStorage::new();
    let fetched = Rc::new(Cell::new(false));
    let fetched_probe = fetched.clone();
    let result = block_on(login_with(
        "test@example.com",
        "wrong",
        |_email, _password| async { Err("Authentication failed".to_owned()) },
        move |_token| {
            fetched_probe.set(true);
            async { Ok(profile("never")) }
        },
        &storage,
    ));
    assert_eq!(result.unwrap_err(), "Authentication failed");
    assert!(!fetched.get());
    assert!(storage.get(TOKEN_KEY).is_none());
}

#[test]
fn login_profile_failure_leaves_storage_untouched() {
    let storage = MemoryStorage::new();
    let result = block_on(login_with(
        "test@example.com",
        "password123",
        |_email, _password| async { Ok("t1".to_owned()) },
        |_token| async { Err("profile unavailable".to_owned()) },
        &storage,
    ));
    assert!(result.is_err());
    assert!(storage.get(TOKEN_KEY).is_none());
    assert!(storage.get(USER_KEY).is_none());
}

// =============================================================
// logout / update_user
// =============================================================

#[test]
fn logout_clears_slots_and_state() {
    let storage = MemoryStorage::new();
    save_session(&storage, "t1", &saved_user());
    let state = logout(&storage);
    assert!(!state.is_authenticated());
    assert!(storage.get(TOKEN_KEY).is_none());
    assert!(storage.get(USER_KEY).is_none());
}

#[test]
fn update_user_keeps_token() {
    let storage = MemoryStorage::new();
    save_session(&storage, "t1", &saved_user());
    let mut state = AuthState::authenticated("t1".to_owned(), saved_user());
    update_user(
        &storage,
        &mut state,
        User {
            name: "Renamed".to_owned(),
            email: Some("test@example.com".to_owned()),
        },
    );
    assert_eq!(state.token.as_deref(), Some("t1"));
    assert_eq!(state.user.as_ref().unwrap().name, "Renamed");
    let (token, user) = load_session(&storage).unwrap();
    assert_eq!(token, "t1");
    assert_eq!(user.name, "Renamed");
}
