use super::*;

fn test_user() -> User {
    User {
        name: "Test User".to_owned(),
        email: Some("test@example.com".to_owned()),
    }
}

#[test]
fn save_then_load_round_trips() {
    let storage = MemoryStorage::new();
    save_session(&storage, "t1", &test_user());
    let (token, user) = load_session(&storage).unwrap();
    assert_eq!(token, "t1");
    assert_eq!(user, test_user());
}

#[test]
fn load_returns_none_when_token_missing() {
    let storage = MemoryStorage::new();
    save_user(&storage, &test_user());
    assert!(load_session(&storage).is_none());
}

#[test]
fn load_returns_none_when_user_missing() {
    let storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "t1");
    assert!(load_session(&storage).is_none());
}

#[test]
fn load_returns_none_when_user_slot_corrupt() {
    let storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "t1");
    storage.set(USER_KEY, "not json");
    assert!(load_session(&storage).is_none());
}

#[test]
fn clear_removes_both_slots() {
    let storage = MemoryStorage::new();
    save_session(&storage, "t1", &test_user());
    clear_session(&storage);
    assert!(storage.get(TOKEN_KEY).is_none());
    assert!(storage.get(USER_KEY).is_none());
}

#[test]
fn save_user_leaves_token_untouched() {
    let storage = MemoryStorage::new();
    save_session(&storage, "t1", &test_user());
    let renamed = User {
        name: "Renamed".to_owned(),
        email: Some("test@example.com".to_owned()),
    };
    save_user(&storage, &renamed);
    let (token, user) = load_session(&storage).unwrap();
    assert_eq!(token, "t1");
    assert_eq!(user.name, "Renamed");
}
