use super::*;
use crate::util::storage::{MemoryStorage, StorageBackend};

fn user(id: &str) -> UserRef {
    UserRef {
        id: id.to_owned(),
        display_name: "alice".to_owned(),
        role: Role::User,
    }
}

fn admin(id: &str) -> UserRef {
    UserRef {
        id: id.to_owned(),
        display_name: "root".to_owned(),
        role: Role::Admin,
    }
}

// =============================================================
// Login transition
// =============================================================

#[test]
fn login_sets_authenticated_and_user() {
    let mut store = SessionStore::initialize(MemoryStorage::default());
    store.login(user("u-1"), "tok-1".to_owned()).unwrap();

    assert!(store.is_authenticated());
    assert_eq!(store.current_user(), Some(&user("u-1")));
    assert_eq!(store.token(), Some("tok-1"));
}

#[test]
fn relogin_replaces_identity_and_token() {
    let mut store = SessionStore::initialize(MemoryStorage::default());
    store.login(user("u-1"), "tok-1".to_owned()).unwrap();
    store.login(admin("u-2"), "tok-2".to_owned()).unwrap();

    assert_eq!(store.current_user(), Some(&admin("u-2")));
    assert_eq!(store.token(), Some("tok-2"));
}

#[test]
fn login_empty_id_rejected_and_state_unchanged() {
    let mut store = SessionStore::initialize(MemoryStorage::default());
    store.login(user("u-1"), "tok-1".to_owned()).unwrap();

    let err = store.login(user(""), "tok-2".to_owned()).unwrap_err();
    assert_eq!(err, AuthError::InvalidCredentialsShape);
    assert_eq!(store.current_user(), Some(&user("u-1")));
    assert_eq!(store.token(), Some("tok-1"));
}

#[test]
fn login_empty_token_rejected_while_anonymous() {
    let mut store = SessionStore::initialize(MemoryStorage::default());

    let err = store.login(user("u-1"), String::new()).unwrap_err();
    assert_eq!(err, AuthError::InvalidCredentialsShape);
    assert!(!store.is_authenticated());
    assert!(store.current_user().is_none());
}

#[test]
fn rejected_login_writes_nothing_to_storage() {
    let storage = MemoryStorage::default();
    let mut store = SessionStore::initialize(storage.clone());
    let _ = store.login(user(""), "tok".to_owned());

    assert!(storage.get(TOKEN_KEY).is_none());
    assert!(storage.get(USER_KEY).is_none());
}

// =============================================================
// Logout transition
// =============================================================

#[test]
fn logout_resets_to_anonymous() {
    let mut store = SessionStore::initialize(MemoryStorage::default());
    store.login(user("u-1"), "tok-1".to_owned()).unwrap();
    store.logout();

    assert!(!store.is_authenticated());
    assert!(store.current_user().is_none());
    assert!(store.token().is_none());
}

#[test]
fn logout_is_idempotent() {
    let mut store = SessionStore::initialize(MemoryStorage::default());
    store.logout();
    store.logout();

    assert!(!store.is_authenticated());
}

#[test]
fn logout_removes_persisted_keys() {
    let storage = MemoryStorage::default();
    let mut store = SessionStore::initialize(storage.clone());
    store.login(user("u-1"), "tok-1".to_owned()).unwrap();
    assert!(storage.get(TOKEN_KEY).is_some());

    store.logout();
    assert!(storage.get(TOKEN_KEY).is_none());
    assert!(storage.get(USER_KEY).is_none());
}

// =============================================================
// Persistence round trip
// =============================================================

#[test]
fn restart_restores_user_and_token() {
    let storage = MemoryStorage::default();
    let mut store = SessionStore::initialize(storage.clone());
    store.login(admin("u-9"), "tok-9".to_owned()).unwrap();

    // Same backing map, fresh store: a simulated process restart.
    let restored = SessionStore::initialize(storage);
    assert!(restored.is_authenticated());
    assert_eq!(restored.current_user(), Some(&admin("u-9")));
    assert_eq!(restored.token(), Some("tok-9"));
}

#[test]
fn restart_after_logout_is_anonymous() {
    let storage = MemoryStorage::default();
    let mut store = SessionStore::initialize(storage.clone());
    store.login(user("u-1"), "tok-1".to_owned()).unwrap();
    store.logout();

    let restored = SessionStore::initialize(storage);
    assert!(!restored.is_authenticated());
}

// =============================================================
// Corrupt persisted state
// =============================================================

#[test]
fn unparseable_persisted_user_resets_to_anonymous() {
    let storage = MemoryStorage::default();
    storage.set(TOKEN_KEY, "tok-1");
    storage.set(USER_KEY, "{not json");

    let store = SessionStore::initialize(storage.clone());
    assert!(!store.is_authenticated());
    // Stale keys are wiped rather than retried next startup.
    assert!(storage.get(TOKEN_KEY).is_none());
    assert!(storage.get(USER_KEY).is_none());
}

#[test]
fn token_without_user_resets_to_anonymous() {
    let storage = MemoryStorage::default();
    storage.set(TOKEN_KEY, "tok-1");

    let store = SessionStore::initialize(storage);
    assert!(!store.is_authenticated());
}

#[test]
fn user_without_token_resets_to_anonymous() {
    let storage = MemoryStorage::default();
    storage.set(USER_KEY, &serde_json::to_string(&user("u-1")).unwrap());

    let store = SessionStore::initialize(storage);
    assert!(!store.is_authenticated());
}

#[test]
fn persisted_user_with_empty_id_resets_to_anonymous() {
    let storage = MemoryStorage::default();
    storage.set(TOKEN_KEY, "tok-1");
    storage.set(USER_KEY, &serde_json::to_string(&user("")).unwrap());

    let store = SessionStore::initialize(storage);
    assert!(!store.is_authenticated());
}

#[test]
fn empty_persisted_token_resets_to_anonymous() {
    let storage = MemoryStorage::default();
    storage.set(TOKEN_KEY, "");
    storage.set(USER_KEY, &serde_json::to_string(&user("u-1")).unwrap());

    let store = SessionStore::initialize(storage);
    assert!(!store.is_authenticated());
}
