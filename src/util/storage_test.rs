use super::*;

// =============================================================
// MemoryStorage contract
// =============================================================

#[test]
fn set_then_get_returns_value() {
    let storage = MemoryStorage::default();
    storage.set("k", "v");
    assert_eq!(storage.get("k"), Some("v".to_owned()));
}

#[test]
fn get_missing_key_is_none() {
    let storage = MemoryStorage::default();
    assert_eq!(storage.get("k"), None);
}

#[test]
fn set_overwrites_prior_value() {
    let storage = MemoryStorage::default();
    storage.set("k", "v1");
    storage.set("k", "v2");
    assert_eq!(storage.get("k"), Some("v2".to_owned()));
}

#[test]
fn remove_deletes_and_is_idempotent() {
    let storage = MemoryStorage::default();
    storage.set("k", "v");
    storage.remove("k");
    storage.remove("k");
    assert_eq!(storage.get("k"), None);
}

#[test]
fn clones_share_the_same_map() {
    let storage = MemoryStorage::default();
    let other = storage.clone();
    storage.set("k", "v");
    assert_eq!(other.get("k"), Some("v".to_owned()));
}

// =============================================================
// LocalStorage off-browser stubs
// =============================================================

#[test]
fn local_storage_is_inert_without_a_browser() {
    let storage = LocalStorage;
    storage.set("k", "v");
    assert_eq!(storage.get("k"), None);
    storage.remove("k");
}
