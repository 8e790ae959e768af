//! Credential store behavior: round-trips, partial updates, teardown.

use buddyterm::credentials::{CachedUser, CredentialStore, FileCredentialStore, MemoryCredentialStore};

fn test_user() -> CachedUser {
    CachedUser {
        id: 42,
        email: "grace@example.com".to_string(),
        first_name: "Grace".to_string(),
        last_name: "Hopper".to_string(),
        full_name: "Grace Hopper".to_string(),
        profile_picture_url: Some("http://localhost:8000/media/grace.jpg".to_string()),
    }
}

fn temp_session_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("buddyterm-test-{}-{}", std::process::id(), name))
}

#[test]
fn file_store_round_trips_a_session() {
    let path = temp_session_path("round-trip.json");
    let _ = std::fs::remove_file(&path);

    let store = FileCredentialStore::at_path(&path).unwrap();
    assert!(store.access_token().is_none());

    store.store_session("access-1", "refresh-1", &test_user()).unwrap();
    assert_eq!(store.access_token().as_deref(), Some("access-1"));
    assert_eq!(store.refresh_token().as_deref(), Some("refresh-1"));
    assert_eq!(store.cached_user().unwrap().email, "grace@example.com");

    // A fresh instance reads the same session back from disk
    let reopened = FileCredentialStore::at_path(&path).unwrap();
    assert_eq!(reopened.access_token().as_deref(), Some("access-1"));
    assert_eq!(reopened.cached_user().unwrap().id, 42);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn storing_a_minted_access_token_keeps_the_rest_of_the_session() {
    let path = temp_session_path("partial-update.json");
    let _ = std::fs::remove_file(&path);

    let store = FileCredentialStore::at_path(&path).unwrap();
    store.store_session("access-1", "refresh-1", &test_user()).unwrap();
    store.store_access_token("access-2").unwrap();

    assert_eq!(store.access_token().as_deref(), Some("access-2"));
    assert_eq!(store.refresh_token().as_deref(), Some("refresh-1"));
    assert!(store.cached_user().is_some());

    let _ = std::fs::remove_file(&path);
}

#[test]
fn clear_erases_everything_including_the_file() {
    let path = temp_session_path("clear.json");
    let _ = std::fs::remove_file(&path);

    let store = FileCredentialStore::at_path(&path).unwrap();
    store.store_session("access-1", "refresh-1", &test_user()).unwrap();
    assert!(path.exists());

    store.clear().unwrap();
    assert!(store.access_token().is_none());
    assert!(store.refresh_token().is_none());
    assert!(store.cached_user().is_none());
    assert!(!path.exists());
}

#[test]
fn corrupt_session_file_is_treated_as_no_session() {
    let path = temp_session_path("corrupt.json");
    std::fs::write(&path, "not json at all").unwrap();

    let store = FileCredentialStore::at_path(&path).unwrap();
    assert!(store.access_token().is_none());
    assert!(store.cached_user().is_none());

    let _ = std::fs::remove_file(&path);
}

#[test]
fn memory_store_forgets_nothing_until_cleared() {
    let store = MemoryCredentialStore::new();
    store.store_session("access-1", "refresh-1", &test_user()).unwrap();
    assert_eq!(store.access_token().as_deref(), Some("access-1"));

    store.clear().unwrap();
    assert!(store.access_token().is_none());
    assert!(store.refresh_token().is_none());
    assert!(store.cached_user().is_none());
}
