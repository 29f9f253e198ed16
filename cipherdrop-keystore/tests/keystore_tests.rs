use cipherdrop_crypto::FileKey;
use cipherdrop_keystore::{KeyStore, KeyStoreError};
use cipherdrop_types::FileId;

// ── Basic operations ─────────────────────────────────────────────

#[test]
fn store_then_fetch_returns_key() {
    let store = KeyStore::open_in_memory().unwrap();
    let id = FileId::new();
    let key = FileKey::generate().unwrap();

    store.store(&id, &key).unwrap();
    let fetched = store.fetch(&id).unwrap().expect("key should be present");
    assert_eq!(fetched.as_bytes(), key.as_bytes());
}

#[test]
fn fetch_missing_returns_none() {
    let store = KeyStore::open_in_memory().unwrap();
    assert!(store.fetch(&FileId::new()).unwrap().is_none());
}

#[test]
fn store_remove_fetch_returns_none() {
    let store = KeyStore::open_in_memory().unwrap();
    let id = FileId::new();
    let key = FileKey::generate().unwrap();

    store.store(&id, &key).unwrap();
    store.remove(&id).unwrap();
    assert!(store.fetch(&id).unwrap().is_none());
}

#[test]
fn remove_missing_is_not_an_error() {
    let store = KeyStore::open_in_memory().unwrap();
    store.remove(&FileId::new()).unwrap();
    store.remove(&FileId::new()).unwrap();
}

#[test]
fn restore_overwrites_last_writer_wins() {
    let store = KeyStore::open_in_memory().unwrap();
    let id = FileId::new();
    let first = FileKey::generate().unwrap();
    let second = FileKey::generate().unwrap();

    store.store(&id, &first).unwrap();
    store.store(&id, &second).unwrap();

    let fetched = store.fetch(&id).unwrap().unwrap();
    assert_eq!(fetched.as_bytes(), second.as_bytes());
    assert_eq!(store.len().unwrap(), 1);
}

#[test]
fn entries_are_independent_per_file() {
    let store = KeyStore::open_in_memory().unwrap();
    let id_a = FileId::new();
    let id_b = FileId::new();
    let key_a = FileKey::generate().unwrap();
    let key_b = FileKey::generate().unwrap();

    store.store(&id_a, &key_a).unwrap();
    store.store(&id_b, &key_b).unwrap();
    store.remove(&id_a).unwrap();

    assert!(store.fetch(&id_a).unwrap().is_none());
    let fetched_b = store.fetch(&id_b).unwrap().unwrap();
    assert_eq!(fetched_b.as_bytes(), key_b.as_bytes());
}

#[test]
fn contains_and_len() {
    let store = KeyStore::open_in_memory().unwrap();
    let id = FileId::new();
    assert!(store.is_empty().unwrap());
    assert!(!store.contains(&id).unwrap());

    store.store(&id, &FileKey::generate().unwrap()).unwrap();
    assert!(store.contains(&id).unwrap());
    assert_eq!(store.len().unwrap(), 1);
}

#[test]
fn clear_removes_everything() {
    let store = KeyStore::open_in_memory().unwrap();
    let ids: Vec<FileId> = (0..5).map(|_| FileId::new()).collect();
    for id in &ids {
        store.store(id, &FileKey::generate().unwrap()).unwrap();
    }
    assert_eq!(store.len().unwrap(), 5);

    store.clear().unwrap();
    assert!(store.is_empty().unwrap());
    for id in &ids {
        assert!(store.fetch(id).unwrap().is_none());
    }
}

// ── Durability ───────────────────────────────────────────────────

#[test]
fn keys_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("keys.db");
    let id = FileId::new();
    let key = FileKey::generate().unwrap();

    {
        let store = KeyStore::open(&path).unwrap();
        store.store(&id, &key).unwrap();
    }

    let reopened = KeyStore::open(&path).unwrap();
    let fetched = reopened.fetch(&id).unwrap().unwrap();
    assert_eq!(fetched.as_bytes(), key.as_bytes());
}

#[test]
fn removal_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("keys.db");
    let id = FileId::new();

    {
        let store = KeyStore::open(&path).unwrap();
        store.store(&id, &FileKey::generate().unwrap()).unwrap();
        store.remove(&id).unwrap();
    }

    let reopened = KeyStore::open(&path).unwrap();
    assert!(reopened.fetch(&id).unwrap().is_none());
}

// ── Corruption ───────────────────────────────────────────────────

#[test]
fn short_key_row_reports_corrupt() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("keys.db");
    let id = FileId::new();

    let store = KeyStore::open(&path).unwrap();
    store.store(&id, &FileKey::generate().unwrap()).unwrap();
    drop(store);

    // Truncate the stored blob out-of-band to simulate disk corruption.
    let conn = rusqlite::Connection::open(&path).unwrap();
    conn.execute(
        "UPDATE file_keys SET key = X'0011' WHERE file_id = ?1",
        rusqlite::params![id.to_string()],
    )
    .unwrap();
    drop(conn);

    let reopened = KeyStore::open(&path).unwrap();
    let err = reopened.fetch(&id).unwrap_err();
    assert!(matches!(err, KeyStoreError::Corrupt { actual: 2, .. }));
}
