//! Durable per-device file-key storage for CipherDrop.
//!
//! One SQLite row per uploaded file: `file_id → raw key bytes`. The store
//! is deliberately device-local — it is never synced or backed up, which
//! is what keeps the server blind to keys. Losing the device (or clearing
//! the store on logout) loses access to owner-held files; that is the
//! zero-knowledge trade-off, not a defect.

mod error;

pub use error::{KeyStoreError, KeyStoreResult};

use cipherdrop_crypto::FileKey;
use cipherdrop_types::FileId;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Persistent map from file identifier to encryption key, backed by SQLite.
///
/// Operations on different file identifiers are independent; there are no
/// cross-entry transactions. Re-storing an identifier overwrites the prior
/// entry (last writer wins).
pub struct KeyStore {
    conn: Arc<Mutex<Connection>>,
}

impl KeyStore {
    /// Opens (or creates) a keystore at the given path.
    pub fn open(path: impl AsRef<Path>) -> KeyStoreResult<Self> {
        let conn = Connection::open(path.as_ref())
            .map_err(|e| KeyStoreError::Storage(format!("failed to open keystore: {e}")))?;
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.init_schema()?;
        Ok(store)
    }

    /// Opens an in-memory keystore (for testing).
    pub fn open_in_memory() -> KeyStoreResult<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| KeyStoreError::Storage(format!("failed to open in-memory keystore: {e}")))?;
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> KeyStoreResult<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS file_keys (
                file_id TEXT PRIMARY KEY,
                key BLOB NOT NULL
            );
            ",
        )
        .map_err(|e| KeyStoreError::Storage(format!("failed to init keystore schema: {e}")))?;
        Ok(())
    }

    /// Persists the key for a file, overwriting any prior entry.
    pub fn store(&self, file_id: &FileId, key: &FileKey) -> KeyStoreResult<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT OR REPLACE INTO file_keys (file_id, key) VALUES (?1, ?2)",
            params![file_id.to_string(), key.as_bytes().as_slice()],
        )
        .map_err(|e| KeyStoreError::Storage(format!("failed to store key: {e}")))?;
        debug!(%file_id, "stored file key");
        Ok(())
    }

    /// Returns the stored key for a file, or `None` if this device has no
    /// entry (file uploaded elsewhere, or already removed).
    pub fn fetch(&self, file_id: &FileId) -> KeyStoreResult<Option<FileKey>> {
        let conn = self.conn.lock().unwrap();
        let row: Option<Vec<u8>> = conn
            .query_row(
                "SELECT key FROM file_keys WHERE file_id = ?1",
                params![file_id.to_string()],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| KeyStoreError::Storage(format!("failed to fetch key: {e}")))?;

        match row {
            None => Ok(None),
            Some(bytes) => match FileKey::from_slice(&bytes) {
                Ok(key) => Ok(Some(key)),
                Err(_) => Err(KeyStoreError::Corrupt {
                    file_id: file_id.to_string(),
                    actual: bytes.len(),
                }),
            },
        }
    }

    /// Deletes the entry for a file. Removing a missing entry is not an
    /// error.
    pub fn remove(&self, file_id: &FileId) -> KeyStoreResult<()> {
        let conn = self.conn.lock().unwrap();
        let changed = conn
            .execute(
                "DELETE FROM file_keys WHERE file_id = ?1",
                params![file_id.to_string()],
            )
            .map_err(|e| KeyStoreError::Storage(format!("failed to remove key: {e}")))?;
        if changed > 0 {
            debug!(%file_id, "removed file key");
        }
        Ok(())
    }

    /// Returns whether an entry exists for the file.
    pub fn contains(&self, file_id: &FileId) -> KeyStoreResult<bool> {
        Ok(self.fetch(file_id)?.is_some())
    }

    /// Returns the number of stored entries.
    pub fn len(&self) -> KeyStoreResult<usize> {
        let conn = self.conn.lock().unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM file_keys", [], |row| row.get(0))
            .map_err(|e| KeyStoreError::Storage(format!("failed to count keys: {e}")))?;
        Ok(count as usize)
    }

    /// Returns true if no entries are stored.
    pub fn is_empty(&self) -> KeyStoreResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Deletes every entry. Used on logout to clear local session data.
    pub fn clear(&self) -> KeyStoreResult<()> {
        let conn = self.conn.lock().unwrap();
        let removed = conn
            .execute("DELETE FROM file_keys", [])
            .map_err(|e| KeyStoreError::Storage(format!("failed to clear keystore: {e}")))?;
        debug!(removed, "cleared keystore");
        Ok(())
    }
}
