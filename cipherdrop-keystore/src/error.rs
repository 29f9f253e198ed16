//! Error types for the keystore.

use thiserror::Error;

/// Result type for keystore operations.
pub type KeyStoreResult<T> = Result<T, KeyStoreError>;

/// Errors that can occur in keystore operations.
///
/// A missing entry is not an error — [`crate::KeyStore::fetch`] returns
/// `Ok(None)` for that, since uploads from another device are an expected
/// condition the caller must handle.
#[derive(Debug, Error)]
pub enum KeyStoreError {
    /// Underlying SQLite failure.
    #[error("keystore storage error: {0}")]
    Storage(String),

    /// A stored key row had the wrong length; the entry is unusable.
    #[error("corrupt keystore entry for file {file_id}: key length {actual}")]
    Corrupt { file_id: String, actual: usize },
}
