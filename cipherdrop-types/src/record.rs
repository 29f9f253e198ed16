//! File metadata as the server reports it.

use crate::FileId;
use serde::{Deserialize, Serialize};

/// Metadata for an uploaded file.
///
/// Consumed, never owned: the server is the source of truth. The nonce
/// travels in cleartext alongside the other fields — it is not secret,
/// it only must never repeat under the same key. The key itself is never
/// part of the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Server-assigned identifier.
    pub id: FileId,
    /// Display name shown to the user (original filename).
    pub filename: String,
    /// Plaintext size in bytes (ciphertext is 16 bytes longer).
    pub size: u64,
    /// MIME type of the plaintext content.
    pub mime_type: String,
    /// Nonce used for this file's encryption, lowercase hex.
    pub nonce_hex: String,
}
