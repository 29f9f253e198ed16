//! Transport abstraction.
//!
//! The HTTP client, auth headers, and retry policy all live behind this
//! trait in the embedding application. The flow layer hands it ciphertext
//! and identifiers and gets DTOs back; it never sees a socket. Credentials
//! are the implementation's concern, passed in at construction — there is
//! no ambient session state in the core.

use async_trait::async_trait;
use cipherdrop_types::{FileId, FileRecord, ShareToken};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Errors from the transport collaborator.
///
/// Network-level retries, if any, happen inside the implementation; the
/// flow layer never retries.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The file or share does not exist (or the link expired).
    #[error("not found: {0}")]
    NotFound(String),

    /// The server refused the request (auth, quota, validation).
    #[error("request rejected: {0}")]
    Rejected(String),

    /// The server could not be reached or returned garbage.
    #[error("network error: {0}")]
    Network(String),
}

/// Everything the server needs to accept an encrypted upload.
///
/// Ciphertext plus cleartext metadata: the nonce (hex), the plaintext
/// size, the MIME type, and the display name. No key material.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadRequest {
    /// Display name of the file (original filename).
    pub filename: String,
    /// MIME type of the plaintext.
    pub mime_type: String,
    /// Plaintext size in bytes.
    pub size: u64,
    /// Encryption nonce, lowercase hex.
    pub nonce_hex: String,
    /// Encrypted content, tag appended.
    pub ciphertext: Vec<u8>,
}

/// Options for creating a public share link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareOptions {
    /// Whether viewers may download, or only preview.
    pub allow_download: bool,
    /// Requested link lifetime in days. The server caps this.
    pub expires_in_days: u32,
}

impl Default for ShareOptions {
    fn default() -> Self {
        Self {
            allow_download: false,
            expires_in_days: 7,
        }
    }
}

/// A freshly created share link.
///
/// Carries the decryption key and nonce in hex: the one deliberate
/// deviation from server-blindness, so a link alone suffices to view the
/// file. Anyone holding the grant (or intercepting the response past TLS)
/// can decrypt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareGrant {
    /// Token the viewer presents.
    pub token: ShareToken,
    /// Shareable URL built by the server.
    pub url: String,
    /// File decryption key, lowercase hex.
    pub key_hex: String,
    /// Encryption nonce, lowercase hex.
    pub nonce_hex: String,
    /// Expiry timestamp as reported by the server (RFC 3339), if any.
    pub expires_at: Option<String>,
}

/// Payload served to a share viewer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareView {
    /// Display name of the file.
    pub filename: String,
    /// MIME type of the plaintext.
    pub mime_type: String,
    /// Whether the viewer may download.
    pub allow_download: bool,
    /// Encrypted content, tag appended.
    pub ciphertext: Vec<u8>,
    /// File decryption key, lowercase hex.
    pub key_hex: String,
    /// Encryption nonce, lowercase hex.
    pub nonce_hex: String,
}

/// Abstract server interface for the file-sharing backend.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Uploads an encrypted file; the server assigns the identifier.
    async fn upload(&self, request: UploadRequest) -> TransportResult<FileRecord>;

    /// Fetches a file's metadata (including its nonce).
    async fn metadata(&self, file_id: &FileId) -> TransportResult<FileRecord>;

    /// Fetches a file's raw ciphertext.
    async fn download(&self, file_id: &FileId) -> TransportResult<Vec<u8>>;

    /// Deletes a file on the server.
    async fn delete(&self, file_id: &FileId) -> TransportResult<()>;

    /// Creates a public share link for a file.
    async fn create_share(
        &self,
        file_id: &FileId,
        options: &ShareOptions,
    ) -> TransportResult<ShareGrant>;

    /// Fetches the payload for a share token.
    async fn fetch_share(&self, token: &ShareToken) -> TransportResult<ShareView>;
}
