//! In-memory transport double.
//!
//! Stands in for the HTTP backend in tests and local development. It
//! plays the server's part faithfully, including the part worth noticing:
//! to mint share links the real server keeps its own copy of the file
//! key, so the double requires tests to escrow one explicitly.

use crate::transport::{
    ShareGrant, ShareOptions, ShareView, Transport, TransportError, TransportResult, UploadRequest,
};
use async_trait::async_trait;
use cipherdrop_types::{FileId, FileRecord, ShareToken};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

struct StoredFile {
    record: FileRecord,
    ciphertext: Vec<u8>,
}

/// In-memory [`Transport`] implementation.
#[derive(Default)]
pub struct MemoryTransport {
    files: Mutex<HashMap<FileId, StoredFile>>,
    shares: Mutex<HashMap<ShareToken, ShareView>>,
    escrow: Mutex<HashMap<FileId, String>>,
    reject_uploads: AtomicBool,
}

impl MemoryTransport {
    /// Creates an empty transport double.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes subsequent uploads fail, for exercising the
    /// no-key-before-ack guarantee.
    pub fn set_reject_uploads(&self, reject: bool) {
        self.reject_uploads.store(reject, Ordering::SeqCst);
    }

    /// Registers the server-side key copy for a file, enabling
    /// [`Transport::create_share`] for it.
    pub fn escrow_key(&self, file_id: &FileId, key_hex: &str) {
        self.escrow
            .lock()
            .unwrap()
            .insert(*file_id, key_hex.to_string());
    }

    /// Number of files the "server" currently holds.
    pub fn file_count(&self) -> usize {
        self.files.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for MemoryTransport {
    async fn upload(&self, request: UploadRequest) -> TransportResult<FileRecord> {
        if self.reject_uploads.load(Ordering::SeqCst) {
            return Err(TransportError::Rejected("upload refused".to_string()));
        }

        let record = FileRecord {
            id: FileId::new(),
            filename: request.filename,
            size: request.size,
            mime_type: request.mime_type,
            nonce_hex: request.nonce_hex,
        };
        self.files.lock().unwrap().insert(
            record.id,
            StoredFile {
                record: record.clone(),
                ciphertext: request.ciphertext,
            },
        );
        Ok(record)
    }

    async fn metadata(&self, file_id: &FileId) -> TransportResult<FileRecord> {
        self.files
            .lock()
            .unwrap()
            .get(file_id)
            .map(|f| f.record.clone())
            .ok_or_else(|| TransportError::NotFound(file_id.to_string()))
    }

    async fn download(&self, file_id: &FileId) -> TransportResult<Vec<u8>> {
        self.files
            .lock()
            .unwrap()
            .get(file_id)
            .map(|f| f.ciphertext.clone())
            .ok_or_else(|| TransportError::NotFound(file_id.to_string()))
    }

    async fn delete(&self, file_id: &FileId) -> TransportResult<()> {
        self.files
            .lock()
            .unwrap()
            .remove(file_id)
            .map(|_| ())
            .ok_or_else(|| TransportError::NotFound(file_id.to_string()))
    }

    async fn create_share(
        &self,
        file_id: &FileId,
        options: &ShareOptions,
    ) -> TransportResult<ShareGrant> {
        let key_hex = self
            .escrow
            .lock()
            .unwrap()
            .get(file_id)
            .cloned()
            .ok_or_else(|| {
                TransportError::Rejected(format!("no escrowed key for file {file_id}"))
            })?;

        let (filename, mime_type, nonce_hex, ciphertext) = {
            let files = self.files.lock().unwrap();
            let stored = files
                .get(file_id)
                .ok_or_else(|| TransportError::NotFound(file_id.to_string()))?;
            (
                stored.record.filename.clone(),
                stored.record.mime_type.clone(),
                stored.record.nonce_hex.clone(),
                stored.ciphertext.clone(),
            )
        };

        let token = ShareToken::new();
        self.shares.lock().unwrap().insert(
            token,
            ShareView {
                filename,
                mime_type,
                allow_download: options.allow_download,
                ciphertext,
                key_hex: key_hex.clone(),
                nonce_hex: nonce_hex.clone(),
            },
        );

        Ok(ShareGrant {
            token,
            url: format!("/share/{token}"),
            key_hex,
            nonce_hex,
            expires_at: None,
        })
    }

    async fn fetch_share(&self, token: &ShareToken) -> TransportResult<ShareView> {
        self.shares
            .lock()
            .unwrap()
            .get(token)
            .cloned()
            .ok_or_else(|| TransportError::NotFound(format!("share {token} expired or unknown")))
    }
}
