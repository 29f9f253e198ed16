//! File encryption orchestration.
//!
//! `FileCryptoFlow` is the only component that holds both the crypto
//! engine and the keystore. Callers hand it plain identifiers and byte
//! buffers; it sequences generate → encrypt → transport → persist for
//! uploads and fetch → decode → decrypt for reads. Within one flow the
//! steps are strictly ordered by `.await`; across files there is no
//! ordering and no shared state beyond the keystore.

use crate::error::{FlowError, FlowResult};
use crate::transport::{ShareGrant, ShareOptions, Transport, UploadRequest};
use cipherdrop_crypto::{
    decrypt, encrypt, key_from_hex, nonce_from_hex, nonce_to_hex, FileKey, Nonce96,
};
use cipherdrop_keystore::KeyStore;
use cipherdrop_types::{Blob, FileId, FileRecord, ShareToken};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Decrypted share payload plus the viewer's permissions.
#[derive(Debug, Clone)]
pub struct SharedContent {
    /// The decrypted file content.
    pub blob: Blob,
    /// Whether the share permits downloading (enforced by the UI).
    pub allow_download: bool,
}

/// Orchestrates encryption, key persistence, and transport for the
/// upload, download/preview, and shared-link call sites.
pub struct FileCryptoFlow {
    transport: Arc<dyn Transport>,
    keystore: Arc<KeyStore>,
}

impl FileCryptoFlow {
    /// Creates a flow over a transport and a keystore.
    pub fn new(transport: Arc<dyn Transport>, keystore: Arc<KeyStore>) -> Self {
        Self {
            transport,
            keystore,
        }
    }

    /// Encrypts and uploads a file, returning the server's record.
    ///
    /// A fresh key and nonce are generated per call; the key is persisted
    /// locally only after the server has accepted the upload, so a failed
    /// upload never leaves an orphaned key entry.
    pub async fn upload(
        &self,
        filename: &str,
        mime_type: &str,
        plaintext: &[u8],
    ) -> FlowResult<FileRecord> {
        let key = FileKey::generate()?;
        let nonce = Nonce96::generate()?;
        let ciphertext = encrypt(plaintext, &key, &nonce)?;
        debug!(filename, size = plaintext.len(), "encrypted file for upload");

        let record = self
            .transport
            .upload(UploadRequest {
                filename: filename.to_string(),
                mime_type: mime_type.to_string(),
                size: plaintext.len() as u64,
                nonce_hex: nonce_to_hex(&nonce),
                ciphertext,
            })
            .await?;

        // Server has acknowledged; now the key may be persisted.
        self.keystore.store(&record.id, &key)?;
        info!(file_id = %record.id, filename, "uploaded and stored key");
        Ok(record)
    }

    /// Fetches and decrypts a file this device owns, for saving to disk.
    ///
    /// Fails with [`FlowError::KeyNotFound`] when the file was uploaded
    /// from a different device or its key was removed.
    pub async fn download(&self, file_id: &FileId) -> FlowResult<Blob> {
        self.fetch_and_decrypt(file_id).await
    }

    /// Fetches and decrypts a file this device owns, for inline preview.
    ///
    /// Identical to [`Self::download`] on the wire; the caller owns the
    /// preview resource and must release it when the preview closes.
    pub async fn preview(&self, file_id: &FileId) -> FlowResult<Blob> {
        self.fetch_and_decrypt(file_id).await
    }

    async fn fetch_and_decrypt(&self, file_id: &FileId) -> FlowResult<Blob> {
        let key = self
            .keystore
            .fetch(file_id)?
            .ok_or(FlowError::KeyNotFound(*file_id))?;

        let record = self.transport.metadata(file_id).await?;
        let ciphertext = self.transport.download(file_id).await?;
        let nonce = nonce_from_hex(&record.nonce_hex)?;

        let plaintext = decrypt(&ciphertext, &key, &nonce).inspect_err(|_| {
            warn!(%file_id, "decryption failed; discarding ciphertext");
        })?;

        debug!(%file_id, size = plaintext.len(), "decrypted file");
        Ok(Blob::new(plaintext, record.mime_type, record.filename))
    }

    /// Creates a public share link for a file.
    ///
    /// The grant's key and nonce come from the share response itself and
    /// are handed straight through — never read from or written to the
    /// keystore.
    pub async fn create_share(
        &self,
        file_id: &FileId,
        options: &ShareOptions,
    ) -> FlowResult<ShareGrant> {
        let grant = self.transport.create_share(file_id, options).await?;
        info!(%file_id, token = %grant.token, "created share link");
        Ok(grant)
    }

    /// Fetches and decrypts a shared file as a link viewer.
    ///
    /// Key and nonce arrive embedded in the share payload; they are used
    /// for this decryption and dropped, never persisted. The keystore is
    /// not consulted — the viewer is not the owner.
    pub async fn view_shared(&self, token: &ShareToken) -> FlowResult<SharedContent> {
        let view = self.transport.fetch_share(token).await?;
        let key = key_from_hex(&view.key_hex)?;
        let nonce = nonce_from_hex(&view.nonce_hex)?;

        let plaintext = decrypt(&view.ciphertext, &key, &nonce).inspect_err(|_| {
            warn!(%token, "shared decryption failed; discarding ciphertext");
        })?;

        debug!(%token, size = plaintext.len(), "decrypted shared file");
        Ok(SharedContent {
            blob: Blob::new(plaintext, view.mime_type, view.filename),
            allow_download: view.allow_download,
        })
    }

    /// Deletes a file on the server and drops its local key.
    ///
    /// The key removal is idempotent, so deleting a file whose key was
    /// never on this device still succeeds.
    pub async fn delete(&self, file_id: &FileId) -> FlowResult<()> {
        self.transport.delete(file_id).await?;
        self.keystore.remove(file_id)?;
        info!(%file_id, "deleted file and local key");
        Ok(())
    }

    /// Wipes every locally stored key. Called on logout.
    pub async fn forget_all(&self) -> FlowResult<()> {
        self.keystore.clear()?;
        info!("cleared all local file keys");
        Ok(())
    }
}
