//! Error types for the orchestration layer.

use cipherdrop_crypto::CryptoError;
use cipherdrop_keystore::KeyStoreError;
use cipherdrop_types::FileId;
use thiserror::Error;

use crate::transport::TransportError;

/// Result type for flow operations.
pub type FlowResult<T> = Result<T, FlowError>;

/// Errors surfaced by [`crate::FileCryptoFlow`] operations.
#[derive(Debug, Error)]
pub enum FlowError {
    /// No key for this file on this device. Recoverable: the user can
    /// re-upload from here or open the file where it was uploaded.
    #[error("no encryption key for file {0} on this device")]
    KeyNotFound(FileId),

    /// Typed crypto failure (tag verification, malformed hex, RNG).
    #[error(transparent)]
    Crypto(#[from] CryptoError),

    /// Keystore failure (storage error or corrupt entry).
    #[error(transparent)]
    KeyStore(#[from] KeyStoreError),

    /// Transport collaborator failure.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl FlowError {
    /// Short user-facing message for toasts and dialogs.
    ///
    /// The `Display` impl keeps the precise cause for logs; this is the
    /// translation the UI shows.
    pub fn user_message(&self) -> &'static str {
        match self {
            FlowError::KeyNotFound(_) => {
                "The decryption key for this file is not available on this device."
            }
            FlowError::Crypto(CryptoError::DecryptionFailed) => {
                "This file could not be decrypted. It may be corrupted or tampered with."
            }
            FlowError::Crypto(CryptoError::GenerationFailure(_)) => {
                "Secure key generation is unavailable on this device."
            }
            FlowError::Crypto(_) => "The file's encryption metadata is invalid.",
            FlowError::KeyStore(_) => "The local key storage could not be accessed.",
            FlowError::Transport(_) => "The server could not be reached. Please try again.",
        }
    }
}
