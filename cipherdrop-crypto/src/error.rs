//! Error types for the encryption engine.

use thiserror::Error;

/// Result type for crypto operations.
pub type CryptoResult<T> = Result<T, CryptoError>;

/// Errors that can occur in cryptographic operations.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// The OS secure random source was unavailable or failed.
    ///
    /// Fatal for the operation: there is no fallback to a weaker source.
    #[error("secure random generation failed: {0}")]
    GenerationFailure(String),

    /// Encryption failed.
    #[error("encryption failed: {0}")]
    Encryption(String),

    /// Authentication tag verification failed (wrong key, wrong nonce,
    /// or tampered ciphertext). No plaintext is ever returned.
    #[error("decryption failed: ciphertext rejected (wrong key or tampered data)")]
    DecryptionFailed,

    /// Invalid key length.
    #[error("invalid key length: expected {expected}, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    /// Invalid nonce length.
    #[error("invalid nonce length: expected {expected}, got {actual}")]
    InvalidNonceLength { expected: usize, actual: usize },

    /// Malformed hex input (odd length or non-hex characters).
    #[error("invalid encoding: {0}")]
    InvalidEncoding(String),
}
