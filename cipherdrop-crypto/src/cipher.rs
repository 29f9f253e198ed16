//! File encryption using AES-256-GCM.
//!
//! Authenticated encryption: confidentiality and tamper-detection in one
//! primitive, no separate MAC step. No associated data is used. The nonce
//! is supplied by the caller because it is a first-class transport value
//! here — it travels as hex in file metadata and, for shared links,
//! arrives from the share response rather than local state.

use crate::error::{CryptoError, CryptoResult};
use crate::key::{FileKey, Nonce96};
use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};

/// Size of the GCM authentication tag in bytes, appended to ciphertext.
pub const TAG_SIZE: usize = 16;

/// Encrypts plaintext under `key` with `nonce`.
///
/// Returns ciphertext with the authentication tag appended, so the output
/// is always exactly `plaintext.len() + TAG_SIZE` bytes.
///
/// The same (key, nonce) pair must never be passed to this function twice;
/// callers obtain a fresh [`Nonce96::generate`] per call.
pub fn encrypt(plaintext: &[u8], key: &FileKey, nonce: &Nonce96) -> CryptoResult<Vec<u8>> {
    let cipher = Aes256Gcm::new(key.as_bytes().into());

    cipher
        .encrypt(Nonce::from_slice(nonce.as_bytes()), plaintext)
        .map_err(|e| CryptoError::Encryption(e.to_string()))
}

/// Decrypts ciphertext under `key` with `nonce`.
///
/// The authentication tag is verified before any plaintext is released;
/// verification failure yields [`CryptoError::DecryptionFailed`] and no
/// data (fail-closed). Causes: wrong key, wrong nonce, tampered or
/// truncated ciphertext.
pub fn decrypt(ciphertext: &[u8], key: &FileKey, nonce: &Nonce96) -> CryptoResult<Vec<u8>> {
    // Anything shorter than the tag cannot be a valid GCM output.
    if ciphertext.len() < TAG_SIZE {
        return Err(CryptoError::DecryptionFailed);
    }

    let cipher = Aes256Gcm::new(key.as_bytes().into());

    cipher
        .decrypt(Nonce::from_slice(nonce.as_bytes()), ciphertext)
        .map_err(|_| CryptoError::DecryptionFailed)
}
