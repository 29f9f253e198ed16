//! Key and nonce material.
//!
//! One random key per file, generated at upload time and never reused
//! across files. Nonces are fresh per encryption call; freshness is the
//! only thing enforced here (no counters, nothing derived from content).

use crate::error::{CryptoError, CryptoResult};
use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Size of encryption keys in bytes (256 bits for AES-256-GCM).
pub const KEY_SIZE: usize = 32;

/// Size of nonces in bytes (96 bits, the AES-GCM standard nonce length).
pub const NONCE_SIZE: usize = 12;

/// A per-file encryption key with automatic zeroization on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct FileKey {
    bytes: [u8; KEY_SIZE],
}

impl FileKey {
    /// Generates a fresh random key from the OS secure random source.
    ///
    /// Fails with [`CryptoError::GenerationFailure`] if the source is
    /// unavailable; never falls back to a weaker generator.
    pub fn generate() -> CryptoResult<Self> {
        let mut bytes = [0u8; KEY_SIZE];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| CryptoError::GenerationFailure(e.to_string()))?;
        Ok(Self { bytes })
    }

    /// Creates a key from raw bytes.
    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self { bytes }
    }

    /// Creates a key from a slice, checking the length.
    pub fn from_slice(bytes: &[u8]) -> CryptoResult<Self> {
        if bytes.len() != KEY_SIZE {
            return Err(CryptoError::InvalidKeyLength {
                expected: KEY_SIZE,
                actual: bytes.len(),
            });
        }
        let mut array = [0u8; KEY_SIZE];
        array.copy_from_slice(bytes);
        Ok(Self { bytes: array })
    }

    /// Returns the key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.bytes
    }
}

impl std::fmt::Debug for FileKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileKey")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

/// A 96-bit nonce for AES-GCM.
///
/// Not secret — it travels in cleartext with the file metadata — but a
/// (key, nonce) pair must be used for encryption exactly once.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Nonce96 {
    bytes: [u8; NONCE_SIZE],
}

impl Nonce96 {
    /// Generates a fresh random nonce from the OS secure random source.
    ///
    /// Same failure rule as [`FileKey::generate`]: no weaker fallback.
    pub fn generate() -> CryptoResult<Self> {
        let mut bytes = [0u8; NONCE_SIZE];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| CryptoError::GenerationFailure(e.to_string()))?;
        Ok(Self { bytes })
    }

    /// Creates a nonce from raw bytes.
    pub fn from_bytes(bytes: [u8; NONCE_SIZE]) -> Self {
        Self { bytes }
    }

    /// Creates a nonce from a slice, checking the length.
    pub fn from_slice(bytes: &[u8]) -> CryptoResult<Self> {
        if bytes.len() != NONCE_SIZE {
            return Err(CryptoError::InvalidNonceLength {
                expected: NONCE_SIZE,
                actual: bytes.len(),
            });
        }
        let mut array = [0u8; NONCE_SIZE];
        array.copy_from_slice(bytes);
        Ok(Self { bytes: array })
    }

    /// Returns the nonce bytes.
    pub fn as_bytes(&self) -> &[u8; NONCE_SIZE] {
        &self.bytes
    }
}
