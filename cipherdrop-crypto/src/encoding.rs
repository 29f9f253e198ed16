//! Hex codec for transport encoding.
//!
//! Nonces ride in cleartext JSON metadata as lowercase hex; share
//! responses carry raw key bytes the same way. Pure conversions, no state.

use crate::error::{CryptoError, CryptoResult};
use crate::key::{FileKey, Nonce96, KEY_SIZE, NONCE_SIZE};

/// Encodes a nonce as a lowercase hex string.
pub fn nonce_to_hex(nonce: &Nonce96) -> String {
    hex::encode(nonce.as_bytes())
}

/// Decodes a nonce from a hex string.
///
/// Rejects malformed hex (odd length, non-hex characters) with
/// [`CryptoError::InvalidEncoding`] and wrong decoded length with
/// [`CryptoError::InvalidNonceLength`].
pub fn nonce_from_hex(s: &str) -> CryptoResult<Nonce96> {
    let bytes = decode_hex(s)?;
    Nonce96::from_slice(&bytes)
}

/// Encodes key bytes as a lowercase hex string.
///
/// Only the share-creation path uses this; owner-held keys never leave
/// the device in any encoding.
pub fn key_to_hex(key: &FileKey) -> String {
    hex::encode(key.as_bytes())
}

/// Decodes a key from a hex string (share responses).
pub fn key_from_hex(s: &str) -> CryptoResult<FileKey> {
    let bytes = decode_hex(s)?;
    if bytes.len() != KEY_SIZE {
        return Err(CryptoError::InvalidKeyLength {
            expected: KEY_SIZE,
            actual: bytes.len(),
        });
    }
    FileKey::from_slice(&bytes)
}

fn decode_hex(s: &str) -> CryptoResult<Vec<u8>> {
    hex::decode(s).map_err(|e| CryptoError::InvalidEncoding(e.to_string()))
}

/// Expected hex string length for a nonce.
pub const NONCE_HEX_LEN: usize = NONCE_SIZE * 2;

/// Expected hex string length for a key.
pub const KEY_HEX_LEN: usize = KEY_SIZE * 2;
