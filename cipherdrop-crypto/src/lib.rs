//! Client-side encryption engine for CipherDrop.
//!
//! Everything the zero-knowledge guarantee rests on lives here:
//! - Per-file AES-256-GCM keys and 96-bit nonces from OS randomness
//! - Authenticated encryption/decryption of opaque byte buffers
//! - Hex codec for the transport-facing encodings
//!
//! The engine is deliberately small and pure: it holds no state, talks to
//! no storage or network, and propagates typed failures to the
//! orchestration layer instead of swallowing them.

mod cipher;
mod encoding;
mod error;
mod key;

pub use cipher::{decrypt, encrypt, TAG_SIZE};
pub use encoding::{
    key_from_hex, key_to_hex, nonce_from_hex, nonce_to_hex, KEY_HEX_LEN, NONCE_HEX_LEN,
};
pub use error::{CryptoError, CryptoResult};
pub use key::{FileKey, Nonce96, KEY_SIZE, NONCE_SIZE};
