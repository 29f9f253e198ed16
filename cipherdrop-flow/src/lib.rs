//! File encryption orchestration for CipherDrop.
//!
//! Sits between the UI and the two lower layers: the crypto engine
//! (`cipherdrop-crypto`) and the device-local keystore
//! (`cipherdrop-keystore`). Three call sites drive it:
//!
//! - **Upload** — generate key and nonce, encrypt, hand ciphertext plus
//!   nonce-hex to the transport, persist the key once the server acks.
//! - **Download/preview** — look up the key locally, fetch ciphertext and
//!   nonce from the transport, decrypt.
//! - **Shared link** — decrypt with key and nonce carried by the share
//!   payload itself, keystore untouched.
//!
//! The transport is an injected trait object; swap in [`MemoryTransport`]
//! for tests.

mod error;
mod flow;
mod memory;
mod transport;

pub use error::{FlowError, FlowResult};
pub use flow::{FileCryptoFlow, SharedContent};
pub use memory::MemoryTransport;
pub use transport::{
    ShareGrant, ShareOptions, ShareView, Transport, TransportError, TransportResult, UploadRequest,
};
