//! Core type definitions for CipherDrop.
//!
//! This crate defines the fundamental types shared across the client core:
//! - File and share-token identifiers
//! - `FileRecord`, the server-side metadata the client consumes
//! - `Blob`, typed decrypted content handed back to callers
//!
//! Anything UI- or transport-specific (routing state, HTTP wiring, form
//! models) belongs to the embedding application, not here.

mod blob;
mod ids;
mod record;

pub use blob::Blob;
pub use ids::{FileId, ShareToken};
pub use record::FileRecord;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid UUID: {0}")]
    InvalidUuid(#[from] uuid::Error),
}
