//! Typed decrypted content.

use serde::{Deserialize, Serialize};

/// Decrypted file content plus the metadata needed to present it.
///
/// This is what the flow layer hands back for previews and downloads:
/// the embedding application turns it into whatever its platform wants
/// (an object URL, a saved file, an inline viewer). Releasing that
/// platform resource when the preview closes is the caller's obligation.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blob {
    /// Decrypted plaintext bytes.
    pub bytes: Vec<u8>,
    /// MIME type for rendering or download headers.
    pub content_type: String,
    /// Suggested filename for save-as.
    pub filename: String,
}

impl Blob {
    /// Creates a blob from raw bytes with a content type and filename.
    pub fn new(bytes: Vec<u8>, content_type: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            bytes,
            content_type: content_type.into(),
            filename: filename.into(),
        }
    }

    /// Returns the plaintext length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if the blob holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

// Decrypted content stays out of logs; show only shape.
impl std::fmt::Debug for Blob {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Blob")
            .field("len", &self.bytes.len())
            .field("content_type", &self.content_type)
            .field("filename", &self.filename)
            .finish()
    }
}
