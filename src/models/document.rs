//! Rendered document model.

use std::fmt;

/// An in-memory rendered artifact ready for delivery.
///
/// Documents are produced by the renderers and never written anywhere by
/// them; persistence or transfer is the dispatcher's job.
#[derive(Clone, PartialEq, Eq)]
pub struct Document {
    /// The document contents.
    pub bytes: Vec<u8>,
    /// The file name to save or attach the document under.
    pub filename: String,
    /// The MIME type of the contents.
    pub mime_type: String,
}

impl Document {
    /// Creates a new document.
    pub fn new(bytes: Vec<u8>, filename: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes,
            filename: filename.into(),
            mime_type: mime_type.into(),
        }
    }

    /// Returns the size of the contents in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if the document has no contents.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

// Contents are elided; documents can be large binary blobs.
impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("filename", &self.filename)
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}
