//! User-selected media files.

use std::fmt;
use std::sync::Arc;

/// A single file handed over by a file picker or a drop event.
///
/// The bytes are shared, so cloning a `MediaFile` never copies content.
#[derive(Clone, PartialEq, Eq)]
pub struct MediaFile {
    name: String,
    bytes: Arc<[u8]>,
}

impl MediaFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// File name as reported by the picker (no directory component)
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

// Content is elided so large images don't flood the debug log.
impl fmt::Debug for MediaFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaFile")
            .field("name", &self.name)
            .field("len", &self.bytes.len())
            .finish()
    }
}
