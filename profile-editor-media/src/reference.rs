//! Opaque media handles.

use std::fmt;

/// An opaque handle bound to one in-memory file for as long as it is live.
///
/// Clones refer to the same handle; cloning does not extend its lifetime.
/// Only [`MediaReferenceManager`](crate::MediaReferenceManager) releases
/// handles it created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MediaReference(String);

impl MediaReference {
    /// Wrap a handle string produced by an [`ObjectUrlHost`](crate::ObjectUrlHost).
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MediaReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for MediaReference {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
