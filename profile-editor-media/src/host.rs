//! Host object-reference facility.
//!
//! The host turns a file into a handle usable as an image source and later
//! revokes it. Both calls are infallible.

use crate::{MediaFile, MediaReference};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// Prefix of every handle issued by [`MemoryHost`].
pub const MEMORY_HOST_SCHEME: &str = "blob:profile-editor/";

/// Creates and revokes object references for media files.
pub trait ObjectUrlHost {
    /// Bind `file` to a fresh handle.
    fn create_object_url(&self, file: &MediaFile) -> MediaReference;

    /// Invalidate a handle. No return value, never fails.
    fn revoke_object_url(&self, reference: &MediaReference);
}

impl<H: ObjectUrlHost + ?Sized> ObjectUrlHost for &H {
    fn create_object_url(&self, file: &MediaFile) -> MediaReference {
        (**self).create_object_url(file)
    }

    fn revoke_object_url(&self, reference: &MediaReference) {
        (**self).revoke_object_url(reference)
    }
}

impl<H: ObjectUrlHost + ?Sized> ObjectUrlHost for Arc<H> {
    fn create_object_url(&self, file: &MediaFile) -> MediaReference {
        (**self).create_object_url(file)
    }

    fn revoke_object_url(&self, reference: &MediaReference) {
        (**self).revoke_object_url(reference)
    }
}

/// In-process host that keeps every live file in a shared registry.
///
/// Clones share the registry, so the renderer can hold one clone to resolve
/// handles while the manager owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    blobs: Arc<RwLock<HashMap<MediaReference, MediaFile>>>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the file bound to a live handle.
    ///
    /// Returns `None` once the handle has been revoked.
    pub fn resolve(&self, reference: &MediaReference) -> Option<MediaFile> {
        self.blobs.read().get(reference).cloned()
    }

    /// Number of handles currently live in this registry
    pub fn live_count(&self) -> usize {
        self.blobs.read().len()
    }

    pub fn is_live(&self, reference: &MediaReference) -> bool {
        self.blobs.read().contains_key(reference)
    }
}

impl ObjectUrlHost for MemoryHost {
    fn create_object_url(&self, file: &MediaFile) -> MediaReference {
        let reference = MediaReference::new(format!("{MEMORY_HOST_SCHEME}{}", Uuid::new_v4()));
        log::debug!(
            "Created object reference {} for {:?} ({} bytes)",
            reference,
            file.name(),
            file.len()
        );
        self.blobs.write().insert(reference.clone(), file.clone());
        reference
    }

    fn revoke_object_url(&self, reference: &MediaReference) {
        if self.blobs.write().remove(reference).is_some() {
            log::debug!("Revoked object reference {}", reference);
        } else {
            log::warn!("Revoke requested for unknown object reference {}", reference);
        }
    }
}
