//! Lifetime tracking for the main photo and gallery references.
//!
//! Every reference created here is revoked exactly once:
//!
//! - a replaced main photo moves to a superseded queue and is revoked by
//!   [`MediaReferenceManager::commit_frame`], i.e. only after a frame showing
//!   its replacement has been presented
//! - everything still tracked is revoked by
//!   [`MediaReferenceManager::release_all`], which also runs on drop
//!
//! Released references are moved out of the manager, so nothing it hands to
//! the view can ever be a revoked handle.

use crate::{MediaFile, MediaReference, ObjectUrlHost};

/// Owns every media reference created for one profile view.
pub struct MediaReferenceManager<H: ObjectUrlHost> {
    host: H,
    main: Option<MediaReference>,
    gallery: Vec<MediaReference>,
    /// Replaced main photos awaiting the next committed frame
    superseded: Vec<MediaReference>,
    created: usize,
    released: usize,
}

impl<H: ObjectUrlHost> MediaReferenceManager<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            main: None,
            gallery: Vec::new(),
            superseded: Vec::new(),
            created: 0,
            released: 0,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Replace the main photo with the first file of `selection`.
    ///
    /// An empty selection is a no-op and returns `false`. The previous main
    /// reference stays live until the next [`commit_frame`](Self::commit_frame).
    pub fn set_main_photo(&mut self, selection: &[MediaFile]) -> bool {
        let Some(file) = selection.first() else {
            log::debug!("Main photo selection empty, nothing to do");
            return false;
        };

        let reference = self.create(file);
        log::info!("Main photo set to {} ({:?})", reference, file.name());
        if let Some(previous) = self.main.replace(reference) {
            log::debug!("Main photo {} superseded, release deferred", previous);
            self.superseded.push(previous);
        }
        true
    }

    /// Append one reference per file, preserving input order.
    ///
    /// Returns the number of references created.
    pub fn add_gallery_photos(&mut self, selection: &[MediaFile]) -> usize {
        if selection.is_empty() {
            log::debug!("Gallery selection empty, nothing to do");
            return 0;
        }

        self.gallery.reserve(selection.len());
        for file in selection {
            let reference = self.create(file);
            self.gallery.push(reference);
        }
        log::info!(
            "Added {} gallery photo(s), gallery now holds {}",
            selection.len(),
            self.gallery.len()
        );
        selection.len()
    }

    /// Release references superseded before the frame just presented.
    ///
    /// Call this after presenting a frame rendered from the current state.
    /// Returns the released references so caches keyed by them can evict.
    pub fn commit_frame(&mut self) -> Vec<MediaReference> {
        if self.superseded.is_empty() {
            return Vec::new();
        }
        let stale = std::mem::take(&mut self.superseded);
        for reference in &stale {
            self.revoke(reference);
        }
        stale
    }

    /// Release every tracked reference: main, gallery and superseded.
    ///
    /// Safe to call repeatedly; later calls find nothing to release.
    pub fn release_all(&mut self) -> Vec<MediaReference> {
        let mut released = std::mem::take(&mut self.superseded);
        released.extend(self.main.take());
        released.append(&mut self.gallery);

        for reference in &released {
            self.revoke(reference);
        }
        if !released.is_empty() {
            log::info!("Released {} media reference(s)", released.len());
        }
        released
    }

    pub fn main_photo(&self) -> Option<&MediaReference> {
        self.main.as_ref()
    }

    pub fn gallery(&self) -> &[MediaReference] {
        &self.gallery
    }

    /// References that may currently be displayed
    pub fn live_count(&self) -> usize {
        usize::from(self.main.is_some()) + self.gallery.len()
    }

    /// Superseded references not yet released
    pub fn pending_release_count(&self) -> usize {
        self.superseded.len()
    }

    pub fn created_count(&self) -> usize {
        self.created
    }

    pub fn released_count(&self) -> usize {
        self.released
    }

    fn create(&mut self, file: &MediaFile) -> MediaReference {
        self.created += 1;
        self.host.create_object_url(file)
    }

    fn revoke(&mut self, reference: &MediaReference) {
        self.released += 1;
        self.host.revoke_object_url(reference);
    }
}

impl<H: ObjectUrlHost> Drop for MediaReferenceManager<H> {
    fn drop(&mut self) {
        self.release_all();
    }
}
