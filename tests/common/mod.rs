//! Shared helpers for integration tests

#![allow(dead_code)]

use parking_lot::Mutex;
use profile_editor::media::{MediaFile, MediaReference, ObjectUrlHost};
use std::sync::Arc;

/// Host that hands out `mock-object-url:<file name>` and records every call
#[derive(Default)]
pub struct RecordingHost {
    created: Mutex<Vec<String>>,
    revoked: Mutex<Vec<String>>,
}

impl RecordingHost {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn created(&self) -> Vec<String> {
        self.created.lock().clone()
    }

    pub fn revoked(&self) -> Vec<String> {
        self.revoked.lock().clone()
    }

    pub fn revoke_count(&self, handle: &str) -> usize {
        self.revoked.lock().iter().filter(|h| *h == handle).count()
    }
}

impl ObjectUrlHost for RecordingHost {
    fn create_object_url(&self, file: &MediaFile) -> MediaReference {
        let handle = format!("mock-object-url:{}", file.name());
        self.created.lock().push(handle.clone());
        MediaReference::new(handle)
    }

    fn revoke_object_url(&self, reference: &MediaReference) {
        self.revoked.lock().push(reference.to_string());
    }
}

/// One in-memory file whose content is its name
pub fn file(name: &str) -> MediaFile {
    MediaFile::new(name, format!("({name})").into_bytes())
}

pub fn files(names: &[&str]) -> Vec<MediaFile> {
    names.iter().map(|name| file(name)).collect()
}
