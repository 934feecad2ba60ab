//! Release protocol tests for `MediaReferenceManager`
//!
//! A recording host mirrors the browser facility: handles are
//! `mock-object-url:<file name>` and every create/revoke call is logged.

use parking_lot::Mutex;
use profile_editor_media::{MediaFile, MediaReference, MediaReferenceManager, ObjectUrlHost};
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Default)]
struct RecordingHost {
    created: Mutex<Vec<String>>,
    revoked: Mutex<Vec<String>>,
}

impl RecordingHost {
    fn created(&self) -> Vec<String> {
        self.created.lock().clone()
    }

    fn revoked(&self) -> Vec<String> {
        self.revoked.lock().clone()
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

fn files(names: &[&str]) -> Vec<MediaFile> {
    names
        .iter()
        .map(|name| MediaFile::new(*name, name.as_bytes().to_vec()))
        .collect()
}

#[test]
fn test_gallery_append_law() {
    let host = Arc::new(RecordingHost::default());
    let mut manager = MediaReferenceManager::new(Arc::clone(&host));

    assert_eq!(manager.add_gallery_photos(&files(&["photo1.jpg"])), 1);
    assert_eq!(
        manager.add_gallery_photos(&files(&["photo2.png", "photo3.gif"])),
        2
    );

    let handles: Vec<&str> = manager.gallery().iter().map(|r| r.as_str()).collect();
    assert_eq!(
        handles,
        vec![
            "mock-object-url:photo1.jpg",
            "mock-object-url:photo2.png",
            "mock-object-url:photo3.gif",
        ]
    );
    assert_eq!(host.created().len(), 3);
    assert!(host.revoked().is_empty());
}

#[test]
fn test_teardown_releases_each_reference_once() {
    let host = Arc::new(RecordingHost::default());
    let mut manager = MediaReferenceManager::new(Arc::clone(&host));

    manager.set_main_photo(&files(&["main.png"]));
    manager.add_gallery_photos(&files(&["gallery1.jpg", "gallery2.jpg"]));
    assert_eq!(host.created().len(), 3);

    drop(manager);

    let mut revoked = host.revoked();
    revoked.sort();
    assert_eq!(
        revoked,
        vec![
            "mock-object-url:gallery1.jpg",
            "mock-object-url:gallery2.jpg",
            "mock-object-url:main.png",
        ]
    );
}

#[test]
fn test_replacements_without_commit_still_release_once() {
    let host = Arc::new(RecordingHost::default());
    let mut manager = MediaReferenceManager::new(Arc::clone(&host));

    for name in ["a.png", "b.png", "c.png", "d.png"] {
        manager.set_main_photo(&files(&[name]));
    }
    manager.add_gallery_photos(&files(&["g.jpg"]));
    assert_eq!(manager.pending_release_count(), 3);

    manager.release_all();
    manager.release_all();
    drop(manager);

    let mut counts: HashMap<String, usize> = HashMap::new();
    for handle in host.revoked() {
        *counts.entry(handle).or_default() += 1;
    }
    assert_eq!(counts.len(), 5);
    assert!(counts.values().all(|&n| n == 1), "double release: {counts:?}");
}

#[test]
fn test_commit_releases_only_superseded() {
    let host = Arc::new(RecordingHost::default());
    let mut manager = MediaReferenceManager::new(Arc::clone(&host));

    manager.add_gallery_photos(&files(&["g1.jpg"]));
    manager.set_main_photo(&files(&["old.png"]));
    manager.set_main_photo(&files(&["new.png"]));

    // Nothing is released while the old photo may still be on screen
    assert!(host.revoked().is_empty());

    let released = manager.commit_frame();
    assert_eq!(released, vec![MediaReference::new("mock-object-url:old.png")]);
    assert_eq!(host.revoked(), vec!["mock-object-url:old.png".to_string()]);
    assert_eq!(
        manager.main_photo().map(|r| r.as_str()),
        Some("mock-object-url:new.png")
    );
    assert_eq!(manager.gallery().len(), 1);
}

#[test]
fn test_release_all_on_empty_manager() {
    let host = RecordingHost::default();
    let mut manager = MediaReferenceManager::new(&host);
    assert!(manager.release_all().is_empty());
    drop(manager);
    assert!(host.revoked().is_empty());
}
