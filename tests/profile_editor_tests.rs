//! Tests for the profile editor component
//!
//! These tests cover:
//! - Text fields round-tripping into the derived view
//! - Main photo upload and replacement
//! - Frame finishing: release first, then apply the frame's actions
//! - Gallery upload, append order and placeholders
//! - Release of every media reference on teardown

mod common;

use common::{RecordingHost, file, files};
use profile_editor::config::{ProfileField, ProfileFields};
use profile_editor::media::{MediaFile, MediaReference};
use profile_editor::view::{GALLERY_PLACEHOLDER_COUNT, MAIN_PHOTO_ALT, PLACEHOLDER_TEXT};
use profile_editor::{PhotoSlot, ProfileEditor};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

fn editor() -> (ProfileEditor<Arc<RecordingHost>>, Arc<RecordingHost>) {
    let host = RecordingHost::shared();
    let editor = ProfileEditor::new(ProfileFields::default(), Arc::clone(&host));
    (editor, host)
}

fn gallery_sources(editor: &ProfileEditor<Arc<RecordingHost>>) -> Vec<String> {
    editor
        .view()
        .gallery_images()
        .filter_map(PhotoSlot::source)
        .map(|r| r.to_string())
        .collect()
}

// ============================================================================
// Profile field tests
// ============================================================================

#[test]
fn test_name_shows_in_header() {
    let (mut editor, _host) = editor();
    editor.form_mut().set_name("Jane Doe");
    assert_eq!(editor.view().header.heading, "Jane Doe");
}

#[test]
fn test_bio_shows_in_about_section() {
    let (mut editor, _host) = editor();
    editor.form_mut().set_bio("A passionate developer.");
    assert_eq!(editor.view().about, "A passionate developer.");
}

#[test]
fn test_email_and_phone_show_in_contact_list() {
    let (mut editor, _host) = editor();
    editor.form_mut().set_email("jane.doe@newexample.com");
    editor.form_mut().set_phone("(987) 654-3210");

    let view = editor.view();
    assert_eq!(view.contact.email_line, "Email: jane.doe@newexample.com");
    assert_eq!(view.contact.phone_line, "Phone: (987) 654-3210");
}

#[test]
fn test_website_updates_link_text_and_target() {
    let (mut editor, _host) = editor();
    editor.form_mut().set_website("https://newexample.com");

    let view = editor.view();
    assert_eq!(view.contact.website.text, "https://newexample.com");
    assert_eq!(view.contact.website.href, "https://newexample.com");
    assert_eq!(editor.form().website(), "https://newexample.com");
}

#[test]
fn test_any_string_round_trips_through_every_field() {
    let (mut editor, _host) = editor();
    for value in ["", "x", "  padded  ", "ünïcødé ✓", "multi\nline"] {
        for field in ProfileField::all() {
            editor.form_mut().set(*field, value);
        }
        let view = editor.view();
        assert_eq!(view.header.heading, value);
        assert_eq!(view.about, value);
        assert_eq!(view.contact.email_line, format!("Email: {value}"));
        assert_eq!(view.contact.phone_line, format!("Phone: {value}"));
        assert_eq!(view.contact.website.href, value);
    }
}

#[test]
fn test_text_edits_and_uploads_request_redraws() {
    let (mut editor, _host) = editor();
    let redraws = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&redraws);
    editor.set_redraw_callback(Box::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    }));

    editor.form_mut().set_name("Jane Doe");
    editor.handle_main_photo_change(&files(&["main.png"]));
    editor.handle_gallery_photos_change(&files(&["g1.jpg", "g2.jpg"]));
    assert_eq!(redraws.load(Ordering::SeqCst), 3);

    // Empty selections change nothing and so do not redraw
    editor.handle_main_photo_change(&[]);
    editor.handle_gallery_photos_change(&[]);
    assert_eq!(redraws.load(Ordering::SeqCst), 3);
}

// ============================================================================
// Main photo tests
// ============================================================================

#[test]
fn test_main_photo_upload_replaces_placeholder() {
    let (mut editor, host) = editor();
    let before = editor.view();
    assert!(before.header.photo.is_placeholder());
    assert!(before.header_text().contains(&PLACEHOLDER_TEXT));

    assert!(editor.handle_main_photo_change(&[file("chucknorris.png")]));

    let view = editor.view();
    assert_eq!(
        view.header.photo.source().map(|r| r.as_str()),
        Some("mock-object-url:chucknorris.png")
    );
    assert_eq!(view.header.photo.alt(), Some(MAIN_PHOTO_ALT));
    assert!(!view.header_text().contains(&PLACEHOLDER_TEXT));
    assert_eq!(host.created().len(), 1);
}

#[test]
fn test_empty_main_selection_is_noop() {
    let (mut editor, host) = editor();
    assert!(!editor.handle_main_photo_change(&[]));
    assert!(editor.view().header.photo.is_placeholder());
    assert!(host.created().is_empty());
}

#[test]
fn test_replaced_main_photo_released_after_commit() {
    let (mut editor, host) = editor();
    editor.handle_main_photo_change(&files(&["first.png"]));
    editor.commit_frame();
    editor.handle_main_photo_change(&files(&["second.png"]));

    // The old photo is no longer displayed but not yet released
    let view = editor.view();
    assert_eq!(
        view.header.photo.source().map(|r| r.as_str()),
        Some("mock-object-url:second.png")
    );
    assert!(host.revoked().is_empty());

    // The frame showing the replacement is committed
    let released = editor.commit_frame();
    assert_eq!(released.len(), 1);
    assert_eq!(host.revoked(), vec!["mock-object-url:first.png".to_string()]);
}

// ============================================================================
// Frame finishing tests
// ============================================================================

fn replace_main(editor: &mut ProfileEditor<Arc<RecordingHost>>, selection: Vec<MediaFile>) {
    editor.handle_main_photo_change(&selection);
}

fn main_source(editor: &ProfileEditor<Arc<RecordingHost>>) -> Option<String> {
    editor
        .view()
        .header
        .photo
        .source()
        .map(|r| r.to_string())
}

#[test]
fn test_replacement_from_frame_action_outlives_that_frame() {
    let (mut editor, host) = editor();
    editor.handle_main_photo_change(&files(&["first.png"]));

    // Frame 1 shows first.png and its picker asks for second.png
    assert_eq!(
        main_source(&editor).as_deref(),
        Some("mock-object-url:first.png")
    );
    let released = editor.finish_frame(vec![files(&["second.png"])], replace_main);
    assert!(released.is_empty());
    assert_eq!(host.revoke_count("mock-object-url:first.png"), 0);

    // Frame 2 is the first to show second.png; first.png is still live
    // while it is being prepared
    assert_eq!(
        main_source(&editor).as_deref(),
        Some("mock-object-url:second.png")
    );
    assert!(host.revoked().is_empty());

    // Presenting frame 2 releases first.png
    let released = editor.finish_frame(Vec::<Vec<MediaFile>>::new(), replace_main);
    assert_eq!(
        released,
        vec![MediaReference::new("mock-object-url:first.png")]
    );
    assert_eq!(host.revoke_count("mock-object-url:first.png"), 1);
    assert_eq!(host.revoke_count("mock-object-url:second.png"), 0);
}

#[test]
fn test_finish_frame_releases_before_applying_actions() {
    let (mut editor, host) = editor();
    editor.handle_main_photo_change(&files(&["a.png"]));
    editor.finish_frame(Vec::<Vec<MediaFile>>::new(), replace_main);
    // Replaced between frames, so the frame being finished showed b.png
    editor.handle_main_photo_change(&files(&["b.png"]));

    let released = editor.finish_frame(vec![files(&["c.png"])], replace_main);

    assert_eq!(released, vec![MediaReference::new("mock-object-url:a.png")]);
    assert_eq!(host.revoked(), vec!["mock-object-url:a.png".to_string()]);
    assert_eq!(editor.media().pending_release_count(), 1);

    editor.finish_frame(Vec::<Vec<MediaFile>>::new(), replace_main);
    assert_eq!(host.revoke_count("mock-object-url:b.png"), 1);
    assert_eq!(host.revoke_count("mock-object-url:c.png"), 0);
}

#[test]
fn test_finish_frame_applies_actions_in_order() {
    let (mut editor, _host) = editor();
    let actions = vec![files(&["g1.jpg"]), files(&["g2.jpg", "g3.jpg"])];
    editor.finish_frame(actions, |editor, selection| {
        editor.handle_gallery_photos_change(&selection);
    });
    assert_eq!(
        gallery_sources(&editor),
        vec![
            "mock-object-url:g1.jpg",
            "mock-object-url:g2.jpg",
            "mock-object-url:g3.jpg"
        ]
    );
}

// ============================================================================
// Gallery tests
// ============================================================================

#[test]
fn test_gallery_starts_with_three_placeholders() {
    let (editor, _host) = editor();
    let view = editor.view();
    assert_eq!(view.placeholder_count(), GALLERY_PLACEHOLDER_COUNT);
    assert_eq!(view.placeholder_count(), 3);
    assert_eq!(view.gallery_images().count(), 0);
}

#[test]
fn test_multiple_gallery_photos_upload() {
    let (mut editor, host) = editor();
    let added = editor.handle_gallery_photos_change(&files(&["photo1.jpg", "photo2.png"]));
    assert_eq!(added, 2);

    let view = editor.view();
    let alts: Vec<_> = view.gallery_images().filter_map(PhotoSlot::alt).collect();
    assert_eq!(alts, vec!["Gallery photo 1", "Gallery photo 2"]);
    assert_eq!(
        gallery_sources(&editor),
        vec!["mock-object-url:photo1.jpg", "mock-object-url:photo2.png"]
    );
    assert_eq!(view.placeholder_count(), 0);
    assert_eq!(host.created().len(), 2);
}

#[test]
fn test_gallery_appends_to_existing_photos() {
    let (mut editor, _host) = editor();
    editor.handle_gallery_photos_change(&files(&["photo1.jpg"]));
    assert_eq!(editor.view().gallery_images().count(), 1);

    editor.handle_gallery_photos_change(&files(&["photo2.png"]));
    let view = editor.view();
    let alts: Vec<_> = view.gallery_images().filter_map(PhotoSlot::alt).collect();
    assert_eq!(alts, vec!["Gallery photo 1", "Gallery photo 2"]);
    assert_eq!(
        gallery_sources(&editor),
        vec!["mock-object-url:photo1.jpg", "mock-object-url:photo2.png"]
    );
}

#[test]
fn test_gallery_append_law_m_then_n() {
    let (mut editor, _host) = editor();
    let first = ["a.png", "b.png", "c.png"];
    let second = ["d.png", "e.png"];
    editor.handle_gallery_photos_change(&files(&first));
    editor.handle_gallery_photos_change(&files(&second));

    let expected: Vec<String> = first
        .iter()
        .chain(second.iter())
        .map(|name| format!("mock-object-url:{name}"))
        .collect();
    assert_eq!(gallery_sources(&editor), expected);

    let last_alt = editor
        .view()
        .gallery_images()
        .last()
        .and_then(|slot| slot.alt().map(str::to_owned));
    assert_eq!(last_alt.as_deref(), Some("Gallery photo 5"));
}

#[test]
fn test_main_photo_change_keeps_gallery_live() {
    let (mut editor, host) = editor();
    editor.handle_gallery_photos_change(&files(&["g1.jpg", "g2.jpg"]));
    editor.handle_main_photo_change(&files(&["m1.png"]));
    editor.commit_frame();
    editor.handle_main_photo_change(&files(&["m2.png"]));
    editor.commit_frame();

    assert_eq!(host.revoked(), vec!["mock-object-url:m1.png".to_string()]);
    for source in editor.view().displayed_references() {
        assert_eq!(host.revoke_count(source.as_str()), 0);
    }
}

// ============================================================================
// Teardown tests
// ============================================================================

#[test]
fn test_unmount_releases_main_and_gallery() {
    let (mut editor, host) = editor();
    editor.handle_main_photo_change(&files(&["main.png"]));
    editor.handle_gallery_photos_change(&files(&["gallery1.jpg", "gallery2.jpg"]));
    assert_eq!(host.created().len(), 3);

    drop(editor);

    let revoked = host.revoked();
    assert_eq!(revoked.len(), 3);
    for handle in [
        "mock-object-url:main.png",
        "mock-object-url:gallery1.jpg",
        "mock-object-url:gallery2.jpg",
    ] {
        assert_eq!(host.revoke_count(handle), 1, "{handle}");
    }
}

#[test]
fn test_teardown_after_many_replacements_releases_each_once() {
    let (mut editor, host) = editor();
    for round in 0..5 {
        editor.handle_main_photo_change(&[file(&format!("main{round}.png"))]);
        if round % 2 == 0 {
            editor.commit_frame();
        }
    }
    editor.handle_gallery_photos_change(&files(&["g.jpg"]));

    editor.teardown();
    editor.teardown();
    drop(editor);

    let created = host.created();
    assert_eq!(created.len(), 6);
    for handle in &created {
        assert_eq!(host.revoke_count(handle), 1, "{handle}");
    }
    assert_eq!(host.revoked().len(), created.len());
}

#[test]
fn test_teardown_with_nothing_uploaded() {
    let (mut editor, host) = editor();
    assert!(editor.teardown().is_empty());
    drop(editor);
    assert!(host.revoked().is_empty());
}
