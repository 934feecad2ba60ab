//! The profile editor component.
//!
//! `ProfileEditor` combines the form state store with the media reference
//! manager. Text edits and file selections both end in a synchronous redraw
//! request; `view()` derives what the window shows. Dropping the editor (or
//! calling `teardown`) releases every media reference it created.

use crate::form_state::{FormStateStore, RedrawCallback};
use crate::view::ProfileView;
use parking_lot::Mutex;
use profile_editor_config::ProfileFields;
use profile_editor_media::{MediaFile, MediaReference, MediaReferenceManager, ObjectUrlHost};
use std::sync::Arc;

pub struct ProfileEditor<H: ObjectUrlHost> {
    form: FormStateStore,
    media: MediaReferenceManager<H>,
    redraw: Option<Arc<Mutex<RedrawCallback>>>,
}

impl<H: ObjectUrlHost> ProfileEditor<H> {
    pub fn new(fields: ProfileFields, host: H) -> Self {
        Self {
            form: FormStateStore::new(fields),
            media: MediaReferenceManager::new(host),
            redraw: None,
        }
    }

    /// Register the redraw callback shared by text edits and media changes
    pub fn set_redraw_callback(&mut self, callback: RedrawCallback) {
        let shared = Arc::new(Mutex::new(callback));
        let for_form = Arc::clone(&shared);
        self.form
            .set_redraw_callback(Box::new(move || invoke(&for_form)));
        self.redraw = Some(shared);
    }

    pub fn form(&self) -> &FormStateStore {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormStateStore {
        &mut self.form
    }

    pub fn media(&self) -> &MediaReferenceManager<H> {
        &self.media
    }

    /// Main photo picker changed; an empty selection changes nothing
    pub fn handle_main_photo_change(&mut self, selection: &[MediaFile]) -> bool {
        let changed = self.media.set_main_photo(selection);
        if changed {
            self.request_redraw();
        }
        changed
    }

    /// Gallery picker changed; returns how many photos were appended
    pub fn handle_gallery_photos_change(&mut self, selection: &[MediaFile]) -> usize {
        let added = self.media.add_gallery_photos(selection);
        if added > 0 {
            self.request_redraw();
        }
        added
    }

    pub fn view(&self) -> ProfileView {
        ProfileView::derive(
            self.form.fields(),
            self.media.main_photo(),
            self.media.gallery(),
        )
    }

    /// Call after presenting a frame built from [`view`](Self::view).
    ///
    /// Returns references released by this commit.
    pub fn commit_frame(&mut self) -> Vec<MediaReference> {
        self.media.commit_frame()
    }

    /// Finish a frame once it has been presented.
    ///
    /// Releases what was superseded before the frame, then applies the
    /// actions the frame produced. A reference replaced by one of those
    /// actions stays live until the next presented frame. Returns the
    /// references released here.
    pub fn finish_frame<A>(
        &mut self,
        actions: Vec<A>,
        mut apply: impl FnMut(&mut Self, A),
    ) -> Vec<MediaReference> {
        let released = self.commit_frame();
        for action in actions {
            apply(self, action);
        }
        released
    }

    /// Release every media reference. Also runs on drop.
    pub fn teardown(&mut self) -> Vec<MediaReference> {
        self.media.release_all()
    }

    fn request_redraw(&mut self) {
        if let Some(redraw) = &self.redraw {
            invoke(redraw);
        }
    }
}

fn invoke(callback: &Mutex<RedrawCallback>) {
    let mut redraw = callback.lock();
    (*redraw)();
}
