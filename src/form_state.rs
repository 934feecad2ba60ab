//! Form state store.
//!
//! Single source of truth for the editable text fields. Every setter updates
//! the stored value and then synchronously invokes the redraw callback, so
//! the window re-renders on the next event-loop turn.

use profile_editor_config::{ProfileField, ProfileFields};
use std::fmt;

/// Callback run after every state change
pub type RedrawCallback = Box<dyn FnMut() + Send>;

/// Holds the current value of each profile field
pub struct FormStateStore {
    fields: ProfileFields,
    redraw: Option<RedrawCallback>,
}

impl FormStateStore {
    pub fn new(fields: ProfileFields) -> Self {
        Self {
            fields,
            redraw: None,
        }
    }

    /// Register the callback invoked after each setter
    pub fn set_redraw_callback(&mut self, callback: RedrawCallback) {
        self.redraw = Some(callback);
    }

    pub fn fields(&self) -> &ProfileFields {
        &self.fields
    }

    pub fn get(&self, field: ProfileField) -> &str {
        self.fields.get(field)
    }

    /// Store `value` for `field` and request a redraw. Any string is accepted.
    pub fn set(&mut self, field: ProfileField, value: impl Into<String>) {
        *self.fields.get_mut(field) = value.into();
        log::trace!("Field {:?} updated", field);
        self.request_redraw();
    }

    pub(crate) fn request_redraw(&mut self) {
        if let Some(redraw) = self.redraw.as_mut() {
            redraw();
        }
    }

    pub fn name(&self) -> &str {
        &self.fields.name
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.set(ProfileField::Name, value);
    }

    pub fn bio(&self) -> &str {
        &self.fields.bio
    }

    pub fn set_bio(&mut self, value: impl Into<String>) {
        self.set(ProfileField::Bio, value);
    }

    pub fn email(&self) -> &str {
        &self.fields.email
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.set(ProfileField::Email, value);
    }

    pub fn phone(&self) -> &str {
        &self.fields.phone
    }

    pub fn set_phone(&mut self, value: impl Into<String>) {
        self.set(ProfileField::Phone, value);
    }

    pub fn website(&self) -> &str {
        &self.fields.website
    }

    pub fn set_website(&mut self, value: impl Into<String>) {
        self.set(ProfileField::Website, value);
    }
}

impl Default for FormStateStore {
    fn default() -> Self {
        Self::new(ProfileFields::default())
    }
}

impl fmt::Debug for FormStateStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormStateStore")
            .field("fields", &self.fields)
            .field("has_redraw", &self.redraw.is_some())
            .finish()
    }
}
