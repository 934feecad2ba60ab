//! Profile page UI using egui
//!
//! Paints a [`ProfileView`] and the edit form. Text inputs write through the
//! form state store; everything that needs the outside world (file dialogs,
//! the browser, dropped files) comes back as a [`ProfileAction`] that the
//! window applies after the frame has been presented.

use crate::form_state::FormStateStore;
use crate::texture_cache::{CachedTexture, TextureCache};
use crate::ui_constants::{
    BIO_INPUT_ROWS, GALLERY_PHOTO_SIZE, GALLERY_SPACING, HEADER_SPACING, MAIN_PHOTO_SIZE,
    PAGE_MARGIN, SECTION_SPACING,
};
use crate::view::{
    ABOUT_SECTION_HEADING, CONTACT_SECTION_HEADING, EDIT_SECTION_HEADING, PHOTOS_SECTION_HEADING,
    PLACEHOLDER_TEXT, PhotoSlot, ProfileView,
};
use profile_editor_config::ProfileField;

/// Label of the main photo picker
pub const MAIN_PHOTO_LABEL: &str = "Main Profile Photo:";
/// Label of the gallery picker
pub const GALLERY_LABEL: &str = "Gallery Photos:";

/// Requests produced while painting a frame
#[derive(Debug, Clone)]
pub enum ProfileAction {
    /// Open the single-file picker for the main photo
    PickMainPhoto,
    /// Open the multi-file picker for the gallery
    PickGalleryPhotos,
    /// Open the website link in the system browser
    OpenWebsite(String),
    /// Files were dropped on the window
    DroppedFiles(Vec<egui::DroppedFile>),
}

/// Profile page state
#[derive(Default)]
pub struct ProfileUi {
    actions: Vec<ProfileAction>,
}

impl ProfileUi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one egui frame and collect the actions of all its passes.
    ///
    /// Only the first pass sees the frame's input, so actions from a pass
    /// that egui later discards are kept.
    pub fn run(
        &mut self,
        ctx: &egui::Context,
        raw_input: egui::RawInput,
        view: &ProfileView,
        form: &mut FormStateStore,
        textures: &mut TextureCache,
    ) -> (egui::FullOutput, Vec<ProfileAction>) {
        let mut actions = Vec::new();
        let output = ctx.run(raw_input, |ctx| {
            actions.extend(self.show(ctx, view, form, textures));
        });
        (output, actions)
    }

    /// Paint one pass and return the actions it produced
    pub fn show(
        &mut self,
        ctx: &egui::Context,
        view: &ProfileView,
        form: &mut FormStateStore,
        textures: &mut TextureCache,
    ) -> Vec<ProfileAction> {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if !dropped.is_empty() {
            self.actions.push(ProfileAction::DroppedFiles(dropped));
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::central_panel(&ctx.style()).inner_margin(PAGE_MARGIN))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        show_header(ui, view, form, textures);
                        ui.add_space(SECTION_SPACING);
                        self.show_edit_form(ui, form);
                        ui.add_space(SECTION_SPACING);
                        show_about(ui, view);
                        ui.add_space(SECTION_SPACING);
                        self.show_contact(ui, view);
                        ui.add_space(SECTION_SPACING);
                        show_gallery(ui, view, textures);
                    });
            });

        std::mem::take(&mut self.actions)
    }

    fn show_edit_form(&mut self, ui: &mut egui::Ui, form: &mut FormStateStore) {
        ui.heading(EDIT_SECTION_HEADING);
        ui.separator();

        ui.label(MAIN_PHOTO_LABEL);
        if ui.button("Choose File…").clicked() {
            self.actions.push(ProfileAction::PickMainPhoto);
        }

        for field in [
            ProfileField::Bio,
            ProfileField::Email,
            ProfileField::Phone,
            ProfileField::Website,
        ] {
            ui.label(field.label());
            field_input(ui, form, field);
        }

        ui.label(GALLERY_LABEL);
        if ui.button("Choose Files…").clicked() {
            self.actions.push(ProfileAction::PickGalleryPhotos);
        }
    }

    fn show_contact(&mut self, ui: &mut egui::Ui, view: &ProfileView) {
        ui.heading(CONTACT_SECTION_HEADING);
        ui.separator();
        ui.label(view.contact.email_line.as_str());
        ui.label(view.contact.phone_line.as_str());
        ui.horizontal(|ui| {
            ui.label("Website:");
            let link = &view.contact.website;
            if ui
                .link(link.text.as_str())
                .on_hover_text(link.href.as_str())
                .clicked()
            {
                self.actions.push(ProfileAction::OpenWebsite(link.href.clone()));
            }
        });
    }
}

fn show_header(
    ui: &mut egui::Ui,
    view: &ProfileView,
    form: &mut FormStateStore,
    textures: &mut TextureCache,
) {
    ui.horizontal(|ui| {
        photo_slot(ui, &view.header.photo, MAIN_PHOTO_SIZE, textures);
        ui.add_space(HEADER_SPACING);
        ui.vertical(|ui| {
            ui.label(
                egui::RichText::new(&view.header.heading)
                    .size(28.0)
                    .strong(),
            );
            field_input(ui, form, ProfileField::Name);
        });
    });
}

fn show_about(ui: &mut egui::Ui, view: &ProfileView) {
    ui.heading(ABOUT_SECTION_HEADING);
    ui.separator();
    ui.label(view.about.as_str());
}

fn show_gallery(ui: &mut egui::Ui, view: &ProfileView, textures: &mut TextureCache) {
    ui.heading(PHOTOS_SECTION_HEADING);
    ui.separator();
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = egui::vec2(GALLERY_SPACING, GALLERY_SPACING);
        for slot in &view.gallery {
            photo_slot(ui, slot, GALLERY_PHOTO_SIZE, textures);
        }
    });
}

/// Text input bound to one field; edits go through the store's setter
fn field_input(ui: &mut egui::Ui, form: &mut FormStateStore, field: ProfileField) {
    let mut value = form.get(field).to_owned();
    let edit = if field.is_multiline() {
        egui::TextEdit::multiline(&mut value).desired_rows(BIO_INPUT_ROWS)
    } else {
        egui::TextEdit::singleline(&mut value)
    };
    let response = ui.add(
        edit.hint_text(field.placeholder())
            .desired_width(f32::INFINITY),
    );
    if response.changed() {
        form.set(field, value);
    }
}

fn photo_slot(ui: &mut egui::Ui, slot: &PhotoSlot, size: f32, textures: &mut TextureCache) {
    let PhotoSlot::Image { source, alt } = slot else {
        placeholder(ui, size, PLACEHOLDER_TEXT);
        return;
    };

    match textures.get_or_load(ui.ctx(), source) {
        Some(CachedTexture::Loaded(texture)) => {
            let sized = egui::load::SizedTexture::from_handle(texture);
            ui.add(
                egui::Image::from_texture(sized)
                    .fit_to_exact_size(egui::vec2(size, size))
                    .corner_radius(4.0),
            )
            .on_hover_text(alt.as_str());
        }
        Some(CachedTexture::Failed(name)) => {
            placeholder(ui, size, name).on_hover_text(alt.as_str());
        }
        None => {
            placeholder(ui, size, alt);
        }
    }
}

fn placeholder(ui: &mut egui::Ui, size: f32, text: &str) -> egui::Response {
    egui::Frame::group(ui.style())
        .show(ui, |ui| {
            ui.set_min_size(egui::vec2(size, size));
            ui.set_max_size(egui::vec2(size, size));
            ui.centered_and_justified(|ui| {
                ui.label(egui::RichText::new(text).weak());
            });
        })
        .response
}
