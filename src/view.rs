//! Pure view derivation.
//!
//! `ProfileView` is a plain value computed from the form fields and the live
//! media references. The egui layer only paints it, so everything a user can
//! see is checkable without a window.

use profile_editor_config::ProfileFields;
use profile_editor_media::MediaReference;

/// Text shown by every empty photo slot
pub const PLACEHOLDER_TEXT: &str = "Photo";

/// Alt text of the main photo
pub const MAIN_PHOTO_ALT: &str = "Profile";

/// Placeholders shown while the gallery is empty
pub const GALLERY_PLACEHOLDER_COUNT: usize = 3;

pub const EDIT_SECTION_HEADING: &str = "Edit Your Profile";
pub const ABOUT_SECTION_HEADING: &str = "About Me";
pub const CONTACT_SECTION_HEADING: &str = "Contact Details";
pub const PHOTOS_SECTION_HEADING: &str = "My Photos";

/// One photo position in the header or the gallery
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoSlot {
    /// A live reference rendered as an image
    Image {
        source: MediaReference,
        alt: String,
    },
    /// Static marker, no image
    Placeholder,
}

impl PhotoSlot {
    pub fn source(&self) -> Option<&MediaReference> {
        match self {
            PhotoSlot::Image { source, .. } => Some(source),
            PhotoSlot::Placeholder => None,
        }
    }

    pub fn alt(&self) -> Option<&str> {
        match self {
            PhotoSlot::Image { alt, .. } => Some(alt),
            PhotoSlot::Placeholder => None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, PhotoSlot::Placeholder)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub photo: PhotoSlot,
    pub heading: String,
}

/// Hyperlink whose target is the raw website field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkView {
    pub text: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactView {
    pub email_line: String,
    pub phone_line: String,
    pub website: LinkView,
}

/// Everything the editor window displays besides the input widgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub header: HeaderView,
    pub about: String,
    pub contact: ContactView,
    pub gallery: Vec<PhotoSlot>,
}

impl ProfileView {
    pub fn derive(
        fields: &ProfileFields,
        main_photo: Option<&MediaReference>,
        gallery: &[MediaReference],
    ) -> Self {
        let photo = match main_photo {
            Some(source) => PhotoSlot::Image {
                source: source.clone(),
                alt: MAIN_PHOTO_ALT.to_string(),
            },
            None => PhotoSlot::Placeholder,
        };

        let gallery = if gallery.is_empty() {
            vec![PhotoSlot::Placeholder; GALLERY_PLACEHOLDER_COUNT]
        } else {
            gallery
                .iter()
                .enumerate()
                .map(|(index, source)| PhotoSlot::Image {
                    source: source.clone(),
                    alt: format!("Gallery photo {}", index + 1),
                })
                .collect()
        };

        Self {
            header: HeaderView {
                photo,
                heading: fields.name.clone(),
            },
            about: fields.bio.clone(),
            contact: ContactView {
                email_line: format!("Email: {}", fields.email),
                phone_line: format!("Phone: {}", fields.phone),
                website: LinkView {
                    text: fields.website.clone(),
                    href: fields.website.clone(),
                },
            },
            gallery,
        }
    }

    /// Gallery slots that show an image, in display order
    pub fn gallery_images(&self) -> impl Iterator<Item = &PhotoSlot> {
        self.gallery.iter().filter(|slot| !slot.is_placeholder())
    }

    /// Number of gallery placeholders
    pub fn placeholder_count(&self) -> usize {
        self.gallery.iter().filter(|slot| slot.is_placeholder()).count()
    }

    /// Texts rendered in the header, photo placeholder first when present
    pub fn header_text(&self) -> Vec<&str> {
        let mut text = Vec::with_capacity(2);
        if self.header.photo.is_placeholder() {
            text.push(PLACEHOLDER_TEXT);
        }
        text.push(self.header.heading.as_str());
        text
    }

    /// Every reference the view displays
    pub fn displayed_references(&self) -> impl Iterator<Item = &MediaReference> {
        std::iter::once(&self.header.photo)
            .chain(self.gallery.iter())
            .filter_map(PhotoSlot::source)
    }
}
