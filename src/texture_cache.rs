//! GPU textures for live media references.
//!
//! Textures are decoded lazily the first time a reference is displayed and
//! dropped as soon as the reference is released, so the cache never outlives
//! the handles it was built from.

use anyhow::{Context, Result};
use profile_editor_media::{MediaReference, MemoryHost};
use std::collections::HashMap;

/// Decoded state of one reference
pub enum CachedTexture {
    Loaded(egui::TextureHandle),
    /// Decoding failed; holds the file name for the fallback label
    Failed(String),
}

pub struct TextureCache {
    host: MemoryHost,
    textures: HashMap<MediaReference, CachedTexture>,
}

impl TextureCache {
    pub fn new(host: MemoryHost) -> Self {
        Self {
            host,
            textures: HashMap::new(),
        }
    }

    /// Texture for `reference`, decoding it on first use.
    ///
    /// Returns `None` when the host no longer knows the reference.
    pub fn get_or_load(
        &mut self,
        ctx: &egui::Context,
        reference: &MediaReference,
    ) -> Option<&CachedTexture> {
        if !self.textures.contains_key(reference) {
            let file = self.host.resolve(reference)?;
            let cached = match decode_image(file.bytes()) {
                Ok(image) => {
                    log::debug!(
                        "Decoded {:?} ({}x{}) for {}",
                        file.name(),
                        image.size[0],
                        image.size[1],
                        reference
                    );
                    CachedTexture::Loaded(ctx.load_texture(
                        reference.as_str(),
                        image,
                        egui::TextureOptions::LINEAR,
                    ))
                }
                Err(e) => {
                    log::warn!("Cannot display {:?}: {:#}", file.name(), e);
                    CachedTexture::Failed(file.name().to_string())
                }
            };
            self.textures.insert(reference.clone(), cached);
        }
        self.textures.get(reference)
    }

    /// Drop textures belonging to released references
    pub fn evict(&mut self, released: &[MediaReference]) {
        for reference in released {
            if self.textures.remove(reference).is_some() {
                log::debug!("Evicted texture for {}", reference);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    pub fn contains(&self, reference: &MediaReference) -> bool {
        self.textures.contains_key(reference)
    }
}

/// Decode any format the `image` crate understands into an egui image
pub fn decode_image(bytes: &[u8]) -> Result<egui::ColorImage> {
    let rgba = image::load_from_memory(bytes)
        .context("Unsupported or corrupt image data")?
        .to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, &rgba))
}
