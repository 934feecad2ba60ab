//! File selection: native pickers, file reads and drag-and-drop.
//!
//! A cancelled dialog yields an empty selection. Unreadable files are logged
//! and skipped, so callers only ever see the files that could be read.

use anyhow::{Context, Result};
use profile_editor_media::MediaFile;
use rfd::FileDialog;
use std::path::{Path, PathBuf};

fn image_dialog(title: &str, extensions: &[String]) -> FileDialog {
    let dialog = FileDialog::new().set_title(title);
    if extensions.is_empty() {
        dialog
    } else {
        dialog.add_filter("Images", extensions)
    }
}

/// Ask for a single main photo
pub fn pick_main_photo(extensions: &[String]) -> Vec<MediaFile> {
    let picked = image_dialog("Main Profile Photo", extensions).pick_file();
    read_media_files(picked.iter())
}

/// Ask for any number of gallery photos
pub fn pick_gallery_photos(extensions: &[String]) -> Vec<MediaFile> {
    let picked = image_dialog("Gallery Photos", extensions)
        .pick_files()
        .unwrap_or_default();
    read_media_files(picked.iter())
}

/// Read one file into memory
pub fn read_media_file(path: &Path) -> Result<MediaFile> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(MediaFile::new(name, bytes))
}

/// Read every path in order, skipping the ones that fail
pub fn read_media_files<P: AsRef<Path>>(paths: impl IntoIterator<Item = P>) -> Vec<MediaFile> {
    paths
        .into_iter()
        .filter_map(|path| match read_media_file(path.as_ref()) {
            Ok(file) => Some(file),
            Err(e) => {
                log::warn!("Skipping file: {:#}", e);
                None
            }
        })
        .collect()
}

/// Convert files dropped on the window, keeping only accepted images.
///
/// `accepts` decides by file name. Drops that carry bytes (web, some
/// platforms) are used directly; otherwise the path is read.
pub fn dropped_to_media(
    dropped: &[egui::DroppedFile],
    accepts: impl Fn(&str) -> bool,
) -> Vec<MediaFile> {
    let mut files = Vec::with_capacity(dropped.len());
    for drop in dropped {
        let name = match (&drop.path, drop.name.is_empty()) {
            (Some(path), true) => path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            _ => drop.name.clone(),
        };
        if !accepts(&name) {
            log::info!("Ignoring dropped non-image {:?}", name);
            continue;
        }

        if let Some(bytes) = &drop.bytes {
            files.push(MediaFile::new(name, bytes.clone()));
        } else if let Some(path) = &drop.path {
            files.extend(read_media_files([path]));
        }
    }
    files
}

/// Paths passed on the command line, main photo first
pub fn startup_paths(
    main: Option<&PathBuf>,
    gallery: &[PathBuf],
) -> (Vec<MediaFile>, Vec<MediaFile>) {
    (read_media_files(main), read_media_files(gallery))
}
