//! Media reference management for profile-editor.
//!
//! This crate bridges user-selected files to display-able handles and owns
//! their release. It includes:
//!
//! - `MediaFile`: one user-selected file (name plus bytes)
//! - `MediaReference`: an opaque handle usable as an image source
//! - `ObjectUrlHost`: the host facility that creates and revokes handles
//! - `MemoryHost`: an in-process host backed by a shared registry
//! - `MediaReferenceManager`: tracks the main photo and gallery handles and
//!   releases every one of them exactly once

pub mod file;
pub mod host;
pub mod manager;
pub mod reference;

pub use file::MediaFile;
pub use host::{MemoryHost, ObjectUrlHost};
pub use manager::MediaReferenceManager;
pub use reference::MediaReference;
