//! Core `Config` struct definition.
//!
//! # Sub-modules
//!
//! - [`persistence`]: `load` / `save_to` and path helpers

mod persistence;

use crate::profile_types::ProfileFields;
use crate::types::LogLevel;
use serde::{Deserialize, Serialize};

/// Configuration for the profile editor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    // ========================================================================
    // Window & Display
    // ========================================================================
    /// Window title
    #[serde(default = "crate::defaults::window_title")]
    pub window_title: String,

    /// Initial window width in logical pixels
    #[serde(default = "crate::defaults::window_width")]
    pub window_width: u32,

    /// Initial window height in logical pixels
    #[serde(default = "crate::defaults::window_height")]
    pub window_height: u32,

    /// Use the dark egui theme
    #[serde(default = "crate::defaults::dark_mode")]
    pub dark_mode: bool,

    // ========================================================================
    // Media
    // ========================================================================
    /// File extensions offered by the photo pickers and accepted on drop
    #[serde(default = "crate::defaults::image_extensions")]
    pub image_extensions: Vec<String>,

    // ========================================================================
    // Profile
    // ========================================================================
    /// Field values the editor starts with
    #[serde(default)]
    pub profile: ProfileFields,

    // ========================================================================
    // Debug Logging
    // ========================================================================
    /// Debug log verbosity; overridden by `RUST_LOG` and `--log-level`
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_title: crate::defaults::window_title(),
            window_width: crate::defaults::window_width(),
            window_height: crate::defaults::window_height(),
            dark_mode: crate::defaults::dark_mode(),
            image_extensions: crate::defaults::image_extensions(),
            profile: ProfileFields::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Whether `file_name` carries one of the configured image extensions.
    ///
    /// Comparison is case-insensitive; names without an extension never match.
    pub fn accepts_image(&self, file_name: &str) -> bool {
        let Some((_, ext)) = file_name.rsplit_once('.') else {
            return false;
        };
        self.image_extensions
            .iter()
            .any(|accepted| accepted.eq_ignore_ascii_case(ext))
    }
}
