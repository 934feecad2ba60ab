// Library exports for testing and potential library use

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod debug;

pub mod app;
pub mod cli;
pub mod editor_window;
pub mod form_state;
pub mod media_input;
pub mod profile;
pub mod profile_ui;
pub mod texture_cache;
pub mod ui_constants;
pub mod view;

pub use profile_editor_config as config;
pub use profile_editor_media as media;

pub use form_state::FormStateStore;
pub use profile::ProfileEditor;
pub use view::{PhotoSlot, ProfileView};
