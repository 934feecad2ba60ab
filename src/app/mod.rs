//! Application module for profile-editor
//!
//! - `App`: entry point that loads configuration and runs the event loop
//! - `EditorApp`: winit `ApplicationHandler` owning the editor window

use crate::cli::RuntimeOptions;
use crate::media_input;
use anyhow::{Context, Result};
use profile_editor_config::Config;
use std::sync::Arc;
use tokio::runtime::Runtime;
use winit::event_loop::{ControlFlow, EventLoop};

mod handler;

pub use handler::EditorApp;

/// Main application entry point
pub struct App {
    config: Config,
    runtime: Arc<Runtime>,
    runtime_options: RuntimeOptions,
}

impl App {
    /// Create a new application
    pub fn new(runtime: Arc<Runtime>, runtime_options: RuntimeOptions) -> Result<Self> {
        let config = match &runtime_options.config_path {
            Some(path) => Config::load_from(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => Config::load()?,
        };
        crate::debug::apply_config_log_level(config.log_level);

        Ok(Self {
            config,
            runtime,
            runtime_options,
        })
    }

    /// Run the application
    pub fn run(self) -> Result<()> {
        let event_loop = EventLoop::new()?;
        // Nothing animates; redraws are requested by state changes
        event_loop.set_control_flow(ControlFlow::Wait);

        let (main_photo, gallery) = media_input::startup_paths(
            self.runtime_options.main_photo.as_ref(),
            &self.runtime_options.gallery,
        );

        let mut app = EditorApp::new(self.config, self.runtime, main_photo, gallery);
        event_loop.run_app(&mut app)?;

        Ok(())
    }
}
