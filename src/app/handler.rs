//! `ApplicationHandler` impl for `EditorApp`.
//!
//! Creates the editor window on resume, routes window events to it and tears
//! it down (releasing every media reference) before the event loop exits.

use crate::editor_window::{EditorWindow, EditorWindowAction};
use profile_editor_config::Config;
use profile_editor_media::MediaFile;
use std::sync::Arc;
use tokio::runtime::Runtime;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

pub struct EditorApp {
    config: Config,
    runtime: Arc<Runtime>,
    window: Option<EditorWindow>,
    /// Photos from the command line, handed over once the window exists
    startup_media: Option<(Vec<MediaFile>, Vec<MediaFile>)>,
}

impl EditorApp {
    pub fn new(
        config: Config,
        runtime: Arc<Runtime>,
        main_photo: Vec<MediaFile>,
        gallery: Vec<MediaFile>,
    ) -> Self {
        Self {
            config,
            runtime,
            window: None,
            startup_media: Some((main_photo, gallery)),
        }
    }

    fn close_window(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(mut window) = self.window.take() {
            window.teardown();
            log::info!("Closed editor window {:?}", window.window_id());
        }
        event_loop.exit();
    }
}

impl ApplicationHandler for EditorApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        match self
            .runtime
            .block_on(EditorWindow::new(event_loop, self.config.clone()))
        {
            Ok(mut window) => {
                log::info!("Opened editor window {:?}", window.window_id());
                if let Some((main_photo, gallery)) = self.startup_media.take() {
                    window.preload(&main_photo, &gallery);
                }
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                log::error!("Failed to create editor window: {:#}", e);
                eprintln!("profile-editor: error: {e:#}");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = self.window.as_mut() else {
            return;
        };
        if window.window_id() != window_id {
            return;
        }

        if window.handle_window_event(event) == EditorWindowAction::Close {
            self.close_window(event_loop);
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        // Covers exits that did not go through CloseRequested
        if let Some(mut window) = self.window.take() {
            window.teardown();
        }
    }
}
