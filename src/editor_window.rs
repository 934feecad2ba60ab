//! The profile editor window.
//!
//! Owns the winit window, its wgpu surface and egui renderer, and the
//! `ProfileEditor` component. Rendering follows a fixed order so a media
//! reference is never released while it can still be on screen:
//!
//! 1. derive the view and paint it
//! 2. present the frame
//! 3. commit: release superseded references and evict their textures
//! 4. apply actions from the frame (file pickers, links, drops)

use crate::media_input;
use crate::profile::ProfileEditor;
use crate::profile_ui::{ProfileAction, ProfileUi};
use crate::texture_cache::TextureCache;
use anyhow::{Context, Result};
use profile_editor_config::Config;
use profile_editor_media::{MediaFile, MemoryHost};
use std::sync::Arc;
use wgpu::SurfaceError;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowId};

/// Result of processing an editor window event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorWindowAction {
    /// No action needed
    None,
    /// Close the editor window
    Close,
}

/// Manages the editor window with its own egui context and wgpu renderer
pub struct EditorWindow {
    /// The winit window
    window: Arc<Window>,
    /// Window ID for event routing
    window_id: WindowId,
    /// wgpu surface
    surface: wgpu::Surface<'static>,
    /// wgpu device
    device: wgpu::Device,
    /// wgpu queue
    queue: wgpu::Queue,
    /// Surface configuration
    surface_config: wgpu::SurfaceConfiguration,
    /// egui context
    egui_ctx: egui::Context,
    /// egui-winit state
    egui_state: egui_winit::State,
    /// egui-wgpu renderer
    egui_renderer: egui_wgpu::Renderer,
    /// Profile component (form state + media references)
    editor: ProfileEditor<MemoryHost>,
    /// Profile page painter
    profile_ui: ProfileUi,
    /// Textures for displayed references
    textures: TextureCache,
    /// Picker filters and drop acceptance
    config: Config,
}

impl EditorWindow {
    /// Create the editor window
    pub async fn new(event_loop: &ActiveEventLoop, config: Config) -> Result<Self> {
        let window_attrs = Window::default_attributes()
            .with_title(config.window_title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                config.window_width,
                config.window_height,
            ))
            .with_min_inner_size(winit::dpi::LogicalSize::new(420, 480))
            .with_resizable(true);

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        let window_id = window.id();
        let size = window.inner_size();

        // Platform-specific backend selection for better VM compatibility
        #[cfg(target_os = "windows")]
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::DX12,
            ..Default::default()
        });
        #[cfg(target_os = "macos")]
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        #[cfg(not(any(target_os = "windows", target_os = "macos")))]
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::VULKAN | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone())?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("Failed to find suitable GPU adapter")?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor::default())
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .or_else(|| surface_caps.formats.first().copied())
            .context("Surface reports no supported formats")?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &surface_config);

        let scale_factor = window.scale_factor() as f32;
        let egui_ctx = egui::Context::default();
        egui_ctx.set_visuals(if config.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(scale_factor),
            None,
            None,
        );

        let egui_renderer = egui_wgpu::Renderer::new(
            &device,
            surface_format,
            egui_wgpu::RendererOptions {
                msaa_samples: 1,
                depth_stencil_format: None,
                dithering: false,
                predictable_texture_filtering: false,
            },
        );

        let host = MemoryHost::new();
        let mut editor = ProfileEditor::new(config.profile.clone(), host.clone());
        let redraw_window = Arc::clone(&window);
        editor.set_redraw_callback(Box::new(move || redraw_window.request_redraw()));

        log::info!("Editor window created ({}x{})", size.width, size.height);

        Ok(Self {
            window,
            window_id,
            surface,
            device,
            queue,
            surface_config,
            egui_ctx,
            egui_state,
            egui_renderer,
            editor,
            profile_ui: ProfileUi::new(),
            textures: TextureCache::new(host),
            config,
        })
    }

    /// Get the window ID
    pub fn window_id(&self) -> WindowId {
        self.window_id
    }

    /// Load photos passed on the command line as if they had been picked
    pub fn preload(&mut self, main_photo: &[MediaFile], gallery: &[MediaFile]) {
        self.editor.handle_main_photo_change(main_photo);
        self.editor.handle_gallery_photos_change(gallery);
    }

    /// Handle a window event
    pub fn handle_window_event(&mut self, event: WindowEvent) -> EditorWindowAction {
        let event_response = self.egui_state.on_window_event(&self.window, &event);

        match event {
            WindowEvent::CloseRequested => {
                return EditorWindowAction::Close;
            }

            WindowEvent::Resized(new_size) => {
                if new_size.width > 0 && new_size.height > 0 {
                    self.surface_config.width = new_size.width;
                    self.surface_config.height = new_size.height;
                    self.surface.configure(&self.device, &self.surface_config);
                    self.window.request_redraw();
                }
            }

            WindowEvent::RedrawRequested => {
                self.render();
                return EditorWindowAction::None;
            }

            _ => {}
        }

        if event_response.repaint {
            self.window.request_redraw();
        }

        EditorWindowAction::None
    }

    /// Render one frame, then commit and apply its actions
    fn render(&mut self) {
        let output = match self.surface.get_current_texture() {
            Ok(output) => output,
            Err(SurfaceError::Lost | SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.surface_config);
                self.window.request_redraw();
                return;
            }
            Err(SurfaceError::Timeout) => {
                log::warn!("Editor window surface timeout");
                return;
            }
            Err(e) => {
                log::error!("Editor window surface error: {:?}", e);
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let profile_view = self.editor.view();
        let raw_input = self.egui_state.take_egui_input(&self.window);
        let (egui_output, actions) = self.profile_ui.run(
            &self.egui_ctx,
            raw_input,
            &profile_view,
            self.editor.form_mut(),
            &mut self.textures,
        );

        self.egui_state
            .handle_platform_output(&self.window, egui_output.platform_output.clone());

        let paint_jobs = self
            .egui_ctx
            .tessellate(egui_output.shapes, self.egui_ctx.pixels_per_point());

        for (id, delta) in &egui_output.textures_delta.set {
            self.egui_renderer
                .update_texture(&self.device, &self.queue, *id, delta);
        }

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Editor Window Encoder"),
            });

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.surface_config.width, self.surface_config.height],
            pixels_per_point: self.window.scale_factor() as f32,
        };

        self.egui_renderer.update_buffers(
            &self.device,
            &self.queue,
            &mut encoder,
            &paint_jobs,
            &screen_descriptor,
        );

        {
            let render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Editor Window Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.094,
                            g: 0.094,
                            b: 0.094,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            // Convert to 'static lifetime as required by egui_renderer.render()
            let mut render_pass = render_pass.forget_lifetime();

            self.egui_renderer
                .render(&mut render_pass, &paint_jobs, &screen_descriptor);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        for id in &egui_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }

        // The presented frame showed the current references, so anything
        // superseded before it can go now. Replacements from this frame's
        // actions wait for the next one.
        let config = &self.config;
        let released = self
            .editor
            .finish_frame(actions, |editor, action| apply_action(editor, config, action));
        self.textures.evict(&released);
    }

    /// Release every media reference before the window goes away
    pub fn teardown(&mut self) {
        let released = self.editor.teardown();
        self.textures.evict(&released);
        log::info!(
            "Editor window torn down, {} media reference(s) released this session",
            self.editor.media().released_count()
        );
    }

    /// Request a redraw
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

fn apply_action(editor: &mut ProfileEditor<MemoryHost>, config: &Config, action: ProfileAction) {
    match action {
        ProfileAction::PickMainPhoto => {
            let selection = media_input::pick_main_photo(&config.image_extensions);
            editor.handle_main_photo_change(&selection);
        }
        ProfileAction::PickGalleryPhotos => {
            let selection = media_input::pick_gallery_photos(&config.image_extensions);
            editor.handle_gallery_photos_change(&selection);
        }
        ProfileAction::OpenWebsite(href) => {
            log::info!("Opening website link: {}", href);
            if let Err(e) = open::that(&href) {
                log::error!("Failed to open {}: {}", href, e);
            }
        }
        ProfileAction::DroppedFiles(dropped) => {
            let selection =
                media_input::dropped_to_media(&dropped, |name| config.accepts_image(name));
            editor.handle_gallery_photos_change(&selection);
        }
    }
}
