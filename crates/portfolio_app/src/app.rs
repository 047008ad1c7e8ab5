// SPDX-License-Identifier: MIT OR Apache-2.0
//! Viewer window setup and event loop.

use crate::config::AppConfig;
use crate::cursor::CustomCursor;
use crate::theme::PortfolioTheme;
use crate::views::{ContentView, CurtainView, LoadingScreen};
use egui_wgpu::wgpu;
use portfolio_reveal::{ActiveView, ManualClock, RevealPhase, RevealSequencer, SessionStore};
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

/// Longest frame step fed to the sequencer and views (seconds)
const MAX_FRAME_DT: f32 = 0.1;

/// Frame step for `elapsed` wall time, capped so a stalled frame cannot
/// outrun the curtain animation
fn frame_dt(elapsed: Duration) -> f32 {
    elapsed.as_secs_f32().min(MAX_FRAME_DT)
}

/// Viewer errors
#[derive(Debug, Error)]
pub enum AppError {
    /// Window creation failed
    #[error("Failed to create window: {0}")]
    WindowCreation(String),

    /// Renderer initialization failed
    #[error("Failed to initialize renderer: {0}")]
    RendererInit(String),

    /// Event loop error
    #[error("Event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
}

/// Result type for viewer operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Graphics state for wgpu rendering
struct GraphicsState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    egui_renderer: egui_wgpu::Renderer,
}

impl GraphicsState {
    fn new(window: Arc<Window>) -> Result<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance
            .create_surface(window)
            .map_err(|e| AppError::RendererInit(e.to_string()))?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::LowPower,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .ok_or_else(|| AppError::RendererInit("no suitable GPU adapter".to_string()))?;

        tracing::info!("Using GPU: {}", adapter.get_info().name);

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("Portfolio Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                ..Default::default()
            },
            None,
        ))
        .map_err(|e| AppError::RendererInit(e.to_string()))?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(wgpu::TextureFormat::is_srgb)
            .or_else(|| surface_caps.formats.first().copied())
            .ok_or_else(|| AppError::RendererInit("surface reports no formats".to_string()))?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let egui_renderer = egui_wgpu::Renderer::new(&device, surface_format, None, 1, false);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            egui_renderer,
        })
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    #[allow(unsafe_code)] // Workaround for wgpu 23 lifetime issue with RenderPass
    fn render(
        &mut self,
        egui_ctx: &egui::Context,
        full_output: egui::FullOutput,
        window: &Window,
    ) -> std::result::Result<(), wgpu::SurfaceError> {
        let output = self.surface.get_current_texture()?;
        let view = output.texture.create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Portfolio Encoder"),
        });

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.config.width, self.config.height],
            pixels_per_point: window.scale_factor() as f32,
        };

        let paint_jobs = egui_ctx.tessellate(full_output.shapes, full_output.pixels_per_point);

        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui_renderer.update_texture(&self.device, &self.queue, *id, image_delta);
        }

        self.egui_renderer.update_buffers(
            &self.device,
            &self.queue,
            &mut encoder,
            &paint_jobs,
            &screen_descriptor,
        );

        // egui-wgpu wants a 'static render pass
        let encoder_ptr = Box::into_raw(Box::new(encoder));

        {
            // SAFETY: encoder_ptr comes from Box::into_raw above and is reclaimed only after render_pass drops
            let encoder_ref: &'static mut wgpu::CommandEncoder = unsafe { &mut *encoder_ptr };

            let mut render_pass = encoder_ref.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Portfolio Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.03,
                            g: 0.04,
                            b: 0.06,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.egui_renderer.render(&mut render_pass, &paint_jobs, &screen_descriptor);
        }

        // SAFETY: the render pass borrowing the encoder has been dropped
        let encoder = unsafe { Box::from_raw(encoder_ptr) };

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        for id in &full_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }

        Ok(())
    }
}

/// Running state of the viewer
struct PortfolioRunning {
    window: Arc<Window>,
    graphics: GraphicsState,
    egui_ctx: egui::Context,
    egui_state: egui_winit::State,
    inner: PortfolioInner,
}

/// Window-independent viewer state
struct PortfolioInner {
    sequencer: RevealSequencer<Box<dyn SessionStore>>,
    loading: LoadingScreen,
    curtain: CurtainView,
    content: ContentView,
    cursor: CustomCursor,
    theme: PortfolioTheme,
    last_frame: Option<Instant>,
}

impl PortfolioInner {
    fn new(config: &AppConfig) -> Self {
        let sequencer = RevealSequencer::initialize(
            config.reveal.clone(),
            config.session_store(),
            ManualClock::new(),
        );
        Self {
            sequencer,
            loading: LoadingScreen::new(),
            curtain: CurtainView::new(),
            content: ContentView::new(config.entrance_animations),
            cursor: CustomCursor::new(),
            theme: PortfolioTheme::default(),
            last_frame: None,
        }
    }

    /// Advance the sequencer and the active view by `dt` seconds
    fn advance(&mut self, dt: f32) {
        self.sequencer.update(Duration::from_secs_f32(dt.max(0.0)));

        match self.sequencer.render_selection().view {
            ActiveView::Loading => self.loading.update(dt),
            ActiveView::Curtain { open } => {
                if self.curtain.update(dt, open) {
                    self.sequencer.on_curtain_animation_complete();
                }
            }
            ActiveView::Content => self.content.update(dt),
        }

        for change in self.sequencer.take_changes() {
            match change.to {
                RevealPhase::CurtainClosed => self.curtain = CurtainView::new(),
                RevealPhase::ContentVisible => {
                    tracing::debug!("Content mounted {:?} after launch", change.at);
                }
                RevealPhase::Loading | RevealPhase::CurtainOpening => {}
            }
        }
    }

    fn update(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        let elapsed = self.last_frame.map_or(Duration::ZERO, |last| now - last);
        self.last_frame = Some(now);
        let dt = frame_dt(elapsed);

        self.advance(dt);

        match self.sequencer.render_selection().view {
            ActiveView::Loading => self.loading.show(ctx, &self.theme),
            ActiveView::Curtain { .. } => self.curtain.show(ctx, &self.theme),
            ActiveView::Content => self.content.show(ctx, &self.theme),
        }

        // Widgets ask for a pointing hand over clickable things
        let over_interactive = ctx.output(|o| o.cursor_icon == egui::CursorIcon::PointingHand);
        ctx.set_cursor_icon(egui::CursorIcon::None);
        let pointer = ctx.input(|i| i.pointer.latest_pos());
        self.cursor.update(dt, pointer, over_interactive);
        self.cursor.paint(ctx, &self.theme.colors);
    }
}

/// Main viewer application
pub struct PortfolioApp {
    config: AppConfig,
    running: Option<PortfolioRunning>,
    error: Option<AppError>,
}

impl PortfolioApp {
    /// Create a viewer with `config`
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            running: None,
            error: None,
        }
    }

    /// Open the window and run until it closes
    pub fn run(config: AppConfig) -> Result<()> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = PortfolioApp::new(config);
        event_loop.run_app(&mut app)?;

        match app.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn start(&self, event_loop: &ActiveEventLoop) -> Result<PortfolioRunning> {
        tracing::info!("Creating window...");

        let window_attrs = Window::default_attributes()
            .with_title("Arbaab Hussain | Portfolio")
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window_width,
                self.config.window_height,
            ))
            .with_min_inner_size(winit::dpi::LogicalSize::new(640, 480));

        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .map_err(|e| AppError::WindowCreation(e.to_string()))?,
        );

        let graphics = GraphicsState::new(window.clone())?;
        let egui_ctx = egui::Context::default();
        let inner = PortfolioInner::new(&self.config);
        inner.theme.apply(&egui_ctx);

        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            &window,
            Some(window.scale_factor() as f32),
            None,
            Some(2 * 1024),
        );

        tracing::info!("Window size: {:?}", window.inner_size());

        Ok(PortfolioRunning {
            window,
            graphics,
            egui_ctx,
            egui_state,
            inner,
        })
    }
}

impl ApplicationHandler for PortfolioApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.running.is_some() {
            return;
        }

        match self.start(event_loop) {
            Ok(running) => self.running = Some(running),
            Err(e) => {
                tracing::error!("{e}");
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        let Some(running) = &mut self.running else {
            return;
        };

        let response = running.egui_state.on_window_event(&running.window, &event);

        if response.consumed {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Close requested, exiting...");
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                tracing::debug!("Window resized to {:?}", new_size);
                running.graphics.resize(new_size);
                running.window.request_redraw();
            }
            WindowEvent::RedrawRequested => {
                let raw_input = running.egui_state.take_egui_input(&running.window);
                let full_output = running.egui_ctx.run(raw_input, |ctx| {
                    running.inner.update(ctx);
                });

                running.egui_state.handle_platform_output(&running.window, full_output.platform_output.clone());

                match running.graphics.render(&running.egui_ctx, full_output, &running.window) {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        let size = running.window.inner_size();
                        running.graphics.resize(size);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        tracing::error!("Out of GPU memory!");
                        event_loop.exit();
                    }
                    Err(wgpu::SurfaceError::Timeout) => {
                        tracing::warn!("Surface timeout");
                    }
                }

                running.window.request_redraw();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(running) = &self.running {
            running.window.request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(running) = &mut self.running {
            running.inner.sequencer.unmount();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SessionBackend;

    fn memory_config() -> AppConfig {
        AppConfig {
            session: SessionBackend::Memory,
            ..AppConfig::default()
        }
    }

    fn step(inner: &mut PortfolioInner, secs: f32) {
        inner.advance(secs);
    }

    #[test]
    fn test_slow_frames_do_not_outrun_curtain() {
        let mut inner = PortfolioInner::new(&memory_config());
        step(&mut inner, 3.0);
        step(&mut inner, 0.5);
        assert_eq!(inner.sequencer.phase(), RevealPhase::CurtainOpening);

        // One frame per wall-clock second, well past the 4 s fallback
        for _ in 0..5 {
            inner.advance(frame_dt(Duration::from_secs(1)));
        }
        assert_eq!(inner.sequencer.phase(), RevealPhase::CurtainOpening);

        for _ in 0..20 {
            inner.advance(frame_dt(Duration::from_secs(1)));
        }
        assert_eq!(inner.sequencer.phase(), RevealPhase::ContentVisible);
    }

    #[test]
    fn test_first_run_plays_full_sequence() {
        let mut inner = PortfolioInner::new(&memory_config());
        assert_eq!(inner.sequencer.phase(), RevealPhase::Loading);

        step(&mut inner, 3.0);
        assert_eq!(inner.sequencer.phase(), RevealPhase::CurtainClosed);

        step(&mut inner, 0.5);
        assert_eq!(inner.sequencer.phase(), RevealPhase::CurtainOpening);
        assert!(!inner.sequencer.content_visible());

        step(&mut inner, 2.0);
        assert_eq!(inner.sequencer.phase(), RevealPhase::ContentVisible);
        assert!(inner.sequencer.content_visible());
    }

    #[test]
    fn test_loading_screen_only_advances_while_shown() {
        let mut inner = PortfolioInner::new(&memory_config());
        step(&mut inner, 1.0);
        let shown = inner.loading.bar_progress();
        assert!(shown > 0.0);

        step(&mut inner, 2.0);
        assert_eq!(inner.sequencer.phase(), RevealPhase::CurtainClosed);
        assert_eq!(inner.loading.bar_progress(), shown);
    }

    #[test]
    fn test_stalled_curtain_falls_back_to_content() {
        let mut inner = PortfolioInner::new(&memory_config());
        step(&mut inner, 3.0);
        step(&mut inner, 0.5);
        assert_eq!(inner.sequencer.phase(), RevealPhase::CurtainOpening);

        // Time passes for the sequencer but the curtain view never advances
        inner.sequencer.update(Duration::from_secs(4));
        assert_eq!(inner.sequencer.phase(), RevealPhase::ContentVisible);
    }

    #[test]
    fn test_unmounted_sequencer_ignores_time() {
        let mut inner = PortfolioInner::new(&memory_config());
        inner.sequencer.unmount();
        step(&mut inner, 10.0);
        assert_eq!(inner.sequencer.phase(), RevealPhase::Loading);
    }
}
