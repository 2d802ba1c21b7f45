use std::sync::Arc;

use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use generative_logo::cli::Cli;
use generative_logo::clock::Clock;
use generative_logo::gpu::GpuContext;
use generative_logo::overlay::{Overlay, ShellStatus};
use generative_logo::scene::LogoScene;

// === Constants ===

const FPS_UPDATE_INTERVAL: f32 = 1.0;
const INITIAL_WINDOW_WIDTH: u32 = 1280;
const INITIAL_WINDOW_HEIGHT: u32 = 720;

// === Type Aliases ===

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

// === Scene phase ===

/// The scene either renders or a fallback does - never a partial state.
enum ScenePhase {
    /// First frame shows the loading placeholder; construction follows.
    Loading,
    Ready(LogoScene),
    /// Construction faulted; the fallback message replaces the scene.
    Failed(String),
}

impl ScenePhase {
    fn status(&self) -> ShellStatus {
        match self {
            ScenePhase::Loading => ShellStatus::Loading,
            ScenePhase::Ready(_) => ShellStatus::Ready,
            ScenePhase::Failed(message) => ShellStatus::Failed(message.clone()),
        }
    }
}

// === Application ===

struct App {
    cli: Cli,
    window: Option<Arc<Window>>,
    gpu: Option<GpuContext>,
    overlay: Option<Overlay>,
    phase: ScenePhase,
    clock: Clock,
    frame_count: u32,
    fps: f32,
    fps_update_timer: f32,
}

impl App {
    fn new(cli: Cli) -> Self {
        Self {
            cli,
            window: None,
            gpu: None,
            overlay: None,
            phase: ScenePhase::Loading,
            clock: Clock::new(),
            frame_count: 0,
            fps: 0.0,
            fps_update_timer: 0.0,
        }
    }

    fn update_fps(&mut self, delta: f32) {
        self.frame_count += 1;
        self.fps_update_timer += delta;

        if self.fps_update_timer >= FPS_UPDATE_INTERVAL {
            self.fps = self.frame_count as f32 / self.fps_update_timer;
            self.frame_count = 0;
            self.fps_update_timer = 0.0;
        }
    }

    /// Build the scene once the loading frame has been presented.
    /// A construction fault becomes the Failed phase, never a crash -
    /// the footer keeps rendering either way.
    fn construct_scene(&mut self) {
        let Some(gpu) = &self.gpu else { return };

        let size = (gpu.size.width, gpu.size.height);
        match LogoScene::new(&gpu.device, gpu.surface_format(), size) {
            Ok(scene) => {
                println!("Scene ready");
                self.phase = ScenePhase::Ready(scene);
                self.clock = Clock::new();
            }
            Err(e) => {
                eprintln!("Scene construction failed: {e:#}");
                self.phase = ScenePhase::Failed(format!("{e:#}"));
            }
        }
    }

    fn render_frame(&mut self, event_loop: &ActiveEventLoop) {
        let delta = self.clock.tick();
        self.update_fps(delta);

        if let ScenePhase::Ready(scene) = &mut self.phase {
            scene.update(self.clock.sample());
        }

        let (Some(gpu), Some(window), Some(overlay)) =
            (&mut self.gpu, &self.window, &mut self.overlay)
        else {
            return;
        };

        let output = match gpu.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                gpu.reconfigure();
                return;
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                eprintln!("Surface out of memory");
                event_loop.exit();
                return;
            }
            Err(e) => {
                eprintln!("Render error: {}", e);
                return;
            }
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Encoder"),
            });

        match &self.phase {
            ScenePhase::Ready(scene) => scene.render(&gpu.queue, &mut encoder, &view),
            ScenePhase::Loading | ScenePhase::Failed(_) => {
                // No scene: just clear, the overlay carries the fallback
                encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Fallback Clear"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                            store: wgpu::StoreOp::Store,
                        },
                        depth_slice: None,
                    })],
                    depth_stencil_attachment: None,
                    occlusion_query_set: None,
                    timestamp_writes: None,
                });
            }
        }

        overlay.draw(
            &gpu.device,
            &gpu.queue,
            &mut encoder,
            window,
            &view,
            (gpu.size.width, gpu.size.height),
            &self.phase.status(),
            self.fps,
        );

        gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        // The loading placeholder has been shown; bring the scene up
        if matches!(self.phase, ScenePhase::Loading) {
            self.construct_scene();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("MN612")
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        INITIAL_WINDOW_WIDTH,
                        INITIAL_WINDOW_HEIGHT,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    eprintln!("Failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            let gpu = match pollster::block_on(GpuContext::new(window.clone())) {
                Ok(gpu) => gpu,
                Err(e) => {
                    eprintln!("Failed to initialize GPU: {e:#}");
                    event_loop.exit();
                    return;
                }
            };

            let overlay = Overlay::new(&window, &gpu.device, gpu.surface_format(), !self.cli.no_ui);

            self.window = Some(window);
            self.gpu = Some(gpu);
            self.overlay = Some(overlay);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui handle the event first
        if let (Some(overlay), Some(window)) = (&mut self.overlay, &self.window) {
            if overlay.handle_event(window, &event) {
                return; // egui consumed the event
            }
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(new_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(new_size);
                    if let ScenePhase::Ready(scene) = &mut self.phase {
                        scene.resize(&gpu.device, &gpu.queue, (new_size.width, new_size.height));
                    }
                }
            }
            WindowEvent::RedrawRequested => self.render_frame(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli);

    println!("MN612 - Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
