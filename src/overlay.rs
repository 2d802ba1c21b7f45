// overlay.rs - UI overlay: footer navigation, loading and error
// fallbacks, optional FPS readout.
//
// Drawn on every frame regardless of scene phase so a faulted scene can
// never take the footer down with it.

use winit::window::Window;

use crate::config::FOOTER_LINKS;

/// What the shell shows in place of (or on top of) the scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellStatus {
    /// Scene construction has not run yet.
    Loading,
    /// Scene is live; the overlay draws only chrome.
    Ready,
    /// Scene construction faulted; the message replaces the scene.
    Failed(String),
}

pub struct Overlay {
    egui_renderer: egui_wgpu::Renderer,
    egui_state: egui_winit::State,
    egui_ctx: egui::Context,
    show_fps: bool,
}

impl Overlay {
    pub fn new(
        window: &Window,
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        show_fps: bool,
    ) -> Self {
        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(
            device,
            surface_format,
            egui_wgpu::RendererOptions::default(),
        );

        Self {
            egui_renderer,
            egui_state,
            egui_ctx,
            show_fps,
        }
    }

    pub fn handle_event(&mut self, window: &Window, event: &winit::event::WindowEvent) -> bool {
        self.egui_state.on_window_event(window, event).consumed
    }

    fn build_ui(ctx: &egui::Context, status: &ShellStatus, show_fps: bool, fps: f32) {
        match status {
            ShellStatus::Loading => {
                egui::Area::new(egui::Id::new("loading"))
                    .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
                    .show(ctx, |ui| {
                        ui.label(
                            egui::RichText::new("Loading...")
                                .size(16.0)
                                .color(egui::Color32::WHITE),
                        );
                    });
            }
            ShellStatus::Failed(message) => {
                egui::Area::new(egui::Id::new("fallback"))
                    .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
                    .show(ctx, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.label(
                                egui::RichText::new("The animated logo could not be rendered.")
                                    .size(16.0)
                                    .color(egui::Color32::WHITE),
                            );
                            ui.label(
                                egui::RichText::new(message)
                                    .size(11.0)
                                    .color(egui::Color32::GRAY),
                            );
                        });
                    });
            }
            ShellStatus::Ready => {}
        }

        egui::Area::new(egui::Id::new("footer"))
            .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -32.0))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = 24.0;
                    for link in FOOTER_LINKS {
                        ui.hyperlink_to(
                            egui::RichText::new(link.name)
                                .size(13.0)
                                .color(egui::Color32::from_gray(130)),
                            link.href,
                        );
                    }
                });
            });

        if show_fps {
            egui::Window::new("FPS")
                .title_bar(false)
                .resizable(false)
                .fixed_pos(egui::pos2(10.0, 10.0))
                .frame(egui::Frame::NONE)
                .show(ctx, |ui| {
                    ui.label(
                        egui::RichText::new(format!("{:.0}", fps))
                            .size(24.0)
                            .color(egui::Color32::from_rgb(74, 158, 255)),
                    );
                });
        }
    }

    /// Record the overlay on top of the already-rendered frame.
    #[allow(clippy::too_many_arguments)]
    pub fn draw(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        window: &Window,
        view: &wgpu::TextureView,
        size: (u32, u32),
        status: &ShellStatus,
        fps: f32,
    ) {
        let raw_input = self.egui_state.take_egui_input(window);
        let show_fps = self.show_fps;
        let full_output = self
            .egui_ctx
            .run(raw_input, |ctx| Self::build_ui(ctx, status, show_fps, fps));

        self.egui_state
            .handle_platform_output(window, full_output.platform_output);

        let tris = self
            .egui_ctx
            .tessellate(full_output.shapes, self.egui_ctx.pixels_per_point());
        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui_renderer
                .update_texture(device, queue, *id, image_delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [size.0, size.1],
            pixels_per_point: window.scale_factor() as f32,
        };

        self.egui_renderer
            .update_buffers(device, queue, encoder, &tris, &screen_descriptor);

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Overlay Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            // SAFETY: The render pass lifetime is actually tied to the encoder,
            // but egui-wgpu requires 'static. This is safe because we drop the
            // render pass before using the encoder again.
            let render_pass_static = unsafe {
                std::mem::transmute::<&mut wgpu::RenderPass<'_>, &mut wgpu::RenderPass<'static>>(
                    &mut render_pass,
                )
            };

            self.egui_renderer
                .render(render_pass_static, &tris, &screen_descriptor);
        }

        for id in &full_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }
    }
}
