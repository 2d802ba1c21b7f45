// scene.rs - The composed frame graph: camera, lights, starfield, logo
// mesh, HDR target and bloom chain, built imperatively and updated by
// an explicit animation pass.

use anyhow::{Context, Result};
use wgpu::util::DeviceExt;

use crate::animation;
use crate::bloom::BloomPipeline;
use crate::camera::Camera;
use crate::config::{self, LightConfig};
use crate::logo::LogoMesh;
use crate::starfield::Starfield;

pub const HDR_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba16Float;
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Per-scene uniform shared by the logo and starfield shaders.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
struct SceneUniform {
    view_proj: [[f32; 4]; 4],
    point_position: [f32; 3],
    ambient: f32,
    camera_position: [f32; 3],
    point_intensity: f32,
}

impl SceneUniform {
    fn new(camera: &Camera, lights: &LightConfig) -> Self {
        Self {
            view_proj: camera.view_proj().to_cols_array_2d(),
            point_position: lights.point_position.to_array(),
            ambient: lights.ambient_intensity,
            camera_position: camera.position().to_array(),
            point_intensity: lights.point_intensity,
        }
    }
}

/// Deterministic given its configuration, except the decorative
/// star placement.
pub struct LogoScene {
    camera: Camera,
    scene_buffer: wgpu::Buffer,
    hdr_view: wgpu::TextureView,
    depth_view: wgpu::TextureView,
    starfield: Starfield,
    logo: LogoMesh,
    bloom: BloomPipeline,
}

impl LogoScene {
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        size: (u32, u32),
    ) -> Result<Self> {
        let camera = Camera::new(&config::CAMERA, size.0, size.1);

        let scene_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Scene Buffer"),
            contents: bytemuck::cast_slice(&[SceneUniform::new(&camera, &config::LIGHTS)]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let (hdr_view, depth_view) = Self::create_targets(device, size);

        let starfield = Starfield::new(
            device,
            HDR_FORMAT,
            DEPTH_FORMAT,
            &scene_buffer,
            &config::STARFIELD,
            size,
        )
        .context("building starfield")?;

        let logo = LogoMesh::new(
            device,
            HDR_FORMAT,
            DEPTH_FORMAT,
            &scene_buffer,
            config::LABEL,
            &config::LOGO,
        )
        .context("building logo mesh")?;

        let bloom = BloomPipeline::new(device, &hdr_view, surface_format, size, config::BLOOM)
            .context("building bloom chain")?;

        Ok(Self {
            camera,
            scene_buffer,
            hdr_view,
            depth_view,
            starfield,
            logo,
            bloom,
        })
    }

    fn create_targets(
        device: &wgpu::Device,
        size: (u32, u32),
    ) -> (wgpu::TextureView, wgpu::TextureView) {
        let extent = wgpu::Extent3d {
            width: size.0.max(1),
            height: size.1.max(1),
            depth_or_array_layers: 1,
        };

        let hdr = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("HDR Target"),
            size: extent,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: HDR_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });

        let depth = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Depth Target"),
            size: extent,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });

        (
            hdr.create_view(&wgpu::TextureViewDescriptor::default()),
            depth.create_view(&wgpu::TextureViewDescriptor::default()),
        )
    }

    /// The explicit animation pass: visits only the registered animated
    /// nodes. A missing time sample freezes the frame, never errors.
    pub fn update(&mut self, sample: Option<f32>) {
        animation::advance(&mut [&mut self.starfield, &mut self.logo], sample);
    }

    /// Record the frame: scene pass into HDR, then the bloom chain onto
    /// the surface.
    pub fn render(
        &self,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        surface_view: &wgpu::TextureView,
    ) {
        {
            let mut scene_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.hdr_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            self.starfield.draw(queue, &mut scene_pass);
            self.logo.draw(queue, &mut scene_pass);
        }

        self.bloom.run(encoder, surface_view);
    }

    /// Rebuild size-dependent targets and refresh the camera aspect.
    /// A zero dimension (minimized window) is ignored; the surface keeps
    /// its old size too, so the targets must not be rebuilt.
    pub fn resize(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, size: (u32, u32)) {
        if size.0 == 0 || size.1 == 0 {
            return;
        }
        self.camera.set_aspect(size.0, size.1);
        queue.write_buffer(
            &self.scene_buffer,
            0,
            bytemuck::cast_slice(&[SceneUniform::new(&self.camera, &config::LIGHTS)]),
        );

        let (hdr_view, depth_view) = Self::create_targets(device, size);
        self.hdr_view = hdr_view;
        self.depth_view = depth_view;

        self.starfield.set_viewport(size.0, size.1);
        self.bloom.resize(device, &self.hdr_view, size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_uniform_matches_wgsl_layout() {
        // mat4x4 (64) + vec3+f32 (16) + vec3+f32 (16)
        assert_eq!(std::mem::size_of::<SceneUniform>(), 96);
    }
}
