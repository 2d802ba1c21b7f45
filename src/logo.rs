// logo.rs - The label mesh and its animated material.

use anyhow::Result;
use wgpu::util::DeviceExt;

use crate::animation::Animated;
use crate::config::LogoConfig;
use crate::glyph;
use crate::material::AnimatedMaterial;

/// Extruded label geometry owning exactly one AnimatedMaterial.
pub struct LogoMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    material: AnimatedMaterial,
}

impl LogoMesh {
    pub fn new(
        device: &wgpu::Device,
        color_format: wgpu::TextureFormat,
        depth_format: wgpu::TextureFormat,
        scene_buffer: &wgpu::Buffer,
        label: &str,
        config: &LogoConfig,
    ) -> Result<Self> {
        let mesh = glyph::build_label_mesh(label, config);
        println!(
            "Logo mesh built: {} vertices, {} triangles",
            mesh.vertices.len(),
            mesh.indices.len() / 3
        );

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Logo Vertex Buffer"),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Logo Index Buffer"),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        let material = AnimatedMaterial::new(device, color_format, depth_format, scene_buffer, 0.0)?;

        Ok(Self {
            vertex_buffer,
            index_buffer,
            index_count: mesh.indices.len() as u32,
            material,
        })
    }

    /// Upload the pending time uniform and draw.
    pub fn draw<'a>(&'a self, queue: &wgpu::Queue, render_pass: &mut wgpu::RenderPass<'a>) {
        self.material.flush(queue);
        self.material.bind(render_pass);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        render_pass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}

impl Animated for LogoMesh {
    // The only per-frame work: push elapsed time into the material.
    fn tick(&mut self, time: f32) {
        self.material.set_time(time);
    }
}
