// material.rs - The animated shader material.
//
// One mutable input: elapsed time. set_time writes a CPU-side pending
// uniform (last write wins); flush uploads it once per draw. Everything
// else - shader pair, double-sided rasterizer state - is fixed at
// construction.

use anyhow::{bail, Result};
use wgpu::util::DeviceExt;

use crate::glyph::Vertex;

/// GPU time uniform, write-only from the outside.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TimeUniform {
    time: f32,
    _pad: [f32; 3],
}

impl TimeUniform {
    pub fn new(time: f32) -> Self {
        Self { time, _pad: [0.0; 3] }
    }

    /// Overwrite the pending time. Last write before a flush wins;
    /// writing the same value twice is equivalent to writing it once.
    pub fn set(&mut self, time: f32) {
        self.time = time;
    }

    /// Pending value, observable for tests only - the application never
    /// reads the channel back.
    pub fn value(&self) -> f32 {
        self.time
    }
}

/// Shader material with a single animated uniform.
pub struct AnimatedMaterial {
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    time_buffer: wgpu::Buffer,
    time: TimeUniform,
}

impl AnimatedMaterial {
    /// Build the logo pipeline. Shader compilation or pipeline
    /// validation failure is returned as an error - fatal for this
    /// material, recovered by the caller's fallback state.
    pub fn new(
        device: &wgpu::Device,
        color_format: wgpu::TextureFormat,
        depth_format: wgpu::TextureFormat,
        scene_buffer: &wgpu::Buffer,
        initial_time: f32,
    ) -> Result<Self> {
        device.push_error_scope(wgpu::ErrorFilter::Validation);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Logo Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("logo.wgsl").into()),
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            entries: &[
                // Binding 0: Scene (view-proj + lights)
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                // Binding 1: Time
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
            ],
            label: Some("logo_bind_group_layout"),
        });

        let time = TimeUniform::new(initial_time);
        let time_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Logo Time Buffer"),
            contents: bytemuck::cast_slice(&[time]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: scene_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: time_buffer.as_entire_binding(),
                },
            ],
            label: Some("logo_bind_group"),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Logo Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Logo Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x2],
                }],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: color_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // Double-sided faces, fixed for the material's lifetime
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: depth_format,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        });

        if let Some(error) = pollster::block_on(device.pop_error_scope()) {
            bail!("logo material failed to build: {error}");
        }

        Ok(Self {
            pipeline,
            bind_group,
            time_buffer,
            time,
        })
    }

    /// Total and infallible; affects only the pending uniform consumed
    /// by the next draw.
    pub fn set_time(&mut self, time: f32) {
        self.time.set(time);
    }

    /// Upload the pending uniform; called once per frame before drawing.
    pub fn flush(&self, queue: &wgpu::Queue) {
        queue.write_buffer(&self.time_buffer, 0, bytemuck::cast_slice(&[self.time]));
    }

    /// Bind pipeline and uniforms onto a scene render pass.
    pub fn bind<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>) {
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.bind_group, &[]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_uniform_is_sixteen_bytes() {
        // WGSL uniform blocks round up to 16-byte alignment
        assert_eq!(std::mem::size_of::<TimeUniform>(), 16);
    }

    #[test]
    fn set_is_last_write_wins() {
        let mut uniform = TimeUniform::new(0.0);

        uniform.set(1.0);
        uniform.set(2.5);

        assert_eq!(uniform.value(), 2.5, "no accumulation, only the last write");
    }

    #[test]
    fn set_is_idempotent_within_a_frame() {
        let mut once = TimeUniform::new(0.0);
        let mut twice = TimeUniform::new(0.0);

        once.set(3.25);
        twice.set(3.25);
        twice.set(3.25);

        assert_eq!(once.value(), twice.value());
    }
}
