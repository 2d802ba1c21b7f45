// bloom.rs - Post-processing bloom over the HDR scene target.
//
// Three fullscreen passes at half resolution: brightpass extract with a
// smoothing knee, separable gaussian blur (ping-pong), then an additive
// composite of scene + glow onto the surface.

use anyhow::Result;

use crate::config::BloomConfig;

const BLOOM_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba16Float;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
struct BloomParams {
    threshold: f32,
    smoothing: f32,
    intensity: f32,
    _pad: f32,
    direction: [f32; 2],
    texel: [f32; 2],
}

impl BloomParams {
    fn new(config: &BloomConfig, direction: [f32; 2], texel: [f32; 2]) -> Self {
        Self {
            threshold: config.luminance_threshold,
            smoothing: config.luminance_smoothing,
            intensity: config.intensity,
            _pad: 0.0,
            direction,
            texel,
        }
    }
}

/// Size-dependent state: half-res ping/pong targets and the bind groups
/// that reference them. Rebuilt on every resize.
struct BloomTargets {
    ping_view: wgpu::TextureView,
    brightpass_bind_group: wgpu::BindGroup,
    blur_h_bind_group: wgpu::BindGroup,
    blur_v_bind_group: wgpu::BindGroup,
    composite_bind_group: wgpu::BindGroup,
    pong_view: wgpu::TextureView,
}

pub struct BloomPipeline {
    brightpass_pipeline: wgpu::RenderPipeline,
    blur_pipeline: wgpu::RenderPipeline,
    composite_pipeline: wgpu::RenderPipeline,
    sampler: wgpu::Sampler,
    extract_layout: wgpu::BindGroupLayout,
    composite_layout: wgpu::BindGroupLayout,
    config: BloomConfig,
    targets: BloomTargets,
}

impl BloomPipeline {
    pub fn new(
        device: &wgpu::Device,
        hdr_view: &wgpu::TextureView,
        surface_format: wgpu::TextureFormat,
        size: (u32, u32),
        config: BloomConfig,
    ) -> Result<Self> {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Bloom Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("bloom.wgsl").into()),
        });

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let texture_entry = |binding: u32| wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Texture {
                sample_type: wgpu::TextureSampleType::Float { filterable: true },
                view_dimension: wgpu::TextureViewDimension::D2,
                multisampled: false,
            },
            count: None,
        };
        let sampler_entry = wgpu::BindGroupLayoutEntry {
            binding: 1,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
            count: None,
        };
        let params_entry = wgpu::BindGroupLayoutEntry {
            binding: 2,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        };

        let extract_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            entries: &[texture_entry(0), sampler_entry, params_entry],
            label: Some("bloom_extract_layout"),
        });
        let composite_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            entries: &[texture_entry(0), sampler_entry, params_entry, texture_entry(3)],
            label: Some("bloom_composite_layout"),
        });

        let make_pipeline = |label: &str,
                             entry_point: &str,
                             layout: &wgpu::BindGroupLayout,
                             format: wgpu::TextureFormat| {
            let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some(label),
                bind_group_layouts: &[layout],
                push_constant_ranges: &[],
            });
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_fullscreen"),
                    buffers: &[],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some(entry_point),
                    targets: &[Some(wgpu::ColorTargetState {
                        format,
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: None,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },
                depth_stencil: None,
                multisample: wgpu::MultisampleState {
                    count: 1,
                    mask: !0,
                    alpha_to_coverage_enabled: false,
                },
                multiview: None,
                cache: None,
            })
        };

        let brightpass_pipeline =
            make_pipeline("Bloom Brightpass", "fs_brightpass", &extract_layout, BLOOM_FORMAT);
        let blur_pipeline = make_pipeline("Bloom Blur", "fs_blur", &extract_layout, BLOOM_FORMAT);
        let composite_pipeline =
            make_pipeline("Bloom Composite", "fs_composite", &composite_layout, surface_format);

        let targets = Self::build_targets(
            device,
            hdr_view,
            &sampler,
            &extract_layout,
            &composite_layout,
            size,
            &config,
        );

        Ok(Self {
            brightpass_pipeline,
            blur_pipeline,
            composite_pipeline,
            sampler,
            extract_layout,
            composite_layout,
            config,
            targets,
        })
    }

    fn build_targets(
        device: &wgpu::Device,
        hdr_view: &wgpu::TextureView,
        sampler: &wgpu::Sampler,
        extract_layout: &wgpu::BindGroupLayout,
        composite_layout: &wgpu::BindGroupLayout,
        size: (u32, u32),
        config: &BloomConfig,
    ) -> BloomTargets {
        let half = ((size.0 / 2).max(1), (size.1 / 2).max(1));
        let texel = [1.0 / half.0 as f32, 1.0 / half.1 as f32];

        let make_texture = |label: &str| {
            let texture = device.create_texture(&wgpu::TextureDescriptor {
                label: Some(label),
                size: wgpu::Extent3d {
                    width: half.0,
                    height: half.1,
                    depth_or_array_layers: 1,
                },
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format: BLOOM_FORMAT,
                usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
                view_formats: &[],
            });
            texture.create_view(&wgpu::TextureViewDescriptor::default())
        };
        let ping_view = make_texture("Bloom Ping");
        let pong_view = make_texture("Bloom Pong");

        let make_params = |direction: [f32; 2]| {
            use wgpu::util::DeviceExt;
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Bloom Params"),
                contents: bytemuck::cast_slice(&[BloomParams::new(config, direction, texel)]),
                usage: wgpu::BufferUsages::UNIFORM,
            })
        };
        let extract_params = make_params([0.0, 0.0]);
        let blur_h_params = make_params([1.0, 0.0]);
        let blur_v_params = make_params([0.0, 1.0]);

        let make_extract_group = |label: &str, source: &wgpu::TextureView, params: &wgpu::Buffer| {
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                layout: extract_layout,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: wgpu::BindingResource::TextureView(source),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::Sampler(sampler),
                    },
                    wgpu::BindGroupEntry {
                        binding: 2,
                        resource: params.as_entire_binding(),
                    },
                ],
                label: Some(label),
            })
        };

        let brightpass_bind_group = make_extract_group("bloom_brightpass_group", hdr_view, &extract_params);
        let blur_h_bind_group = make_extract_group("bloom_blur_h_group", &ping_view, &blur_h_params);
        let blur_v_bind_group = make_extract_group("bloom_blur_v_group", &pong_view, &blur_v_params);

        let composite_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: composite_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(hdr_view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: extract_params.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 3,
                    resource: wgpu::BindingResource::TextureView(&ping_view),
                },
            ],
            label: Some("bloom_composite_group"),
        });

        BloomTargets {
            ping_view,
            brightpass_bind_group,
            blur_h_bind_group,
            blur_v_bind_group,
            composite_bind_group,
            pong_view,
        }
    }

    /// Rebuild the half-res chain after a surface resize.
    pub fn resize(&mut self, device: &wgpu::Device, hdr_view: &wgpu::TextureView, size: (u32, u32)) {
        self.targets = Self::build_targets(
            device,
            hdr_view,
            &self.sampler,
            &self.extract_layout,
            &self.composite_layout,
            size,
            &self.config,
        );
    }

    /// Record the full chain: brightpass -> blur h -> blur v -> composite.
    pub fn run(&self, encoder: &mut wgpu::CommandEncoder, surface_view: &wgpu::TextureView) {
        let fullscreen =
            |encoder: &mut wgpu::CommandEncoder,
             label: &str,
             pipeline: &wgpu::RenderPipeline,
             bind_group: &wgpu::BindGroup,
             target: &wgpu::TextureView| {
                let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some(label),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: target,
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
                pass.set_pipeline(pipeline);
                pass.set_bind_group(0, bind_group, &[]);
                pass.draw(0..3, 0..1);
            };

        fullscreen(
            encoder,
            "Brightpass",
            &self.brightpass_pipeline,
            &self.targets.brightpass_bind_group,
            &self.targets.ping_view,
        );
        fullscreen(
            encoder,
            "Blur Horizontal",
            &self.blur_pipeline,
            &self.targets.blur_h_bind_group,
            &self.targets.pong_view,
        );
        fullscreen(
            encoder,
            "Blur Vertical",
            &self.blur_pipeline,
            &self.targets.blur_v_bind_group,
            &self.targets.ping_view,
        );
        fullscreen(
            encoder,
            "Composite",
            &self.composite_pipeline,
            &self.targets.composite_bind_group,
            surface_view,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BLOOM;

    #[test]
    fn params_are_tightly_packed() {
        assert_eq!(std::mem::size_of::<BloomParams>(), 32);
    }

    #[test]
    fn params_carry_configuration() {
        let params = BloomParams::new(&BLOOM, [1.0, 0.0], [0.01, 0.01]);
        assert_eq!(params.threshold, BLOOM.luminance_threshold);
        assert_eq!(params.smoothing, BLOOM.luminance_smoothing);
        assert_eq!(params.intensity, BLOOM.intensity);
        assert_eq!(params.direction, [1.0, 0.0]);
    }
}
