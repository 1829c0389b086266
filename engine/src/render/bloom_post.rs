//! Bloom Post-Process Module
//!
//! Two-composer bloom chain over the scene passes:
//! - Threshold + separable Gaussian blur (horizontal then vertical) of the
//!   foreground-only bloom source texture
//! - Fullscreen composite that additively blends the blurred bloom over
//!   the base scene texture into the swapchain
//!
//! # Usage
//!
//! ```rust,ignore
//! // Initialize
//! let bloom = BloomPass::new(&device, surface_format);
//!
//! // Each frame - upload parameters for the current target size
//! bloom.update(&queue, width, height, &params);
//!
//! // After the bloom-source scene submission:
//! bloom.blur(&device, &mut encoder, &targets.bloom_source, &targets.blur_a, &targets.blur_b);
//!
//! // After the base scene submission:
//! bloom.composite(&device, &mut encoder, &targets.base_color, &targets.blur_b, &frame_view);
//! ```

use bytemuck::{Pod, Zeroable};

use crate::game::config::BloomParams;

/// GPU uniform layout for one blur direction (must match WGSL BlurParams).
/// Total size: 32 bytes.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct BlurUniforms {
    texel_size: [f32; 2],  // 8 bytes (offset 0)
    direction: [f32; 2],   // 8 bytes (offset 8) - total 16
    radius: f32,           // 4 bytes (offset 16)
    threshold: f32,        // 4 bytes (offset 20)
    apply_threshold: u32,  // 4 bytes (offset 24)
    _pad: f32,             // 4 bytes (offset 28) - total 32
}

static_assertions::assert_eq_size!(BlurUniforms, [u8; 32]);

/// GPU uniform layout for the composite pass (must match WGSL CompositeParams).
/// Total size: 16 bytes.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct CompositeUniforms {
    strength: f32,   // 4 bytes (offset 0)
    _pad: [f32; 3],  // 12 bytes (offset 4) - total 16
}

static_assertions::assert_eq_size!(CompositeUniforms, [u8; 16]);

/// Bloom post-process renderer.
pub struct BloomPass {
    blur_pipeline: wgpu::RenderPipeline,
    composite_pipeline: wgpu::RenderPipeline,
    blur_layout: wgpu::BindGroupLayout,
    composite_layout: wgpu::BindGroupLayout,
    blur_h_uniforms: wgpu::Buffer,
    blur_v_uniforms: wgpu::Buffer,
    composite_uniforms: wgpu::Buffer,
    sampler: wgpu::Sampler,
}

impl BloomPass {
    /// Create the blur and composite pipelines for the given color format.
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat) -> Self {
        let blur_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Bloom Blur Shader"),
            source: wgpu::ShaderSource::Wgsl(
                include_str!("../../../shaders/bloom_blur.wgsl").into(),
            ),
        });
        let composite_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Bloom Composite Shader"),
            source: wgpu::ShaderSource::Wgsl(
                include_str!("../../../shaders/bloom_composite.wgsl").into(),
            ),
        });

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Bloom Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let uniform_entry = |binding| wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        };
        let texture_entry = |binding| wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Texture {
                sample_type: wgpu::TextureSampleType::Float { filterable: true },
                view_dimension: wgpu::TextureViewDimension::D2,
                multisampled: false,
            },
            count: None,
        };
        let sampler_entry = |binding| wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
            count: None,
        };

        // Binding 0: BlurParams, 1: source texture, 2: sampler
        let blur_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Bloom Blur Bind Group Layout"),
            entries: &[uniform_entry(0), texture_entry(1), sampler_entry(2)],
        });

        // Binding 0: CompositeParams, 1: base texture, 2: bloom texture, 3: sampler
        let composite_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Bloom Composite Bind Group Layout"),
            entries: &[
                uniform_entry(0),
                texture_entry(1),
                texture_entry(2),
                sampler_entry(3),
            ],
        });

        let make_pipeline = |label: &str,
                             layout: &wgpu::BindGroupLayout,
                             shader: &wgpu::ShaderModule| {
            let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some(label),
                bind_group_layouts: &[layout],
                push_constant_ranges: &[],
            });
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: shader,
                    entry_point: Some("vs_main"),
                    buffers: &[], // Fullscreen triangle, no vertex buffer
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format,
                        blend: None,
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: None,
                    unclipped_depth: false,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    conservative: false,
                },
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            })
        };

        let blur_pipeline = make_pipeline("Bloom Blur Pipeline", &blur_layout, &blur_shader);
        let composite_pipeline = make_pipeline(
            "Bloom Composite Pipeline",
            &composite_layout,
            &composite_shader,
        );

        let make_uniforms = |label: &str, size: u64| {
            device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(label),
                size,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            })
        };
        let blur_size = std::mem::size_of::<BlurUniforms>() as u64;
        let blur_h_uniforms = make_uniforms("Bloom Blur H Uniform Buffer", blur_size);
        let blur_v_uniforms = make_uniforms("Bloom Blur V Uniform Buffer", blur_size);
        let composite_uniforms = make_uniforms(
            "Bloom Composite Uniform Buffer",
            std::mem::size_of::<CompositeUniforms>() as u64,
        );

        Self {
            blur_pipeline,
            composite_pipeline,
            blur_layout,
            composite_layout,
            blur_h_uniforms,
            blur_v_uniforms,
            composite_uniforms,
            sampler,
        }
    }

    /// Upload blur/composite parameters for the current target size.
    ///
    /// The threshold is applied only on the horizontal (first) pass, which
    /// reads the raw bloom source.
    pub fn update(&self, queue: &wgpu::Queue, width: u32, height: u32, params: &BloomParams) {
        let texel_size = [1.0 / width.max(1) as f32, 1.0 / height.max(1) as f32];
        let horizontal = BlurUniforms {
            texel_size,
            direction: [1.0, 0.0],
            radius: params.radius,
            threshold: params.threshold,
            apply_threshold: 1,
            _pad: 0.0,
        };
        let vertical = BlurUniforms {
            direction: [0.0, 1.0],
            apply_threshold: 0,
            ..horizontal
        };
        queue.write_buffer(&self.blur_h_uniforms, 0, bytemuck::cast_slice(&[horizontal]));
        queue.write_buffer(&self.blur_v_uniforms, 0, bytemuck::cast_slice(&[vertical]));

        let composite = CompositeUniforms {
            strength: params.strength,
            _pad: [0.0; 3],
        };
        queue.write_buffer(
            &self.composite_uniforms,
            0,
            bytemuck::cast_slice(&[composite]),
        );
    }

    /// Encode the two blur passes: `source -> tmp` (horizontal, with
    /// threshold extraction) then `tmp -> output` (vertical).
    pub fn blur(
        &self,
        device: &wgpu::Device,
        encoder: &mut wgpu::CommandEncoder,
        source: &wgpu::TextureView,
        tmp: &wgpu::TextureView,
        output: &wgpu::TextureView,
    ) {
        self.blur_pass(device, encoder, &self.blur_h_uniforms, source, tmp);
        self.blur_pass(device, encoder, &self.blur_v_uniforms, tmp, output);
    }

    fn blur_pass(
        &self,
        device: &wgpu::Device,
        encoder: &mut wgpu::CommandEncoder,
        uniforms: &wgpu::Buffer,
        input: &wgpu::TextureView,
        output: &wgpu::TextureView,
    ) {
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Bloom Blur Bind Group"),
            layout: &self.blur_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniforms.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(input),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&self.sampler),
                },
            ],
        });

        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Bloom Blur Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: output,
                resolve_target: None,
                depth_slice: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        pass.set_pipeline(&self.blur_pipeline);
        pass.set_bind_group(0, &bind_group, &[]);
        pass.draw(0..3, 0..1);
    }

    /// Encode the final composite: base scene plus blurred bloom, written
    /// to the swapchain view.
    pub fn composite(
        &self,
        device: &wgpu::Device,
        encoder: &mut wgpu::CommandEncoder,
        base: &wgpu::TextureView,
        bloom: &wgpu::TextureView,
        output: &wgpu::TextureView,
    ) {
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Bloom Composite Bind Group"),
            layout: &self.composite_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: self.composite_uniforms.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(base),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::TextureView(bloom),
                },
                wgpu::BindGroupEntry {
                    binding: 3,
                    resource: wgpu::BindingResource::Sampler(&self.sampler),
                },
            ],
        });

        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Bloom Composite Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: output,
                resolve_target: None,
                depth_slice: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        pass.set_pipeline(&self.composite_pipeline);
        pass.set_bind_group(0, &bind_group, &[]);
        pass.draw(0..3, 0..1);
    }
}
