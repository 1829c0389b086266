//! Scene Pass Module
//!
//! Renders the editor scene geometry: a depth-tested triangle pipeline for
//! solids (buildings, cursor, ground) and a line pipeline sharing the same
//! shader for the grid helper.
//!
//! The pass is submitted twice per frame with a shared `bloom_pass` uniform
//! flag toggled between the submissions: once with only the glowing
//! foreground on a black clear (bloom extraction input), once with the
//! full scene on the paper clear (base layer). Two uniform buffers hold
//! the two flag values so a single command submission covers both.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};
use wgpu::util::DeviceExt;

use super::mesh::{Mesh, Vertex, vertex_buffer_layout};
use super::targets::DEPTH_FORMAT;

/// GPU uniform layout (must match WGSL struct SceneParams).
/// Total size: 96 bytes.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct SceneUniforms {
    pub view_proj: [[f32; 4]; 4], // 64 bytes (offset 0)
    pub light_dir: [f32; 3],      // 12 bytes (offset 64)
    pub ambient: f32,             // 4 bytes (offset 76) - total 80
    pub bloom_pass: u32,          // 4 bytes (offset 80)
    pub _pad: [f32; 3],           // 12 bytes (offset 84) - total 96
}

static_assertions::assert_eq_size!(SceneUniforms, [u8; 96]);

/// Which of the two per-frame submissions is being encoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScenePassKind {
    /// Foreground on black, unlit colors - feeds the bloom chain.
    Bloom,
    /// Full scene, lit - the base layer.
    Base,
}

/// Scene renderer: pipelines, uniforms, and per-submission bind groups.
pub struct ScenePass {
    triangle_pipeline: wgpu::RenderPipeline,
    line_pipeline: wgpu::RenderPipeline,
    bloom_uniforms: wgpu::Buffer,
    base_uniforms: wgpu::Buffer,
    bloom_bind_group: wgpu::BindGroup,
    base_bind_group: wgpu::BindGroup,
}

impl ScenePass {
    /// Create the scene pipelines for the given color target format.
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Scene Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../../../shaders/scene.wgsl").into()),
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Scene Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Scene Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let make_pipeline = |label: &str, topology: wgpu::PrimitiveTopology| {
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[vertex_buffer_layout()],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format,
                        blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: None,
                    unclipped_depth: false,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    conservative: false,
                },
                depth_stencil: Some(wgpu::DepthStencilState {
                    format: DEPTH_FORMAT,
                    depth_write_enabled: true,
                    depth_compare: wgpu::CompareFunction::Less,
                    stencil: wgpu::StencilState::default(),
                    bias: wgpu::DepthBiasState::default(),
                }),
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            })
        };

        let triangle_pipeline = make_pipeline(
            "Scene Triangle Pipeline",
            wgpu::PrimitiveTopology::TriangleList,
        );
        let line_pipeline = make_pipeline("Scene Line Pipeline", wgpu::PrimitiveTopology::LineList);

        let make_uniforms = |label: &str| {
            device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(label),
                size: std::mem::size_of::<SceneUniforms>() as u64,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            })
        };
        let bloom_uniforms = make_uniforms("Scene Bloom Uniform Buffer");
        let base_uniforms = make_uniforms("Scene Base Uniform Buffer");

        let make_bind_group = |label: &str, buffer: &wgpu::Buffer| {
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some(label),
                layout: &bind_group_layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: buffer.as_entire_binding(),
                }],
            })
        };
        let bloom_bind_group = make_bind_group("Scene Bloom Bind Group", &bloom_uniforms);
        let base_bind_group = make_bind_group("Scene Base Bind Group", &base_uniforms);

        Self {
            triangle_pipeline,
            line_pipeline,
            bloom_uniforms,
            base_uniforms,
            bloom_bind_group,
            base_bind_group,
        }
    }

    /// Upload the per-frame uniforms for both submissions.
    ///
    /// The two buffers differ only in the `bloom_pass` flag.
    pub fn update(&self, queue: &wgpu::Queue, view_proj: Mat4, light_dir: Vec3, ambient: f32) {
        let base = SceneUniforms {
            view_proj: view_proj.to_cols_array_2d(),
            light_dir: light_dir.normalize().to_array(),
            ambient,
            bloom_pass: 0,
            _pad: [0.0; 3],
        };
        let bloom = SceneUniforms {
            bloom_pass: 1,
            ..base
        };
        queue.write_buffer(&self.base_uniforms, 0, bytemuck::cast_slice(&[base]));
        queue.write_buffer(&self.bloom_uniforms, 0, bytemuck::cast_slice(&[bloom]));
    }

    /// Encode one scene submission into `encoder`.
    ///
    /// Vertex and index buffers are created fresh from the CPU mesh every
    /// call; scene content is rebuilt per frame while a drag is active, so
    /// there is nothing to cache.
    pub fn render(
        &self,
        device: &wgpu::Device,
        encoder: &mut wgpu::CommandEncoder,
        color_view: &wgpu::TextureView,
        depth_view: &wgpu::TextureView,
        clear_color: wgpu::Color,
        kind: ScenePassKind,
        triangles: &Mesh,
        lines: &[Vertex],
    ) {
        let bind_group = match kind {
            ScenePassKind::Bloom => &self.bloom_bind_group,
            ScenePassKind::Base => &self.base_bind_group,
        };

        let triangle_buffers = (!triangles.is_empty()).then(|| {
            let vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Scene Vertex Buffer"),
                contents: bytemuck::cast_slice(&triangles.vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });
            let indices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Scene Index Buffer"),
                contents: bytemuck::cast_slice(&triangles.indices),
                usage: wgpu::BufferUsages::INDEX,
            });
            (vertices, indices)
        });

        let line_buffer = (!lines.is_empty()).then(|| {
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Grid Line Vertex Buffer"),
                contents: bytemuck::cast_slice(lines),
                usage: wgpu::BufferUsages::VERTEX,
            })
        });

        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Scene Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: color_view,
                resolve_target: None,
                depth_slice: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear_color),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        if let Some((ref vertices, ref indices)) = triangle_buffers {
            pass.set_pipeline(&self.triangle_pipeline);
            pass.set_bind_group(0, bind_group, &[]);
            pass.set_vertex_buffer(0, vertices.slice(..));
            pass.set_index_buffer(indices.slice(..), wgpu::IndexFormat::Uint32);
            pass.draw_indexed(0..triangles.indices.len() as u32, 0, 0..1);
        }

        if let Some(ref buffer) = line_buffer {
            pass.set_pipeline(&self.line_pipeline);
            pass.set_bind_group(0, bind_group, &[]);
            pass.set_vertex_buffer(0, buffer.slice(..));
            pass.draw(0..lines.len() as u32, 0..1);
        }
    }
}
