//! Frame Targets Module
//!
//! Offscreen render targets for the two-composer frame: a bloom-source
//! texture (foreground on black), two blur ping-pong textures, the base
//! scene texture, and a shared depth buffer. All targets are recreated
//! synchronously when the window resizes.

/// Depth buffer format shared by both scene submissions.
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Offscreen color/depth attachments sized to the current surface.
pub struct FrameTargets {
    /// Foreground-only scene, black clear - input to the bloom chain.
    pub bloom_source: wgpu::TextureView,
    /// Horizontal blur output.
    pub blur_a: wgpu::TextureView,
    /// Vertical blur output - the final bloom texture for compositing.
    pub blur_b: wgpu::TextureView,
    /// Full scene, paper-white clear - the base layer for compositing.
    pub base_color: wgpu::TextureView,
    /// Depth buffer, cleared at the start of each scene submission.
    pub depth: wgpu::TextureView,

    width: u32,
    height: u32,
    format: wgpu::TextureFormat,
}

impl FrameTargets {
    /// Create all offscreen targets at the given size.
    pub fn new(device: &wgpu::Device, width: u32, height: u32, format: wgpu::TextureFormat) -> Self {
        let width = width.max(1);
        let height = height.max(1);

        let color = |label| Self::color_target(device, width, height, format, label);

        Self {
            bloom_source: color("Bloom Source Target"),
            blur_a: color("Bloom Blur A Target"),
            blur_b: color("Bloom Blur B Target"),
            base_color: color("Base Scene Target"),
            depth: Self::depth_target(device, width, height),
            width,
            height,
            format,
        }
    }

    /// Recreate all targets for a new surface size.
    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        if width == 0 || height == 0 || (width == self.width && height == self.height) {
            return;
        }
        *self = Self::new(device, width, height, self.format);
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn color_target(
        device: &wgpu::Device,
        width: u32,
        height: u32,
        format: wgpu::TextureFormat,
        label: &str,
    ) -> wgpu::TextureView {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });
        texture.create_view(&wgpu::TextureViewDescriptor::default())
    }

    fn depth_target(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Scene Depth Target"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        texture.create_view(&wgpu::TextureViewDescriptor::default())
    }
}
