//! Mesh Types Module
//!
//! CPU-side vertex and mesh containers shared by the scene pass and the
//! editor's geometry emitters. Mesh batches are rebuilt on the CPU and
//! re-uploaded whenever scene content changes; there is no incremental
//! vertex-buffer patching.

use bytemuck::{Pod, Zeroable};

/// Vertex for scene geometry (buildings, cursor, ground, grid lines).
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 4],
}

static_assertions::assert_eq_size!(Vertex, [u8; 40]);

impl Vertex {
    pub fn new(position: [f32; 3], normal: [f32; 3], color: [f32; 4]) -> Self {
        Self {
            position,
            normal,
            color,
        }
    }
}

/// Vertex buffer layout matching `shaders/scene.wgsl`.
pub fn vertex_buffer_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0, // position
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 12,
                shader_location: 1, // normal
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x4,
                offset: 24,
                shader_location: 2, // color
            },
        ],
    }
}

/// An indexed triangle mesh being assembled on the CPU.
#[derive(Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.indices.is_empty()
    }

    /// Append another mesh, rebasing its indices.
    pub fn merge(&mut self, other: &Mesh) {
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.indices.extend(other.indices.iter().map(|i| i + base));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_mesh() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
    }

    #[test]
    fn test_merge_rebases_indices() {
        let mut a = Mesh::new();
        a.vertices.push(Vertex::new([0.0; 3], [0.0, 1.0, 0.0], [1.0; 4]));
        a.vertices.push(Vertex::new([1.0; 3], [0.0, 1.0, 0.0], [1.0; 4]));
        a.indices.extend_from_slice(&[0, 1, 0]);

        let mut b = Mesh::new();
        b.vertices.push(Vertex::new([2.0; 3], [0.0, 1.0, 0.0], [1.0; 4]));
        b.indices.extend_from_slice(&[0, 0, 0]);

        a.merge(&b);
        assert_eq!(a.vertices.len(), 3);
        assert_eq!(a.indices, vec![0, 1, 0, 2, 2, 2]);
    }
}
