//! Render Module
//!
//! wgpu-based rendering infrastructure for the plan editor: device/surface
//! setup, the lit scene pass (triangles + grid lines), offscreen frame
//! targets, and the two-composer bloom post-processing chain.

pub mod bloom_post;
pub mod gpu_context;
pub mod mesh;
pub mod scene_pass;
pub mod targets;

// Re-export commonly used types for convenience
pub use bloom_post::BloomPass;
pub use gpu_context::GpuContext;
pub use mesh::{Mesh, Vertex};
pub use scene_pass::{ScenePass, ScenePassKind, SceneUniforms};
pub use targets::FrameTargets;
