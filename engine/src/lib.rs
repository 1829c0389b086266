//! Groundplan Engine Library
//!
//! Rendering and input infrastructure for the plan editor: an orthographic
//! viewport over a ground grid where building footprints are dragged out
//! with the mouse.
//!
//! # Modules
//!
//! - [`render`] - wgpu scene pass, bloom post-processing, and frame targets
//! - [`input`] - Platform-agnostic mouse state with per-frame edge buffering
//! - [`camera`] - Orthographic camera and ground-plane raycasting
//! - [`world`] - Grid snapping and ground-plane configuration
//!
//! # Example
//!
//! ```ignore
//! use groundplan_engine::camera::{OrthoCamera, pick_ground};
//! use groundplan_engine::input::MouseState;
//! use groundplan_engine::world::GridConfig;
//!
//! let camera = OrthoCamera::new(16.0 / 9.0);
//! let grid = GridConfig::default();
//! let mut mouse = MouseState::new();
//!
//! // Event loop writes raw input
//! mouse.set_position(640.0, 360.0, 1280, 720);
//!
//! // Frame tick reads it once and derives the snapped grid point
//! if let Some(ndc) = mouse.ndc_position() {
//!     if let Some(hit) = pick_ground(&camera, ndc, grid.plane_height) {
//!         let point = grid.snap(hit);
//!     }
//! }
//! ```

pub mod camera;
pub mod input;
pub mod render;
pub mod world;

// Editor-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

// Re-export commonly used types for convenience
pub use camera::{OrthoCamera, pick_ground};
pub use input::{ButtonState, MouseButton, MouseState, PointerEvents};
pub use render::{BloomPass, FrameTargets, GpuContext, Mesh, ScenePass, ScenePassKind, SceneUniforms, Vertex};
pub use world::{GridConfig, GridPoint};
