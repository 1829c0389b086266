//! Camera Module
//!
//! Fixed orthographic camera over the ground plane, plus raycasting from
//! screen coordinates into the world.

pub mod raycast;

pub use raycast::{intersect_plane, pick_ground, ray_from_ndc};

use glam::{Mat4, Vec3};

/// Default orthographic half-height of the view volume.
pub const DEFAULT_HALF_HEIGHT: f32 = 12.0;

/// Orthographic camera looking down at the ground plane from an elevated
/// corner position.
///
/// The view volume spans `[-d * aspect, d * aspect]` horizontally and
/// `[-d, d]` vertically, where `d` is the half-height. Only the aspect
/// ratio changes at runtime (on window resize); position and target are
/// fixed for the editor's isometric-style view.
#[derive(Clone, Copy, Debug)]
pub struct OrthoCamera {
    /// Camera position in world space.
    pub position: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    /// Half the vertical extent of the view volume.
    pub half_height: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Near clip distance.
    pub near: f32,
    /// Far clip distance.
    pub far: f32,
}

impl OrthoCamera {
    /// Create the editor camera with the given aspect ratio.
    pub fn new(aspect: f32) -> Self {
        Self {
            position: Vec3::new(50.0, 50.0, 50.0),
            target: Vec3::ZERO,
            half_height: DEFAULT_HALF_HEIGHT,
            aspect,
            near: 1.0,
            far: 10000.0,
        }
    }

    /// Update the aspect ratio from a new viewport size.
    ///
    /// Called synchronously from the resize event, outside the frame loop.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Normalized view direction.
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize()
    }

    /// Camera basis vectors (right, up) in world space.
    pub fn basis(&self) -> (Vec3, Vec3) {
        let forward = self.forward();
        // Degenerate when looking straight up or down
        if forward.y.abs() > 0.99 {
            let right = Vec3::X;
            let up = right.cross(forward).normalize();
            (right, up)
        } else {
            let right = forward.cross(Vec3::Y).normalize();
            let up = right.cross(forward).normalize();
            (right, up)
        }
    }

    /// View matrix (world -> camera).
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    /// Orthographic projection matrix.
    pub fn proj(&self) -> Mat4 {
        let d = self.half_height;
        Mat4::orthographic_rh(
            -d * self.aspect,
            d * self.aspect,
            -d,
            d,
            self.near,
            self.far,
        )
    }

    /// Combined view-projection matrix for the scene uniforms.
    pub fn view_proj(&self) -> Mat4 {
        self.proj() * self.view()
    }
}

impl Default for OrthoCamera {
    fn default() -> Self {
        Self::new(16.0 / 9.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_camera_frame() {
        let camera = OrthoCamera::default();
        assert_eq!(camera.position, Vec3::new(50.0, 50.0, 50.0));
        assert_eq!(camera.target, Vec3::ZERO);
        assert_eq!(camera.half_height, DEFAULT_HALF_HEIGHT);
    }

    #[test]
    fn test_forward_normalized() {
        let camera = OrthoCamera::default();
        assert!((camera.forward().length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_basis_orthonormal() {
        let camera = OrthoCamera::default();
        let forward = camera.forward();
        let (right, up) = camera.basis();
        assert!(right.dot(up).abs() < 1e-5);
        assert!(right.dot(forward).abs() < 1e-5);
        assert!(up.dot(forward).abs() < 1e-5);
        assert!((right.length() - 1.0).abs() < 1e-5);
        assert!((up.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_resize_updates_aspect_only() {
        let mut camera = OrthoCamera::new(1.0);
        camera.resize(1280, 720);
        assert!((camera.aspect - 1280.0 / 720.0).abs() < 1e-5);
        // Zero-sized viewport is ignored
        camera.resize(0, 720);
        assert!((camera.aspect - 1280.0 / 720.0).abs() < 1e-5);
    }

    #[test]
    fn test_view_proj_maps_target_to_center() {
        let camera = OrthoCamera::new(16.0 / 9.0);
        let clip = camera.view_proj() * camera.target.extend(1.0);
        let ndc = clip / clip.w;
        assert!(ndc.x.abs() < 1e-4);
        assert!(ndc.y.abs() < 1e-4);
    }
}
