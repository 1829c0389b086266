//! Raycast Module
//!
//! Builds world-space rays from normalized device coordinates and
//! intersects them with the horizontal ground plane. This is the picking
//! path for cursor snapping and building placement.

use glam::Vec3;

use super::OrthoCamera;

/// Build a world-space ray for a screen point under an orthographic camera.
///
/// For an orthographic projection every ray is parallel to the view
/// direction; the NDC coordinates only offset the ray origin across the
/// view volume.
///
/// # Arguments
/// * `camera` - The current camera frame
/// * `ndc` - Normalized device coordinates, [-1, 1] on each axis,
///   (0, 0) at viewport center, Y up
///
/// # Returns
/// `(origin, direction)` with `direction` normalized.
pub fn ray_from_ndc(camera: &OrthoCamera, ndc: (f32, f32)) -> (Vec3, Vec3) {
    let (right, up) = camera.basis();
    let d = camera.half_height;
    let origin = camera.position + right * (ndc.0 * d * camera.aspect) + up * (ndc.1 * d);
    (origin, camera.forward())
}

/// Intersect a ray with a horizontal plane at the given height.
///
/// # Returns
/// * `Some(point)` - The intersection point on the plane
/// * `None` - The ray is parallel to the plane, or the intersection lies
///   behind the ray origin
pub fn intersect_plane(origin: Vec3, direction: Vec3, plane_height: f32) -> Option<Vec3> {
    if direction.y.abs() < 1e-4 {
        return None;
    }

    let t = (plane_height - origin.y) / direction.y;
    if t < 0.0 {
        return None;
    }

    Some(origin + direction * t)
}

/// Raycast a screen point onto the ground plane.
///
/// Convenience composition of [`ray_from_ndc`] and [`intersect_plane`];
/// called once per frame by the editor tick. Stateless - a `None` result
/// means cursor and drag tracking are suspended for this frame.
pub fn pick_ground(camera: &OrthoCamera, ndc: (f32, f32), plane_height: f32) -> Option<Vec3> {
    let (origin, direction) = ray_from_ndc(camera, ndc);
    intersect_plane(origin, direction, plane_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_ray_hits_origin() {
        // Camera looks at the origin, so the center-screen ray must hit
        // the ground plane at (0, 0, 0).
        let camera = OrthoCamera::default();
        let hit = pick_ground(&camera, (0.0, 0.0), 0.0).unwrap();
        assert!(hit.x.abs() < 1e-3, "hit.x = {}", hit.x);
        assert!(hit.y.abs() < 1e-3, "hit.y = {}", hit.y);
        assert!(hit.z.abs() < 1e-3, "hit.z = {}", hit.z);
    }

    #[test]
    fn test_ray_direction_is_view_direction() {
        let camera = OrthoCamera::default();
        let (_, direction) = ray_from_ndc(&camera, (0.7, -0.3));
        // Orthographic rays are all parallel to the view direction
        assert!((direction - camera.forward()).length() < 1e-5);
    }

    #[test]
    fn test_offset_rays_are_parallel() {
        let camera = OrthoCamera::default();
        let (o1, d1) = ray_from_ndc(&camera, (-1.0, -1.0));
        let (o2, d2) = ray_from_ndc(&camera, (1.0, 1.0));
        assert!((d1 - d2).length() < 1e-5);
        assert!((o1 - o2).length() > 1.0);
    }

    #[test]
    fn test_parallel_ray_misses() {
        let origin = Vec3::new(0.0, 5.0, 0.0);
        let direction = Vec3::new(1.0, 0.0, 0.0);
        assert_eq!(intersect_plane(origin, direction, 0.0), None);
    }

    #[test]
    fn test_hit_behind_origin_misses() {
        // Ray pointing up from above the plane: intersection would need t < 0
        let origin = Vec3::new(0.0, 5.0, 0.0);
        let direction = Vec3::new(0.0, 1.0, 0.0);
        assert_eq!(intersect_plane(origin, direction, 0.0), None);
    }

    #[test]
    fn test_hit_on_elevated_plane() {
        let origin = Vec3::new(2.0, 10.0, 2.0);
        let direction = Vec3::new(0.0, -1.0, 0.0);
        let hit = intersect_plane(origin, direction, 4.0).unwrap();
        assert_eq!(hit, Vec3::new(2.0, 4.0, 2.0));
    }
}
