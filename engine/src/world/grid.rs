//! Grid Snapping Module
//!
//! Converts ground-plane hit points into integer grid coordinates.
//! Snapping is stateless: the snapped point is recomputed every frame from
//! the live pointer ray, never cached.

use glam::Vec3;

/// An integer cell coordinate on the ground grid.
///
/// Produced by rounding a ground-plane intersection to the nearest cell
/// on both horizontal axes. Carries no identity; two equal coordinates
/// are the same cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GridPoint {
    pub x: i32,
    pub z: i32,
}

impl GridPoint {
    /// Create a new grid point.
    pub fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// World-space position of this cell at the given height.
    pub fn to_world(&self, y: f32) -> Vec3 {
        Vec3::new(self.x as f32, y, self.z as f32)
    }
}

/// Ground-plane and snapping configuration.
#[derive(Clone, Copy, Debug)]
pub struct GridConfig {
    /// Grid cell size in world units.
    pub cell_size: f32,
    /// Y coordinate of the ground reference plane.
    pub plane_height: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_size: 1.0,
            plane_height: 0.0,
        }
    }
}

impl GridConfig {
    /// Snap a ground-plane hit to the nearest grid cell.
    ///
    /// Rounds X and Z to the nearest multiple of the cell size; the hit's
    /// Y is discarded (the plane height is fixed).
    pub fn snap(&self, hit: Vec3) -> GridPoint {
        GridPoint {
            x: (hit.x / self.cell_size).round() as i32,
            z: (hit.z / self.cell_size).round() as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_rounds_to_nearest() {
        let config = GridConfig::default();
        let point = config.snap(Vec3::new(3.4, 0.0, -2.6));
        assert_eq!(point, GridPoint::new(3, -3));
    }

    #[test]
    fn test_snap_exact_cell() {
        let config = GridConfig::default();
        let point = config.snap(Vec3::new(5.0, 0.0, -7.0));
        assert_eq!(point, GridPoint::new(5, -7));
    }

    #[test]
    fn test_snap_ignores_height() {
        let config = GridConfig::default();
        let low = config.snap(Vec3::new(1.2, 0.0, 1.2));
        let high = config.snap(Vec3::new(1.2, 99.0, 1.2));
        assert_eq!(low, high);
    }

    #[test]
    fn test_snap_custom_cell_size() {
        let config = GridConfig {
            cell_size: 2.0,
            plane_height: 0.0,
        };
        // 3.4 / 2.0 = 1.7 -> rounds to cell 2
        let point = config.snap(Vec3::new(3.4, 0.0, 0.9));
        assert_eq!(point, GridPoint::new(2, 0));
    }

    #[test]
    fn test_to_world() {
        let point = GridPoint::new(4, -2);
        assert_eq!(point.to_world(0.5), Vec3::new(4.0, 0.5, -2.0));
    }
}
