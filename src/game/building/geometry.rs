//! Building Geometry
//!
//! Derives the five-box shape of a building (four walls and a floor slab)
//! from a grid-aligned footprint region. Wall and floor dimensions are
//! recomputed from scratch on every resize; nothing is patched in place.

use glam::Vec3;
use crate::world::GridPoint;

/// Wall height in world units.
pub const WALL_HEIGHT: f32 = 2.0;
/// Wall thickness along its short axis.
pub const WALL_THICKNESS: f32 = 0.3;
/// Floor slab thickness.
pub const FLOOR_THICKNESS: f32 = 0.3;
/// Wall center height; slightly above half-height so wall bottoms clear
/// the floor slab top.
pub const WALL_CENTER_Y: f32 = 1.01;
/// Floor slab center height.
pub const FLOOR_CENTER_Y: f32 = 0.16;

/// A footprint on the grid: the anchored corner and the dragged corner.
/// Corners may be in any relative order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildRegion {
    pub start: GridPoint,
    pub end: GridPoint,
}

impl BuildRegion {
    pub fn new(start: GridPoint, end: GridPoint) -> Self {
        Self { start, end }
    }

    /// Footprint extent along X, in cells.
    pub fn width(&self) -> i32 {
        (self.end.x - self.start.x).abs()
    }

    /// Footprint extent along Z, in cells.
    pub fn depth(&self) -> i32 {
        (self.end.z - self.start.z).abs()
    }
}

/// An axis-aligned box described by its center and full extents.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxDescriptor {
    pub center: Vec3,
    pub size: Vec3,
}

/// The five boxes making up one building.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BuildingShape {
    /// Wall along X at the start-side Z edge.
    pub near_wall: BoxDescriptor,
    /// Wall along X at the end-side Z edge.
    pub far_wall: BoxDescriptor,
    /// Wall along Z at the start-side X edge.
    pub left_wall: BoxDescriptor,
    /// Wall along Z at the end-side X edge.
    pub right_wall: BoxDescriptor,
    /// Floor slab spanning the footprint.
    pub floor: BoxDescriptor,
}

impl BuildingShape {
    /// Compute wall and floor boxes for a footprint region.
    ///
    /// Walls sit on the region edges; the X-axis walls span the footprint
    /// width and the Z-axis walls span its depth, so the corners overlap
    /// rather than miter.
    pub fn from_region(region: &BuildRegion) -> Self {
        let sx = region.start.x as f32;
        let sz = region.start.z as f32;
        let ex = region.end.x as f32;
        let ez = region.end.z as f32;

        let dx = (ex - sx).abs();
        let dz = (ez - sz).abs();
        let mid_x = sx + (ex - sx) / 2.0;
        let mid_z = sz + (ez - sz) / 2.0;

        let x_wall = |z| BoxDescriptor {
            center: Vec3::new(mid_x, WALL_CENTER_Y, z),
            size: Vec3::new(dx, WALL_HEIGHT, WALL_THICKNESS),
        };
        let z_wall = |x| BoxDescriptor {
            center: Vec3::new(x, WALL_CENTER_Y, mid_z),
            size: Vec3::new(WALL_THICKNESS, WALL_HEIGHT, dz),
        };

        Self {
            near_wall: x_wall(sz),
            far_wall: x_wall(ez),
            left_wall: z_wall(sx),
            right_wall: z_wall(ex),
            floor: BoxDescriptor {
                center: Vec3::new(mid_x, FLOOR_CENTER_Y, mid_z),
                size: Vec3::new(dx, FLOOR_THICKNESS, dz),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_from_simple_region() {
        let region = BuildRegion::new(GridPoint::new(0, 0), GridPoint::new(5, 3));
        let shape = BuildingShape::from_region(&region);

        assert_eq!(shape.floor.center, Vec3::new(2.5, FLOOR_CENTER_Y, 1.5));
        assert_eq!(shape.floor.size, Vec3::new(5.0, FLOOR_THICKNESS, 3.0));

        assert_eq!(shape.near_wall.center, Vec3::new(2.5, WALL_CENTER_Y, 0.0));
        assert_eq!(shape.near_wall.size, Vec3::new(5.0, WALL_HEIGHT, WALL_THICKNESS));
        assert_eq!(shape.far_wall.center.z, 3.0);

        assert_eq!(shape.left_wall.center, Vec3::new(0.0, WALL_CENTER_Y, 1.5));
        assert_eq!(shape.left_wall.size, Vec3::new(WALL_THICKNESS, WALL_HEIGHT, 3.0));
        assert_eq!(shape.right_wall.center.x, 5.0);
    }

    #[test]
    fn test_shape_is_orientation_independent() {
        let forward = BuildRegion::new(GridPoint::new(-2, -1), GridPoint::new(4, 6));
        let backward = BuildRegion::new(GridPoint::new(4, 6), GridPoint::new(-2, -1));

        let a = BuildingShape::from_region(&forward);
        let b = BuildingShape::from_region(&backward);

        assert_eq!(a.floor, b.floor);
        assert_eq!(a.near_wall, b.far_wall);
        assert_eq!(a.left_wall, b.right_wall);
    }

    #[test]
    fn test_degenerate_region_has_zero_span() {
        let region = BuildRegion::new(GridPoint::new(2, 2), GridPoint::new(2, 7));
        assert_eq!(region.width(), 0);
        assert_eq!(region.depth(), 5);

        let shape = BuildingShape::from_region(&region);
        assert_eq!(shape.floor.size.x, 0.0);
        assert_eq!(shape.floor.size.z, 5.0);
    }

    #[test]
    fn test_negative_coordinates() {
        let region = BuildRegion::new(GridPoint::new(-4, -4), GridPoint::new(-1, -2));
        let shape = BuildingShape::from_region(&region);
        assert_eq!(shape.floor.center, Vec3::new(-2.5, FLOOR_CENTER_Y, -3.0));
        assert_eq!(shape.floor.size, Vec3::new(3.0, FLOOR_THICKNESS, 2.0));
    }
}
