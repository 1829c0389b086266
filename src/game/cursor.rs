//! Cursor Marker
//!
//! The grid cursor: a downward-pointing arrow hovering above the snapped
//! cell plus a one-cell base quad on the ground. Hidden whenever the
//! pointer leaves the window or misses the ground plane. The arrow is the
//! only scene element drawn into the bloom source, so it carries the glow.

use glam::{Vec3, Vec4};
use crate::render::Mesh;
use crate::world::GridPoint;

use super::meshes;

/// Arrow tip height above the ground.
const APEX_Y: f32 = 2.5;
/// Cone base ring height; the shaft starts here.
const CONE_BASE_Y: f32 = 3.5;
/// Shaft top height.
const SHAFT_TOP_Y: f32 = 6.5;
const CONE_RADIUS: f32 = 0.5;
const SHAFT_RADIUS: f32 = 0.2;
const SEGMENTS: u32 = 32;
/// Base quad height; just above the ground to avoid z-fighting.
const BASE_Y: f32 = 0.01;

/// Tracks the snapped cell under the pointer.
#[derive(Clone, Copy, Debug, Default)]
pub struct CursorMarker {
    pub position: GridPoint,
    pub visible: bool,
}

impl CursorMarker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Follow the pointer: show at the snapped cell, hide when there is
    /// no ground hit this frame.
    pub fn update(&mut self, snapped: Option<GridPoint>) {
        match snapped {
            Some(point) => {
                self.position = point;
                self.visible = true;
            }
            None => self.visible = false,
        }
    }

    /// Emit the arrow and base quad at the current cell. No-op while
    /// hidden.
    pub fn append_to(&self, mesh: &mut Mesh, color: Vec4) {
        if !self.visible {
            return;
        }
        let cell = self.position.to_world(0.0);

        meshes::append_cone(
            mesh,
            Vec3::new(cell.x, APEX_Y, cell.z),
            CONE_BASE_Y,
            CONE_RADIUS,
            SEGMENTS,
            color,
        );
        meshes::append_cylinder(
            mesh,
            cell,
            CONE_BASE_Y,
            SHAFT_TOP_Y,
            SHAFT_RADIUS,
            SEGMENTS,
            color,
        );
        meshes::append_quad_xz(
            mesh,
            Vec3::new(cell.x, BASE_Y, cell.z),
            0.5,
            0.5,
            color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_follows_snapped_point() {
        let mut cursor = CursorMarker::new();
        assert!(!cursor.visible);

        cursor.update(Some(GridPoint::new(3, -2)));
        assert!(cursor.visible);
        assert_eq!(cursor.position, GridPoint::new(3, -2));

        cursor.update(None);
        assert!(!cursor.visible);
        // Last position is retained while hidden
        assert_eq!(cursor.position, GridPoint::new(3, -2));
    }

    #[test]
    fn test_hidden_cursor_emits_nothing() {
        let cursor = CursorMarker::new();
        let mut mesh = Mesh::new();
        cursor.append_to(&mut mesh, Vec4::ONE);
        assert!(mesh.is_empty());
    }

    #[test]
    fn test_visible_cursor_emits_arrow() {
        let mut cursor = CursorMarker::new();
        cursor.update(Some(GridPoint::new(1, 1)));

        let mut mesh = Mesh::new();
        cursor.append_to(&mut mesh, Vec4::ONE);
        assert!(!mesh.is_empty());
        // Arrow tip hovers above the cell
        assert!(mesh.vertices.iter().any(|v| v.position[1] == APEX_Y));
        assert!(mesh.vertices.iter().any(|v| v.position[1] == SHAFT_TOP_Y));
    }
}
