//! Plan Scene
//!
//! Owns everything drawn by the editor: committed buildings, the
//! in-progress building being dragged out, the cursor marker, and the
//! static background (ground quad and grid helper).
//!
//! The foreground batch is rebuilt from scratch every frame; the
//! background batch and grid lines are built once at startup.

use glam::Vec3;
use crate::render::{Mesh, Vertex};

use super::building::{Building, BuildingShape, PlacementAction};
use super::config::EditorConfig;
use super::cursor::CursorMarker;
use super::meshes;

/// Scene content for one editing session.
pub struct PlanScene {
    committed: Vec<Building>,
    live: Building,
    pub cursor: CursorMarker,
    background: Mesh,
    grid: Vec<Vertex>,
}

impl PlanScene {
    /// Build the static background from the configuration; the dynamic
    /// content starts empty.
    pub fn new(config: &EditorConfig) -> Self {
        let mut background = Mesh::new();
        meshes::append_quad_xz(
            &mut background,
            Vec3::ZERO,
            config.ground_extent / 2.0,
            config.ground_extent / 2.0,
            config.ground_color,
        );

        Self {
            committed: Vec::new(),
            live: Building::hidden(),
            cursor: CursorMarker::new(),
            background,
            grid: meshes::grid_lines(config.grid_line_count, config.grid_color),
        }
    }

    pub fn committed_count(&self) -> usize {
        self.committed.len()
    }

    pub fn live_visible(&self) -> bool {
        self.live.visible
    }

    /// Apply the outcome of a placement update.
    pub fn apply(&mut self, action: PlacementAction) {
        match action {
            PlacementAction::None => {}
            PlacementAction::Resize(region) => {
                self.live.shape = BuildingShape::from_region(&region);
                self.live.visible = true;
            }
            PlacementAction::Commit(region) => {
                self.live.shape = BuildingShape::from_region(&region);
                self.live.visible = true;
                self.committed.push(self.live);
                self.live = Building::hidden();
                println!(
                    "[Scene] Committed building {} ({}x{} cells)",
                    self.committed.len(),
                    region.width(),
                    region.depth()
                );
            }
            PlacementAction::Discard => {
                self.live.visible = false;
            }
        }
    }

    /// Rebuild the dynamic batch: all buildings plus the cursor. Drawn
    /// into both the bloom source and the base scene.
    pub fn foreground_mesh(&self, config: &EditorConfig) -> Mesh {
        let mut mesh = Mesh::new();

        for building in self.committed.iter().chain(
            self.live.visible.then_some(&self.live),
        ) {
            let shape = &building.shape;
            for wall in [
                &shape.near_wall,
                &shape.far_wall,
                &shape.left_wall,
                &shape.right_wall,
            ] {
                meshes::append_box(&mut mesh, wall, config.building_color);
            }
            meshes::append_box(&mut mesh, &shape.floor, config.floor_color);
        }

        self.cursor.append_to(&mut mesh, config.arrow_color);
        mesh
    }

    /// The static ground quad. Drawn only in the base scene so the bloom
    /// source keeps its black clear.
    pub fn background_mesh(&self) -> &Mesh {
        &self.background
    }

    /// The grid helper line set, also base-scene only.
    pub fn grid_lines(&self) -> &[Vertex] {
        &self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::building::BuildRegion;
    use crate::world::GridPoint;

    fn region(ex: i32, ez: i32) -> BuildRegion {
        BuildRegion::new(GridPoint::new(0, 0), GridPoint::new(ex, ez))
    }

    #[test]
    fn test_resize_shows_live_building() {
        let config = EditorConfig::default();
        let mut scene = PlanScene::new(&config);
        assert!(!scene.live_visible());

        scene.apply(PlacementAction::Resize(region(2, 3)));
        assert!(scene.live_visible());
        assert_eq!(scene.committed_count(), 0);
    }

    #[test]
    fn test_commit_moves_live_to_committed() {
        let config = EditorConfig::default();
        let mut scene = PlanScene::new(&config);

        scene.apply(PlacementAction::Resize(region(2, 3)));
        scene.apply(PlacementAction::Commit(region(2, 3)));
        assert_eq!(scene.committed_count(), 1);
        assert!(!scene.live_visible());

        // A second commit is a separate building
        scene.apply(PlacementAction::Commit(region(4, 1)));
        assert_eq!(scene.committed_count(), 2);
    }

    #[test]
    fn test_discard_hides_live_building() {
        let config = EditorConfig::default();
        let mut scene = PlanScene::new(&config);
        scene.apply(PlacementAction::Resize(region(2, 3)));
        scene.apply(PlacementAction::Discard);
        assert!(!scene.live_visible());
        assert_eq!(scene.committed_count(), 0);
    }

    #[test]
    fn test_foreground_mesh_counts_buildings() {
        let config = EditorConfig::default();
        let mut scene = PlanScene::new(&config);

        let empty = scene.foreground_mesh(&config);
        assert!(empty.is_empty());

        scene.apply(PlacementAction::Commit(region(3, 3)));
        let with_building = scene.foreground_mesh(&config);
        // Five boxes, 24 vertices each
        assert_eq!(with_building.vertices.len(), 5 * 24);
    }

    #[test]
    fn test_background_built_once() {
        let config = EditorConfig::default();
        let scene = PlanScene::new(&config);
        assert_eq!(scene.background_mesh().vertices.len(), 4);
        assert_eq!(
            scene.grid_lines().len(),
            config.grid_line_count as usize * 4
        );
    }
}
