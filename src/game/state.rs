//! Editor State
//!
//! The single owner of all mutable editor data: configuration, camera,
//! grid, mouse state, the placement tracker, and the scene. The window
//! event loop writes raw input into `mouse`; `update` runs once per frame
//! and drives everything else from it.

use crate::camera::{OrthoCamera, pick_ground};
use crate::input::MouseState;
use crate::world::{GridConfig, GridPoint};

use super::building::PlacementTracker;
use super::config::EditorConfig;
use super::scene::PlanScene;

pub struct EditorState {
    pub config: EditorConfig,
    pub grid: GridConfig,
    pub camera: OrthoCamera,
    pub mouse: MouseState,
    tracker: PlacementTracker,
    pub scene: PlanScene,
}

impl EditorState {
    pub fn new(config: EditorConfig) -> Self {
        let mut camera = OrthoCamera::default();
        camera.half_height = config.camera_half_height;
        let scene = PlanScene::new(&config);

        Self {
            config,
            grid: GridConfig::default(),
            camera,
            mouse: MouseState::new(),
            tracker: PlacementTracker::new(),
            scene,
        }
    }

    /// One frame tick: drain buffered pointer input, derive the snapped
    /// grid point, and advance cursor and placement.
    pub fn update(&mut self) {
        let events = self.mouse.take_events();

        let snapped: Option<GridPoint> = self
            .mouse
            .ndc_position()
            .and_then(|ndc| pick_ground(&self.camera, ndc, self.grid.plane_height))
            .map(|hit| self.grid.snap(hit));

        self.scene.cursor.update(snapped);

        let action = self.tracker.advance(events, snapped);
        self.scene.apply(action);
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.resize(width, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> EditorState {
        let mut state = EditorState::new(EditorConfig::default());
        state.resize(1280, 720);
        state
    }

    #[test]
    fn test_cursor_hidden_without_pointer() {
        let mut state = state();
        state.update();
        assert!(!state.scene.cursor.visible);
    }

    #[test]
    fn test_cursor_snaps_under_pointer() {
        let mut state = state();
        // Window center maps to the camera target at the origin
        state.mouse.set_position(640.0, 360.0, 1280, 720);
        state.update();
        assert!(state.scene.cursor.visible);
        assert_eq!(state.scene.cursor.position, GridPoint::new(0, 0));
    }

    #[test]
    fn test_drag_through_state_commits_building() {
        let mut state = state();

        state.mouse.set_position(640.0, 360.0, 1280, 720);
        state.mouse.set_button(crate::input::MouseButton::Primary, true);
        state.update();

        // Drag far enough to cross grid cells on both axes
        state.mouse.set_position(800.0, 500.0, 1280, 720);
        state.update();

        state.mouse.set_button(crate::input::MouseButton::Primary, false);
        state.update();

        assert_eq!(state.scene.committed_count(), 1);
        assert!(!state.scene.live_visible());
    }

    #[test]
    fn test_click_in_place_places_nothing() {
        let mut state = state();
        state.mouse.set_position(640.0, 360.0, 1280, 720);
        state.mouse.set_button(crate::input::MouseButton::Primary, true);
        state.update();
        state.mouse.set_button(crate::input::MouseButton::Primary, false);
        state.update();
        assert_eq!(state.scene.committed_count(), 0);
    }
}
