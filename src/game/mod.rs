//! Plan Editor Game Logic
//!
//! Editor-side modules layered on top of the engine: configuration,
//! building placement and geometry, the cursor marker, mesh emitters,
//! scene content, and the frame-tick state owner.

pub mod building;
pub mod config;
pub mod cursor;
pub mod meshes;
pub mod scene;
pub mod state;

pub use building::{Building, BuildRegion, BuildingShape, DragPhase, PlacementAction, PlacementTracker};
pub use config::{BloomParams, EditorConfig};
pub use cursor::CursorMarker;
pub use scene::PlanScene;
pub use state::EditorState;
