//! Building Module
//!
//! Footprint placement (drag lifecycle) and building geometry (walls and
//! floor derived from a grid region).

pub mod geometry;
pub mod placement;

pub use geometry::{BoxDescriptor, BuildRegion, BuildingShape};
pub use placement::{DragPhase, PlacementAction, PlacementTracker};

/// A building in the scene: its shape and whether it is drawn.
///
/// The in-progress building reuses this with `visible = false` between
/// drags instead of being deallocated.
#[derive(Clone, Copy, Debug)]
pub struct Building {
    pub shape: BuildingShape,
    pub visible: bool,
}

impl Building {
    pub fn hidden() -> Self {
        Self {
            shape: BuildingShape::from_region(&BuildRegion::default()),
            visible: false,
        }
    }
}

impl Default for Building {
    fn default() -> Self {
        Self::hidden()
    }
}
