//! Placement Tracker
//!
//! Drag-driven footprint placement: press anchors a corner on the grid,
//! moving stretches the opposite corner, release evaluates the region.
//! A drag commits only when both footprint extents are non-zero; a
//! one-dimensional or point drag is discarded.
//!
//! The tracker owns the whole drag lifecycle. `End` is evaluated on the
//! first update with a ground hit and the phase returns to `Idle`
//! immediately after, so a release can never commit twice. While the
//! pointer misses the plane the phase stays latched and no stale snap
//! point is reused.

use crate::input::PointerEvents;
use crate::world::GridPoint;

use super::geometry::BuildRegion;

/// Where the tracker is in the drag lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragPhase {
    /// No drag in progress.
    #[default]
    Idle,
    /// Primary button went down; anchor set (or pending an on-grid hit).
    Start,
    /// Pointer has moved since the press; region is live.
    Moving,
    /// Release or secondary press seen; evaluated on the next ground hit.
    End,
}

/// What the caller should do with the scene after an update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlacementAction {
    /// Nothing changed.
    None,
    /// Drag in progress: rebuild the in-progress footprint to this region.
    Resize(BuildRegion),
    /// Drag finished with a valid footprint: place it.
    Commit(BuildRegion),
    /// Drag finished degenerate or was cancelled: hide the in-progress
    /// footprint.
    Discard,
}

/// Owns the drag phase and the region being stretched.
#[derive(Debug, Default)]
pub struct PlacementTracker {
    phase: DragPhase,
    region: BuildRegion,
    /// Press happened while the pointer was off the ground plane; the
    /// anchor is taken from the first on-grid hit afterwards.
    anchor_pending: bool,
}

impl PlacementTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Advance the drag lifecycle by one frame of pointer input.
    ///
    /// `snapped` is the grid point under the pointer, if the pointer is
    /// over the ground plane this frame.
    pub fn advance(
        &mut self,
        events: PointerEvents,
        snapped: Option<GridPoint>,
    ) -> PlacementAction {
        if events.primary_pressed {
            self.phase = match self.phase {
                // Press during an active drag keeps it live
                DragPhase::Start | DragPhase::Moving => DragPhase::Moving,
                DragPhase::Idle | DragPhase::End => {
                    self.anchor_pending = true;
                    DragPhase::Start
                }
            };
        }

        if events.moved && matches!(self.phase, DragPhase::Start | DragPhase::Moving) {
            self.phase = DragPhase::Moving;
        }

        // A release or a secondary press always forces End, even from
        // Idle; the held region is then evaluated as-is.
        if events.primary_released || events.secondary_pressed {
            self.phase = DragPhase::End;
        }

        // No ground hit: suspend tracking for this frame. End stays
        // latched and is evaluated on the next frame with a hit.
        let Some(point) = snapped else {
            return PlacementAction::None;
        };

        if self.anchor_pending {
            self.region = BuildRegion::new(point, point);
            self.anchor_pending = false;
        } else if matches!(self.phase, DragPhase::Moving | DragPhase::End) {
            self.region.end = point;
        }

        match self.phase {
            DragPhase::Moving => PlacementAction::Resize(self.region),
            DragPhase::End => {
                self.phase = DragPhase::Idle;
                if self.region.width() > 0 && self.region.depth() > 0 {
                    PlacementAction::Commit(self.region)
                } else {
                    PlacementAction::Discard
                }
            }
            DragPhase::Idle | DragPhase::Start => PlacementAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::PointerEvents;

    fn press() -> PointerEvents {
        PointerEvents {
            primary_pressed: true,
            ..Default::default()
        }
    }

    fn movement() -> PointerEvents {
        PointerEvents {
            moved: true,
            ..Default::default()
        }
    }

    fn release() -> PointerEvents {
        PointerEvents {
            primary_released: true,
            ..Default::default()
        }
    }

    fn cancel() -> PointerEvents {
        PointerEvents {
            secondary_pressed: true,
            ..Default::default()
        }
    }

    fn at(x: i32, z: i32) -> Option<GridPoint> {
        Some(GridPoint::new(x, z))
    }

    #[test]
    fn test_full_drag_commits_once() {
        let mut tracker = PlacementTracker::new();

        assert_eq!(tracker.advance(press(), at(0, 0)), PlacementAction::None);
        assert_eq!(tracker.phase(), DragPhase::Start);

        assert_eq!(
            tracker.advance(movement(), at(3, 0)),
            PlacementAction::Resize(BuildRegion::new(GridPoint::new(0, 0), GridPoint::new(3, 0)))
        );

        assert_eq!(
            tracker.advance(movement(), at(3, 2)),
            PlacementAction::Resize(BuildRegion::new(GridPoint::new(0, 0), GridPoint::new(3, 2)))
        );

        assert_eq!(
            tracker.advance(release(), at(3, 2)),
            PlacementAction::Commit(BuildRegion::new(GridPoint::new(0, 0), GridPoint::new(3, 2)))
        );
        assert_eq!(tracker.phase(), DragPhase::Idle);

        // Next frame with no input does nothing - no re-commit
        assert_eq!(
            tracker.advance(PointerEvents::default(), at(3, 2)),
            PlacementAction::None
        );
    }

    #[test]
    fn test_zero_width_drag_discards() {
        let mut tracker = PlacementTracker::new();
        tracker.advance(press(), at(5, 5));
        tracker.advance(movement(), at(5, 9));
        assert_eq!(tracker.advance(release(), at(5, 9)), PlacementAction::Discard);
    }

    #[test]
    fn test_point_click_discards() {
        let mut tracker = PlacementTracker::new();
        tracker.advance(press(), at(1, 1));
        assert_eq!(tracker.advance(release(), at(1, 1)), PlacementAction::Discard);
    }

    #[test]
    fn test_secondary_press_cancels_drag() {
        let mut tracker = PlacementTracker::new();
        tracker.advance(press(), at(0, 0));
        tracker.advance(movement(), at(4, 4));
        assert_eq!(tracker.advance(cancel(), at(4, 4)), PlacementAction::Commit(
            BuildRegion::new(GridPoint::new(0, 0), GridPoint::new(4, 4))
        ));
    }

    #[test]
    fn test_secondary_press_while_idle_evaluates_held_region() {
        // A non-primary press forces End even without a drag in
        // progress; the held region (still at its origin default) is
        // stretched to the current cell and evaluated.
        let mut tracker = PlacementTracker::new();
        assert_eq!(
            tracker.advance(cancel(), at(5, 3)),
            PlacementAction::Commit(BuildRegion::new(GridPoint::new(0, 0), GridPoint::new(5, 3)))
        );
        assert_eq!(tracker.phase(), DragPhase::Idle);
    }

    #[test]
    fn test_secondary_press_while_idle_at_origin_discards() {
        let mut tracker = PlacementTracker::new();
        assert_eq!(tracker.advance(cancel(), at(0, 0)), PlacementAction::Discard);
        assert_eq!(tracker.phase(), DragPhase::Idle);
    }

    #[test]
    fn test_anchor_deferred_until_on_grid() {
        let mut tracker = PlacementTracker::new();

        // Press while pointer is off the ground plane
        tracker.advance(press(), None);
        assert_eq!(tracker.phase(), DragPhase::Start);

        // First on-grid hit anchors the region there
        tracker.advance(movement(), None);
        assert_eq!(
            tracker.advance(movement(), at(7, 7)),
            PlacementAction::Resize(BuildRegion::new(GridPoint::new(7, 7), GridPoint::new(7, 7)))
        );

        tracker.advance(movement(), at(9, 9));
        assert_eq!(
            tracker.advance(release(), at(9, 9)),
            PlacementAction::Commit(BuildRegion::new(GridPoint::new(7, 7), GridPoint::new(9, 9)))
        );
    }

    #[test]
    fn test_release_with_anchor_still_pending_discards() {
        let mut tracker = PlacementTracker::new();
        tracker.advance(press(), None);
        // Release also lands off-plane: End latches until a ground hit
        assert_eq!(tracker.advance(release(), None), PlacementAction::None);
        assert_eq!(tracker.phase(), DragPhase::End);
        // First on-grid frame anchors and evaluates a zero-extent region
        assert_eq!(tracker.advance(movement(), at(7, 7)), PlacementAction::Discard);
        assert_eq!(tracker.phase(), DragPhase::Idle);
    }

    #[test]
    fn test_release_off_plane_defers_to_next_ground_hit() {
        let mut tracker = PlacementTracker::new();
        tracker.advance(press(), at(0, 0));
        tracker.advance(movement(), at(5, 3));

        // Release on a frame where the ray misses the plane: no stale
        // snap point is reused, nothing is committed yet
        assert_eq!(tracker.advance(release(), None), PlacementAction::None);
        assert_eq!(tracker.phase(), DragPhase::End);

        // The evaluation happens on the next frame with a hit, using
        // that frame's cell as the dragged corner
        assert_eq!(
            tracker.advance(movement(), at(6, 4)),
            PlacementAction::Commit(BuildRegion::new(GridPoint::new(0, 0), GridPoint::new(6, 4)))
        );
        assert_eq!(tracker.phase(), DragPhase::Idle);
    }

    #[test]
    fn test_region_follows_pointer_on_release_frame() {
        let mut tracker = PlacementTracker::new();
        tracker.advance(press(), at(0, 0));
        tracker.advance(movement(), at(2, 2));
        // Pointer moved further on the release frame itself
        assert_eq!(
            tracker.advance(release(), at(3, 3)),
            PlacementAction::Commit(BuildRegion::new(GridPoint::new(0, 0), GridPoint::new(3, 3)))
        );
    }
}
