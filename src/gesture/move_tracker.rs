//! Move Gesture Tracker
//!
//! Translates a group of points by the screen-space pointer delta. Covers
//! point drags, whole-mesh (face) drags and the handle's center disc.

use crate::geometry::Vec2;

use super::{GestureContext, GestureEnd, GestureUpdate};

/// Tracks a translate gesture
#[derive(Debug, Clone)]
pub struct MoveTracker {
    /// Indices of points being moved
    pub point_indices: Vec<usize>,
    /// Whether the handle travels with the points
    pub moves_handle: bool,
    /// Point whose selection toggles when the gesture turns out to be a click
    pub click_target: Option<usize>,
    /// Pointer travel below which a release counts as a click
    pub click_threshold: f32,
}

impl MoveTracker {
    /// Drag started on point `index`. A selected point drags the whole
    /// selection (and the handle with it); an unselected one moves alone.
    pub fn point(ctx: &GestureContext, index: usize, click_threshold: f32) -> Self {
        let (point_indices, moves_handle) = if ctx.selection.is_selected(index) {
            (ctx.selection.selected_indices(), true)
        } else {
            (vec![index], false)
        };

        Self {
            point_indices,
            moves_handle,
            click_target: Some(index),
            click_threshold,
        }
    }

    /// Drag started on a face: the face carries the entire mesh
    pub fn mesh(ctx: &GestureContext) -> Self {
        Self {
            point_indices: (0..ctx.points.len()).collect(),
            moves_handle: true,
            click_target: None,
            click_threshold: 0.0,
        }
    }

    /// Drag started on the handle's center disc: selected points and the
    /// handle move together
    pub fn handle(ctx: &GestureContext) -> Self {
        Self {
            point_indices: ctx.selection.selected_indices(),
            moves_handle: true,
            click_target: None,
            click_threshold: 0.0,
        }
    }

    /// Compute new point positions given a movement delta
    pub fn compute_new_positions(&self, ctx: &GestureContext, delta: Vec2) -> Vec<Vec2> {
        ctx.map_points(&self.point_indices, |p| p + delta)
    }

    pub fn on_move(&self, ctx: &GestureContext, pointer: Vec2) -> GestureUpdate {
        let delta = pointer - ctx.start;
        GestureUpdate {
            points: Some(self.compute_new_positions(ctx, delta)),
            handle: self.moves_handle.then(|| ctx.handle.translated(delta)),
            selection_rect: None,
        }
    }

    /// A release close to the press point is a click on `click_target`;
    /// anything further was a drag and leaves the selection alone
    pub fn on_end(&self, ctx: &GestureContext, pointer: Vec2, ctrl: bool) -> GestureEnd {
        let selection = self
            .click_target
            .filter(|_| (ctx.start - pointer).len() < self.click_threshold)
            .map(|idx| ctx.selection.toggle_one(idx, ctrl));
        GestureEnd {
            selection,
            selection_rect: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handle::HandlePose;
    use crate::mesh::Mesh;
    use crate::selection::Selection;

    fn context(selection: Selection) -> GestureContext {
        let mesh = Mesh::demo();
        let handle = HandlePose::from_selection(&mesh, &selection);
        GestureContext::capture(Vec2::new(50.0, 50.0), &mesh, &selection, handle)
    }

    #[test]
    fn test_unselected_point_moves_alone() {
        let ctx = context(Selection::from_indices([1, 2]));
        let tracker = MoveTracker::point(&ctx, 0, 2.0);
        let update = tracker.on_move(&ctx, Vec2::new(60.0, 45.0));

        let points = update.points.unwrap();
        assert_eq!(points[0], Vec2::new(60.0, 45.0));
        assert_eq!(points[1], Vec2::new(200.0, 50.0));
        assert!(update.handle.is_none());
    }

    #[test]
    fn test_selected_point_drags_group_and_handle() {
        let ctx = context(Selection::from_indices([0, 1]));
        let tracker = MoveTracker::point(&ctx, 0, 2.0);
        let update = tracker.on_move(&ctx, Vec2::new(60.0, 70.0));

        let points = update.points.unwrap();
        assert_eq!(points[0], Vec2::new(60.0, 70.0));
        assert_eq!(points[1], Vec2::new(210.0, 70.0));
        assert_eq!(points[2], Vec2::new(50.0, 200.0));
        assert_eq!(update.handle.unwrap().position, Vec2::new(135.0, 70.0));
    }

    #[test]
    fn test_moves_do_not_compound() {
        let ctx = context(Selection::new());
        let tracker = MoveTracker::mesh(&ctx);
        tracker.on_move(&ctx, Vec2::new(70.0, 50.0));
        let update = tracker.on_move(&ctx, Vec2::new(55.0, 50.0));
        assert_eq!(update.points.unwrap()[3], Vec2::new(205.0, 200.0));
    }

    #[test]
    fn test_click_toggles_drag_does_not() {
        let ctx = context(Selection::from_indices([0, 1]));
        let tracker = MoveTracker::point(&ctx, 1, 2.0);

        let end = tracker.on_end(&ctx, Vec2::new(51.0, 50.0), true);
        assert_eq!(end.selection.unwrap().selected_indices(), vec![0]);

        let end = tracker.on_end(&ctx, Vec2::new(53.0, 50.0), true);
        assert!(end.selection.is_none());
    }
}
