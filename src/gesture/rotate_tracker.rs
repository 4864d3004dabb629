//! Rotate Gesture Tracker
//!
//! Handles rotation of the selected points around the handle center.

use crate::geometry::Vec2;

use super::{GestureContext, GestureUpdate};

/// Tracks a rotation gesture
#[derive(Debug, Clone)]
pub struct RotateTracker {
    /// Center of rotation (handle position at gesture start)
    pub center: Vec2,
    /// Angle of the press point around `center`
    pub initial_angle: f32,
    /// Indices of points being rotated
    pub point_indices: Vec<usize>,
}

impl RotateTracker {
    pub fn new(ctx: &GestureContext) -> Self {
        let center = ctx.handle.position;
        Self {
            center,
            initial_angle: (ctx.start - center).angle(),
            point_indices: ctx.selection.selected_indices(),
        }
    }

    /// Rotation since the press, always measured from the initial angle so
    /// per-move errors never accumulate
    pub fn angle_delta(&self, pointer: Vec2) -> f32 {
        (pointer - self.center).angle() - self.initial_angle
    }

    /// Compute new point positions given a rotation angle (in radians)
    pub fn compute_new_positions(&self, ctx: &GestureContext, angle: f32) -> Vec<Vec2> {
        ctx.map_points(&self.point_indices, |p| p.rotate_about(self.center, angle))
    }

    pub fn on_move(&self, ctx: &GestureContext, pointer: Vec2) -> GestureUpdate {
        let delta = self.angle_delta(pointer);
        GestureUpdate {
            points: Some(self.compute_new_positions(ctx, delta)),
            handle: Some(ctx.handle.rotated(delta)),
            selection_rect: None,
        }
    }
}
