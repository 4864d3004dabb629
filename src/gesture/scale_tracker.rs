//! Scale Gesture Tracker
//!
//! Handles uniform scaling of the selected points from the handle center.

use crate::geometry::Vec2;

use super::{GestureContext, GestureUpdate};

/// Press distances below this are treated as "pressed on the center" and the
/// gesture scales by 1
pub const SCALE_EPSILON: f32 = 1.0e-3;

/// Tracks a scale gesture
#[derive(Debug, Clone)]
pub struct ScaleTracker {
    /// Center of scaling (handle position at gesture start)
    pub center: Vec2,
    /// Distance from the center to the press point
    pub initial_distance: f32,
    /// Indices of points being scaled
    pub point_indices: Vec<usize>,
}

impl ScaleTracker {
    pub fn new(ctx: &GestureContext) -> Self {
        let center = ctx.handle.position;
        Self {
            center,
            initial_distance: (ctx.start - center).len(),
            point_indices: ctx.selection.selected_indices(),
        }
    }

    /// Ratio of the current pointer distance to the press distance
    pub fn factor(&self, pointer: Vec2) -> f32 {
        if self.initial_distance < SCALE_EPSILON {
            return 1.0;
        }
        (pointer - self.center).len() / self.initial_distance
    }

    /// Compute new point positions given a scale factor. Always applied to
    /// the gesture-start positions so repeated moves don't drift.
    pub fn compute_new_positions(&self, ctx: &GestureContext, factor: f32) -> Vec<Vec2> {
        ctx.map_points(&self.point_indices, |p| self.center + (p - self.center) * factor)
    }

    pub fn on_move(&self, ctx: &GestureContext, pointer: Vec2) -> GestureUpdate {
        GestureUpdate {
            points: Some(self.compute_new_positions(ctx, self.factor(pointer))),
            handle: None,
            selection_rect: None,
        }
    }
}
