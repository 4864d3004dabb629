//! Box Select Gesture Tracker
//!
//! Handles rectangular selection in screen space.

use crate::geometry::{BoundingBox, Vec2};

use super::{GestureContext, GestureEnd, GestureUpdate};

/// Tracks a box selection gesture. The press point is one corner, the
/// pointer the other.
#[derive(Debug, Clone, Default)]
pub struct BoxSelectTracker;

impl BoxSelectTracker {
    pub fn new() -> Self {
        Self
    }

    /// Selection rectangle for the current pointer
    pub fn bounds(&self, ctx: &GestureContext, pointer: Vec2) -> BoundingBox {
        BoundingBox::from_corners(ctx.start, pointer)
    }

    pub fn on_move(&self, ctx: &GestureContext, pointer: Vec2) -> GestureUpdate {
        GestureUpdate {
            points: None,
            handle: None,
            selection_rect: Some(self.bounds(ctx, pointer)),
        }
    }

    /// Select the points inside the final rectangle and collapse it
    pub fn on_end(&self, ctx: &GestureContext, pointer: Vec2, ctrl: bool) -> GestureEnd {
        let bounds = self.bounds(ctx, pointer);
        GestureEnd {
            selection: Some(ctx.selection.box_select(&ctx.points, &bounds, ctrl)),
            selection_rect: Some(BoundingBox::ZERO),
        }
    }
}
