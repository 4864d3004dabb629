//! Gesture Controller
//!
//! A gesture is one pointer-down, any number of moves, and one pointer-up.
//! The controller holds at most one active gesture. Each gesture is built from
//! a `GestureContext` snapshot taken at pointer-down and computes every move
//! from that snapshot, producing whole replacement values for the editor to
//! commit.
//!
//! Key types:
//! - `GestureController`: owns the active gesture, forwards moves, finalizes on release
//! - `ActiveGesture`: enum of all gesture kinds
//! - Specific trackers: MoveTracker, RotateTracker, ScaleTracker, BoxSelectTracker

mod box_select;
mod move_tracker;
mod rotate_tracker;
mod scale_tracker;

pub use box_select::BoxSelectTracker;
pub use move_tracker::MoveTracker;
pub use rotate_tracker::RotateTracker;
pub use scale_tracker::{ScaleTracker, SCALE_EPSILON};

use tracing::{debug, warn};

use crate::error::{EditorError, EditorResult};
use crate::geometry::{BoundingBox, Vec2};
use crate::handle::HandlePose;
use crate::mesh::Mesh;
use crate::selection::Selection;

/// Immutable snapshot of everything a gesture reads, taken at pointer-down
#[derive(Debug, Clone, PartialEq)]
pub struct GestureContext {
    /// Pointer position at pointer-down
    pub start: Vec2,
    /// Mesh points at pointer-down
    pub points: Vec<Vec2>,
    /// Handle pose at pointer-down
    pub handle: HandlePose,
    /// Selection at pointer-down
    pub selection: Selection,
}

impl GestureContext {
    pub fn capture(start: Vec2, mesh: &Mesh, selection: &Selection, handle: HandlePose) -> Self {
        Self {
            start,
            points: mesh.points().to_vec(),
            handle,
            selection: selection.clone(),
        }
    }

    /// Copy of the start points with `f` applied to the listed indices
    pub fn map_points(&self, indices: &[usize], f: impl Fn(Vec2) -> Vec2) -> Vec<Vec2> {
        let mut points = self.points.clone();
        for &idx in indices {
            if let Some(p) = points.get_mut(idx) {
                *p = f(*p);
            }
        }
        points
    }
}

/// Replacement values produced by one pointer-move. `None` leaves that piece
/// of state as it is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GestureUpdate {
    pub points: Option<Vec<Vec2>>,
    pub handle: Option<HandlePose>,
    pub selection_rect: Option<BoundingBox>,
}

/// Replacement values produced when the pointer is released
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GestureEnd {
    pub selection: Option<Selection>,
    pub selection_rect: Option<BoundingBox>,
}

/// The kind of gesture in progress
#[derive(Debug, Clone, Default)]
pub enum ActiveGesture {
    /// No gesture in progress
    #[default]
    None,
    /// Point, face or handle-center translation
    Move(MoveTracker),
    /// Rotation around the handle
    Rotate(RotateTracker),
    /// Uniform scale from the handle
    Scale(ScaleTracker),
    /// Box selection rectangle
    BoxSelect(BoxSelectTracker),
}

impl ActiveGesture {
    pub fn is_active(&self) -> bool {
        !matches!(self, ActiveGesture::None)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ActiveGesture::None => "none",
            ActiveGesture::Move(_) => "move",
            ActiveGesture::Rotate(_) => "rotate",
            ActiveGesture::Scale(_) => "scale",
            ActiveGesture::BoxSelect(_) => "box-select",
        }
    }
}

/// Owns the active gesture and its start snapshot
#[derive(Debug, Clone, Default)]
pub struct GestureController {
    active: ActiveGesture,
    context: Option<GestureContext>,
}

impl GestureController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a gesture is currently active
    pub fn is_active(&self) -> bool {
        self.active.is_active()
    }

    pub fn active(&self) -> &ActiveGesture {
        &self.active
    }

    pub fn context(&self) -> Option<&GestureContext> {
        self.context.as_ref()
    }

    /// Start a gesture. A gesture still in progress is dropped without being
    /// finalized; the new pointer-down always wins.
    pub fn begin(&mut self, gesture: ActiveGesture, context: GestureContext) {
        if self.is_active() {
            warn!(
                replaced = self.active.name(),
                "gesture started while another was active"
            );
        }
        debug!(kind = gesture.name(), x = context.start.x(), y = context.start.y(), "gesture begin");
        self.active = gesture;
        self.context = Some(context);
    }

    /// Feed a pointer-move to the active gesture. Returns `Ok(None)` when no
    /// gesture is active. A rejected move aborts the gesture.
    pub fn on_move(&mut self, pointer: Vec2) -> EditorResult<Option<GestureUpdate>> {
        if self.context.is_some() && !pointer.is_finite() {
            self.abort();
            return Err(EditorError::NonFinitePointer);
        }
        let Some(ctx) = &self.context else {
            return Ok(None);
        };

        let update = match &self.active {
            ActiveGesture::None => return Ok(None),
            ActiveGesture::Move(tracker) => tracker.on_move(ctx, pointer),
            ActiveGesture::Rotate(tracker) => tracker.on_move(ctx, pointer),
            ActiveGesture::Scale(tracker) => tracker.on_move(ctx, pointer),
            ActiveGesture::BoxSelect(tracker) => tracker.on_move(ctx, pointer),
        };
        Ok(Some(update))
    }

    /// Finalize and detach the active gesture. Returns `Ok(None)` when no
    /// gesture is active.
    pub fn on_end(&mut self, pointer: Vec2, ctrl: bool) -> EditorResult<Option<GestureEnd>> {
        let active = std::mem::take(&mut self.active);
        let Some(ctx) = self.context.take() else {
            return Ok(None);
        };
        if !pointer.is_finite() {
            warn!(kind = active.name(), "gesture dropped on non-finite release");
            return Err(EditorError::NonFinitePointer);
        }

        let end = match &active {
            ActiveGesture::None => return Ok(None),
            ActiveGesture::Move(tracker) => tracker.on_end(&ctx, pointer, ctrl),
            ActiveGesture::BoxSelect(tracker) => tracker.on_end(&ctx, pointer, ctrl),
            ActiveGesture::Rotate(_) | ActiveGesture::Scale(_) => GestureEnd::default(),
        };
        debug!(kind = active.name(), "gesture end");
        Ok(Some(end))
    }

    /// Drop the active gesture without finalizing it
    pub fn abort(&mut self) {
        if self.is_active() {
            warn!(kind = self.active.name(), "gesture aborted");
        }
        self.active = ActiveGesture::None;
        self.context = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> GestureContext {
        let mesh = Mesh::demo();
        let selection = Selection::from_indices([0, 1]);
        let handle = HandlePose::from_selection(&mesh, &selection);
        GestureContext::capture(Vec2::new(50.0, 50.0), &mesh, &selection, handle)
    }

    #[test]
    fn test_idle_controller_ignores_events() {
        let mut gestures = GestureController::new();
        assert!(gestures.on_move(Vec2::new(1.0, 1.0)).unwrap().is_none());
        assert!(gestures.on_end(Vec2::new(1.0, 1.0), false).unwrap().is_none());
    }

    #[test]
    fn test_detaches_after_end() {
        let mut gestures = GestureController::new();
        let ctx = context();
        gestures.begin(ActiveGesture::Move(MoveTracker::mesh(&ctx)), ctx);
        assert!(gestures.is_active());

        assert!(gestures.on_move(Vec2::new(60.0, 50.0)).unwrap().is_some());
        assert!(gestures.on_end(Vec2::new(60.0, 50.0), false).unwrap().is_some());

        assert!(!gestures.is_active());
        assert!(gestures.on_move(Vec2::new(90.0, 50.0)).unwrap().is_none());
    }

    #[test]
    fn test_non_finite_move_aborts() {
        let mut gestures = GestureController::new();
        let ctx = context();
        gestures.begin(ActiveGesture::Rotate(RotateTracker::new(&ctx)), ctx);

        let err = gestures.on_move(Vec2::new(f32::NAN, 0.0)).unwrap_err();
        assert!(matches!(err, EditorError::NonFinitePointer));
        assert!(!gestures.is_active());
    }

    #[test]
    fn test_new_gesture_replaces_old() {
        let mut gestures = GestureController::new();
        let ctx = context();
        gestures.begin(ActiveGesture::Move(MoveTracker::mesh(&ctx)), ctx.clone());
        gestures.begin(ActiveGesture::BoxSelect(BoxSelectTracker::new()), ctx);

        assert!(matches!(gestures.active(), ActiveGesture::BoxSelect(_)));
        let update = gestures.on_move(Vec2::new(70.0, 70.0)).unwrap().unwrap();
        assert!(update.points.is_none());
        assert!(update.selection_rect.is_some());
    }
}
