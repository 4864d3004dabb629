//! Editor session
//!
//! `Editor` owns the committed state (mesh, selection, handle pose, selection
//! rectangle) and the gesture controller. Pointer events are the only way in.
//! Every change is a whole-value replacement computed from the gesture's start
//! snapshot and validated before it lands, so a failed update leaves the
//! previous state untouched.

use tracing::debug;

use crate::config::EditorConfig;
use crate::error::{EditorError, EditorResult};
use crate::geometry::{BoundingBox, Vec2};
use crate::gesture::{
    ActiveGesture, BoxSelectTracker, GestureContext, GestureController, GestureEnd, GestureUpdate,
    MoveTracker, RotateTracker, ScaleTracker,
};
use crate::handle::HandlePose;
use crate::input::{PointerEvent, Target};
use crate::mesh::{Mesh, MeshStore};
use crate::scene::Scene;
use crate::selection::Selection;

#[derive(Debug, Clone)]
pub struct Editor {
    config: EditorConfig,
    store: MeshStore,
    selection: Selection,
    handle: HandlePose,
    selection_rect: BoundingBox,
    gestures: GestureController,
}

impl Editor {
    /// New session over `mesh` with nothing selected
    pub fn new(mesh: Mesh, config: EditorConfig) -> Self {
        let selection = Selection::new();
        let handle = HandlePose::from_selection(&mesh, &selection);
        Self {
            config,
            store: MeshStore::new(mesh),
            selection,
            handle,
            selection_rect: BoundingBox::ZERO,
            gestures: GestureController::new(),
        }
    }

    pub fn mesh(&self) -> &Mesh {
        self.store.mesh()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn handle(&self) -> HandlePose {
        self.handle
    }

    pub fn selection_rect(&self) -> BoundingBox {
        self.selection_rect
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn is_dragging(&self) -> bool {
        self.gestures.is_active()
    }

    /// Renderable snapshot of the committed state
    pub fn scene(&self) -> Scene<'_> {
        Scene::compose(self.store.mesh(), &self.selection, self.handle, self.selection_rect)
    }

    pub fn handle_event(&mut self, event: PointerEvent) -> EditorResult<()> {
        match event {
            // Additive selection follows the ctrl state of the release
            PointerEvent::Down { target, position, .. } => self.pointer_down(target, position),
            PointerEvent::Move { position } => self.pointer_move(position),
            PointerEvent::Up { position, ctrl } => self.pointer_up(position, ctrl),
        }
    }

    /// Start the gesture matching `target`. Handle targets are ignored while
    /// the handle is hidden.
    pub fn pointer_down(&mut self, target: Target, position: Vec2) -> EditorResult<()> {
        if !position.is_finite() {
            return Err(EditorError::NonFinitePointer);
        }
        if target.is_handle() && !self.handle.visible {
            debug!(?target, "press on hidden handle ignored");
            return Ok(());
        }

        let mesh = self.store.mesh();
        match target {
            Target::Point(idx) => mesh.check_index(idx)?,
            Target::Face(idx) if idx >= mesh.faces().len() => {
                debug!(face = idx, "press on unknown face, treating as mesh drag");
            }
            _ => {}
        }

        let ctx = GestureContext::capture(position, mesh, &self.selection, self.handle);
        let gesture = match target {
            Target::Point(idx) => {
                ActiveGesture::Move(MoveTracker::point(&ctx, idx, self.config.click_threshold))
            }
            Target::Face(_) => ActiveGesture::Move(MoveTracker::mesh(&ctx)),
            Target::HandleMove => ActiveGesture::Move(MoveTracker::handle(&ctx)),
            Target::HandleRotate => ActiveGesture::Rotate(RotateTracker::new(&ctx)),
            Target::HandleScale => ActiveGesture::Scale(ScaleTracker::new(&ctx)),
            Target::Background => ActiveGesture::BoxSelect(BoxSelectTracker::new()),
        };
        if self.gestures.is_active() {
            self.selection_rect = BoundingBox::ZERO;
        }
        self.gestures.begin(gesture, ctx);
        Ok(())
    }

    pub fn pointer_move(&mut self, position: Vec2) -> EditorResult<()> {
        match self.gestures.on_move(position) {
            Ok(Some(update)) => self.apply_update(update),
            Ok(None) => Ok(()),
            Err(e) => {
                self.selection_rect = BoundingBox::ZERO;
                Err(e)
            }
        }
    }

    pub fn pointer_up(&mut self, position: Vec2, ctrl: bool) -> EditorResult<()> {
        match self.gestures.on_end(position, ctrl) {
            Ok(Some(end)) => self.apply_end(end),
            Ok(None) => {}
            Err(e) => {
                self.selection_rect = BoundingBox::ZERO;
                return Err(e);
            }
        }
        Ok(())
    }

    /// Drop the active gesture along with any live selection rectangle
    fn abort_gesture(&mut self) {
        self.gestures.abort();
        self.selection_rect = BoundingBox::ZERO;
    }

    /// Commit a move's replacement values. Everything is checked before
    /// anything lands; a rejected update drops the gesture and leaves the
    /// committed state as it was.
    fn apply_update(&mut self, update: GestureUpdate) -> EditorResult<()> {
        if update.handle.is_some_and(|handle| !handle.is_finite()) {
            self.abort_gesture();
            return Err(EditorError::NonFiniteHandle);
        }
        if let Some(points) = update.points {
            if let Err(e) = self.store.replace_points(points) {
                self.abort_gesture();
                return Err(e);
            }
        }
        if let Some(handle) = update.handle {
            self.handle = handle;
        }
        if let Some(rect) = update.selection_rect {
            self.selection_rect = rect;
        }
        Ok(())
    }

    fn apply_end(&mut self, end: GestureEnd) {
        if let Some(rect) = end.selection_rect {
            self.selection_rect = rect;
        }
        if let Some(selection) = end.selection {
            self.commit_selection(selection);
        }
    }

    /// Replace the selection; the handle is recomputed only when the set of
    /// selected indices actually changed
    fn commit_selection(&mut self, selection: Selection) {
        let changed = !self.selection.same_members(&selection);
        self.selection = selection;
        if changed {
            self.handle = HandlePose::from_selection(self.store.mesh(), &self.selection);
            debug!(selected = ?self.selection.selected_indices(), "selection changed");
        }
    }
}
